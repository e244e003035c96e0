//! Specification data model: base, slots, variants, compound rules, defaults.
//!
//! A [`Specification`] is built once per component definition with the
//! builder methods below (or loaded from JSON, see [`crate::spec::json`]) and
//! is never mutated after a component is created from it.

use crate::ordered_map::OrderedMap;
use crate::tokens::{key_of, TokenSet, VariantScalar};

/// Name of the implicit slot seeded from [`Specification::base`].
pub const BASE_SLOT: &str = "base";

/// Classes registered for one variant value or one compound rule.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Whole-component classes. In the slots path these land in the `base` slot.
    Tokens(TokenSet),
    /// Classes per slot name.
    Slots(OrderedMap<TokenSet>),
}

impl ClassValue {
    /// Build a per-slot class value.
    pub fn slots<S, T>(entries: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<TokenSet>,
    {
        ClassValue::Slots(
            entries
                .into_iter()
                .map(|(slot, classes)| (slot.into(), classes.into()))
                .collect(),
        )
    }
}

impl From<TokenSet> for ClassValue {
    fn from(classes: TokenSet) -> Self {
        ClassValue::Tokens(classes)
    }
}

/// One variant axis: value key to classes.
///
/// Keys are stored as strings; booleans and numbers go through [`key_of`],
/// so `.value(false, ..)` registers the `"false"` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    values: OrderedMap<ClassValue>,
}

impl Variant {
    /// Create an empty variant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register whole-component classes for a value (builder).
    pub fn value(mut self, key: impl Into<VariantScalar>, classes: impl Into<TokenSet>) -> Self {
        self.values
            .insert(key_of(&key.into()), ClassValue::Tokens(classes.into()));
        self
    }

    /// Register per-slot classes for a value (builder).
    pub fn slot_value<S, T>(
        mut self,
        key: impl Into<VariantScalar>,
        slots: impl IntoIterator<Item = (S, T)>,
    ) -> Self
    where
        S: Into<String>,
        T: Into<TokenSet>,
    {
        self.values
            .insert(key_of(&key.into()), ClassValue::slots(slots));
        self
    }

    /// Register an already-built class value under a raw key.
    pub fn insert(&mut self, key: impl Into<String>, classes: ClassValue) -> Option<ClassValue> {
        self.values.insert(key, classes)
    }

    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Value keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.values.iter()
    }
}

/// The accepted value(s) for one compound-rule condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The effective value must be exactly this one.
    Is(VariantScalar),
    /// The effective value must be one of these.
    AnyOf(Vec<VariantScalar>),
}

impl Condition {
    /// Whether an effective value key satisfies this condition.
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            Condition::Is(expected) => key_of(expected) == key,
            Condition::AnyOf(accepted) => accepted.iter().any(|v| key_of(v) == key),
        }
    }
}

/// Extra classes applied when a combination of variant values holds.
///
/// A rule with no conditions always matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundRule {
    conditions: OrderedMap<Condition>,
    class: Option<ClassValue>,
    class_name: Option<ClassValue>,
}

impl CompoundRule {
    /// Create an unconditional rule with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `variant` to equal `value` (builder).
    pub fn when(mut self, variant: impl Into<String>, value: impl Into<VariantScalar>) -> Self {
        self.conditions
            .insert(variant, Condition::Is(value.into()));
        self
    }

    /// Require `variant` to be any of `values` (builder).
    pub fn when_any<V: Into<VariantScalar>>(
        mut self,
        variant: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let accepted = values.into_iter().map(Into::into).collect();
        self.conditions
            .insert(variant, Condition::AnyOf(accepted));
        self
    }

    /// Set the rule's `class` to whole-component classes (builder).
    pub fn class(mut self, classes: impl Into<TokenSet>) -> Self {
        self.class = Some(ClassValue::Tokens(classes.into()));
        self
    }

    /// Set the rule's `class` to per-slot classes (builder).
    pub fn slot_class<S, T>(mut self, slots: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<TokenSet>,
    {
        self.class = Some(ClassValue::slots(slots));
        self
    }

    /// Set the rule's `className` alias (builder). Applied after `class`.
    pub fn class_name(mut self, classes: impl Into<TokenSet>) -> Self {
        self.class_name = Some(ClassValue::Tokens(classes.into()));
        self
    }

    /// Set the rule's `className` alias to per-slot classes (builder).
    pub fn slot_class_name<S, T>(mut self, slots: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<TokenSet>,
    {
        self.class_name = Some(ClassValue::slots(slots));
        self
    }

    pub(crate) fn set_condition(&mut self, variant: impl Into<String>, condition: Condition) {
        self.conditions.insert(variant, condition);
    }

    pub(crate) fn set_class(&mut self, classes: ClassValue) {
        self.class = Some(classes);
    }

    pub(crate) fn set_class_name(&mut self, classes: ClassValue) {
        self.class_name = Some(classes);
    }

    pub fn conditions(&self) -> &OrderedMap<Condition> {
        &self.conditions
    }

    /// The rule's class values, `class` first, then `className`.
    pub fn classes(&self) -> impl Iterator<Item = &ClassValue> {
        self.class.iter().chain(self.class_name.iter())
    }
}

/// A component definition: base classes, slots, variants, compound rules,
/// default variant values, and an optional parent to extend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    pub(crate) base: Option<TokenSet>,
    pub(crate) slots: OrderedMap<TokenSet>,
    pub(crate) variants: OrderedMap<Variant>,
    pub(crate) compound_variants: Vec<CompoundRule>,
    pub(crate) default_variants: OrderedMap<VariantScalar>,
    pub(crate) extend: Option<Box<Specification>>,
}

impl Specification {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base classes (builder).
    pub fn base(mut self, classes: impl Into<TokenSet>) -> Self {
        self.base = Some(classes.into());
        self
    }

    /// Declare a slot with its own base classes (builder).
    pub fn slot(mut self, name: impl Into<String>, classes: impl Into<TokenSet>) -> Self {
        self.slots.insert(name, classes.into());
        self
    }

    /// Declare a variant axis (builder). Re-declaring a name replaces it.
    pub fn variant(mut self, name: impl Into<String>, variant: Variant) -> Self {
        self.variants.insert(name, variant);
        self
    }

    /// Append a compound rule (builder).
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Set the default value of a variant (builder).
    pub fn default_variant(
        mut self,
        name: impl Into<String>,
        value: impl Into<VariantScalar>,
    ) -> Self {
        self.default_variants.insert(name, value.into());
        self
    }

    /// Inherit from `parent` (builder). The parent is merged in when a
    /// component is built.
    pub fn extend(mut self, parent: impl Into<Specification>) -> Self {
        self.extend = Some(Box::new(parent.into()));
        self
    }

    /// Base classes, if any. For a built component this includes inherited classes.
    pub fn base_classes(&self) -> Option<&TokenSet> {
        self.base.as_ref()
    }

    pub fn slots(&self) -> &OrderedMap<TokenSet> {
        &self.slots
    }

    pub fn variants(&self) -> &OrderedMap<Variant> {
        &self.variants
    }

    pub fn compound_variants(&self) -> &[CompoundRule] {
        &self.compound_variants
    }

    pub fn default_variants(&self) -> &OrderedMap<VariantScalar> {
        &self.default_variants
    }

    /// The specification this one extends, if any.
    pub fn parent(&self) -> Option<&Specification> {
        self.extend.as_deref()
    }

    /// Number of `extend` levels above this specification.
    pub fn extend_depth(&self) -> usize {
        self.parent().map_or(0, |parent| 1 + parent.extend_depth())
    }
}
