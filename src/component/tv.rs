//! Building components and invoking them.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::component::slots::SlotClasses;
use crate::error::ConfigError;
use crate::merge::{finish, ClassMerge, Config, DedupMerge};
use crate::ordered_map::OrderedMap;
use crate::spec::model::{Specification, Variant, BASE_SLOT};
use crate::tokens::TokenSet;
use crate::variants::{CompoundMatcher, Props, Resolver};

/// Build a component with the default [`Config`].
pub fn tv(spec: Specification) -> Component {
    Component::new(spec)
}

/// Build a component with an explicit [`Config`].
pub fn tv_with_config(spec: Specification, config: Config) -> Component {
    Component::new(spec).with_config(config)
}

/// What one invocation of a component produces.
#[derive(Debug, Clone)]
pub enum Output {
    /// Single-region component: the final class string.
    Class(String),
    /// Multi-region component: one class function per slot.
    Slots(SlotClasses),
}

impl Output {
    pub fn as_class(&self) -> Option<&str> {
        match self {
            Output::Class(class) => Some(class.as_str()),
            Output::Slots(_) => None,
        }
    }

    pub fn into_slots(self) -> Option<SlotClasses> {
        match self {
            Output::Slots(slots) => Some(slots),
            Output::Class(_) => None,
        }
    }
}

/// A built component: a flattened specification plus the merge step.
///
/// Immutable once built and cheap to clone. Calls never mutate anything, so a
/// component can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct Component {
    spec: Arc<Specification>,
    config: Arc<Config>,
    merger: Arc<dyn ClassMerge>,
}

impl Component {
    /// Build a component, resolving the whole `extend` chain up front.
    pub fn new(spec: Specification) -> Self {
        let flat = spec.flatten();
        debug!(
            variants = flat.variants().len(),
            slots = flat.slots().len(),
            compound_variants = flat.compound_variants().len(),
            extend_depth = spec.extend_depth(),
            "built component"
        );
        Self {
            spec: Arc::new(flat),
            config: Arc::new(Config::default()),
            merger: Arc::new(DedupMerge),
        }
    }

    /// Build a component from a JSON specification object.
    pub fn from_json(spec: &Value) -> Result<Self, ConfigError> {
        Ok(Component::new(Specification::from_json(spec)?))
    }

    /// Build a component from JSON specification and config objects.
    pub fn from_json_with_config(spec: &Value, config: &Value) -> Result<Self, ConfigError> {
        let config = Config::from_json(config)?;
        Ok(Component::from_json(spec)?.with_config(config))
    }

    /// Replace the merge configuration (builder).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Replace the merge implementation (builder).
    pub fn with_merger(mut self, merger: impl ClassMerge + 'static) -> Self {
        self.merger = Arc::new(merger);
        self
    }

    /// Compose classes for `props`.
    pub fn call(&self, props: &Props) -> Output {
        let spec = self.spec.as_ref();

        if spec.variants().is_empty() && spec.slots().is_empty() {
            trace!("no variants or slots, passing classes through");
            let mut classes = self.base_tokens();
            classes.extend(props.overrides().tokens());
            return Output::Class(self.finish(&classes));
        }

        if !spec.slots().is_empty() {
            return Output::Slots(SlotClasses::compose(spec, props, &self.config, &self.merger));
        }

        let mut classes = self.base_tokens();
        classes.extend(Resolver::new(spec, props).resolve_all(None));
        classes.extend(CompoundMatcher::new(spec, props).tokens());
        classes.extend(props.overrides().tokens());
        Output::Class(self.finish(&classes))
    }

    /// The class string of a single-region component, `None` if it has slots.
    pub fn class(&self, props: &Props) -> Option<String> {
        match self.call(props) {
            Output::Class(class) => Some(class),
            Output::Slots(_) => None,
        }
    }

    /// The slot functions of a multi-region component, `None` if it has no slots.
    pub fn slots(&self, props: &Props) -> Option<SlotClasses> {
        self.call(props).into_slots()
    }

    /// Declared variant names, in declaration order.
    pub fn variant_keys(&self) -> Vec<&str> {
        self.spec.variants().keys().collect()
    }

    /// Base classes, inherited ones included.
    pub fn base(&self) -> Option<&TokenSet> {
        self.spec.base_classes()
    }

    pub fn variants(&self) -> &OrderedMap<Variant> {
        self.spec.variants()
    }

    /// Slot names as produced by [`Component::slots`]. Empty without slots.
    pub fn slot_names(&self) -> Vec<&str> {
        if self.spec.slots().is_empty() {
            return Vec::new();
        }
        let mut names = vec![BASE_SLOT];
        names.extend(self.spec.slots().keys().filter(|name| *name != BASE_SLOT));
        names
    }

    /// The flattened specification.
    pub fn specification(&self) -> &Specification {
        &self.spec
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn base_tokens(&self) -> Vec<String> {
        self.spec.base_classes().map(TokenSet::tokens).unwrap_or_default()
    }

    fn finish(&self, classes: &[String]) -> String {
        finish(classes, &self.config, self.merger.as_ref())
    }
}

impl From<&Component> for Specification {
    fn from(component: &Component) -> Self {
        component.specification().clone()
    }
}

impl From<Specification> for Component {
    fn from(spec: Specification) -> Self {
        Component::new(spec)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn component() -> Component {
        tv(Specification::new()
            .base("inline-flex")
            .variant("size", Variant::new().value("sm", "h-8").value("lg", "h-12"))
            .variant("ghost", Variant::new().value(true, "bg-transparent").value(false, "bg-white"))
            .compound(crate::spec::model::CompoundRule::new().when("ghost", true).class("border")))
    }

    proptest! {
        #[test]
        fn calls_are_pure(
            size in prop::sample::select(vec!["sm", "lg", "xl"]),
            ghost in prop::bool::ANY,
            md in prop::option::of(prop::sample::select(vec!["sm", "lg"])),
            extra in "[a-z]{1,4}( [a-z]{1,4}){0,2}",
        ) {
            let mut props = Props::new().set("ghost", ghost).class(extra.as_str());
            props = match md {
                Some(md) => props.responsive("size", [("initial", size), ("md", md)]),
                None => props.set("size", size),
            };

            let component = component();
            let first = component.class(&props);
            let second = component.class(&props);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.is_some());
        }
    }
}
