//! Caller-side variant values and props.

use serde_json::Value;
use tracing::trace;

use crate::error::{shape_of, ConfigError};
use crate::ordered_map::OrderedMap;
use crate::spec::json::{scalar, token_set};
use crate::tokens::{TokenSet, VariantScalar};

/// Condition name whose value replaces the variant's default instead of
/// producing prefixed classes.
pub const INITIAL: &str = "initial";

/// What a caller passes for one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantValue {
    /// A single value, e.g. `size = "sm"` or `disabled = true`.
    Plain(VariantScalar),
    /// A value per condition (breakpoint), e.g. `{ initial: "sm", md: "lg" }`.
    Responsive(OrderedMap<VariantScalar>),
    /// Explicitly no value: the variant contributes nothing, its default included.
    OptOut,
}

impl VariantValue {
    /// Build a responsive value from `(condition, value)` pairs.
    pub fn responsive<C, V>(entries: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<VariantScalar>,
    {
        VariantValue::Responsive(
            entries
                .into_iter()
                .map(|(condition, value)| (condition.into(), value.into()))
                .collect(),
        )
    }

    /// The `initial` entry of a responsive value.
    pub fn initial(&self) -> Option<&VariantScalar> {
        match self {
            VariantValue::Responsive(map) => map.get(INITIAL),
            _ => None,
        }
    }
}

impl From<VariantScalar> for VariantValue {
    fn from(value: VariantScalar) -> Self {
        VariantValue::Plain(value)
    }
}

impl From<&str> for VariantValue {
    fn from(key: &str) -> Self {
        VariantValue::Plain(key.into())
    }
}

impl From<String> for VariantValue {
    fn from(key: String) -> Self {
        VariantValue::Plain(key.into())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        VariantValue::Plain(value.into())
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        VariantValue::Plain(value.into())
    }
}

impl From<f64> for VariantValue {
    fn from(value: f64) -> Self {
        VariantValue::Plain(value.into())
    }
}

/// The `class` / `className` override pair, applied last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassOverrides {
    pub class: Option<TokenSet>,
    pub class_name: Option<TokenSet>,
}

impl ClassOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `class` (builder).
    pub fn class(mut self, classes: impl Into<TokenSet>) -> Self {
        self.class = Some(classes.into());
        self
    }

    /// Set `className` (builder).
    pub fn class_name(mut self, classes: impl Into<TokenSet>) -> Self {
        self.class_name = Some(classes.into());
        self
    }

    /// Override tokens, `class` first.
    pub fn tokens(&self) -> Vec<String> {
        self.class
            .iter()
            .chain(self.class_name.iter())
            .flat_map(TokenSet::tokens)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.class_name.is_none()
    }
}

/// Everything a caller passes when invoking a component.
///
/// Variant names the component does not declare are carried but ignored.
/// A variant missing from props uses its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: OrderedMap<VariantValue>,
    overrides: ClassOverrides,
    slot_overrides: OrderedMap<TokenSet>,
}

impl Props {
    /// Create empty props: every variant uses its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variant's value (builder).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Set a variant to a responsive value (builder).
    pub fn responsive<C, V>(
        self,
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (C, V)>,
    ) -> Self
    where
        C: Into<String>,
        V: Into<VariantScalar>,
    {
        self.set(name, VariantValue::responsive(entries))
    }

    /// Opt a variant out entirely, skipping its default (builder).
    pub fn opt_out(self, name: impl Into<String>) -> Self {
        self.set(name, VariantValue::OptOut)
    }

    /// Set the `class` override (builder).
    pub fn class(mut self, classes: impl Into<TokenSet>) -> Self {
        self.overrides.class = Some(classes.into());
        self
    }

    /// Set the `className` override (builder).
    pub fn class_name(mut self, classes: impl Into<TokenSet>) -> Self {
        self.overrides.class_name = Some(classes.into());
        self
    }

    /// Add override classes for one slot (builder). Applied before the slot
    /// function's own overrides.
    pub fn with_slot_class(mut self, slot: impl Into<String>, classes: impl Into<TokenSet>) -> Self {
        self.slot_overrides.insert(slot, classes.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&VariantValue> {
        self.values.get(name)
    }

    pub fn overrides(&self) -> &ClassOverrides {
        &self.overrides
    }

    pub fn slot_class(&self, slot: &str) -> Option<&TokenSet> {
        self.slot_overrides.get(slot)
    }

    /// Build props from a JSON object.
    ///
    /// `class` and `className` become overrides; `null` opts a variant out;
    /// strings, booleans and numbers are plain values; objects of scalars are
    /// responsive values. Any other entry (arrays, nested objects) cannot
    /// select a variant and is skipped like an unknown prop. `null` props as
    /// a whole means "no props".
    pub fn from_json(value: &Value) -> Result<Props, ConfigError> {
        let object = match value {
            Value::Null => return Ok(Props::new()),
            Value::Object(object) => object,
            other => return Err(ConfigError::shape("props", "object", other)),
        };

        let mut props = Props::new();
        for (name, entry) in object {
            match name.as_str() {
                "class" | "className" if entry.is_null() => {}
                "class" => props.overrides.class = Some(override_tokens(name, entry)?),
                "className" => props.overrides.class_name = Some(override_tokens(name, entry)?),
                _ => match variant_value(entry) {
                    Some(value) => {
                        props.values.insert(name.as_str(), value);
                    }
                    None => trace!(prop = name.as_str(), "skipped non-variant prop"),
                },
            }
        }
        Ok(props)
    }
}

fn override_tokens(name: &str, value: &Value) -> Result<TokenSet, ConfigError> {
    token_set(value, name).map_err(|_| ConfigError::InvalidProp {
        name: name.to_string(),
        received: shape_of(value),
    })
}

fn variant_value(value: &Value) -> Option<VariantValue> {
    match value {
        Value::Null => Some(VariantValue::OptOut),
        Value::Object(conditions) => {
            let mut responsive = OrderedMap::new();
            for (condition, entry) in conditions {
                if entry.is_null() {
                    continue;
                }
                responsive.insert(condition.as_str(), scalar(entry)?);
            }
            Some(VariantValue::Responsive(responsive))
        }
        other => scalar(other).map(VariantValue::Plain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_values_and_overrides() {
        let props = Props::new()
            .set("size", "sm")
            .set("disabled", true)
            .responsive("isBig", [("initial", false), ("md", true)])
            .opt_out("color")
            .class("mt-2")
            .class_name("mb-2");

        assert_eq!(props.get("size"), Some(&VariantValue::Plain("sm".into())));
        assert_eq!(props.get("disabled"), Some(&VariantValue::Plain(true.into())));
        assert_eq!(props.get("color"), Some(&VariantValue::OptOut));
        assert_eq!(
            props.get("isBig").and_then(VariantValue::initial),
            Some(&VariantScalar::Bool(false))
        );
        assert_eq!(props.overrides().tokens(), vec!["mt-2", "mb-2"]);
        assert!(props.get("missing").is_none());
    }

    #[test]
    fn overrides_class_before_class_name() {
        let overrides = ClassOverrides::new().class_name("b c").class("a");
        assert_eq!(overrides.tokens(), vec!["a", "b", "c"]);
        assert!(ClassOverrides::new().is_empty());
    }

    #[test]
    fn slot_overrides() {
        let props = Props::new().with_slot_class("icon", "h-8");
        assert_eq!(props.slot_class("icon"), Some(&TokenSet::from("h-8")));
        assert!(props.slot_class("base").is_none());
    }

    #[test]
    fn from_json_shapes() {
        let props = Props::from_json(&json!({
            "size": "sm",
            "disabled": false,
            "cols": 0,
            "color": null,
            "isBig": { "initial": "false", "md": "true" },
            "class": "mt-2",
            "className": ["mb-2"]
        }))
        .unwrap();

        assert_eq!(props.get("size"), Some(&VariantValue::Plain("sm".into())));
        assert_eq!(props.get("disabled"), Some(&VariantValue::Plain(false.into())));
        assert_eq!(props.get("cols"), Some(&VariantValue::Plain(VariantScalar::Number(0.0))));
        assert_eq!(props.get("color"), Some(&VariantValue::OptOut));
        assert_eq!(
            props.get("isBig"),
            Some(&VariantValue::responsive([("initial", "false"), ("md", "true")]))
        );
        assert_eq!(props.overrides().tokens(), vec!["mt-2", "mb-2"]);
    }

    #[test]
    fn from_json_null_is_empty() {
        assert_eq!(Props::from_json(&json!(null)).unwrap(), Props::new());
    }

    #[test]
    fn from_json_skips_non_variant_props() {
        let props = Props::from_json(&json!({
            "size": "sm",
            "items": [1, 2],
            "style": { "margin": { "top": 1 } }
        }))
        .unwrap();

        assert_eq!(props, Props::new().set("size", "sm"));
        assert!(props.get("items").is_none());
        assert!(props.get("style").is_none());
    }

    #[test]
    fn from_json_rejects_bad_class_overrides() {
        let err = Props::from_json(&json!({ "class": 3 })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidProp {
                name: "class".into(),
                received: "number",
            }
        );

        let err = Props::from_json(&json!({ "className": ["a", { "b": 1 }] })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProp { received: "array", .. }));
    }
}
