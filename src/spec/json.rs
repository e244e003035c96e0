//! Loading a [`Specification`] from a JSON object literal.
//!
//! Accepts the object shape used by hand-written component definitions:
//!
//! ```json
//! {
//!   "base": "font-semibold",
//!   "slots": { "icon": "h-4 w-4" },
//!   "variants": {
//!     "size": { "sm": "text-sm", "lg": { "base": "text-lg", "icon": "h-6" } }
//!   },
//!   "compoundVariants": [{ "size": ["sm", "md"], "class": "px-2" }],
//!   "defaultVariants": { "size": "sm" },
//!   "extend": { "base": "inline-flex" }
//! }
//! ```
//!
//! Object key order is significant and preserved. Unknown top-level keys are
//! ignored. Every shape problem is reported before a component is built.

use serde_json::{Map, Value};

use crate::error::{shape_of, ConfigError};
use crate::ordered_map::OrderedMap;
use crate::spec::model::{ClassValue, CompoundRule, Condition, Specification, Variant};
use crate::tokens::{TokenSet, VariantScalar};

const TOKEN_SET: &str = "string or array of strings";

impl Specification {
    /// Build a specification from a JSON object.
    pub fn from_json(value: &Value) -> Result<Specification, ConfigError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::shape("specification", "object", value))?;

        let mut spec = Specification::new();

        if let Some(base) = non_null(object, "base") {
            spec.base = Some(token_set(base, "base")?);
        }

        if let Some(slots) = non_null(object, "slots") {
            spec.slots = slot_map(slots, "slots")?;
        }

        if let Some(variants) = non_null(object, "variants") {
            let table = variants
                .as_object()
                .ok_or_else(|| ConfigError::shape("variants", "object", variants))?;
            for (name, values) in table {
                spec.variants
                    .insert(name.as_str(), variant(values, &format!("variants.{name}"))?);
            }
        }

        if let Some(rules) = non_null(object, "compoundVariants") {
            let rules = rules
                .as_array()
                .ok_or(ConfigError::CompoundVariantsNotSequence {
                    received: shape_of(rules),
                })?;
            for (i, rule) in rules.iter().enumerate() {
                spec.compound_variants
                    .push(compound_rule(rule, &format!("compoundVariants[{i}]"))?);
            }
        }

        if let Some(defaults) = non_null(object, "defaultVariants") {
            let table = defaults
                .as_object()
                .ok_or_else(|| ConfigError::shape("defaultVariants", "object", defaults))?;
            for (name, value) in table {
                if value.is_null() {
                    continue;
                }
                let scalar = scalar(value).ok_or_else(|| {
                    ConfigError::shape(
                        format!("defaultVariants.{name}"),
                        "string, boolean or number",
                        value,
                    )
                })?;
                spec.default_variants.insert(name.as_str(), scalar);
            }
        }

        if let Some(parent) = non_null(object, "extend") {
            spec.extend = Some(Box::new(Specification::from_json(parent)?));
        }

        Ok(spec)
    }
}

/// Convert a JSON scalar into a variant scalar. Objects, arrays and null are not scalars.
pub(crate) fn scalar(value: &Value) -> Option<VariantScalar> {
    match value {
        Value::String(s) => Some(VariantScalar::Key(s.clone())),
        Value::Bool(b) => Some(VariantScalar::Bool(*b)),
        Value::Number(n) => n.as_f64().map(VariantScalar::Number),
        _ => None,
    }
}

/// Parse a string or array of strings into a [`TokenSet`].
pub(crate) fn token_set(value: &Value, field: &str) -> Result<TokenSet, ConfigError> {
    match value {
        Value::String(text) => Ok(TokenSet::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::shape(field, TOKEN_SET, item))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TokenSet::List),
        other => Err(ConfigError::shape(field, TOKEN_SET, other)),
    }
}

fn non_null<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

fn slot_map(value: &Value, field: &str) -> Result<OrderedMap<TokenSet>, ConfigError> {
    let table = value
        .as_object()
        .ok_or_else(|| ConfigError::shape(field, "object", value))?;
    let mut slots = OrderedMap::new();
    for (slot, classes) in table {
        if classes.is_null() {
            continue;
        }
        slots.insert(slot.as_str(), token_set(classes, &format!("{field}.{slot}"))?);
    }
    Ok(slots)
}

fn class_value(value: &Value, field: &str) -> Result<ClassValue, ConfigError> {
    match value {
        Value::Object(_) => slot_map(value, field).map(ClassValue::Slots),
        other => token_set(other, field).map(ClassValue::Tokens),
    }
}

fn variant(value: &Value, field: &str) -> Result<Variant, ConfigError> {
    let table = value
        .as_object()
        .ok_or_else(|| ConfigError::shape(field, "object", value))?;
    let mut variant = Variant::new();
    for (key, classes) in table {
        if classes.is_null() {
            continue;
        }
        variant.insert(key.as_str(), class_value(classes, &format!("{field}.{key}"))?);
    }
    Ok(variant)
}

fn compound_rule(value: &Value, field: &str) -> Result<CompoundRule, ConfigError> {
    let object = value
        .as_object()
        .ok_or_else(|| ConfigError::shape(field, "object", value))?;
    let mut rule = CompoundRule::new();
    for (key, entry) in object {
        let path = format!("{field}.{key}");
        match key.as_str() {
            "class" | "className" if entry.is_null() => {}
            "class" => rule.set_class(class_value(entry, &path)?),
            "className" => rule.set_class_name(class_value(entry, &path)?),
            _ => rule.set_condition(key.as_str(), condition(entry, &path)?),
        }
    }
    Ok(rule)
}

fn condition(value: &Value, field: &str) -> Result<Condition, ConfigError> {
    const EXPECTED: &str = "scalar or array of scalars";
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| scalar(item).ok_or_else(|| ConfigError::shape(field, EXPECTED, item)))
            .collect::<Result<Vec<_>, _>>()
            .map(Condition::AnyOf),
        other => scalar(other)
            .map(Condition::Is)
            .ok_or_else(|| ConfigError::shape(field, EXPECTED, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_full_shape_in_declaration_order() {
        let spec = Specification::from_json(&json!({
            "base": "font-semibold",
            "slots": { "icon": "h-4 w-4", "label": ["text-sm", "truncate"] },
            "variants": {
                "size": { "sm": "text-sm", "lg": { "base": "text-lg", "icon": "h-6" } },
                "color": { "red": "text-red-500" }
            },
            "compoundVariants": [{ "size": ["sm", "lg"], "color": "red", "class": "px-2" }],
            "defaultVariants": { "size": "sm" }
        }))
        .unwrap();

        assert_eq!(spec.base_classes(), Some(&TokenSet::from("font-semibold")));
        assert_eq!(spec.slots().keys().collect::<Vec<_>>(), vec!["icon", "label"]);
        assert_eq!(spec.variants().keys().collect::<Vec<_>>(), vec!["size", "color"]);
        assert!(matches!(
            spec.variants().get("size").and_then(|v| v.get("lg")),
            Some(ClassValue::Slots(_))
        ));

        let rule = &spec.compound_variants()[0];
        assert_eq!(
            rule.conditions().get("size"),
            Some(&Condition::AnyOf(vec!["sm".into(), "lg".into()]))
        );
        assert_eq!(rule.conditions().get("color"), Some(&Condition::Is("red".into())));
        assert_eq!(spec.default_variants().get("size"), Some(&"sm".into()));
    }

    #[test]
    fn boolean_and_numeric_conditions() {
        let spec = Specification::from_json(&json!({
            "compoundVariants": [{ "disabled": true, "cols": 0, "className": "opacity-50" }]
        }))
        .unwrap();
        let rule = &spec.compound_variants()[0];
        assert!(rule.conditions().get("disabled").unwrap().accepts("true"));
        assert!(rule.conditions().get("cols").unwrap().accepts("0"));
        assert_eq!(rule.classes().count(), 1);
    }

    #[test]
    fn compound_variants_must_be_array() {
        let err = Specification::from_json(&json!({
            "variants": { "size": { "sm": "a" } },
            "compoundVariants": { "size": "sm" }
        }))
        .unwrap_err();
        assert_eq!(err, ConfigError::CompoundVariantsNotSequence { received: "object" });

        let err = Specification::from_json(&json!({ "compoundVariants": "nope" })).unwrap_err();
        assert_eq!(err, ConfigError::CompoundVariantsNotSequence { received: "string" });
    }

    #[test]
    fn null_fields_are_absent() {
        let spec = Specification::from_json(&json!({
            "base": null,
            "compoundVariants": null,
            "variants": { "size": { "sm": null, "lg": "text-lg" } }
        }))
        .unwrap();
        assert!(spec.base_classes().is_none());
        assert!(spec.compound_variants().is_empty());
        assert_eq!(
            spec.variants().get("size").unwrap().keys().collect::<Vec<_>>(),
            vec!["lg"]
        );
    }

    #[test]
    fn nested_extend() {
        let spec = Specification::from_json(&json!({
            "base": "c",
            "extend": { "base": "b", "extend": { "base": "a" } }
        }))
        .unwrap();
        assert_eq!(spec.extend_depth(), 2);
        assert_eq!(spec.flatten().base_classes().unwrap().tokens(), vec!["a", "b", "c"]);
    }

    #[test]
    fn shape_errors_name_the_field() {
        let err = Specification::from_json(&json!({ "slots": { "icon": 3 } })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidShape {
                field: "slots.icon".into(),
                expected: TOKEN_SET,
                received: "number",
            }
        );

        let err = Specification::from_json(&json!({ "base": ["a", 1] })).unwrap_err();
        assert!(err.to_string().contains("`base`"));

        let err = Specification::from_json(&json!([])).unwrap_err();
        assert!(err.to_string().contains("specification"));

        let err = Specification::from_json(&json!({
            "compoundVariants": [{ "size": { "nested": true } }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("compoundVariants[0].size"));
    }
}
