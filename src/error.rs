//! Errors raised while building a component from a specification or props.
//!
//! Resolution itself never fails. Everything here is a configuration mistake
//! caught at construction time, before any class is composed.

use serde_json::Value;

/// Errors from loading a specification or props.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("The \"compoundVariants\" prop must be an array. Received: {received}")]
    CompoundVariantsNotSequence { received: &'static str },
    #[error("invalid `{field}`: expected {expected}, received {received}")]
    InvalidShape {
        field: String,
        expected: &'static str,
        received: &'static str,
    },
    #[error("invalid value for prop `{name}`: received {received}")]
    InvalidProp { name: String, received: &'static str },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ConfigError {
    pub(crate) fn shape(field: impl Into<String>, expected: &'static str, value: &Value) -> Self {
        ConfigError::InvalidShape {
            field: field.into(),
            expected,
            received: shape_of(value),
        }
    }
}

/// Name of a JSON value's shape, as reported in error messages.
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compound_error_names_received_shape() {
        let err = ConfigError::CompoundVariantsNotSequence { received: "object" };
        assert_eq!(
            err.to_string(),
            r#"The "compoundVariants" prop must be an array. Received: object"#
        );
    }

    #[test]
    fn invalid_shape_display() {
        let err = ConfigError::shape("slots.icon", "string or array", &json!(3));
        let msg = err.to_string();
        assert!(msg.contains("slots.icon"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn shape_names() {
        assert_eq!(shape_of(&json!(null)), "null");
        assert_eq!(shape_of(&json!(true)), "boolean");
        assert_eq!(shape_of(&json!(1)), "number");
        assert_eq!(shape_of(&json!("a")), "string");
        assert_eq!(shape_of(&json!([])), "array");
        assert_eq!(shape_of(&json!({})), "object");
    }
}
