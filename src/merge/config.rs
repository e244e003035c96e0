//! Top-level configuration for the final merge step.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Configuration passed to [`tv_with_config`](crate::component::tv_with_config).
///
/// Deserializes from `{ "twMerge": bool, "twMergeConfig": any }`; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Run the conflict-resolving merge. When `false`, classes are only
    /// whitespace-joined.
    pub tw_merge: bool,
    /// Opaque settings handed unchanged to the merge implementation.
    pub tw_merge_config: Option<Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tw_merge: true,
            tw_merge_config: None,
        }
    }
}

impl Config {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the merge step (builder).
    pub fn with_tw_merge(mut self, enabled: bool) -> Self {
        self.tw_merge = enabled;
        self
    }

    /// Set the opaque merge settings (builder).
    pub fn with_tw_merge_config(mut self, config: Value) -> Self {
        self.tw_merge_config = Some(config);
        self
    }

    /// Load from a JSON object. `null` gives the default config.
    pub fn from_json(value: &Value) -> Result<Config, ConfigError> {
        let object = match value {
            Value::Null => return Ok(Config::default()),
            Value::Object(object) => object,
            other => return Err(ConfigError::shape("config", "object", other)),
        };
        if let Some(tw_merge) = object.get("twMerge").filter(|v| !v.is_boolean()) {
            return Err(ConfigError::shape("twMerge", "boolean", tw_merge));
        }
        serde_json::from_value(value.clone())
            .map_err(|err| ConfigError::InvalidConfig(err.to_string()))
    }
}
