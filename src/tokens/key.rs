//! Variant value keys.
//!
//! Variant tables are keyed by strings, but callers select values with
//! strings, booleans and numbers. [`key_of`] is the single total mapping from
//! a scalar to its table key. `false` maps to `"false"` and `0` to `"0"`, so
//! falsy values still select their own branch.

use std::fmt;

/// A scalar a caller can pick for a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantScalar {
    /// A named value such as `"sm"` or `"primary"`.
    Key(String),
    Bool(bool),
    Number(f64),
}

impl VariantScalar {
    /// The variant-table key this scalar selects.
    pub fn key(&self) -> String {
        key_of(self)
    }
}

/// Stringify a scalar into a variant-table key.
pub fn key_of(value: &VariantScalar) -> String {
    match value {
        VariantScalar::Key(key) => key.clone(),
        VariantScalar::Bool(true) => "true".to_string(),
        VariantScalar::Bool(false) => "false".to_string(),
        VariantScalar::Number(n) => number_key(*n),
    }
}

/// Format a number the way JavaScript's `Number.prototype.toString` does,
/// so keys written in JSON (`"1e+21"`, `"1e-7"`) match numeric props.
fn number_key(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 and 0 share a key.
    if n == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits and the decimal point position.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exp.parse::<i32>().unwrap_or(0) + 1;
    let len = digits.len() as i32;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let exp = point - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.abs())
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

impl fmt::Display for VariantScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&key_of(self))
    }
}

impl From<&str> for VariantScalar {
    fn from(key: &str) -> Self {
        VariantScalar::Key(key.to_string())
    }
}

impl From<String> for VariantScalar {
    fn from(key: String) -> Self {
        VariantScalar::Key(key)
    }
}

impl From<bool> for VariantScalar {
    fn from(value: bool) -> Self {
        VariantScalar::Bool(value)
    }
}

impl From<f64> for VariantScalar {
    fn from(value: f64) -> Self {
        VariantScalar::Number(value)
    }
}

impl From<i32> for VariantScalar {
    fn from(value: i32) -> Self {
        VariantScalar::Number(f64::from(value))
    }
}

impl From<u32> for VariantScalar {
    fn from(value: u32) -> Self {
        VariantScalar::Number(f64::from(value))
    }
}
