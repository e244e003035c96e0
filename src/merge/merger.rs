//! The merge step that turns an ordered class list into final text.
//!
//! Conflict resolution between utility classes (knowing that `p-2` and
//! `p-4` clash) is not done here. It belongs to a [`ClassMerge`]
//! implementation supplied by the caller. The built-in [`DedupMerge`] only
//! drops exact duplicates.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

use crate::merge::config::Config;
use crate::tokens::tokenize;

/// Reduces an ordered list of class inputs to one class string.
///
/// Implementations must be idempotent: merging an already merged string
/// yields the same string. Later inputs win conflicts.
pub trait ClassMerge: fmt::Debug + Send + Sync {
    /// Merge `classes` (in priority order, last wins) using the opaque
    /// `config` from [`Config::tw_merge_config`].
    fn merge(&self, classes: &[String], config: Option<&Value>) -> String;
}

/// Default merger: removes exact duplicate classes, keeping the last occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupMerge;

impl ClassMerge for DedupMerge {
    fn merge(&self, classes: &[String], _config: Option<&Value>) -> String {
        let tokens: Vec<String> = classes.iter().flat_map(|c| tokenize(c)).collect();
        let mut seen = HashSet::with_capacity(tokens.len());
        let mut kept: Vec<&str> = tokens
            .iter()
            .rev()
            .filter(|token| seen.insert(token.as_str()))
            .map(String::as_str)
            .collect();
        kept.reverse();
        kept.join(" ")
    }
}

/// Plain concatenation: every input split on whitespace and joined with
/// single spaces. Empty inputs vanish; nothing is deduplicated.
pub fn cx<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .flat_map(|input| tokenize(input.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply the configured merge step to `classes`.
pub fn finish(classes: &[String], config: &Config, merger: &dyn ClassMerge) -> String {
    if config.tw_merge {
        merger.merge(classes, config.tw_merge_config.as_ref())
    } else {
        cx(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cx_joins_and_normalizes() {
        assert_eq!(cx(["a  b", "", "  c "]), "a b c");
        assert_eq!(cx(Vec::<String>::new()), "");
    }

    #[test]
    fn cx_keeps_duplicates() {
        assert_eq!(cx(["a", "a"]), "a a");
    }

    #[test]
    fn dedup_keeps_last_occurrence() {
        let merged = DedupMerge.merge(&strings(&["a b", "c", "a"]), None);
        assert_eq!(merged, "b c a");
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = DedupMerge.merge(&strings(&["x y x", "z y"]), None);
        let twice = DedupMerge.merge(&[once.clone()], None);
        assert_eq!(once, twice);
    }

    #[test]
    fn finish_respects_tw_merge_flag() {
        let classes = strings(&["a", "a"]);
        assert_eq!(finish(&classes, &Config::default(), &DedupMerge), "a");
        assert_eq!(
            finish(&classes, &Config::default().with_tw_merge(false), &DedupMerge),
            "a a"
        );
    }

    #[derive(Debug)]
    struct EchoConfig;

    impl ClassMerge for EchoConfig {
        fn merge(&self, _classes: &[String], config: Option<&Value>) -> String {
            config.map(Value::to_string).unwrap_or_default()
        }
    }

    #[test]
    fn finish_passes_config_through() {
        let config = Config::default().with_tw_merge_config(serde_json::json!({ "k": 1 }));
        assert_eq!(finish(&[], &config, &EchoConfig), r#"{"k":1}"#);
    }
}
