//! Compound variant matching.
//!
//! Rules are tested in declaration order against the *effective* value of
//! each variant, and every matching rule contributes. Effective values are
//! never responsive maps:
//!
//! - plain caller value, else
//! - the responsive value's `initial` entry, else
//! - the declared default.
//!
//! An opted-out variant has no effective value, so any rule that names it
//! fails.

use tracing::trace;

use crate::ordered_map::OrderedMap;
use crate::spec::model::{ClassValue, CompoundRule, Specification, BASE_SLOT};
use crate::tokens::{join_slot_maps, key_of, SlotTokens, VariantScalar};
use crate::variants::value::{Props, VariantValue};

/// Matches compound rules for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompoundMatcher<'a> {
    rules: &'a [CompoundRule],
    defaults: &'a OrderedMap<VariantScalar>,
    props: &'a Props,
}

impl<'a> CompoundMatcher<'a> {
    pub fn new(spec: &'a Specification, props: &'a Props) -> Self {
        Self {
            rules: spec.compound_variants(),
            defaults: spec.default_variants(),
            props,
        }
    }

    /// Effective value key of `name`, or `None` if it has none.
    pub fn effective_key(&self, name: &str) -> Option<String> {
        match self.props.get(name) {
            Some(VariantValue::Plain(value)) => Some(key_of(value)),
            Some(VariantValue::OptOut) => None,
            Some(responsive @ VariantValue::Responsive(_)) => responsive
                .initial()
                .or_else(|| self.defaults.get(name))
                .map(key_of),
            None => self.defaults.get(name).map(key_of),
        }
    }

    /// Whether every condition of `rule` holds. A rule without conditions matches.
    pub fn matches(&self, rule: &CompoundRule) -> bool {
        rule.conditions().iter().all(|(name, condition)| {
            self.effective_key(name)
                .is_some_and(|key| condition.accepts(&key))
        })
    }

    /// Matching rules, in declaration order.
    pub fn matching(&self) -> impl Iterator<Item = &'a CompoundRule> + '_ {
        self.rules.iter().filter(move |rule| self.matches(rule))
    }

    /// Whole-component classes of all matching rules, for the single-region output.
    pub fn tokens(&self) -> Vec<String> {
        self.matching()
            .flat_map(CompoundRule::classes)
            .filter_map(|classes| match classes {
                ClassValue::Tokens(set) => Some(set.tokens()),
                ClassValue::Slots(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Classes of all matching rules, partitioned by slot. Whole-component
    /// classes go to the `base` slot.
    pub fn tokens_by_slot(&self) -> SlotTokens {
        let by_slot = self
            .matching()
            .flat_map(CompoundRule::classes)
            .fold(SlotTokens::new(), |acc, classes| {
                join_slot_maps(acc, &slot_tokens(classes))
            });
        trace!(slots = by_slot.len(), "matched compound variants");
        by_slot
    }
}

fn slot_tokens(classes: &ClassValue) -> SlotTokens {
    match classes {
        ClassValue::Tokens(set) => [(BASE_SLOT, set.tokens())].into_iter().collect(),
        ClassValue::Slots(slots) => slots.iter().map(|(slot, set)| (slot, set.tokens())).collect(),
    }
}
