//! Slot composition for multi-region components.
//!
//! Every slot gets one [`SlotFn`]. The slot set is `base` followed by the
//! declared slots. For each slot the classes are, in order:
//!
//! 1. `base` classes (the `base` slot only), then the slot's own classes
//! 2. each declared variant's classes for this slot, in declaration order
//! 3. matching compound rule classes for this slot
//! 4. per-slot overrides from the props
//! 5. the slot function's own `class` / `className`, given at call time

use std::iter;
use std::sync::Arc;

use tracing::trace;

use crate::merge::{finish, ClassMerge, Config};
use crate::ordered_map::OrderedMap;
use crate::spec::model::{Specification, BASE_SLOT};
use crate::tokens::TokenSet;
use crate::variants::{ClassOverrides, CompoundMatcher, Props, Resolver};

/// The class function of one slot, bound to the props it was composed with.
#[derive(Debug, Clone)]
pub struct SlotFn {
    name: String,
    tokens: Vec<String>,
    config: Arc<Config>,
    merger: Arc<dyn ClassMerge>,
}

impl SlotFn {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Final classes for this slot with local `overrides` applied last.
    pub fn call(&self, overrides: &ClassOverrides) -> String {
        let mut classes = self.tokens.clone();
        classes.extend(overrides.tokens());
        finish(&classes, &self.config, self.merger.as_ref())
    }

    /// Final classes for this slot, without local overrides.
    pub fn class(&self) -> String {
        self.call(&ClassOverrides::default())
    }
}

/// Slot name to slot function, `base` first.
#[derive(Debug, Clone, Default)]
pub struct SlotClasses {
    slots: OrderedMap<SlotFn>,
}

impl SlotClasses {
    pub(crate) fn compose(
        spec: &Specification,
        props: &Props,
        config: &Arc<Config>,
        merger: &Arc<dyn ClassMerge>,
    ) -> SlotClasses {
        let resolver = Resolver::new(spec, props);
        let compound = CompoundMatcher::new(spec, props).tokens_by_slot();

        let mut slots = OrderedMap::new();
        for name in iter::once(BASE_SLOT).chain(spec.slots().keys()) {
            if slots.contains_key(name) {
                continue;
            }

            let mut tokens = Vec::new();
            if name == BASE_SLOT {
                tokens.extend(spec.base_classes().map(TokenSet::tokens).unwrap_or_default());
            }
            if let Some(own) = spec.slots().get(name) {
                tokens.extend(own.tokens());
            }
            tokens.extend(resolver.resolve_all(Some(name)));
            if let Some(matched) = compound.get(name) {
                tokens.extend(matched.iter().cloned());
            }
            if let Some(extra) = props.slot_class(name) {
                tokens.extend(extra.tokens());
            }

            trace!(slot = name, tokens = tokens.len(), "composed slot");
            slots.insert(
                name,
                SlotFn {
                    name: name.to_string(),
                    tokens,
                    config: Arc::clone(config),
                    merger: Arc::clone(merger),
                },
            );
        }
        SlotClasses { slots }
    }

    pub fn get(&self, slot: &str) -> Option<&SlotFn> {
        self.slots.get(slot)
    }

    /// Final classes of `slot` without local overrides.
    pub fn class(&self, slot: &str) -> Option<String> {
        self.get(slot).map(SlotFn::class)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotFn)> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
