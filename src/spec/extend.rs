//! `extend`: merging an inherited specification into a derived one.
//!
//! The merge is one level deep. Each inherited table is combined with the
//! derived one at the key level; the classes stored under a key are never
//! combined token by token, the derived entry replaces the inherited one.
//!
//! | field              | merge                                             |
//! |--------------------|---------------------------------------------------|
//! | `base`             | parent tokens, then child tokens                  |
//! | `slots`            | union; shared slots concatenate parent then child |
//! | `variants`         | union of names; per value key child wins          |
//! | `defaultVariants`  | union; child wins                                 |
//! | `compoundVariants` | parent rules, then child rules                    |

use crate::spec::model::Specification;

impl Specification {
    /// Merge `parent` into `child`. Neither side's own `extend` is consulted;
    /// use [`Specification::flatten`] for whole chains.
    pub fn merge(parent: &Specification, child: &Specification) -> Specification {
        let base = match (&parent.base, &child.base) {
            (Some(p), Some(c)) => Some(p.concat(c)),
            (Some(p), None) => Some(p.clone()),
            (None, c) => c.clone(),
        };

        let mut slots = parent.slots.clone();
        for (name, classes) in child.slots.iter() {
            let merged = match slots.get(name) {
                Some(inherited) => inherited.concat(classes),
                None => classes.clone(),
            };
            slots.insert(name, merged);
        }

        let mut variants = parent.variants.clone();
        for (name, variant) in child.variants.iter() {
            match variants.get_mut(name) {
                Some(inherited) => {
                    for (key, classes) in variant.iter() {
                        inherited.insert(key, classes.clone());
                    }
                }
                None => {
                    variants.insert(name, variant.clone());
                }
            }
        }

        let mut default_variants = parent.default_variants.clone();
        for (name, value) in child.default_variants.iter() {
            default_variants.insert(name, value.clone());
        }

        let compound_variants = parent
            .compound_variants
            .iter()
            .chain(child.compound_variants.iter())
            .cloned()
            .collect();

        Specification {
            base,
            slots,
            variants,
            compound_variants,
            default_variants,
            extend: None,
        }
    }

    /// Resolve the whole `extend` chain, root ancestor first, into a single
    /// specification with no parent.
    pub fn flatten(&self) -> Specification {
        match self.parent() {
            Some(parent) => Specification::merge(&parent.flatten(), self),
            None => Specification {
                extend: None,
                ..self.clone()
            },
        }
    }
}
