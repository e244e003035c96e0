//! Token utilities: class tokenizer, token sets, value keys, slot-map joins.

pub mod key;
pub mod set;
pub mod tokenizer;

pub use key::{key_of, VariantScalar};
pub use set::TokenSet;
pub use tokenizer::{normalize_whitespace, tokenize};

use crate::ordered_map::OrderedMap;

/// Per-slot token lists, in slot first-seen order.
pub type SlotTokens = OrderedMap<Vec<String>>;

/// Shallow merge of two slot maps: for slots present in both, `right`'s
/// tokens are appended after `left`'s. Slots only in `right` are added at
/// the end.
pub fn join_slot_maps(left: SlotTokens, right: &SlotTokens) -> SlotTokens {
    let mut joined = left;
    for (slot, tokens) in right.iter() {
        joined.entry_or_default(slot).extend(tokens.iter().cloned());
    }
    joined
}
