//! Component specifications: data model, `extend` merging, JSON loading.

pub mod extend;
pub mod json;
pub mod model;

pub use model::{ClassValue, CompoundRule, Condition, Specification, Variant, BASE_SLOT};
