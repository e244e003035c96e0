//! Variant resolution: caller props, per-variant lookup, compound rules.

pub mod compound;
pub mod resolve;
pub mod value;

pub use compound::CompoundMatcher;
pub use resolve::Resolver;
pub use value::{ClassOverrides, Props, VariantValue, INITIAL};
