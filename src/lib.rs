//! # tailwind-variants
//!
//! Variant-driven class composition for utility-first CSS components.
//!
//! A component is described once by a [`Specification`]: base classes,
//! optional named slots, variant tables, compound rules, defaults, and an
//! optional parent to extend. Each call with a set of [`Props`] yields either
//! one class string or one class function per slot. Conflict resolution
//! between utility classes is left to a pluggable [`ClassMerge`].
//!
//! ```
//! use tailwind_variants::{tv, Props, Specification, Variant};
//!
//! let button = tv(Specification::new()
//!     .base("font-medium rounded")
//!     .variant("color", Variant::new().value("primary", "bg-blue-500").value("ghost", "bg-transparent"))
//!     .default_variant("color", "primary"));
//!
//! assert_eq!(button.class(&Props::new()).as_deref(), Some("font-medium rounded bg-blue-500"));
//! ```
//!
//! ## Modules
//!
//! - **[`tokens`]**: class tokenizer, token sets, value keys
//! - **[`spec`]**: specification model, `extend` merging, JSON loading
//! - **[`variants`]**: props, variant resolution, compound matching
//! - **[`merge`]**: merge configuration and the merge-function interface
//! - **[`component`]**: `tv`, components, slot composition
//! - **[`error`]**: configuration errors

// Foundation
pub mod error;
pub mod ordered_map;
pub mod tokens;

// Specification and resolution
pub mod spec;
pub mod variants;

// Output
pub mod component;
pub mod merge;

pub use component::{tv, tv_with_config, Component, Output, SlotClasses, SlotFn};
pub use error::ConfigError;
pub use merge::{cx, ClassMerge, Config, DedupMerge};
pub use spec::{ClassValue, CompoundRule, Condition, Specification, Variant};
pub use tokens::{key_of, TokenSet, VariantScalar};
pub use variants::{ClassOverrides, Props, VariantValue};
