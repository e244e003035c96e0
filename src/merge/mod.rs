//! Final merge step: configuration, the merge-function interface, plain joins.

pub mod config;
pub mod merger;

pub use config::Config;
pub use merger::{cx, finish, ClassMerge, DedupMerge};
