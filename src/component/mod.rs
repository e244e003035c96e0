//! Components: the `tv` entry point, invocation, and slot composition.

pub mod slots;
pub mod tv;

pub use slots::{SlotClasses, SlotFn};
pub use tv::{tv, tv_with_config, Component, Output};
