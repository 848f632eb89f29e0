//! Built-in plugins forming the standard resolution chain.

mod default;
mod stack;

pub use default::DefaultPlugin;
pub use stack::{StackPlugin, StackView};
