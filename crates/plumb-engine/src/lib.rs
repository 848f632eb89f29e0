//! Plugin chain and attribute resolution engine.
//!
//! Resolution runs a declaratively-authored [`plumb_core::Document`]
//! through an ordered chain of [`Plugin`]s:
//! - [`PluginRegistry`] holds the process-wide registration order and
//!   produces one fresh instance of each plugin type per document.
//! - [`Resolver`] drives the multi-phase hook sequence for every node and
//!   attribute, short-circuiting on [`plumb_core::ResolutionResult::Handled`].
//! - [`plugins`] ships the built-in chain: the mandatory default catch-all
//!   and the stack container handler.

mod plugin;
pub mod plugins;
mod registry;
mod resolver;

pub use plugin::{Plugin, ResolveCx};
pub use registry::PluginRegistry;
pub use resolver::{FailurePolicy, Resolved, Resolver};
