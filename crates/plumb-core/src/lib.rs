//! Core types for the plumb layout resolver.
//!
//! This crate provides the foundational types shared by the resolution
//! engine and the ranking engine:
//! - The declarative element tree: [`Document`], [`Node`], [`NodeId`], [`Value`]
//! - Directional alignment keywords: [`Gravity`], [`Axis`]
//! - Handler chain control flow: [`ResolutionResult`]
//! - The view-layer boundary: [`View`], [`ViewCatalog`], [`ViewRegistry`]
//! - Failures and non-fatal warnings: [`ResolveError`], [`Warning`]

mod error;
mod gravity;
mod node;
mod resolution;
mod view;
mod warning;

pub use error::ResolveError;
pub use gravity::{Axis, Gravity};
pub use node::{Document, Node, NodeId, Value};
pub use resolution::ResolutionResult;
pub use view::{View, ViewCatalog, ViewCtor, ViewId, ViewRegistry};
pub use warning::Warning;
