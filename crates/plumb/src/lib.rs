//! Declarative layout resolution.
//!
//! `plumb` turns a declaratively authored element tree into configured
//! visual objects by running it through an ordered plugin chain:
//!
//! - [`Document`] is the arena-backed element tree built by a parse layer.
//! - [`PluginRegistry`] / [`Resolver`] drive the multi-phase resolution,
//!   one fresh plugin chain per document.
//! - [`Gravity`] packs both directional alignment axes into one byte and
//!   inherits unset axes from ancestors.
//! - The layout crate ranks stack siblings into distinct compression
//!   resistances and injects gravity spacers; results surface per
//!   container as an [`Arrangement`].
//!
//! The engine never renders. The render layer supplies element
//! constructors through a [`ViewCatalog`] and receives the configured
//! [`View`]s and arrangements back in a [`Resolved`] session result.
//!
//! ```
//! use std::sync::Arc;
//! use plumb::{Document, PluginRegistry, Resolver, ViewCatalog};
//! # use plumb::{ResolutionResult, View};
//! # #[derive(Default)]
//! # struct Label;
//! # impl View for Label {
//! #     fn kind(&self) -> &str { "label" }
//! #     fn apply_attribute(&mut self, _: &str, _: &str) -> ResolutionResult {
//! #         ResolutionResult::Handled
//! #     }
//! #     fn as_any(&self) -> &dyn std::any::Any { self }
//! #     fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
//! # }
//!
//! let catalog = Arc::new(ViewCatalog::new().with("label", || Box::new(Label::default())));
//! let registry = PluginRegistry::with_defaults(catalog);
//!
//! let mut doc = Document::new("row");
//! doc.set_attribute(doc.root(), "gravity", "bottom right");
//! let label = doc.add_child(doc.root(), "label");
//! doc.set_attribute(label, "text", "hello");
//!
//! let resolved = Resolver::new(&registry).resolve(&mut doc)?;
//! assert!(resolved.arrangements.contains_key(&doc.root()));
//! # Ok::<(), plumb::ResolveError>(())
//! ```

pub use plumb_core::{
    Axis, Document, Gravity, Node, NodeId, ResolutionResult, ResolveError, Value, View,
    ViewCatalog, ViewCtor, ViewId, ViewRegistry, Warning,
};
pub use plumb_engine::{
    plugins::{DefaultPlugin, StackPlugin, StackView},
    FailurePolicy, Plugin, PluginRegistry, Resolved, ResolveCx, Resolver,
};
pub use plumb_layout::{
    arrange, inferred_cross_alignment, spacer_placement, Arrangement, ChildLayout, CrossAlign,
    Slot, SpacerPlacement,
};
pub use plumb_layout::{
    assign_resistance, shrink_key, ChildSizing, BASE_COMPRESSION_RESISTANCE, FILL_SIZE_HUGGING,
    SPACER_HUGGING,
};
