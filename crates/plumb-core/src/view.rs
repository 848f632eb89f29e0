//! Boundary contract with the external view/render layer.
//!
//! The engine never renders: it produces one [`View`] per resolvable node
//! and hands the render layer the fully configured set through
//! [`ViewRegistry`]. The render layer registers its element constructors in
//! a [`ViewCatalog`] consumed by the default plugin.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::gravity::{Axis, Gravity};
use crate::resolution::ResolutionResult;

/// Handle to a view owned by a session's [`ViewRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u32);

/// A resolved visual object.
///
/// Implemented by the render layer; the engine only configures views, it
/// never lays them out or draws them. All hooks default to "ignore" so an
/// implementation opts into exactly the configuration it understands.
pub trait View: Any {
    /// Element kind for diagnostics.
    fn kind(&self) -> &str;

    /// Apply one resolved text attribute.
    ///
    /// Return [`ResolutionResult::NotHandled`] for unrecognized keys; such
    /// attributes are dropped, which is documented behavior rather than an
    /// error.
    fn apply_attribute(&mut self, _key: &str, _value: &str) -> ResolutionResult {
        ResolutionResult::NotHandled
    }

    /// Record the element's directional alignment intent.
    fn set_gravity(&mut self, _gravity: Gravity) {}

    /// Record a compression-resistance priority along one axis.
    fn set_compression_resistance(&mut self, _axis: Axis, _priority: f32) {}

    /// Record a content-hugging priority along one axis.
    fn set_hugging(&mut self, _axis: Axis, _priority: f32) {}

    /// Upcast for concrete-type downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for concrete-type downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Constructor the render layer registers for one element name.
pub type ViewCtor = fn() -> Box<dyn View>;

/// Element name to view constructor table supplied by the render layer.
#[derive(Debug, Default)]
pub struct ViewCatalog {
    entries: HashMap<String, ViewCtor>,
}

impl ViewCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for an element name.
    pub fn register(&mut self, name: impl Into<String>, ctor: ViewCtor) {
        self.entries.insert(name.into(), ctor);
    }

    /// Builder-style [`ViewCatalog::register`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, ctor: ViewCtor) -> Self {
        self.register(name, ctor);
        self
    }

    /// Construct a fresh view for an element name, if registered.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn View>> {
        self.entries.get(name).map(|ctor| ctor())
    }
}

/// Owns every view produced during one resolution session.
#[derive(Default)]
pub struct ViewRegistry {
    views: Vec<Box<dyn View>>,
}

impl ViewRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a view, returning its handle.
    pub fn insert(&mut self, view: Box<dyn View>) -> ViewId {
        let id = ViewId(self.views.len() as u32);
        self.views.push(view);
        id
    }

    /// Borrow a view.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&dyn View> {
        self.views.get(id.0 as usize).map(Box::as_ref)
    }

    /// Mutably borrow a view.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut dyn View> {
        self.views.get_mut(id.0 as usize).map(Box::as_mut)
    }

    /// Number of views produced so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// True iff no view has been produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("len", &self.views.len())
            .finish()
    }
}
