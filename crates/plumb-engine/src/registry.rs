//! Ordered plugin registration and per-session instantiation.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use plumb_core::{ViewCatalog, Warning};

use crate::plugin::Plugin;
use crate::plugins::{DefaultPlugin, StackPlugin};

type PluginCtor = Box<dyn Fn() -> Box<dyn Plugin> + Send + Sync>;

struct Registration {
    type_id: TypeId,
    name: &'static str,
    ctor: PluginCtor,
}

/// The process-wide ordered plugin chain.
///
/// Registration acts as a stack: the most recently registered plugin sits
/// at the front, so walking the chain forward visits plugins in reverse
/// registration order. Domain plugins registered after generic ones
/// therefore get first chance to claim an attribute, while structural
/// plugins registered first are consulted last.
///
/// Registration is expected to happen during a one-time setup phase before
/// any resolution session begins; the registry is then shared read-only.
#[derive(Default)]
pub struct PluginRegistry {
    chain: Vec<Registration>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chain: [`DefaultPlugin`] wired to the given view
    /// catalog, then [`StackPlugin`], so that stack containers are
    /// consulted first and the default catch-all last.
    #[must_use]
    pub fn with_defaults(catalog: Arc<ViewCatalog>) -> Self {
        let mut registry = Self::new();
        registry.register_with(move || DefaultPlugin::new(Arc::clone(&catalog)));
        registry.register::<StackPlugin>();
        registry
    }

    /// Register a plugin type constructed via [`Default`].
    pub fn register<P: Plugin + Default + 'static>(&mut self) {
        self.register_with(P::default);
    }

    /// Register a plugin type with an explicit per-session constructor.
    ///
    /// Re-registering an already registered type is a caller error; the
    /// first registration is kept and a warning is traced.
    pub fn register_with<P, F>(&mut self, ctor: F)
    where
        P: Plugin + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<P>();
        if self.chain.iter().any(|entry| entry.type_id == type_id) {
            let warning = Warning::DuplicatePlugin {
                plugin: std::any::type_name::<P>().to_string(),
            };
            tracing::warn!(%warning, "ignoring duplicate plugin registration");
            return;
        }
        // newest first, so the chain reads in resolution order
        self.chain.insert(
            0,
            Registration {
                type_id,
                name: std::any::type_name::<P>(),
                ctor: Box::new(move || Box::new(ctor())),
            },
        );
    }

    /// Fresh instances of every registered plugin, in resolution (chain)
    /// order, for exactly one document resolution session.
    #[must_use]
    pub fn instantiate(&self) -> Vec<Box<dyn Plugin>> {
        self.chain.iter().map(|entry| (entry.ctor)()).collect()
    }

    /// Registered type names in resolution order, for diagnostics.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.chain.iter().map(|entry| entry.name).collect()
    }

    /// Number of registered plugin types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True iff no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("chain", &self.names())
            .finish()
    }
}
