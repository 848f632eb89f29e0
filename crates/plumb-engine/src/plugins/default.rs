//! The mandatory catch-all plugin closing every resolution chain.

use std::sync::Arc;

use plumb_core::{Gravity, NodeId, ResolutionResult, Value, View, ViewCatalog};

use crate::plugin::{Plugin, ResolveCx};

/// Baseline element and attribute handling.
///
/// Registered first so the chain consults it last: any element the catalog
/// knows gets a view, the `gravity` attribute is decoded here, and every
/// other text attribute is forwarded to the node's view. It carries no
/// element-specific knowledge of its own; that lives in the render layer's
/// [`ViewCatalog`].
pub struct DefaultPlugin {
    catalog: Arc<ViewCatalog>,
}

impl DefaultPlugin {
    /// Wire the catch-all to the render layer's constructor catalog.
    #[must_use]
    pub fn new(catalog: Arc<ViewCatalog>) -> Self {
        Self { catalog }
    }
}

impl Plugin for DefaultPlugin {
    fn instantiate_view(
        &mut self,
        cx: &mut ResolveCx<'_>,
        node: NodeId,
    ) -> Option<Box<dyn View>> {
        self.catalog.instantiate(cx.doc.node(node).name())
    }

    fn postprocess_attribute(
        &mut self,
        cx: &mut ResolveCx<'_>,
        node: NodeId,
        attribute: &str,
        value: &Value,
    ) -> ResolutionResult {
        // node-valued attributes need a plugin that understands them
        let Some(text) = value.as_text() else {
            return ResolutionResult::NotHandled;
        };
        if attribute == "gravity" {
            let gravity = Gravity::parse(text);
            if let Some(view) = cx.view_of(node) {
                view.set_gravity(gravity);
            }
            return ResolutionResult::Handled;
        }
        match cx.view_of(node) {
            Some(view) => view.apply_attribute(attribute, text),
            None => ResolutionResult::NotHandled,
        }
    }
}
