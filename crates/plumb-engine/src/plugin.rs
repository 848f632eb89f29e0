//! The plugin contract: a fixed, ordered set of resolution hooks.

use std::collections::HashMap;

use plumb_core::{Document, NodeId, ResolutionResult, Value, View, ViewRegistry, Warning};
use plumb_layout::Arrangement;

/// Shared session state the hooks read and write.
///
/// One `ResolveCx` exists per document resolution; it is threaded through
/// every hook invocation so plugins never touch ambient global state.
pub struct ResolveCx<'a> {
    /// The document under resolution.
    pub doc: &'a mut Document,
    /// Views produced so far, owned by the session.
    pub views: &'a mut ViewRegistry,
    /// Per-container arrangements computed during the post-process wave.
    pub arrangements: &'a mut HashMap<NodeId, Arrangement>,
    /// Collected non-fatal configuration warnings.
    pub warnings: &'a mut Vec<Warning>,
}

impl ResolveCx<'_> {
    /// Report a non-fatal configuration issue and continue.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(%warning, "configuration warning");
        self.warnings.push(warning);
    }

    /// The view resolved for a node, if any.
    pub fn view_of(&mut self, node: NodeId) -> Option<&mut dyn View> {
        let id = self.doc.node(node).view()?;
        self.views.get_mut(id)
    }
}

/// A pluggable handler contributing to attribute and element resolution.
///
/// Every hook has a deferring default body, so an implementation overrides
/// exactly the phases it cares about. Hooks must not fail for "I don't
/// recognize this" — that case is [`ResolutionResult::NotHandled`]; a panic
/// inside a hook is a plugin bug and propagates uncaught.
///
/// One instance of each registered plugin type lives for exactly one
/// document resolution; instances are never shared across documents.
pub trait Plugin {
    /// First-chance creation of the node's backing visual object.
    ///
    /// Return the object to claim the node, or `None` to defer to the next
    /// plugin in the chain (the default plugin, consulted last, is the
    /// usual producer). A node no plugin claims is an unresolvable element.
    ///
    /// Do not read the node's view here, and do not configure the instance
    /// from attributes — attribute handling has its own phases. The node
    /// itself (name, position) is fair game, e.g. `row`/`column` elements
    /// choose their axis from the element name.
    fn instantiate_view(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
    ) -> Option<Box<dyn View>> {
        None
    }

    /// Value-only transform, run for every registered plugin with no
    /// short-circuit, before any attribute handling.
    ///
    /// This is a value-based call: it belongs to the document where the
    /// value was declared, which for node-valued attributes is always the
    /// resolving document's own arena.
    fn preprocess_value(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
        _attribute: &str,
        _value: &mut Value,
    ) {
    }

    /// First handled-or-not hook per attribute.
    ///
    /// Returning [`ResolutionResult::Handled`] claims the attribute: no
    /// further plugin sees it in this phase and the post-process phases
    /// are skipped for it entirely.
    fn preprocess_attribute(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
        _attribute: &str,
        _value: &mut Value,
    ) -> ResolutionResult {
        ResolutionResult::NotHandled
    }

    /// Final value coercion before element-level handling.
    ///
    /// `Some(output)` replaces the value and stops this phase for the
    /// attribute; `None` defers to the next plugin.
    fn postprocess_value(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
        _attribute: &str,
        _input: &Value,
    ) -> Option<Value> {
        None
    }

    /// Last-chance per-attribute handler.
    ///
    /// The default plugin supplies the catch-all here and is installed so
    /// that it is evaluated last in chain order. An attribute every plugin
    /// defers on is silently dropped.
    fn postprocess_attribute(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
        _attribute: &str,
        _value: &Value,
    ) -> ResolutionResult {
        ResolutionResult::NotHandled
    }

    /// Optional full override of a node's child resolution.
    ///
    /// [`ResolutionResult::Handled`] from any plugin skips the engine's
    /// default child walk (resolve each child, recurse) entirely.
    fn handle_child_nodes(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
    ) -> ResolutionResult {
        ResolutionResult::NotHandled
    }

    /// Whole-tree-aware final pass, invoked on every plugin for every
    /// resolved node after the entire tree completed the phases above.
    fn postprocess_element(&mut self, _cx: &mut ResolveCx<'_>, _node: NodeId) {}
}
