//! Depth-first document resolution across the plugin chain.

use std::collections::HashMap;

use plumb_core::{Document, NodeId, ResolutionResult, ResolveError, ViewRegistry, Warning};
use plumb_layout::Arrangement;

use crate::plugin::{Plugin, ResolveCx};
use crate::registry::PluginRegistry;

/// What to do when no plugin can instantiate a view for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fail the whole document on the first unresolvable element.
    #[default]
    AbortDocument,
    /// Skip the unresolvable branch, record the failure, and keep resolving
    /// siblings. An unresolvable root still fails the document.
    PruneSubtree,
}

/// Output of one completed resolution session, consumed by the external
/// constraint/render system.
#[derive(Debug)]
pub struct Resolved {
    /// Every view produced, owned here.
    pub views: ViewRegistry,
    /// Per-container arranged order, spacer placement, and priorities.
    pub arrangements: HashMap<NodeId, Arrangement>,
    /// Non-fatal configuration warnings, in emission order.
    pub warnings: Vec<Warning>,
    /// Subtree failures recorded under [`FailurePolicy::PruneSubtree`].
    pub failures: Vec<ResolveError>,
}

/// One resolution session.
///
/// Owns the live plugin instances for exactly one document; resolution is
/// synchronous and single-threaded, a depth-first walk where all hooks for
/// a node/attribute complete before the walk moves on. Concurrent documents
/// take independent sessions from the same registry.
pub struct Resolver {
    plugins: Vec<Box<dyn Plugin>>,
    policy: FailurePolicy,
}

impl Resolver {
    /// Start a session: one fresh instance of each registered plugin.
    #[must_use]
    pub fn new(registry: &PluginRegistry) -> Self {
        Self {
            plugins: registry.instantiate(),
            policy: FailurePolicy::default(),
        }
    }

    /// Configure the unresolvable-element policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the document: instantiate views, run every attribute through
    /// the phase pipeline, walk children, then run the whole-tree
    /// post-process wave.
    pub fn resolve(mut self, doc: &mut Document) -> Result<Resolved, ResolveError> {
        let mut views = ViewRegistry::new();
        let mut arrangements = HashMap::new();
        let mut warnings = Vec::new();
        let mut failures = Vec::new();

        let root = doc.root();
        let mut cx = ResolveCx {
            doc,
            views: &mut views,
            arrangements: &mut arrangements,
            warnings: &mut warnings,
        };

        let root_resolved =
            resolve_node(&mut self.plugins, &mut cx, root, self.policy, &mut failures)?;
        if !root_resolved {
            // pruning cannot save a document whose root has no view
            if let Some(failure) = failures.pop() {
                return Err(failure);
            }
        }

        postprocess_wave(&mut self.plugins, &mut cx, root);

        Ok(Resolved {
            views,
            arrangements,
            warnings,
            failures,
        })
    }
}

/// Resolve one node. `Ok(true)` means the node and its subtree resolved,
/// `Ok(false)` that the branch was pruned under
/// [`FailurePolicy::PruneSubtree`].
fn resolve_node(
    plugins: &mut [Box<dyn Plugin>],
    cx: &mut ResolveCx<'_>,
    node: NodeId,
    policy: FailurePolicy,
    failures: &mut Vec<ResolveError>,
) -> Result<bool, ResolveError> {
    // Phase 1: view instantiation, first plugin to produce an object wins.
    let mut created = None;
    for plugin in plugins.iter_mut() {
        if let Some(view) = plugin.instantiate_view(cx, node) {
            created = Some(view);
            break;
        }
    }
    let Some(view) = created else {
        let error = ResolveError::UnresolvableElement {
            name: cx.doc.node(node).name().to_string(),
            path: cx.doc.path(node),
        };
        return match policy {
            FailurePolicy::AbortDocument => Err(error),
            FailurePolicy::PruneSubtree => {
                tracing::warn!(error = %error, "pruning unresolvable subtree");
                failures.push(error);
                Ok(false)
            }
        };
    };
    let view_id = cx.views.insert(view);
    cx.doc.node_mut(node).set_view(view_id);

    // Phases 2-5, per attribute in declared order. The value is detached
    // from the node while the phases run and written back afterwards.
    let attribute_count = cx.doc.node(node).attributes().len();
    for index in 0..attribute_count {
        let (attribute, mut value) = cx.doc.node(node).attributes()[index].clone();

        for plugin in plugins.iter_mut() {
            plugin.preprocess_value(cx, node, &attribute, &mut value);
        }

        let mut claimed = ResolutionResult::NotHandled;
        for plugin in plugins.iter_mut() {
            claimed = plugin.preprocess_attribute(cx, node, &attribute, &mut value);
            if claimed.is_handled() {
                break;
            }
        }

        if !claimed.is_handled() {
            for plugin in plugins.iter_mut() {
                if let Some(output) = plugin.postprocess_value(cx, node, &attribute, &value) {
                    value = output;
                    break;
                }
            }

            let mut handled = ResolutionResult::NotHandled;
            for plugin in plugins.iter_mut() {
                handled = plugin.postprocess_attribute(cx, node, &attribute, &value);
                if handled.is_handled() {
                    break;
                }
            }
            if !handled.is_handled() {
                tracing::debug!(
                    attribute,
                    node = %cx.doc.path(node),
                    "attribute not handled by any plugin, dropped"
                );
            }
        }

        cx.doc.node_mut(node).set_attribute_value(index, value);
    }

    // Phase 6: child handling; any Handled skips the default walk.
    let mut overridden = false;
    for plugin in plugins.iter_mut() {
        if plugin.handle_child_nodes(cx, node).is_handled() {
            overridden = true;
            break;
        }
    }
    if !overridden {
        let children: Vec<NodeId> = cx.doc.node(node).children().to_vec();
        for child in children {
            resolve_node(plugins, cx, child, policy, failures)?;
        }
    }

    Ok(true)
}

/// Phase 7: the whole-tree-aware pass. Every plugin sees every resolved
/// node; pruned branches (no view) are skipped.
fn postprocess_wave(plugins: &mut [Box<dyn Plugin>], cx: &mut ResolveCx<'_>, node: NodeId) {
    if cx.doc.node(node).view().is_none() {
        return;
    }
    for plugin in plugins.iter_mut() {
        plugin.postprocess_element(cx, node);
    }
    let children: Vec<NodeId> = cx.doc.node(node).children().to_vec();
    for child in children {
        postprocess_wave(plugins, cx, child);
    }
}
