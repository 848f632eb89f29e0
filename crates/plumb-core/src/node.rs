//! Arena-backed declarative element tree.
//!
//! A [`Document`] owns every [`Node`] of one parsed layout; nodes refer to
//! each other by [`NodeId`] index. The tree is built by the external parse
//! layer, mutated during one resolution pass, and discarded once the render
//! completes — no node state survives across passes.

use serde::{Deserialize, Serialize};

use crate::gravity::{Axis, Gravity};
use crate::view::ViewId;

/// Attribute key carrying the sibling rank hint.
const RANK_ATTRIBUTE: &str = "shrinks";
/// Attribute value marking a child as filling an axis.
const FILL_KEYWORD: &str = "fill";

/// Index of a node within its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An attribute value: plain text or a reference to another node declared
/// in the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// A string scalar.
    Text(String),
    /// A nested node reference.
    Node(NodeId),
}

impl Value {
    /// The text content, if this is a string scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// The referenced node, if this is a node value.
    #[must_use]
    pub const fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Text(_) => None,
            Self::Node(id) => Some(*id),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

/// One declared element.
///
/// Attribute and child order are semantically meaningful: attributes resolve
/// in declared order and child order is sibling priority/placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    name: String,
    attributes: Vec<(String, Value)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    /// Non-owning handle to the resolved visual object; the session's
    /// [`crate::ViewRegistry`] owns the view itself.
    #[serde(skip)]
    view: Option<ViewId>,
}

impl Node {
    fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
            view: None,
        }
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in declared order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Look up a text attribute by key.
    #[must_use]
    pub fn attribute_text(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_text)
    }

    /// Replace the value at an attribute position, keeping its key.
    ///
    /// Used by the resolver to thread transformed values back after the
    /// per-attribute phases complete.
    pub fn set_attribute_value(&mut self, index: usize, value: Value) {
        self.attributes[index].1 = value;
    }

    /// Children in placement order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The parent element, `None` at the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Handle to the resolved visual object, once instantiated.
    #[must_use]
    pub const fn view(&self) -> Option<ViewId> {
        self.view
    }

    /// Record the resolved visual object handle.
    pub fn set_view(&mut self, view: ViewId) {
        self.view = Some(view);
    }

    /// The declared sibling rank hint (`shrinks` attribute), default 0.
    #[must_use]
    pub fn rank_hint(&self) -> i32 {
        self.attribute_text(RANK_ATTRIBUTE)
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Whether this element is declared to fill the given axis
    /// (`width="fill"` / `height="fill"`).
    #[must_use]
    pub fn fills_axis(&self, axis: Axis) -> bool {
        let key = match axis {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        };
        self.attribute_text(key)
            .is_some_and(|value| value.eq_ignore_ascii_case(FILL_KEYWORD))
    }

    /// The gravity declared directly on this element, unset axes included.
    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.attribute_text("gravity")
            .map(Gravity::parse)
            .unwrap_or_default()
    }
}

/// A mutable element tree consumed by one resolution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document holding a single root element.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_name.into(), None)],
            root: NodeId(0),
        }
    }

    /// The root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, detached value nodes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff the arena is empty (never the case for a built document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child element under `parent`.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(name.into(), Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Create a detached node for use as an attribute value.
    pub fn add_value_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(name.into(), None));
        id
    }

    /// Append an attribute to a node. Declared order is preserved.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.nodes[node.index()]
            .attributes
            .push((key.into(), value.into()));
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Root-to-node name path for diagnostics, e.g. `window/row[0]/button[1]`.
    ///
    /// Non-root segments carry the node's position among its siblings.
    #[must_use]
    pub fn path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = id;
        loop {
            let node = self.node(current);
            match node.parent() {
                Some(parent) => {
                    let position = self
                        .node(parent)
                        .children()
                        .iter()
                        .position(|&child| child == current)
                        .unwrap_or(0);
                    segments.push(format!("{}[{position}]", node.name()));
                    current = parent;
                }
                None => {
                    segments.push(node.name().to_string());
                    break;
                }
            }
        }
        segments.reverse();
        segments.join("/")
    }

    /// The gravity in effect for a node: axes unset on the node itself are
    /// inherited per axis from the nearest ancestor that sets them.
    #[must_use]
    pub fn effective_gravity(&self, id: NodeId) -> Gravity {
        let mut gravity = self.node(id).gravity();
        let mut current = self.node(id).parent();
        while let Some(ancestor) = current {
            if gravity.has_horizontal() && gravity.has_vertical() {
                break;
            }
            let inherited = self.node(ancestor).gravity();
            if !gravity.has_horizontal() && inherited.has_horizontal() {
                gravity.set_horizontal(inherited.horizontal());
            }
            if !gravity.has_vertical() && inherited.has_vertical() {
                gravity.set_vertical(inherited.vertical());
            }
            current = self.node(ancestor).parent();
        }
        gravity
    }
}
