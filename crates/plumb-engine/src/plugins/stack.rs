//! Linear stack containers: `row`/`h` and `column`/`v`.

use plumb_core::{Axis, Gravity, NodeId, ResolutionResult, Value, View, Warning};
use plumb_layout::{
    arrange, inferred_cross_alignment, ChildLayout, CrossAlign, FILL_SIZE_HUGGING,
};

use crate::plugin::{Plugin, ResolveCx};

const RANK_ATTRIBUTE: &str = "shrinks";
const ALIGNMENT_ATTRIBUTE: &str = "alignment";

/// The visual object backing a stack container element.
///
/// Holds the configuration the render layer needs to build the real stack:
/// axis, alignment, gravity, and the per-axis priorities assigned during
/// the whole-tree pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    axis: Axis,
    gravity: Gravity,
    alignment: Option<CrossAlign>,
    explicit_alignment: Option<String>,
    compression_resistance: [Option<f32>; 2],
    hugging: [Option<f32>; 2],
}

const fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => 0,
        Axis::Vertical => 1,
    }
}

impl StackView {
    /// Create a stack along the given primary axis.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            gravity: Gravity::default(),
            alignment: None,
            explicit_alignment: None,
            compression_resistance: [None; 2],
            hugging: [None; 2],
        }
    }

    /// The primary layout axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The gravity in effect for this container.
    #[must_use]
    pub const fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Cross-axis alignment, inferred or decoded from the authored keyword.
    #[must_use]
    pub const fn alignment(&self) -> Option<CrossAlign> {
        self.alignment
    }

    /// The authored `alignment` keyword, if the document declared one.
    #[must_use]
    pub fn explicit_alignment(&self) -> Option<&str> {
        self.explicit_alignment.as_deref()
    }

    /// Adopt an inferred cross-axis alignment. Has no effect if the
    /// document authored one explicitly.
    pub fn infer_alignment(&mut self, alignment: Option<CrossAlign>) {
        if self.explicit_alignment.is_none() {
            self.alignment = alignment;
        }
    }

    /// Assigned compression resistance along one axis.
    #[must_use]
    pub const fn compression_resistance(&self, axis: Axis) -> Option<f32> {
        self.compression_resistance[axis_index(axis)]
    }

    /// Assigned hugging priority along one axis.
    #[must_use]
    pub const fn hugging(&self, axis: Axis) -> Option<f32> {
        self.hugging[axis_index(axis)]
    }
}

impl View for StackView {
    fn kind(&self) -> &str {
        match self.axis {
            Axis::Horizontal => "row",
            Axis::Vertical => "column",
        }
    }

    fn apply_attribute(&mut self, key: &str, value: &str) -> ResolutionResult {
        if key == ALIGNMENT_ATTRIBUTE {
            self.explicit_alignment = Some(value.to_string());
            self.alignment = match value {
                "start" => Some(CrossAlign::Start),
                "center" => Some(CrossAlign::Center),
                "end" => Some(CrossAlign::End),
                _ => None,
            };
            return ResolutionResult::Handled;
        }
        ResolutionResult::NotHandled
    }

    fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    fn set_compression_resistance(&mut self, axis: Axis, priority: f32) {
        self.compression_resistance[axis_index(axis)] = Some(priority);
    }

    fn set_hugging(&mut self, axis: Axis, priority: f32) {
        self.hugging[axis_index(axis)] = Some(priority);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Handles stack container elements and their child ranking.
///
/// Instantiation claims `row`/`h` and `column`/`v` elements; everything
/// else defers down the chain. The whole-tree pass then ranks each stack's
/// resolved children, injects the gravity spacer, assigns compression
/// resistance and filler hugging, and infers the cross-axis alignment.
#[derive(Debug, Default)]
pub struct StackPlugin;

impl Plugin for StackPlugin {
    fn instantiate_view(
        &mut self,
        cx: &mut ResolveCx<'_>,
        node: NodeId,
    ) -> Option<Box<dyn View>> {
        let axis = match cx.doc.node(node).name() {
            "row" | "h" => Axis::Horizontal,
            "column" | "v" => Axis::Vertical,
            _ => return None,
        };
        Some(Box::new(StackView::new(axis)))
    }

    fn postprocess_attribute(
        &mut self,
        _cx: &mut ResolveCx<'_>,
        _node: NodeId,
        attribute: &str,
        _value: &Value,
    ) -> ResolutionResult {
        // the rank hint is consumed during the whole-tree pass; claiming it
        // here keeps it from reaching the view as an unknown attribute
        ResolutionResult::from(attribute == RANK_ATTRIBUTE)
    }

    fn postprocess_element(&mut self, cx: &mut ResolveCx<'_>, node: NodeId) {
        let Some(axis) = cx
            .view_of(node)
            .and_then(|view| view.as_any().downcast_ref::<StackView>())
            .map(StackView::axis)
        else {
            return;
        };

        let gravity = cx.doc.effective_gravity(node);

        // pruned children have no view and take no part in the arrangement
        let children: Vec<ChildLayout> = cx
            .doc
            .node(node)
            .children()
            .iter()
            .copied()
            .filter(|&child| cx.doc.node(child).view().is_some())
            .map(|child| {
                let declared = cx.doc.node(child);
                ChildLayout {
                    node: child,
                    rank: declared.rank_hint(),
                    fills: declared.fills_axis(axis),
                }
            })
            .collect();

        let arrangement = arrange(axis, gravity, &children);

        for &(child, resistance) in &arrangement.resistances {
            if let Some(view) = cx.view_of(child) {
                view.set_compression_resistance(axis, resistance);
            }
        }
        if let Some(filler) = arrangement.filler {
            if let Some(view) = cx.view_of(filler) {
                view.set_hugging(axis, FILL_SIZE_HUGGING);
            }
        }

        let container = cx.doc.node(node).name().to_string();
        for index in 0..arrangement.ignored_fillers.len() {
            let child = cx.doc.path(arrangement.ignored_fillers[index]);
            cx.warn(Warning::MultipleFillChildren {
                container: container.clone(),
                child,
            });
        }

        let inferred = inferred_cross_alignment(axis, gravity);
        if let Some(stack) = cx
            .view_of(node)
            .and_then(|view| view.as_any_mut().downcast_mut::<StackView>())
        {
            stack.set_gravity(gravity);
            stack.infer_alignment(inferred);
        }

        cx.arrangements.insert(node, arrangement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PluginRegistry;
    use crate::resolver::Resolver;
    use plumb_core::{Document, ViewCatalog};
    use plumb_layout::{Slot, SpacerPlacement, BASE_COMPRESSION_RESISTANCE};
    use std::any::Any;
    use std::sync::Arc;

    #[derive(Default)]
    struct Label {
        compression_resistance: [Option<f32>; 2],
        hugging: [Option<f32>; 2],
    }

    impl View for Label {
        fn kind(&self) -> &str {
            "label"
        }

        fn apply_attribute(&mut self, _key: &str, _value: &str) -> ResolutionResult {
            ResolutionResult::Handled
        }

        fn set_compression_resistance(&mut self, axis: Axis, priority: f32) {
            self.compression_resistance[axis_index(axis)] = Some(priority);
        }

        fn set_hugging(&mut self, axis: Axis, priority: f32) {
            self.hugging[axis_index(axis)] = Some(priority);
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn registry() -> PluginRegistry {
        let catalog = Arc::new(ViewCatalog::new().with("label", || Box::new(Label::default())));
        PluginRegistry::with_defaults(catalog)
    }

    fn downcast<'a, T: 'static>(
        doc: &Document,
        views: &'a plumb_core::ViewRegistry,
        node: NodeId,
    ) -> &'a T {
        doc.node(node)
            .view()
            .and_then(|id| views.get(id))
            .and_then(|view| view.as_any().downcast_ref::<T>())
            .expect("view of the expected type")
    }

    #[test]
    fn test_element_names_choose_the_axis() {
        for (name, axis) in [
            ("row", Axis::Horizontal),
            ("h", Axis::Horizontal),
            ("column", Axis::Vertical),
            ("v", Axis::Vertical),
        ] {
            let mut doc = Document::new(name);
            let resolved = Resolver::new(&registry())
                .resolve(&mut doc)
                .expect("stack resolves");
            let stack = downcast::<StackView>(&doc, &resolved.views, doc.root());
            assert_eq!(stack.axis(), axis);
        }
    }

    #[test]
    fn test_trailing_gravity_injects_leading_spacer_and_infers_alignment() {
        let mut doc = Document::new("row");
        doc.set_attribute(doc.root(), "gravity", "bottom right");
        let a = doc.add_child(doc.root(), "label");
        let b = doc.add_child(doc.root(), "label");

        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");

        let arrangement = &resolved.arrangements[&doc.root()];
        assert_eq!(arrangement.spacer, SpacerPlacement::First);
        assert_eq!(
            arrangement.order,
            vec![Slot::Spacer, Slot::Child(a), Slot::Child(b)]
        );

        let stack = downcast::<StackView>(&doc, &resolved.views, doc.root());
        assert_eq!(stack.alignment(), Some(CrossAlign::End));
        assert_eq!(stack.gravity(), Gravity::RIGHT | Gravity::BOTTOM);
    }

    #[test]
    fn test_rank_hints_drive_compression_resistance() {
        let mut doc = Document::new("row");
        let a = doc.add_child(doc.root(), "label");
        let b = doc.add_child(doc.root(), "label");
        doc.set_attribute(b, RANK_ATTRIBUTE, "10");

        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");

        let first = downcast::<Label>(&doc, &resolved.views, a)
            .compression_resistance[axis_index(Axis::Horizontal)]
            .expect("assigned");
        let ranked = downcast::<Label>(&doc, &resolved.views, b)
            .compression_resistance[axis_index(Axis::Horizontal)]
            .expect("assigned");
        // positive rank shrinks first: lowest resistance of the siblings
        assert!(ranked < first);
        assert!(ranked >= BASE_COMPRESSION_RESISTANCE);
    }

    #[test]
    fn test_single_filler_gets_low_hugging_and_extras_warn() {
        let mut doc = Document::new("row");
        let a = doc.add_child(doc.root(), "label");
        doc.set_attribute(a, "width", "fill");
        let b = doc.add_child(doc.root(), "label");
        doc.set_attribute(b, "width", "fill");

        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");

        let arrangement = &resolved.arrangements[&doc.root()];
        assert_eq!(arrangement.filler, Some(a));
        assert_eq!(arrangement.ignored_fillers, vec![b]);

        let filler = downcast::<Label>(&doc, &resolved.views, a);
        assert_eq!(
            filler.hugging[axis_index(Axis::Horizontal)],
            Some(FILL_SIZE_HUGGING)
        );
        assert_eq!(
            resolved.warnings,
            vec![Warning::MultipleFillChildren {
                container: "row".to_string(),
                child: "row/label[1]".to_string(),
            }]
        );
    }

    #[test]
    fn test_authored_alignment_wins_over_inference() {
        let mut doc = Document::new("row");
        doc.set_attribute(doc.root(), "gravity", "bottom");
        doc.set_attribute(doc.root(), ALIGNMENT_ATTRIBUTE, "start");
        doc.add_child(doc.root(), "label");

        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");
        let stack = downcast::<StackView>(&doc, &resolved.views, doc.root());
        assert_eq!(stack.explicit_alignment(), Some("start"));
        assert_eq!(stack.alignment(), Some(CrossAlign::Start));
    }

    #[test]
    fn test_shrinks_attribute_never_reaches_the_view() {
        let mut doc = Document::new("row");
        let child = doc.add_child(doc.root(), "label");
        doc.set_attribute(child, RANK_ATTRIBUTE, "3");

        // no panic and no warning: the rank hint is claimed, and the node
        // still carries it for the whole-tree pass
        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");
        assert!(resolved.warnings.is_empty());
        assert_eq!(doc.node(child).rank_hint(), 3);
    }

    #[test]
    fn test_gravity_is_inherited_by_nested_stacks() {
        let mut doc = Document::new("column");
        doc.set_attribute(doc.root(), "gravity", "bottom");
        let row = doc.add_child(doc.root(), "row");
        doc.add_child(row, "label");

        let resolved = Resolver::new(&registry())
            .resolve(&mut doc)
            .expect("resolves");

        // the inner row inherits the vertical gravity from the column
        let inner = downcast::<StackView>(&doc, &resolved.views, row);
        assert_eq!(inner.gravity().vertical(), Gravity::BOTTOM);
        assert_eq!(inner.alignment(), Some(CrossAlign::End));
        // the column itself gets a leading spacer for its bottom gravity
        assert_eq!(
            resolved.arrangements[&doc.root()].spacer,
            SpacerPlacement::First
        );
    }
}
