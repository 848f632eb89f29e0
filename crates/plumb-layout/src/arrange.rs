//! Arranged child order, spacer placement, and alignment inference.

use plumb_core::{Axis, Gravity, NodeId};
use serde::{Deserialize, Serialize};

use crate::priority::{assign_resistance, ChildSizing};

/// Where the flexible spacer lands in the arranged order.
///
/// The spacer has zero preferred size and [`crate::SPACER_HUGGING`] hugging;
/// it exists purely to push siblings toward the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacerPlacement {
    /// No spacer: the gravity along the primary axis is center, fill, or unset.
    #[default]
    None,
    /// Spacer inserted as the first arranged child (trailing gravity).
    First,
    /// Spacer appended as the last arranged child (leading gravity).
    Last,
}

/// Cross-axis alignment derived from gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossAlign {
    /// Align children to the leading cross-axis edge.
    Start,
    /// Center children on the cross axis.
    Center,
    /// Align children to the trailing cross-axis edge.
    End,
}

/// One slot in the arranged child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// A real child element.
    Child(NodeId),
    /// The injected flexible spacer.
    Spacer,
}

/// Layout inputs for one already-resolved stack child, in sibling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildLayout {
    /// The child element.
    pub node: NodeId,
    /// Declared rank hint, default 0.
    pub rank: i32,
    /// Whether the child fills the container's primary axis.
    pub fills: bool,
}

/// Fully ranked arrangement of a container's children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    /// Arranged order, injected spacer included.
    pub order: Vec<Slot>,
    /// Compression-resistance per child, in original sibling order.
    pub resistances: Vec<(NodeId, f32)>,
    /// The child designated to absorb available space along the axis.
    pub filler: Option<NodeId>,
    /// Children whose fill flag was ignored because a filler was already
    /// designated; their explicit rank still applies.
    pub ignored_fillers: Vec<NodeId>,
    /// Spacer placement for the container's gravity.
    pub spacer: SpacerPlacement,
}

/// Decide spacer placement from the gravity along the container's axis.
///
/// Trailing gravity (right/bottom) puts the spacer first, leading gravity
/// (left/top) appends it last, anything else inserts none. Center never
/// matches: it is the union of both edge codes.
#[must_use]
pub fn spacer_placement(axis: Axis, gravity: Gravity) -> SpacerPlacement {
    let primary = gravity.along(axis);
    let (leading, trailing) = match axis {
        Axis::Horizontal => (Gravity::LEFT, Gravity::RIGHT),
        Axis::Vertical => (Gravity::TOP, Gravity::BOTTOM),
    };
    if primary == trailing {
        SpacerPlacement::First
    } else if primary == leading {
        SpacerPlacement::Last
    } else {
        SpacerPlacement::None
    }
}

/// Derive the cross-axis alignment from a container's gravity.
///
/// A horizontal container follows the vertical gravity component, a
/// vertical container the horizontal component; unset gravity yields
/// `None`, leaving the toolkit default unchanged.
#[must_use]
pub fn inferred_cross_alignment(axis: Axis, gravity: Gravity) -> Option<CrossAlign> {
    match axis {
        Axis::Horizontal => match gravity.vertical() {
            Gravity::TOP => Some(CrossAlign::Start),
            Gravity::MIDDLE => Some(CrossAlign::Center),
            Gravity::BOTTOM => Some(CrossAlign::End),
            _ => None,
        },
        Axis::Vertical => match gravity.horizontal() {
            Gravity::LEFT => Some(CrossAlign::Start),
            Gravity::CENTER => Some(CrossAlign::Center),
            Gravity::RIGHT => Some(CrossAlign::End),
            _ => None,
        },
    }
}

/// Rank a container's children and decide spacer placement.
///
/// At most one child is expected to fill the axis; extra fill flags are
/// ignored for sizing and reported through
/// [`Arrangement::ignored_fillers`] so the caller can emit the
/// configuration warning.
#[must_use]
pub fn arrange(axis: Axis, gravity: Gravity, children: &[ChildLayout]) -> Arrangement {
    let mut filler = None;
    let mut ignored_fillers = Vec::new();
    for child in children {
        if child.fills {
            if filler.is_none() {
                filler = Some(child.node);
            } else {
                ignored_fillers.push(child.node);
            }
        }
    }

    let sizing: Vec<ChildSizing> = children
        .iter()
        .map(|child| ChildSizing::new(child.rank, child.fills))
        .collect();
    let resistances = children
        .iter()
        .zip(assign_resistance(&sizing))
        .map(|(child, resistance)| (child.node, resistance))
        .collect();

    let spacer = spacer_placement(axis, gravity);
    let mut order: Vec<Slot> = children.iter().map(|child| Slot::Child(child.node)).collect();
    match spacer {
        SpacerPlacement::First => order.insert(0, Slot::Spacer),
        SpacerPlacement::Last => order.push(Slot::Spacer),
        SpacerPlacement::None => {}
    }

    Arrangement {
        order,
        resistances,
        filler,
        ignored_fillers,
        spacer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plumb_core::Document;

    fn row_with_children(count: usize) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new("row");
        let children = (0..count)
            .map(|_| doc.add_child(doc.root(), "label"))
            .collect();
        (doc, children)
    }

    fn layouts(children: &[NodeId], ranks: &[i32]) -> Vec<ChildLayout> {
        children
            .iter()
            .zip(ranks)
            .map(|(&node, &rank)| ChildLayout {
                node,
                rank,
                fills: false,
            })
            .collect()
    }

    #[test]
    fn test_trailing_gravity_puts_spacer_first() {
        let (_, children) = row_with_children(2);
        let arrangement = arrange(
            Axis::Horizontal,
            Gravity::parse("right"),
            &layouts(&children, &[0, 0]),
        );
        assert_eq!(arrangement.spacer, SpacerPlacement::First);
        assert_eq!(arrangement.order[0], Slot::Spacer);
        assert_eq!(arrangement.order.len(), 3);
    }

    #[test]
    fn test_leading_gravity_appends_spacer_last() {
        let (_, children) = row_with_children(2);
        let arrangement = arrange(
            Axis::Horizontal,
            Gravity::parse("left"),
            &layouts(&children, &[0, 0]),
        );
        assert_eq!(arrangement.spacer, SpacerPlacement::Last);
        assert_eq!(arrangement.order.last(), Some(&Slot::Spacer));
    }

    #[test]
    fn test_center_and_unset_gravity_insert_no_spacer() {
        let (_, children) = row_with_children(2);
        for gravity in ["center", ""] {
            let arrangement = arrange(
                Axis::Horizontal,
                Gravity::parse(gravity),
                &layouts(&children, &[0, 0]),
            );
            assert_eq!(arrangement.spacer, SpacerPlacement::None);
            assert_eq!(arrangement.order.len(), 2);
        }
    }

    #[test]
    fn test_vertical_axis_uses_vertical_gravity() {
        let (_, children) = row_with_children(1);
        let bottom = arrange(
            Axis::Vertical,
            Gravity::parse("bottom left"),
            &layouts(&children, &[0]),
        );
        assert_eq!(bottom.spacer, SpacerPlacement::First);

        let top = arrange(
            Axis::Vertical,
            Gravity::parse("top right"),
            &layouts(&children, &[0]),
        );
        assert_eq!(top.spacer, SpacerPlacement::Last);
    }

    #[test]
    fn test_first_fill_child_wins() {
        let (_, children) = row_with_children(3);
        let layouts: Vec<ChildLayout> = children
            .iter()
            .enumerate()
            .map(|(i, &node)| ChildLayout {
                node,
                rank: 0,
                fills: i > 0,
            })
            .collect();
        let arrangement = arrange(Axis::Horizontal, Gravity::default(), &layouts);
        assert_eq!(arrangement.filler, Some(children[1]));
        assert_eq!(arrangement.ignored_fillers, vec![children[2]]);
    }

    #[test]
    fn test_resistances_follow_sibling_order() {
        let (_, children) = row_with_children(4);
        let arrangement = arrange(
            Axis::Horizontal,
            Gravity::default(),
            &layouts(&children, &[0, 5, -5, 0]),
        );
        let nodes: Vec<NodeId> = arrangement
            .resistances
            .iter()
            .map(|&(node, _)| node)
            .collect();
        assert_eq!(nodes, children);
    }

    #[test]
    fn test_inferred_cross_alignment_horizontal_container() {
        assert_eq!(
            inferred_cross_alignment(Axis::Horizontal, Gravity::parse("top")),
            Some(CrossAlign::Start)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Horizontal, Gravity::parse("middle")),
            Some(CrossAlign::Center)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Horizontal, Gravity::parse("bottom")),
            Some(CrossAlign::End)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Horizontal, Gravity::parse("left")),
            None
        );
    }

    #[test]
    fn test_inferred_cross_alignment_vertical_container() {
        assert_eq!(
            inferred_cross_alignment(Axis::Vertical, Gravity::parse("left")),
            Some(CrossAlign::Start)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Vertical, Gravity::parse("center")),
            Some(CrossAlign::Center)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Vertical, Gravity::parse("right")),
            Some(CrossAlign::End)
        );
        assert_eq!(
            inferred_cross_alignment(Axis::Vertical, Gravity::parse("bottom")),
            None
        );
    }
}
