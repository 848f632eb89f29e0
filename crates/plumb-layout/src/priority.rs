//! Compression-resistance ranking for stack children.

use serde::{Deserialize, Serialize};

// Don't change these values unless you know what you are doing.

/// Content hugging assigned to the child designated to fill the stack axis.
pub const FILL_SIZE_HUGGING: f32 = 99.0;
/// Hugging of the injected spacer, kept below [`FILL_SIZE_HUGGING`] so the
/// spacer never competes with real content for extra space.
pub const SPACER_HUGGING: f32 = 50.0;
/// Floor for ranked compression-resistance values, above the default
/// resistance of ordinary content.
pub const BASE_COMPRESSION_RESISTANCE: f32 = 750.0;

/// Sizing inputs for one stack child, in sibling order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSizing {
    /// Declared rank hint (`shrinks`), default 0.
    pub rank: i32,
    /// Whether the child fills the container's primary axis.
    pub fills: bool,
}

impl ChildSizing {
    /// Create sizing inputs for one child.
    #[must_use]
    pub const fn new(rank: i32, fills: bool) -> Self {
        Self { rank, fills }
    }
}

/// Map a rank hint onto its shrink ordering key.
///
/// A rank of 0 stays 0; otherwise `(1000 - |r|) * sign(r) * -1`, so larger
/// magnitudes map closer to zero with the sign flipped. Sorting keys
/// ascending puts the children that give way first at the front:
/// positively ranked children shrink before the neutral ones, negatively
/// ranked children after them.
///
/// The magnitude is clamped to 999, the formula's domain: authored ranks
/// come straight off the document as any `i32`, and without the clamp a
/// magnitude of 1000 or more would collide with or cross the neutral key.
#[must_use]
pub const fn shrink_key(rank: i32) -> i32 {
    if rank == 0 {
        return 0;
    }
    let magnitude = rank.unsigned_abs();
    let magnitude = if magnitude > 999 { 999 } else { magnitude as i32 };
    if rank > 0 {
        -(1000 - magnitude)
    } else {
        1000 - magnitude
    }
}

/// Assign each child a compression-resistance priority.
///
/// Children are stable-sorted by [`shrink_key`] ascending (ties keep
/// sibling order) and the child at sorted position `i` of `n` receives
/// `BASE_COMPRESSION_RESISTANCE + i / n`. The result is returned in the
/// original sibling order and is strictly increasing across sorted
/// positions, so resistance values never collide no matter how many
/// children share a rank.
#[must_use]
pub fn assign_resistance(children: &[ChildSizing]) -> Vec<f32> {
    if children.is_empty() {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by_key(|&i| shrink_key(children[i].rank));

    let total = children.len() as f32;
    let mut resistances = vec![0.0; children.len()];
    for (position, &child) in order.iter().enumerate() {
        resistances[child] = BASE_COMPRESSION_RESISTANCE + position as f32 / total;
    }
    resistances
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shrink_key_neutral_is_zero() {
        assert_eq!(shrink_key(0), 0);
    }

    #[test]
    fn test_shrink_key_flips_sign_and_compresses_magnitude() {
        assert_eq!(shrink_key(5), -995);
        assert_eq!(shrink_key(-5), 995);
        assert_eq!(shrink_key(10), -990);
    }

    #[test]
    fn test_shrink_key_clamps_out_of_domain_ranks() {
        assert_eq!(shrink_key(999), -1);
        assert_eq!(shrink_key(1000), -1);
        assert_eq!(shrink_key(-1000), 1);
        assert_eq!(shrink_key(i32::MAX), -1);
        assert_eq!(shrink_key(i32::MIN), 1);
    }

    #[test]
    fn test_assign_resistance_handles_extreme_ranks() {
        let children = [
            ChildSizing::new(i32::MIN, false),
            ChildSizing::new(0, false),
            ChildSizing::new(i32::MAX, false),
        ];
        let resistances = assign_resistance(&children);
        // the extreme positive rank still gives way first, the extreme
        // negative rank last
        assert_eq!(resistances[2], BASE_COMPRESSION_RESISTANCE);
        assert!(resistances[1] < resistances[0]);
    }

    #[test]
    fn test_spacer_hugging_stays_below_the_filler() {
        // the injected spacer must lose extra space to a designated fill
        // child, and both sit below the resistance floor
        assert!(SPACER_HUGGING < FILL_SIZE_HUGGING);
        assert!(FILL_SIZE_HUGGING < BASE_COMPRESSION_RESISTANCE);
    }

    #[test]
    fn test_larger_positive_rank_shrinks_later_than_smaller() {
        // rank 5 maps to -995, rank 10 to -990: rank 5 sorts first and
        // receives the lower resistance, so rank 10 holds out longer among
        // the positive ranks.
        assert!(shrink_key(5) < shrink_key(10));
    }

    #[test]
    fn test_assign_resistance_mixed_ranks() {
        let children = [
            ChildSizing::new(0, false),
            ChildSizing::new(5, false),
            ChildSizing::new(-5, false),
            ChildSizing::new(0, false),
        ];
        let resistances = assign_resistance(&children);

        // four distinct, strictly ordered values
        let mut sorted = resistances.clone();
        sorted.sort_by(f32::total_cmp);
        for pair in sorted.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        // rank 5 gives way first, then the zeros in sibling order, then rank -5
        assert_eq!(resistances[1], BASE_COMPRESSION_RESISTANCE);
        assert!(resistances[0] < resistances[3]);
        assert!(resistances[3] < resistances[2]);
    }

    #[test]
    fn test_assign_resistance_ties_keep_sibling_order() {
        let children = [
            ChildSizing::new(0, false),
            ChildSizing::new(0, false),
            ChildSizing::new(0, false),
        ];
        let resistances = assign_resistance(&children);
        assert!(resistances[0] < resistances[1]);
        assert!(resistances[1] < resistances[2]);
    }

    #[test]
    fn test_assign_resistance_empty() {
        assert!(assign_resistance(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_resistances_are_distinct_and_bounded(
            ranks in proptest::collection::vec(proptest::num::i32::ANY, 1..32)
        ) {
            let children: Vec<ChildSizing> =
                ranks.iter().map(|&rank| ChildSizing::new(rank, false)).collect();
            let resistances = assign_resistance(&children);

            let mut sorted = resistances.clone();
            sorted.sort_by(f32::total_cmp);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for &resistance in &resistances {
                prop_assert!(resistance >= BASE_COMPRESSION_RESISTANCE);
                prop_assert!(resistance < BASE_COMPRESSION_RESISTANCE + 1.0);
            }
        }
    }
}
