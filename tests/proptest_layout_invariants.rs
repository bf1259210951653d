//! Property-based invariant tests for the mosaic layout engine.
//!
//! 1. Leaves of the split tree read back in input order.
//! 2. Every split's two sides agree (equal heights across vertical splits,
//!    equal widths across horizontal ones) up to rounding drift.
//! 3. Solving is deterministic.
//! 4. The root spans the requested width up to rounding drift.
//! 5. Stacked groups never overlap vertically.
//! 6. Tiles come back one per item, in input order.

use ashlar_rs::layout::constraints::width_constraint;
use ashlar_rs::layout::place::{node_height, node_width};
use ashlar_rs::layout::solve::solve_widths;
use ashlar_rs::tree::arena::{NodeId, Orientation, SplitNode, SplitTree};
use ashlar_rs::{build_tree, layout, solve_layout, Item};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn items_strategy() -> impl Strategy<Value = Vec<Item<usize>>> {
    prop::collection::vec((0.25f64..4.0, 0.1f64..10.0), 1..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (aspect, priority))| Item::new(aspect, i).with_priority(priority))
            .collect()
    })
}

fn width_strategy() -> impl Strategy<Value = f64> {
    200.0f64..2000.0
}

fn leaf_count(tree: &SplitTree, id: NodeId) -> usize {
    match *tree.get(id) {
        SplitNode::Leaf { .. } => 1,
        SplitNode::Inner { left, right, .. } => leaf_count(tree, left) + leaf_count(tree, right),
    }
}

fn max_aspect(items: &[Item<usize>]) -> f64 {
    items.iter().map(|i| i.aspect).fold(0.0, f64::max)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Leaf order equals input order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn leaves_preserve_input_order(items in items_strategy()) {
        let tree = build_tree(&items).unwrap();
        prop_assert_eq!(tree.leaf_indices(), (0..items.len()).collect::<Vec<_>>());
        prop_assert_eq!(tree.node_count(), 2 * items.len() - 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Sibling equations hold within rounding drift
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn siblings_match_on_the_shared_axis(items in items_strategy(), width in width_strategy()) {
        let tree = build_tree(&items).unwrap();
        let solution = solve_widths(&tree, &items, width).unwrap();
        // Each leaf's width is off by at most half a pixel and its floored
        // height by at most aspect/2 + 1.
        let per_leaf = 1.0 + max_aspect(&items);

        for id in tree.preorder() {
            let SplitNode::Inner { orientation, left, right } = *tree.get(id) else {
                continue;
            };
            let tolerance = leaf_count(&tree, id) as f64 * per_leaf;
            let (l, r) = match orientation {
                Orientation::Vertical => (
                    node_height(&tree, left, &items, &solution).unwrap(),
                    node_height(&tree, right, &items, &solution).unwrap(),
                ),
                Orientation::Horizontal => (
                    node_width(&tree, left, &solution).unwrap(),
                    node_width(&tree, right, &solution).unwrap(),
                ),
            };
            prop_assert!(
                (l as f64 - r as f64).abs() <= tolerance,
                "{:?} split {:?}: {} vs {} (tolerance {})",
                orientation, id, l, r, tolerance
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn solving_twice_gives_identical_tiles(items in items_strategy(), width in width_strategy()) {
        let tree = build_tree(&items).unwrap();
        let first = solve_layout(&tree, &items, width).unwrap();
        let second = solve_layout(&tree, &items, width).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Root width matches the requested width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn root_spans_requested_width(items in items_strategy(), width in width_strategy()) {
        let tree = build_tree(&items).unwrap();
        let solution = solve_widths(&tree, &items, width).unwrap();
        let spanning = width_constraint(&tree, tree.root())
            .iter()
            .filter(|c| **c != 0.0)
            .count();
        let drift = (node_width(&tree, tree.root(), &solution).unwrap() as f64 - width.round()).abs();
        // Half a pixel per leaf on the width path, plus the rounding of the
        // requested width itself.
        prop_assert!(
            drift <= spanning as f64 / 2.0 + 1.0,
            "drift {} over {} spanning leaves", drift, spanning
        );
    }

    #[test]
    fn two_items_span_within_one_pixel(
        a in 0.25f64..4.0,
        b in 0.25f64..4.0,
        width in 200u32..2000,
    ) {
        let items = vec![Item::new(a, 0usize), Item::new(b, 1usize)];
        let tiles = layout(&items, width as f64, None).unwrap();
        let spanned = tiles[0].width + tiles[1].width;
        prop_assert!((spanned as i64 - width as i64).abs() <= 1);
        prop_assert_eq!(tiles[1].x, tiles[0].width);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Groups stack without vertical overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn groups_do_not_overlap(
        items in items_strategy(),
        width in width_strategy(),
        group in 1usize..8,
    ) {
        let tiles = layout(&items, width, Some(group)).unwrap();
        prop_assert_eq!(tiles.len(), items.len());

        let chunks: Vec<_> = tiles.chunks(group).collect();
        for pair in chunks.windows(2) {
            let bottom = pair[0].iter().map(|t| t.bottom()).max().unwrap();
            let top = pair[1].iter().map(|t| t.y).min().unwrap();
            prop_assert!(top >= bottom, "group starting at {} overlaps bottom {}", top, bottom);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. One tile per item, in order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tiles_carry_handles_in_order(items in items_strategy(), width in width_strategy()) {
        let tiles = layout(&items, width, None).unwrap();
        let handles: Vec<usize> = tiles.iter().map(|t| t.handle).collect();
        prop_assert_eq!(handles, (0..items.len()).collect::<Vec<_>>());
    }
}
