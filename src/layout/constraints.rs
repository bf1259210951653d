//! Turning a split tree into a square linear system over item widths.
//!
//! Every unknown is an item's width. Heights are expressed in the same
//! unknowns through `height = aspect * width`, so one system covers both axes.

use nalgebra::{DMatrix, DVector};

use crate::layout::types::Item;
use crate::tree::arena::{NodeId, Orientation, SplitNode, SplitTree};

/// Coefficients giving the width of the box laid out by `node`.
///
/// A horizontal split is as wide as either child; the left one stands in for both.
pub fn width_constraint(tree: &SplitTree, node: NodeId) -> DVector<f64> {
    let mut row = DVector::zeros(tree.len());
    add_width(tree, node, 1.0, &mut row);
    row
}

/// Coefficients giving the height of the box laid out by `node`, in width units.
///
/// A vertical split is as tall as either child; the left one stands in for both.
pub fn height_constraint<H>(tree: &SplitTree, node: NodeId, items: &[Item<H>]) -> DVector<f64> {
    let mut row = DVector::zeros(tree.len());
    add_height(tree, node, items, 1.0, &mut row);
    row
}

fn add_width(tree: &SplitTree, node: NodeId, sign: f64, row: &mut DVector<f64>) {
    match *tree.get(node) {
        SplitNode::Leaf { item } => row[item] += sign,
        SplitNode::Inner {
            orientation: Orientation::Horizontal,
            left,
            ..
        } => add_width(tree, left, sign, row),
        SplitNode::Inner {
            orientation: Orientation::Vertical,
            left,
            right,
        } => {
            add_width(tree, left, sign, row);
            add_width(tree, right, sign, row);
        }
    }
}

fn add_height<H>(
    tree: &SplitTree,
    node: NodeId,
    items: &[Item<H>],
    sign: f64,
    row: &mut DVector<f64>,
) {
    match *tree.get(node) {
        SplitNode::Leaf { item } => row[item] += sign * items[item].aspect,
        SplitNode::Inner {
            orientation: Orientation::Vertical,
            left,
            ..
        } => add_height(tree, left, items, sign, row),
        SplitNode::Inner {
            orientation: Orientation::Horizontal,
            left,
            right,
        } => {
            add_height(tree, left, items, sign, row);
            add_height(tree, right, items, sign, row);
        }
    }
}

/// Assemble `A·w = b` for the tree at the given total width.
///
/// Row 0 binds the root's width to `total_width`. Each inner node, in
/// pre-order, adds one zero-valued row: equal heights across a vertical split,
/// equal widths across a horizontal one.
pub fn assemble_system<H>(
    tree: &SplitTree,
    items: &[Item<H>],
    total_width: f64,
) -> (DMatrix<f64>, DVector<f64>) {
    let n = tree.len();
    let mut a = DMatrix::zeros(n, n);
    let mut b = DVector::zeros(n);

    a.row_mut(0)
        .copy_from(&width_constraint(tree, tree.root).transpose());
    b[0] = total_width;

    let mut r = 1;
    for id in tree.preorder() {
        let SplitNode::Inner {
            orientation,
            left,
            right,
        } = *tree.get(id)
        else {
            continue;
        };

        let mut row = DVector::zeros(n);
        match orientation {
            Orientation::Vertical => {
                add_height(tree, left, items, 1.0, &mut row);
                add_height(tree, right, items, -1.0, &mut row);
            }
            Orientation::Horizontal => {
                add_width(tree, left, 1.0, &mut row);
                add_width(tree, right, -1.0, &mut row);
            }
        }
        a.row_mut(r).copy_from(&row.transpose());
        r += 1;
    }
    debug_assert_eq!(r, n);

    tracing::debug!("Assembled {}x{} constraint system for width {}", n, n, total_width);

    (a, b)
}
