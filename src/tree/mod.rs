pub mod arena;
pub mod partition;

use self::arena::{NodeId, Orientation, SplitNode, SplitTree};
use crate::error::{LayoutError, Result};
use crate::layout::types::Item;

/// Build the split tree for an ordered list of items.
///
/// Each inner node splits a contiguous run of items where the running priority
/// first reaches half of the run's total, so leaves read left to right come out
/// in input order. Orientation alternates with depth, starting vertical at the root.
pub fn build_tree<H>(items: &[Item<H>]) -> Result<SplitTree> {
    if items.is_empty() {
        return Err(LayoutError::InvalidInput("item list is empty".into()));
    }
    for (i, item) in items.iter().enumerate() {
        item.validate(i)?;
    }

    let priorities: Vec<f64> = items.iter().map(|item| item.priority).collect();

    // 2n - 1 nodes for n leaves
    let mut nodes = Vec::with_capacity(2 * items.len() - 1);
    nodes.push(SplitNode::Leaf { item: 0 });

    // (slot, start, end, depth) over half-open index runs. Explicit stack so
    // long degenerate runs can't overflow the call stack.
    let mut pending: Vec<(NodeId, usize, usize, u16)> = vec![(NodeId(0), 0, items.len(), 0)];

    while let Some((slot, start, end, depth)) = pending.pop() {
        if end - start == 1 {
            nodes[slot.index()] = SplitNode::Leaf { item: start };
            continue;
        }

        let mid = start + partition::split_point(&priorities[start..end]);

        let left = NodeId(nodes.len() as u32);
        nodes.push(SplitNode::Leaf { item: start });
        let right = NodeId(nodes.len() as u32);
        nodes.push(SplitNode::Leaf { item: mid });

        nodes[slot.index()] = SplitNode::Inner {
            orientation: Orientation::for_depth(depth),
            left,
            right,
        };

        pending.push((right, mid, end, depth + 1));
        pending.push((left, start, mid, depth + 1));
    }

    let tree = SplitTree {
        nodes,
        root: NodeId(0),
        items: items.len(),
    };

    tracing::debug!(
        "Built split tree: {} items, {} nodes, depth {}",
        tree.len(),
        tree.node_count(),
        tree.depth()
    );

    Ok(tree)
}
