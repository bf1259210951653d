/// Index into the arena `Vec<SplitNode>`. u32 keeps nodes small; item counts are far below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How an inner node divides its box between its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side: equal heights, widths add up.
    Vertical,
    /// Children stacked top to bottom: equal widths, heights add up.
    Horizontal,
}

impl Orientation {
    /// Orientation used at the given tree depth (root = 0 is vertical).
    pub fn for_depth(depth: u16) -> Self {
        if depth % 2 == 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// A node of the split tree, stored in a flat arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitNode {
    /// Exactly one item, by its index in the input list
    Leaf { item: usize },
    /// A split of a contiguous run of items into two halves
    Inner {
        orientation: Orientation,
        left: NodeId,
        right: NodeId,
    },
}

/// The split tree stored as a flat arena of nodes.
///
/// Immutable once built. Children always sit at higher indices than their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTree {
    /// All nodes in contiguous memory
    pub(crate) nodes: Vec<SplitNode>,
    /// Root node index
    pub(crate) root: NodeId,
    /// Number of items (leaves)
    pub(crate) items: usize,
}

impl SplitTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &SplitNode {
        &self.nodes[id.index()]
    }

    /// Number of items laid out by this tree.
    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Total number of nodes (leaves + inner).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn inner_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, SplitNode::Inner { .. }))
            .count()
    }

    /// Pre-order walk (node, then left subtree, then right subtree).
    pub fn preorder(&self) -> PreorderIter<'_> {
        PreorderIter {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Item indices of the leaves, read left to right.
    pub fn leaf_indices(&self) -> Vec<usize> {
        self.preorder()
            .filter_map(|id| match *self.get(id) {
                SplitNode::Leaf { item } => Some(item),
                SplitNode::Inner { .. } => None,
            })
            .collect()
    }

    /// Length of the longest root-to-leaf path in edges (single leaf = 0).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, d)) = stack.pop() {
            deepest = deepest.max(d);
            if let SplitNode::Inner { left, right, .. } = *self.get(id) {
                stack.push((left, d + 1));
                stack.push((right, d + 1));
            }
        }
        deepest
    }
}

/// Iterator over node ids in pre-order.
pub struct PreorderIter<'a> {
    tree: &'a SplitTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let SplitNode::Inner { left, right, .. } = *self.tree.get(id) {
            // Right first so left is popped next
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(id)
    }
}
