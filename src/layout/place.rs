use crate::error::{LayoutError, Result};
use crate::layout::solve::Solution;
use crate::layout::types::{Item, Tile};
use crate::tree::arena::{NodeId, Orientation, SplitNode, SplitTree};

fn out_of_range(what: String) -> LayoutError {
    LayoutError::InvalidInput(format!("{} exceeds the u32 pixel range", what))
}

fn add(a: u32, b: u32, what: &str) -> Result<u32> {
    a.checked_add(b)
        .ok_or_else(|| out_of_range(format!("{} {} + {}", what, a, b)))
}

/// `floor(aspect * width)`, rejected rather than saturated when it doesn't fit.
fn leaf_height(item: usize, aspect: f64, width: u32) -> Result<u32> {
    let height = (aspect * width as f64).floor();
    if height.is_finite() && height >= 0.0 && height <= u32::MAX as f64 {
        Ok(height as u32)
    } else {
        Err(out_of_range(format!("item {} height {}", item, height)))
    }
}

/// Pixel width of the box laid out by `node`.
pub fn node_width(tree: &SplitTree, node: NodeId, solution: &Solution) -> Result<u32> {
    match *tree.get(node) {
        SplitNode::Leaf { item } => Ok(solution.width(item)),
        SplitNode::Inner {
            orientation: Orientation::Horizontal,
            left,
            ..
        } => node_width(tree, left, solution),
        SplitNode::Inner {
            orientation: Orientation::Vertical,
            left,
            right,
        } => add(
            node_width(tree, left, solution)?,
            node_width(tree, right, solution)?,
            "width",
        ),
    }
}

/// Pixel height of the box laid out by `node`.
pub fn node_height<H>(
    tree: &SplitTree,
    node: NodeId,
    items: &[Item<H>],
    solution: &Solution,
) -> Result<u32> {
    match *tree.get(node) {
        SplitNode::Leaf { item } => leaf_height(item, items[item].aspect, solution.width(item)),
        SplitNode::Inner {
            orientation: Orientation::Vertical,
            left,
            ..
        } => node_height(tree, left, items, solution),
        SplitNode::Inner {
            orientation: Orientation::Horizontal,
            left,
            right,
        } => add(
            node_height(tree, left, items, solution)?,
            node_height(tree, right, items, solution)?,
            "height",
        ),
    }
}

/// Place every leaf, starting with the root's top-left corner at `origin`.
///
/// Tiles come out in leaf order, which is the items' input order. Every tile's
/// right and bottom edge is guaranteed to fit in `u32`.
pub fn place<H: Clone>(
    tree: &SplitTree,
    items: &[Item<H>],
    solution: &Solution,
    origin: (u32, u32),
) -> Result<Vec<Tile<H>>> {
    let mut tiles = Vec::with_capacity(tree.len());
    place_node(tree, tree.root(), items, solution, origin.0, origin.1, &mut tiles)?;
    Ok(tiles)
}

fn place_node<H: Clone>(
    tree: &SplitTree,
    node: NodeId,
    items: &[Item<H>],
    solution: &Solution,
    x: u32,
    y: u32,
    tiles: &mut Vec<Tile<H>>,
) -> Result<()> {
    match *tree.get(node) {
        SplitNode::Leaf { item } => {
            let width = solution.width(item);
            let height = leaf_height(item, items[item].aspect, width)?;
            add(x, width, "right edge")?;
            add(y, height, "bottom edge")?;
            tiles.push(Tile {
                x,
                y,
                width,
                height,
                handle: items[item].handle.clone(),
            });
        }
        SplitNode::Inner {
            orientation,
            left,
            right,
        } => {
            place_node(tree, left, items, solution, x, y, tiles)?;
            let (rx, ry) = match orientation {
                Orientation::Vertical => (add(x, node_width(tree, left, solution)?, "x")?, y),
                Orientation::Horizontal => {
                    (x, add(y, node_height(tree, left, items, solution)?, "y")?)
                }
            };
            place_node(tree, right, items, solution, rx, ry, tiles)?;
        }
    }
    Ok(())
}
