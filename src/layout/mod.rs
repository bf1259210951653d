pub mod constraints;
pub mod place;
pub mod solve;
pub mod types;

use rayon::prelude::*;

use crate::error::{LayoutError, Result};
use crate::tree::{self, arena::SplitTree};

pub use self::types::{extent, Extent, Item, Tile, DEFAULT_PRIORITY};

/// Configuration for batch layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Items per independent layout group (None = everything in one group)
    pub group_size: Option<usize>,
    /// Solve groups on the rayon pool; stacking order is unaffected
    pub parallel: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            group_size: None,
            parallel: true,
        }
    }
}

fn check_width(total_width: f64) -> Result<()> {
    if total_width.is_finite() && total_width > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidInput(format!(
            "total width must be positive, got {}",
            total_width
        )))
    }
}

fn stack_overflow(top: u32, height: u32) -> LayoutError {
    LayoutError::InvalidInput(format!(
        "stacking a group of height {} at y {} exceeds the u32 pixel range",
        height, top
    ))
}

/// Solve a built tree at `total_width` and place its tiles from `(0, 0)`.
pub fn solve_layout<H: Clone>(
    tree: &SplitTree,
    items: &[Item<H>],
    total_width: f64,
) -> Result<Vec<Tile<H>>> {
    check_width(total_width)?;
    if items.len() != tree.len() {
        return Err(LayoutError::InvalidInput(format!(
            "tree covers {} items but {} were given",
            tree.len(),
            items.len()
        )));
    }
    for (i, item) in items.iter().enumerate() {
        item.validate(i)?;
    }
    let solution = solve::solve_widths(tree, items, total_width)?;
    place::place(tree, items, &solution, (0, 0))
}

/// Build and solve one group of items.
fn layout_group<H: Clone>(items: &[Item<H>], total_width: f64) -> Result<Vec<Tile<H>>> {
    let tree = tree::build_tree(items)?;
    solve_layout(&tree, items, total_width)
}

/// Lay out all items, in groups of at most `config.group_size`, stacking the
/// groups top to bottom.
///
/// Tiles come back in input order. Every group spans `total_width`; each one
/// starts below the lowest tile of the group before it.
pub fn layout_all<H>(items: &[Item<H>], total_width: f64, config: &LayoutConfig) -> Result<Vec<Tile<H>>>
where
    H: Clone + Send + Sync,
{
    let group_size = match config.group_size {
        Some(0) => return Err(LayoutError::GroupSizeInvalid(0)),
        Some(size) => size,
        None => items.len(),
    };
    check_width(total_width)?;
    if items.is_empty() {
        return Err(LayoutError::InvalidInput("item list is empty".into()));
    }
    for (i, item) in items.iter().enumerate() {
        item.validate(i)?;
    }

    tracing::info!(
        "Laying out {} items in groups of {} at width {}",
        items.len(),
        group_size,
        total_width
    );

    let groups: Vec<Vec<Tile<H>>> = if config.parallel {
        items
            .par_chunks(group_size)
            .map(|chunk| layout_group(chunk, total_width))
            .collect::<Result<_>>()?
    } else {
        items
            .chunks(group_size)
            .map(|chunk| layout_group(chunk, total_width))
            .collect::<Result<_>>()?
    };

    let mut tiles = Vec::with_capacity(items.len());
    let mut top = 0u32;
    for group in groups {
        let height = extent(&group).height;
        let next = top.checked_add(height).ok_or_else(|| stack_overflow(top, height))?;
        for mut tile in group {
            // Tile bottoms are within the group's height, so `next` bounds them.
            tile.y += top;
            tiles.push(tile);
        }
        top = next;
    }

    tracing::debug!("Stacked {} tiles, total height {}", tiles.len(), top);

    Ok(tiles)
}

/// Convenience wrapper over [`layout_all`] with an optional group size.
pub fn layout<H>(items: &[Item<H>], total_width: f64, group_size: Option<usize>) -> Result<Vec<Tile<H>>>
where
    H: Clone + Send + Sync,
{
    layout_all(
        items,
        total_width,
        &LayoutConfig {
            group_size,
            ..LayoutConfig::default()
        },
    )
}
