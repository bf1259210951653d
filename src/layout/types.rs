use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Priority given to items that don't specify one.
pub const DEFAULT_PRIORITY: f64 = 1.0;

fn default_priority() -> f64 {
    DEFAULT_PRIORITY
}

/// A single photo to be placed in the mosaic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<H> {
    /// Height divided by width
    pub aspect: f64,
    /// Relative visual weight; heavier items get more of the split
    #[serde(default = "default_priority")]
    pub priority: f64,
    /// Caller's handle, handed back on the matching tile
    pub handle: H,
}

impl<H> Item<H> {
    pub fn new(aspect: f64, handle: H) -> Self {
        Self {
            aspect,
            priority: DEFAULT_PRIORITY,
            handle,
        }
    }

    /// Build an item from natural pixel dimensions (e.g. a decoded image).
    pub fn from_size(width: f64, height: f64, handle: H) -> Self {
        Self::new(height / width, handle)
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Check that aspect and priority are finite and strictly positive.
    pub fn validate(&self, index: usize) -> Result<()> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(LayoutError::InvalidInput(format!(
                "item {} has non-positive aspect {}",
                index, self.aspect
            )));
        }
        if !(self.priority.is_finite() && self.priority > 0.0) {
            return Err(LayoutError::InvalidInput(format!(
                "item {} has non-positive priority {}",
                index, self.priority
            )));
        }
        Ok(())
    }
}

/// A placed item: absolute pixel box plus the item's handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile<H> {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub handle: H,
}

impl<H> Tile<H> {
    /// Right edge. Tiles from the layout engine always fit; hand-built ones saturate.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when the interiors of the two boxes intersect (shared edges don't count).
    pub fn overlaps<T>(&self, other: &Tile<T>) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Bounding size of a set of tiles, used to size the container holding them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

pub fn extent<H>(tiles: &[Tile<H>]) -> Extent {
    tiles.iter().fold(Extent::default(), |acc, t| Extent {
        width: acc.width.max(t.right()),
        height: acc.height.max(t.bottom()),
    })
}
