use crate::error::{LayoutError, Result};
use crate::layout::constraints::assemble_system;
use crate::layout::types::Item;
use crate::tree::arena::SplitTree;

/// Largest accepted residual `|A·w - b|`, relative to the total width.
pub const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Solved pixel widths, one per item index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    widths: Vec<u32>,
}

impl Solution {
    pub fn width(&self, item: usize) -> u32 {
        self.widths[item]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }
}

/// Round half-up. Sibling widths may drift from their parent's by a pixel or
/// so after this; that drift is accepted.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Solve the tree's constraint system for item widths at `total_width`.
pub fn solve_widths<H>(tree: &SplitTree, items: &[Item<H>], total_width: f64) -> Result<Solution> {
    let n = tree.len();
    let unsolvable = || {
        tracing::warn!("Rejecting constraint system for {} items at width {}", n, total_width);
        LayoutError::UnsolvableLayout { items: n }
    };

    let (a, b) = assemble_system(tree, items, total_width);
    let inverse = a.clone().try_inverse().ok_or_else(unsolvable)?;
    let w = &inverse * &b;

    if w.iter().any(|v| !v.is_finite()) {
        return Err(unsolvable());
    }
    let residual = (&a * &w - &b).amax();
    if residual > RESIDUAL_TOLERANCE * total_width.max(1.0) {
        tracing::debug!("Residual {:.3e} exceeds tolerance", residual);
        return Err(unsolvable());
    }

    let mut widths = Vec::with_capacity(n);
    for &v in w.iter() {
        let rounded = round_half_up(v);
        if rounded < 0.0 || rounded > u32::MAX as f64 {
            return Err(unsolvable());
        }
        widths.push(rounded as u32);
    }

    Ok(Solution { widths })
}
