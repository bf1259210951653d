// Public library interface for ashlar-rs
// Mosaic layout: split tree -> constraint system -> placed tiles

pub mod error;
pub mod layout;
pub mod tree;

pub use error::{LayoutError, Result};
pub use layout::{layout, layout_all, solve_layout, Extent, Item, LayoutConfig, Tile};
pub use tree::build_tree;
