use thiserror::Error;

/// Result alias used throughout the layout engine.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by tree building, solving and batching.
///
/// All of them are deterministic: the same input fails the same way again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("constraint system for {items} items is singular or degenerate")]
    UnsolvableLayout { items: usize },
    #[error("group size must be positive, got {0}")]
    GroupSizeInvalid(usize),
}
