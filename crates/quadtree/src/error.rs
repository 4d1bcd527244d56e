//! Index error types.

use thiserror::Error;

/// Errors raised while building or populating an [`Index`](crate::Index).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("Leaf capacity must be at least 1")]
    InvalidCapacity,

    #[error("Degenerate region [{x_min}, {x_max}) x [{y_min}, {y_max})")]
    DegenerateRegion {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    #[error("Point ({x}, {y}) lies outside the world region")]
    OutOfBounds { x: f64, y: f64 },
}
