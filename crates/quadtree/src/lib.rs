//! Point-region quadtree for named 2D points.
//!
//! This crate contains:
//! - Half-open regions and the quadrant split ([`Region`], [`Quadrant`])
//! - The tree nodes with their leaf/internal states ([`Node`], [`NodeKind`])
//! - The index itself, with exact-match lookup ([`Index`])

mod entry;
mod error;
mod geometry;
mod index;
mod node;

pub use entry::Entry;
pub use error::IndexError;
pub use geometry::{Point, Quadrant, Region};
pub use index::{Index, Nodes};
pub use node::{Node, NodeKind};
