//! The spatial index: a point-region quadtree over a fixed world region.

use crate::entry::Entry;
use crate::error::IndexError;
use crate::geometry::{Point, Region};
use crate::node::{Limits, Node};
use tracing::debug;

/// Point-region quadtree answering exact-coordinate lookups.
///
/// Besides the tree, the index remembers the entry matched by the most recent
/// [`find`](Index::find) so a renderer can highlight it. That state never
/// influences insertion or lookup.
#[derive(Debug, Clone)]
pub struct Index {
    root: Node,
    limits: Limits,
    len: usize,
    last_found: Option<Entry>,
}

impl Index {
    /// Create an empty index covering `world`, with leaves holding up to
    /// `capacity` entries.
    ///
    /// Leaves split for as long as `f64` can halve their region. Only entries
    /// with identical coordinates ever share a leaf past `capacity`.
    pub fn new(world: Region, capacity: usize) -> Result<Self, IndexError> {
        Self::build(world, capacity, None)
    }

    /// Like [`Index::new`], but a leaf at `max_depth` stores entries past
    /// `capacity` instead of splitting.
    pub fn with_max_depth(world: Region, capacity: usize, max_depth: u32) -> Result<Self, IndexError> {
        Self::build(world, capacity, Some(max_depth))
    }

    fn build(world: Region, capacity: usize, max_depth: Option<u32>) -> Result<Self, IndexError> {
        if capacity == 0 {
            return Err(IndexError::InvalidCapacity);
        }
        Ok(Self {
            root: Node::leaf(world, 0),
            limits: Limits { capacity, max_depth },
            len: 0,
            last_found: None,
        })
    }

    /// Insert an entry.
    ///
    /// Entries whose point lies outside the world region (including its
    /// `x_max`/`y_max` edges) are rejected with [`IndexError::OutOfBounds`]
    /// and the tree is left unchanged.
    pub fn insert(&mut self, entry: Entry) -> Result<(), IndexError> {
        match self.root.insert(entry, self.limits) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(rejected) => {
                let p = rejected.point();
                debug!(label = rejected.label(), x = p.x, y = p.y, "Rejected out-of-bounds entry");
                Err(IndexError::OutOfBounds { x: p.x, y: p.y })
            }
        }
    }

    /// Find the entry stored at exactly `point`, recording it as last found.
    ///
    /// The last-found state is reset before the search, so a miss clears it.
    pub fn find(&mut self, point: Point) -> Option<&Entry> {
        self.last_found = self.root.find(point).cloned();
        self.last_found.as_ref()
    }

    /// Find the entry stored at exactly `point` without touching last-found state.
    pub fn lookup(&self, point: Point) -> Option<&Entry> {
        self.root.find(point)
    }

    /// The entry matched by the most recent [`find`](Index::find).
    #[inline]
    pub fn last_found(&self) -> Option<&Entry> {
        self.last_found.as_ref()
    }

    pub fn clear_last_found(&mut self) {
        self.last_found = None;
    }

    #[inline]
    pub fn world(&self) -> &Region {
        self.root.region()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.limits.capacity
    }

    /// Depth cap, if one was configured.
    #[inline]
    pub fn max_depth(&self) -> Option<u32> {
        self.limits.max_depth
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Pre-order traversal of every node, children in NW, NE, SW, SE order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![&self.root] }
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Depth of the deepest node (0 for a lone root).
    pub fn depth(&self) -> u32 {
        self.nodes().map(Node::depth).max().unwrap_or(0)
    }

    /// Every stored entry, in traversal order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.nodes().flat_map(Node::entries)
    }
}

/// Iterator returned by [`Index::nodes`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
