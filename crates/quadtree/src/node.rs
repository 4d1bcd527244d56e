//! Tree nodes and the recursive insert/lookup algorithms.

use crate::entry::Entry;
use crate::geometry::{Point, Quadrant, Region};
use tracing::trace;

/// Leaf or internal payload of a [`Node`].
///
/// A node starts as a leaf and becomes internal exactly once, on overflow.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Entries held directly, in insertion order.
    Leaf(Vec<Entry>),
    /// Four children in [`Quadrant::ALL`] order.
    Internal(Box<[Node; 4]>),
}

/// A region of the tree.
#[derive(Debug, Clone)]
pub struct Node {
    region: Region,
    depth: u32,
    kind: NodeKind,
}

/// Limits shared by every node of one index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub capacity: usize,
    pub max_depth: Option<u32>,
}

impl Limits {
    /// Whether a full leaf at `depth` over `region` may still subdivide.
    #[inline]
    fn allows_split(&self, depth: u32, region: &Region) -> bool {
        self.max_depth.is_none_or(|max| depth < max) && region.can_split()
    }
}

impl Node {
    pub(crate) fn leaf(region: Region, depth: u32) -> Self {
        Self {
            region,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Distance from the root (the root is at depth 0).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Entries held directly by this node. Always empty for internal nodes.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        match &self.kind {
            NodeKind::Leaf(entries) => entries,
            NodeKind::Internal(_) => &[],
        }
    }

    #[inline]
    pub fn children(&self) -> Option<&[Node; 4]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(children),
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Node> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Place `entry` in this subtree. Returns the entry back if its point is
    /// outside this node's region.
    pub(crate) fn insert(&mut self, entry: Entry, limits: Limits) -> Result<(), Entry> {
        if !self.region.contains(entry.point()) {
            return Err(entry);
        }

        if let NodeKind::Leaf(entries) = &mut self.kind {
            if entries.len() < limits.capacity {
                entries.push(entry);
                return Ok(());
            }
            if !limits.allows_split(self.depth, &self.region) {
                trace!(
                    depth = self.depth,
                    held = entries.len() + 1,
                    "Leaf at resolution limit, storing past capacity"
                );
                entries.push(entry);
                return Ok(());
            }
            self.subdivide(limits);
        }

        self.insert_into_child(entry, limits)
    }

    /// Descend into the one child containing the entry's point.
    fn insert_into_child(&mut self, entry: Entry, limits: Limits) -> Result<(), Entry> {
        let NodeKind::Internal(children) = &mut self.kind else {
            return Err(entry);
        };
        match children.iter_mut().find(|c| c.region.contains(entry.point())) {
            Some(child) => child.insert(entry, limits),
            None => Err(entry),
        }
    }

    /// Turn a full leaf into an internal node, pushing its entries down.
    fn subdivide(&mut self, limits: Limits) {
        let depth = self.depth + 1;
        let children = Box::new(self.region.split().map(|r| Node::leaf(r, depth)));
        let NodeKind::Leaf(entries) = std::mem::replace(&mut self.kind, NodeKind::Internal(children))
        else {
            return;
        };

        trace!(
            depth = self.depth,
            moved = entries.len(),
            x_min = self.region.x_min(),
            y_min = self.region.y_min(),
            x_max = self.region.x_max(),
            y_max = self.region.y_max(),
            "Subdividing leaf"
        );

        for existing in entries {
            // Every entry here passed this node's bounds check, and the
            // children tile this node, so one child always accepts it.
            let placed = self.insert_into_child(existing, limits);
            debug_assert!(placed.is_ok(), "subdivision lost an entry: {placed:?}");
        }
    }

    /// Exact-match lookup in this subtree. First match in insertion order wins.
    pub(crate) fn find(&self, point: Point) -> Option<&Entry> {
        if !self.region.contains(point) {
            return None;
        }

        match &self.kind {
            NodeKind::Leaf(entries) => entries.iter().find(|e| e.is_at(point)),
            NodeKind::Internal(children) => children
                .iter()
                .find(|c| c.region.contains(point))
                .and_then(|c| c.find(point)),
        }
    }
}
