//! Named points stored in the index.

use crate::geometry::Point;

/// A label bound to a point. Immutable once created.
///
/// The index does not require labels or coordinates to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    label: String,
    point: Point,
}

impl Entry {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self::at(label, Point::new(x, y))
    }

    /// Create an entry from an existing point.
    pub fn at(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Exact coordinate equality, no tolerance.
    #[inline]
    pub fn is_at(&self, point: Point) -> bool {
        self.point.x == point.x && self.point.y == point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_at_is_exact() {
        let e = Entry::new("A", 10.0, 10.0);
        assert!(e.is_at(Point::new(10.0, 10.0)));
        assert!(!e.is_at(Point::new(10.0, 10.0001)));
        assert_eq!(e.label(), "A");
    }
}
