//! Regions, quadrants and the half-open containment rule.

use crate::error::IndexError;

/// A 2D point with real coordinates.
pub type Point = glam::DVec2;

/// One of the four children of a subdivided region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// All quadrants, in child storage order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Position of this quadrant in a node's children array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned half-open rectangle `[x_min, x_max) x [y_min, y_max)`.
///
/// "North" is the side of larger `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Region {
    /// Create a region, rejecting non-finite bounds and non-positive extents.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, IndexError> {
        let finite = x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite();
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(IndexError::DegenerateRegion { x_min, y_min, x_max, y_max });
        }
        Ok(Self { x_min, y_min, x_max, y_max })
    }

    /// Build a child region. Callers guarantee `can_split` held for the parent.
    #[inline]
    fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Get the width of the region.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get the height of the region.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Midpoint of both axes.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }

    /// Half-open containment test.
    ///
    /// A point on `x_max` or `y_max` is outside, so points on the world's
    /// outer max edge can never be stored. NaN coordinates are never contained.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.x_min <= point.x && point.x < self.x_max && self.y_min <= point.y && point.y < self.y_max
    }

    /// Whether halving still yields four non-empty regions at `f64` resolution.
    #[inline]
    pub fn can_split(&self) -> bool {
        let mid = self.center();
        self.x_min < mid.x && mid.x < self.x_max && self.y_min < mid.y && mid.y < self.y_max
    }

    /// The region covered by one quadrant of this region.
    ///
    /// Requires [`can_split`](Self::can_split); otherwise a quadrant would
    /// have zero width or height.
    pub fn quadrant(&self, quadrant: Quadrant) -> Region {
        debug_assert!(self.can_split(), "splitting an unsplittable region {self:?}");
        let mid = self.center();
        match quadrant {
            Quadrant::NorthWest => Region::from_bounds(self.x_min, mid.y, mid.x, self.y_max),
            Quadrant::NorthEast => Region::from_bounds(mid.x, mid.y, self.x_max, self.y_max),
            Quadrant::SouthWest => Region::from_bounds(self.x_min, self.y_min, mid.x, mid.y),
            Quadrant::SouthEast => Region::from_bounds(mid.x, self.y_min, self.x_max, mid.y),
        }
    }

    /// All four quadrants, in [`Quadrant::ALL`] order. They tile `self` exactly.
    ///
    /// Same precondition as [`quadrant`](Self::quadrant).
    pub fn split(&self) -> [Region; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }

    /// The quadrant holding `point`, if `point` lies inside this region.
    #[inline]
    pub fn quadrant_of(&self, point: Point) -> Option<Quadrant> {
        if !self.contains(point) {
            return None;
        }
        let mid = self.center();
        Some(match (point.x < mid.x, point.y < mid.y) {
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::NorthEast,
            (true, true) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rejects_degenerate() {
        assert!(Region::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Region::new(0.0, 10.0, 10.0, 5.0).is_err());
        assert!(Region::new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(Region::new(f64::NAN, 0.0, 10.0, 10.0).is_err());
        assert!(Region::new(-5.0, -5.0, 5.0, 5.0).is_ok());
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Region::new(0.0, 0.0, 100.0, 100.0).unwrap();

        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(99.999, 50.0)));
        assert!(!r.contains(Point::new(100.0, 50.0)));
        assert!(!r.contains(Point::new(50.0, 100.0)));
        assert!(!r.contains(Point::new(-0.001, 50.0)));
        assert!(!r.contains(Point::new(f64::NAN, 50.0)));
    }

    #[test]
    fn test_split_tiles_parent() {
        let r = Region::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let [nw, ne, sw, se] = r.split();

        assert_eq!(nw, Region::new(0.0, 50.0, 50.0, 100.0).unwrap());
        assert_eq!(ne, Region::new(50.0, 50.0, 100.0, 100.0).unwrap());
        assert_eq!(sw, Region::new(0.0, 0.0, 50.0, 50.0).unwrap());
        assert_eq!(se, Region::new(50.0, 0.0, 100.0, 50.0).unwrap());

        let area: f64 = r.split().iter().map(|c| c.width() * c.height()).sum();
        assert_eq!(area, r.width() * r.height());
    }

    #[test]
    fn test_every_point_in_exactly_one_quadrant() {
        let r = Region::new(-10.0, -10.0, 10.0, 10.0).unwrap();
        let children = r.split();
        let samples = [-10.0, -7.5, -0.0001, 0.0, 0.0001, 3.0, 9.999];

        for &x in &samples {
            for &y in &samples {
                let p = Point::new(x, y);
                let holders: Vec<Quadrant> = Quadrant::ALL
                    .into_iter()
                    .filter(|q| children[q.index()].contains(p))
                    .collect();
                assert_eq!(holders.len(), 1, "point {p:?}");
                assert_eq!(r.quadrant_of(p), Some(holders[0]));
            }
        }
    }

    #[test]
    fn test_can_split_detects_exhausted_resolution() {
        let tiny = Region::new(1.0, 1.0, 1.0 + f64::EPSILON, 1.0 + f64::EPSILON).unwrap();
        assert!(!tiny.can_split());
        assert!(Region::new(0.0, 0.0, 1.0, 1.0).unwrap().can_split());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unsplittable")]
    fn test_split_requires_splittable_region() {
        let tiny = Region::new(1.0, 1.0, 1.0 + f64::EPSILON, 1.0 + f64::EPSILON).unwrap();
        let _ = tiny.split();
    }
}
