//! Axis-aligned bounds, real-valued and integer-valued

use crate::point::{LatticePoint, Point3d};
use serde::{Deserialize, Serialize};

/// An axis-aligned box in real coordinates, stored as per-axis extremes.
///
/// `mins` must not exceed `maxs` on any axis; constructors uphold this and
/// every operation preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub mins: Point3d,
    pub maxs: Point3d,
}

impl Bounds {
    /// Creates bounds from the two extreme corners.
    pub fn new(mins: Point3d, maxs: Point3d) -> Self {
        debug_assert!(
            mins.x <= maxs.x && mins.y <= maxs.y && mins.z <= maxs.z,
            "bounds must satisfy mins <= maxs on every axis"
        );
        Self { mins, maxs }
    }

    /// Creates bounds from one `(low, high)` pair per axis.
    pub fn from_ranges(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Self::new(
            Point3d::new(x.0, y.0, z.0),
            Point3d::new(x.1, y.1, z.1),
        )
    }

    /// The smallest bounds containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            Point3d::new(
                self.mins.x.min(other.mins.x),
                self.mins.y.min(other.mins.y),
                self.mins.z.min(other.mins.z),
            ),
            Point3d::new(
                self.maxs.x.max(other.maxs.x),
                self.maxs.y.max(other.maxs.y),
                self.maxs.z.max(other.maxs.z),
            ),
        )
    }

    /// These bounds widened outward to integer corners: each low is floored
    /// and each high is rounded up.
    pub fn snapped(&self) -> Bounds {
        Bounds::new(self.mins.map(f64::floor), self.maxs.map(f64::ceil))
    }

    /// The integer bounds enclosing these bounds.
    pub fn to_lattice(&self) -> LatticeBounds {
        LatticeBounds::new(
            self.mins.map(|v| v.floor() as i64),
            self.maxs.map(|v| v.ceil() as i64),
        )
    }
}

/// An axis-aligned box of integer lattice points, inclusive on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeBounds {
    pub mins: LatticePoint,
    pub maxs: LatticePoint,
}

impl LatticeBounds {
    /// Creates integer bounds from the two extreme corners.
    pub fn new(mins: LatticePoint, maxs: LatticePoint) -> Self {
        debug_assert!(
            mins.x <= maxs.x && mins.y <= maxs.y && mins.z <= maxs.z,
            "lattice bounds must satisfy mins <= maxs on every axis"
        );
        Self { mins, maxs }
    }

    /// Whether `point` lies within the bounds, boundary included.
    pub fn contains(&self, point: &LatticePoint) -> bool {
        self.mins.x <= point.x
            && point.x <= self.maxs.x
            && self.mins.y <= point.y
            && point.y <= self.maxs.y
            && self.mins.z <= point.z
            && point.z <= self.maxs.z
    }

    /// Exact number of lattice points enclosed, `(high - low + 1)` per axis.
    pub fn num_points(&self) -> usize {
        let width = |lo: i64, hi: i64| (hi - lo + 1) as usize;
        width(self.mins.x, self.maxs.x)
            * width(self.mins.y, self.maxs.y)
            * width(self.mins.z, self.maxs.z)
    }

    /// Enumerates every enclosed lattice point in deterministic x-major
    /// order (z varies fastest).
    ///
    /// Each call starts a fresh enumeration; iterators share no state.
    pub fn points(&self) -> LatticePointIter {
        LatticePointIter {
            bounds: *self,
            next: Some(self.mins),
        }
    }
}

/// Iterator over the lattice points of a [`LatticeBounds`].
#[derive(Debug, Clone)]
pub struct LatticePointIter {
    bounds: LatticeBounds,
    next: Option<LatticePoint>,
}

impl Iterator for LatticePointIter {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<LatticePoint> {
        let current = self.next?;
        let b = &self.bounds;
        let mut p = current;
        p.z += 1;
        if p.z > b.maxs.z {
            p.z = b.mins.z;
            p.y += 1;
            if p.y > b.maxs.y {
                p.y = b.mins.y;
                p.x += 1;
            }
        }
        self.next = (p.x <= b.maxs.x).then_some(p);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_takes_extremes_per_axis() {
        let a = Bounds::from_ranges((-1.0, 2.0), (0.0, 1.0), (-3.0, 0.5));
        let b = Bounds::from_ranges((0.0, 4.0), (-2.0, 0.5), (-1.0, 1.0));
        let u = a.union(&b);
        assert_eq!(u, Bounds::from_ranges((-1.0, 4.0), (-2.0, 1.0), (-3.0, 1.0)));
        assert_eq!(u, b.union(&a));
    }

    #[test]
    fn test_snapped_widens_outward() {
        let b = Bounds::from_ranges((-0.5, 1.5), (0.0, 2.0), (-2.7, -1.2));
        assert_eq!(
            b.snapped(),
            Bounds::from_ranges((-1.0, 2.0), (0.0, 2.0), (-3.0, -1.0))
        );
    }

    #[test]
    fn test_to_lattice_floors_lows_and_ceils_highs() {
        let b = Bounds::from_ranges((-0.5, 1.5), (0.0, 2.0), (-2.7, -1.2));
        let l = b.to_lattice();
        assert_eq!(l.mins, LatticePoint::new(-1, 0, -3));
        assert_eq!(l.maxs, LatticePoint::new(2, 2, -1));
    }

    #[test]
    fn test_lattice_contains_is_inclusive() {
        let l = LatticeBounds::new(LatticePoint::new(0, 0, 0), LatticePoint::new(2, 2, 2));
        assert!(l.contains(&LatticePoint::new(0, 0, 0)));
        assert!(l.contains(&LatticePoint::new(2, 2, 2)));
        assert!(!l.contains(&LatticePoint::new(3, 1, 1)));
        assert!(!l.contains(&LatticePoint::new(1, -1, 1)));
    }

    #[test]
    fn test_points_order_and_count() {
        let l = LatticeBounds::new(LatticePoint::new(0, 0, 0), LatticePoint::new(1, 1, 2));
        let points: Vec<_> = l.points().collect();
        assert_eq!(points.len(), l.num_points());
        assert_eq!(points.len(), 12);
        // z varies fastest, then y, then x.
        assert_eq!(points[0], LatticePoint::new(0, 0, 0));
        assert_eq!(points[1], LatticePoint::new(0, 0, 1));
        assert_eq!(points[2], LatticePoint::new(0, 0, 2));
        assert_eq!(points[3], LatticePoint::new(0, 1, 0));
        assert_eq!(points[11], LatticePoint::new(1, 1, 2));
    }

    #[test]
    fn test_points_enumeration_is_restartable() {
        let l = LatticeBounds::new(LatticePoint::new(-1, -1, -1), LatticePoint::new(1, 1, 1));
        let first: Vec<_> = l.points().collect();
        let second: Vec<_> = l.points().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 27);
    }

    #[test]
    fn test_single_point_bounds() {
        let l = LatticeBounds::new(LatticePoint::new(5, -3, 2), LatticePoint::new(5, -3, 2));
        assert_eq!(l.num_points(), 1);
        let points: Vec<_> = l.points().collect();
        assert_eq!(points, vec![LatticePoint::new(5, -3, 2)]);
    }
}
