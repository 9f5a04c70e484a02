//! Lattice point set container and set algebra

use crate::bounds::LatticeBounds;
use crate::point::{LatticePoint, LatticeVector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{BitAnd, BitOr, Sub};

/// An unordered set of 3D lattice points.
///
/// Rendered volumes materialize into this container; boolean composition of
/// solids happens here as plain set algebra on the sampled points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    pub points: HashSet<LatticePoint>,
}

impl PointSet {
    /// Create a new empty point set
    pub fn new() -> Self {
        Self {
            points: HashSet::new(),
        }
    }

    /// Create a new point set with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: HashSet::with_capacity(capacity),
        }
    }

    /// Create a point set from a vector of points
    pub fn from_points(points: Vec<LatticePoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Get the number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the set, returning whether it was newly inserted
    pub fn insert(&mut self, point: LatticePoint) -> bool {
        self.points.insert(point)
    }

    /// Check whether the set contains a point
    pub fn contains(&self, point: &LatticePoint) -> bool {
        self.points.contains(point)
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, LatticePoint> {
        self.points.iter()
    }

    /// Clear all points from the set
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The points present in `self`, `other`, or both
    pub fn union(&self, other: &PointSet) -> PointSet {
        self.points.union(&other.points).copied().collect()
    }

    /// The points present in both `self` and `other`
    pub fn intersection(&self, other: &PointSet) -> PointSet {
        self.points.intersection(&other.points).copied().collect()
    }

    /// The points present in `self` but not in `other`
    pub fn difference(&self, other: &PointSet) -> PointSet {
        self.points.difference(&other.points).copied().collect()
    }

    /// A copy of the set with every point shifted by `offset`.
    pub fn translated(&self, offset: &LatticeVector) -> PointSet {
        self.points.iter().map(|p| p + offset).collect()
    }

    /// The tight integer bounds of the set, or `None` when empty.
    pub fn lattice_bounds(&self) -> Option<LatticeBounds> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut mins = *first;
        let mut maxs = *first;
        for p in iter {
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            mins.z = mins.z.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
            maxs.z = maxs.z.max(p.z);
        }
        Some(LatticeBounds::new(mins, maxs))
    }
}

impl IntoIterator for PointSet {
    type Item = LatticePoint;
    type IntoIter = std::collections::hash_set::IntoIter<LatticePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a LatticePoint;
    type IntoIter = std::collections::hash_set::Iter<'a, LatticePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<LatticePoint> for PointSet {
    fn extend<I: IntoIterator<Item = LatticePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<LatticePoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = LatticePoint>>(iter: I) -> Self {
        Self {
            points: HashSet::from_iter(iter),
        }
    }
}

impl BitOr for &PointSet {
    type Output = PointSet;

    fn bitor(self, rhs: &PointSet) -> PointSet {
        self.union(rhs)
    }
}

impl BitAnd for &PointSet {
    type Output = PointSet;

    fn bitand(self, rhs: &PointSet) -> PointSet {
        self.intersection(rhs)
    }
}

impl Sub for &PointSet {
    type Output = PointSet;

    fn sub(self, rhs: &PointSet) -> PointSet {
        self.difference(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[(i64, i64, i64)]) -> PointSet {
        points
            .iter()
            .map(|&(x, y, z)| LatticePoint::new(x, y, z))
            .collect()
    }

    #[test]
    fn test_set_algebra() {
        let a = set(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        let b = set(&[(1, 0, 0), (2, 0, 0), (3, 0, 0)]);

        assert_eq!(&a | &b, set(&[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]));
        assert_eq!(&a & &b, set(&[(1, 0, 0), (2, 0, 0)]));
        assert_eq!(&a - &b, set(&[(0, 0, 0)]));
    }

    #[test]
    fn test_translated_shifts_every_point() {
        let a = set(&[(0, 0, 0), (1, 2, 3)]);
        let moved = a.translated(&LatticeVector::new(-1, 10, 0));
        assert_eq!(moved, set(&[(-1, 10, 0), (0, 12, 3)]));
        assert_eq!(moved.len(), a.len());
    }

    #[test]
    fn test_lattice_bounds_tight() {
        let a = set(&[(3, -1, 2), (-2, 4, 2), (0, 0, 7)]);
        let bounds = a.lattice_bounds().unwrap();
        assert_eq!(bounds.mins, LatticePoint::new(-2, -1, 2));
        assert_eq!(bounds.maxs, LatticePoint::new(3, 4, 7));
    }

    #[test]
    fn test_lattice_bounds_of_empty_set() {
        assert!(PointSet::new().lattice_bounds().is_none());
    }

    #[test]
    fn test_insert_and_contains() {
        let mut a = PointSet::new();
        assert!(a.insert(LatticePoint::new(1, 1, 1)));
        assert!(!a.insert(LatticePoint::new(1, 1, 1)));
        assert!(a.contains(&LatticePoint::new(1, 1, 1)));
        assert_eq!(a.len(), 1);
    }
}
