//! Swept-radius path volume

use std::fmt;
use std::sync::{Arc, OnceLock};

use log::debug;
use nalgebra::distance;
use voxcast_core::{Bounds, Error, Point3d, Result};

use crate::minimize::{maximize_scalar, minimize_scalar};

/// Margin a point must clear inside the swept surface before it counts as
/// contained. Guards against optimizer imprecision near the surface.
pub const DISTANCE_TOLERANCE: f64 = 1e-4;

type PositionFn = dyn Fn(f64) -> Point3d + Send + Sync;
type RadiusFn = dyn Fn(f64) -> f64 + Send + Sync;

/// A tube of varying thickness swept along a parametric curve.
///
/// `position` maps the curve parameter to the centerline and `radius` to the
/// local tube radius (callers keep it non-negative). Membership tests find
/// the nearest centerline point with a bounded scalar search, so curves whose
/// distance landscape has several separated minima (self-intersections, tight
/// folds) can misclassify points near the extra minima. That approximation is
/// part of this volume's contract.
///
/// Bounds are either supplied up front or inferred once on first use by
/// minimizing and maximizing the swept envelope per axis; the inferred box is
/// cached for later calls.
#[derive(Clone)]
pub struct SweptPath {
    position: Arc<PositionFn>,
    radius: Arc<RadiusFn>,
    tmin: f64,
    tmax: f64,
    bounds: OnceLock<Bounds>,
}

impl SweptPath {
    /// Create a swept path over the parameter domain `[tmin, tmax]`.
    ///
    /// Fails with [`Error::InvalidDomain`] unless `tmin < tmax` and both
    /// endpoints are finite.
    pub fn new<P, R>(position: P, radius: R, tmin: f64, tmax: f64) -> Result<Self>
    where
        P: Fn(f64) -> Point3d + Send + Sync + 'static,
        R: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        if !tmin.is_finite() || !tmax.is_finite() || tmin >= tmax {
            return Err(Error::InvalidDomain { tmin, tmax });
        }
        Ok(Self {
            position: Arc::new(position),
            radius: Arc::new(radius),
            tmin,
            tmax,
            bounds: OnceLock::new(),
        })
    }

    /// Create a swept path with explicit bounds, skipping the per-axis
    /// envelope search entirely.
    pub fn with_bounds<P, R>(
        position: P,
        radius: R,
        tmin: f64,
        tmax: f64,
        bounds: Bounds,
    ) -> Result<Self>
    where
        P: Fn(f64) -> Point3d + Send + Sync + 'static,
        R: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let path = Self::new(position, radius, tmin, tmax)?;
        let _ = path.bounds.set(bounds);
        Ok(path)
    }

    /// The parameter domain `(tmin, tmax)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.tmin, self.tmax)
    }

    /// Whether `point` lies inside the swept surface.
    ///
    /// Finds the curve parameter nearest to `point`, then requires the local
    /// radius to exceed that distance by [`DISTANCE_TOLERANCE`].
    pub fn contains(&self, point: &Point3d) -> bool {
        let distance_to_curve = |t: f64| distance(&(self.position)(t), point);
        let t_nearest = minimize_scalar(&distance_to_curve, self.tmin, self.tmax);
        (self.radius)(t_nearest) - distance_to_curve(t_nearest) > DISTANCE_TOLERANCE
    }

    /// The axis-aligned bounds of the swept envelope, inferred on first call
    /// and cached.
    pub fn bounds(&self) -> Bounds {
        *self.bounds.get_or_init(|| self.infer_bounds())
    }

    /// One bounded optimization per box face: extremize the centerline
    /// coordinate offset by the local radius, then widen to integer corners.
    fn infer_bounds(&self) -> Bounds {
        let envelope_min = |axis: usize| {
            let f = |t: f64| (self.position)(t)[axis] - (self.radius)(t);
            f(minimize_scalar(&f, self.tmin, self.tmax))
        };
        let envelope_max = |axis: usize| {
            let f = |t: f64| (self.position)(t)[axis] + (self.radius)(t);
            f(maximize_scalar(&f, self.tmin, self.tmax))
        };

        let mins = Point3d::new(envelope_min(0), envelope_min(1), envelope_min(2));
        let maxs = Point3d::new(envelope_max(0), envelope_max(1), envelope_max(2));
        let bounds = Bounds::new(mins, maxs).snapped();
        debug!(
            "inferred swept path bounds {:?} over t in [{}, {}]",
            bounds, self.tmin, self.tmax
        );
        bounds
    }
}

impl fmt::Debug for SweptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweptPath")
            .field("tmin", &self.tmin)
            .field("tmax", &self.tmax)
            .field("bounds", &self.bounds.get())
            .finish_non_exhaustive()
    }
}
