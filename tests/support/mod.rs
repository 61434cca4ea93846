//! Test support library
//! Helpers shared by the integration tests.
#![allow(dead_code)]

use nalgebra::Point3;
use pathcraft::float_types::Real;
use pathcraft::path::Path;

/// Loose comparison for values that went through trigonometry.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() <= eps
}

/// Planar distance of a point from the Z axis.
pub fn radius(p: &Point3<Real>) -> Real {
    p.x.hypot(p.y)
}

/// Smallest and largest planar radius along a path.
pub fn radius_range(path: &Path) -> (Real, Real) {
    path.iter()
        .map(radius)
        .fold((Real::MAX, Real::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)))
}

/// Z of the first and last point.
pub fn z_span(path: &Path) -> (Real, Real) {
    let first = path.first().map(|p| p.z).unwrap_or(Real::NAN);
    let last = path.last().map(|p| p.z).unwrap_or(Real::NAN);
    (first, last)
}
