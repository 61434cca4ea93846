//! Ordered point sequences describing continuous nozzle motion.

use crate::errors::{GeometryError, Result};
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// An ordered sequence of 3D points the nozzle visits without lifting.
///
/// A `Path` is built once by a generator and never mutated afterwards; the
/// transforming helpers return a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point3<Real>>,
    closed: bool,
}

impl Path {
    /// Open path through `points` in order.
    pub const fn from_points(points: Vec<Point3<Real>>) -> Self {
        Self { points, closed: false }
    }

    /// Closed path; the generator is expected to repeat the first point at the end
    /// if the motion must return to it.
    pub const fn closed(points: Vec<Point3<Real>>) -> Self {
        Self { points, closed: true }
    }

    /// Builds an open path from three coordinate sequences of equal length.
    pub fn from_xyz(x: &[Real], y: &[Real], z: &[Real]) -> Result<Self> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(GeometryError::MismatchedLengths { x: x.len(), y: y.len(), z: z.len() });
        }
        let points = x
            .iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect();
        Ok(Self::from_points(points))
    }

    /// The "nothing to print" path: a single point at the origin.
    pub fn degenerate() -> Self {
        Self::from_points(vec![Point3::origin()])
    }

    /// True for the single-origin-point path returned when a wall has no layers.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() == 1 && self.points[0] == Point3::origin()
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3<Real>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3<Real>> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&Point3<Real>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point3<Real>> {
        self.points.last()
    }

    pub fn into_points(self) -> Vec<Point3<Real>> {
        self.points
    }

    /// Split into the `(x, y, z)` sequences an exporter consumes.
    pub fn to_xyz(&self) -> (Vec<Real>, Vec<Real>, Vec<Real>) {
        let x = self.points.iter().map(|p| p.x).collect();
        let y = self.points.iter().map(|p| p.y).collect();
        let z = self.points.iter().map(|p| p.z).collect();
        (x, y, z)
    }

    /// Largest distance between two consecutive points (0 for fewer than two points).
    pub fn max_step(&self) -> Real {
        self.points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .fold(0.0, Real::max)
    }

    /// Whether z never decreases along the path.
    pub fn is_z_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[1].z >= w[0].z)
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }

    /// Returns a copy shifted by `(x, y, z)`, e.g. to move a design onto the bed origin.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        let offset = Vector3::new(x, y, z);
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
            closed: self.closed,
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point3<Real>;
    type IntoIter = std::slice::Iter<'a, Point3<Real>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The full print sequence: skirt, bottom, then wall, in the order they are printed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FullObject {
    paths: Vec<Path>,
}

impl FullObject {
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn extend<I: IntoIterator<Item = Path>>(&mut self, paths: I) {
        self.paths.extend(paths);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Number of points over every path.
    pub fn total_points(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

impl From<Vec<Path>> for FullObject {
    fn from(paths: Vec<Path>) -> Self {
        Self { paths }
    }
}

impl<'a> IntoIterator for &'a FullObject {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
