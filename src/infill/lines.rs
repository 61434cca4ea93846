//! Straight-line hatching inside a closed boundary.

use crate::errors::{Result, require_positive};
use crate::float_types::{FRAC_PI_2, Real, tolerance};
use crate::path::Path;
use geo::{BoundingRect, Coord, LineString, Point, Rotate};
use nalgebra::Point3;

/// Rasterises straight infill lines inside a closed boundary.
///
/// `angle` is in radians, measured from the X axis. Lines are joined in
/// order at the boundary's height. Every link between two lines stays inside
/// the boundary, so a concave boundary whose inside splits into separate
/// regions comes back as one path per region. An empty hatch is a single
/// degenerate path.
pub trait LineInfill {
    fn line_infill(&self, boundary: &Path, infill_distance: Real, angle: Real) -> Vec<Path>;
}

/// Even-odd scanline hatching.
///
/// The boundary is rotated so the hatch runs along X, cut by horizontal
/// scanlines at the infill spacing, and the inside spans are linked
/// boustrophedon before rotating back. A run of lines continues while each
/// scanline cuts the same number of spans and every span overlaps the one
/// below it; otherwise the open runs end and new ones start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanlineInfill;

/// One boustrophedon run of hatch lines over a single region.
struct Run {
    coords: Vec<Coord<Real>>,
    span: (Real, Real),
    forward: bool,
}

impl Run {
    const fn new() -> Self {
        Self { coords: Vec::new(), span: (0.0, 0.0), forward: true }
    }

    fn overlaps(&self, (a, b): (Real, Real)) -> bool {
        a < self.span.1 && self.span.0 < b
    }

    fn push(&mut self, (a, b): (Real, Real), scan_y: Real) {
        let (from, to) = if self.forward { (a, b) } else { (b, a) };
        self.coords.push(Coord { x: from, y: scan_y });
        self.coords.push(Coord { x: to, y: scan_y });
        self.span = (a, b);
        self.forward = !self.forward;
    }
}

impl ScanlineInfill {
    /// Sorted X crossings of the (closed) ring with the line `y = scan_y`.
    fn crossings(ring: &LineString<Real>, scan_y: Real) -> Vec<Real> {
        let mut xs: Vec<Real> = ring
            .lines()
            .filter(|line| {
                let (a, b) = (line.start.y, line.end.y);
                (a <= scan_y && b > scan_y) || (b <= scan_y && a > scan_y)
            })
            .map(|line| {
                let t = (scan_y - line.start.y) / (line.end.y - line.start.y);
                line.start.x + t * (line.end.x - line.start.x)
            })
            .collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        xs
    }
}

impl LineInfill for ScanlineInfill {
    fn line_infill(&self, boundary: &Path, infill_distance: Real, angle: Real) -> Vec<Path> {
        let Some(z) = boundary.first().map(|p| p.z) else {
            return vec![Path::degenerate()];
        };
        if boundary.len() < 3 || infill_distance.is_nan() || infill_distance <= 0.0 {
            return vec![Path::degenerate()];
        }

        let origin = Point::new(0.0, 0.0);
        let degrees = angle.to_degrees();
        let mut ring: LineString<Real> =
            boundary.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        ring.close();
        let ring = ring.rotate_around_point(-degrees, origin);
        let Some(bounds) = ring.bounding_rect() else {
            return vec![Path::degenerate()];
        };

        let mut finished: Vec<Run> = Vec::new();
        let mut active: Vec<Run> = Vec::new();
        let mut scan_y = bounds.min().y + infill_distance / 2.0;
        while scan_y < bounds.max().y {
            let xs = Self::crossings(&ring, scan_y);
            // a scanline grazing a vertex yields a zero-length span
            let spans: Vec<(Real, Real)> = xs
                .chunks_exact(2)
                .map(|pair| (pair[0], pair[1]))
                .filter(|(a, b)| b - a > tolerance())
                .collect();
            let continues = spans.len() == active.len()
                && active.iter().zip(&spans).all(|(run, &span)| run.overlaps(span));
            if !continues {
                finished.append(&mut active);
                active = spans.iter().map(|_| Run::new()).collect();
            }
            for (run, &span) in active.iter_mut().zip(&spans) {
                run.push(span, scan_y);
            }
            scan_y += infill_distance;
        }
        finished.append(&mut active);
        if finished.is_empty() {
            return vec![Path::degenerate()];
        }
        if finished.len() > 1 {
            log::debug!("boundary hatched as {} separate regions", finished.len());
        }

        finished
            .into_iter()
            .map(|run| {
                let hatch = LineString::new(run.coords).rotate_around_point(degrees, origin);
                Path::from_points(hatch.coords().map(|c| Point3::new(c.x, c.y, z)).collect())
            })
            .collect()
    }
}

/// Hatch each bottom layer inside its boundary, turning the hatch 90° every
/// layer (0, π/2, 0, …) so successive layers cross.
///
/// The paths come back in layer order; a layer whose boundary splits into
/// several regions contributes one path per region.
pub fn rotated_bottom_infill<L>(filler: &L, boundaries: &[Path], infill_distance: Real) -> Result<Vec<Path>>
where
    L: LineInfill + ?Sized,
{
    require_positive("infill distance", infill_distance)?;
    Ok(boundaries
        .iter()
        .enumerate()
        .flat_map(|(layer, boundary)| {
            let angle = if layer % 2 == 0 { 0.0 } else { FRAC_PI_2 };
            log::trace!("bottom layer {} hatched at {} rad", layer, angle);
            filler.line_infill(boundary, infill_distance, angle)
        })
        .collect())
}
