use crate::errors::{Result, require_finite, require_positive, require_size};
use crate::float_types::Real;
use crate::path::Path;
use crate::profile::Footprint;
use nalgebra::Point3;

/// Rectilinear floor fill: lines parallel to Y, `infill_distance` apart, each
/// running the opposite way from the previous one so consecutive lines join
/// without a travel move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZigzagInfill {
    footprint: Footprint,
    infill_distance: Real,
    z: Real,
}

impl ZigzagInfill {
    /// Fill `[-width, width] × [-depth, depth]` shrunk by `inset` on every side.
    pub fn new(footprint: Footprint, inset: Real, infill_distance: Real, z: Real) -> Result<Self> {
        require_positive("infill distance", infill_distance)?;
        require_finite("infill height", z)?;
        require_size("bottom inset", inset)?;
        let footprint = footprint.inflate(-inset);
        require_size("inset fill width", footprint.width)?;
        require_size("inset fill depth", footprint.depth)?;
        Ok(Self { footprint, infill_distance, z })
    }

    /// Number of lines: `⌊2·width / distance⌋ + 1`.
    pub fn line_count(&self) -> usize {
        (2.0 * self.footprint.width / self.infill_distance).floor() as usize + 1
    }

    pub fn path(&self) -> Path {
        let Footprint { width, depth } = self.footprint;
        let lines = self.line_count();
        log::debug!("zigzag infill: {} lines at spacing {}", lines, self.infill_distance);

        let mut points = Vec::with_capacity(lines * 2);
        for i in 0..lines {
            // the last line never crosses the boundary
            let x = (-width + i as Real * self.infill_distance).min(width);
            let (from, to) = if i % 2 == 0 { (-depth, depth) } else { (depth, -depth) };
            points.push(Point3::new(x, from, self.z));
            points.push(Point3::new(x, to, self.z));
        }
        Path::from_points(points)
    }
}
