//! Priming outline printed around the object on the first layer.

use crate::errors::{Result, require_count, require_finite, require_size};
use crate::float_types::Real;
use crate::path::Path;
use crate::profile::Footprint;
use crate::sweep::{rectangle_outline, ring};

/// A single closed outline at the first layer height, `offset` clear of the
/// object's base. The point count is fixed, whatever the wall density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skirt {
    offset: Real,
    points: usize,
    z: Real,
}

impl Skirt {
    pub fn new(offset: Real, points: usize, z: Real) -> Result<Self> {
        require_size("skirt offset", offset)?;
        require_count("skirt points", 4, points)?;
        require_finite("skirt height", z)?;
        Ok(Self { offset, points, z })
    }

    pub const fn points(&self) -> usize {
        self.points
    }

    /// Circle around a round base of `radius`. `margin` is extra clearance for
    /// anything the wall adds beyond the base, such as wave amplitudes.
    pub fn circle(&self, radius: Real, margin: Real) -> Path {
        ring(radius + margin + self.offset, self.z, self.points)
    }

    /// Rectangle around a rectangular base; `points / 4` samples per side.
    pub fn rectangle(&self, footprint: Footprint) -> Path {
        rectangle_outline(footprint.inflate(self.offset), self.z, self.points / 4)
    }
}
