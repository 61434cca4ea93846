use super::{Footprint, Profile};
use crate::errors::{GeometryError, Result, require_finite, require_size};
use crate::float_types::Real;

/// Straight taper from `base` at layer 0 to `last` at `total_layers`.
///
/// Used for cylinders, dishes, straight vases and, in pairs, for boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearProfile {
    base: Real,
    last: Real,
    total_layers: Real,
}

impl LinearProfile {
    pub fn new(base: Real, last: Real, total_layers: Real) -> Result<Self> {
        require_size("base size", base)?;
        require_size("last size", last)?;
        require_finite("total layers", total_layers)?;
        if total_layers <= 0.0 {
            return Err(GeometryError::NonPositiveLayers(total_layers));
        }
        Ok(Self { base, last, total_layers })
    }

    /// Same size on every layer.
    pub fn constant(size: Real, total_layers: Real) -> Result<Self> {
        Self::new(size, size, total_layers)
    }

    pub const fn base(&self) -> Real {
        self.base
    }

    pub const fn last(&self) -> Real {
        self.last
    }
}

impl Profile for LinearProfile {
    type Size = Real;

    fn size_at(&self, layer: Real) -> Real {
        if self.base == self.last {
            return self.base;
        }
        // Weighted form is exact at both ends: t = 0 gives base, t = 1 gives last.
        let t = layer / self.total_layers;
        self.base * (1.0 - t) + self.last * t
    }

    fn total_layers(&self) -> Real {
        self.total_layers
    }
}

/// Width and depth tapering independently over the same layer range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectProfile {
    width: LinearProfile,
    depth: LinearProfile,
}

impl RectProfile {
    pub fn new(base: Footprint, last: Footprint, total_layers: Real) -> Result<Self> {
        Ok(Self {
            width: LinearProfile::new(base.width, last.width, total_layers)?,
            depth: LinearProfile::new(base.depth, last.depth, total_layers)?,
        })
    }

    pub fn constant(footprint: Footprint, total_layers: Real) -> Result<Self> {
        Self::new(footprint, footprint, total_layers)
    }
}

impl Profile for RectProfile {
    type Size = Footprint;

    fn size_at(&self, layer: Real) -> Footprint {
        Footprint::new(self.width.size_at(layer), self.depth.size_at(layer))
    }

    fn total_layers(&self) -> Real {
        self.width.total_layers()
    }
}
