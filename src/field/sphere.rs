//! A sphere pressed into a flat wall from outside, leaving a spherical dent.

use super::{PerturbationField, SurfaceSample};
use crate::errors::{Result, require_positive, require_size};
use crate::float_types::Real;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCarveParams {
    pub sphere_radius: Real,
    /// Distance from the wall surface to the sphere centre.
    pub standoff_distance: Real,
}

impl Default for SphereCarveParams {
    fn default() -> Self {
        Self { sphere_radius: 100.0, standoff_distance: 90.0 }
    }
}

/// Sphere-carving field. The sphere's axis runs perpendicular to the wall through
/// `x = 0` at mid-height.
///
/// For a sample at planar distance `d` from the axis, the sphere surface sits
/// `√(R² − d²)` from its centre, so it penetrates the wall by that minus the
/// standoff. The offset is the negated penetration: it only ever carves inward
/// and is exactly zero outside the sphere's footprint. There is no
/// depth-relative clamp here, unlike [`RippleField`](super::RippleField).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCarveField {
    params: SphereCarveParams,
    center_x: Real,
    center_z: Real,
}

impl SphereCarveField {
    pub fn new(params: SphereCarveParams, wall_height: Real) -> Result<Self> {
        require_positive("sphere radius", params.sphere_radius)?;
        require_size("sphere standoff distance", params.standoff_distance)?;
        require_size("wall height", wall_height)?;
        Ok(Self { params, center_x: 0.0, center_z: wall_height / 2.0 })
    }

    pub const fn params(&self) -> &SphereCarveParams {
        &self.params
    }

    pub const fn center_z(&self) -> Real {
        self.center_z
    }

    /// Maximum dent depth, reached on the axis.
    pub fn max_depth(&self) -> Real {
        (self.params.sphere_radius - self.params.standoff_distance).max(0.0)
    }

    /// Offset at planar distance `d` from the sphere axis.
    pub fn offset_at_distance(&self, d: Real) -> Real {
        let radius = self.params.sphere_radius;
        if d >= radius {
            return 0.0;
        }
        let surface = (radius * radius - d * d).max(0.0).sqrt();
        let penetration = surface - self.params.standoff_distance;
        -penetration.max(0.0)
    }
}

impl PerturbationField for SphereCarveField {
    fn offset_at(&self, sample: &SurfaceSample, _local_size: Real) -> Real {
        let dx = sample.point.x - self.center_x;
        let dz = sample.point.z - self.center_z;
        self.offset_at_distance(dx.hypot(dz))
    }
}
