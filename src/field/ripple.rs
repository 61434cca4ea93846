//! Damped circular ripples spreading over a flat wall, like a stone dropped in water.

use super::{PerturbationField, SurfaceSample};
use crate::errors::{Result, require_finite, require_positive, require_size};
use crate::float_types::{Real, TAU};

/// Ripple shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleParams {
    /// Peak displacement scale before decay.
    pub amplitude: Real,
    /// Distance between crests.
    pub wavelength: Real,
    /// Exponential (viscous) decay rate per unit distance.
    pub damping: Real,
    /// X of the ripple centre on the wall.
    pub center_x: Real,
    /// Height of the ripple centre as a fraction of the wall height.
    pub center_z_ratio: Real,
    /// Distances below this are treated as this, avoiding the 1/√r blow-up.
    pub min_radius: Real,
    /// The offset is clamped to ± `local_size × max_ratio_to_depth`.
    pub max_ratio_to_depth: Real,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            wavelength: 10.0,
            damping: 0.03,
            center_x: 0.0,
            center_z_ratio: 0.5,
            min_radius: 4.0,
            max_ratio_to_depth: 5.0,
        }
    }
}

/// Ripple field anchored on a wall of known height.
///
/// ```text
/// r      = max(|(x, z) - centre|, min_radius)
/// offset = amplitude · r^-½ · e^(-damping·r) · cos(2π·r / wavelength)
/// ```
///
/// clamped to `± local_size · max_ratio_to_depth`. The clamp always applies:
/// an unclamped ripple can be deeper than the wall is thick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleField {
    params: RippleParams,
    center_z: Real,
}

impl RippleField {
    pub fn new(params: RippleParams, wall_height: Real) -> Result<Self> {
        require_finite("ripple amplitude", params.amplitude)?;
        require_positive("ripple wavelength", params.wavelength)?;
        require_size("ripple damping", params.damping)?;
        require_finite("ripple centre x", params.center_x)?;
        require_finite("ripple centre z ratio", params.center_z_ratio)?;
        require_positive("ripple minimum radius", params.min_radius)?;
        require_size("ripple max ratio to depth", params.max_ratio_to_depth)?;
        require_size("wall height", wall_height)?;
        Ok(Self { params, center_z: wall_height * params.center_z_ratio })
    }

    pub const fn params(&self) -> &RippleParams {
        &self.params
    }

    /// Absolute height of the ripple centre.
    pub const fn center_z(&self) -> Real {
        self.center_z
    }

    /// The unclamped ripple displacement at in-plane distance `r` from the centre.
    pub fn raw_offset(&self, r: Real) -> Real {
        let p = &self.params;
        let r_eff = r.max(p.min_radius);
        let geometric_decay = 1.0 / r_eff.sqrt();
        let viscous_decay = (-p.damping * r_eff).exp();
        let wave = (TAU * r_eff / p.wavelength).cos();
        p.amplitude * geometric_decay * viscous_decay * wave
    }
}

impl PerturbationField for RippleField {
    fn offset_at(&self, sample: &SurfaceSample, local_size: Real) -> Real {
        let dx = sample.point.x - self.params.center_x;
        let dz = sample.point.z - self.center_z;
        let raw = self.raw_offset(dx.hypot(dz));
        let cap = (local_size * self.params.max_ratio_to_depth).abs();
        raw.max(-cap).min(cap)
    }
}
