use super::Profile;
use crate::errors::{GeometryError, Result, require_finite, require_positive, require_size};
use crate::float_types::{FRAC_PI_2, Real};

/// Bulging vase profile: rises from `base` to `max` at `peak_layer`, then falls
/// back towards `base` at `total_layers`.
///
/// The layer range is split at the peak. The rising half maps onto an angle in
/// `[0, π/2]`, the falling half onto `[π/2, π]`, and the size is
///
/// ```text
/// size = base + (max - base) · sin(angle)^smoothness
/// ```
///
/// Smoothness below 1 flattens the belly; above 1 it sharpens the peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedProfile {
    base: Real,
    max: Real,
    peak_layer: Real,
    total_layers: Real,
    smoothness: Real,
}

impl EasedProfile {
    pub fn new(
        base: Real,
        max: Real,
        peak_layer: Real,
        total_layers: Real,
        smoothness: Real,
    ) -> Result<Self> {
        require_size("base radius", base)?;
        require_size("max radius", max)?;
        require_finite("total layers", total_layers)?;
        require_finite("peak layer", peak_layer)?;
        require_positive("smoothness", smoothness)?;
        if total_layers <= 0.0 {
            return Err(GeometryError::NonPositiveLayers(total_layers));
        }
        if peak_layer == total_layers {
            return Err(GeometryError::PeakAtEnd { peak: peak_layer, total: total_layers });
        }
        if peak_layer <= 0.0 || peak_layer > total_layers {
            return Err(GeometryError::PeakOutOfRange { peak: peak_layer, total: total_layers });
        }
        Ok(Self { base, max, peak_layer, total_layers, smoothness })
    }

    pub const fn peak_layer(&self) -> Real {
        self.peak_layer
    }

    fn angle(&self, layer: Real) -> Real {
        if layer <= self.peak_layer {
            layer / self.peak_layer * FRAC_PI_2
        } else {
            FRAC_PI_2
                + (layer - self.peak_layer) / (self.total_layers - self.peak_layer) * FRAC_PI_2
        }
    }
}

impl Profile for EasedProfile {
    type Size = Real;

    fn size_at(&self, layer: Real) -> Real {
        // sin(π) rounds to a tiny positive or negative value; keep the base of powf >= 0
        let shape = self.angle(layer).sin().max(0.0).powf(self.smoothness);
        self.base + (self.max - self.base) * shape
    }

    fn total_layers(&self) -> Real {
        self.total_layers
    }
}
