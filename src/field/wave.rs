//! Angular waves on circular walls.

use super::{PerturbationField, SurfaceSample};
use crate::errors::{Result, require_finite, require_positive};
use crate::float_types::{PI, Real};

/// Single cosine wave around the wall.
///
/// `phase_shift` is added to the frequency, not to the angle: with a
/// fractional total frequency the crests drift by a fraction of a period on
/// every turn, so successive layers interleave instead of stacking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub amplitude: Real,
    /// Crests per turn.
    pub frequency: Real,
    pub phase_shift: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveField {
    params: WaveParams,
}

impl WaveField {
    pub fn new(params: WaveParams) -> Result<Self> {
        require_finite("wave amplitude", params.amplitude)?;
        require_finite("wave frequency", params.frequency)?;
        require_finite("wave phase shift", params.phase_shift)?;
        Ok(Self { params })
    }

    pub const fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Furthest the wave pushes the wall outward.
    pub fn reach(&self) -> Real {
        self.params.amplitude.abs()
    }
}

impl PerturbationField for WaveField {
    fn offset_at(&self, sample: &SurfaceSample, _local_size: Real) -> Real {
        let p = &self.params;
        p.amplitude * (sample.sweep * (p.frequency + p.phase_shift)).cos()
    }
}

/// Smooth 0 → π → 0 phase sweep repeating every `period` layers.
///
/// `phase(l) = π · sin²(π · l / period)`; it is continuous, periodic with the
/// given period and zero at every multiple of it, so the wave pattern flips
/// over and back without a visible step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseInversion {
    period: Real,
}

impl PhaseInversion {
    pub fn new(period: Real) -> Result<Self> {
        require_positive("phase inversion period", period)?;
        Ok(Self { period })
    }

    pub const fn period(&self) -> Real {
        self.period
    }

    /// Phase after `layers_elapsed` layers of wall.
    pub fn phase_at(&self, layers_elapsed: Real) -> Real {
        let s = (PI * layers_elapsed / self.period).sin();
        PI * s * s
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeWaveParams {
    pub high_amplitude: Real,
    pub high_frequency: Real,
    pub low_amplitude: Real,
    pub low_frequency: Real,
    /// `None` keeps the phase at zero for the whole wall.
    pub phase_inversion_period: Option<Real>,
}

impl Default for CompositeWaveParams {
    fn default() -> Self {
        Self {
            high_amplitude: 1.0,
            high_frequency: 60.0,
            low_amplitude: 3.0,
            low_frequency: 2.0,
            phase_inversion_period: Some(50.0),
        }
    }
}

/// Fine ribbing over a slow lobed swell:
///
/// ```text
/// offset = a_hi · cos(θ·f_hi + φ) + a_lo · sin(θ·f_lo + φ)
/// ```
///
/// where `φ` follows the [`PhaseInversion`] schedule counted from `start_layer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeWaveField {
    params: CompositeWaveParams,
    inversion: Option<PhaseInversion>,
    start_layer: Real,
}

impl CompositeWaveField {
    pub fn new(params: CompositeWaveParams, start_layer: Real) -> Result<Self> {
        require_finite("high-frequency amplitude", params.high_amplitude)?;
        require_finite("high frequency", params.high_frequency)?;
        require_finite("low-frequency amplitude", params.low_amplitude)?;
        require_finite("low frequency", params.low_frequency)?;
        require_finite("wall start layer", start_layer)?;
        let inversion = params.phase_inversion_period.map(PhaseInversion::new).transpose()?;
        Ok(Self { params, inversion, start_layer })
    }

    pub const fn params(&self) -> &CompositeWaveParams {
        &self.params
    }

    /// Phase applied to both terms at a (fractional) layer position.
    pub fn phase_at(&self, layer: Real) -> Real {
        self.inversion
            .map(|inversion| inversion.phase_at(layer - self.start_layer))
            .unwrap_or(0.0)
    }

    /// Furthest the two terms together can push the wall outward.
    pub fn reach(&self) -> Real {
        self.params.high_amplitude.abs() + self.params.low_amplitude.abs()
    }
}

impl PerturbationField for CompositeWaveField {
    fn offset_at(&self, sample: &SurfaceSample, _local_size: Real) -> Real {
        let p = &self.params;
        let phase = self.phase_at(sample.layer);
        let high = p.high_amplitude * (sample.sweep * p.high_frequency + phase).cos();
        let low = p.low_amplitude * (sample.sweep * p.low_frequency + phase).sin();
        high + low
    }
}
