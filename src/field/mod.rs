//! Surface perturbation fields.
//!
//! A field displaces the nominal wall surface at each sampled point. Rectangular
//! walls read the point's X/Z position (ripples, sphere carving); circular walls
//! read the continuous sweep angle and layer position (waves). Every field is a
//! pure function of its inputs and continuous in both angle and layer, which the
//! sweeps rely on to stay seam-free.

pub mod ripple;
pub mod sphere;
pub mod wave;

pub use ripple::{RippleField, RippleParams};
pub use sphere::{SphereCarveField, SphereCarveParams};
pub use wave::{CompositeWaveField, CompositeWaveParams, PhaseInversion, WaveField, WaveParams};

use crate::errors::{GeometryError, Result};
use crate::float_types::Real;
use nalgebra::Point3;

/// Everything a field may look at for one sample of the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Nominal (unperturbed) position on the wall.
    pub point: Point3<Real>,
    /// Accumulated sweep angle; keeps growing across layers, never wraps.
    pub sweep: Real,
    /// Fractional layer position of the sample.
    pub layer: Real,
}

impl SurfaceSample {
    pub const fn new(point: Point3<Real>, sweep: Real, layer: Real) -> Self {
        Self { point, sweep, layer }
    }

    /// A sample that only carries a position, for fields that ignore sweep and layer.
    pub const fn at(point: Point3<Real>) -> Self {
        Self { point, sweep: 0.0, layer: 0.0 }
    }
}

/// A scalar displacement of the nominal surface.
///
/// Positive offsets push the wall outward, negative ones carve it inward.
/// `local_size` is the nominal cross-section size at the sample (radius, or the
/// half-extent of the perturbed side) for fields whose bound scales with it.
pub trait PerturbationField: Send + Sync {
    fn offset_at(&self, sample: &SurfaceSample, local_size: Real) -> Real;

    /// Batched form of [`PerturbationField::offset_at`]; pairs samples with sizes by index.
    ///
    /// Fails with [`GeometryError::MismatchedSamples`] unless both slices have the same length.
    fn offsets_at(&self, samples: &[SurfaceSample], local_sizes: &[Real]) -> Result<Vec<Real>> {
        if samples.len() != local_sizes.len() {
            return Err(GeometryError::MismatchedSamples {
                samples: samples.len(),
                sizes: local_sizes.len(),
            });
        }
        Ok(samples
            .iter()
            .zip(local_sizes)
            .map(|(sample, &size)| self.offset_at(sample, size))
            .collect())
    }
}

/// The field variants a shape can select.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Perturbation {
    /// Plain wall.
    #[default]
    None,
    Ripple(RippleField),
    SphereCarve(SphereCarveField),
    Wave(WaveField),
    CompositeWave(CompositeWaveField),
}

impl Perturbation {
    pub const fn is_none(&self) -> bool {
        matches!(self, Perturbation::None)
    }
}

impl PerturbationField for Perturbation {
    fn offset_at(&self, sample: &SurfaceSample, local_size: Real) -> Real {
        match self {
            Perturbation::None => 0.0,
            Perturbation::Ripple(field) => field.offset_at(sample, local_size),
            Perturbation::SphereCarve(field) => field.offset_at(sample, local_size),
            Perturbation::Wave(field) => field.offset_at(sample, local_size),
            Perturbation::CompositeWave(field) => field.offset_at(sample, local_size),
        }
    }
}

impl From<RippleField> for Perturbation {
    fn from(field: RippleField) -> Self {
        Perturbation::Ripple(field)
    }
}

impl From<SphereCarveField> for Perturbation {
    fn from(field: SphereCarveField) -> Self {
        Perturbation::SphereCarve(field)
    }
}

impl From<WaveField> for Perturbation {
    fn from(field: WaveField) -> Self {
        Perturbation::Wave(field)
    }
}

impl From<CompositeWaveField> for Perturbation {
    fn from(field: CompositeWaveField) -> Self {
        Perturbation::CompositeWave(field)
    }
}
