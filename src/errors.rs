//! Parameter validation errors

use crate::float_types::Real;

/// Result alias used by every fallible constructor in the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// All the structural parameter problems a shape description can have.
///
/// These are raised when a profile, field, sweep or infill is constructed,
/// never while points are being evaluated. An empty wall is not an error:
/// it is reported as [`Path::degenerate`](crate::path::Path::degenerate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (NonPositiveLayers) The layer count that normalises progress is zero or negative
    #[error("(NonPositiveLayers) total layers must be positive, got {0}")]
    NonPositiveLayers(Real),
    /// (PeakAtEnd) The peak layer coincides with the last layer, leaving no falling half
    #[error("(PeakAtEnd) peak layer {peak} equals total layers {total}")]
    PeakAtEnd { peak: Real, total: Real },
    /// (PeakOutOfRange) The peak layer lies outside (0, total layers)
    #[error("(PeakOutOfRange) peak layer {peak} must lie strictly between 0 and {total}")]
    PeakOutOfRange { peak: Real, total: Real },
    /// (NegativeSize) A radius, width or depth is negative
    #[error("(NegativeSize) {name} must not be negative, got {value}")]
    NegativeSize { name: &'static str, value: Real },
    /// (NonPositiveParameter) A spacing, wavelength, period or similar is zero or negative
    #[error("(NonPositiveParameter) {name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: Real },
    /// (TooFewSamples) A sample count that must be at least `min` is smaller
    #[error("(TooFewSamples) {name} must be at least {min}, got {value}")]
    TooFewSamples { name: &'static str, min: usize, value: usize },
    /// (MismatchedLengths) Coordinate sequences handed to a path differ in length
    #[error("(MismatchedLengths) x/y/z sequences differ in length ({x}, {y}, {z})")]
    MismatchedLengths { x: usize, y: usize, z: usize },
    /// (MismatchedSamples) A batched field evaluation got a different number of sizes than samples
    #[error("(MismatchedSamples) {samples} samples paired with {sizes} local sizes")]
    MismatchedSamples { samples: usize, sizes: usize },
    /// (DescendingWall) A wall whose last height lies below its first
    #[error("(DescendingWall) wall end height {z_end} is below its start height {z_start}")]
    DescendingWall { z_start: Real, z_end: Real },
    /// (NonFinite) A parameter is NaN or infinite
    #[error("(NonFinite) {name} is not finite")]
    NonFinite { name: &'static str },
}

/// Fails with [`GeometryError::NonFinite`] or [`GeometryError::NonPositiveParameter`].
pub(crate) fn require_positive(name: &'static str, value: Real) -> Result<Real> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(GeometryError::NonPositiveParameter { name, value });
    }
    Ok(value)
}

/// Fails with [`GeometryError::NonFinite`] or [`GeometryError::NegativeSize`].
pub(crate) fn require_size(name: &'static str, value: Real) -> Result<Real> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(GeometryError::NegativeSize { name, value });
    }
    Ok(value)
}

pub(crate) fn require_finite(name: &'static str, value: Real) -> Result<Real> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { name });
    }
    Ok(value)
}

pub(crate) const fn require_count(name: &'static str, min: usize, value: usize) -> Result<usize> {
    if value < min {
        return Err(GeometryError::TooFewSamples { name, min, value });
    }
    Ok(value)
}
