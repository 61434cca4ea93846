//! Cross-section size as a function of (fractional) layer position.
//!
//! A profile answers "how big is the shape at layer `p`?" for any real `p`,
//! not just integer layers: the sweeps sample fractional positions so the
//! wall grows smoothly between layer boundaries.
//!
//! Callers keep `p` inside the print range; profiles do not clamp.

pub mod eased;
pub mod linear;

pub use eased::EasedProfile;
pub use linear::{LinearProfile, RectProfile};

use crate::float_types::Real;

/// Half-extents of a rectangular cross-section.
///
/// The rectangle spans `[-width, width] × [-depth, depth]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: Real,
    pub depth: Real,
}

impl Footprint {
    pub const fn new(width: Real, depth: Real) -> Self {
        Self { width, depth }
    }

    /// Both half-extents grown (or shrunk, for negative `amount`) by `amount`.
    pub const fn inflate(self, amount: Real) -> Self {
        Self { width: self.width + amount, depth: self.depth + amount }
    }

    /// Component-wise linear interpolation, `t = 0` gives `self`.
    pub fn lerp(self, other: Self, t: Real) -> Self {
        Self {
            width: self.width + (other.width - self.width) * t,
            depth: self.depth + (other.depth - self.depth) * t,
        }
    }
}

/// A shape profile: maps a layer position to a cross-section size.
///
/// Evaluation is batched: [`Profile::sizes_at`] is the bulk form and
/// [`Profile::size_at`] is the one-element case of the very same rule, so
/// scalar and bulk evaluation can never disagree.
pub trait Profile: Send + Sync {
    /// A radius (`Real`) or a [`Footprint`].
    type Size: Copy + Send + Sync;

    /// Size at a single layer position.
    fn size_at(&self, layer: Real) -> Self::Size;

    /// Layer count the profile is normalised against.
    fn total_layers(&self) -> Real;

    /// Sizes at many layer positions, in order.
    fn sizes_at(&self, layers: &[Real]) -> Vec<Self::Size> {
        layers.iter().map(|&layer| self.size_at(layer)).collect()
    }
}
