// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used when comparing generated geometry.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `PATHCRAFT_TOLERANCE` (e.g. `PATHCRAFT_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the current tolerance.
/// If not set yet, it tries `PATHCRAFT_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("PATHCRAFT_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// `count` evenly spaced samples over `[start, stop]`, both ends included.
///
/// A single sample yields `start`; zero samples yield an empty vector.
/// The last sample is written as `stop` exactly so that boundary values
/// (first/last z of a wall, closing point of a skirt) carry no rounding error.
pub fn linspace(start: Real, stop: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as Real;
            let mut values: Vec<Real> = (0..count).map(|i| start + step * i as Real).collect();
            values[count - 1] = stop;
            values
        },
    }
}

/// Value at index `i` of [`linspace`]`(start, stop, count)`, without allocating.
#[inline]
pub fn linspace_at(start: Real, stop: Real, count: usize, i: usize) -> Real {
    if count < 2 {
        return start;
    }
    if i + 1 == count {
        return stop;
    }
    start + (stop - start) * (i as Real / (count - 1) as Real)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(1.0, 20.0, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[6], 20.0);
        for (i, x) in v.iter().enumerate() {
            assert!((linspace_at(1.0, 20.0, 7, i) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace_at(3.0, 9.0, 1, 0), 3.0);
    }

    #[test]
    fn tolerance_is_positive() {
        assert!(tolerance() > 0.0);
        assert!(tolerance() < 1e-3);
    }
}
