//! Seam-free wall assembly.
//!
//! A sweep walks a parametric parameter (angle around a circle, or position
//! along the four sides of a rectangle) *jointly* with the layer position, so
//! the wall climbs continuously instead of stacking closed loops. The sweep
//! parameter never resets at a layer boundary; that is what keeps the wall free
//! of seams.

pub mod circular;
pub mod rectangular;

pub use circular::{CircularSweep, ring};
pub use rectangular::{RectangularSweep, Side, rectangle_outline};

/// Evaluate `f` for every index in `0..count`, in order.
///
/// With the `parallel` feature the indices are spread over the rayon pool;
/// each sample is independent, so the output is identical either way.
#[cfg(not(feature = "parallel"))]
pub(crate) fn sample_indexed<T, F>(count: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    (0..count).map(f).collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn sample_indexed<T, F>(count: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}
