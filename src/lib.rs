//! Parametric **toolpath geometry** for spiral-mode 3D printing: vases,
//! dishes, boxes and decorated panels, generated as continuous polylines
//! ready for a G-code exporter.
//!
//! A design combines a [profile](profile) (size per layer), an optional
//! [perturbation field](field) (waves, ripples, sphere carving) and a
//! [sweep](sweep) that climbs the wall without seams. Floors come from the
//! [infill](infill) patterns and a [skirt] primes the nozzle.
//!
//! ```
//! use pathcraft::shapes::{Design, RectBox, generate};
//!
//! let object = generate(&Design::Box(RectBox::default())).unwrap();
//! assert_eq!(object.len(), 3); // skirt, floor, wall
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample walls on multiple threads

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod field;
pub mod float_types;
pub mod infill;
pub mod path;
pub mod profile;
pub mod shapes;
pub mod skirt;
pub mod sweep;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::PrintSettings;
pub use errors::{GeometryError, Result};
pub use float_types::Real;
pub use path::{FullObject, Path};
pub use shapes::{Design, PrintJob, generate};
