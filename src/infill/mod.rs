//! Bottom fill patterns.
//!
//! - [`ZigzagInfill`]: boustrophedon lines across a rectangular floor.
//! - [`SpiralInfill`]: an Archimedean spiral for round floors, optionally
//!   textured towards the rim.
//! - [`LineInfill`]: straight hatching inside an arbitrary closed boundary,
//!   used once per bottom layer with the angle turning 90° each layer.

pub mod lines;
pub mod spiral;
pub mod zigzag;

pub use lines::{LineInfill, ScanlineInfill, rotated_bottom_infill};
pub use spiral::{EdgeWave, SpiralInfill, TurnRounding};
pub use zigzag::ZigzagInfill;
