use super::sample_indexed;
use crate::errors::{GeometryError, Result, require_count, require_finite, require_positive};
use crate::field::{PerturbationField, SurfaceSample};
use crate::float_types::{Real, TAU, linspace_at};
use crate::path::Path;
use crate::profile::Profile;
use nalgebra::Point3;

/// Spiral sweep for round walls (cylinders, dishes, vases).
///
/// Over `points_per_turn × (end_layer − start_layer)` samples the angle grows
/// from 0 to `2π × wall_layers`, z grows linearly from `z_start` to `z_end`,
/// and the layer position grows linearly from `start_layer` to `end_layer`.
/// The layer position drives the profile; the perturbation field is added to
/// the profile radius.
///
/// The layer range and the z range are independent: a wall may skip profile
/// layers at either end while still starting right above the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularSweep {
    points_per_turn: usize,
    start_layer: i64,
    end_layer: i64,
    z_start: Real,
    z_end: Real,
}

impl CircularSweep {
    pub fn new(
        points_per_turn: usize,
        start_layer: i64,
        end_layer: i64,
        z_start: Real,
        z_end: Real,
    ) -> Result<Self> {
        require_count("points per turn", 2, points_per_turn)?;
        require_finite("wall start height", z_start)?;
        require_finite("wall end height", z_end)?;
        // a collapsed layer range is reported as a degenerate wall, not an error
        if end_layer > start_layer && z_end < z_start {
            return Err(GeometryError::DescendingWall { z_start, z_end });
        }
        Ok(Self { points_per_turn, start_layer, end_layer, z_start, z_end })
    }

    /// Sweep whose z range is `layer × layer_height` at both ends.
    pub fn over_layers(
        points_per_turn: usize,
        start_layer: i64,
        end_layer: i64,
        layer_height: Real,
    ) -> Result<Self> {
        require_positive("layer height", layer_height)?;
        Self::new(
            points_per_turn,
            start_layer,
            end_layer,
            start_layer as Real * layer_height,
            end_layer as Real * layer_height,
        )
    }

    /// Number of full turns the wall makes; zero or negative means nothing to print.
    pub const fn wall_layers(&self) -> i64 {
        self.end_layer - self.start_layer
    }

    /// Points the wall will have, or 0 when it collapses.
    pub fn point_count(&self) -> usize {
        match usize::try_from(self.wall_layers()) {
            Ok(layers) => layers * self.points_per_turn,
            Err(_) => 0,
        }
    }

    /// Build the continuous wall.
    ///
    /// When the layer range is empty (skip ranges ate the whole object) the
    /// result is [`Path::degenerate`] rather than an error.
    pub fn wall<P, F>(&self, profile: &P, field: &F) -> Path
    where
        P: Profile<Size = Real>,
        F: PerturbationField + ?Sized,
    {
        let count = self.point_count();
        if count == 0 {
            log::warn!(
                "circular wall collapsed: layers {}..{} leave nothing to print",
                self.start_layer,
                self.end_layer
            );
            return Path::degenerate();
        }

        let wall_layers = self.wall_layers() as Real;
        let sweep_end = TAU * wall_layers;
        let (layer_start, layer_end) = (self.start_layer as Real, self.end_layer as Real);
        log::debug!(
            "circular wall: {} turns, {} points, z {}..{}",
            self.wall_layers(),
            count,
            self.z_start,
            self.z_end
        );

        let points = sample_indexed(count, |i| {
            let theta = linspace_at(0.0, sweep_end, count, i);
            let z = linspace_at(self.z_start, self.z_end, count, i);
            let layer = linspace_at(layer_start, layer_end, count, i);
            let nominal = profile.size_at(layer);
            let (sin, cos) = theta.sin_cos();
            let sample = SurfaceSample::new(Point3::new(nominal * cos, nominal * sin, z), theta, layer);
            let radius = nominal + field.offset_at(&sample, nominal);
            Point3::new(radius * cos, radius * sin, z)
        });
        Path::from_points(points)
    }
}

/// Closed circle of `points` samples at height `z`; the last sample repeats the first angle.
pub fn ring(radius: Real, z: Real, points: usize) -> Path {
    let circle = (0..points)
        .map(|i| {
            let theta = linspace_at(0.0, TAU, points, i);
            Point3::new(radius * theta.cos(), radius * theta.sin(), z)
        })
        .collect();
    Path::closed(circle)
}
