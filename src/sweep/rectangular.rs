use super::sample_indexed;
use crate::errors::{Result, require_count, require_positive};
use crate::field::{PerturbationField, SurfaceSample};
use crate::float_types::{Real, TAU, linspace_at};
use crate::path::Path;
use crate::profile::{Footprint, Profile};
use nalgebra::Point3;

/// One edge of a rectangular wall, in the order the sweep visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// `x = +width`, walking from `-depth` to `+depth`.
    PosX,
    /// `y = +depth`, walking from `+width` to `-width`.
    PosY,
    /// `x = -width`, walking from `+depth` to `-depth`.
    NegX,
    /// `y = -depth`, walking from `-width` to `+width`.
    NegY,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::PosX, Side::PosY, Side::NegX, Side::NegY];

    pub const fn index(self) -> usize {
        match self {
            Side::PosX => 0,
            Side::PosY => 1,
            Side::NegX => 2,
            Side::NegY => 3,
        }
    }

    /// Nominal `(x, y)` at parameter `t ∈ [0, 1]` along this side.
    pub fn point(self, t: Real, footprint: Footprint) -> (Real, Real) {
        let Footprint { width, depth } = footprint;
        match self {
            Side::PosX => (width, depth * (2.0 * t - 1.0)),
            Side::PosY => (width * (1.0 - 2.0 * t), depth),
            Side::NegX => (-width, depth * (1.0 - 2.0 * t)),
            Side::NegY => (width * (2.0 * t - 1.0), -depth),
        }
    }

    /// The half-extent this side sits at: width for X sides, depth for Y sides.
    pub const fn extent(self, footprint: Footprint) -> Real {
        match self {
            Side::PosX | Side::NegX => footprint.width,
            Side::PosY | Side::NegY => footprint.depth,
        }
    }

    /// Move the side's fixed coordinate outward by `offset` (inward when negative).
    fn displace(self, (x, y): (Real, Real), footprint: Footprint, offset: Real) -> (Real, Real) {
        match self {
            Side::PosX => (footprint.width + offset, y),
            Side::PosY => (x, footprint.depth + offset),
            Side::NegX => (-footprint.width - offset, y),
            Side::NegY => (x, -footprint.depth - offset),
        }
    }
}

/// Sweep for rectangular walls (boxes, rippled and carved panels).
///
/// Each layer-to-layer transition is walked as four sides of `points_per_side`
/// samples. Within a transition, width, depth and z are interpolated between
/// the two layers' profile values by `progress = (side + t) / 4`, so one lap
/// of the rectangle climbs exactly one layer. Segments are concatenated layer
/// by layer, side 0 to 3, into one continuous polyline.
///
/// Only `perturbed_side` consults the field; its fixed coordinate becomes
/// `±(extent + offset)`, e.g. `-depth - offset` on [`Side::NegY`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangularSweep {
    points_per_side: usize,
    start_layer: i64,
    end_layer: i64,
    layer_height: Real,
    perturbed_side: Side,
}

impl RectangularSweep {
    pub fn new(
        points_per_side: usize,
        start_layer: i64,
        end_layer: i64,
        layer_height: Real,
    ) -> Result<Self> {
        require_count("points per side", 2, points_per_side)?;
        require_positive("layer height", layer_height)?;
        Ok(Self {
            points_per_side,
            start_layer,
            end_layer,
            layer_height,
            perturbed_side: Side::NegY,
        })
    }

    /// Choose which side the field displaces (default [`Side::NegY`]).
    pub const fn with_perturbed_side(mut self, side: Side) -> Self {
        self.perturbed_side = side;
        self
    }

    pub const fn perturbed_side(&self) -> Side {
        self.perturbed_side
    }

    pub const fn wall_layers(&self) -> i64 {
        self.end_layer - self.start_layer
    }

    pub fn point_count(&self) -> usize {
        match usize::try_from(self.wall_layers()) {
            Ok(layers) => layers * 4 * self.points_per_side,
            Err(_) => 0,
        }
    }

    /// Build the continuous wall, or [`Path::degenerate`] for an empty layer range.
    pub fn wall<P, F>(&self, profile: &P, field: &F) -> Path
    where
        P: Profile<Size = Footprint>,
        F: PerturbationField + ?Sized,
    {
        let count = self.point_count();
        if count == 0 {
            log::warn!(
                "rectangular wall collapsed: layers {}..{} leave nothing to print",
                self.start_layer,
                self.end_layer
            );
            return Path::degenerate();
        }

        // Profile at every layer boundary, evaluated in one batch.
        let boundaries: Vec<Real> =
            (self.start_layer..=self.end_layer).map(|layer| layer as Real).collect();
        let footprints = profile.sizes_at(&boundaries);
        let per_layer = 4 * self.points_per_side;
        log::debug!(
            "rectangular wall: {} layers, {} points per side, {} points",
            self.wall_layers(),
            self.points_per_side,
            count
        );

        let points = sample_indexed(count, |i| {
            let layer = i / per_layer;
            let side = Side::ALL[(i % per_layer) / self.points_per_side];
            let j = i % self.points_per_side;
            if j == 0 && side == Side::PosX {
                log::trace!("layer {} starts at sample {}", boundaries[layer], i);
            }

            let t = linspace_at(0.0, 1.0, self.points_per_side, j);
            let progress = (side.index() as Real + t) / 4.0;
            let footprint = footprints[layer].lerp(footprints[layer + 1], progress);
            let z = interpolate(
                boundaries[layer] * self.layer_height,
                boundaries[layer + 1] * self.layer_height,
                progress,
            );

            let (mut x, mut y) = side.point(t, footprint);
            if side == self.perturbed_side {
                let sample = SurfaceSample::new(
                    Point3::new(x, y, z),
                    TAU * (layer as Real + progress),
                    boundaries[layer] + progress,
                );
                let offset = field.offset_at(&sample, side.extent(footprint));
                (x, y) = side.displace((x, y), footprint, offset);
            }
            Point3::new(x, y, z)
        });
        Path::from_points(points)
    }
}

/// `a → b` by `t`, landing on `b` exactly at `t = 1`.
fn interpolate(a: Real, b: Real, t: Real) -> Real {
    if t >= 1.0 { b } else { a + (b - a) * t }
}

/// Closed rectangle outline at height `z`, `points_per_side` samples per side,
/// starting at `(width, -depth)` and running counter-clockwise.
pub fn rectangle_outline(footprint: Footprint, z: Real, points_per_side: usize) -> Path {
    let outline = Side::ALL
        .iter()
        .flat_map(|&side| {
            (0..points_per_side).map(move |j| {
                let t = linspace_at(0.0, 1.0, points_per_side, j);
                let (x, y) = side.point(t, footprint);
                Point3::new(x, y, z)
            })
        })
        .collect();
    Path::closed(outline)
}
