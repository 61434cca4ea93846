use crate::errors::{Result, require_count, require_finite, require_positive, require_size};
use crate::float_types::{Real, TAU, linspace_at};
use crate::path::Path;
use crate::sweep::sample_indexed;
use nalgebra::Point3;

/// How the spiral turn count is rounded from `max_radius / infill_distance`.
///
/// Designs differ here; neither rule is more correct than the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnRounding {
    /// `⌊max_radius / distance⌋` turns ending exactly at `max_radius`.
    #[default]
    Floor,
    /// One extra turn; the spiral ends at `turns × distance`, just past
    /// `max_radius`, so the pitch stays equal to the infill distance.
    FloorPlusOne,
}

/// Low-frequency lobes superposed on the spiral radius.
///
/// The lobes fade in with radius: their strength is `min(r / max_radius, 1)`,
/// so the centre of the floor is a clean spiral and the rim matches a wavy wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeWave {
    pub amplitude: Real,
    /// Lobes per turn.
    pub frequency: Real,
}

/// Archimedean spiral from the centre out to the rim of a round floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralInfill {
    max_radius: Real,
    infill_distance: Real,
    points_per_turn: usize,
    z: Real,
    rounding: TurnRounding,
    edge_wave: Option<EdgeWave>,
}

impl SpiralInfill {
    pub fn new(max_radius: Real, infill_distance: Real, points_per_turn: usize, z: Real) -> Result<Self> {
        require_size("spiral radius", max_radius)?;
        require_positive("infill distance", infill_distance)?;
        require_count("spiral points per turn", 2, points_per_turn)?;
        require_finite("infill height", z)?;
        Ok(Self {
            max_radius,
            infill_distance,
            points_per_turn,
            z,
            rounding: TurnRounding::Floor,
            edge_wave: None,
        })
    }

    pub const fn with_rounding(mut self, rounding: TurnRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_edge_wave(mut self, wave: EdgeWave) -> Result<Self> {
        require_finite("edge wave amplitude", wave.amplitude)?;
        require_finite("edge wave frequency", wave.frequency)?;
        self.edge_wave = Some(wave);
        Ok(self)
    }

    pub fn turns(&self) -> usize {
        let turns = (self.max_radius / self.infill_distance).floor() as usize;
        match self.rounding {
            TurnRounding::Floor => turns,
            TurnRounding::FloorPlusOne => turns + 1,
        }
    }

    /// Radius the spiral ends at, before any edge wave.
    pub fn outer_radius(&self) -> Real {
        match self.rounding {
            TurnRounding::Floor => self.max_radius,
            TurnRounding::FloorPlusOne => self.turns() as Real * self.infill_distance,
        }
    }

    pub fn point_count(&self) -> usize {
        self.turns() * self.points_per_turn
    }

    /// Build the spiral; a floor narrower than one infill spacing yields
    /// [`Path::degenerate`].
    pub fn path(&self) -> Path {
        let count = self.point_count();
        if count == 0 {
            log::warn!(
                "spiral infill: radius {} is below one infill spacing {}",
                self.max_radius,
                self.infill_distance
            );
            return Path::degenerate();
        }

        let sweep_end = TAU * self.turns() as Real;
        let outer = self.outer_radius();
        log::debug!("spiral infill: {} turns, {} points, radius {}", self.turns(), count, outer);

        let points = sample_indexed(count, |i| {
            let theta = linspace_at(0.0, sweep_end, count, i);
            let mut radius = linspace_at(0.0, outer, count, i);
            if let Some(wave) = self.edge_wave {
                let strength = if self.max_radius > 0.0 {
                    (radius / self.max_radius).min(1.0)
                } else {
                    1.0
                };
                let lobe = (theta.rem_euclid(TAU) * wave.frequency).sin();
                radius += wave.amplitude * lobe * strength;
            }
            Point3::new(radius * theta.cos(), radius * theta.sin(), self.z)
        });
        Path::from_points(points)
    }
}
