//! Round designs: a straight cylinder, a wavy dish and two vases.

use crate::errors::{Result, require_positive};
use crate::field::{
    CompositeWaveField, CompositeWaveParams, Perturbation, PerturbationField, WaveField, WaveParams,
};
use crate::float_types::Real;
use crate::infill::{EdgeWave, LineInfill, ScanlineInfill, SpiralInfill, TurnRounding, rotated_bottom_infill};
use crate::path::{FullObject, Path};
use crate::profile::{EasedProfile, LinearProfile, Profile};
use crate::skirt::Skirt;
use crate::sweep::{CircularSweep, ring};

/// Plain cylinder (or cone, when the radii differ) on a cross-hatched floor.
///
/// Print order: skirt, one perimeter ring per bottom layer, one hatched fill
/// per bottom layer, then the spiral wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub total_layers: u32,
    pub layer_height: Real,
    pub base_radius: Real,
    pub last_radius: Real,
    pub bottom_layers: u32,
    pub infill_distance: Real,
    pub wall_points_per_layer: usize,
    pub skirt_offset: Real,
    pub skirt_points: usize,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            total_layers: 50,
            layer_height: 0.5,
            base_radius: 40.0,
            last_radius: 40.0,
            bottom_layers: 2,
            infill_distance: 2.0,
            wall_points_per_layer: 720,
            skirt_offset: 5.0,
            skirt_points: 200,
        }
    }
}

impl Cylinder {
    pub fn profile(&self) -> Result<LinearProfile> {
        LinearProfile::new(self.base_radius, self.last_radius, self.total_layers as Real)
    }

    pub fn generate(&self) -> Result<FullObject> {
        self.generate_with(&ScanlineInfill)
    }

    /// Same as [`Cylinder::generate`] with a caller-supplied line hatcher for the floor.
    pub fn generate_with<L: LineInfill + ?Sized>(&self, filler: &L) -> Result<FullObject> {
        require_positive("layer height", self.layer_height)?;
        let profile = self.profile()?;
        let h = self.layer_height;
        let start_radius = profile.size_at(self.bottom_layers as Real);
        let bottom = 1..=self.bottom_layers;

        let mut object = FullObject::new();
        object.push(Skirt::new(self.skirt_offset, self.skirt_points, h)?.circle(start_radius, 0.0));
        object.extend(bottom.clone().map(|layer| {
            let layer = layer as Real;
            ring(profile.size_at(layer), layer * h, self.wall_points_per_layer)
        }));
        let boundaries: Vec<Path> = bottom
            .map(|layer| ring(start_radius, layer as Real * h, self.wall_points_per_layer))
            .collect();
        object.extend(rotated_bottom_infill(filler, &boundaries, self.infill_distance)?);
        object.push(
            CircularSweep::over_layers(
                self.wall_points_per_layer,
                self.bottom_layers.into(),
                self.total_layers.into(),
                h,
            )?
            .wall(&profile, &Perturbation::None),
        );
        Ok(object)
    }
}

/// Flaring dish with a wavy rim, on a one-layer spiral floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dish {
    pub total_layers: u32,
    pub layer_height: Real,
    pub base_radius: Real,
    pub last_radius: Real,
    pub wave: WaveParams,
    pub spiral_points_per_turn: usize,
    pub infill_distance: Real,
    pub wall_points_per_layer: usize,
    pub skirt_offset: Real,
    pub skirt_points: usize,
}

impl Default for Dish {
    fn default() -> Self {
        Self {
            total_layers: 50,
            layer_height: 0.8,
            base_radius: 20.0,
            last_radius: 50.0,
            wave: WaveParams { amplitude: 2.0, frequency: 40.0, phase_shift: 0.5 },
            spiral_points_per_turn: 120,
            infill_distance: 0.8,
            wall_points_per_layer: 720,
            skirt_offset: 5.0,
            skirt_points: 200,
        }
    }
}

impl Dish {
    pub fn profile(&self) -> Result<LinearProfile> {
        LinearProfile::new(self.base_radius, self.last_radius, self.total_layers as Real)
    }

    pub fn generate(&self) -> Result<FullObject> {
        require_positive("layer height", self.layer_height)?;
        let profile = self.profile()?;
        let field = WaveField::new(self.wave)?;
        let h = self.layer_height;
        let floor_radius = profile.size_at(1.0);

        let mut object = FullObject::new();
        object.push(Skirt::new(self.skirt_offset, self.skirt_points, h)?.circle(floor_radius, field.reach()));
        object.push(
            SpiralInfill::new(
                floor_radius + field.reach(),
                self.infill_distance,
                self.spiral_points_per_turn,
                h,
            )?
            .path(),
        );
        object.push(
            CircularSweep::over_layers(self.wall_points_per_layer, 1, self.total_layers.into(), h)?
                .wall(&profile, &field),
        );
        Ok(object)
    }
}

/// Bulging vase (eased profile) with a drifting wave, whose wall skips a few
/// profile layers at the foot and the lip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedVase {
    pub total_layers: u32,
    pub layer_height: Real,
    pub base_radius: Real,
    pub max_radius: Real,
    pub peak_layer: Real,
    pub smoothness: Real,
    pub wave: WaveParams,
    pub bottom_layers: u32,
    pub spiral_points_per_turn: usize,
    pub infill_distance: Real,
    pub wall_points_per_layer: usize,
    pub wall_skip_start_layers: u32,
    pub wall_skip_end_layers: u32,
    pub skirt_offset: Real,
    pub skirt_points: usize,
}

impl Default for EasedVase {
    fn default() -> Self {
        Self {
            total_layers: 160,
            layer_height: 0.5,
            base_radius: 20.0,
            max_radius: 50.0,
            peak_layer: 80.0,
            smoothness: 0.4,
            wave: WaveParams { amplitude: 1.2, frequency: 50.0, phase_shift: 0.5 },
            bottom_layers: 1,
            spiral_points_per_turn: 120,
            infill_distance: 1.2,
            wall_points_per_layer: 720,
            wall_skip_start_layers: 3,
            wall_skip_end_layers: 3,
            skirt_offset: 20.0,
            skirt_points: 200,
        }
    }
}

impl EasedVase {
    pub fn profile(&self) -> Result<EasedProfile> {
        EasedProfile::new(
            self.base_radius,
            self.max_radius,
            self.peak_layer,
            self.total_layers as Real,
            self.smoothness,
        )
    }

    /// Profile layer range the wall covers, after the skips.
    pub fn wall_layer_range(&self) -> (i64, i64) {
        let start = i64::from(self.bottom_layers) + i64::from(self.wall_skip_start_layers);
        let end = i64::from(self.total_layers) - i64::from(self.wall_skip_end_layers);
        (start, end)
    }

    pub fn generate(&self) -> Result<FullObject> {
        require_positive("layer height", self.layer_height)?;
        let profile = self.profile()?;
        let field = WaveField::new(self.wave)?;
        let h = self.layer_height;
        let (start, end) = self.wall_layer_range();

        let mut object = FullObject::new();
        object.push(
            Skirt::new(self.skirt_offset, self.skirt_points, h)?
                .circle(profile.size_at(self.bottom_layers as Real), field.reach()),
        );
        object.push(
            SpiralInfill::new(
                profile.size_at(start as Real) + field.reach(),
                self.infill_distance,
                self.spiral_points_per_turn,
                h,
            )?
            .path(),
        );

        // The wall starts right on top of the floor even though its profile
        // starts `wall_skip_start_layers` higher.
        let first_wall_layer = (i64::from(self.bottom_layers) + 1) as Real;
        let sweep = CircularSweep::new(
            self.wall_points_per_layer,
            start,
            end,
            first_wall_layer * h,
            (first_wall_layer + (end - start) as Real) * h,
        )?;
        object.push(sweep.wall(&profile, &field));
        Ok(object)
    }
}

/// Straight vase with fine ribbing over two slow lobes, the pattern flipping
/// over and back every `phase_inversion_period` layers. Its spiral floor
/// grows the same lobes towards the rim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvertingWaveVase {
    pub total_layers: u32,
    pub layer_height: Real,
    pub base_radius: Real,
    pub last_radius: Real,
    pub waves: CompositeWaveParams,
    pub bottom_layers: u32,
    pub spiral_points_per_turn: usize,
    pub infill_distance: Real,
    pub wall_points_per_layer: usize,
    pub skirt_offset: Real,
    pub skirt_points: usize,
}

impl Default for InvertingWaveVase {
    fn default() -> Self {
        Self {
            total_layers: 100,
            layer_height: 0.8,
            base_radius: 35.0,
            last_radius: 35.0,
            waves: CompositeWaveParams::default(),
            bottom_layers: 1,
            spiral_points_per_turn: 120,
            infill_distance: 1.5,
            wall_points_per_layer: 720,
            skirt_offset: 5.0,
            skirt_points: 200,
        }
    }
}

impl InvertingWaveVase {
    pub fn profile(&self) -> Result<LinearProfile> {
        LinearProfile::new(self.base_radius, self.last_radius, self.total_layers as Real)
    }

    pub fn field(&self) -> Result<CompositeWaveField> {
        CompositeWaveField::new(self.waves, self.bottom_layers as Real)
    }

    pub fn generate(&self) -> Result<FullObject> {
        require_positive("layer height", self.layer_height)?;
        let profile = self.profile()?;
        let field = self.field()?;
        let h = self.layer_height;
        let start_radius = profile.size_at(self.bottom_layers as Real);

        let mut object = FullObject::new();
        object.push(Skirt::new(self.skirt_offset, self.skirt_points, h)?.circle(start_radius, field.reach()));
        object.push(
            SpiralInfill::new(start_radius, self.infill_distance, self.spiral_points_per_turn, h)?
                .with_rounding(TurnRounding::FloorPlusOne)
                .with_edge_wave(EdgeWave {
                    amplitude: self.waves.low_amplitude,
                    frequency: self.waves.low_frequency,
                })?
                .path(),
        );
        object.push(self.wall(&profile, &field)?);
        Ok(object)
    }

    fn wall<F: PerturbationField>(&self, profile: &LinearProfile, field: &F) -> Result<Path> {
        let sweep = CircularSweep::over_layers(
            self.wall_points_per_layer,
            self.bottom_layers.into(),
            self.total_layers.into(),
            self.layer_height,
        )?;
        Ok(sweep.wall(profile, field))
    }
}
