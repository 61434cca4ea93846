//! Machine and print settings.
//!
//! These values drive the export step (flow, feed rates, temperatures,
//! retraction). The geometry never reads them; [`PrintJob`](crate::shapes::PrintJob)
//! carries them alongside the generated paths untouched.
//!
//! The serialized form mirrors the familiar option tree:
//!
//! ```json
//! { "Print": { "nozzle": { "nozzle_diameter": 0.8, ... }, ... },
//!   "Hardware": { "kinematics": "Cartesian", "bed_size": { ... } } }
//! ```
//!
//! Missing sections and keys fall back to [`PrintSettings::default`].

use crate::errors::{Result, require_positive, require_size};
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    #[serde(rename = "Print")]
    pub print: PrintOptions,
    #[serde(rename = "Hardware")]
    pub hardware: Hardware,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    pub nozzle: Nozzle,
    pub layer: LayerOptions,
    pub speed: Speed,
    pub origin: Origin,
    pub fan_speed: FanSpeed,
    pub temperature: Temperature,
    pub travel_option: TravelOption,
    pub extrusion_option: ExtrusionOption,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nozzle {
    /// mm
    pub nozzle_diameter: Real,
    /// mm
    pub filament_diameter: Real,
}

impl Default for Nozzle {
    fn default() -> Self {
        Self { nozzle_diameter: 0.8, filament_diameter: 1.75 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOptions {
    /// mm
    pub layer_height: Real,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self { layer_height: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speed {
    /// mm/min
    pub print_speed: Real,
    /// mm/min
    pub travel_speed: Real,
}

impl Default for Speed {
    fn default() -> Self {
        Self { print_speed: 1000.0, travel_speed: 5000.0 }
    }
}

/// Bed position of the design's (0, 0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub x: Real,
    pub y: Real,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 90.0, y: 90.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanSpeed {
    /// 0–255
    pub fan_speed: u8,
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self { fan_speed: 128 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperature {
    /// °C
    pub nozzle_temperature: Real,
    /// °C
    pub bed_temperature: Real,
}

impl Default for Temperature {
    fn default() -> Self {
        Self { nozzle_temperature: 220.0, bed_temperature: 50.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelOption {
    pub retraction: bool,
    pub retraction_distance: Real,
    pub unretraction_distance: Real,
    pub z_hop: bool,
    pub z_hop_distance: Real,
}

impl Default for TravelOption {
    fn default() -> Self {
        Self {
            retraction: false,
            retraction_distance: 2.0,
            unretraction_distance: 2.0,
            z_hop: false,
            z_hop_distance: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionOption {
    pub extrusion_multiplier: Real,
}

impl Default for ExtrusionOption {
    fn default() -> Self {
        Self { extrusion_multiplier: 1.0 }
    }
}

/// Machine motion system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kinematics {
    #[default]
    Cartesian,
    /// Five-axis machine tilting the nozzle.
    NozzleTilt,
    /// Five-axis machine tilting and rotating the bed (B and C axes).
    BedTiltBC,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hardware {
    pub kinematics: Kinematics,
    pub bed_size: BedSize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedSize {
    pub bed_size_x: Real,
    pub bed_size_y: Real,
    pub bed_size_z: Real,
}

impl Default for BedSize {
    fn default() -> Self {
        Self { bed_size_x: 180.0, bed_size_y: 180.0, bed_size_z: 180.0 }
    }
}

impl PrintSettings {
    /// Check the physical quantities an exporter divides by or moves along.
    pub fn validate(&self) -> Result<()> {
        let print = &self.print;
        require_positive("nozzle diameter", print.nozzle.nozzle_diameter)?;
        require_positive("filament diameter", print.nozzle.filament_diameter)?;
        require_positive("layer height", print.layer.layer_height)?;
        require_positive("print speed", print.speed.print_speed)?;
        require_positive("travel speed", print.speed.travel_speed)?;
        require_size("retraction distance", print.travel_option.retraction_distance)?;
        require_size("unretraction distance", print.travel_option.unretraction_distance)?;
        require_size("z hop distance", print.travel_option.z_hop_distance)?;
        require_positive("extrusion multiplier", print.extrusion_option.extrusion_multiplier)?;
        let bed = &self.hardware.bed_size;
        require_positive("bed size x", bed.bed_size_x)?;
        require_positive("bed size y", bed.bed_size_y)?;
        require_positive("bed size z", bed.bed_size_z)?;
        Ok(())
    }
}
