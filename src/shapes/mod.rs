//! Complete printable designs.
//!
//! Each design is a plain struct of public parameters whose `Default` is a
//! tried and printed configuration. `generate` validates the parameters and
//! returns the paths in print order.

use crate::config::PrintSettings;
use crate::errors::Result;
use crate::path::FullObject;

pub mod rect;
pub mod round;

pub use rect::{RectBox, RectWall, RippleWall, SphereWall};
pub use round::{Cylinder, Dish, EasedVase, InvertingWaveVase};

/// Any of the built-in designs.
#[derive(Clone, Debug, PartialEq)]
pub enum Design {
    Cylinder(Cylinder),
    Dish(Dish),
    EasedVase(EasedVase),
    InvertingWaveVase(InvertingWaveVase),
    Box(RectBox),
    RippleWall(RippleWall),
    SphereWall(SphereWall),
}

impl Design {
    pub const fn name(&self) -> &'static str {
        match self {
            Design::Cylinder(_) => "cylinder",
            Design::Dish(_) => "dish",
            Design::EasedVase(_) => "eased vase",
            Design::InvertingWaveVase(_) => "inverting wave vase",
            Design::Box(_) => "box",
            Design::RippleWall(_) => "ripple wall",
            Design::SphereWall(_) => "sphere wall",
        }
    }

    pub fn generate(&self) -> Result<FullObject> {
        let object = match self {
            Design::Cylinder(d) => d.generate(),
            Design::Dish(d) => d.generate(),
            Design::EasedVase(d) => d.generate(),
            Design::InvertingWaveVase(d) => d.generate(),
            Design::Box(d) => d.generate(),
            Design::RippleWall(d) => d.generate(),
            Design::SphereWall(d) => d.generate(),
        }?;
        log::debug!(
            "{}: {} paths, {} points",
            self.name(),
            object.len(),
            object.total_points()
        );
        Ok(object)
    }
}

macro_rules! impl_from_design {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Design {
                fn from(design: $ty) -> Self {
                    Design::$variant(design)
                }
            }
        )*
    };
}

impl_from_design!(
    Cylinder(Cylinder),
    Dish(Dish),
    EasedVase(EasedVase),
    InvertingWaveVase(InvertingWaveVase),
    Box(RectBox),
    RippleWall(RippleWall),
    SphereWall(SphereWall),
);

/// Generate `design`'s paths in print order.
pub fn generate(design: &Design) -> Result<FullObject> {
    design.generate()
}

/// Generated geometry together with the settings an exporter needs to turn
/// it into machine code. The settings are carried through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintJob {
    pub settings: PrintSettings,
    pub object: FullObject,
}

impl PrintJob {
    pub fn new(settings: PrintSettings, design: &Design) -> Result<Self> {
        settings.validate()?;
        let object = design.generate()?;
        Ok(Self { settings, object })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_design_generates() {
        let designs: Vec<Design> = vec![
            Cylinder::default().into(),
            Dish::default().into(),
            EasedVase::default().into(),
            InvertingWaveVase::default().into(),
            RectBox::default().into(),
            RippleWall::default().into(),
            SphereWall::default().into(),
        ];
        for design in &designs {
            let object = generate(design).unwrap();
            assert!(!object.is_empty(), "{} produced nothing", design.name());
            assert!(object.iter().all(|path| !path.is_degenerate()), "{}", design.name());
        }
    }

    #[test]
    fn job_rejects_bad_settings_before_generating() {
        let mut settings = PrintSettings::default();
        settings.print.speed.print_speed = -1.0;
        assert!(PrintJob::new(settings, &RectBox::default().into()).is_err());
    }

    #[test]
    fn job_keeps_settings() {
        let settings = PrintSettings::default();
        let job = PrintJob::new(settings.clone(), &RectBox::default().into()).unwrap();
        assert_eq!(job.settings, settings);
        assert_eq!(job.object.len(), 3);
    }
}
