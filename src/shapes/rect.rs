//! Rectangular designs: an open box and two decorated panels.

use crate::errors::{Result, require_positive};
use crate::field::{Perturbation, RippleField, RippleParams, SphereCarveField, SphereCarveParams};
use crate::float_types::Real;
use crate::infill::ZigzagInfill;
use crate::path::{FullObject, Path};
use crate::profile::{Footprint, Profile, RectProfile};
use crate::skirt::Skirt;
use crate::sweep::RectangularSweep;

/// Shared dimensions of every rectangular wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectWall {
    pub total_layers: u32,
    pub layer_height: Real,
    pub base: Footprint,
    pub last: Footprint,
    pub bottom_layers: u32,
    pub points_per_side: usize,
}

impl RectWall {
    pub fn profile(&self) -> Result<RectProfile> {
        RectProfile::new(self.base, self.last, self.total_layers as Real)
    }

    /// Total wall height, the frame ripples and dents are placed in.
    pub fn height(&self) -> Real {
        self.total_layers as Real * self.layer_height
    }

    /// Footprint of the first wall layer.
    pub fn start_footprint(&self) -> Result<Footprint> {
        Ok(self.profile()?.size_at(self.bottom_layers as Real))
    }

    /// The continuous wall from the top of the floor to the last layer, with
    /// `field` applied to the −Y side.
    pub fn wall(&self, field: &Perturbation) -> Result<Path> {
        require_positive("layer height", self.layer_height)?;
        let sweep = RectangularSweep::new(
            self.points_per_side,
            self.bottom_layers.into(),
            self.total_layers.into(),
            self.layer_height,
        )?;
        Ok(sweep.wall(&self.profile()?, field))
    }
}

/// Open box: skirt, one zigzag floor layer, then the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectBox {
    pub wall: RectWall,
    pub infill_distance: Real,
    pub bottom_inset: Real,
    pub skirt_offset: Real,
    pub skirt_points: usize,
}

impl Default for RectBox {
    fn default() -> Self {
        Self {
            wall: RectWall {
                total_layers: 20,
                layer_height: 1.0,
                base: Footprint::new(35.0, 20.0),
                last: Footprint::new(35.0, 20.0),
                bottom_layers: 1,
                points_per_side: 2,
            },
            infill_distance: 2.0,
            bottom_inset: 0.0,
            skirt_offset: 5.0,
            skirt_points: 200,
        }
    }
}

impl RectBox {
    pub fn generate(&self) -> Result<FullObject> {
        let start = self.wall.start_footprint()?;
        let h = self.wall.layer_height;

        let mut object = FullObject::new();
        object.push(Skirt::new(self.skirt_offset, self.skirt_points, h)?.rectangle(start));
        object.push(ZigzagInfill::new(start, self.bottom_inset, self.infill_distance, h)?.path());
        object.push(self.wall.wall(&Perturbation::None)?);
        Ok(object)
    }
}

/// Thin panel with damped ripples spreading over its −Y face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleWall {
    pub wall: RectWall,
    pub ripple: RippleParams,
}

impl Default for RippleWall {
    fn default() -> Self {
        Self {
            wall: RectWall {
                total_layers: 100,
                layer_height: 1.0,
                base: Footprint::new(50.0, 5.0),
                last: Footprint::new(50.0, 5.0),
                bottom_layers: 1,
                points_per_side: 120,
            },
            ripple: RippleParams::default(),
        }
    }
}

impl RippleWall {
    pub fn field(&self) -> Result<RippleField> {
        RippleField::new(self.ripple, self.wall.height())
    }

    /// The panel is a single wall path; it has no skirt or floor.
    pub fn generate(&self) -> Result<FullObject> {
        let field = self.field()?.into();
        Ok(FullObject::from(vec![self.wall.wall(&field)?]))
    }
}

/// Thin panel with a spherical dent pressed into its −Y face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereWall {
    pub wall: RectWall,
    pub sphere: SphereCarveParams,
}

impl Default for SphereWall {
    fn default() -> Self {
        Self {
            wall: RectWall {
                total_layers: 100,
                layer_height: 1.0,
                base: Footprint::new(50.0, 6.0),
                last: Footprint::new(50.0, 6.0),
                bottom_layers: 1,
                points_per_side: 120,
            },
            sphere: SphereCarveParams::default(),
        }
    }
}

impl SphereWall {
    pub fn field(&self) -> Result<SphereCarveField> {
        SphereCarveField::new(self.sphere, self.wall.height())
    }

    /// The panel is a single wall path; it has no skirt or floor.
    pub fn generate(&self) -> Result<FullObject> {
        let field = self.field()?.into();
        Ok(FullObject::from(vec![self.wall.wall(&field)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_print_order() {
        let object = RectBox::default().generate().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object.paths()[0].len(), 200);
        assert_eq!(object.paths()[1].len(), 36 * 2);
        assert_eq!(object.paths()[2].len(), 152);
    }

    /// Points of the −Y face, excluding the shared corners.
    fn front_face(wall: &Path, width: Real, depth: Real) -> Vec<Real> {
        wall.iter()
            .filter(|p| p.x.abs() < width - 1e-9 && p.y < depth - 1e-9)
            .map(|p| p.y)
            .collect()
    }

    #[test]
    fn ripple_pushes_both_ways_on_the_front_face() {
        let panel = RippleWall {
            wall: RectWall { points_per_side: 10, ..RippleWall::default().wall },
            ..Default::default()
        };
        let object = panel.generate().unwrap();
        assert_eq!(object.len(), 1);
        let wall = &object.paths()[0];
        assert!(wall.iter().all(|p| p.y <= 5.0 && p.y >= -5.0 - 25.0));
        let front = front_face(wall, 50.0, 5.0);
        assert!(front.iter().any(|&y| y < -6.0));
        assert!(front.iter().any(|&y| y > -4.0));
    }

    #[test]
    fn sphere_wall_dents_inward_only() {
        let object = SphereWall::default().generate().unwrap();
        let wall = &object.paths()[0];
        assert_eq!(wall.len(), 99 * 4 * 120);
        assert!(wall.iter().all(|p| p.y.abs() <= 6.0 + 1e-9));
        let front = front_face(wall, 50.0, 6.0);
        let deepest = front.iter().copied().fold(Real::MIN, Real::max);
        // the dent is 10 deep, so its floor sits 4 past the centre plane
        assert!(deepest > 3.9 && deepest <= 4.0 + 1e-9);
    }

    #[test]
    fn zero_layer_height_is_rejected() {
        let mut panel = SphereWall::default();
        panel.wall.layer_height = 0.0;
        assert!(panel.generate().is_err());
    }
}
