mod support;

use pathcraft::config::{Kinematics, PrintSettings};
use pathcraft::errors::GeometryError;
use pathcraft::float_types::Real;
use pathcraft::profile::Footprint;
use pathcraft::shapes::{
    Cylinder, Design, Dish, EasedVase, InvertingWaveVase, PrintJob, RectBox, RectWall, RippleWall,
    SphereWall, generate,
};
use support::{approx_eq, radius, radius_range, z_span};

#[test]
fn box_wall_climbs_from_floor_to_top() {
    let design = RectBox {
        wall: RectWall {
            total_layers: 20,
            layer_height: 1.0,
            base: Footprint::new(35.0, 20.0),
            last: Footprint::new(35.0, 20.0),
            bottom_layers: 1,
            points_per_side: 2,
        },
        ..RectBox::default()
    };
    let object = generate(&design.into()).unwrap();
    let wall = object.paths().last().unwrap();
    assert_eq!(wall.len(), (20 - 1) * 4 * 2);
    assert_eq!(z_span(wall), (1.0, 20.0));

    let floor = &object.paths()[1];
    assert!(floor.iter().all(|p| p.z == 1.0));
    assert!(floor.iter().all(|p| p.x.abs() <= 35.0 && p.y.abs() <= 20.0));
}

#[test]
fn box_with_thinner_layers_scales_heights() {
    let mut design = RectBox::default();
    design.wall.layer_height = 0.4;
    let object = design.generate().unwrap();
    let (first, last) = z_span(object.paths().last().unwrap());
    assert!(approx_eq(first, 0.4, 1e-12));
    assert!(approx_eq(last, 8.0, 1e-12));
}

#[test]
fn cylinder_wall_is_constant_radius() {
    let object = Cylinder::default().generate().unwrap();
    let wall = object.paths().last().unwrap();
    assert_eq!(wall.len(), 720 * 48);
    assert!(wall.iter().all(|p| approx_eq(radius(p), 40.0, 1e-9)));
    // skirt, 2 rings, 2 hatched layers, wall
    assert_eq!(object.len(), 6);
    assert!(approx_eq(radius(object.paths()[0].first().unwrap()), 45.0, 1e-9));
}

#[test]
fn cylinder_floor_crosses_between_layers() {
    let object = Cylinder::default().generate().unwrap();
    let first = &object.paths()[3];
    let second = &object.paths()[4];
    assert_eq!(first.first().unwrap().z, 0.5);
    assert_eq!(second.first().unwrap().z, 1.0);
    let (a, b) = (first.points(), second.points());
    assert!(approx_eq(a[0].y, a[1].y, 1e-9));
    assert!(approx_eq(b[0].x, b[1].x, 1e-9));
}

#[test]
fn sphere_wall_dent_is_ten_deep_on_axis() {
    let design = SphereWall::default();
    let field = design.field().unwrap();
    assert_eq!(field.max_depth(), 10.0);
    assert_eq!(field.offset_at_distance(0.0), -10.0);
    assert_eq!(field.center_z(), 50.0);

    let object = generate(&Design::SphereWall(design)).unwrap();
    assert_eq!(object.len(), 1);
    let wall = &object.paths()[0];
    // nothing bulges past the nominal faces
    assert!(wall.iter().all(|p| p.y >= -6.0 - 1e-9 && p.y <= 6.0 + 1e-9));
}

#[test]
fn ripple_wall_is_bounded_by_clamp() {
    let mut design = RippleWall::default();
    design.ripple.amplitude = 500.0;
    design.ripple.max_ratio_to_depth = 1.0;
    design.wall.points_per_side = 20;
    let object = design.generate().unwrap();
    let wall = &object.paths()[0];
    // the −Y face may move by at most one depth either way
    assert!(wall.iter().all(|p| p.y >= -10.0 - 1e-9 && p.y <= 5.0 + 1e-9));
}

#[test]
fn dish_floor_and_wall() {
    let object = Dish::default().generate().unwrap();
    assert_eq!(object.len(), 3);
    let floor = &object.paths()[1];
    // floor radius 20.6 plus the wave reach of 2, at 0.8 spacing
    assert_eq!(floor.len(), 28 * 120);
    let wall = &object.paths()[2];
    assert_eq!(wall.len(), 720 * 49);
    let (first, last) = z_span(wall);
    assert!(approx_eq(first, 0.8, 1e-12) && approx_eq(last, 40.0, 1e-12));
    let (lo, hi) = radius_range(wall);
    assert!(lo >= 20.6 - 2.0 - 1e-9 && hi <= 52.0 + 1e-9);
}

#[test]
fn eased_vase_bulges_at_the_middle() {
    let object = EasedVase::default().generate().unwrap();
    let wall = object.paths().last().unwrap();
    let (lo, hi) = radius_range(wall);
    // the skipped foot and lip layers keep the wall well clear of the base radius
    assert!(lo > 28.0 && lo < 31.0);
    assert!(hi > 50.0 && hi <= 50.0 + 1.2 + 1e-9);
    assert_eq!(wall.len(), 720 * (157 - 4));
    assert!(wall.is_z_monotonic());
}

#[test]
fn eased_vase_collapses_without_failing() {
    let design = EasedVase {
        total_layers: 6,
        peak_layer: 3.0,
        ..EasedVase::default()
    };
    let object = design.generate().unwrap();
    assert!(object.paths().last().unwrap().is_degenerate());
}

#[test]
fn inverting_wave_vase_floor_has_extra_turn() {
    let object = InvertingWaveVase::default().generate().unwrap();
    assert_eq!(object.len(), 3);
    let floor = &object.paths()[1];
    assert_eq!(floor.len(), 24 * 120);
    let wall = &object.paths()[2];
    assert_eq!(wall.len(), 720 * 99);
    let (lo, hi) = radius_range(wall);
    assert!(lo >= 35.0 - 4.0 - 1e-9 && hi <= 35.0 + 4.0 + 1e-9);
}

#[test]
fn bad_parameters_fail_fast() {
    let design = EasedVase { peak_layer: 160.0, ..EasedVase::default() };
    assert!(matches!(
        generate(&design.into()),
        Err(GeometryError::PeakAtEnd { .. })
    ));

    let design = Cylinder { base_radius: -1.0, ..Cylinder::default() };
    assert!(matches!(
        generate(&design.into()),
        Err(GeometryError::NegativeSize { .. })
    ));

    let design = Dish { total_layers: 0, ..Dish::default() };
    assert!(matches!(
        generate(&design.into()),
        Err(GeometryError::NonPositiveLayers(_))
    ));
}

#[test]
fn settings_load_from_json() {
    let json = r#"{
        "Print": {
            "nozzle": {"nozzle_diameter": 1.2, "filament_diameter": 1.75},
            "layer": {"layer_height": 1.0},
            "speed": {"print_speed": 100, "travel_speed": 5000},
            "origin": {"x": 90, "y": 90},
            "fan_speed": {"fan_speed": 0},
            "temperature": {"nozzle_temperature": 270, "bed_temperature": 80},
            "travel_option": {
                "retraction": false,
                "retraction_distance": 2.0,
                "unretraction_distance": 2.0,
                "z_hop": false,
                "z_hop_distance": 3
            },
            "extrusion_option": {"extrusion_multiplier": 1.5}
        },
        "Hardware": {
            "kinematics": "Cartesian",
            "bed_size": {"bed_size_x": 180, "bed_size_y": 180, "bed_size_z": 180}
        }
    }"#;
    let settings: PrintSettings = serde_json::from_str(json).unwrap();
    settings.validate().unwrap();
    assert_eq!(settings.print.nozzle.nozzle_diameter, 1.2);
    assert_eq!(settings.print.fan_speed.fan_speed, 0);
    assert_eq!(settings.print.extrusion_option.extrusion_multiplier, 1.5);
    assert_eq!(settings.hardware.kinematics, Kinematics::Cartesian);

    let job = PrintJob::new(settings.clone(), &RippleWall::default().into()).unwrap();
    assert_eq!(job.settings, settings);
    assert_eq!(job.object.total_points(), 99 * 4 * 120);
}

#[test]
fn partial_settings_fall_back_to_defaults() {
    let settings: PrintSettings =
        serde_json::from_str(r#"{"Hardware": {"kinematics": "BedTiltBC"}}"#).unwrap();
    assert_eq!(settings.hardware.kinematics, Kinematics::BedTiltBC);
    assert_eq!(settings.print, PrintSettings::default().print);
    assert_eq!(settings.hardware.bed_size.bed_size_z, 180.0 as Real);
}
