mod support;

use nalgebra::Point3;
use pathcraft::field::{
    CompositeWaveField, CompositeWaveParams, Perturbation, PerturbationField, PhaseInversion,
    RippleField, RippleParams, SphereCarveField, SphereCarveParams, SurfaceSample,
};
use pathcraft::float_types::{PI, Real};
use proptest::prelude::*;
use support::approx_eq;

fn wall_point() -> impl Strategy<Value = Point3<Real>> {
    (-60.0..60.0f64, -10.0..10.0f64, 0.0..120.0f64)
        .prop_map(|(x, y, z)| Point3::new(x as Real, y as Real, z as Real))
}

proptest! {
    #[test]
    fn ripple_respects_depth_clamp(
        point in wall_point(),
        depth in 0.0..10.0f64,
        amplitude in -200.0..200.0f64,
        ratio in 0.0..6.0f64,
    ) {
        let params = RippleParams {
            amplitude: amplitude as Real,
            max_ratio_to_depth: ratio as Real,
            ..RippleParams::default()
        };
        let field = RippleField::new(params, 100.0).unwrap();
        let offset = field.offset_at(&SurfaceSample::at(point), depth as Real);
        prop_assert!(offset.abs() <= depth as Real * ratio as Real);
    }

    #[test]
    fn sphere_never_pushes_outward(point in wall_point(), radius in 1.0..150.0f64, standoff in 0.0..150.0f64) {
        let params = SphereCarveParams {
            sphere_radius: radius as Real,
            standoff_distance: standoff as Real,
        };
        let field = SphereCarveField::new(params, 100.0).unwrap();
        let offset = field.offset_at(&SurfaceSample::at(point), 6.0);
        prop_assert!(offset <= 0.0);

        let d = point.x.hypot(point.z - 50.0);
        if d >= radius as Real {
            prop_assert_eq!(offset, 0.0);
        }
    }

    #[test]
    fn phase_inversion_repeats_every_period(layer in 0.0..500.0f64, period in 1.0..200.0f64) {
        let inversion = PhaseInversion::new(period as Real).unwrap();
        let (layer, period) = (layer as Real, period as Real);
        let here = inversion.phase_at(layer);
        prop_assert!((0.0..=PI + 1e-9).contains(&here));
        prop_assert!(approx_eq(here, inversion.phase_at(layer + period), 1e-6));
    }

    #[test]
    fn phase_inversion_is_continuous(layer in 0.0..500.0f64, period in 1.0..200.0f64, step in 0.0..1.0f64) {
        let inversion = PhaseInversion::new(period as Real).unwrap();
        let (layer, period, step) = (layer as Real, period as Real, step as Real);
        let jump = (inversion.phase_at(layer + step) - inversion.phase_at(layer)).abs();
        // |dφ/dl| ≤ π² / period
        prop_assert!(jump <= PI * PI / period * step + 1e-9);
    }
}

#[test]
fn phase_returns_to_zero_at_whole_periods() {
    let field = CompositeWaveField::new(CompositeWaveParams::default(), 1.0).unwrap();
    for k in 0..5 {
        let layer = 1.0 + 50.0 * k as Real;
        assert!(approx_eq(field.phase_at(layer), 0.0, 1e-12), "layer {layer}");
    }
    assert!(approx_eq(field.phase_at(26.0), PI, 1e-12));
}

#[test]
fn composite_wave_without_inversion_keeps_phase() {
    let params = CompositeWaveParams { phase_inversion_period: None, ..Default::default() };
    let field = CompositeWaveField::new(params, 1.0).unwrap();
    assert_eq!(field.phase_at(26.0), 0.0);
    let sample = SurfaceSample::new(Point3::origin(), 0.0, 26.0);
    // cos(0) · 1 + sin(0) · 3
    assert_eq!(field.offset_at(&sample, 35.0), 1.0);
}

#[test]
fn sphere_axis_is_ten_deep() {
    let params = SphereCarveParams { sphere_radius: 100.0, standoff_distance: 90.0 };
    let field = SphereCarveField::new(params, 100.0).unwrap();
    let on_axis = SurfaceSample::at(Point3::new(0.0, -6.0, 50.0));
    assert_eq!(field.offset_at(&on_axis, 6.0), -10.0);
    // no ratio clamp: the dent is deeper than the wall is thick
    assert_eq!(field.offset_at(&on_axis, 1.0), -10.0);
}

#[test]
fn tagged_field_dispatches() {
    let ripple = RippleField::new(RippleParams::default(), 100.0).unwrap();
    let tagged = Perturbation::from(ripple);
    let sample = SurfaceSample::at(Point3::new(12.0, -5.0, 40.0));
    assert_eq!(tagged.offset_at(&sample, 5.0), ripple.offset_at(&sample, 5.0));
    assert_eq!(Perturbation::None.offset_at(&sample, 5.0), 0.0);
    assert!(Perturbation::default().is_none());
}
