mod support;

use pathcraft::errors::GeometryError;
use pathcraft::float_types::Real;
use pathcraft::profile::{EasedProfile, Footprint, LinearProfile, Profile, RectProfile};
use proptest::prelude::*;
use support::approx_eq;

proptest! {
    #[test]
    fn constant_profile_never_moves(base in 0.0..200.0f64, total in 1.0..500.0f64, p in -50.0..600.0f64) {
        let profile = LinearProfile::new(base as Real, base as Real, total as Real).unwrap();
        prop_assert_eq!(profile.size_at(p as Real), base as Real);
    }

    #[test]
    fn linear_profile_hits_both_ends(base in 0.0..200.0f64, last in 0.0..200.0f64, total in 1.0..500.0f64) {
        let profile = LinearProfile::new(base as Real, last as Real, total as Real).unwrap();
        prop_assert_eq!(profile.size_at(0.0), base as Real);
        prop_assert_eq!(profile.size_at(total as Real), last as Real);
    }

    #[test]
    fn eased_batch_matches_scalar(p in prop::collection::vec(0.0..160.0f64, 1..32)) {
        let profile = EasedProfile::new(20.0, 50.0, 80.0, 160.0, 0.4).unwrap();
        let layers: Vec<Real> = p.iter().map(|&v| v as Real).collect();
        let batch = profile.sizes_at(&layers);
        for (layer, size) in layers.iter().zip(&batch) {
            prop_assert_eq!(profile.size_at(*layer), *size);
        }
    }

    #[test]
    fn eased_stays_between_base_and_max(p in 0.0..160.0f64) {
        let profile = EasedProfile::new(20.0, 50.0, 80.0, 160.0, 0.4).unwrap();
        let size = profile.size_at(p as Real);
        prop_assert!((20.0..=50.0 + 1e-9).contains(&size));
    }
}

#[test]
fn invalid_profiles_fail_fast() {
    assert!(matches!(
        EasedProfile::new(20.0, 50.0, 200.0, 160.0, 0.4),
        Err(GeometryError::PeakOutOfRange { .. })
    ));
    assert!(matches!(
        LinearProfile::new(20.0, 50.0, 0.0),
        Err(GeometryError::NonPositiveLayers(_))
    ));
    assert!(matches!(
        LinearProfile::new(-1.0, 50.0, 10.0),
        Err(GeometryError::NegativeSize { .. })
    ));
}

#[test]
fn rect_profile_interpolates_both_axes() {
    let profile = RectProfile::new(Footprint::new(30.0, 10.0), Footprint::new(40.0, 20.0), 10.0).unwrap();
    assert_eq!(profile.size_at(0.0), Footprint::new(30.0, 10.0));
    assert_eq!(profile.size_at(10.0), Footprint::new(40.0, 20.0));
    let mid = profile.size_at(5.0);
    assert!(approx_eq(mid.width, 35.0, 1e-9) && approx_eq(mid.depth, 15.0, 1e-9));
}
