//! Integration tests for density calibration and dp/px/em conversion.
//!
//! Every test in this file that touches the process-wide density installs the
//! same value, so they can run in parallel.

use quickcheck_macros::quickcheck;
use wombat_attrs::{
    Density, dp_to_px, em_to_px, init, px_to_dp, px_to_em, screen_density,
    update_screen_density,
};

const CALIBRATION: f32 = 2.0;

#[test]
fn test_init_then_convert() {
    init(Density::new(CALIBRATION));
    assert_eq!(screen_density(), Some(Density::new(CALIBRATION)));
    assert_eq!(dp_to_px(10.0), 20.0);
    assert_eq!(dp_to_px(1.3), 3.0);
    assert_eq!(px_to_dp(5.0), 2.5);
}

#[test]
fn test_update_screen_density() {
    update_screen_density(CALIBRATION);
    assert_eq!(screen_density().map(Density::get), Some(CALIBRATION));
    assert_eq!(px_to_dp(dp_to_px(8.0)), 8.0);
}

#[test]
fn test_explicit_density_does_not_need_calibration() {
    let density = Density::new(3.0);
    assert_eq!(density.dp_to_px(1.0), 3.0);
    assert_eq!(density.dp_to_px(0.5), 2.0);
    assert_eq!(density.px_to_dp(4.5), 1.5);
}

#[test]
fn test_em_conversions_ignore_density() {
    assert_eq!(em_to_px(1.0), 16);
    assert_eq!(em_to_px(1.99), 31);
    assert_eq!(em_to_px(-0.5), -8);
    assert_eq!(px_to_em(8), 0.5);
}

#[test]
fn test_density_deserializes_from_number() {
    let density: Density = serde_json::from_str("2.625").unwrap();
    assert_eq!(density.get(), 2.625);
}

#[quickcheck]
fn prop_px_to_dp_inverts_dp_to_px(quarter_dp: i16, tenths: u8) -> bool {
    let density = Density::new(1.0 + f32::from(tenths % 30) / 10.0);
    let dp = f32::from(quarter_dp) / 4.0;
    let round_trip = density.px_to_dp(density.dp_to_px(dp));
    (round_trip - dp).abs() <= 1.5 / density.get() + 1e-3
}
