//! Density conversions before calibration.
//!
//! Kept in its own test binary: nothing here may calibrate the process-wide
//! density.

use wombat_attrs::{dp_to_px, em_to_px, px_to_dp, px_to_em, screen_density};

#[test]
fn test_screen_density_starts_uncalibrated() {
    assert_eq!(screen_density(), None);
}

#[test]
#[should_panic(expected = "screen density is not calibrated")]
fn test_dp_to_px_panics_before_calibration() {
    let _ = dp_to_px(1.0);
}

#[test]
#[should_panic(expected = "screen density is not calibrated")]
fn test_px_to_dp_panics_before_calibration() {
    let _ = px_to_dp(1.0);
}

#[test]
fn test_em_conversions_work_before_calibration() {
    assert_eq!(em_to_px(2.0), 32);
    assert_eq!(px_to_em(32), 2.0);
}
