//! Screen density calibration and unit conversion.
//!
//! dp/px conversion needs the density of the screen being rendered to.
//! Callers either pass a [`Density`] explicitly or calibrate the
//! process-wide value once at startup with [`init`] and use the free
//! functions. The process-wide value lives in an atomic word, so readers on
//! other threads never observe a torn write.
//!
//! em/px conversion uses the fixed base of [`EM_BASE_PX`] and does not need
//! calibration.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Pixels per em.
pub const EM_BASE_PX: f32 = 16.0;

/// Sentinel stored while the screen density is uncalibrated.
const UNCALIBRATED: f32 = -1.0;

/// Bit pattern of the process-wide screen density.
static SCREEN_DENSITY: AtomicU32 = AtomicU32::new(UNCALIBRATED.to_bits());

/// A screen density: physical pixels per density-independent pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f32);

impl Density {
    /// Wrap a density factor. No validation is performed.
    #[must_use]
    pub const fn new(density: f32) -> Self {
        Self(density)
    }

    /// The raw density factor.
    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Convert density-independent pixels to physical pixels, rounded to the
    /// nearest whole pixel (half rounds up).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn dp_to_px(self, dp: f32) -> f32 {
        (self.0 * dp + 0.5) as i32 as f32
    }

    /// Convert physical pixels to density-independent pixels. Not rounded.
    #[must_use]
    pub fn px_to_dp(self, px: f32) -> f32 {
        px / self.0
    }
}

/// Calibrate the process-wide screen density.
pub fn init(density: Density) {
    update_screen_density(density.get());
}

/// Replace the process-wide screen density. No validation is performed;
/// storing `-1.0` returns to the uncalibrated state.
pub fn update_screen_density(density: f32) {
    SCREEN_DENSITY.store(density.to_bits(), Ordering::Release);
}

/// The process-wide screen density, or `None` before calibration.
#[must_use]
pub fn screen_density() -> Option<Density> {
    let bits = SCREEN_DENSITY.load(Ordering::Acquire);
    (bits != UNCALIBRATED.to_bits()).then_some(Density(f32::from_bits(bits)))
}

/// Convert density-independent pixels to physical pixels using the
/// process-wide density. See [`Density::dp_to_px`].
///
/// # Panics
///
/// Panics if the screen density has not been calibrated with [`init`] or
/// [`update_screen_density`].
#[must_use]
pub fn dp_to_px(dp: f32) -> f32 {
    calibrated().dp_to_px(dp)
}

/// Convert physical pixels to density-independent pixels using the
/// process-wide density. See [`Density::px_to_dp`].
///
/// # Panics
///
/// Panics if the screen density has not been calibrated with [`init`] or
/// [`update_screen_density`].
#[must_use]
pub fn px_to_dp(px: f32) -> f32 {
    calibrated().px_to_dp(px)
}

/// Convert ems to whole pixels, truncating.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn em_to_px(em: f32) -> i32 {
    (em * EM_BASE_PX) as i32
}

/// Convert whole pixels to ems.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn px_to_em(px: i32) -> f32 {
    px as f32 / EM_BASE_PX
}

fn calibrated() -> Density {
    let Some(density) = screen_density() else {
        panic!("screen density is not calibrated: call wombat_attrs::init first");
    };
    density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_rounds_half_up() {
        let density = Density::new(1.5);
        assert_eq!(density.dp_to_px(1.0), 2.0);
        assert_eq!(density.dp_to_px(2.0), 3.0);
        assert_eq!(density.dp_to_px(0.2), 0.0);
    }

    #[test]
    fn test_px_to_dp_is_plain_division() {
        let density = Density::new(2.0);
        assert_eq!(density.px_to_dp(3.0), 1.5);
    }

    #[test]
    fn test_em_conversions() {
        assert_eq!(em_to_px(2.0), 32);
        assert_eq!(em_to_px(0.9), 14);
        assert_eq!(px_to_em(24), 1.5);
    }
}
