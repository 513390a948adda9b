//! RGB <-> HSV color space conversion.
//!
//! Hue is expressed in degrees (0.0-360.0), saturation and value in 0.0-1.0.
//! The `_unit` functions work on unit-range f32 channels and back the f32
//! filter path. The u8 functions derive hue from integer channel differences.

use serde::{Deserialize, Serialize};

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, 0.0 <= h < 360.0
    pub h: f32,
    /// Saturation, 0.0-1.0 (may exceed 1.0 after unclamped scaling)
    pub s: f32,
    /// Value, 0.0-1.0
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

// ============================================================================
// Unit-range (f32) Conversion
// ============================================================================

/// Convert RGB to HSV.
/// Input: r, g, b in 0.0-1.0
/// Output: h in 0.0-360.0, s and v in 0.0-1.0
#[inline]
pub fn rgb_to_hsv_unit(r: f32, g: f32, b: f32) -> Hsv {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    // Ties between channels resolve in r, g, b order
    let h = if delta == 0.0 {
        0.0
    } else if cmax == r {
        (60.0 * (((g - b) / delta) % 6.0) + 360.0) % 360.0
    } else if cmax == g {
        (60.0 * ((b - r) / delta) + 120.0) % 360.0
    } else {
        (60.0 * ((r - g) / delta) + 240.0) % 360.0
    };

    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };

    Hsv { h, s, v: cmax }
}

/// Convert HSV to RGB.
/// Input: h in 0.0-360.0, s and v in 0.0-1.0
/// Output: [r, g, b], unclamped
///
/// Sextants are half-open, so a hue sitting exactly on a 60 degree boundary
/// belongs to the upper sextant. A hue outside 0.0-360.0 yields gray at `v - c`.
#[inline]
pub fn hsv_to_rgb_unit(hsv: Hsv) -> [f32; 3] {
    let Hsv { h, s, v } = hsv;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    [r + m, g + m, b + m]
}

// ============================================================================
// 8-bit (u8) Conversion
// ============================================================================

/// Convert an 8-bit RGB triple to HSV.
///
/// Hue and saturation come from the integer channel differences, so a hue
/// that is exactly a whole number of degrees (a band edge such as 160 for
/// (30, 33, 32)) is represented exactly.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Ties between channels resolve in r, g, b order
    let h = if delta == 0 {
        0.0
    } else if max == r {
        ((60 * (g - b)) as f32 / delta as f32 + 360.0) % 360.0
    } else if max == g {
        (60 * (b - r)) as f32 / delta as f32 + 120.0
    } else {
        (60 * (r - g)) as f32 / delta as f32 + 240.0
    };

    let s = if max == 0 { 0.0 } else { delta as f32 / max as f32 };

    Hsv { h, s, v: max as f32 / 255.0 }
}

/// Convert HSV to an 8-bit RGB triple.
///
/// Each channel is rounded to nearest (halves round up) and clamped to 0-255,
/// which also absorbs out-of-gamut results from saturation above 1.0.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> [u8; 3] {
    hsv_to_rgb_unit(hsv).map(unit_to_u8)
}

#[inline]
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
