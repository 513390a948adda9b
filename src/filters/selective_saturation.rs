//! Selective saturation: scale HSV saturation for pixels inside a hue band.
//!
//! Each pixel is converted RGB -> HSV. If its hue lies in the target band the
//! saturation is multiplied by `factor`, then the pixel is converted back.
//! Pixels outside the band are copied through bit-exactly.
//!
//! ## Supported Formats
//!
//! - **Grayscale (1 channel)**: No-op (a gray pixel has no hue)
//! - **RGB (3 channels)**: Full color processing
//! - **RGBA (4 channels)**: RGB processed, alpha preserved
//!
//! The input is never mutated; every entry point allocates a fresh output of
//! the same shape.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::convert::{into_flat, rgba_view};
use super::hsv::{hsv_to_rgb, hsv_to_rgb_unit, rgb_to_hsv, rgb_to_hsv_unit, Hsv};
use super::hue_band::HueBand;
use crate::error::{FilterError, FilterResult};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters of the selective saturation filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationParams {
    /// Saturation multiplier: 0.0 = gray, 1.0 = no change, 2.0 = double
    pub factor: f32,
    /// Hues affected by the filter
    pub band: HueBand,
    /// Clamp the scaled saturation to 0.0-1.0 before converting back
    pub clamp_saturation: bool,
}

impl Default for SaturationParams {
    fn default() -> Self {
        Self {
            factor: 1.0,
            band: HueBand::default(),
            clamp_saturation: true,
        }
    }
}

impl SaturationParams {
    pub fn new(factor: f32, band: HueBand) -> Self {
        Self {
            factor,
            band,
            ..Self::default()
        }
    }

    /// Build parameters from a percentage slider (0-200 maps to 0.0-2.0).
    pub fn from_slider_percent(percent: u32, band: HueBand) -> Self {
        Self::new(percent as f32 / 100.0, band)
    }

    /// Parse parameters from JSON, e.g. `{"factor": 1.5, "band": "red"}`.
    /// Missing fields take their default values. Band names follow
    /// `HueBand::from_str`, so an unknown name is `UnknownHueBand`.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let invalid = |e: serde_json::Error| FilterError::InvalidParameter(e.to_string());

        let mut value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        let band = match value.as_object_mut().and_then(|fields| fields.remove("band")) {
            Some(serde_json::Value::String(name)) => Some(name.parse::<HueBand>()?),
            Some(other) => {
                return Err(FilterError::InvalidParameter(format!(
                    "band must be a string, got {other}"
                )))
            }
            None => None,
        };

        let mut params: Self = serde_json::from_value(value).map_err(invalid)?;
        if let Some(band) = band {
            params.band = band;
        }
        params.validate()?;
        Ok(params)
    }

    pub fn with_clamp(mut self, clamp_saturation: bool) -> Self {
        self.clamp_saturation = clamp_saturation;
        self
    }

    /// Reject a negative or non-finite factor.
    pub fn validate(&self) -> FilterResult<()> {
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(FilterError::InvalidParameter(format!(
                "saturation factor must be finite and non-negative, got {}",
                self.factor
            )));
        }
        Ok(())
    }

    #[inline]
    fn scale(&self, s: f32) -> f32 {
        let scaled = s * self.factor;
        if self.clamp_saturation {
            scaled.clamp(0.0, 1.0)
        } else {
            scaled
        }
    }
}

// ============================================================================
// Per-pixel Kernel
// ============================================================================

/// Apply the filter to a single 8-bit pixel.
#[inline]
pub fn adjust_pixel(r: u8, g: u8, b: u8, params: &SaturationParams) -> [u8; 3] {
    let hsv = rgb_to_hsv(r, g, b);
    if !params.band.contains(hsv.h) {
        return [r, g, b];
    }
    hsv_to_rgb(Hsv {
        s: params.scale(hsv.s),
        ..hsv
    })
}

/// Apply the filter to a single unit-range pixel. Output is clamped to 0.0-1.0.
#[inline]
pub fn adjust_pixel_unit(r: f32, g: f32, b: f32, params: &SaturationParams) -> [f32; 3] {
    let hsv = rgb_to_hsv_unit(r, g, b);
    if !params.band.contains(hsv.h) {
        return [r, g, b];
    }
    hsv_to_rgb_unit(Hsv {
        s: params.scale(hsv.s),
        ..hsv
    })
    .map(|c| c.clamp(0.0, 1.0))
}

// ============================================================================
// Image Filters
// ============================================================================

/// Apply selective saturation (u8 version).
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `params` - Factor, hue band and clamping mode
///
/// # Returns
/// Filtered image with same shape; alpha and extra channels copied unchanged
///
/// # Errors
/// `InvalidParameter` for a negative or non-finite factor.
pub fn selective_saturation_u8(
    input: ArrayView3<u8>,
    params: &SaturationParams,
) -> FilterResult<Array3<u8>> {
    params.validate()?;
    Ok(saturate_u8(input, params))
}

/// Apply selective saturation (f32 version).
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels), values 0.0-1.0
/// * `params` - Factor, hue band and clamping mode
///
/// # Returns
/// Filtered image with same shape; alpha and extra channels copied unchanged
///
/// # Errors
/// `InvalidParameter` for a negative or non-finite factor.
pub fn selective_saturation_f32(
    input: ArrayView3<f32>,
    params: &SaturationParams,
) -> FilterResult<Array3<f32>> {
    params.validate()?;
    Ok(saturate_f32(input, params))
}

/// Filter loop for already validated parameters.
pub(crate) fn saturate_u8(input: ArrayView3<u8>, params: &SaturationParams) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();

    if channels < 3 {
        return output;
    }

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = adjust_pixel(
                input[[y, x, 0]],
                input[[y, x, 1]],
                input[[y, x, 2]],
                params,
            );
            output[[y, x, 0]] = r;
            output[[y, x, 1]] = g;
            output[[y, x, 2]] = b;
        }
    }
    output
}

fn saturate_f32(input: ArrayView3<f32>, params: &SaturationParams) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();

    if channels < 3 {
        return output;
    }

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = adjust_pixel_unit(
                input[[y, x, 0]],
                input[[y, x, 1]],
                input[[y, x, 2]],
                params,
            );
            output[[y, x, 0]] = r;
            output[[y, x, 1]] = g;
            output[[y, x, 2]] = b;
        }
    }
    output
}

/// Apply selective saturation to a flat RGBA8 buffer in parallel.
///
/// Produces the same bytes as [`selective_saturation_u8`]; pixels are
/// independent so they are spread across the rayon pool.
pub fn selective_saturation_rgba_par(data: &[u8], params: &SaturationParams) -> FilterResult<Vec<u8>> {
    if data.len() % 4 != 0 {
        return Err(FilterError::InvalidDimensions(format!(
            "RGBA buffer length {} is not a multiple of 4",
            data.len()
        )));
    }
    params.validate()?;

    let mut output = data.to_vec();
    output.par_chunks_exact_mut(4).for_each(|px| {
        let [r, g, b] = adjust_pixel(px[0], px[1], px[2], params);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    });
    Ok(output)
}

// ============================================================================
// Flat Buffer Entry Points
// ============================================================================

/// Apply selective saturation to a flat RGBA8 buffer.
///
/// An empty buffer is a no-op and yields an empty buffer.
///
/// # Errors
/// `InvalidDimensions` if the length is not `width * height * 4`,
/// `InvalidParameter` for a negative or non-finite factor.
pub fn apply_filter(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f32,
    band: HueBand,
) -> FilterResult<Vec<u8>> {
    apply_filter_with(data, width, height, &SaturationParams::new(factor, band))
}

/// Like [`apply_filter`], with the full parameter set.
pub fn apply_filter_with(
    data: &[u8],
    width: usize,
    height: usize,
    params: &SaturationParams,
) -> FilterResult<Vec<u8>> {
    if data.is_empty() {
        log::trace!("empty buffer, nothing to filter");
        return Ok(Vec::new());
    }
    params.validate()?;

    let input = rgba_view(data, width, height)?;
    log::trace!(
        "selective saturation {width}x{height} factor={} band={}",
        params.factor,
        params.band
    );
    Ok(into_flat(saturate_u8(input, params)))
}
