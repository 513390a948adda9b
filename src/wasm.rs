//! WebAssembly exports for the selective saturation filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Pixel data is
//! the flat RGBA array of a canvas `ImageData` (length = width * height * 4).
//!
//! ```js
//! const img = ctx.getImageData(0, 0, w, h);
//! const out = selective_saturation_percent_wasm(img.data, w, h, slider.value, "red");
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(out), w, h), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

use crate::filters::hsv::rgb_to_hsv;
use crate::filters::hue_band::HueBand;
use crate::filters::selective_saturation::{apply_filter_with, SaturationParams};
use crate::session::FilterSession;

// ============================================================================
// Stateless Filter
// ============================================================================

/// Apply selective saturation to an RGBA u8 image.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `factor` - Saturation multiplier (0.0-2.0 from the UI)
/// * `band` - "red", "green", "blue" or "all"
///
/// # Returns
/// Flat array of RGBA bytes, same length as `data`
#[wasm_bindgen]
pub fn selective_saturation_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f32,
    band: &str,
) -> Result<Vec<u8>, JsError> {
    let params = SaturationParams::new(factor, band.parse()?);
    Ok(apply_filter_with(data, width, height, &params)?)
}

/// Same as `selective_saturation_wasm`, taking the raw 0-200 slider value.
#[wasm_bindgen]
pub fn selective_saturation_percent_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    percent: u32,
    band: &str,
) -> Result<Vec<u8>, JsError> {
    let params = SaturationParams::from_slider_percent(percent, band.parse()?);
    Ok(apply_filter_with(data, width, height, &params)?)
}

/// Apply selective saturation with parameters given as JSON,
/// e.g. `{"factor": 1.5, "band": "green", "clamp_saturation": false}`.
#[wasm_bindgen]
pub fn selective_saturation_json_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    params_json: &str,
) -> Result<Vec<u8>, JsError> {
    let params = SaturationParams::from_json(params_json)?;
    Ok(apply_filter_with(data, width, height, &params)?)
}

/// Convert one RGB pixel to `[h, s, v]` (h in degrees).
#[wasm_bindgen]
pub fn rgb_to_hsv_wasm(r: u8, g: u8, b: u8) -> Vec<f32> {
    let hsv = rgb_to_hsv(r, g, b);
    vec![hsv.h, hsv.s, hsv.v]
}

// ============================================================================
// Session
// ============================================================================

/// Holds the original image so the page can re-run the filter on every
/// slider or band change without re-reading the canvas.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmFilterSession {
    inner: FilterSession,
}

#[wasm_bindgen]
impl WasmFilterSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, data: &[u8], width: usize, height: usize) -> Result<(), JsError> {
        Ok(self.inner.load_rgba(data, width, height)?)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn set_percent(&mut self, percent: u32) {
        self.inner.set_slider_percent(percent);
    }

    pub fn set_band(&mut self, band: &str) -> Result<(), JsError> {
        let band: HueBand = band.parse()?;
        self.inner.set_band(band);
        Ok(())
    }

    /// Filtered RGBA bytes, or `undefined` if nothing is loaded.
    pub fn process(&self) -> Option<Vec<u8>> {
        self.inner.process_rgba()
    }
}
