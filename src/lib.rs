//! Selective saturation filter
//!
//! Scales the HSV saturation of pixels whose hue falls in a chosen band
//! (red, green, blue or all) and passes every other pixel through unchanged.
//! Python bindings via PyO3 and WASM bindings for JavaScript are available
//! behind the `python` and `wasm` features.
//!
//! ## Image Format
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **Grayscale**: (height, width, 1) - copied unchanged
//!
//! Both bit depths are supported:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! Flat RGBA buffers (as produced by an HTML canvas) go through
//! [`apply_filter`], which views them as `(height, width, 4)` without copying.

pub mod error;
pub mod filters;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, FilterResult};
pub use filters::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use filters::hue_band::{is_target_hue, HueBand};
pub use filters::selective_saturation::{apply_filter, apply_filter_with, SaturationParams};
pub use session::FilterSession;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::hsv::{self, Hsv};
    use crate::filters::hue_band::HueBand;
    use crate::filters::selective_saturation::{
        selective_saturation_f32 as selective_saturation_f32_impl,
        selective_saturation_u8, SaturationParams,
    };

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn params_from_args(factor: f32, band: &str, clamp: bool) -> PyResult<SaturationParams> {
        let band: HueBand = band.parse().map_err(to_py_err)?;
        Ok(SaturationParams::new(factor, band).with_clamp(clamp))
    }

    // ========================================================================
    // Selective Saturation
    // ========================================================================

    /// Scale saturation of pixels in a hue band (u8).
    ///
    /// # Arguments
    /// * `image` - Input image (1, 3, or 4 channels)
    /// * `factor` - Saturation multiplier, 0.0 = gray, 1.0 = unchanged
    /// * `band` - "red", "green", "blue" or "all"
    /// * `clamp` - Clamp scaled saturation to 1.0
    #[pyfunction]
    #[pyo3(signature = (image, factor, band="blue", clamp=true))]
    pub fn selective_saturation<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f32,
        band: &str,
        clamp: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let params = params_from_args(factor, band, clamp)?;
        let result = selective_saturation_u8(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Scale saturation of pixels in a hue band (f32, values 0.0-1.0).
    #[pyfunction]
    #[pyo3(signature = (image, factor, band="blue", clamp=true))]
    pub fn selective_saturation_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        factor: f32,
        band: &str,
        clamp: bool,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let params = params_from_args(factor, band, clamp)?;
        let result = selective_saturation_f32_impl(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Conversion Utilities
    // ========================================================================

    /// Convert an RGB pixel (0-255) to (h, s, v) with h in degrees.
    #[pyfunction]
    pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
        let Hsv { h, s, v } = hsv::rgb_to_hsv(r, g, b);
        (h, s, v)
    }

    /// Convert (h, s, v) back to an RGB pixel (0-255).
    #[pyfunction]
    pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
        let [r, g, b] = hsv::hsv_to_rgb(Hsv::new(h, s, v));
        (r, g, b)
    }

    /// Selective saturation Rust extension module
    #[pymodule]
    pub fn selsat_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(selective_saturation, m)?)?;
        m.add_function(wrap_pyfunction!(selective_saturation_f32, m)?)?;
        m.add_function(wrap_pyfunction!(rgb_to_hsv, m)?)?;
        m.add_function(wrap_pyfunction!(hsv_to_rgb, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::selsat_rust;
