//! Buffer and bit-depth conversion utilities.
//!
//! Flat RGBA buffers (as handed over by a canvas `getImageData` or a decoder)
//! are viewed as `(height, width, 4)` arrays without copying.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, FilterResult};

// ============================================================================
// Flat Buffer <-> Array
// ============================================================================

/// View a flat RGBA8 buffer as a `(height, width, 4)` array.
///
/// # Errors
/// `InvalidDimensions` when `data.len() != width * height * 4`.
pub fn rgba_view(data: &[u8], width: usize, height: usize) -> FilterResult<ArrayView3<'_, u8>> {
    let expected = width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| FilterError::InvalidDimensions(format!("{width}x{height} overflows")))?;

    if data.len() != expected {
        return Err(FilterError::InvalidDimensions(format!(
            "buffer has {} bytes, {width}x{height} RGBA needs {expected}",
            data.len()
        )));
    }

    ArrayView3::from_shape((height, width, 4), data)
        .map_err(|e| FilterError::InvalidDimensions(e.to_string()))
}

/// Flatten an image back into a row-major buffer.
pub fn into_flat<T: Clone>(image: Array3<T>) -> Vec<T> {
    if image.is_standard_layout() {
        image.into_raw_vec_and_offset().0
    } else {
        image.iter().cloned().collect()
    }
}

// ============================================================================
// Bit Depth
// ============================================================================

/// Convert u8 image (0-255) to f32 (0.0-1.0)
pub fn u8_to_f32(input: ArrayView3<u8>) -> Array3<f32> {
    input.mapv(|v| v as f32 / 255.0)
}

/// Convert f32 image (0.0-1.0) to u8 (0-255), rounding to nearest
pub fn f32_to_u8(input: ArrayView3<f32>) -> Array3<u8> {
    input.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}
