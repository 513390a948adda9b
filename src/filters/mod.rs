//! Filter modules for the selective saturation effect.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Copied unchanged (no hue) |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGB float | (H, W, 3) | f32 | Red, green, blue, 0.0-1.0 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//! | RGBA float | (H, W, 4) | f32 | RGB + alpha, 0.0-1.0 |
//!
//! ## Architecture
//!
//! - **hsv** - RGB <-> HSV conversion
//! - **hue_band** - Hue band selection and membership test
//! - **selective_saturation** - Per-pixel kernel and image entry points
//! - **convert** - Flat buffer views and bit-depth conversion
//!
//! Alpha is never read or modified. Every filter returns a new image.

pub mod convert;
pub mod hsv;
pub mod hue_band;
pub mod selective_saturation;
