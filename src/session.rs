//! Caller-owned filter state.
//!
//! A [`FilterSession`] keeps the pristine source image and the current
//! parameters so the filter can be re-run whenever a slider or band selector
//! changes. The source is never modified; each `process` call starts from it.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, FilterResult};
use crate::filters::convert::{into_flat, rgba_view};
use crate::filters::hue_band::HueBand;
use crate::filters::selective_saturation::{saturate_u8, SaturationParams};

#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    source: Option<Array3<u8>>,
    params: SaturationParams,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SaturationParams) -> FilterResult<Self> {
        params.validate()?;
        Ok(Self {
            source: None,
            params,
        })
    }

    /// Store a copy of a flat RGBA8 buffer as the source image.
    ///
    /// An empty buffer clears the session, matching a cancelled or
    /// non-image file selection.
    pub fn load_rgba(&mut self, data: &[u8], width: usize, height: usize) -> FilterResult<()> {
        if data.is_empty() {
            self.clear();
            return Ok(());
        }
        let view = rgba_view(data, width, height)?;
        self.source = Some(view.to_owned());
        log::debug!("loaded {width}x{height} source image");
        Ok(())
    }

    /// Take ownership of an `(height, width, channels)` image with 3 or 4 channels.
    pub fn load_image(&mut self, image: Array3<u8>) -> FilterResult<()> {
        let (height, width, channels) = image.dim();
        if channels != 3 && channels != 4 {
            return Err(FilterError::InvalidDimensions(format!(
                "expected 3 or 4 channels, got {channels}"
            )));
        }
        self.source = Some(image);
        log::debug!("loaded {width}x{height}x{channels} source image");
        Ok(())
    }

    pub fn clear(&mut self) {
        if self.source.take().is_some() {
            log::debug!("source image cleared");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// `(width, height)` of the loaded source.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.source.as_ref().map(|img| {
            let (height, width, _) = img.dim();
            (width, height)
        })
    }

    pub fn source(&self) -> Option<ArrayView3<'_, u8>> {
        self.source.as_ref().map(|img| img.view())
    }

    pub fn params(&self) -> &SaturationParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SaturationParams) -> FilterResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn set_factor(&mut self, factor: f32) -> FilterResult<()> {
        self.set_params(SaturationParams {
            factor,
            ..self.params
        })
    }

    /// Set the factor from a 0-200 percentage slider.
    pub fn set_slider_percent(&mut self, percent: u32) {
        self.params.factor = percent as f32 / 100.0;
    }

    pub fn set_band(&mut self, band: HueBand) {
        self.params.band = band;
    }

    /// Run the filter on the source image.
    ///
    /// Returns `None` when no source is loaded.
    pub fn process(&self) -> Option<Array3<u8>> {
        let source = self.source.as_ref()?;
        log::debug!(
            "processing factor={} band={} clamp={}",
            self.params.factor,
            self.params.band,
            self.params.clamp_saturation
        );
        // Params only change through validating setters
        Some(saturate_u8(source.view(), &self.params))
    }

    /// Like [`FilterSession::process`], flattened to a row-major buffer.
    pub fn process_rgba(&self) -> Option<Vec<u8>> {
        self.process().map(into_flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pixels() -> Vec<u8> {
        vec![255, 0, 0, 255, 0, 0, 255, 90]
    }

    #[test]
    fn test_process_without_source_is_none() {
        let session = FilterSession::new();
        assert!(!session.is_loaded());
        assert!(session.process().is_none());
        assert!(session.process_rgba().is_none());
        assert!(session.dimensions().is_none());
    }

    #[test]
    fn test_load_and_process() {
        let mut session = FilterSession::new();
        session.load_rgba(&two_pixels(), 2, 1).unwrap();
        session.set_band(HueBand::Red);
        session.set_slider_percent(0);

        assert_eq!(session.dimensions(), Some((2, 1)));
        let out = session.process_rgba().unwrap();
        assert_eq!(out, vec![255, 255, 255, 255, 0, 0, 255, 90]);
    }

    #[test]
    fn test_reprocessing_starts_from_source() {
        let data = two_pixels();
        let mut session = FilterSession::new();
        session.load_rgba(&data, 2, 1).unwrap();
        session.set_band(HueBand::All);

        session.set_slider_percent(0);
        let gray = session.process_rgba().unwrap();
        session.set_slider_percent(100);
        let restored = session.process_rgba().unwrap();

        assert_ne!(gray, data);
        assert_eq!(restored, data);
        assert_eq!(session.source().unwrap().iter().copied().collect::<Vec<_>>(), data);
    }

    #[test]
    fn test_clear_and_empty_load() {
        let mut session = FilterSession::new();
        session.load_rgba(&two_pixels(), 2, 1).unwrap();
        session.clear();
        assert!(session.process().is_none());

        session.load_rgba(&two_pixels(), 2, 1).unwrap();
        session.load_rgba(&[], 0, 0).unwrap();
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_bad_load_keeps_previous_source() {
        let mut session = FilterSession::new();
        session.load_rgba(&two_pixels(), 2, 1).unwrap();

        let err = session.load_rgba(&[1, 2, 3, 4], 2, 1).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDimensions(_)));
        assert_eq!(session.dimensions(), Some((2, 1)));
    }

    #[test]
    fn test_load_image_channel_check() {
        let mut session = FilterSession::new();
        let err = session.load_image(Array3::<u8>::zeros((2, 2, 1))).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDimensions(_)));

        session.load_image(Array3::<u8>::zeros((2, 3, 3))).unwrap();
        assert_eq!(session.dimensions(), Some((3, 2)));
        assert_eq!(session.process().unwrap().dim(), (2, 3, 3));
    }

    #[test]
    fn test_invalid_factor_rejected() {
        let mut session = FilterSession::new();
        assert!(session.set_factor(-1.0).is_err());
        assert_eq!(session.params().factor, 1.0);

        session.set_factor(1.25).unwrap();
        assert_eq!(session.params().factor, 1.25);
        assert!(FilterSession::with_params(SaturationParams::new(f32::INFINITY, HueBand::All)).is_err());
    }
}
