/// Values held by the form widgets
///
/// Widgets push their edits into this struct; the values are only read
/// when the user presses "Process".
use std::path::Path;
use thiserror::Error;

use super::params::{DefaultBundle, TransformParams};

/// Quality slider bounds
pub const QUALITY_MIN: u8 = 5;
pub const QUALITY_MAX: u8 = 100;

/// Soft bounds shown next to the scale field (not enforced)
pub const SCALE_HINT_MIN: f64 = 0.10;
pub const SCALE_HINT_MAX: f64 = 0.90;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// The scale field does not hold a finite number
    #[error("Scale factor must be a number (got {0:?})")]
    InvalidScale(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Raw text of the scale field, parsed on submit
    pub scale_input: String,
    /// Quality slider position
    pub quality: u8,
    /// "Use default values" checkbox
    pub use_defaults: bool,
}

impl FormState {
    /// Seed the inputs from the preset so the form starts usable
    pub fn new(bundle: &DefaultBundle) -> Self {
        Self {
            scale_input: bundle.scale_factor.to_string(),
            quality: bundle.quality.clamp(QUALITY_MIN, QUALITY_MAX),
            use_defaults: false,
        }
    }

    /// Parse the scale field as a plain multiplier (0.5 means half size)
    pub fn scale_factor(&self) -> Result<f64, FormError> {
        let raw = self.scale_input.trim();
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FormError::InvalidScale(raw.to_string())),
        }
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality.clamp(QUALITY_MIN, QUALITY_MAX);
    }

    /// Build the parameters for one run.
    ///
    /// With the checkbox set the whole preset is used. Otherwise scale and
    /// quality come from the form while `optimize` still comes from the
    /// preset, since the form has no control for it.
    pub fn params(
        &self,
        source_path: &Path,
        bundle: &DefaultBundle,
    ) -> Result<TransformParams, FormError> {
        if self.use_defaults {
            return Ok(TransformParams::from_bundle(source_path, bundle));
        }

        Ok(TransformParams::new(
            source_path,
            self.scale_factor()?,
            self.quality,
            bundle.optimize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_preset() {
        let form = FormState::new(&DefaultBundle::LOW_QUALITY);
        assert_eq!(form.scale_input, "0.63");
        assert_eq!(form.quality, 15);
        assert!(!form.use_defaults);
    }

    #[test]
    fn test_defaults_checked_ignores_form_values() {
        let mut form = FormState::new(&DefaultBundle::LOW_QUALITY);
        form.scale_input = "0.2".to_string();
        form.set_quality(90);
        form.use_defaults = true;

        let params = form
            .params(Path::new("photo.jpg"), &DefaultBundle::LOW_QUALITY)
            .unwrap();
        assert_eq!(params.scale_factor, 0.63);
        assert_eq!(params.quality, 15);
        assert!(params.optimize);
    }

    #[test]
    fn test_user_values_keep_preset_optimize() {
        let mut form = FormState::new(&DefaultBundle::LOW_QUALITY);
        form.scale_input = " 0.5 ".to_string();
        form.set_quality(80);

        let params = form
            .params(Path::new("photo.jpg"), &DefaultBundle::LOW_QUALITY)
            .unwrap();
        assert_eq!(params.scale_factor, 0.5);
        assert_eq!(params.quality, 80);
        assert!(params.optimize);
    }

    #[test]
    fn test_scale_is_not_range_checked() {
        let mut form = FormState::new(&DefaultBundle::LOW_QUALITY);
        form.scale_input = "0".to_string();
        assert_eq!(form.scale_factor(), Ok(0.0));

        form.scale_input = "1.5".to_string();
        assert_eq!(form.scale_factor(), Ok(1.5));
    }

    #[test]
    fn test_invalid_scale_text() {
        let mut form = FormState::new(&DefaultBundle::LOW_QUALITY);
        form.scale_input = "63%".to_string();

        let err = form
            .params(Path::new("photo.jpg"), &DefaultBundle::LOW_QUALITY)
            .unwrap_err();
        assert_eq!(err, FormError::InvalidScale("63%".to_string()));

        form.scale_input = "NaN".to_string();
        assert!(form.scale_factor().is_err());
    }

    #[test]
    fn test_quality_clamped_to_slider_range() {
        let mut form = FormState::new(&DefaultBundle::LOW_QUALITY);
        form.set_quality(0);
        assert_eq!(form.quality, QUALITY_MIN);
        form.set_quality(255);
        assert_eq!(form.quality, QUALITY_MAX);
    }
}
