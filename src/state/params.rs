/// Parameters for a single shrink operation
///
/// A `TransformParams` is built fresh every time the user presses
/// "Process" and is dropped once the transform returns. Nothing here is
/// persisted.
use std::path::{Path, PathBuf};

/// Fixed preset applied when "use default values" is checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultBundle {
    /// Multiplier applied to width and height (0.63 = 63%)
    pub scale_factor: f64,

    /// JPEG quality (0-100)
    pub quality: u8,

    /// Request optimized Huffman tables from the encoder
    pub optimize: bool,
}

impl DefaultBundle {
    /// The low-quality preset the app ships with
    pub const LOW_QUALITY: DefaultBundle = DefaultBundle {
        optimize: true,
        quality: 15,
        scale_factor: 0.63,
    };
}

impl Default for DefaultBundle {
    fn default() -> Self {
        Self::LOW_QUALITY
    }
}

/// Everything the transform needs to produce one output file
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Image to shrink. May be empty if nothing was picked yet.
    pub source_path: PathBuf,

    /// Raw multiplier, semantically in (0, 1]. Not validated here:
    /// degenerate values are rejected by the transform itself.
    pub scale_factor: f64,

    /// JPEG quality. Out-of-range values are clamped by the encoder.
    pub quality: u8,

    /// Spend extra encode time for a smaller file
    pub optimize: bool,
}

impl TransformParams {
    pub fn new(
        source_path: impl AsRef<Path>,
        scale_factor: f64,
        quality: u8,
        optimize: bool,
    ) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            scale_factor,
            quality,
            optimize,
        }
    }

    /// Apply a preset bundle to a source file
    pub fn from_bundle(source_path: impl AsRef<Path>, bundle: &DefaultBundle) -> Self {
        Self::new(
            source_path,
            bundle.scale_factor,
            bundle.quality,
            bundle.optimize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_quality_preset() {
        let preset = DefaultBundle::default();
        assert_eq!(preset.scale_factor, 0.63);
        assert_eq!(preset.quality, 15);
        assert!(preset.optimize);
    }

    #[test]
    fn test_from_bundle() {
        let params = TransformParams::from_bundle("photo.jpg", &DefaultBundle::LOW_QUALITY);

        assert_eq!(params.source_path, PathBuf::from("photo.jpg"));
        assert_eq!(params.scale_factor, 0.63);
        assert_eq!(params.quality, 15);
        assert!(params.optimize);
    }
}
