/// Application configuration
///
/// Everything is built in code: there is no config file, no environment
/// variable and no command-line flag. `Config::default()` reproduces the
/// built-in low-quality preset and output file name.
use std::path::{Path, PathBuf};

use crate::state::params::DefaultBundle;

/// Output file written to the current working directory
pub const DEFAULT_OUTPUT_PATH: &str = "image_saida.jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the compressed JPEG is written (overwritten on every run)
    pub output_path: PathBuf,
    /// Scale multiplier used when "use default values" is checked
    pub default_scale: f64,
    /// JPEG quality used when "use default values" is checked
    pub default_quality: u8,
    /// Whether the encoder spends extra effort on smaller output
    pub default_optimize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_output_path(DEFAULT_OUTPUT_PATH)
    }
}

impl Config {
    /// Low-quality preset, writing to `path`
    pub fn with_output_path(path: impl AsRef<Path>) -> Self {
        let preset = DefaultBundle::LOW_QUALITY;
        Self {
            output_path: path.as_ref().to_path_buf(),
            default_scale: preset.scale_factor,
            default_quality: preset.quality,
            default_optimize: preset.optimize,
        }
    }

    /// The parameter bundle applied when the user asks for default values
    pub fn default_bundle(&self) -> DefaultBundle {
        DefaultBundle {
            scale_factor: self.default_scale,
            quality: self.default_quality,
            optimize: self.default_optimize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_low_quality_preset() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from("image_saida.jpg"));
        assert_eq!(config.default_bundle(), DefaultBundle::LOW_QUALITY);
    }

    #[test]
    fn test_with_output_path_keeps_defaults() {
        let config = Config::with_output_path("/tmp/out.jpg");
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.jpg"));
        assert_eq!(config.default_scale, 0.63);
        assert_eq!(config.default_quality, 15);
        assert!(config.default_optimize);
    }
}
