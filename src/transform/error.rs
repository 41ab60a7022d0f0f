use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while shrinking an image.
///
/// None of these are retried. They travel back to the shell with `?` and
/// end up on the status line.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Source missing, unreadable, or not an image we can parse
    #[error("Could not read image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Scale factor gives a target size with a zero (or negative) side
    #[error("Scale factor {scale} gives an invalid size of {width}x{height}")]
    InvalidDimension { width: f64, height: f64, scale: f64 },

    /// The JPEG encoder rejected the image
    #[error("Could not encode JPEG: {0}")]
    Encode(String),

    /// Output could not be written
    #[error("Could not write '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

pub type TransformResult<T> = Result<T, TransformError>;

impl TransformError {
    pub(crate) fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
