/// Image shrinking
///
/// One pure operation: decode the source, scale both sides by the same
/// factor with bilinear filtering, re-encode as JPEG and replace the output
/// file. No state is kept between runs, so the same parameters always
/// produce the same file.

pub mod encode;
pub mod error;
pub mod resize;

use image::ImageReader;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info};

use crate::state::params::TransformParams;
pub use error::{TransformError, TransformResult};

/// What was written by a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the encoded JPEG
    pub bytes: usize,
}

/// Shrink `params.source_path` and write the JPEG to `output`.
///
/// The extension of the source is not checked; the format is sniffed from
/// its content. The output is replaced atomically, so a failed run leaves
/// any previous output untouched.
pub fn run(params: &TransformParams, output: &Path) -> TransformResult<TransformReport> {
    let source = &params.source_path;

    let image = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| TransformError::decode(source, image::ImageError::IoError(e)))?
        .decode()
        .map_err(|e| TransformError::decode(source, e))?;

    debug!(
        "Decoded {} ({}x{})",
        source.display(),
        image.width(),
        image.height()
    );

    let (width, height) =
        resize::target_dimensions(image.width(), image.height(), params.scale_factor)?;
    let resized = resize::resize_bilinear(&image, width, height);

    debug!("Resized to {}x{} (scale {})", width, height, params.scale_factor);

    let jpeg = encode::encode_jpeg(&resized, params.quality, params.optimize)?;
    write_replacing(output, &jpeg)?;

    info!(
        "Saved {}x{} JPEG ({} KB, quality {}, optimize {}) to {}",
        width,
        height,
        jpeg.len() / 1024,
        params.quality,
        params.optimize,
        output.display()
    );

    Ok(TransformReport {
        output_path: output.to_path_buf(),
        width,
        height,
        bytes: jpeg.len(),
    })
}

/// Stage the bytes next to the target, then rename over it.
///
/// The staged file takes the mode of the output it replaces, or the
/// umask-filtered default of a plain `File::create` when there is none.
fn write_replacing(output: &Path, bytes: &[u8]) -> TransformResult<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let previous = fs::metadata(output).ok().map(|meta| meta.permissions());

    let mut staged = staging_builder()
        .tempfile_in(dir)
        .map_err(|e| TransformError::io(output, e))?;
    if let Some(permissions) = previous {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| TransformError::io(output, e))?;
    }

    staged
        .write_all(bytes)
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| TransformError::io(output, e))?;
    staged
        .persist(output)
        .map_err(|e| TransformError::io(output, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn staging_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // open(2) applies the umask to this mode
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder() -> Builder<'static, 'static> {
    Builder::new()
}
