use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder};

use super::error::{TransformError, TransformResult};

/// Largest side a baseline JPEG can describe
pub const MAX_JPEG_SIDE: u32 = u16::MAX as u32;

/// Encode an image as JPEG in memory.
///
/// `quality` is clamped into 1..=100. `optimize` asks the encoder for
/// optimized Huffman tables: a slower encode, a smaller file, same pixels.
/// Grayscale stays single-channel; anything else (RGBA PNG included) is
/// flattened to RGB first.
pub fn encode_jpeg(image: &DynamicImage, quality: u8, optimize: bool) -> TransformResult<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    if width > MAX_JPEG_SIDE || height > MAX_JPEG_SIDE {
        return Err(TransformError::Encode(format!(
            "{}x{} exceeds the JPEG limit of {} pixels per side",
            width, height, MAX_JPEG_SIDE
        )));
    }

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, quality.clamp(1, 100));
    encoder.set_optimized_huffman_tables(optimize);

    let result = match image {
        DynamicImage::ImageLuma8(gray) => {
            encoder.encode(gray.as_raw(), width as u16, height as u16, ColorType::Luma)
        }
        other => {
            let rgb = other.to_rgb8();
            encoder.encode(rgb.as_raw(), width as u16, height as u16, ColorType::Rgb)
        }
    };
    result.map_err(|e| TransformError::Encode(e.to_string()))?;

    Ok(bytes)
}
