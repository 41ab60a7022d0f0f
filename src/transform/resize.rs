use image::{imageops::FilterType, DynamicImage};

use super::error::{TransformError, TransformResult};

/// Target size for a scale factor: each side is `floor(side * scale)`,
/// computed independently.
///
/// A side that comes out below one pixel (or NaN, or too large for `u32`)
/// is an error rather than a silent 0x0 image.
pub fn target_dimensions(width: u32, height: u32, scale: f64) -> TransformResult<(u32, u32)> {
    let target_width = (f64::from(width) * scale).floor();
    let target_height = (f64::from(height) * scale).floor();

    match (to_side(target_width), to_side(target_height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(TransformError::InvalidDimension {
            width: target_width,
            height: target_height,
            scale,
        }),
    }
}

fn to_side(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 1.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Bilinear resample to an exact size (aspect ratio is not re-derived)
pub fn resize_bilinear(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_on_photo() {
        assert_eq!(target_dimensions(1000, 500, 0.63).unwrap(), (630, 315));
    }

    #[test]
    fn test_floor_not_round() {
        // 3 * 0.5 = 1.5 -> 1
        assert_eq!(target_dimensions(3, 3, 0.5).unwrap(), (1, 1));
        // 199 * 0.5 = 99.5 -> 99
        assert_eq!(target_dimensions(199, 200, 0.5).unwrap(), (99, 100));
    }

    #[test]
    fn test_identity_scale() {
        assert_eq!(target_dimensions(640, 480, 1.0).unwrap(), (640, 480));
    }

    #[test]
    fn test_zero_side_is_rejected() {
        let err = target_dimensions(1, 1, 0.1).unwrap_err();
        assert!(matches!(err, TransformError::InvalidDimension { .. }));

        // Only one axis collapses
        let err = target_dimensions(100, 5, 0.1).unwrap_err();
        assert!(matches!(err, TransformError::InvalidDimension { .. }));
    }

    #[test]
    fn test_non_positive_and_nan_scale() {
        for scale in [0.0, -0.5, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                target_dimensions(800, 600, scale),
                Err(TransformError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_resize_bilinear_exact_size() {
        let image = DynamicImage::new_rgb8(10, 20);
        let resized = resize_bilinear(&image, 3, 7);
        assert_eq!((resized.width(), resized.height()), (3, 7));
    }
}
