//! # Profile Photo Processing
//!
//! Turns an uploaded photo into the circular avatar embedded in the resume
//! header: centered square crop, circular mask, 200×200 PNG.
//!
//! ```text
//!   ┌────────────┐        ┌──────┐        ╭──────╮
//!   │  ┌──────┐  │  crop  │      │  mask  │      │  resize → PNG
//!   │  │      │  │ ─────▶ │      │ ─────▶ │      │ ─────────────▶ 200×200
//!   │  └──────┘  │        └──────┘        ╰──────╯
//!   └────────────┘
//! ```

use image::{ImageFormat, Rgba, RgbaImage, imageops::FilterType};
use std::io::Cursor;
use tracing::debug;

use crate::error::ResumeError;

/// Edge length of the avatar in pixels.
pub const AVATAR_SIZE: u32 = 200;

/// Centered square inside a `width × height` image: `(left, top, side)`.
///
/// The side is the shorter dimension; the offset on the longer axis is
/// rounded down.
pub fn crop_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Produce the circular PNG avatar from encoded image bytes.
///
/// Pixels outside the inscribed circle are transparent white.
pub fn process_profile_image(bytes: &[u8]) -> Result<Vec<u8>, ResumeError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ResumeError::UnsupportedFormat(e.to_string()))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(ResumeError::UnsupportedFormat(
            "image has no pixels".to_string(),
        ));
    }

    let rgb = img.to_rgb8();
    let (left, top, side) = crop_square(rgb.width(), rgb.height());
    let square = image::imageops::crop_imm(&rgb, left, top, side, side).to_image();

    let radius = side as f32 / 2.0;
    let masked = RgbaImage::from_fn(side, side, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy <= radius * radius {
            let [r, g, b] = square.get_pixel(x, y).0;
            Rgba([r, g, b, 255])
        } else {
            Rgba([255, 255, 255, 0])
        }
    });

    let avatar = image::imageops::resize(&masked, AVATAR_SIZE, AVATAR_SIZE, FilterType::Lanczos3);

    let mut png = Vec::new();
    avatar
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ResumeError::Image(e.to_string()))?;

    debug!(
        source_width = img.width(),
        source_height = img.height(),
        side,
        size = png.len(),
        "Processed profile image"
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    /// 300×200 image: red, green and blue vertical stripes of 100px.
    fn stripes() -> RgbImage {
        RgbImage::from_fn(300, 200, |x, _| match x / 100 {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        })
    }

    #[test]
    fn test_crop_square() {
        assert_eq!(crop_square(300, 200), (50, 0, 200));
        assert_eq!(crop_square(201, 300), (0, 49, 201));
        assert_eq!(crop_square(64, 64), (0, 0, 64));
    }

    #[test]
    fn test_output_is_200_square_png() {
        let png = process_profile_image(&encode(&stripes(), ImageFormat::Png)).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[test]
    fn test_crop_is_centered() {
        let png = process_profile_image(&encode(&stripes(), ImageFormat::Png)).unwrap();
        let avatar = image::load_from_memory(&png).unwrap().to_rgba8();

        // Crop keeps columns 50..250: red 50..100, green 100..200, blue 200..250
        let center = avatar.get_pixel(100, 100).0;
        assert!(center[1] > 250 && center[0] < 5 && center[3] > 250, "{center:?}");
        let left = avatar.get_pixel(20, 100).0;
        assert!(left[0] > 200 && left[1] < 50, "{left:?}");
        let right = avatar.get_pixel(180, 100).0;
        assert!(right[2] > 200 && right[1] < 50, "{right:?}");
    }

    #[test]
    fn test_corners_are_transparent() {
        let png = process_profile_image(&encode(&stripes(), ImageFormat::Png)).unwrap();
        let avatar = image::load_from_memory(&png).unwrap().to_rgba8();
        for (x, y) in [(0, 0), (199, 0), (0, 199), (199, 199)] {
            assert_eq!(avatar.get_pixel(x, y).0[3], 0);
        }
    }

    #[test]
    fn test_small_jpeg_is_upscaled() {
        let img = RgbImage::from_pixel(40, 60, Rgb([10, 20, 30]));
        let png = process_profile_image(&encode(&img, ImageFormat::Jpeg)).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (200, 200));
    }

    #[test]
    fn test_garbage_is_unsupported() {
        let err = process_profile_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ResumeError::UnsupportedFormat(_)));
        assert!(process_profile_image(&[]).is_err());
    }
}
