//! Image sample data for PDF image XObjects.

use flate2::{Compression, write::ZlibEncoder};
use image::GenericImageView;
use std::io::Write;

use crate::error::ResumeError;

/// A decoded image split into the two sample streams PDF wants: 8-bit RGB
/// color and an optional 8-bit soft mask for alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    /// `None` when every pixel is opaque.
    pub alpha: Option<Vec<u8>>,
}

impl EmbeddedImage {
    /// Decode encoded image bytes (PNG, JPEG, …).
    pub fn decode(bytes: &[u8]) -> Result<Self, ResumeError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| ResumeError::UnsupportedFormat(e.to_string()))?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ResumeError::UnsupportedFormat(
                "image has no pixels".to_string(),
            ));
        }

        let rgba = img.to_rgba8();
        let pixels = (width * height) as usize;
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }

        let opaque = alpha.iter().all(|&a| a == 255);
        Ok(Self {
            width,
            height,
            rgb,
            alpha: (!opaque).then_some(alpha),
        })
    }
}

/// Zlib-compress a stream for `/FlateDecode`.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>, ResumeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
