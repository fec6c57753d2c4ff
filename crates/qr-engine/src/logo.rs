//! Uploaded logo decoding and resizing.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::QrError;

/// Decode an uploaded logo (PNG or JPEG) and scale it to `height`
/// pixels tall, width derived from the aspect ratio.
pub fn decode_logo(data: &[u8], height: u32) -> Result<DynamicImage, QrError> {
    let img = image::load_from_memory(data)?;
    Ok(resize_to_height(&img, height))
}

/// Resize an image to a target height while maintaining aspect ratio.
///
/// Uses bilinear filtering. Returns the original image unchanged if it
/// already matches the target height.
pub fn resize_to_height(img: &DynamicImage, height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_h == height {
        debug!(height, "logo already at target height, skipping resize");
        return img.clone();
    }

    let ratio = f64::from(height) / f64::from(orig_h);
    let new_width = (f64::from(orig_w) * ratio).round() as u32;
    let new_width = new_width.max(1);

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height = height,
        "resizing logo"
    );

    img.resize_exact(new_width, height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let rgba = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        DynamicImage::ImageRgba8(rgba)
    }

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_resize_to_height_downscale() {
        let img = create_test_image(800, 400);
        let result = resize_to_height(&img, 100);
        assert_eq!(result.height(), 100);
        assert_eq!(result.width(), 200);
    }

    #[test]
    fn test_resize_to_height_upscale() {
        let img = create_test_image(40, 50);
        let result = resize_to_height(&img, 100);
        assert_eq!(result.height(), 100);
        assert_eq!(result.width(), 80);
    }

    #[test]
    fn test_resize_to_height_same_height() {
        let img = create_test_image(240, 100);
        let result = resize_to_height(&img, 100);
        assert_eq!(result.height(), 100);
        assert_eq!(result.width(), 240);
    }

    #[test]
    fn test_resize_preserves_non_zero_width() {
        // Very tall, very narrow image
        let img = create_test_image(1, 1000);
        let result = resize_to_height(&img, 100);
        assert_eq!(result.height(), 100);
        assert!(result.width() >= 1);
    }

    #[test]
    fn decode_logo_accepts_png() {
        let data = png_bytes(&create_test_image(80, 80));
        let logo = decode_logo(&data, 100).unwrap();
        assert_eq!(logo.height(), 100);
        assert_eq!(logo.width(), 100);
    }

    #[test]
    fn decode_logo_rejects_garbage() {
        assert!(matches!(
            decode_logo(b"definitely not an image", 100),
            Err(QrError::Image(_))
        ));
    }
}
