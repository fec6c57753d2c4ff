//! QR symbol rendering.

use image::{DynamicImage, Luma};
use qrcode::QrCode;

use crate::{EncodingOptions, QrError};

/// Render a payload string into a grayscale QR raster.
///
/// The output is at least `opts.size` pixels square, quiet zone
/// included. Fails when the payload exceeds the symbol capacity for the
/// chosen error-correction level.
pub fn render_qr(data: &str, opts: EncodingOptions) -> Result<DynamicImage, QrError> {
    let code = QrCode::with_error_correction_level(data, opts.level.ec_level())?;
    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(opts.size, opts.size)
        .build();
    Ok(DynamicImage::ImageLuma8(img))
}
