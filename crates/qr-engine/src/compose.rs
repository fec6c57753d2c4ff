//! Symbol and overlay compositing.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage, imageops};

use crate::qr::render_qr;
use crate::{EncodingOptions, QrError};

/// Encode `payload` and composite the optional overlay centered over
/// the symbol, returning PNG bytes.
///
/// The overlay is alpha-blended over the symbol at the centered offset.
/// An overlay larger than the symbol draws partially off-canvas without
/// error.
pub fn compose_png(
    payload: &str,
    overlay: Option<&DynamicImage>,
    opts: EncodingOptions,
) -> Result<Vec<u8>, QrError> {
    let symbol = render_qr(payload, opts)?.to_rgba8();

    let mut canvas = RgbaImage::new(symbol.width(), symbol.height());
    imageops::overlay(&mut canvas, &symbol, 0, 0);

    if let Some(logo) = overlay {
        let (x, y) = centered_offset(canvas.width(), canvas.height(), logo.width(), logo.height());
        imageops::overlay(&mut canvas, &logo.to_rgba8(), x, y);
    }

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Top-left offset that centers `(w, h)` within `(canvas_w, canvas_h)`.
///
/// Integer division on both halves; negative for oversized overlays.
pub fn centered_offset(canvas_w: u32, canvas_h: u32, w: u32, h: u32) -> (i64, i64) {
    (
        i64::from(canvas_w / 2) - i64::from(w / 2),
        i64::from(canvas_h / 2) - i64::from(h / 2),
    )
}
