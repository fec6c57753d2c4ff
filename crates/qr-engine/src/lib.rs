//! QR symbol rendering and logo compositing.
//!
//! Turns a canonical payload string into a PNG byte buffer, optionally
//! with an uploaded logo centered over the symbol.

pub mod compose;
pub mod logo;
pub mod qr;

pub use compose::{centered_offset, compose_png};
pub use logo::{decode_logo, resize_to_height};
pub use qr::render_qr;

use qrcode::EcLevel;

/// Default rendered symbol edge length in pixels.
pub const DEFAULT_SIZE: u32 = 512;

/// Default logo height after resizing.
pub const DEFAULT_LOGO_HEIGHT: u32 = 100;

/// Error correction capacity of the generated symbol.
///
/// Higher levels survive more overlay damage at the cost of a denser
/// symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    Low,
    Medium,
    High,
    Highest,
}

impl ErrorCorrection {
    /// Case-insensitive parse for configuration values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "highest" => Some(Self::Highest),
            _ => None,
        }
    }

    pub(crate) fn ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::High => EcLevel::Q,
            Self::Highest => EcLevel::H,
        }
    }
}

/// Options for a single encode pass.
#[derive(Debug, Clone, Copy)]
pub struct EncodingOptions {
    pub level: ErrorCorrection,
    pub size: u32,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            level: ErrorCorrection::Medium,
            size: DEFAULT_SIZE,
        }
    }
}

/// Unified error type for the qr-engine crate.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ErrorCorrection::parse("medium"), Some(ErrorCorrection::Medium));
        assert_eq!(ErrorCorrection::parse("HIGHEST"), Some(ErrorCorrection::Highest));
        assert_eq!(ErrorCorrection::parse("Low"), Some(ErrorCorrection::Low));
        assert_eq!(ErrorCorrection::parse("bogus"), None);
    }
}
