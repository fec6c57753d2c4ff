//! Payload validation and canonical string construction for QR encoding.
//!
//! Everything in this crate is pure: raw form-field text goes in, a
//! canonical payload string (or a rejection) comes out. No I/O.

pub mod format;
pub mod validate;

pub use format::{
    MAX_SMS_LEN, MAX_TEXT_LEN, WifiSecurity, email_payload, maps_payload, phone_payload,
    sms_payload, text_payload, url_payload, wifi_payload,
};
pub use validate::{is_decimal, is_phone_like, is_valid_email, is_valid_url};

/// Rejection reasons for malformed request fields.
///
/// The display strings are the user-facing messages returned in the
/// JSON error body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text is too long")]
    TextTooLong,

    #[error("Wrong URL format")]
    InvalidUrl,

    #[error("E-mail is wrong")]
    InvalidEmail,

    #[error("Phone number format is wrong")]
    InvalidPhone,

    #[error("Latitude format is wrong")]
    InvalidLatitude,

    #[error("Longitude format is wrong")]
    InvalidLongitude,
}
