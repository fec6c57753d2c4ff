//! Canonical payload strings, one constructor per endpoint.

use crate::PayloadError;
use crate::validate::{is_decimal, is_phone_like, is_valid_email, is_valid_url};

/// Byte ceiling for free-text payloads.
pub const MAX_TEXT_LEN: usize = 4000;

/// Byte ceiling for SMS bodies (single concatenated-form message).
pub const MAX_SMS_LEN: usize = 160;

/// Free text is encoded verbatim.
pub fn text_payload(text: &str) -> Result<String, PayloadError> {
    if text.is_empty() {
        return Err(PayloadError::EmptyText);
    }
    if text.len() > MAX_TEXT_LEN {
        return Err(PayloadError::TextTooLong);
    }
    Ok(text.to_owned())
}

/// URLs are encoded verbatim once they parse as absolute with a host.
pub fn url_payload(url: &str) -> Result<String, PayloadError> {
    if !is_valid_url(url) {
        return Err(PayloadError::InvalidUrl);
    }
    Ok(url.to_owned())
}

/// `mailto:` URI. Subject and body are embedded verbatim, without
/// percent-escaping.
pub fn email_payload(email: &str, subject: &str, body: &str) -> Result<String, PayloadError> {
    if !is_valid_email(email) {
        return Err(PayloadError::InvalidEmail);
    }
    Ok(format!("mailto:{email}?subject={subject}&body={body}"))
}

/// `tel:` URI with a leading `+`.
pub fn phone_payload(tel: &str) -> Result<String, PayloadError> {
    if !is_phone_like(tel) {
        return Err(PayloadError::InvalidPhone);
    }
    Ok(format!("tel:+{tel}"))
}

/// `sms:` URI with the message body in the query part.
pub fn sms_payload(phone: &str, body: &str) -> Result<String, PayloadError> {
    if body.is_empty() {
        return Err(PayloadError::EmptyText);
    }
    if body.len() > MAX_SMS_LEN {
        return Err(PayloadError::TextTooLong);
    }
    if !is_phone_like(phone) {
        return Err(PayloadError::InvalidPhone);
    }
    Ok(format!("sms:+{phone}?&body={body}"))
}

/// Recognized Wi-Fi authentication modes. Anything unrecognized is
/// treated as an open network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiSecurity {
    Wpa,
    Wpa2,
    Wep,
    None,
}

impl WifiSecurity {
    /// Case-insensitive parse; unknown values fall back to `None`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "wpa" => Self::Wpa,
            "wpa2" => Self::Wpa2,
            "wep" => Self::Wep,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::Wep => "WEP",
            Self::None => "NONE",
        }
    }
}

/// `WIFI:` credential string. SSID and password are embedded verbatim.
pub fn wifi_payload(ssid: &str, password: &str, encrypt_type: &str) -> String {
    let security = WifiSecurity::parse(encrypt_type);
    format!("WIFI:S:{ssid};T:{};P:{password};;", security.as_str())
}

/// Google Maps query URL. Comma decimal separators are normalized to
/// dots before parsing.
pub fn maps_payload(latitude: &str, longitude: &str) -> Result<String, PayloadError> {
    if !is_decimal(latitude) {
        return Err(PayloadError::InvalidLatitude);
    }
    if !is_decimal(longitude) {
        return Err(PayloadError::InvalidLongitude);
    }

    let lat: f64 = latitude
        .replace(',', ".")
        .parse()
        .map_err(|_| PayloadError::InvalidLatitude)?;
    let lon: f64 = longitude
        .replace(',', ".")
        .parse()
        .map_err(|_| PayloadError::InvalidLongitude)?;

    Ok(format!("http://maps.google.com/maps?q={lat},{lon}"))
}
