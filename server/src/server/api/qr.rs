//! One handler per payload type. Each maps form fields to a canonical
//! payload string, composites the optional logo, and answers with PNG
//! bytes.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use qr_engine::{compose_png, decode_logo};
use qr_payload::format;

use crate::config::AppState;
use crate::error::ApiError;

use super::{QrForm, read_form};

type PngResult = Result<Response, ApiError>;

/// Decode the uploaded logo (if any) and composite the final PNG.
///
/// `force_logo_level` keeps the logo-grade error correction even when
/// no file was uploaded.
fn generate(state: &AppState, form: &QrForm, payload: &str, force_logo_level: bool) -> PngResult {
    let overlay = match &form.file {
        Some(bytes) => Some(decode_logo(bytes, state.logo_height())?),
        None => {
            tracing::debug!("no logo uploaded");
            None
        }
    };

    let opts = state.encode_options(force_logo_level || overlay.is_some());
    let png = compose_png(payload, overlay.as_ref(), opts)?;

    tracing::info!(
        payload_len = payload.len(),
        overlay = overlay.is_some(),
        "encoded QR payload"
    );

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// POST /text – QR for free text
pub async fn text(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::text_payload(form.field("text"))?;
    generate(&state, &form, &payload, false)
}

/// POST /url – QR for a URL
pub async fn url(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::url_payload(form.field("url"))?;
    generate(&state, &form, &payload, false)
}

/// POST /url_logo – QR for a URL, always at logo-grade error correction
pub async fn url_logo(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::url_payload(form.field("url"))?;
    generate(&state, &form, &payload, true)
}

/// POST /email – QR for a mailto link
pub async fn email(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::email_payload(
        form.field("email"),
        form.field("subject"),
        form.field("body"),
    )?;
    generate(&state, &form, &payload, false)
}

/// POST /phone – QR for a phone number
pub async fn phone(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::phone_payload(form.field("tel"))?;
    generate(&state, &form, &payload, false)
}

/// POST /sms – QR for an SMS with body
pub async fn sms(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::sms_payload(form.field("phone"), form.field("body"))?;
    generate(&state, &form, &payload, false)
}

/// POST /wifi – QR for Wi-Fi credentials
pub async fn wifi(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::wifi_payload(
        form.field("ssid"),
        form.field("password"),
        form.field("encryptType"),
    );
    generate(&state, &form, &payload, false)
}

/// POST /maps – QR for geographic coordinates
pub async fn maps(State(state): State<AppState>, multipart: Multipart) -> PngResult {
    let form = read_form(multipart).await?;
    let payload = format::maps_payload(form.field("latitude"), form.field("longitude"))?;
    generate(&state, &form, &payload, false)
}
