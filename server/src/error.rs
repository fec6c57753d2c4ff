//! Request-scoped error type. Each value carries its own HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use qr_engine::QrError;
use qr_payload::PayloadError;

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad or missing form field.
    #[error("{0}")]
    Validation(String),

    /// Payload could not be encoded as a QR symbol, or the uploaded
    /// logo could not be decoded as an image.
    #[error("{0}")]
    Encoding(String),

    /// The uploaded file could not be read at all.
    #[error("{0}")]
    UnsupportedMedia(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Encoding(_) => StatusCode::NOT_FOUND,
            Self::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<QrError> for ApiError {
    fn from(_: QrError) -> Self {
        Self::Encoding("404 Not Found".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_travel_with_the_value() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Encoding("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UnsupportedMedia("x".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn payload_errors_keep_their_messages() {
        let err = ApiError::from(PayloadError::InvalidUrl);
        assert_eq!(err.to_string(), "Wrong URL format");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
