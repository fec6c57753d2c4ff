//! Request handlers and shared multipart plumbing.

pub mod qr;

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::ApiError;

/// A parsed multipart form: text fields plus the optional logo upload.
#[derive(Debug, Default)]
pub struct QrForm {
    fields: HashMap<String, String>,
    pub file: Option<Vec<u8>>,
}

impl QrForm {
    /// Field value, or the empty string when the field was not sent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

/// Drain a multipart body into a [`QrForm`].
///
/// A zero-length upload counts as "no logo". A file part that cannot be
/// read rejects the request with 415.
pub async fn read_form(mut multipart: Multipart) -> Result<QrForm, ApiError> {
    let mut form = QrForm::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "file" {
            if let Some(filename) = field.file_name() {
                tracing::debug!(filename, "logo upload");
            }
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::UnsupportedMedia("File format is wrong".into()))?;
            if !data.is_empty() {
                form.file = Some(data.to_vec());
            }
        } else {
            let value = field.text().await.unwrap_or_default();
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
