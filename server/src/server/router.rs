use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::cors::CorsLayer;

use super::api;
use crate::config::AppState;

/// Create the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/text", post(api::qr::text))
        .route("/url", post(api::qr::url))
        .route("/url_logo", post(api::qr::url_logo))
        .route("/email", post(api::qr::email))
        .route("/phone", post(api::qr::phone))
        .route("/sms", post(api::qr::sms))
        .route("/wifi", post(api::qr::wifi))
        .route("/maps", post(api::qr::maps))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
