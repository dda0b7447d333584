use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use movies_infra::MovieStore;

use crate::app::{SharedStore, errors};

/// Liveness plus a readable store: fails with 500 if the store lock is poisoned.
pub async fn health(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    match store.len() {
        Ok(movies) => (StatusCode::OK, Json(json!({ "status": "ok", "movies": movies }))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "no such route")
}
