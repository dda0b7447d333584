use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use movies_core::DomainError;
use movies_infra::StoreError;

pub const MOVIE_NOT_FOUND: &str = "movie not found in database";
pub const NAME_MISSING: &str = "movie not found in request";

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(DomainError::NotFound(_)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", MOVIE_NOT_FOUND)
        }
        StoreError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_body", msg)
        }
        StoreError::Poisoned => {
            tracing::error!("movie store lock poisoned");
            internal_error()
        }
    }
}

pub fn internal_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
