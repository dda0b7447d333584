use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use movies_infra::MovieStore;

use crate::app::{SharedStore, dto, errors};

pub async fn list_movies(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    match store.list() {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn add_movie(
    Extension(store): Extension<SharedStore>,
    body: Bytes,
) -> axum::response::Response {
    let movie = match dto::parse_movie(&body) {
        Ok(m) => m,
        Err(e) => return errors::store_error_to_response(e.into()),
    };

    match store.add(movie) {
        Ok(stored) => {
            tracing::info!(name = %stored.name, id = %stored.id, "movie added");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_movie_by_name(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match store.find_by_name(&name) {
        Ok((_, movie)) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_movie_by_name(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match store.delete_by_name(&name) {
        Ok(remaining) => {
            tracing::info!(%name, remaining = remaining.len(), "movie deleted");
            (StatusCode::OK, Json(remaining)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Requests that reach a by-name route without a name segment.
pub async fn missing_name() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", errors::NAME_MISSING)
}
