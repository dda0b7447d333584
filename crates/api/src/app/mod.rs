//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request body decoding
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use movies_infra::MovieStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn MovieStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: SharedStore) -> Router {
    routes::router()
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(store)),
        )
}
