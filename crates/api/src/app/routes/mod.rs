use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod movies;
pub mod system;

/// Router for all movie endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/list", get(movies::list_movies))
        .route("/add", post(movies::add_movie))
        .route("/getby/", get(movies::missing_name))
        .route("/getby/:name", get(movies::get_movie_by_name))
        .route("/delete/", delete(movies::missing_name))
        .route("/delete/:name", delete(movies::delete_movie_by_name))
}
