use movies_catalog::Movie;
use movies_core::{DomainError, DomainResult};

// -------------------------
// Request decoding
// -------------------------

/// Decode a movie from a raw request body.
///
/// The content type is not checked; any body holding a JSON object of the
/// movie shape is accepted. The top level must be an object: serde would
/// otherwise fill the fields of a struct from an array by position.
pub fn parse_movie(body: &[u8]) -> DomainResult<Movie> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(reject)?;
    if !value.is_object() {
        return Err(reject("expected a JSON object"));
    }

    let movie: Movie = serde_json::from_value(value).map_err(reject)?;
    movie.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected movie body");
    })?;
    Ok(movie)
}

fn reject(e: impl std::fmt::Display) -> DomainError {
    tracing::warn!(error = %e, "rejected malformed movie body");
    DomainError::validation(format!("invalid movie JSON: {e}"))
}
