//! Infrastructure layer: record storage.

pub mod store;

pub use store::{InMemoryMovieStore, MovieStore, StoreError, StoreResult};
