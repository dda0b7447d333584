//! Ordered in-memory movie record store.
//!
//! This module defines the storage boundary the HTTP handlers depend on and a
//! lock-guarded in-memory implementation of it.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryMovieStore;
pub use r#trait::{MovieStore, StoreError, StoreResult};
