//! Movie catalog domain module.
//!
//! This crate contains the movie record model, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod movie;

pub use movie::{Director, Movie, seed_movies};
