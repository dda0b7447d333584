use std::sync::Arc;

use thiserror::Error;

use movies_catalog::Movie;
use movies_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A writer panicked while holding the lock; the contents can no longer be trusted.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Domain(e) if e.is_not_found())
    }
}

/// Ordered, insertion-preserving collection of movies.
///
/// ## Semantics
///
/// - `list()` returns an owned snapshot taken under a single lock acquisition;
///   it never observes a half-applied mutation.
/// - `add()` assigns an id when the record has none, then appends.
/// - `find_by_name()` is a linear, case-sensitive scan; the first match in
///   store order wins (names are not unique). The returned movie is a copy.
/// - `delete_by_name()` removes exactly the first match, shifting later
///   records left by one. Lookup and removal happen atomically.
///
/// Lookups that match nothing fail with `DomainError::NotFound` and leave the
/// store unchanged.
pub trait MovieStore: Send + Sync {
    fn list(&self) -> StoreResult<Vec<Movie>>;

    fn add(&self, movie: Movie) -> StoreResult<Movie>;

    /// First movie named exactly `name`, with its position.
    fn find_by_name(&self, name: &str) -> StoreResult<(usize, Movie)>;

    /// Remove the first movie named `name`; returns the remaining records.
    fn delete_by_name(&self, name: &str) -> StoreResult<Vec<Movie>>;

    fn len(&self) -> StoreResult<usize>;
}

impl<S> MovieStore for Arc<S>
where
    S: MovieStore + ?Sized,
{
    fn list(&self) -> StoreResult<Vec<Movie>> {
        (**self).list()
    }

    fn add(&self, movie: Movie) -> StoreResult<Movie> {
        (**self).add(movie)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<(usize, Movie)> {
        (**self).find_by_name(name)
    }

    fn delete_by_name(&self, name: &str) -> StoreResult<Vec<Movie>> {
        (**self).delete_by_name(name)
    }

    fn len(&self) -> StoreResult<usize> {
        (**self).len()
    }
}
