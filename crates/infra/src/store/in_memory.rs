use std::sync::RwLock;

use movies_catalog::{Movie, seed_movies};
use movies_core::DomainError;

use super::r#trait::{MovieStore, StoreError, StoreResult};

/// In-memory movie store guarded by a single `RwLock`.
///
/// Writers (add/delete) are serialized; readers clone a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the default catalog.
    pub fn seeded() -> Self {
        Self::from_movies(seed_movies())
    }

    /// Store holding `movies` as-is, in order. Ids are assigned where missing.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let movies = movies
            .into_iter()
            .map(|mut m| {
                m.ensure_id();
                m
            })
            .collect();
        Self {
            movies: RwLock::new(movies),
        }
    }

    fn position_of(movies: &[Movie], name: &str) -> StoreResult<usize> {
        movies
            .iter()
            .position(|m| m.name == name)
            .ok_or_else(|| DomainError::not_found("movie").into())
    }
}

impl MovieStore for InMemoryMovieStore {
    fn list(&self) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().map_err(|_| StoreError::Poisoned)?;
        Ok(movies.clone())
    }

    fn add(&self, mut movie: Movie) -> StoreResult<Movie> {
        if movie.ensure_id() {
            tracing::debug!(id = %movie.id, "generated movie id");
        }

        let mut movies = self.movies.write().map_err(|_| StoreError::Poisoned)?;
        movies.push(movie.clone());
        tracing::debug!(name = %movie.name, id = %movie.id, total = movies.len(), "movie added");

        Ok(movie)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<(usize, Movie)> {
        let movies = self.movies.read().map_err(|_| StoreError::Poisoned)?;
        let idx = Self::position_of(&movies, name)?;
        Ok((idx, movies[idx].clone()))
    }

    fn delete_by_name(&self, name: &str) -> StoreResult<Vec<Movie>> {
        // Lookup and removal share one write guard so the index stays valid.
        let mut movies = self.movies.write().map_err(|_| StoreError::Poisoned)?;
        let idx = Self::position_of(&movies, name)?;
        let removed = movies.remove(idx);
        tracing::debug!(name = %removed.name, id = %removed.id, position = idx, "movie deleted");

        Ok(movies.clone())
    }

    fn len(&self) -> StoreResult<usize> {
        let movies = self.movies.read().map_err(|_| StoreError::Poisoned)?;
        Ok(movies.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use movies_catalog::Director;

    use super::*;

    fn names(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn seeded_store_holds_two_movies() {
        let store = InMemoryMovieStore::seeded();
        let movies = store.list().unwrap();
        assert_eq!(names(&movies), vec!["Movie1", "Movie2"]);
        assert!(movies.iter().all(|m| !m.id.is_empty()));
    }

    #[test]
    fn add_assigns_id_and_appends() {
        let store = InMemoryMovieStore::seeded();
        let stored = store.add(Movie::new("Movie3", 7.5)).unwrap();

        assert_eq!(stored.name, "Movie3");
        assert!(!stored.id.is_empty());
        assert_eq!(stored.rating, 7.5);

        let movies = store.list().unwrap();
        assert_eq!(names(&movies), vec!["Movie1", "Movie2", "Movie3"]);
        assert_eq!(movies[2], stored);
    }

    #[test]
    fn add_keeps_supplied_id() {
        let store = InMemoryMovieStore::new();
        let stored = store.add(Movie::new("Movie3", 7.5).with_id("fixed")).unwrap();
        assert_eq!(stored.id.as_str(), "fixed");
    }

    #[test]
    fn from_movies_fills_missing_ids() {
        let store = InMemoryMovieStore::from_movies(vec![Movie::new("A", 1.0)]);
        let (_, a) = store.find_by_name("A").unwrap();
        assert!(!a.id.is_empty());
    }

    #[test]
    fn find_returns_first_match_and_position() {
        let store = InMemoryMovieStore::new();
        store.add(Movie::new("Dup", 1.0).with_id("first")).unwrap();
        store.add(Movie::new("Other", 2.0)).unwrap();
        store.add(Movie::new("Dup", 3.0).with_id("second")).unwrap();

        let (idx, found) = store.find_by_name("Dup").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(found.id.as_str(), "first");

        let (idx, _) = store.find_by_name("Other").unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn find_is_case_sensitive() {
        let store = InMemoryMovieStore::seeded();
        let err = store.find_by_name("movie1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn find_missing_is_not_found_and_store_unchanged() {
        let store = InMemoryMovieStore::seeded();
        let before = store.list().unwrap();

        let err = store.find_by_name("NoSuchMovie").unwrap_err();
        assert_eq!(err, StoreError::Domain(DomainError::not_found("movie")));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn mutating_a_found_movie_does_not_touch_the_store() {
        let store = InMemoryMovieStore::seeded();
        let (_, mut copy) = store.find_by_name("Movie1").unwrap();
        copy.name = "Changed".to_string();
        copy.director = Some(Director::new("Someone", 1));

        let (_, original) = store.find_by_name("Movie1").unwrap();
        assert_eq!(original.director, Some(Director::new("John", 84)));
        assert!(store.find_by_name("Changed").is_err());
    }

    #[test]
    fn delete_removes_exactly_first_match_preserving_order() {
        let store = InMemoryMovieStore::new();
        for (name, id) in [("A", "1"), ("B", "2"), ("A", "3"), ("C", "4")] {
            store.add(Movie::new(name, 0.0).with_id(id)).unwrap();
        }

        let remaining = store.delete_by_name("A").unwrap();
        let ids: Vec<&str> = remaining.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
        assert_eq!(store.list().unwrap(), remaining);
    }

    #[test]
    fn delete_last_element() {
        let store = InMemoryMovieStore::seeded();
        let remaining = store.delete_by_name("Movie2").unwrap();
        assert_eq!(names(&remaining), vec!["Movie1"]);
    }

    #[test]
    fn delete_missing_leaves_store_unchanged() {
        let store = InMemoryMovieStore::seeded();
        let err = store.delete_by_name("NoSuchMovie").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn delete_from_empty_store_is_not_found() {
        let store = InMemoryMovieStore::new();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.delete_by_name("Movie1").unwrap_err().is_not_found());
    }

    #[test]
    fn concurrent_adds_are_not_lost() {
        let store = Arc::new(InMemoryMovieStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.add(Movie::new(format!("t{t}-{i}"), 1.0)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let movies = store.list().unwrap();
        assert_eq!(movies.len(), 400);
        let ids: HashSet<_> = movies.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn concurrent_deletes_remove_each_movie_once() {
        let store = Arc::new(InMemoryMovieStore::new());
        for _ in 0..4 {
            store.add(Movie::new("Same", 1.0)).unwrap();
        }

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.delete_by_name("Same").is_ok())
            })
            .collect();
        let deleted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(deleted, 4);
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let store = Arc::new(InMemoryMovieStore::seeded());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.movies.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.list().unwrap_err(), StoreError::Poisoned);
        assert_eq!(store.add(Movie::new("X", 1.0)).unwrap_err(), StoreError::Poisoned);
        assert!(!store.find_by_name("Movie1").unwrap_err().is_not_found());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: N adds grow the store by N, in order, with unique non-empty ids.
            #[test]
            fn adds_preserve_order_and_unique_ids(
                names in proptest::collection::vec("[A-Za-z0-9]{1,12}", 0..40)
            ) {
                let store = InMemoryMovieStore::seeded();
                for name in &names {
                    store.add(Movie::new(name.clone(), 5.0)).unwrap();
                }

                let movies = store.list().unwrap();
                prop_assert_eq!(movies.len(), 2 + names.len());

                let added: Vec<&str> = movies[2..].iter().map(|m| m.name.as_str()).collect();
                let expected: Vec<&str> = names.iter().map(String::as_str).collect();
                prop_assert_eq!(added, expected);

                let ids: HashSet<_> = movies.iter().map(|m| m.id.clone()).collect();
                prop_assert_eq!(ids.len(), movies.len());
                prop_assert!(movies.iter().all(|m| !m.id.is_empty()));
            }

            /// Property: delete shrinks the store by one iff the name exists.
            #[test]
            fn delete_changes_size_only_on_match(
                names in proptest::collection::vec("[a-c]", 0..10),
                target in "[a-d]",
            ) {
                let store = InMemoryMovieStore::new();
                for name in &names {
                    store.add(Movie::new(name.clone(), 1.0)).unwrap();
                }
                let before = store.list().unwrap();

                match store.delete_by_name(&target) {
                    Ok(remaining) => {
                        let idx = before.iter().position(|m| m.name == target).unwrap();
                        prop_assert_eq!(remaining.len(), before.len() - 1);
                        prop_assert!(!remaining.iter().any(|m| m.id == before[idx].id));
                        let mut expected = before.clone();
                        expected.remove(idx);
                        prop_assert_eq!(remaining, expected);
                    }
                    Err(err) => {
                        prop_assert!(err.is_not_found());
                        prop_assert!(!names.contains(&target));
                        prop_assert_eq!(store.list().unwrap(), before);
                    }
                }
            }
        }
    }
}
