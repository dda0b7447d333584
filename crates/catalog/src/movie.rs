use serde::{Deserialize, Serialize};

use movies_core::{DomainError, DomainResult, Entity, MovieId, ValueObject};

/// Director attached to a movie. Owned by the movie; has no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Director {
    pub name: String,
    pub age: i8,
}

impl Director {
    pub fn new(name: impl Into<String>, age: i8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl ValueObject for Director {}

/// A movie record as stored and as exchanged on the wire.
///
/// Missing fields decode to their zero value (empty name/id, rating `0.0`,
/// no director) and unknown fields are ignored, so any JSON object of the
/// right shape is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub name: String,
    pub id: MovieId,
    pub rating: f32,
    pub director: Option<Director>,
}

impl Movie {
    /// A movie without an id; one is assigned when it is stored.
    pub fn new(name: impl Into<String>, rating: f32) -> Self {
        Self {
            name: name.into(),
            id: MovieId::default(),
            rating,
            director: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<MovieId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_director(mut self, director: Director) -> Self {
        self.director = Some(director);
        self
    }

    /// Reject values that decode but cannot be encoded back as the same JSON.
    ///
    /// An out-of-range rating narrows to infinity, which serializes as `null`.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.rating.is_finite() {
            return Err(DomainError::validation(format!(
                "rating must be a finite number, got {}",
                self.rating
            )));
        }
        Ok(())
    }

    /// Assign a freshly generated id if none is set.
    ///
    /// Returns `true` when an id was generated.
    pub fn ensure_id(&mut self) -> bool {
        if !self.has_identity() {
            self.id = MovieId::generate();
            true
        } else {
            false
        }
    }
}

impl Entity for Movie {
    type Id = MovieId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn has_identity(&self) -> bool {
        !self.id.is_empty()
    }
}

/// The records every fresh store starts with.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("Movie1", 8.4)
            .with_id(MovieId::generate())
            .with_director(Director::new("John", 84)),
        Movie::new("Movie2", 9.0)
            .with_id(MovieId::generate())
            .with_director(Director::new("John", 84)),
    ]
}
