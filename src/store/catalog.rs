use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Read-only movie table with id lookup
///
/// Keeps records in snapshot order for browsing and a side index from id to
/// position for point lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Builds the catalog, rejecting snapshots where an id appears twice
    pub fn new(movies: Vec<Movie>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(movies.len());

        for (position, movie) in movies.iter().enumerate() {
            if by_id.insert(movie.id, position).is_some() {
                return Err(AppError::DataIntegrity(format!(
                    "movie id {} appears more than once in the catalog",
                    movie.id
                )));
            }
        }

        Ok(Self { movies, by_id })
    }

    /// Exact match on the movie id
    pub fn lookup(&self, id: i64) -> Option<&Movie> {
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    /// Every movie, in snapshot order
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
