use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    error::AppResult,
    models::{Movie, SimilarityEntry},
};

use super::{Catalog, SimilarityIndex};

/// Both read-only tables, loaded once at start-up
#[derive(Debug, Default)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub similarities: SimilarityIndex,
}

impl Snapshot {
    /// Builds a snapshot from in-memory tables
    pub fn new(movies: Vec<Movie>, entries: Vec<SimilarityEntry>) -> AppResult<Self> {
        let catalog = Catalog::new(movies)?;
        let similarities = SimilarityIndex::new(entries);

        let uncovered = catalog
            .all()
            .iter()
            .filter(|movie| similarities.candidates(movie.id).is_none())
            .count();
        if uncovered > 0 {
            tracing::warn!(
                uncovered,
                "Movies without a similarity entry will show no recommendations"
            );
        }

        Ok(Self {
            catalog,
            similarities,
        })
    }

    /// Reads the movie and similarity snapshots from JSON files
    pub fn load(movies_path: impl AsRef<Path>, similar_path: impl AsRef<Path>) -> AppResult<Self> {
        let movies: Vec<Movie> = read_json(movies_path.as_ref())?;
        let entries: Vec<SimilarityEntry> = read_json(similar_path.as_ref())?;

        let snapshot = Self::new(movies, entries)?;

        tracing::info!(
            movies = snapshot.catalog.len(),
            similarity_entries = snapshot.similarities.len(),
            "Snapshots loaded"
        );

        Ok(snapshot)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    tracing::debug!(path = %path.display(), "Reading snapshot");
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
