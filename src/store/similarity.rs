use std::collections::HashMap;

use crate::models::{SimilarCandidate, SimilarityEntry};

/// Read-only nearest-neighbours table keyed by source movie id
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    entries: HashMap<i64, Vec<SimilarCandidate>>,
}

impl SimilarityIndex {
    /// Indexes the entries; when a source id repeats, the first entry wins
    pub fn new(entries: Vec<SimilarityEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(&entry.movie_id) {
                tracing::warn!(
                    movie_id = entry.movie_id,
                    "Duplicate similarity entry ignored"
                );
                continue;
            }
            index.insert(entry.movie_id, entry.candidates);
        }

        Self { entries: index }
    }

    /// Candidates for `movie_id` in stored order, if an entry exists
    pub fn candidates(&self, movie_id: i64) -> Option<&[SimilarCandidate]> {
        self.entries.get(&movie_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
