use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::de;

/// Precomputed neighbours of one movie, as stored in the similarity snapshot
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SimilarityEntry {
    #[serde(rename = "movieId", deserialize_with = "de::whole")]
    pub movie_id: i64,
    /// Candidates in producer order, most similar first
    #[serde(rename = "similar_movies")]
    pub candidates: Vec<SimilarCandidate>,
}

/// A `(movie id, score)` pair; encoded on disk as a two-element array
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarCandidate {
    pub id: i64,
    pub score: f64,
}

impl<'de> Deserialize<'de> for SimilarCandidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Pair(#[serde(deserialize_with = "de::whole")] i64, f64);

        let Pair(id, score) = Pair::deserialize(deserializer)?;
        Ok(SimilarCandidate { id, score })
    }
}

impl Serialize for SimilarCandidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.id, self.score).serialize(serializer)
    }
}
