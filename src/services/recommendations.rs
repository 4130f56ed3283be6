use crate::{models::Movie, store::Snapshot};

/// Resolves the precomputed neighbours of `movie_id` into catalog records
///
/// Candidates are taken in stored order. The movie itself and ids missing from
/// the catalog are skipped; collection stops after `limit` movies. A movie with
/// no similarity entry gets no recommendations.
pub fn get_recommendations(snapshot: &Snapshot, movie_id: i64, limit: usize) -> Vec<&Movie> {
    let Some(candidates) = snapshot.similarities.candidates(movie_id) else {
        tracing::warn!(movie_id, "No similarity entry for movie");
        return Vec::new();
    };

    let mut stale = 0usize;
    let recommendations: Vec<&Movie> = candidates
        .iter()
        .filter(|candidate| candidate.id != movie_id)
        .filter_map(|candidate| {
            let movie = snapshot.catalog.lookup(candidate.id);
            if movie.is_none() {
                stale += 1;
            }
            movie
        })
        .take(limit)
        .collect();

    if stale > 0 {
        tracing::debug!(movie_id, stale, "Skipped candidates missing from the catalog");
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SimilarCandidate, SimilarityEntry};
    use crate::store::catalog::tests::movie;

    const SOURCE: i64 = 10;
    const A: i64 = 11;
    const B: i64 = 12;
    const C: i64 = 13;

    fn entry(movie_id: i64, candidates: &[(i64, f64)]) -> SimilarityEntry {
        SimilarityEntry {
            movie_id,
            candidates: candidates
                .iter()
                .map(|&(id, score)| SimilarCandidate { id, score })
                .collect(),
        }
    }

    fn snapshot(entries: Vec<SimilarityEntry>) -> Snapshot {
        Snapshot::new(
            vec![
                movie(SOURCE, "Source"),
                movie(A, "A"),
                movie(B, "B"),
                movie(C, "C"),
            ],
            entries,
        )
        .unwrap()
    }

    fn ids(movies: &[&Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_self_reference_is_excluded() {
        let snapshot = snapshot(vec![entry(
            SOURCE,
            &[(SOURCE, 1.0), (A, 0.9), (B, 0.8), (C, 0.7)],
        )]);

        let recs = get_recommendations(&snapshot, SOURCE, 5);
        assert_eq!(ids(&recs), vec![A, B, C]);
    }

    #[test]
    fn test_limit_truncates_in_stored_order() {
        let snapshot = snapshot(vec![entry(SOURCE, &[(A, 0.9), (B, 0.8), (C, 0.7)])]);

        let recs = get_recommendations(&snapshot, SOURCE, 2);
        assert_eq!(ids(&recs), vec![A, B]);
    }

    #[test]
    fn test_stored_order_is_not_resorted() {
        let snapshot = snapshot(vec![entry(SOURCE, &[(C, 0.1), (A, 0.9)])]);

        let recs = get_recommendations(&snapshot, SOURCE, 5);
        assert_eq!(ids(&recs), vec![C, A]);
    }

    #[test]
    fn test_unknown_candidates_are_skipped() {
        let snapshot = snapshot(vec![entry(
            SOURCE,
            &[(A, 0.9), (999, 0.85), (B, 0.8), (998, 0.75), (C, 0.7)],
        )]);

        let recs = get_recommendations(&snapshot, SOURCE, 3);
        assert_eq!(ids(&recs), vec![A, B, C]);
    }

    #[test]
    fn test_missing_entry_yields_empty() {
        let snapshot = snapshot(vec![entry(A, &[(B, 0.5)])]);
        assert!(get_recommendations(&snapshot, SOURCE, 5).is_empty());
    }

    #[test]
    fn test_recommendations_are_idempotent() {
        let snapshot = snapshot(vec![entry(SOURCE, &[(A, 0.9), (B, 0.8)])]);
        let first = ids(&get_recommendations(&snapshot, SOURCE, 5));
        let second = ids(&get_recommendations(&snapshot, SOURCE, 5));
        assert_eq!(first, second);
    }
}
