use serde::{Deserialize, Serialize};

use crate::{
    models::{CrewCredit, Movie},
    services::{recommendations, title_search, SearchOptions},
    store::Snapshot,
};

/// Query parameters of the explore surface: `?page=movie&movie_id=42` or `?q=alien`
#[derive(Debug, Default, Deserialize)]
pub struct ViewRequest {
    pub page: Option<String>,
    pub movie_id: Option<String>,
    pub q: Option<String>,
}

/// Grid entry linking to a detail view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieCard {
    pub id: i64,
    pub name: String,
    pub poster: String,
}

impl From<&Movie> for MovieCard {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name.clone(),
            poster: movie.poster.clone(),
        }
    }
}

/// Everything the detail page shows for one movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieDetail {
    pub id: i64,
    pub name: String,
    pub poster: String,
    pub tagline: Option<String>,
    /// Rating, language, runtime, genres and year, when present
    pub facts: Vec<String>,
    pub description: String,
    pub cast: Vec<String>,
    pub crew: Vec<CrewCredit>,
    pub recommendations: Vec<MovieCard>,
}

impl MovieDetail {
    pub fn new(movie: &Movie, recommendations: &[&Movie]) -> Self {
        Self {
            id: movie.id,
            name: movie.name.clone(),
            poster: movie.poster.clone(),
            tagline: movie.tagline().map(str::to_string),
            facts: movie.facts(),
            description: movie
                .description
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            cast: movie.cast(),
            crew: movie.crew().to_vec(),
            recommendations: recommendations.iter().map(|m| MovieCard::from(*m)).collect(),
        }
    }
}

/// Outcome of resolving an explore request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home {
        query: Option<String>,
        movies: Vec<MovieCard>,
    },
    Movie(MovieDetail),
    NotFound {
        message: String,
    },
}

/// Builds the detail view for `movie_id`, or `None` when the catalog lacks it
pub fn movie_detail(snapshot: &Snapshot, movie_id: i64, limit: usize) -> Option<MovieDetail> {
    let movie = snapshot.catalog.lookup(movie_id)?;
    let recommendations = recommendations::get_recommendations(snapshot, movie_id, limit);
    Some(MovieDetail::new(movie, &recommendations))
}

/// Maps the explore query surface onto a view
///
/// `page=movie` with an integer `movie_id` selects the detail view. Any other
/// page, or a missing or malformed id, falls back to the home grid.
pub fn resolve(
    snapshot: &Snapshot,
    request: &ViewRequest,
    search: &SearchOptions,
    recommendation_limit: usize,
) -> View {
    let movie_id = request
        .movie_id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok());

    if let (Some("movie"), Some(id)) = (request.page.as_deref(), movie_id) {
        return match movie_detail(snapshot, id, recommendation_limit) {
            Some(detail) => View::Movie(detail),
            None => View::NotFound {
                message: format!("Movie with ID {} not found", id),
            },
        };
    }

    let query = request
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let movies = title_search::browse(&snapshot.catalog, query.as_deref(), search)
        .into_iter()
        .map(MovieCard::from)
        .collect();

    View::Home { query, movies }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SimilarCandidate, SimilarityEntry};
    use crate::store::catalog::tests::movie;

    fn snapshot() -> Snapshot {
        let mut heat = movie(1, "Heat");
        heat.actors = Some("Al Pacino, Robert De Niro".to_string());
        heat.date = Some(1995);

        Snapshot::new(
            vec![heat, movie(2, "Thief"), movie(3, "Collateral")],
            vec![SimilarityEntry {
                movie_id: 1,
                candidates: vec![
                    SimilarCandidate { id: 1, score: 1.0 },
                    SimilarCandidate { id: 3, score: 0.9 },
                    SimilarCandidate { id: 2, score: 0.8 },
                ],
            }],
        )
        .unwrap()
    }

    fn request(page: Option<&str>, movie_id: Option<&str>, q: Option<&str>) -> ViewRequest {
        ViewRequest {
            page: page.map(str::to_string),
            movie_id: movie_id.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    fn resolve_default(request: &ViewRequest) -> View {
        resolve(&snapshot(), request, &SearchOptions::default(), 5)
    }

    #[test]
    fn test_detail_view_for_known_id() {
        match resolve_default(&request(Some("movie"), Some("1"), None)) {
            View::Movie(detail) => {
                assert_eq!(detail.name, "Heat");
                assert_eq!(detail.description, "N/A");
                assert_eq!(detail.cast, vec!["Al Pacino", "Robert De Niro"]);
                assert_eq!(detail.facts, vec!["1995"]);
                let rec_ids: Vec<i64> = detail.recommendations.iter().map(|c| c.id).collect();
                assert_eq!(rec_ids, vec![3, 2]);
            }
            other => panic!("expected detail view, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let view = resolve_default(&request(Some("movie"), Some("77"), None));
        assert_eq!(
            view,
            View::NotFound {
                message: "Movie with ID 77 not found".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_or_missing_id_falls_back_to_home() {
        for movie_id in [Some("abc"), Some(""), Some("1.5"), None] {
            match resolve_default(&request(Some("movie"), movie_id, None)) {
                View::Home { movies, query } => {
                    assert_eq!(movies.len(), 3);
                    assert_eq!(query, None);
                }
                other => panic!("expected home view, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_page_ignores_movie_id() {
        let view = resolve_default(&request(Some("home"), Some("1"), None));
        assert!(matches!(view, View::Home { .. }));
    }

    #[test]
    fn test_home_with_query_searches() {
        match resolve_default(&request(None, None, Some("thief"))) {
            View::Home { movies, query } => {
                assert_eq!(query.as_deref(), Some("thief"));
                assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);
            }
            other => panic!("expected home view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let view = resolve_default(&request(Some("movie"), Some("2"), None));
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["view"], "movie");
        assert_eq!(value["name"], "Thief");
        assert!(value["recommendations"].as_array().unwrap().is_empty());
    }
}
