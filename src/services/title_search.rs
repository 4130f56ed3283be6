use std::collections::HashSet;

use crate::{models::Movie, services::fuzz, store::Catalog};

/// Tuning for fuzzy title search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Minimum weighted-ratio score (0-100) a title must reach
    pub threshold: f64,
    /// Number of top-ranked titles considered before the threshold applies
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            limit: 30,
        }
    }
}

/// Fuzzy search over movie titles
///
/// Ranks every title against `query`, keeps the top `limit` that also reach
/// `threshold`, then returns every catalog record carrying one of those titles.
/// The result follows catalog order, not rank order.
pub fn search_titles<'a>(catalog: &'a Catalog, query: &str, options: &SearchOptions) -> Vec<&'a Movie> {
    let movies = catalog.all();
    let ranked = fuzz::extract(query, movies.iter().map(|m| m.name.as_str()), options.limit);

    let retained: HashSet<&str> = ranked
        .into_iter()
        .filter(|(_, score)| *score >= options.threshold)
        .map(|(index, _)| movies[index].name.as_str())
        .collect();

    let results: Vec<&Movie> = movies
        .iter()
        .filter(|movie| retained.contains(movie.name.as_str()))
        .collect();

    tracing::debug!(
        query,
        matched_titles = retained.len(),
        results = results.len(),
        "Title search completed"
    );

    results
}

/// Browse view listing: the whole catalog for a blank query, search results otherwise
pub fn browse<'a>(catalog: &'a Catalog, query: Option<&str>, options: &SearchOptions) -> Vec<&'a Movie> {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => search_titles(catalog, query, options),
        None => catalog.all().iter().collect(),
    }
}
