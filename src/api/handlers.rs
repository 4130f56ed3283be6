use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    services::{
        recommendations, title_search,
        views::{self, MovieCard, MovieDetail, View, ViewRequest},
    },
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "movies": state.snapshot.catalog.len()
        })),
    )
}

/// Resolves the explore query surface (`page`, `movie_id`, `q`) to a view
pub async fn explore(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(request): Query<ViewRequest>,
) -> Json<View> {
    let view = views::resolve(
        &state.snapshot,
        &request,
        &state.search,
        state.recommendation_limit,
    );

    match &view {
        View::Home { query, movies } => tracing::info!(
            request_id = %request_id,
            query = query.as_deref().unwrap_or(""),
            results = movies.len(),
            "Rendered home view"
        ),
        View::Movie(detail) => tracing::info!(
            request_id = %request_id,
            movie_id = detail.id,
            recommendations = detail.recommendations.len(),
            "Rendered movie view"
        ),
        View::NotFound { message } => tracing::info!(
            request_id = %request_id,
            message = %message,
            "Movie view requested for unknown id"
        ),
    }

    Json(view)
}

/// Lists the catalog, or fuzzy search results when `q` is given
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<MovieCard>> {
    let movies = title_search::browse(&state.snapshot.catalog, params.q.as_deref(), &state.search)
        .into_iter()
        .map(MovieCard::from)
        .collect();
    Json(movies)
}

/// Detail view of one movie, including its recommendations
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<MovieDetail>> {
    views::movie_detail(&state.snapshot, movie_id, state.recommendation_limit)
        .map(Json)
        .ok_or_else(|| AppError::movie_not_found(movie_id))
}

/// Recommendation cards for one movie
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<MovieCard>>> {
    let limit = params.limit.unwrap_or(state.recommendation_limit);
    if limit == 0 {
        return Err(AppError::InvalidInput(
            "limit must be at least 1".to_string(),
        ));
    }

    if state.snapshot.catalog.lookup(movie_id).is_none() {
        return Err(AppError::movie_not_found(movie_id));
    }

    let cards = recommendations::get_recommendations(&state.snapshot, movie_id, limit)
        .into_iter()
        .map(MovieCard::from)
        .collect();
    Ok(Json(cards))
}
