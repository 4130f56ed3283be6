use std::sync::Arc;

use crate::{config::Config, services::SearchOptions, store::Snapshot};

/// Shared application state
///
/// The snapshot is immutable after start-up, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
    pub search: SearchOptions,
    pub recommendation_limit: usize,
}

impl AppState {
    /// Creates state over a loaded snapshot with default tuning
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            search: SearchOptions::default(),
            recommendation_limit: 5,
        }
    }

    /// Creates state using the search and recommendation settings from `config`
    pub fn from_config(config: &Config, snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            search: SearchOptions {
                threshold: config.search_threshold,
                limit: config.search_limit,
            },
            recommendation_limit: config.recommendation_limit,
        }
    }
}
