use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Movie table snapshot (JSON array of movie records)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Similarity table snapshot (JSON array of similarity entries)
    #[serde(default = "default_similar_movies_path")]
    pub similar_movies_path: String,

    /// Minimum weighted-ratio score a title needs to appear in search results
    #[serde(default = "default_search_threshold")]
    pub search_threshold: f64,

    /// How many top-ranked titles are considered before thresholding
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Default number of recommendations on the detail view
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Fallback tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_path() -> String {
    "movies.json".to_string()
}

fn default_similar_movies_path() -> String {
    "similar_movies.json".to_string()
}

fn default_search_threshold() -> f64 {
    70.0
}

fn default_search_limit() -> usize {
    30
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the search and recommendation services cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=100.0).contains(&self.search_threshold) {
            anyhow::bail!(
                "SEARCH_THRESHOLD must be between 0 and 100, got {}",
                self.search_threshold
            );
        }
        if self.search_limit == 0 {
            anyhow::bail!("SEARCH_LIMIT must be at least 1");
        }
        if self.recommendation_limit == 0 {
            anyhow::bail!("RECOMMENDATION_LIMIT must be at least 1");
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        envy::from_iter::<_, Config>(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.movies_path, "movies.json");
        assert_eq!(config.similar_movies_path, "similar_movies.json");
        assert_eq!(config.search_threshold, 70.0);
        assert_eq!(config.search_limit, 30);
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("MOVIES_PATH", "/data/movies.json"),
            ("SEARCH_THRESHOLD", "85"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.movies_path, "/data/movies.json");
        assert_eq!(config.search_threshold, 85.0);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = from_pairs(&[("SEARCH_THRESHOLD", "120")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        assert!(from_pairs(&[("SEARCH_LIMIT", "0")]).validate().is_err());
        assert!(from_pairs(&[("RECOMMENDATION_LIMIT", "0")])
            .validate()
            .is_err());
    }
}
