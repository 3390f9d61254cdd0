//! Service location and request limits, read from the environment.

use std::time::Duration;

/// Base URL of the data explorer API, injected at deploy time.
pub const API_URL_ENV: &str = "DATA_EXPLORER_API_URL";
pub const API_TIMEOUT_SECS_ENV: &str = "DATA_EXPLORER_API_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8390";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or(DEFAULT_API_URL.to_string());
        let timeout_secs = std::env::var(API_TIMEOUT_SECS_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);
        Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://api:8390/");
        assert_eq!(config.endpoint("/facets"), "http://api:8390/facets");
        assert_eq!(config.endpoint("exportUrl"), "http://api:8390/exportUrl");
        assert_eq!(ApiConfig::new("/api").endpoint("dataset"), "/api/dataset");
    }

    #[test]
    fn default_timeout_is_applied() {
        let config = ApiConfig::new("http://api");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
        let config = config.with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
