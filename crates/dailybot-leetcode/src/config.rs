//! LeetCode client configuration

use std::time::Duration;

/// LeetCode site URL, sent as `Referer`
pub const BASE_URL: &str = "https://leetcode.com";

/// GraphQL endpoint
pub const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// Default `User-Agent`
pub const DEFAULT_USER_AGENT: &str = concat!("dailybot/", env!("CARGO_PKG_VERSION"));

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// LeetCode client configuration
#[derive(Debug, Clone)]
pub struct LeetCodeConfig {
    /// Site URL
    pub base_url: String,
    /// GraphQL endpoint URL
    pub graphql_url: String,
    /// User agent
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for LeetCodeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            graphql_url: GRAPHQL_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LeetCodeConfig {
    /// Create a configuration with the public LeetCode endpoints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the GraphQL endpoint
    #[must_use]
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = LeetCodeConfig::new()
            .with_graphql_url("http://127.0.0.1:9000/graphql")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.graphql_url, "http://127.0.0.1:9000/graphql");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.user_agent.starts_with("dailybot/"));
    }
}
