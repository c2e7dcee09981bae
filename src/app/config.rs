//! Application configuration types
//!
//! Raw, deserialized settings. Nothing here is trusted until it has been
//! through [`super::validation::validate`].

use dailybot_core::MentionConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub discord: DiscordSection,
    #[serde(default)]
    pub leetcode: LeetCodeSection,
    #[serde(default)]
    pub mentions: MentionConfig,
    #[serde(default)]
    pub notices: NoticesSection,
}

/// Discord settings
#[derive(Debug, Deserialize)]
pub struct DiscordSection {
    /// Bot token
    #[serde(default)]
    pub token: Option<SecretString>,
    /// Target channel id
    #[serde(default)]
    pub channel_id: Option<u64>,
    #[serde(default = "default_thread_archive_minutes")]
    pub thread_archive_minutes: u16,
}

impl Default for DiscordSection {
    fn default() -> Self {
        Self {
            token: None,
            channel_id: None,
            thread_archive_minutes: default_thread_archive_minutes(),
        }
    }
}

fn default_thread_archive_minutes() -> u16 {
    1440
}

/// LeetCode endpoint settings
#[derive(Debug, Deserialize)]
pub struct LeetCodeSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LeetCodeSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            graphql_url: default_graphql_url(),
            user_agent: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    dailybot_leetcode::BASE_URL.to_string()
}

fn default_graphql_url() -> String {
    dailybot_leetcode::GRAPHQL_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    dailybot_leetcode::config::DEFAULT_TIMEOUT_SECS
}

/// User-facing failure notices
#[derive(Debug, Deserialize)]
pub struct NoticesSection {
    #[serde(default = "default_fetch_failed")]
    pub fetch_failed: String,
    #[serde(default = "default_post_failed")]
    pub post_failed: String,
}

impl Default for NoticesSection {
    fn default() -> Self {
        Self {
            fetch_failed: default_fetch_failed(),
            post_failed: default_post_failed(),
        }
    }
}

fn default_fetch_failed() -> String {
    dailybot_core::orchestrator::DEFAULT_FETCH_FAILURE_NOTICE.to_string()
}

fn default_post_failed() -> String {
    dailybot_core::orchestrator::DEFAULT_ERROR_NOTICE.to_string()
}
