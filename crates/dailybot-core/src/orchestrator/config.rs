//! Run configuration

use crate::format::MentionConfig;
use crate::platform::ThreadArchive;

/// Base URL problem paths are joined onto
pub const DEFAULT_PROBLEM_BASE_URL: &str = "https://leetcode.com";

/// Posted when the daily problem could not be fetched
pub const DEFAULT_FETCH_FAILURE_NOTICE: &str =
    "⚠️ Could not fetch today's LeetCode problem. Please check the site directly.";

/// Posted when publishing failed for any other reason
pub const DEFAULT_ERROR_NOTICE: &str = "⚠️ Something went wrong while posting today's problem.";

/// Inputs of a single run, loaded once at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target channel
    pub channel_id: u64,
    /// Base URL for canonical problem links
    pub problem_base_url: String,
    /// Auto-archive period of the discussion thread
    pub thread_archive: ThreadArchive,
    /// Optional role pings
    pub mentions: MentionConfig,
    /// Notice sent when the fetch fails
    pub fetch_failure_notice: String,
    /// Notice sent on any other failure after the channel resolved
    pub error_notice: String,
}

impl RunConfig {
    /// Create a configuration for a channel with default settings
    #[must_use]
    pub fn new(channel_id: u64) -> Self {
        Self {
            channel_id,
            problem_base_url: DEFAULT_PROBLEM_BASE_URL.to_string(),
            thread_archive: ThreadArchive::default(),
            mentions: MentionConfig::default(),
            fetch_failure_notice: DEFAULT_FETCH_FAILURE_NOTICE.to_string(),
            error_notice: DEFAULT_ERROR_NOTICE.to_string(),
        }
    }

    /// Set the problem base URL
    #[must_use]
    pub fn with_problem_base_url(mut self, url: impl Into<String>) -> Self {
        self.problem_base_url = url.into();
        self
    }

    /// Set the thread archive duration
    #[must_use]
    pub fn with_thread_archive(mut self, archive: ThreadArchive) -> Self {
        self.thread_archive = archive;
        self
    }

    /// Set role mentions
    #[must_use]
    pub fn with_mentions(mut self, mentions: MentionConfig) -> Self {
        self.mentions = mentions;
        self
    }

    /// Override the user-facing failure notices
    #[must_use]
    pub fn with_notices(
        mut self,
        fetch_failure: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        self.fetch_failure_notice = fetch_failure.into();
        self.error_notice = error.into();
        self
    }
}
