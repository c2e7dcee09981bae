//! Startup configuration validation
//!
//! Turns raw [`AppConfig`] into the typed inputs of each component. Every
//! check runs before any network activity.

use super::config::AppConfig;
use anyhow::{bail, ensure, Context, Result};
use dailybot_channels::DiscordConfig;
use dailybot_core::{MentionConfig, RunConfig, ThreadArchive};
use dailybot_leetcode::config::DEFAULT_USER_AGENT;
use dailybot_leetcode::LeetCodeConfig;
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// Everything needed to fetch and format a problem
#[derive(Debug)]
pub struct FetchSettings {
    pub leetcode: LeetCodeConfig,
    pub mentions: MentionConfig,
}

/// Everything needed for a full run
#[derive(Debug)]
pub struct RunSettings {
    pub fetch: FetchSettings,
    pub discord: DiscordConfig,
    pub run: RunConfig,
}

/// Validate the parts of the configuration used by the LeetCode fetch
pub fn validate_fetch(config: &AppConfig) -> Result<FetchSettings> {
    let leetcode = &config.leetcode;
    check_http_url("leetcode.base_url", &leetcode.base_url)?;
    check_http_url("leetcode.graphql_url", &leetcode.graphql_url)?;
    ensure!(
        leetcode.timeout_secs > 0,
        "leetcode.timeout_secs must be greater than zero"
    );

    let user_agent = match leetcode.user_agent.as_deref().map(str::trim) {
        Some(ua) if !ua.is_empty() => ua.to_string(),
        _ => DEFAULT_USER_AGENT.to_string(),
    };

    let mentions = &config.mentions;
    for (tier, role) in [
        ("default", mentions.default),
        ("easy", mentions.easy),
        ("medium", mentions.medium),
        ("hard", mentions.hard),
    ] {
        ensure!(role != Some(0), "mentions.{} must be a non-zero role id", tier);
    }

    Ok(FetchSettings {
        leetcode: LeetCodeConfig::new()
            .with_base_url(leetcode.base_url.trim_end_matches('/'))
            .with_graphql_url(leetcode.graphql_url.clone())
            .with_user_agent(user_agent)
            .with_timeout(Duration::from_secs(leetcode.timeout_secs)),
        mentions: mentions.clone(),
    })
}

/// Validate the whole configuration for a run against Discord
pub fn validate(config: &AppConfig) -> Result<RunSettings> {
    let fetch = validate_fetch(config)?;

    let token = config
        .discord
        .token
        .as_ref()
        .map(|t| t.expose_secret().trim())
        .filter(|t| !t.is_empty())
        .context("Discord bot token is not set (DISCORD_TOKEN)")?;

    let channel_id = config
        .discord
        .channel_id
        .context("Discord channel id is not set (DISCORD_CHANNEL_ID)")?;
    ensure!(channel_id != 0, "Discord channel id must be non-zero");

    let minutes = config.discord.thread_archive_minutes;
    let Some(archive) = ThreadArchive::from_minutes(minutes) else {
        bail!(
            "discord.thread_archive_minutes must be one of 60, 1440, 4320, 10080 (got {})",
            minutes
        );
    };

    let notices = &config.notices;
    ensure!(
        !notices.fetch_failed.trim().is_empty(),
        "notices.fetch_failed must not be empty"
    );
    ensure!(
        !notices.post_failed.trim().is_empty(),
        "notices.post_failed must not be empty"
    );

    let run = RunConfig::new(channel_id)
        .with_problem_base_url(fetch.leetcode.base_url.clone())
        .with_thread_archive(archive)
        .with_mentions(fetch.mentions.clone())
        .with_notices(notices.fetch_failed.clone(), notices.post_failed.clone());

    Ok(RunSettings {
        discord: DiscordConfig::new(token),
        run,
        fetch,
    })
}

fn check_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL", name))?;
    ensure!(
        matches!(url.scheme(), "http" | "https"),
        "{} must use http or https (got {})",
        name,
        url.scheme()
    );
    Ok(())
}
