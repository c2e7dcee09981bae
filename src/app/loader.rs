//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use super::config::AppConfig;
use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Plain environment variables accepted next to the `DAILYBOT_` ones
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("DISCORD_TOKEN", "discord.token"),
    ("DISCORD_CHANNEL_ID", "discord.channel_id"),
    ("DISCORD_DEFAULT_PING", "mentions.default"),
];

/// Load configuration from files and environment
pub fn load_config(extra_file: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/local").required(false));

    if let Some(path) = extra_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    // 3. Environment variables (highest priority)
    // prefix_separator("_") lets DAILYBOT_DISCORD__CHANNEL_ID map to discord.channel_id.
    builder = builder.add_source(
        Environment::with_prefix("DAILYBOT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder = apply_legacy_env(builder, |key| std::env::var(key).ok())?;

    builder
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Load configuration from a TOML string layered over the embedded defaults
#[cfg(test)]
pub(crate) fn load_config_from_str(toml: &str) -> Result<AppConfig> {
    Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        let value = lookup(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        builder = builder
            .set_override_option(key, value)
            .with_context(|| format!("Invalid value for {}", var))?;
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_embedded_defaults() {
        let config = load_config_from_str("").unwrap();

        assert!(config.discord.token.is_none());
        assert!(config.discord.channel_id.is_none());
        assert_eq!(config.discord.thread_archive_minutes, 1440);
        assert_eq!(config.leetcode.base_url, "https://leetcode.com");
        assert_eq!(config.leetcode.graphql_url, "https://leetcode.com/graphql");
        assert_eq!(config.leetcode.timeout_secs, 30);
        assert_eq!(config.mentions, dailybot_core::MentionConfig::default());
        assert!(config.notices.fetch_failed.starts_with("⚠️"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [discord]
            channel_id = 123456789012345678
            thread_archive_minutes = 60

            [mentions]
            hard = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.discord.channel_id, Some(123456789012345678));
        assert_eq!(config.discord.thread_archive_minutes, 60);
        assert_eq!(config.mentions.hard, Some(42));
        assert_eq!(config.leetcode.timeout_secs, 30);
    }

    #[test]
    fn test_legacy_env_overrides() {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(
                "[discord]\nchannel_id = 1\n",
                FileFormat::Toml,
            ));
        let builder = apply_legacy_env(builder, |key| match key {
            "DISCORD_TOKEN" => Some("abc.def".to_string()),
            "DISCORD_CHANNEL_ID" => Some(" 987654321 ".to_string()),
            "DISCORD_DEFAULT_PING" => Some("555".to_string()),
            _ => None,
        })
        .unwrap();
        let config: AppConfig = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(
            config.discord.token.as_ref().map(|t| t.expose_secret()),
            Some("abc.def")
        );
        assert_eq!(config.discord.channel_id, Some(987654321));
        assert_eq!(config.mentions.default, Some(555));
    }

    #[test]
    fn test_unset_legacy_env_keeps_file_values() {
        let builder = Config::builder().add_source(File::from_str(
            "[discord]\nchannel_id = 7\n",
            FileFormat::Toml,
        ));
        let builder = apply_legacy_env(builder, |key| match key {
            "DISCORD_CHANNEL_ID" => Some("   ".to_string()),
            _ => None,
        })
        .unwrap();
        let config: AppConfig = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.discord.channel_id, Some(7));
        assert!(config.discord.token.is_none());
    }

    #[test]
    fn test_malformed_channel_id_is_rejected() {
        assert!(load_config_from_str("[discord]\nchannel_id = \"general\"\n").is_err());
    }
}
