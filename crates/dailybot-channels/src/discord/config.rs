//! Discord adapter configuration

use secrecy::{ExposeSecret, SecretString};

/// Discord bot configuration
#[derive(Debug)]
pub struct DiscordConfig {
    /// Bot token (from DISCORD_TOKEN env)
    bot_token: SecretString,
}

impl DiscordConfig {
    /// Create with a bot token
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: SecretString::from(bot_token.into()),
        }
    }

    /// Bot token, for handing to the client library only
    pub(crate) fn token(&self) -> &str {
        self.bot_token.expose_secret()
    }
}
