//! Discord - serenity adapter

pub mod adapter;
pub mod config;
pub mod errors;
pub mod handler;

pub use adapter::DiscordAdapter;
pub use config::DiscordConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use dailybot_core::{ChatPlatform, Error, MessageHandle, ThreadArchive};

    #[test]
    fn test_discord_config_hides_token() {
        let config = DiscordConfig::new("MTIzNDU2.secret-token-value");
        let debug_str = format!("{:?}", config);

        assert!(!debug_str.contains("secret-token-value"));
        assert_eq!(config.token(), "MTIzNDU2.secret-token-value");
    }

    #[tokio::test]
    async fn test_close_without_connect_is_noop() {
        let adapter = DiscordAdapter::new(DiscordConfig::new("token"));

        assert!(adapter.close().await.is_ok());
        assert!(adapter.close().await.is_ok());
    }

    #[tokio::test]
    async fn test_calls_before_connect_fail() {
        let adapter = DiscordAdapter::new(DiscordConfig::new("token"));

        let err = adapter.send_text(42, "hello").await.unwrap_err();
        assert!(matches!(err, Error::PlatformTransport(_)));

        let handle = MessageHandle {
            channel_id: 42,
            message_id: 1,
        };
        let err = adapter
            .create_thread(&handle, "title", ThreadArchive::OneDay)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PlatformTransport(_)));
    }

    #[tokio::test]
    async fn test_zero_channel_id_is_not_found() {
        let adapter = DiscordAdapter::new(DiscordConfig::new("token"));

        let err = adapter.resolve_channel(0).await.unwrap_err();
        assert!(matches!(err, Error::ChannelNotFound(_)));
    }
}
