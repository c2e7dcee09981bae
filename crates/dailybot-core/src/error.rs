//! Error types for dailybot-core
//!
//! Every component reports failures through this one taxonomy so the
//! orchestrator can decide on recovery in a single place.

use thiserror::Error;

/// Run failure
#[derive(Debug, Error)]
pub enum Error {
    /// Network, DNS or HTTP status failure talking to the problem API
    #[error("transport error: {0}")]
    Transport(String),

    /// Problem API answered successfully but the payload is unusable
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Configured channel does not exist or cannot take posts
    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    /// Chat platform refused an operation for lack of rights
    #[error("platform permission denied: {0}")]
    PlatformPermission(String),

    /// Chat platform network or protocol failure
    #[error("platform transport error: {0}")]
    PlatformTransport(String),

    /// Anything not classified above
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Stable snake_case name of the variant, used as a log field
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport(_) => "transport_error",
            Error::MalformedResponse(_) => "malformed_response",
            Error::ChannelNotFound(_) => "channel_not_found",
            Error::PlatformPermission(_) => "platform_permission",
            Error::PlatformTransport(_) => "platform_transport",
            Error::Unexpected(_) => "unexpected",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_names() {
        assert_eq!(Error::Transport("x".into()).kind(), "transport_error");
        assert_eq!(Error::MalformedResponse("x".into()).kind(), "malformed_response");
        assert_eq!(Error::ChannelNotFound("x".into()).kind(), "channel_not_found");
        assert_eq!(Error::PlatformPermission("x".into()).kind(), "platform_permission");
        assert_eq!(Error::PlatformTransport("x".into()).kind(), "platform_transport");
        assert_eq!(Error::Unexpected("x".into()).kind(), "unexpected");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Transport("query request returned HTTP 500".to_string());
        assert_eq!(
            err.to_string(),
            "transport error: query request returned HTTP 500"
        );
    }
}
