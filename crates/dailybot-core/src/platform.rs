//! Chat platform boundary
//!
//! The orchestrator publishes through [`ChatPlatform`]; adapters translate
//! these calls onto a concrete client library and map its failures into
//! [`crate::Error`].

use crate::error::Result;
use crate::format::PostPayload;

/// A channel the bot can post into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Channel ID
    pub id: u64,
    /// Channel name, for logs
    pub name: String,
}

/// Handle to a sent message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    /// Channel the message lives in
    pub channel_id: u64,
    /// Message ID
    pub message_id: u64,
}

/// Handle to a created thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadHandle {
    /// Thread (channel) ID
    pub thread_id: u64,
    /// Thread name as accepted by the platform
    pub name: String,
}

/// Inactivity period after which a thread is archived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadArchive {
    /// 60 minutes
    OneHour,
    /// 1440 minutes
    #[default]
    OneDay,
    /// 4320 minutes
    ThreeDays,
    /// 10080 minutes
    OneWeek,
}

impl ThreadArchive {
    /// Parse one of the platform's accepted durations
    #[must_use]
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        match minutes {
            60 => Some(Self::OneHour),
            1440 => Some(Self::OneDay),
            4320 => Some(Self::ThreeDays),
            10080 => Some(Self::OneWeek),
            _ => None,
        }
    }

    /// Duration in minutes
    #[must_use]
    pub fn minutes(&self) -> u16 {
        match self {
            Self::OneHour => 60,
            Self::OneDay => 1440,
            Self::ThreeDays => 4320,
            Self::OneWeek => 10080,
        }
    }
}

/// Operations the run needs from the chat platform
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Open the connection and wait until the platform reports ready
    async fn connect(&self) -> Result<()>;

    /// Resolve a channel ID to a text channel that accepts posts
    async fn resolve_channel(&self, channel_id: u64) -> Result<ChannelInfo>;

    /// Send the rich problem post
    async fn send_post(&self, channel_id: u64, payload: &PostPayload) -> Result<MessageHandle>;

    /// Open a thread on a sent message
    async fn create_thread(
        &self,
        message: &MessageHandle,
        title: &str,
        archive: ThreadArchive,
    ) -> Result<ThreadHandle>;

    /// Send a plain text message
    async fn send_text(&self, channel_id: u64, text: &str) -> Result<()>;

    /// Disconnect and release the connection. Safe to call more than once.
    async fn close(&self) -> Result<()>;
}
