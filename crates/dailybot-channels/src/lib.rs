//! dailybot Channels - Chat Platform Adapters
//!
//! Implements [`dailybot_core::ChatPlatform`] for Discord via serenity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod discord;

pub use discord::{DiscordAdapter, DiscordConfig};
