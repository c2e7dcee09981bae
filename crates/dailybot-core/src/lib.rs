//! dailybot Core - Daily Problem Pipeline
//!
//! This crate holds everything about a daily post that does not depend on a
//! concrete remote service:
//! - Problem: the normalized `DailyProblem` record and its `Difficulty`
//! - Format: pure mapping from a problem to a channel post and thread title
//! - Platform: the `ChatPlatform` boundary the orchestrator publishes through
//! - Orchestrator: the run-once lifecycle (connect, fetch, post, thread, cleanup)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod orchestrator;
pub mod platform;
pub mod problem;

pub use error::{Error, Result};
pub use format::{
    format_post, format_thread_title, MentionConfig, PostPayload, THREAD_TITLE_LIMIT,
};
pub use orchestrator::{Orchestrator, PublishedPost, RunConfig, RunReport, RunState};
pub use platform::{ChannelInfo, ChatPlatform, MessageHandle, ThreadArchive, ThreadHandle};
pub use problem::{DailyProblem, Difficulty, ProblemSource};
