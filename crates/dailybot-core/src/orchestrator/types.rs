//! Orchestrator types
//!
//! - `RunState`: lifecycle states of one run
//! - `PublishedPost`: what a successful run leaves behind
//! - `RunReport`: outcome plus the state trail, mapped to an exit code

use crate::error::Result;
use crate::platform::{MessageHandle, ThreadHandle};
use crate::problem::DailyProblem;
use std::fmt;
use std::process::ExitCode;

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started
    Idle,
    /// Opening the platform connection and resolving the channel
    Connecting,
    /// Querying the problem API
    Fetching,
    /// Sending the channel post
    Posting,
    /// Opening the discussion thread
    ThreadCreating,
    /// Post and thread published
    Done,
    /// A step failed
    Failing,
    /// Resources released
    Exited,
}

impl RunState {
    /// Whether the target channel had been resolved when this state was entered
    #[must_use]
    pub fn channel_resolved(&self) -> bool {
        matches!(
            self,
            RunState::Fetching | RunState::Posting | RunState::ThreadCreating
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Posting => write!(f, "Posting"),
            Self::ThreadCreating => write!(f, "ThreadCreating"),
            Self::Done => write!(f, "Done"),
            Self::Failing => write!(f, "Failing"),
            Self::Exited => write!(f, "Exited"),
        }
    }
}

/// A published daily problem
#[derive(Debug, Clone)]
pub struct PublishedPost {
    /// The problem that was posted
    pub problem: DailyProblem,
    /// The channel post
    pub message: MessageHandle,
    /// The discussion thread
    pub thread: ThreadHandle,
}

/// Result of one run
#[derive(Debug)]
pub struct RunReport {
    /// Published post, or the primary failure
    pub outcome: Result<PublishedPost>,
    /// State in which the run failed
    pub failed_in: Option<RunState>,
    /// Every state entered, in order, ending with `Exited`
    pub states: Vec<RunState>,
}

impl RunReport {
    /// Whether the run reached `Done`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Process exit status for this run
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
