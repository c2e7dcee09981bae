//! Orchestrator struct and the run state machine

use super::config::RunConfig;
use super::types::{PublishedPost, RunReport, RunState};
use crate::error::{Error, Result};
use crate::format::{format_post, format_thread_title};
use crate::platform::ChatPlatform;
use crate::problem::ProblemSource;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Drives one fetch → format → publish run
pub struct Orchestrator {
    config: RunConfig,
    source: Arc<dyn ProblemSource>,
    platform: Arc<dyn ChatPlatform>,
}

impl Orchestrator {
    /// Create an orchestrator owning the problem source and platform connection
    #[must_use]
    pub fn new(
        config: RunConfig,
        source: Arc<dyn ProblemSource>,
        platform: Arc<dyn ChatPlatform>,
    ) -> Self {
        Self {
            config,
            source,
            platform,
        }
    }

    /// Execute the run exactly once.
    ///
    /// The platform connection is closed on every path, including a panic
    /// inside one of the steps.
    pub async fn run(self) -> RunReport {
        info!(channel_id = self.config.channel_id, "Starting daily post run");

        let mut states = vec![RunState::Idle];
        let outcome = match AssertUnwindSafe(self.drive(&mut states)).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let err = Error::Unexpected(panic_message(panic.as_ref()));
                if current(&states).channel_resolved() {
                    self.notify_best_effort(&self.config.error_notice).await;
                }
                Err(err)
            }
        };

        let failed_in = match &outcome {
            Ok(post) => {
                info!(
                    problem_id = post.problem.id(),
                    message_id = post.message.message_id,
                    thread_id = post.thread.thread_id,
                    "Daily problem published"
                );
                None
            }
            Err(e) => {
                let at = current(&states);
                error!(state = %at, kind = e.kind(), error = %e, "Daily post run failed");
                enter(&mut states, RunState::Failing);
                Some(at)
            }
        };

        self.release().await;
        enter(&mut states, RunState::Exited);

        RunReport {
            outcome,
            failed_in,
            states,
        }
    }

    async fn drive(&self, states: &mut Vec<RunState>) -> Result<PublishedPost> {
        enter(states, RunState::Connecting);
        self.platform.connect().await?;
        let channel = self.platform.resolve_channel(self.config.channel_id).await?;
        info!(channel_id = channel.id, channel = %channel.name, "Target channel resolved");

        enter(states, RunState::Fetching);
        let problem = match self.source.fetch_daily_problem().await {
            Ok(problem) => problem,
            Err(e) => {
                self.notify_best_effort(&self.config.fetch_failure_notice)
                    .await;
                return Err(e);
            }
        };
        info!(
            problem_id = problem.id(),
            title = problem.title(),
            difficulty = %problem.difficulty(),
            date = problem.date(),
            "Fetched daily problem"
        );

        enter(states, RunState::Posting);
        let payload = format_post(
            &problem,
            &self.config.problem_base_url,
            &self.config.mentions,
        );
        let message = match self.platform.send_post(channel.id, &payload).await {
            Ok(message) => message,
            Err(e) => {
                self.notify_best_effort(&self.config.error_notice).await;
                return Err(e);
            }
        };

        // A failed thread leaves the post in place.
        enter(states, RunState::ThreadCreating);
        let title = format_thread_title(&problem);
        let thread = self
            .platform
            .create_thread(&message, &title, self.config.thread_archive)
            .await?;

        enter(states, RunState::Done);
        Ok(PublishedPost {
            problem,
            message,
            thread,
        })
    }

    /// Send a diagnostic message; its own failure is logged and dropped
    async fn notify_best_effort(&self, text: &str) {
        if let Err(e) = self.platform.send_text(self.config.channel_id, text).await {
            warn!(kind = e.kind(), error = %e, "Failed to send failure notice to channel");
        }
    }

    async fn release(self) {
        if let Err(e) = self.platform.close().await {
            warn!(error = %e, "Failed to close platform connection");
        }
        drop(self.source);
        debug!("Platform connection and HTTP session released");
    }
}

fn enter(states: &mut Vec<RunState>, next: RunState) {
    info!(from = %current(states), to = %next, "Run state transition");
    states.push(next);
}

fn current(states: &[RunState]) -> RunState {
    states.last().copied().unwrap_or(RunState::Idle)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic during run".to_string()
    }
}
