//! Orchestrator - run-once daily post lifecycle
//!
//! # Module Structure
//!
//! - `config`: `RunConfig`, the immutable inputs of a run
//! - `types`: `RunState`, `RunReport`, `PublishedPost`
//! - `core`: `Orchestrator` and the state machine driving one run

mod config;
mod core;
mod types;


pub use config::{
    RunConfig, DEFAULT_ERROR_NOTICE, DEFAULT_FETCH_FAILURE_NOTICE, DEFAULT_PROBLEM_BASE_URL,
};
pub use core::Orchestrator;
pub use types::{PublishedPost, RunReport, RunState};
