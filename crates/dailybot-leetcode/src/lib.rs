//! dailybot LeetCode - Daily Challenge Client
//!
//! Fetches the active daily coding challenge from the LeetCode GraphQL API
//! and normalizes it into a [`dailybot_core::DailyProblem`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod response;

pub use client::LeetCodeClient;
pub use config::{LeetCodeConfig, BASE_URL, GRAPHQL_URL};
pub use response::parse_daily_response;
