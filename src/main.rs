//! dailybot - LeetCode daily problem poster
//!
//! CLI entry point. Posts today's problem to a Discord channel, opens a
//! discussion thread on it and exits.

#![forbid(unsafe_code)]

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod cli;

const DEFAULT_LOG_FILTER: &str = "dailybot=info,dailybot_core=info,dailybot_leetcode=info,\
                                  dailybot_channels=info,serenity=warn";

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    init_tracing(cli.json);

    info!("Starting dailybot v{}", env!("CARGO_PKG_VERSION"));

    match app::run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
