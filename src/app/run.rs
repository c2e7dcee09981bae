//! Run entry points
//!
//! A normal run hands everything to the orchestrator. A dry run fetches and
//! formats the problem and prints it without touching Discord.

use super::loader::load_config;
use super::validation::{validate, validate_fetch};
use crate::cli::Cli;
use anyhow::{Context, Result};
use dailybot_channels::DiscordAdapter;
use dailybot_core::{
    format_post, format_thread_title, DailyProblem, Orchestrator, PostPayload, ProblemSource,
};
use dailybot_leetcode::LeetCodeClient;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

/// Run the bot once according to the command line
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    if cli.dry_run {
        return dry_run(&config, cli.json).await;
    }

    let settings = validate(&config)?;
    let source =
        LeetCodeClient::new(settings.fetch.leetcode).context("Failed to create LeetCode client")?;
    let platform = DiscordAdapter::new(settings.discord);

    let report = Orchestrator::new(settings.run, Arc::new(source), Arc::new(platform))
        .run()
        .await;

    info!(
        success = report.is_success(),
        states = report.states.len(),
        "Run finished"
    );
    Ok(report.exit_code())
}

async fn dry_run(config: &super::config::AppConfig, json: bool) -> Result<ExitCode> {
    let settings = validate_fetch(config)?;
    let base_url = settings.leetcode.base_url.clone();
    let client =
        LeetCodeClient::new(settings.leetcode).context("Failed to create LeetCode client")?;

    info!("Dry run: fetching today's problem without connecting to Discord");
    let problem = match client.fetch_daily_problem().await {
        Ok(problem) => problem,
        Err(e) => {
            error!(kind = e.kind(), error = %e, "Failed to fetch the daily problem");
            return Ok(ExitCode::FAILURE);
        }
    };

    let post = format_post(&problem, &base_url, &settings.mentions);
    let thread_title = format_thread_title(&problem);

    if json {
        let rendered = render_json(&problem, &post, &thread_title);
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print!("{}", render_text(&post, &thread_title));
    }

    Ok(ExitCode::SUCCESS)
}

fn render_json(problem: &DailyProblem, post: &PostPayload, thread_title: &str) -> serde_json::Value {
    serde_json::json!({
        "problem": problem,
        "post": {
            "title": post.title,
            "url": post.url,
            "color": format!("#{:06X}", post.color),
            "field": { "name": post.field_name, "value": post.field_value },
            "description": post.description,
            "footer": post.footer,
            "content": post.content(),
        },
        "thread_title": thread_title,
    })
}

fn render_text(post: &PostPayload, thread_title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Post:   {}\n", post.title));
    out.push_str(&format!("URL:    {}\n", post.url));
    out.push_str(&format!("Color:  #{:06X}\n", post.color));
    out.push_str(&format!("{}: {}\n", post.field_name, post.field_value));
    out.push_str(&format!("{}\n", post.description));
    if let Some(content) = post.content() {
        out.push_str(&format!("Ping:   {}\n", content));
    }
    out.push_str(&format!("Thread: {}\n", thread_title));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailybot_core::MentionConfig;

    fn sample() -> (DailyProblem, PostPayload, String) {
        let problem = DailyProblem::new(
            "2092",
            "Find All People With Secret",
            "/problems/find-all-people-with-secret/",
            "Hard",
            "2024-02-24",
        )
        .unwrap();
        let mentions = MentionConfig {
            hard: Some(77),
            ..MentionConfig::default()
        };
        let post = format_post(&problem, "https://leetcode.com", &mentions);
        let title = format_thread_title(&problem);
        (problem, post, title)
    }

    #[test]
    fn test_render_text() {
        let (_, post, title) = sample();
        let text = render_text(&post, &title);

        assert!(text.contains("Post:   2092. Find All People With Secret"));
        assert!(text.contains("https://leetcode.com/problems/find-all-people-with-secret/"));
        assert!(text.contains("#EF4743"));
        assert!(text.contains("Ping:   <@&77>"));
        assert!(text.contains("Thread: 🔴 [Daily] 2092. Find All People With Secret"));
    }

    #[test]
    fn test_render_json() {
        let (problem, post, title) = sample();
        let value = render_json(&problem, &post, &title);

        assert_eq!(value["post"]["color"], "#EF4743");
        assert_eq!(value["post"]["content"], "<@&77>");
        assert_eq!(value["thread_title"], title);
        assert_eq!(value["problem"]["title"], "Find All People With Secret");
    }
}
