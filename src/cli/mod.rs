//! CLI module for dailybot
//!
//! The binary has no subcommands: one invocation is one daily post.
//! - `--dry-run`: fetch and format only, print the result, skip Discord
//! - `--config`: extra TOML file layered over the defaults
//! - `--json`: JSON log output

use clap::Parser;
use std::path::PathBuf;

/// Post the LeetCode daily problem to a Discord channel
#[derive(Parser, Debug)]
#[command(name = "dailybot")]
#[command(about = "Posts the LeetCode daily problem and opens a discussion thread")]
#[command(version)]
pub struct Cli {
    /// Additional configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch and format the problem without connecting to Discord
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["dailybot"]);
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["dailybot", "--dry-run", "--json", "-c", "bot.toml"]);
        assert!(cli.dry_run);
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("bot.toml")));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
