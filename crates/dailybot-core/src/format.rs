//! Presentation formatting
//!
//! Pure functions from a [`DailyProblem`] to what gets published: the
//! channel post and the discussion thread title. Output types are
//! platform-neutral; the channel adapter maps them onto its own builders.

use crate::problem::{DailyProblem, Difficulty};
use serde::Deserialize;

// ============================================================================
// Constants
// ============================================================================

/// Maximum thread title length accepted by the chat platform (in chars)
pub const THREAD_TITLE_LIMIT: usize = 100;

/// Suffix appended to a truncated thread title
const ELLIPSIS: &str = "...";

/// Label of the single embed field
pub const DIFFICULTY_FIELD_NAME: &str = "Difficulty";

/// Footer text of every post
pub const POST_FOOTER: &str = "LeetCode Daily";

/// Easy accent
pub const COLOR_GREEN: u32 = 0x00B8A3;
/// Medium accent
pub const COLOR_AMBER: u32 = 0xFFC01E;
/// Hard accent
pub const COLOR_RED: u32 = 0xEF4743;
/// Unknown accent
pub const COLOR_GREY: u32 = 0x95A5A6;

// ============================================================================
// Difficulty mappings
// ============================================================================

/// Glyph shown next to the difficulty
#[must_use]
pub fn difficulty_glyph(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "🟢",
        Difficulty::Medium => "🟡",
        Difficulty::Hard => "🔴",
        Difficulty::Unknown => "⚪",
    }
}

/// Accent color of the post
#[must_use]
pub fn difficulty_color(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => COLOR_GREEN,
        Difficulty::Medium => COLOR_AMBER,
        Difficulty::Hard => COLOR_RED,
        Difficulty::Unknown => COLOR_GREY,
    }
}

// ============================================================================
// Role mentions
// ============================================================================

/// Optional role pings, per difficulty tier plus a catch-all
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MentionConfig {
    /// Role pinged on every post
    #[serde(default)]
    pub default: Option<u64>,
    /// Role pinged on Easy problems
    #[serde(default)]
    pub easy: Option<u64>,
    /// Role pinged on Medium problems
    #[serde(default)]
    pub medium: Option<u64>,
    /// Role pinged on Hard problems
    #[serde(default)]
    pub hard: Option<u64>,
}

impl MentionConfig {
    /// Tier role first, then the default role if it is a different one
    #[must_use]
    pub fn roles_for(&self, difficulty: Difficulty) -> Vec<u64> {
        let tier = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Unknown => None,
        };

        let mut roles: Vec<u64> = tier.into_iter().collect();
        if let Some(default) = self.default {
            if !roles.contains(&default) {
                roles.push(default);
            }
        }
        roles
    }
}

fn role_token(role_id: u64) -> String {
    format!("<@&{}>", role_id)
}

// ============================================================================
// Post
// ============================================================================

/// Rich channel post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPayload {
    /// `"{id}. {title}"`
    pub title: String,
    /// Canonical problem link
    pub url: String,
    /// Accent color (0xRRGGBB)
    pub color: u32,
    /// Name of the labeled field
    pub field_name: String,
    /// Glyph plus difficulty label
    pub field_value: String,
    /// Line embedding the challenge date
    pub description: String,
    /// Footer text
    pub footer: String,
    /// Roles to ping alongside the post
    pub mention_roles: Vec<u64>,
}

impl PostPayload {
    /// Plain text content sent with the rich payload, if any mentions are set
    #[must_use]
    pub fn content(&self) -> Option<String> {
        if self.mention_roles.is_empty() {
            return None;
        }
        let tokens: Vec<String> = self.mention_roles.iter().copied().map(role_token).collect();
        Some(tokens.join(" "))
    }
}

/// Build the channel post for a problem
#[must_use]
pub fn format_post(
    problem: &DailyProblem,
    base_url: &str,
    mentions: &MentionConfig,
) -> PostPayload {
    let difficulty = problem.difficulty();

    PostPayload {
        title: format!("{}. {}", problem.id(), problem.title()),
        url: problem.url(base_url),
        color: difficulty_color(difficulty),
        field_name: DIFFICULTY_FIELD_NAME.to_string(),
        field_value: format!("{} {}", difficulty_glyph(difficulty), difficulty),
        description: format!("LeetCode daily challenge for {}", problem.date()),
        footer: POST_FOOTER.to_string(),
        mention_roles: mentions.roles_for(difficulty),
    }
}

// ============================================================================
// Thread title
// ============================================================================

/// Build the discussion thread title, truncated to [`THREAD_TITLE_LIMIT`].
///
/// Only the problem title is shortened; the glyph, tag and id are kept, and
/// the result is exactly `THREAD_TITLE_LIMIT` chars when truncation applies.
#[must_use]
pub fn format_thread_title(problem: &DailyProblem) -> String {
    let prefix = format!(
        "{} [Daily] {}. ",
        difficulty_glyph(problem.difficulty()),
        problem.id()
    );
    let assembled = format!("{}{}", prefix, problem.title());

    if assembled.chars().count() <= THREAD_TITLE_LIMIT {
        return assembled;
    }

    let reserved = prefix.chars().count() + ELLIPSIS.len();
    if reserved > THREAD_TITLE_LIMIT {
        // id alone overflows the limit
        let kept: String = assembled
            .chars()
            .take(THREAD_TITLE_LIMIT - ELLIPSIS.len())
            .collect();
        return format!("{}{}", kept, ELLIPSIS);
    }

    let title: String = problem
        .title()
        .chars()
        .take(THREAD_TITLE_LIMIT - reserved)
        .collect();
    format!("{}{}{}", prefix, title, ELLIPSIS)
}
