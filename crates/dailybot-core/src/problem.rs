//! Daily problem record
//!
//! `DailyProblem` is built once per run from the remote API response and is
//! immutable afterwards. It can only be constructed through
//! [`DailyProblem::new`], which rejects empty fields, so a partially
//! populated record never exists.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Problem difficulty as reported by the question bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    Medium,
    /// Hard
    Hard,
    /// Any value the API returned that is not one of the three above
    Unknown,
}

impl Difficulty {
    /// Normalize a raw API value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The question of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyProblem {
    id: String,
    title: String,
    path: String,
    difficulty: Difficulty,
    date: String,
}

impl DailyProblem {
    /// Build a record, normalizing `difficulty`.
    ///
    /// Fails with [`Error::MalformedResponse`] if any field is empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        difficulty: &str,
        date: impl Into<String>,
    ) -> Result<Self> {
        let id = non_empty("questionFrontendId", id.into())?;
        let title = non_empty("title", title.into())?;
        let path = non_empty("link", path.into())?;
        let difficulty = non_empty("difficulty", difficulty.to_string())?;
        let date = non_empty("date", date.into())?;

        Ok(Self {
            id,
            title,
            path,
            difficulty: Difficulty::from_api(&difficulty),
            date,
        })
    }

    /// Frontend-facing problem id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Problem title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Relative path of the problem page
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Normalized difficulty
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Challenge date, exactly as the API reported it
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Canonical link: `base_url` joined with the problem path
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

fn non_empty(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MalformedResponse(format!(
            "field `{}` is empty",
            field
        )));
    }
    Ok(value)
}

/// Source of the daily problem (the remote question bank)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProblemSource: Send + Sync {
    /// Perform a single fetch. No retries.
    async fn fetch_daily_problem(&self) -> Result<DailyProblem>;
}
