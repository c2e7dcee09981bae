//! LeetCode GraphQL client
//!
//! One run is two requests on a single HTTP session:
//! 1. `GET` the GraphQL endpoint to obtain the `csrftoken` cookie
//! 2. `POST` the `questionOfToday` query echoing that token
//!
//! Neither request is retried.

use crate::config::LeetCodeConfig;
use crate::response::parse_daily_response;
use dailybot_core::{DailyProblem, Error, ProblemSource, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE, COOKIE, REFERER, SET_COOKIE};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Name of the anti-forgery cookie
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header echoing the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

const OPERATION_NAME: &str = "questionOfToday";

const QUESTION_OF_TODAY_QUERY: &str = "query questionOfToday {
  activeDailyCodingChallengeQuestion {
    date
    link
    question {
      difficulty
      questionFrontendId
      title
    }
  }
}";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest {
    operation_name: &'static str,
    query: &'static str,
    variables: serde_json::Value,
}

/// LeetCode daily challenge client
pub struct LeetCodeClient {
    config: LeetCodeConfig,
    client: Client,
}

impl LeetCodeClient {
    /// Create a client and its HTTP session
    pub fn new(config: LeetCodeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Priming request; the body is discarded
    async fn fetch_csrf_token(&self) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.config.graphql_url)
            .header(REFERER, &self.config.base_url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("priming request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "priming request returned HTTP {}",
                status.as_u16()
            )));
        }

        Ok(csrf_token_from_headers(response.headers()))
    }

    async fn query_daily(&self, csrf_token: Option<&str>) -> Result<String> {
        let body = GraphQlRequest {
            operation_name: OPERATION_NAME,
            query: QUESTION_OF_TODAY_QUERY,
            variables: serde_json::json!({}),
        };

        let mut request = self
            .client
            .post(&self.config.graphql_url)
            .header(REFERER, &self.config.base_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body);

        if let Some(token) = csrf_token {
            request = request
                .header(CSRF_HEADER, token)
                .header(COOKIE, format!("{}={}", CSRF_COOKIE, token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("query request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "query request returned HTTP {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("failed to read query response: {}", e)))
    }
}

#[async_trait::async_trait]
impl ProblemSource for LeetCodeClient {
    #[instrument(skip(self), fields(endpoint = %self.config.graphql_url))]
    async fn fetch_daily_problem(&self) -> Result<DailyProblem> {
        let token = self.fetch_csrf_token().await?;
        if token.is_none() {
            warn!("No {} cookie in priming response, querying without it", CSRF_COOKIE);
        }

        debug!("Sending questionOfToday query");
        let body = self.query_daily(token.as_deref()).await?;

        parse_daily_response(&body)
    }
}

/// Extract the `csrftoken` value from `Set-Cookie` headers
pub fn csrf_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?;
            let (name, value) = pair.split_once('=')?;
            let value = value.trim();
            (name.trim() == CSRF_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}
