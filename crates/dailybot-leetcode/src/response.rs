//! `questionOfToday` response decoding
//!
//! Every leaf is optional at the serde level so a missing field turns into
//! a `MalformedResponse` naming the path, instead of a generic decode error.

use dailybot_core::{DailyProblem, Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<DailyData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyData {
    active_daily_coding_challenge_question: Option<ActiveChallenge>,
}

#[derive(Debug, Deserialize)]
struct ActiveChallenge {
    date: Option<String>,
    link: Option<String>,
    question: Option<Question>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    difficulty: Option<String>,
    question_frontend_id: Option<String>,
    title: Option<String>,
}

const CHALLENGE_PATH: &str = "data.activeDailyCodingChallengeQuestion";

/// Decode a `questionOfToday` response body into a problem record
pub fn parse_daily_response(body: &str) -> Result<DailyProblem> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let challenge = response
        .data
        .and_then(|d| d.active_daily_coding_challenge_question)
        .ok_or_else(|| {
            if let Some(first) = response.errors.first() {
                Error::MalformedResponse(format!("API returned errors: {}", first.message))
            } else {
                Error::MalformedResponse(format!("missing `{}`", CHALLENGE_PATH))
            }
        })?;

    let question = challenge.question.ok_or_else(|| {
        Error::MalformedResponse(format!("missing `{}.question`", CHALLENGE_PATH))
    })?;

    let date = required(challenge.date, "date")?;
    let link = required(challenge.link, "link")?;
    let difficulty = required(question.difficulty, "question.difficulty")?;
    let id = required(question.question_frontend_id, "question.questionFrontendId")?;
    let title = required(question.title, "question.title")?;

    DailyProblem::new(id, title, link, &difficulty, date)
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(Error::MalformedResponse(format!(
            "empty `{}.{}`",
            CHALLENGE_PATH, field
        ))),
        None => Err(Error::MalformedResponse(format!(
            "missing `{}.{}`",
            CHALLENGE_PATH, field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailybot_core::Difficulty;
    use serde_json::json;

    fn body(difficulty: &str) -> serde_json::Value {
        json!({
            "data": {
                "activeDailyCodingChallengeQuestion": {
                    "date": "2024-01-01",
                    "link": "/problems/two-sum/",
                    "question": {
                        "difficulty": difficulty,
                        "questionFrontendId": "1",
                        "title": "Two Sum"
                    }
                }
            }
        })
    }

    #[test]
    fn test_parse_valid_response() {
        let problem = parse_daily_response(&body("Easy").to_string()).unwrap();

        assert_eq!(problem.id(), "1");
        assert_eq!(problem.title(), "Two Sum");
        assert_eq!(problem.path(), "/problems/two-sum/");
        assert_eq!(problem.difficulty(), Difficulty::Easy);
        assert_eq!(problem.date(), "2024-01-01");
    }

    #[test]
    fn test_parse_difficulty_normalization() {
        let cases = [
            ("Easy", Difficulty::Easy),
            ("Medium", Difficulty::Medium),
            ("Hard", Difficulty::Hard),
            ("Expert", Difficulty::Unknown),
            ("medium", Difficulty::Unknown),
        ];
        for (raw, expected) in cases {
            let problem = parse_daily_response(&body(raw).to_string()).unwrap();
            assert_eq!(problem.difficulty(), expected, "raw difficulty {:?}", raw);
        }
    }

    #[test]
    fn test_parse_missing_leaves() {
        let leaves = [
            ("/data/activeDailyCodingChallengeQuestion", "date"),
            ("/data/activeDailyCodingChallengeQuestion", "link"),
            ("/data/activeDailyCodingChallengeQuestion/question", "difficulty"),
            ("/data/activeDailyCodingChallengeQuestion/question", "questionFrontendId"),
            ("/data/activeDailyCodingChallengeQuestion/question", "title"),
        ];

        for (parent, leaf) in leaves {
            let mut value = body("Easy");
            value
                .pointer_mut(parent)
                .and_then(|v| v.as_object_mut())
                .unwrap()
                .remove(leaf);

            let err = parse_daily_response(&value.to_string()).unwrap_err();
            match err {
                Error::MalformedResponse(msg) => assert!(msg.contains(leaf), "{}", msg),
                other => panic!("expected malformed response, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_empty_leaf() {
        let mut value = body("Easy");
        *value
            .pointer_mut("/data/activeDailyCodingChallengeQuestion/question/title")
            .unwrap() = json!("");

        let err = parse_daily_response(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_missing_question_object() {
        let value = json!({
            "data": {
                "activeDailyCodingChallengeQuestion": {
                    "date": "2024-01-01",
                    "link": "/problems/two-sum/"
                }
            }
        });
        let err = parse_daily_response(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_graphql_errors() {
        let value = json!({
            "data": null,
            "errors": [{ "message": "rate limited" }]
        });
        match parse_daily_response(&value.to_string()).unwrap_err() {
            Error::MalformedResponse(msg) => assert!(msg.contains("rate limited")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_daily_response("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_null_leaf_is_missing() {
        let mut value = body("Easy");
        *value
            .pointer_mut("/data/activeDailyCodingChallengeQuestion/date")
            .unwrap() = serde_json::Value::Null;

        let err = parse_daily_response(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
