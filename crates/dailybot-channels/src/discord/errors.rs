//! serenity error translation
//!
//! Maps client library failures onto the run's failure taxonomy.

use dailybot_core::Error;
use serenity::gateway::GatewayError;
use serenity::http::HttpError;

/// Classify an error from a send/create call
pub fn classify_serenity_error(err: serenity::Error) -> Error {
    match &err {
        serenity::Error::Http(http_err) => {
            let http_err: &HttpError = http_err;
            if let HttpError::UnsuccessfulRequest(response) = http_err {
                let status = response.status_code.as_u16();
                // 50001 Missing Access, 50013 Missing Permissions
                if status == 401
                    || status == 403
                    || matches!(response.error.code, 50001 | 50013)
                {
                    return Error::PlatformPermission(response.error.message.clone());
                }
                // 10003 Unknown Channel
                if status == 404 && matches!(response.error.code, 10003) {
                    return Error::ChannelNotFound(response.error.message.clone());
                }
            }
            Error::PlatformTransport(err.to_string())
        }
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => {
            Error::PlatformPermission("Discord rejected the bot token".to_string())
        }
        serenity::Error::Gateway(
            GatewayError::InvalidGatewayIntents | GatewayError::DisallowedGatewayIntents,
        ) => Error::PlatformPermission(format!("gateway intents refused: {}", err)),
        _ => Error::PlatformTransport(err.to_string()),
    }
}

/// Classify an error from a channel lookup.
///
/// A channel the bot cannot see is reported as not found.
pub fn classify_lookup_error(err: serenity::Error, channel_id: u64) -> Error {
    match classify_serenity_error(err) {
        Error::PlatformPermission(msg) | Error::ChannelNotFound(msg) => {
            Error::ChannelNotFound(format!("channel {}: {}", channel_id, msg))
        }
        other => other,
    }
}
