use http::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::TokenError;
use crate::utils::constants::{ERROR_FIELD, TOKEN_FIELD};

/// Turn a token-endpoint response into the token string.
///
/// Checks run in a fixed order, so an empty body is reported as empty even
/// though it is not JSON either, and a non-200 status wins over a missing token:
/// 1. blank body
/// 2. body is not a JSON object
/// 3. status is not 200 (message from `erro` if present)
/// 4. no string `token` field
pub fn parse_token_response(status: StatusCode, body: &str) -> Result<String, TokenError> {
    if body.trim().is_empty() {
        return Err(TokenError::EmptyResponse);
    }

    let json_body = parse_json_object(body)?;

    if status != StatusCode::OK {
        let erro = json_body.get(ERROR_FIELD).and_then(field_to_message);
        return Err(TokenError::server(status, erro));
    }

    match json_body.get(TOKEN_FIELD) {
        Some(Value::String(token)) => {
            debug!("token field extracted, {} chars", token.len());
            Ok(token.to_owned())
        }
        Some(other) => {
            warn!("token field is not a string: {}", other);
            Err(TokenError::MissingTokenField)
        }
        None => Err(TokenError::MissingTokenField),
    }
}

fn parse_json_object(body: &str) -> Result<Map<String, Value>, TokenError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            warn!("body is JSON but not an object: {}", other);
            Err(TokenError::InvalidJson { body: body.to_owned() })
        }
        Err(e) => {
            warn!("body is not valid JSON: {}", e);
            Err(TokenError::InvalidJson { body: body.to_owned() })
        }
    }
}

/// `erro` is usually a string; anything else non-null is rendered as JSON
fn field_to_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.to_owned()),
        other => Some(other.to_string()),
    }
}
