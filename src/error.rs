//! Error Types
//!
//! Errors raised by the REST client, the recipe draft and the session.

use serde::Deserialize;
use thiserror::Error;

use crate::draft::{DraftList, EntryField, EntryKey};

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("{}", messages.join("; "))]
    Backend { status: u16, messages: Vec<String> },
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Encode(String),
}

/// `{ "error": { "message": "..." } }` or `{ "error": { "message": ["...", ...] } }`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: ErrorMessage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiError {
    /// Build from a failed response body, normalizing the message to a list
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let messages = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.message {
                ErrorMessage::One(message) => vec![message],
                ErrorMessage::Many(messages) => messages,
            },
            Err(_) => Vec::new(),
        };

        let messages = if messages.is_empty() {
            vec![format!("HTTP error: {}", status)]
        } else {
            messages
        };

        ApiError::Backend { status, messages }
    }

    /// Messages suitable for display, never empty
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Backend { messages, .. } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Rejected draft mutation or normalization
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("no {list:?} entry with key {key:?}")]
    UnknownEntry { list: DraftList, key: EntryKey },
    #[error("{field:?} is not a field of {list:?}")]
    FieldNotInList { list: DraftList, field: EntryField },
    #[error("\"{0}\" is not a subsection of this recipe")]
    UnknownSubsection(String),
    #[error("no subsection with key {0}")]
    UnknownSubsectionKey(u32),
    #[error("Recipe name is required.")]
    MissingName,
    #[error("ingredient {line}: \"{text}\" is not a valid amount")]
    InvalidAmount { line: usize, text: String },
}

/// Failure to turn a stored token into a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("token is not a three-part JWT")]
    MalformedToken,
    #[error("token payload is not valid base64: {0}")]
    PayloadEncoding(String),
    #[error("token payload is missing claims: {0}")]
    MissingClaims(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failure of a recipe submission before anything was persisted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn messages(&self) -> Vec<String> {
        match self {
            SubmitError::Draft(e) => vec![e.to_string()],
            SubmitError::Api(e) => e.messages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_is_wrapped_in_list() {
        let err = ApiError::from_error_body(400, r#"{"error":{"message":"name is required","status":400}}"#);
        assert_eq!(err.messages(), vec!["name is required".to_string()]);
    }

    #[test]
    fn test_message_array_is_kept() {
        let err = ApiError::from_error_body(
            400,
            r#"{"error":{"message":["instance.username is too short","instance.password is required"]}}"#,
        );
        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                messages: vec![
                    "instance.username is too short".to_string(),
                    "instance.password is required".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = ApiError::from_error_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.messages(), vec!["HTTP error: 502".to_string()]);

        let empty = ApiError::from_error_body(500, r#"{"error":{"message":[]}}"#);
        assert_eq!(empty.messages(), vec!["HTTP error: 500".to_string()]);
    }

    #[test]
    fn test_non_backend_errors_have_one_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.messages(), vec!["request failed: connection refused".to_string()]);
    }
}
