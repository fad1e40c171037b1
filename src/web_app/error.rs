// web_app/error.rs - Errors surfaced by the book API and the forms
//
// Non-2xx responses are classified once, here, into `ApiError` variants that
// the pages switch on. A JSON body carrying a `code` is matched by value;
// plain-text bodies fall back to the duplicate-key markers the backend emits.
//
// `ApiError` is serializable so it survives the trip through a server
// function: the server packs it into `ServerFnError` with
// `into_server_error`, the client unpacks it with `ApiError::from`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Markers the backend puts in the body when a title already exists
pub const DUPLICATE_MARKERS: [&str; 2] = ["unique_book_title_per_user", "Duplicate entry"];

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Client-side validation failed; no request was made
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("invalid username or password")]
    InvalidCredentials,

    /// The token was rejected; the session must be dropped
    #[error("session expired or not authorized")]
    Unauthorized,

    #[error("book not found")]
    NotFound,

    #[error("a book with this title already exists")]
    DuplicateTitle,

    /// The server rejected the input with field messages
    #[error("request rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Structured error body: `{"code": "...", "message": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl ApiError {
    /// Classify a non-success response by status and body
    pub fn from_response(status: u16, body: &str) -> ApiError {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(err) = Self::from_code(&parsed) {
                return err;
            }
        }

        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ if DUPLICATE_MARKERS.iter().any(|m| body.contains(m)) => ApiError::DuplicateTitle,
            _ => ApiError::Status {
                status,
                message: body.trim().to_string(),
            },
        }
    }

    fn from_code(body: &ErrorBody) -> Option<ApiError> {
        let err = match body.code.as_str() {
            "DUPLICATE_TITLE" => ApiError::DuplicateTitle,
            "NOT_FOUND" => ApiError::NotFound,
            "UNAUTHORIZED" | "TOKEN_EXPIRED" => ApiError::Unauthorized,
            "BAD_CREDENTIALS" => ApiError::InvalidCredentials,
            "VALIDATION_FAILED" => {
                let mut messages = body.errors.clone();
                if messages.is_empty() {
                    messages.extend(body.message.clone());
                }
                ApiError::Rejected(messages)
            }
            _ => return None,
        };
        Some(err)
    }

    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(messages) | ApiError::Rejected(messages) => messages.join("\n"),
            ApiError::InvalidCredentials => "Login failed. Please check your credentials.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::NotFound => "Book not found".to_string(),
            ApiError::DuplicateTitle => {
                "This book title already exists in your library! Please use a different title.".to_string()
            }
            ApiError::Status { message, .. } if message.is_empty() => "Error: Request failed".to_string(),
            ApiError::Status { message, .. } => format!("Error: {}", message),
            ApiError::Transport(_) => "Network error - please check if server is running".to_string(),
            ApiError::Config(message) => format!("Error: {}", message),
        }
    }

    /// Messages for a list display (one per line of `user_message`)
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(messages) | ApiError::Rejected(messages) => messages.clone(),
            other => vec![other.user_message()],
        }
    }
}

/// Flatten the many shapes of the registration error body into messages
///
/// Accepts plain text, a JSON string, a JSON array of strings, an object of
/// `field -> message` and `{"errors": [...]}`.
pub fn parse_error_messages(body: &str) -> Vec<String> {
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    let value = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(_) => return vec![body.to_string()],
    };

    let mut messages = Vec::new();
    collect_messages(&value, &mut messages);
    if messages.is_empty() {
        messages.push(body.to_string());
    }
    messages
}

fn collect_messages(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(s) => out.push(s.clone()),
        serde_json::Value::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        serde_json::Value::Object(map) => {
            if let Some(errors) = map.get("errors") {
                collect_messages(errors, out);
            } else if let Some(message) = map.get("message") {
                collect_messages(message, out);
            } else {
                for value in map.values() {
                    collect_messages(value, out);
                }
            }
        }
        _ => {}
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod server_fn_bridge {
    use super::ApiError;
    use leptos::prelude::ServerFnError;

    impl ApiError {
        /// Encode for the server function response; `?` alone would keep only the text
        pub fn into_server_error(self) -> ServerFnError {
            match serde_json::to_string(&self) {
                Ok(encoded) => ServerFnError::ServerError(encoded),
                Err(_) => ServerFnError::ServerError(self.to_string()),
            }
        }
    }

    impl From<ServerFnError> for ApiError {
        fn from(err: ServerFnError) -> Self {
            match err {
                ServerFnError::ServerError(message) => {
                    serde_json::from_str(&message).unwrap_or(ApiError::Transport(message))
                }
                other => ApiError::Transport(other.to_string()),
            }
        }
    }
}
