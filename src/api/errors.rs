//! Cart API errors.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by a cart API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartApiError {
    /// The request never produced a usable response.
    #[error("{}", .message.as_deref().unwrap_or("transport error"))]
    Transport {
        /// Message from the HTTP client, when it had one.
        message: Option<String>,
    },

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Api {
        /// HTTP status code
        status: u16,

        /// Structured `error` field from the response body
        error: Option<String>,

        /// Structured `message` field from the response body
        message: Option<String>,
    },

    /// Anything that fits neither of the above.
    #[error("unknown error")]
    Unknown,
}

impl CartApiError {
    /// Build an API error from a status code and raw response body.
    ///
    /// Bodies that are not a JSON object carry no structured fields.
    pub fn from_response(status: u16, body: &str) -> Self {
        let ErrorBody { error, message } = serde_json::from_str(body).unwrap_or_default();

        Self::Api {
            status,
            error,
            message,
        }
    }

    /// Best message available for this error, if any.
    ///
    /// Precedence is the server's `error` field, then its `message` field,
    /// then the transport-level message. Empty strings are skipped.
    pub fn user_message(&self) -> Option<String> {
        let candidates = match self {
            Self::Transport { message } => [None, None, message.clone()],
            Self::Api { error, message, .. } => {
                [error.clone(), message.clone(), Some(self.to_string())]
            }
            Self::Unknown => [None, None, None],
        };

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
    }

    /// Best message available, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.user_message()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<reqwest::Error> for CartApiError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();

        Self::Transport {
            message: (!message.is_empty()).then_some(message),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    message: Option<String>,
}
