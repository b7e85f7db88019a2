//! Error types for the provider client

use serde_json::Value;
use thiserror::Error;

/// Maximum raw body echoed back when the provider sends no structured message
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Keys the auth and REST surfaces use for their human-readable message, in lookup order
const MESSAGE_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status. Display is the provider's
    /// own message so it can be surfaced to the client unchanged.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport failure
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Success status but the body could not be decoded
    #[error("unexpected provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Build an [`ProviderError::Api`] from a failed response body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_message(&value))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("status {}", status)
                } else {
                    truncate_error_body(trimmed)
                }
            });

        ProviderError::Api { status, message }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

fn extract_message(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    MESSAGE_KEYS.iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    })
}

/// Safely truncates on a UTF-8 boundary
fn truncate_error_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_SIZE {
        return body.to_string();
    }

    let truncate_at = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
        .last()
        .unwrap_or(0);

    format!("{}... (truncated)", &body[..truncate_at])
}
