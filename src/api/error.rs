use thiserror::Error;

/// Maximum length for error response bodies embedded in messages.
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ClientError {
    /// An authenticated operation was invoked without a saved token.
    #[error("not logged in - run `porthole login` first")]
    NotAuthenticated,

    /// The service answered with an HTTP error status.
    #[error("[{status}] {detail}")]
    Api { status: u16, detail: String },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body was not the documented shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Unusable interactive input.
    #[error("invalid input: {0}")]
    Input(String),
}

impl ClientError {
    /// Truncate a response body to avoid carrying excessive data in messages.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", truncated, body.len())
        }
    }

    /// Classify an HTTP error response.
    ///
    /// The service reports failures as JSON objects with a `detail` (or,
    /// from older deployments, `error`) field; anything else is passed
    /// through as raw text.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .or_else(|| value.get("error").and_then(|d| d.as_str()))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| Self::truncate_body(body));
        ClientError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}
