//! Client error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages catch and render every error locally; nothing is fatal. The
//! gateway absorbs expired-token 401s itself, so callers only ever see
//! the three shapes below.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::http::HttpError;

/// What went wrong with an API call, from the caller's point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Login or refresh rejected; carries the server-provided detail.
    Authentication(String),
    /// Any other non-2xx response.
    Server { status: u16, detail: String },
    /// The request never produced a usable response.
    Network(String),
    /// The response body did not match the expected schema.
    Decode(String),
}

impl ApiError {
    /// Server-provided detail when there is one, otherwise `fallback`.
    /// Pages use this to surface backend messages verbatim while keeping
    /// their own wording for transport-level failures.
    pub fn message(&self, fallback: &str) -> String {
        match self {
            ApiError::Authentication(detail) | ApiError::Server { detail, .. } => detail.clone(),
            ApiError::Network(_) | ApiError::Decode(_) => fallback.to_owned(),
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Authentication(detail) => write!(f, "{detail}"),
            ApiError::Server { status, detail } => write!(f, "server error {status}: {detail}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Build(msg) | HttpError::Network(msg) => ApiError::Network(msg),
            HttpError::Decode(msg) => ApiError::Decode(msg),
        }
    }
}

/// Extract the `detail` field FastAPI puts in error bodies, falling back
/// to `fallback` when the body is not shaped that way.
pub fn detail_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }
    serde_json::from_str::<Detail>(body)
        .map(|d| d.detail)
        .unwrap_or_else(|_| fallback.to_owned())
}
