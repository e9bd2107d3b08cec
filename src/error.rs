//! Error type and response validation.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by the request helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-success status. The message is the
    /// server-supplied `error` field when the body is structured JSON,
    /// the raw body text otherwise.
    #[error("{0}")]
    Api(String),

    /// Transport-level failure, passed through from the HTTP client
    /// unmodified.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Structured error body shape: `{"error":"..."}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Pass a successful response through; turn anything else into
/// [`Error::Api`] with a message extracted from the body.
pub(crate) async fn check_ok(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    Err(Error::Api(error_message(body)))
}

/// Extract an error message from a response body.
///
/// A body that deserializes as [`ErrorResponse`] contributes its `error`
/// field. Anything else (invalid JSON, or JSON without a string `error`
/// field) is used verbatim.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) => body,
    }
}
