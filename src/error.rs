//! Error types for the Mondo API client.
//!
//! Argument and token-state problems are reported before any request is
//! sent. Transport failures and error responses from the service come back
//! through the same [`Error`] type once the request future resolves.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Mondo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Mondo API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The OAuth2 token endpoint rejected a password grant or refresh
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The service rejected the access token (401)
    #[error("Access token rejected by the API")]
    Unauthorized,

    /// An operation needing an access token was called before `authenticate`
    #[error("No token found; authenticate first")]
    NoToken,

    /// Invalid argument passed to an operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid client credentials or base URL at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote service has no endpoint for this operation
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    ///
    /// # Example
    ///
    /// ```
    /// use mondo_rs::Error;
    ///
    /// assert!(Error::NoToken.is_auth_error());
    /// assert!(!Error::InvalidInput("account id".into()).is_auth_error());
    /// ```
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Authentication(_) | Error::Unauthorized | Error::NoToken
        )
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, missing token, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_)
            | Error::Config(_)
            | Error::NoToken
            | Error::Unsupported(_)
            | Error::NotFound(_)
            | Error::Unauthorized => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response.
    ///
    /// Mondo error bodies are flat: `{"code": "...", "message": "..."}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body
            .get("code")
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}
