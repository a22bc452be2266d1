use common::CommonError;
use thiserror::Error;

/// Error types for the client crate
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required selection is missing; raised before any network activity
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value outside one of the enumerated selector sets
    #[error(transparent)]
    Selection(#[from] CommonError),

    /// Transport level failure (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The site answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server {
        status: u16,
        exc_type: Option<String>,
        message: String,
    },

    /// The site answered with a body that is not a Frappe response
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local dataset file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload tasks need a running tokio runtime
    #[error("No async runtime: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),

    /// Client settings that cannot be turned into a request
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
