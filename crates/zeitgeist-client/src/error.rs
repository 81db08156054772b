//! Error types for the data-service client.

use thiserror::Error;

/// Errors that can occur when talking to the Zeitgeist data service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing service URL.
    #[error("ZEITGEIST_API_URL environment variable not set")]
    MissingBaseUrl,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The service returned an error response.
    #[error("Data service error: {0}")]
    Api(String),

    /// A requested metadata blob does not exist.
    #[error("No metadata stored under key: {0}")]
    MetadataNotFound(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}
