use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the Webflow client and configuration layer.
#[derive(Debug, Error)]
pub enum WebflowError {
    /// A required configuration value is absent. Raised before any
    /// network I/O takes place.
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    /// The Webflow API answered with a non-success status.
    #[error("Webflow API error: {status} - {body}")]
    Api { status: StatusCode, body: String },

    /// Transport-level failure while talking to the Webflow API.
    #[error("Webflow request failed: {0}")]
    Http(#[from] reqwest::Error),
}
