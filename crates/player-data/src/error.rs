//! Error types for fetching and decoding the player document.

use thiserror::Error;

/// Errors that can occur while fetching the player document.
///
/// Callers outside this crate normally see these only as the message inside
/// [`crate::FetchResult::Failure`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout, or body read failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed document with nothing in it.
    #[error("parse returned empty result")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, FetchError>;
