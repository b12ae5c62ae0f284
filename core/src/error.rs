//! Error types for the posts API client.
//!
//! # Design
//! Every failure a fetch can hit lands in one enum so the degrade-to-empty
//! policy in `client::or_empty` can absorb them uniformly. Transport errors
//! are produced by hosts, not by the core, but live here so hosts can feed
//! them through the same path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! Status: {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not the JSON shape the caller asked for.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn transport(msg: impl Into<String>) -> Self {
        ApiError::Transport(msg.into())
    }

    /// Status code carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
