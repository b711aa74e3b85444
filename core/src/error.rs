//! Error types for the account API client.
//!
//! # Design
//! "The server rejected the request" and "the response was unreadable" are
//! separate variants so callers can tell them apart. `NotFound` gets its own
//! variant because callers frequently branch on "the account does not exist"
//! rather than inspecting a status code. `Api` carries the server's
//! `error_message` when the error envelope parses, and the raw body when it
//! does not.

use std::fmt;

/// Errors returned by `AccountClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The host string given at construction is not an absolute URI.
    InvalidHost(String),

    /// The HTTP round trip itself failed (connection, I/O, body read).
    Transport(String),

    /// The server returned 404 — the requested account does not exist.
    NotFound,

    /// The server returned an unexpected status other than 404, with the
    /// server-provided message when one was available.
    Api { status: u16, message: String },

    /// A success response body could not be deserialized into the expected
    /// type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidHost(msg) => write!(f, "invalid host URL: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::NotFound => write!(f, "account not found"),
            ApiError::Api { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
