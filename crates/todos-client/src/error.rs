//! Fetch Errors

use thiserror::Error;

/// Why the initial list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON array of todos.
    #[error("could not decode todo list: {0}")]
    Decode(String),
}
