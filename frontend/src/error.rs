//! Error types for the conversion front end.
//!
//! - [`AppError::NoFilesSelected`] - user input, caught before any request
//! - [`AppError::Busy`] - a submission is already in flight
//! - [`AppError::Upstream`] - the server answered with an `error` field
//! - [`AppError::Transport`] - the request failed or the body was unreadable
//!
//! Upstream and transport messages are shown to the user verbatim.

use thiserror::Error;

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Submit pressed with an empty selection.
    #[error("Please select files to process")]
    NoFilesSelected,

    /// Submit pressed while a previous submission is still running.
    #[error("A conversion is already in progress")]
    Busy,

    /// Error reported by the server in the response envelope.
    #[error("{0}")]
    Upstream(String),

    /// Network failure or malformed response.
    #[error("{0}")]
    Transport(String),
}

impl AppError {
    /// Whether the error was caught before contacting the server.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::NoFilesSelected | AppError::Busy)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
