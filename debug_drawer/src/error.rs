//! Debug drawer error types.

use thiserror::Error;

/// Errors returned by the drawing API.
///
/// Drawing never panics on bad input; shape calls validate their arguments
/// and reject them with one of these before anything is enqueued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A shape parameter is out of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A draw request could not be built from the given data.
    #[error("invalid draw request: {0}")]
    InvalidRequest(String),
}

/// Result alias for the drawing API.
pub type DrawResult<T> = Result<T, DrawError>;
