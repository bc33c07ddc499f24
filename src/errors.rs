//! Error types for the raw HTML block

use thiserror::Error;

/// Errors raised by block operations and the host abstractions beneath them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// `save` was handed a view with no text input inside it.
    /// Only a broken host integration can cause this.
    #[error("view does not contain a raw HTML text input")]
    MissingInput,

    /// The block was disposed and can no longer render
    #[error("block has been disposed")]
    Disposed,

    /// A view surface operation failed (e.g. a DOM exception)
    #[error("view surface error: {0}")]
    Surface(String),

    /// A deferred action could not be scheduled
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, BlockError>;
