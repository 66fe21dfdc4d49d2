//! Error types for the engine core

use thiserror::Error;

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Caller passed a value that violates an input precondition
    #[error("Invalid input '{param}': {message}")]
    InvalidInput { param: String, message: String },
}

impl Error {
    pub fn invalid_input(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            param: param.into(),
            message: message.into(),
        }
    }
}
