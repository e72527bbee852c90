use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown script: {0}")]
    UnknownScript(String),

    #[error("invalid code point range: {0}")]
    InvalidRange(String),
}
