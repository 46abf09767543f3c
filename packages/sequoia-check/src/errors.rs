//! Error types for sequoia-check
//!
//! The rule itself never fails: every unresolvable call site or malformed
//! type degrades to "skip this one" (see the feature modules). Errors here
//! cover the loader and CLI surface only.

use thiserror::Error;

/// Main error type for sequoia-check operations
#[derive(Debug, Error)]
pub enum SequoiaError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Module load/serialization error
    #[error("Load error: {0}")]
    Load(String),
}

/// Result type alias for sequoia-check operations
pub type Result<T> = std::result::Result<T, SequoiaError>;
