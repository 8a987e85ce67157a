//! Error handling for dir2h
//!
//! Every error is fatal: traversal failures and output failures are
//! surfaced to the caller as-is, never retried or translated away.

use std::io;
use thiserror::Error;

/// Error type for dir2h operations
#[derive(Error, Debug)]
pub enum Dir2hError {
    /// Directory traversal errors (unreadable directory, permission denied)
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Errors writing the generated header
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dir2h operations
pub type Result<T> = std::result::Result<T, Dir2hError>;

// Lets the binary keep an io::Result signature
impl From<Dir2hError> for io::Error {
    fn from(err: Dir2hError) -> Self {
        match err {
            Dir2hError::Io(e) => e,
            Dir2hError::Walk(e) => {
                let kind = e
                    .io_error()
                    .map(|io_err| io_err.kind())
                    .unwrap_or(io::ErrorKind::Other);
                io::Error::new(kind, e.to_string())
            }
        }
    }
}
