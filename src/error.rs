//! Application error type.
//!
//! Only the shell can fail: writing PNG snapshots and CSV tables. Chart
//! composition and drawing are infallible.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for shell operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// PNG encoding or writing failed.
    #[error("failed to export {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },

    /// Stdout, file or directory I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
