//! Error types for the portfolio terminal.

use std::io;

/// Errors produced while loading data or driving the shell.
///
/// The command interpreter itself is total and never returns these; they only
/// come from configuration, profile loading, and terminal I/O.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("profile error: {0}")]
    Profile(String),

    #[error("shell error: {0}")]
    Shell(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
