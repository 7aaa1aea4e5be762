//! Error types for the tree engine and the application shell.

use crate::types::DirId;
use thiserror::Error;

/// Domain-level outcomes of tree engine operations.
///
/// Every variant is a recoverable, user-facing condition. The session loop
/// reports these and keeps running; none of them terminate the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Cannot copy: {0}")]
    CannotCopy(String),

    /// A directory id no longer resolves in the store. Only reachable when a
    /// caller holds an id across a cascade deletion, which the session layer
    /// never does.
    #[error("Directory id {0} is not live")]
    StaleDirId(DirId),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

/// Application-level failures: configuration, logging setup, terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Input(String),
}
