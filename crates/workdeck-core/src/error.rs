//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Workspace error: {0}")]
    Workspace(#[from] workdeck_workspaces::WorkspaceError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell not initialized")]
    NotInitialized,
}
