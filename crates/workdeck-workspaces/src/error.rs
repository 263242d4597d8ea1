//! Workspace error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("Workspace not found: {0}")]
    NotFound(String),

    #[error("Workspace order is not contiguous: expected {expected}, found {found}")]
    NonContiguousOrder { expected: i64, found: i64 },

    #[error("More than one active workspace: {}", .0.join(", "))]
    MultipleActive(Vec<String>),

    #[error("Active workspace cannot be hibernated: {0}")]
    ActiveHibernated(String),

    #[error("Workspace key {key} does not match record id {id}")]
    KeyMismatch { key: String, id: String },

    #[error("Cannot {action} the active workspace: {id}")]
    ActiveLocked { id: String, action: String },
}
