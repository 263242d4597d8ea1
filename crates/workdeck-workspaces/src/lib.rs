//! Workdeck Workspaces
//!
//! Ordering and selection model for the workspace sidebar:
//! - materializes the host's keyed workspace map into display order
//! - moves a workspace on drop and renumbers the whole collection
//! - decides which context actions a workspace icon offers

mod actions;
mod collection;
mod error;
mod reorder;
mod workspace;

pub use actions::{context_actions, ContextAction};
pub use collection::WorkspaceCollection;
pub use error::WorkspaceError;
pub use reorder::{destination_index, move_item, reorder};
pub use workspace::{WorkspaceId, WorkspaceRecord};

pub type Result<T> = std::result::Result<T, WorkspaceError>;
