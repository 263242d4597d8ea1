//! Workdeck Core
//!
//! Coordination layer for the workspace shell. The host owns all state;
//! the shell reads snapshots and sends requests back through a
//! [`HostController`].

mod config;
mod controller;
mod drag;
mod error;
mod intent;
mod layout;
mod shell;
mod snapshot;
mod store;

pub use config::{Platform, ShellConfig, WindowMode};
pub use controller::HostController;
pub use drag::{DragTracker, Point, SortEnd, DRAG_ACTIVATION_DISTANCE};
pub use error::CoreError;
pub use intent::{intent_for, Intent, SidebarEvent};
pub use layout::{reload_shortcut, ContentOverlay, ShellLayout, SidebarFooter, SidebarLayout};
pub use shell::{ContextMenu, MenuItem, Shell, SidebarItem};
pub use snapshot::{AppSnapshot, GeneralState, NotificationsState, PauseNotificationsInfo, Preferences};
pub use store::{WindowRequest, WorkspaceStore};

// Re-export the workspace model
pub use workdeck_workspaces::{
    context_actions, reorder, ContextAction, WorkspaceCollection, WorkspaceError, WorkspaceId,
    WorkspaceRecord,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
