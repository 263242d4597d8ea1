//! Host controller boundary
//!
//! Every request is fire-and-forget. The host applies it to its own state
//! and the shell sees the result in the next snapshot.

use workdeck_workspaces::{WorkspaceCollection, WorkspaceId};

pub trait HostController {
    /// Replace the whole workspace map in one write
    fn request_set_workspaces(&self, workspaces: WorkspaceCollection);

    fn request_set_active_workspace(&self, id: &WorkspaceId);

    fn request_create_workspace(&self);

    fn request_remove_workspace(&self, id: &WorkspaceId);

    fn request_hibernate_workspace(&self, id: &WorkspaceId);

    fn request_wake_up_workspace(&self, id: &WorkspaceId);

    fn request_show_edit_workspace_window(&self, id: &WorkspaceId);

    fn request_show_notifications_window(&self);

    fn request_show_preferences_window(&self);
}
