//! Sidebar events and the intents they produce
//!
//! `intent_for` is the single handler for everything the sidebar can do.
//! It is pure: it reads a snapshot and returns at most one request for the
//! host, which the shell then sends.

use serde::{Deserialize, Serialize};

use workdeck_workspaces::{context_actions, reorder, ContextAction, WorkspaceCollection, WorkspaceId};

use crate::controller::HostController;
use crate::drag::SortEnd;
use crate::snapshot::AppSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarEvent {
    WorkspaceClicked { id: WorkspaceId },
    SortEnded(SortEnd),
    ContextActionChosen { id: WorkspaceId, action: ContextAction },
    AddWorkspaceClicked,
    NotificationsClicked,
    PreferencesClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetWorkspaces(WorkspaceCollection),
    SetActiveWorkspace(WorkspaceId),
    CreateWorkspace,
    RemoveWorkspace(WorkspaceId),
    HibernateWorkspace(WorkspaceId),
    WakeUpWorkspace(WorkspaceId),
    ShowEditWorkspaceWindow(WorkspaceId),
    ShowNotificationsWindow,
    ShowPreferencesWindow,
}

impl Intent {
    pub fn send<C: HostController + ?Sized>(self, controller: &C) {
        match self {
            Intent::SetWorkspaces(workspaces) => controller.request_set_workspaces(workspaces),
            Intent::SetActiveWorkspace(id) => controller.request_set_active_workspace(&id),
            Intent::CreateWorkspace => controller.request_create_workspace(),
            Intent::RemoveWorkspace(id) => controller.request_remove_workspace(&id),
            Intent::HibernateWorkspace(id) => controller.request_hibernate_workspace(&id),
            Intent::WakeUpWorkspace(id) => controller.request_wake_up_workspace(&id),
            Intent::ShowEditWorkspaceWindow(id) => {
                controller.request_show_edit_workspace_window(&id)
            }
            Intent::ShowNotificationsWindow => controller.request_show_notifications_window(),
            Intent::ShowPreferencesWindow => controller.request_show_preferences_window(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetWorkspaces(_) => "set_workspaces",
            Intent::SetActiveWorkspace(_) => "set_active_workspace",
            Intent::CreateWorkspace => "create_workspace",
            Intent::RemoveWorkspace(_) => "remove_workspace",
            Intent::HibernateWorkspace(_) => "hibernate_workspace",
            Intent::WakeUpWorkspace(_) => "wake_up_workspace",
            Intent::ShowEditWorkspaceWindow(_) => "show_edit_workspace_window",
            Intent::ShowNotificationsWindow => "show_notifications_window",
            Intent::ShowPreferencesWindow => "show_preferences_window",
        }
    }
}

/// Map a sidebar event to the request it should send, if any.
///
/// Events that refer to workspaces missing from the snapshot, drops that
/// leave the order unchanged, and actions that are not currently offered
/// all produce `None`.
pub fn intent_for(snapshot: &AppSnapshot, event: SidebarEvent) -> Option<Intent> {
    let workspaces = &snapshot.workspaces;

    match event {
        SidebarEvent::WorkspaceClicked { id } => {
            if !workspaces.contains(&id) {
                tracing::debug!(workspace_id = %id, "Ignoring click on stale workspace");
                return None;
            }
            Some(Intent::SetActiveWorkspace(id))
        }
        SidebarEvent::SortEnded(SortEnd {
            old_index,
            new_index,
        }) => {
            if old_index >= workspaces.len() {
                tracing::debug!(
                    old_index,
                    len = workspaces.len(),
                    "Ignoring drop from a stale sidebar"
                );
                return None;
            }
            let Ok(to) = isize::try_from(new_index) else {
                tracing::debug!(new_index, "Ignoring drop with out-of-range destination");
                return None;
            };
            reorder(workspaces, old_index, to).map(Intent::SetWorkspaces)
        }
        SidebarEvent::ContextActionChosen { id, action } => {
            let record = match workspaces.get(&id) {
                Ok(record) => record,
                Err(_) => {
                    tracing::debug!(workspace_id = %id, "Ignoring action on stale workspace");
                    return None;
                }
            };

            if !context_actions(record).contains(&action) {
                tracing::debug!(
                    workspace_id = %id,
                    action = %action,
                    "Ignoring context action that is not offered"
                );
                return None;
            }

            Some(match action {
                ContextAction::Edit => Intent::ShowEditWorkspaceWindow(id),
                ContextAction::Hibernate => Intent::HibernateWorkspace(id),
                ContextAction::WakeUp => Intent::WakeUpWorkspace(id),
                ContextAction::Remove => Intent::RemoveWorkspace(id),
            })
        }
        SidebarEvent::AddWorkspaceClicked => Some(Intent::CreateWorkspace),
        SidebarEvent::NotificationsClicked => Some(Intent::ShowNotificationsWindow),
        SidebarEvent::PreferencesClicked => Some(Intent::ShowPreferencesWindow),
    }
}
