//! Workspace sidebar commands
use serde::{Deserialize, Serialize};

use workdeck_core::{
    ContextAction, ContextMenu, Point, SidebarEvent, SidebarItem, SortEnd, WorkspaceId,
};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub id: String,
    pub name: String,
    pub order: usize,
    pub is_active: bool,
    pub is_hibernated: bool,
    pub badge_count: u32,
    pub picture_path: Option<String>,
    pub transparent_background: bool,
}

impl From<SidebarItem> for WorkspaceInfo {
    fn from(item: SidebarItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            order: item.index,
            is_active: item.active,
            is_hibernated: item.hibernated,
            badge_count: item.badge_count,
            picture_path: item.picture_path,
            transparent_background: item.transparent_background,
        }
    }
}

pub fn get_workspaces(state: &AppState) -> CommandResult<Vec<WorkspaceInfo>> {
    state
        .with_shell(|shell| {
            let snapshot = shell.controller().snapshot();
            Ok(shell
                .sidebar_items(&snapshot)
                .into_iter()
                .map(WorkspaceInfo::from)
                .collect())
        })
        .into()
}

pub fn get_active_workspace(state: &AppState) -> CommandResult<Option<WorkspaceInfo>> {
    state
        .with_shell(|shell| {
            let snapshot = shell.controller().snapshot();
            Ok(shell
                .sidebar_items(&snapshot)
                .into_iter()
                .find(|item| item.active)
                .map(WorkspaceInfo::from))
        })
        .into()
}

pub fn select_workspace(state: &AppState, workspace_id: String) -> CommandResult<bool> {
    state
        .dispatch(SidebarEvent::WorkspaceClicked {
            id: WorkspaceId::new(workspace_id),
        })
        .into()
}

/// Called on drop with indices the UI's own sortable list already resolved.
///
/// Raw pointer events go through `begin_drag`/`update_drag`/`end_drag`
/// instead, which apply the activation distance before reordering.
pub fn reorder_workspaces(
    state: &AppState,
    old_index: usize,
    new_index: usize,
) -> CommandResult<bool> {
    state
        .dispatch(SidebarEvent::SortEnded(SortEnd {
            old_index,
            new_index,
        }))
        .into()
}

pub fn begin_drag(state: &AppState, index: usize, x: f64, y: f64) -> CommandResult<()> {
    state.press_drag(index, Point::new(x, y));
    CommandResult::ok(())
}

/// Reports whether the press has turned into a drag
pub fn update_drag(state: &AppState, x: f64, y: f64) -> CommandResult<bool> {
    CommandResult::ok(state.move_drag(Point::new(x, y)))
}

/// Reports whether the drop wrote a new order
pub fn end_drag(state: &AppState, drop_index: usize) -> CommandResult<bool> {
    state.release_drag(drop_index).into()
}

pub fn cancel_drag(state: &AppState) -> CommandResult<()> {
    state.cancel_drag();
    CommandResult::ok(())
}

pub fn create_workspace(state: &AppState) -> CommandResult<bool> {
    state.dispatch(SidebarEvent::AddWorkspaceClicked).into()
}

pub fn get_context_menu(state: &AppState, workspace_id: String) -> CommandResult<ContextMenu> {
    state
        .with_shell(|shell| {
            let snapshot = shell.controller().snapshot();
            shell.context_menu(&snapshot, &WorkspaceId::new(workspace_id))
        })
        .into()
}

pub fn run_context_action(
    state: &AppState,
    workspace_id: String,
    action: String,
) -> CommandResult<bool> {
    let action: ContextAction = match action.parse() {
        Ok(action) => action,
        Err(e) => return CommandResult::err(e),
    };

    state
        .dispatch(SidebarEvent::ContextActionChosen {
            id: WorkspaceId::new(workspace_id),
            action,
        })
        .into()
}
