//! Shell chrome commands
use serde::Serialize;

use workdeck_core::{ShellLayout, SidebarEvent, WindowRequest};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "window", rename_all = "snake_case")]
pub enum WindowRequestInfo {
    EditWorkspace { workspace_id: String },
    Notifications,
    Preferences,
}

impl From<WindowRequest> for WindowRequestInfo {
    fn from(request: WindowRequest) -> Self {
        match request {
            WindowRequest::EditWorkspace(id) => WindowRequestInfo::EditWorkspace {
                workspace_id: id.to_string(),
            },
            WindowRequest::Notifications => WindowRequestInfo::Notifications,
            WindowRequest::Preferences => WindowRequestInfo::Preferences,
        }
    }
}

pub fn get_layout(state: &AppState) -> CommandResult<ShellLayout> {
    state
        .with_shell(|shell| Ok(shell.layout(&shell.controller().snapshot())))
        .into()
}

pub fn open_notifications(state: &AppState) -> CommandResult<bool> {
    state.dispatch(SidebarEvent::NotificationsClicked).into()
}

pub fn open_preferences(state: &AppState) -> CommandResult<bool> {
    state.dispatch(SidebarEvent::PreferencesClicked).into()
}

/// Windows the host should open since the last poll
pub fn take_window_requests(state: &AppState) -> CommandResult<Vec<WindowRequestInfo>> {
    state
        .with_shell(|shell| {
            Ok(shell
                .controller()
                .take_window_requests()
                .into_iter()
                .map(WindowRequestInfo::from)
                .collect())
        })
        .into()
}
