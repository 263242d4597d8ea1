//! Host state snapshot
//!
//! An immutable copy of the host's state, read before each event is handled.
//! Only `workspaces` carries structure; the other sections are flags that
//! gate layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workdeck_workspaces::WorkspaceCollection;

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub workspaces: WorkspaceCollection,
    pub preferences: Preferences,
    pub general: GeneralState,
    pub notifications: NotificationsState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub sidebar: bool,
    pub title_bar: bool,
    pub navigation_bar: bool,
    pub attach_to_menubar: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sidebar: true,
            title_bar: false,
            navigation_bar: false,
            attach_to_menubar: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralState {
    pub did_fail_load: bool,
    pub is_full_screen: bool,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationsState {
    /// Present while notifications are paused
    pub pause_notifications_info: Option<PauseNotificationsInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseNotificationsInfo {
    pub reason: String,
    pub til_date: DateTime<Utc>,
}

impl AppSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn notifications_paused(&self) -> bool {
        self.notifications.pause_notifications_info.is_some()
    }
}
