//! Workspace record
//!
//! One record per sidebar icon. Only `order` is rewritten by this crate;
//! `active` and `hibernated` are owned by the host and read for styling.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a newly created workspace
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WorkspaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    /// Stable for the workspace's lifetime
    pub id: WorkspaceId,
    /// Display position in the sidebar
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub active: bool,
    /// Session suspended while the icon stays listed
    #[serde(default)]
    pub hibernated: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub badge_count: u32,
    #[serde(default)]
    pub picture_path: Option<String>,
    #[serde(default)]
    pub transparent_background: bool,
}

impl WorkspaceRecord {
    pub fn new(id: impl Into<WorkspaceId>, order: i64) -> Self {
        Self {
            id: id.into(),
            order,
            active: false,
            hibernated: false,
            name: String::new(),
            badge_count: 0,
            picture_path: None,
            transparent_background: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_hibernated(mut self, hibernated: bool) -> Self {
        self.hibernated = hibernated;
        self
    }

    /// Name shown under the icon, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
