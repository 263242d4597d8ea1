//! Context menu actions for a workspace icon
//!
//! The active workspace can only be edited. Every other workspace offers
//! exactly one of hibernate or wake up, depending on its current state.

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextAction {
    Edit,
    Hibernate,
    WakeUp,
    Remove,
}

impl ContextAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::Edit => "Edit Workspace",
            ContextAction::Hibernate => "Hibernate Workspace",
            ContextAction::WakeUp => "Wake Up Workspace",
            ContextAction::Remove => "Remove Workspace",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextAction::Edit => "edit",
            ContextAction::Hibernate => "hibernate",
            ContextAction::WakeUp => "wake_up",
            ContextAction::Remove => "remove",
        }
    }

    /// Whether the action is blocked while the workspace is active
    pub fn requires_inactive(&self) -> bool {
        !matches!(self, ContextAction::Edit)
    }
}

impl std::fmt::Display for ContextAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContextAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edit" => Ok(ContextAction::Edit),
            "hibernate" => Ok(ContextAction::Hibernate),
            "wake_up" | "wakeup" => Ok(ContextAction::WakeUp),
            "remove" => Ok(ContextAction::Remove),
            _ => Err(format!("Unknown context action: {}", s)),
        }
    }
}

/// Actions offered for a workspace, in menu order
pub fn context_actions(record: &WorkspaceRecord) -> Vec<ContextAction> {
    let toggle = if record.hibernated {
        ContextAction::WakeUp
    } else {
        ContextAction::Hibernate
    };

    [ContextAction::Edit, toggle, ContextAction::Remove]
        .into_iter()
        .filter(|action| !(record.active && action.requires_inactive()))
        .collect()
}
