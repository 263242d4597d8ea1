//! Main shell
//!
//! Owns the resolved configuration and the host controller. Rendering
//! helpers read an explicit snapshot; `dispatch` turns sidebar events into
//! host requests.

use serde::Serialize;

use workdeck_workspaces::{context_actions, ContextAction, WorkspaceId, WorkspaceRecord};

use crate::config::ShellConfig;
use crate::controller::HostController;
use crate::intent::{intent_for, SidebarEvent};
use crate::layout::ShellLayout;
use crate::snapshot::AppSnapshot;
use crate::Result;

/// One workspace icon in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub index: usize,
    pub id: WorkspaceId,
    pub name: String,
    pub active: bool,
    pub hibernated: bool,
    pub badge_count: u32,
    pub picture_path: Option<String>,
    pub transparent_background: bool,
}

impl SidebarItem {
    fn from_record(index: usize, record: &WorkspaceRecord) -> Self {
        Self {
            index,
            id: record.id.clone(),
            name: record.display_name().to_string(),
            active: record.active,
            hibernated: record.hibernated,
            badge_count: record.badge_count,
            picture_path: record.picture_path.clone(),
            transparent_background: record.transparent_background,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextMenu {
    pub workspace_id: WorkspaceId,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub action: ContextAction,
    pub label: &'static str,
}

pub struct Shell<C: HostController> {
    config: ShellConfig,
    controller: C,
}

impl<C: HostController> Shell<C> {
    pub fn new(config: ShellConfig, controller: C) -> Self {
        Self { config, controller }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn sidebar_items(&self, snapshot: &AppSnapshot) -> Vec<SidebarItem> {
        snapshot
            .workspaces
            .ordered()
            .into_iter()
            .enumerate()
            .map(|(index, record)| SidebarItem::from_record(index, record))
            .collect()
    }

    pub fn context_menu(&self, snapshot: &AppSnapshot, id: &WorkspaceId) -> Result<ContextMenu> {
        let record = snapshot.workspaces.get(id)?;
        let items = context_actions(record)
            .into_iter()
            .map(|action| MenuItem {
                action,
                label: action.label(),
            })
            .collect();

        Ok(ContextMenu {
            workspace_id: id.clone(),
            items,
        })
    }

    pub fn layout(&self, snapshot: &AppSnapshot) -> ShellLayout {
        ShellLayout::resolve(&self.config, snapshot)
    }

    /// Handle one sidebar event. Returns whether a request was sent.
    pub fn dispatch(&self, snapshot: &AppSnapshot, event: SidebarEvent) -> bool {
        match intent_for(snapshot, event) {
            Some(intent) => {
                tracing::debug!(intent = intent.name(), "Dispatching intent");
                intent.send(&self.controller);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Platform, WindowMode};
    use crate::drag::SortEnd;
    use crate::store::WorkspaceStore;
    use std::cell::RefCell;
    use workdeck_workspaces::WorkspaceCollection;

    #[derive(Default)]
    struct RecordingController {
        calls: RefCell<Vec<String>>,
        committed: RefCell<Vec<WorkspaceCollection>>,
    }

    impl RecordingController {
        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl HostController for RecordingController {
        fn request_set_workspaces(&self, workspaces: WorkspaceCollection) {
            self.record("set_workspaces".to_string());
            self.committed.borrow_mut().push(workspaces);
        }

        fn request_set_active_workspace(&self, id: &WorkspaceId) {
            self.record(format!("set_active:{}", id));
        }

        fn request_create_workspace(&self) {
            self.record("create".to_string());
        }

        fn request_remove_workspace(&self, id: &WorkspaceId) {
            self.record(format!("remove:{}", id));
        }

        fn request_hibernate_workspace(&self, id: &WorkspaceId) {
            self.record(format!("hibernate:{}", id));
        }

        fn request_wake_up_workspace(&self, id: &WorkspaceId) {
            self.record(format!("wake_up:{}", id));
        }

        fn request_show_edit_workspace_window(&self, id: &WorkspaceId) {
            self.record(format!("edit:{}", id));
        }

        fn request_show_notifications_window(&self) {
            self.record("notifications".to_string());
        }

        fn request_show_preferences_window(&self) {
            self.record("preferences".to_string());
        }
    }

    fn snapshot() -> AppSnapshot {
        let mut snapshot = AppSnapshot::default();
        snapshot.workspaces = vec![
            WorkspaceRecord::new("d", 3),
            WorkspaceRecord::new("b", 1).with_name("Chat"),
            WorkspaceRecord::new("a", 0).with_active(true),
            WorkspaceRecord::new("c", 2).with_hibernated(true),
        ]
        .into_iter()
        .collect();
        snapshot
    }

    fn shell() -> Shell<RecordingController> {
        Shell::new(
            ShellConfig::new(Platform::Linux, WindowMode::Window),
            RecordingController::default(),
        )
    }

    #[test]
    fn test_sidebar_items_follow_order() {
        let items = shell().sidebar_items(&snapshot());
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(items[1].name, "Chat");
        assert_eq!(items[3].index, 3);
        assert!(items[0].active);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn test_context_menu_for_active_and_hibernated() {
        let shell = shell();
        let snapshot = snapshot();

        let menu = shell.context_menu(&snapshot, &"a".into()).unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].label, "Edit Workspace");

        let menu = shell.context_menu(&snapshot, &"c".into()).unwrap();
        let labels: Vec<&str> = menu.items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["Edit Workspace", "Wake Up Workspace", "Remove Workspace"]
        );

        assert!(shell.context_menu(&snapshot, &"gone".into()).is_err());
    }

    #[test]
    fn test_noop_drop_sends_nothing() {
        let shell = shell();
        let sent = shell.dispatch(
            &snapshot(),
            SidebarEvent::SortEnded(SortEnd {
                old_index: 2,
                new_index: 2,
            }),
        );
        assert!(!sent);
        assert!(shell.controller().calls.borrow().is_empty());
    }

    #[test]
    fn test_drop_sends_single_replacement() {
        let shell = shell();
        let sent = shell.dispatch(
            &snapshot(),
            SidebarEvent::SortEnded(SortEnd {
                old_index: 3,
                new_index: 0,
            }),
        );
        assert!(sent);
        assert_eq!(*shell.controller().calls.borrow(), vec!["set_workspaces"]);

        let committed = shell.controller().committed.borrow();
        let ids: Vec<String> = committed[0]
            .to_ordered_list()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_buttons_dispatch_window_intents() {
        let shell = shell();
        let snapshot = snapshot();
        shell.dispatch(&snapshot, SidebarEvent::AddWorkspaceClicked);
        shell.dispatch(&snapshot, SidebarEvent::NotificationsClicked);
        shell.dispatch(&snapshot, SidebarEvent::PreferencesClicked);
        shell.dispatch(
            &snapshot,
            SidebarEvent::WorkspaceClicked { id: "b".into() },
        );
        assert_eq!(
            *shell.controller().calls.borrow(),
            vec!["create", "notifications", "preferences", "set_active:b"]
        );
    }

    #[test]
    fn test_dispatch_updates_store() {
        let store = WorkspaceStore::new(snapshot());
        let shell = Shell::new(ShellConfig::detect(), store.clone());

        shell.dispatch(
            &store.snapshot(),
            SidebarEvent::SortEnded(SortEnd {
                old_index: 0,
                new_index: 3,
            }),
        );
        shell.dispatch(
            &store.snapshot(),
            SidebarEvent::WorkspaceClicked { id: "c".into() },
        );

        let snapshot = store.snapshot();
        let items = shell.sidebar_items(&snapshot);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d", "a"]);
        assert!(items[1].active);
        assert!(!items[1].hibernated);
        assert!(snapshot.workspaces.validate().is_ok());
    }
}
