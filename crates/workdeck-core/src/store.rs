//! In-memory workspace store
//!
//! A host-side implementation of [`HostController`] that keeps the whole
//! snapshot in memory. Every mutation leaves ordinals dense and at most one
//! workspace active, so the snapshots it hands out are always well formed.

use parking_lot::RwLock;
use std::sync::Arc;

use workdeck_workspaces::{WorkspaceCollection, WorkspaceError, WorkspaceId, WorkspaceRecord};

use crate::controller::HostController;
use crate::error::CoreError;
use crate::snapshot::AppSnapshot;
use crate::Result;

/// Secondary windows the shell asked the host to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowRequest {
    EditWorkspace(WorkspaceId),
    Notifications,
    Preferences,
}

pub struct WorkspaceStore {
    snapshot: Arc<RwLock<AppSnapshot>>,
    window_requests: Arc<RwLock<Vec<WindowRequest>>>,
}

impl WorkspaceStore {
    pub fn new(snapshot: AppSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            window_requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot = AppSnapshot::from_json(json)?;
        snapshot.workspaces.validate()?;
        Ok(Self::new(snapshot))
    }

    pub fn to_json(&self) -> Result<String> {
        self.snapshot.read().to_json()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppSnapshot {
        self.snapshot.read().clone()
    }

    /// Apply a host-side change to the non-workspace sections
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut AppSnapshot),
    {
        f(&mut *self.snapshot.write())
    }

    /// Replace the whole workspace map
    pub fn set_workspaces(&self, workspaces: WorkspaceCollection) -> Result<()> {
        workspaces.validate()?;
        let count = workspaces.len();
        self.snapshot.write().workspaces = workspaces;
        tracing::debug!(workspace_count = count, "Replaced workspaces");
        Ok(())
    }

    pub fn set_active_workspace(&self, id: &WorkspaceId) -> Result<WorkspaceRecord> {
        let mut snapshot = self.snapshot.write();
        let workspaces = &mut snapshot.workspaces;

        if !workspaces.contains(id) {
            return Err(WorkspaceError::NotFound(id.to_string()).into());
        }

        for record in workspaces.iter_mut() {
            record.active = &record.id == id;
            if record.active {
                record.hibernated = false;
            }
        }

        let record = workspaces.get(id)?.clone();
        tracing::info!(workspace_id = %id, "Activated workspace");
        Ok(record)
    }

    /// Append a new workspace and make it active
    pub fn create_workspace(&self) -> WorkspaceRecord {
        let mut snapshot = self.snapshot.write();
        let workspaces = &mut snapshot.workspaces;

        let position = workspaces.len();
        let record = WorkspaceRecord::new(WorkspaceId::generate(), position as i64)
            .with_name(format!("Workspace {}", position + 1))
            .with_active(true);

        for other in workspaces.iter_mut() {
            other.active = false;
        }
        workspaces.insert(record.clone());

        tracing::info!(workspace_id = %record.id, order = record.order, "Created workspace");
        record
    }

    pub fn remove_workspace(&self, id: &WorkspaceId) -> Result<()> {
        let mut snapshot = self.snapshot.write();

        let removed = snapshot
            .workspaces
            .remove(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.to_string()))?;

        let mut next = snapshot.workspaces.renumbered();
        if removed.active {
            let first = next.ordered().first().map(|r| r.id.clone());
            if let Some(record) = first.as_ref().and_then(|first| next.get_mut(first)) {
                record.active = true;
                record.hibernated = false;
            }
        }
        snapshot.workspaces = next;

        tracing::info!(
            workspace_id = %id,
            remaining = snapshot.workspaces.len(),
            "Removed workspace"
        );
        Ok(())
    }

    pub fn hibernate_workspace(&self, id: &WorkspaceId) -> Result<()> {
        let mut snapshot = self.snapshot.write();
        let record = snapshot
            .workspaces
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.to_string()))?;

        if record.active {
            return Err(WorkspaceError::ActiveLocked {
                id: id.to_string(),
                action: "hibernate".to_string(),
            }
            .into());
        }

        record.hibernated = true;
        tracing::info!(workspace_id = %id, "Hibernated workspace");
        Ok(())
    }

    pub fn wake_up_workspace(&self, id: &WorkspaceId) -> Result<()> {
        let mut snapshot = self.snapshot.write();
        let record = snapshot
            .workspaces
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.to_string()))?;

        record.hibernated = false;
        tracing::info!(workspace_id = %id, "Woke up workspace");
        Ok(())
    }

    /// Drain the queued window requests
    pub fn take_window_requests(&self) -> Vec<WindowRequest> {
        std::mem::take(&mut *self.window_requests.write())
    }

    fn queue_window(&self, request: WindowRequest) {
        tracing::debug!(request = ?request, "Queued window request");
        self.window_requests.write().push(request);
    }
}

/// Requests are fire-and-forget, so failures end here
fn log_rejected(intent: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(CoreError::Workspace(WorkspaceError::NotFound(id))) => {
            tracing::debug!(workspace_id = %id, intent, "Ignoring request for stale workspace");
        }
        Err(e) => {
            tracing::warn!(intent, error = %e, "Rejected workspace request");
        }
    }
}

impl HostController for WorkspaceStore {
    fn request_set_workspaces(&self, workspaces: WorkspaceCollection) {
        log_rejected("set_workspaces", self.set_workspaces(workspaces));
    }

    fn request_set_active_workspace(&self, id: &WorkspaceId) {
        log_rejected(
            "set_active_workspace",
            self.set_active_workspace(id).map(|_| ()),
        );
    }

    fn request_create_workspace(&self) {
        self.create_workspace();
    }

    fn request_remove_workspace(&self, id: &WorkspaceId) {
        log_rejected("remove_workspace", self.remove_workspace(id));
    }

    fn request_hibernate_workspace(&self, id: &WorkspaceId) {
        log_rejected("hibernate_workspace", self.hibernate_workspace(id));
    }

    fn request_wake_up_workspace(&self, id: &WorkspaceId) {
        log_rejected("wake_up_workspace", self.wake_up_workspace(id));
    }

    fn request_show_edit_workspace_window(&self, id: &WorkspaceId) {
        if !self.snapshot.read().workspaces.contains(id) {
            tracing::debug!(workspace_id = %id, "Ignoring edit request for stale workspace");
            return;
        }
        self.queue_window(WindowRequest::EditWorkspace(id.clone()));
    }

    fn request_show_notifications_window(&self) {
        self.queue_window(WindowRequest::Notifications);
    }

    fn request_show_preferences_window(&self) {
        self.queue_window(WindowRequest::Preferences);
    }
}

impl Clone for WorkspaceStore {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            window_requests: Arc::clone(&self.window_requests),
        }
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new(AppSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WorkspaceStore {
        let mut snapshot = AppSnapshot::default();
        snapshot.workspaces = vec![
            WorkspaceRecord::new("a", 0).with_active(true),
            WorkspaceRecord::new("b", 1),
            WorkspaceRecord::new("c", 2),
        ]
        .into_iter()
        .collect();
        WorkspaceStore::new(snapshot)
    }

    fn active_count(store: &WorkspaceStore) -> usize {
        store.snapshot().workspaces.iter().filter(|r| r.active).count()
    }

    #[test]
    fn test_selection_keeps_one_active() {
        let store = store();

        store.request_set_active_workspace(&"b".into());
        store.request_set_active_workspace(&"c".into());
        store.request_set_active_workspace(&"gone".into());

        assert_eq!(active_count(&store), 1);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.workspaces.active_id().map(|id| id.as_str()), Some("c"));
    }

    #[test]
    fn test_activating_wakes_workspace() {
        let store = store();
        store.hibernate_workspace(&"b".into()).unwrap();
        let record = store.set_active_workspace(&"b".into()).unwrap();
        assert!(record.active);
        assert!(!record.hibernated);
        assert!(store.snapshot().workspaces.validate().is_ok());
    }

    #[test]
    fn test_create_appends_and_activates() {
        let store = store();
        let created = store.create_workspace();

        assert_eq!(created.order, 3);
        assert_eq!(created.name, "Workspace 4");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.workspaces.active_id(), Some(&created.id));
        assert_eq!(active_count(&store), 1);
        assert!(snapshot.workspaces.validate().is_ok());
    }

    #[test]
    fn test_remove_renumbers_and_reassigns_active() {
        let store = store();
        store.remove_workspace(&"a".into()).unwrap();

        let snapshot = store.snapshot();
        let list = snapshot.workspaces.to_ordered_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id.as_str(), "b");
        assert_eq!(list[0].order, 0);
        assert!(list[0].active);
        assert_eq!(list[1].order, 1);
        assert!(snapshot.workspaces.validate().is_ok());
    }

    #[test]
    fn test_remove_last_workspace_leaves_empty() {
        let store = WorkspaceStore::default();
        let created = store.create_workspace();
        store.remove_workspace(&created.id).unwrap();
        assert!(store.snapshot().workspaces.is_empty());
        assert_eq!(active_count(&store), 0);
    }

    #[test]
    fn test_active_workspace_cannot_hibernate() {
        let store = store();
        let err = store.hibernate_workspace(&"a".into()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Workspace(WorkspaceError::ActiveLocked { .. })
        ));

        store.hibernate_workspace(&"b".into()).unwrap();
        assert!(store.snapshot().workspaces.get(&"b".into()).unwrap().hibernated);
        store.wake_up_workspace(&"b".into()).unwrap();
        assert!(!store.snapshot().workspaces.get(&"b".into()).unwrap().hibernated);
    }

    #[test]
    fn test_invalid_replacement_is_rejected() {
        let store = store();
        let before = store.snapshot();

        let broken: WorkspaceCollection = vec![
            WorkspaceRecord::new("a", 0),
            WorkspaceRecord::new("b", 0),
        ]
        .into_iter()
        .collect();
        store.request_set_workspaces(broken);

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_window_requests_are_queued() {
        let store = store();
        store.request_show_edit_workspace_window(&"b".into());
        store.request_show_edit_workspace_window(&"gone".into());
        store.request_show_notifications_window();

        assert_eq!(
            store.take_window_requests(),
            vec![
                WindowRequest::EditWorkspace("b".into()),
                WindowRequest::Notifications
            ]
        );
        assert!(store.take_window_requests().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let handle = store.clone();
        handle.update(|snapshot| snapshot.general.is_loading = true);
        assert!(store.snapshot().general.is_loading);
    }

    #[test]
    fn test_from_json_rejects_two_active() {
        let json = r#"{ "workspaces": {
            "a": { "id": "a", "order": 0, "active": true },
            "b": { "id": "b", "order": 1, "active": true }
        } }"#;
        assert!(WorkspaceStore::from_json(json).is_err());
    }
}
