//! Application state management
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use workdeck_core::{
    AppSnapshot, CoreError, DragTracker, Point, Result, Shell, ShellConfig, SidebarEvent,
    WorkspaceStore,
};

/// Thread-safe application state wrapper
pub struct AppState {
    shell: Arc<RwLock<Option<Shell<WorkspaceStore>>>>,
    /// Pointer gesture in progress on the sidebar list
    drag: Arc<Mutex<DragTracker>>,
}

impl AppState {
    pub fn new(config: ShellConfig, snapshot: AppSnapshot) -> Result<Self> {
        snapshot.workspaces.validate()?;
        let shell = Shell::new(config, WorkspaceStore::new(snapshot));

        Ok(Self {
            shell: Arc::new(RwLock::new(Some(shell))),
            drag: Arc::new(Mutex::new(DragTracker::new())),
        })
    }

    /// Build from a host snapshot serialized as JSON
    pub fn from_json(config: ShellConfig, snapshot_json: &str) -> Result<Self> {
        Self::new(config, AppSnapshot::from_json(snapshot_json)?)
    }

    /// Restore a selection when the saved state has none
    pub fn initialize(&self) -> Result<()> {
        self.with_shell(|shell| {
            let store = shell.controller();
            let snapshot = store.snapshot();
            if snapshot.workspaces.active().is_none() {
                if let Some(first) = snapshot.workspaces.ordered().first() {
                    store.set_active_workspace(&first.id)?;
                }
            }

            tracing::info!(
                workspace_count = snapshot.workspaces.len(),
                platform = ?shell.config().platform,
                "Initialized shell"
            );
            Ok(())
        })
    }

    pub fn with_shell<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Shell<WorkspaceStore>) -> Result<T>,
    {
        let guard = self.shell.read();
        match guard.as_ref() {
            Some(shell) => f(shell),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn snapshot(&self) -> Result<AppSnapshot> {
        self.with_shell(|shell| Ok(shell.controller().snapshot()))
    }

    /// Dispatch against a fresh snapshot
    pub fn dispatch(&self, event: SidebarEvent) -> Result<bool> {
        self.with_shell(|shell| {
            let snapshot = shell.controller().snapshot();
            Ok(shell.dispatch(&snapshot, event))
        })
    }

    pub fn press_drag(&self, index: usize, at: Point) {
        self.drag.lock().press(index, at);
    }

    /// Returns true once the press has become a drag
    pub fn move_drag(&self, to: Point) -> bool {
        self.drag.lock().moved(to)
    }

    /// Finish the gesture and dispatch the drop, if it was one
    pub fn release_drag(&self, drop_index: usize) -> Result<bool> {
        let sort_end = self.drag.lock().release(drop_index);
        match sort_end {
            Some(sort_end) => self.dispatch(SidebarEvent::SortEnded(sort_end)),
            None => Ok(false),
        }
    }

    pub fn cancel_drag(&self) {
        self.drag.lock().cancel();
    }

    /// Drop the shell; later calls fail with `NotInitialized`
    pub fn shutdown(&self) {
        self.shell.write().take();
        tracing::info!("Shell shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workdeck_core::{Platform, WindowMode};

    fn config() -> ShellConfig {
        ShellConfig::new(Platform::Linux, WindowMode::Window)
    }

    #[test]
    fn test_initialize_selects_first_workspace() {
        let json = r#"{ "workspaces": {
            "b": { "id": "b", "order": 1 },
            "a": { "id": "a", "order": 0 }
        } }"#;
        let state = AppState::from_json(config(), json).unwrap();
        state.initialize().unwrap();

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.workspaces.active_id().map(|id| id.as_str()), Some("a"));
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let json = r#"{ "workspaces": { "a": { "id": "a", "order": 4 } } }"#;
        assert!(matches!(
            AppState::from_json(config(), json),
            Err(CoreError::Workspace(_))
        ));
    }

    #[test]
    fn test_drag_gesture_reorders_once_activated() {
        let json = r#"{ "workspaces": {
            "a": { "id": "a", "order": 0, "active": true },
            "b": { "id": "b", "order": 1 },
            "c": { "id": "c", "order": 2 }
        } }"#;
        let state = AppState::from_json(config(), json).unwrap();

        // Short movement stays a click
        state.press_drag(0, Point::new(0.0, 0.0));
        assert!(!state.move_drag(Point::new(0.0, 4.0)));
        assert!(!state.release_drag(2).unwrap());

        state.press_drag(0, Point::new(0.0, 0.0));
        assert!(state.move_drag(Point::new(0.0, 80.0)));
        assert!(state.release_drag(2).unwrap());

        let snapshot = state.snapshot().unwrap();
        let ids: Vec<String> = snapshot
            .workspaces
            .to_ordered_list()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_shutdown_reports_not_initialized() {
        let state = AppState::new(config(), AppSnapshot::default()).unwrap();
        state.shutdown();
        assert!(matches!(state.snapshot(), Err(CoreError::NotInitialized)));
    }
}
