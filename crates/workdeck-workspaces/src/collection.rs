//! Workspace collection
//!
//! The host keeps workspaces as a map keyed by id. The sidebar needs them as
//! a list sorted by `order`; `to_ordered_list` is the only place that order
//! is derived.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;
use crate::workspace::{WorkspaceId, WorkspaceRecord};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceCollection {
    /// Insertion order is kept so equal ordinals sort deterministically
    records: IndexMap<WorkspaceId, WorkspaceRecord>,
}

impl WorkspaceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &WorkspaceId) -> Result<&WorkspaceRecord> {
        self.records
            .get(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &WorkspaceId) -> Option<&mut WorkspaceRecord> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &WorkspaceId) -> bool {
        self.records.contains_key(id)
    }

    /// Insert or replace a record, keyed by its own id
    pub fn insert(&mut self, record: WorkspaceRecord) -> Option<WorkspaceRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn remove(&mut self, id: &WorkspaceId) -> Option<WorkspaceRecord> {
        self.records.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkspaceRecord> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WorkspaceRecord> {
        self.records.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &WorkspaceId> {
        self.records.keys()
    }

    /// The record styled as active, if any
    pub fn active(&self) -> Option<&WorkspaceRecord> {
        self.records.values().find(|r| r.active)
    }

    pub fn active_id(&self) -> Option<&WorkspaceId> {
        self.active().map(|r| &r.id)
    }

    /// Records sorted ascending by `order`.
    ///
    /// The sort is stable, so duplicate ordinals keep insertion order. Gaps
    /// and duplicates are tolerated here; only writes restore density.
    pub fn ordered(&self) -> Vec<&WorkspaceRecord> {
        let mut list: Vec<&WorkspaceRecord> = self.records.values().collect();
        list.sort_by_key(|r| r.order);
        list
    }

    pub fn to_ordered_list(&self) -> Vec<WorkspaceRecord> {
        self.ordered().into_iter().cloned().collect()
    }

    /// Map keys in the same order `ordered` yields their records
    pub(crate) fn ordered_keys(&self) -> Vec<WorkspaceId> {
        let mut entries: Vec<(&WorkspaceId, &WorkspaceRecord)> = self.records.iter().collect();
        entries.sort_by_key(|(_, record)| record.order);
        entries.into_iter().map(|(key, _)| key.clone()).collect()
    }

    /// Give the record under each key its position in `keys` as its ordinal.
    ///
    /// `keys` must come from `ordered_keys` on this collection (or a clone),
    /// so every lookup hits.
    pub(crate) fn assign_positions(&mut self, keys: &[WorkspaceId]) {
        for (position, key) in keys.iter().enumerate() {
            if let Some(record) = self.records.get_mut(key) {
                record.order = position as i64;
            }
        }
    }

    /// Copy of the collection with ordinals rewritten to `0..N-1` in display order
    pub fn renumbered(&self) -> Self {
        let keys = self.ordered_keys();
        let mut next = self.clone();
        next.assign_positions(&keys);
        next
    }

    /// Check the invariants a committed collection must hold
    pub fn validate(&self) -> Result<()> {
        for (key, record) in &self.records {
            if key != &record.id {
                return Err(WorkspaceError::KeyMismatch {
                    key: key.to_string(),
                    id: record.id.to_string(),
                });
            }
        }

        let mut orders: Vec<i64> = self.records.values().map(|r| r.order).collect();
        orders.sort_unstable();
        for (expected, found) in orders.into_iter().enumerate() {
            let expected = expected as i64;
            if found != expected {
                return Err(WorkspaceError::NonContiguousOrder { expected, found });
            }
        }

        let active: Vec<&WorkspaceRecord> = self.records.values().filter(|r| r.active).collect();
        if active.len() > 1 {
            return Err(WorkspaceError::MultipleActive(
                active.iter().map(|r| r.id.to_string()).collect(),
            ));
        }
        if let Some(record) = active.first() {
            if record.hibernated {
                return Err(WorkspaceError::ActiveHibernated(record.id.to_string()));
            }
        }

        Ok(())
    }
}

impl FromIterator<WorkspaceRecord> for WorkspaceCollection {
    fn from_iter<I: IntoIterator<Item = WorkspaceRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
