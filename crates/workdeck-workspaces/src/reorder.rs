//! Drag-and-drop reordering
//!
//! A drop moves one entry of the rendered list (remove, then insert) and then
//! renumbers every workspace from its new position. The result is always a
//! full replacement collection; callers never patch individual records.

use crate::collection::WorkspaceCollection;
use crate::workspace::WorkspaceId;

/// Final index of the moved item after `move_item(items, _, to)` on a list of `len` items.
///
/// A negative `to` counts back from `len` (the length before removal). The
/// result is clamped into the shortened list the same way an array splice
/// clamps its start.
pub fn destination_index(len: usize, to: isize) -> usize {
    let start = if to < 0 { len as isize + to } else { to };
    let remaining = len.saturating_sub(1) as isize;
    if start < 0 {
        (remaining + start).max(0) as usize
    } else {
        start.min(remaining) as usize
    }
}

/// Move the item at `from` to `to`, returning a new list.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: isize) -> Vec<T> {
    debug_assert!(
        from < items.len(),
        "move source {from} out of range for {} items",
        items.len()
    );

    let mut next = items.to_vec();
    if from >= next.len() {
        return next;
    }

    let index = destination_index(next.len(), to);
    let item = next.remove(from);
    next.insert(index, item);
    next
}

/// Apply a drop to the collection's display order.
///
/// Returns `None` when the drop leaves the list unchanged, in which case
/// nothing should be written.
pub fn reorder(collection: &WorkspaceCollection, from: usize, to: isize) -> Option<WorkspaceCollection> {
    let keys: Vec<WorkspaceId> = collection.ordered_keys();
    let len = keys.len();

    debug_assert!(from < len, "reorder source {from} out of range for {len} workspaces");
    if from >= len {
        tracing::warn!(from, len, "Ignoring reorder with out-of-range source");
        return None;
    }

    if destination_index(len, to) == from {
        return None;
    }

    let moved = move_item(&keys, from, to);

    let mut next = collection.clone();
    next.assign_positions(&moved);

    tracing::debug!(
        workspace_id = %keys[from],
        from,
        to,
        "Reordered workspaces"
    );

    Some(next)
}
