//! Drag gesture tracking for the sidebar list
//!
//! A press only turns into a sort once the pointer has travelled
//! `DRAG_ACTIVATION_DISTANCE`; shorter movements stay clicks.

use serde::{Deserialize, Serialize};

/// Logical pixels the pointer must move before a press becomes a drag
pub const DRAG_ACTIVATION_DISTANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Indices reported when a drag is dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEnd {
    pub old_index: usize,
    pub new_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    index: usize,
    origin: Point,
    activated: bool,
}

#[derive(Debug, Default)]
pub struct DragTracker {
    press: Option<Press>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down on the item at `index`
    pub fn press(&mut self, index: usize, at: Point) {
        self.press = Some(Press {
            index,
            origin: at,
            activated: false,
        });
    }

    /// Returns true once the press has become a drag
    pub fn moved(&mut self, to: Point) -> bool {
        match self.press.as_mut() {
            Some(press) => {
                if !press.activated && press.origin.distance_to(to) >= DRAG_ACTIVATION_DISTANCE {
                    press.activated = true;
                    tracing::trace!(index = press.index, "Drag started");
                }
                press.activated
            }
            None => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.press.map(|p| p.activated).unwrap_or(false)
    }

    /// Pointer released over `drop_index`.
    ///
    /// `None` for a plain click, a release without a press, or a drop back
    /// onto the starting slot.
    pub fn release(&mut self, drop_index: usize) -> Option<SortEnd> {
        let press = self.press.take()?;
        if !press.activated || press.index == drop_index {
            return None;
        }

        Some(SortEnd {
            old_index: press.index,
            new_index: drop_index,
        })
    }

    /// Abandon the gesture (pointer left the window, escape pressed)
    pub fn cancel(&mut self) {
        self.press = None;
    }
}
