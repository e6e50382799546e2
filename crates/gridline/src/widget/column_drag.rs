//! Column drag-to-reorder state and pointer tracking.
//!
//! This module provides:
//!
//! - [`DragState`]: the transient record of one reorder gesture, owned by
//!   the header's reorder coordinator
//! - [`DragUpdate`] / [`DragEnd`]: the events a tracking primitive feeds
//!   into the coordinator
//! - [`DragTracker`]: the narrow interface tracking primitives implement,
//!   with [`PointerDragTracker`] as the provided implementation
//!
//! The header treats trackers as black boxes: it consumes their output
//! events and never reaches into their internals, so a host toolkit can
//! substitute its own tracking (snap thresholds, auto-scroll, animation)
//! without touching the coordinator.
//!
//! # Wiring
//!
//! ```ignore
//! use gridline::widget::{DragOrigin, DragTracker, PointerDragTracker};
//!
//! let tracker = PointerDragTracker::new();
//! let mut handle = tracker.start(DragOrigin {
//!     visible_index: 0,
//!     press_x: 40.0,
//!     column_widths: widths,
//! });
//!
//! // On every pointer move while the button is held:
//! header.update_column_drag(tracker.pointer_moved(&mut handle, x));
//!
//! // On pointer release:
//! let _ = tracker.pointer_released(&mut handle, x);
//! header.end_column_drag(Some(&mut release_event));
//! ```

use std::collections::HashSet;

use crate::model::Column;

/// Transient state of one drag-to-reorder gesture.
///
/// Owned exclusively by the header's reorder coordinator; its lifetime is a
/// single gesture. `DragState::default()` is the neutral baseline the state
/// returns to on gesture start, gesture end (commit or cancel), and
/// construction.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a reorder gesture is live (first movement seen).
    pub dragging: bool,
    /// The lifted column.
    pub drag_column: Option<Column>,
    /// The lifted column's visible index at gesture start.
    pub drag_column_index: Option<usize>,
    /// Live horizontal offset of the lifted column's cell.
    pub drag_left: Option<f32>,
    /// Current candidate drop slot (visible index), if any.
    pub drop_index: Option<usize>,
    /// Visible indexes whose cells are displaced to preview the reorder.
    pub shift_indexes: Option<HashSet<usize>>,
    /// Signed displacement applied to the shifted cells.
    pub shift_size: Option<f32>,
}

impl DragState {
    /// The neutral baseline.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Replaces the live fields verbatim from a tracker update and marks the
    /// gesture as dragging. The tracker is trusted to produce indexes within
    /// the visible range.
    pub fn apply(&mut self, update: DragUpdate) {
        self.dragging = true;
        self.drag_left = Some(update.drag_left);
        self.drop_index = update.drop_index;
        self.shift_indexes = Some(update.shift_indexes);
        self.shift_size = Some(update.shift_size);
    }
}

/// Live output of a reorder tracking primitive, delivered on every pointer
/// movement during a gesture.
#[derive(Debug, Clone, Default)]
pub struct DragUpdate {
    /// Horizontal offset of the lifted column's cell from its origin.
    pub drag_left: f32,
    /// Candidate drop slot (visible index), if the pointer is over one.
    pub drop_index: Option<usize>,
    /// Visible indexes displaced between the origin and the candidate slot.
    pub shift_indexes: HashSet<usize>,
    /// Signed displacement for the shifted cells.
    pub shift_size: f32,
}

/// Terminal output of a reorder tracking primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// The gesture ended over a valid slot.
    Commit {
        /// The final candidate drop slot (visible index).
        drop_index: usize,
    },
    /// The gesture ended without a valid target.
    Cancel,
}

/// Where a reorder gesture started.
#[derive(Debug, Clone)]
pub struct DragOrigin {
    /// Visible index of the lifted column.
    pub visible_index: usize,
    /// Pointer position at press, along the header axis.
    pub press_x: f32,
    /// Widths of the visible columns, in visible order.
    pub column_widths: Vec<f32>,
}

/// Narrow interface for reorder tracking primitives.
///
/// A tracker turns raw pointer movement into [`DragUpdate`] events and the
/// final [`DragEnd`]. The coordinator only ever consumes these outputs.
pub trait DragTracker {
    /// Per-gesture tracking state.
    type Handle;

    /// Begins tracking a gesture from `origin`.
    fn start(&self, origin: DragOrigin) -> Self::Handle;

    /// Translates a pointer position into the current live update.
    fn pointer_moved(&self, handle: &mut Self::Handle, x: f32) -> DragUpdate;

    /// Concludes the gesture at the released pointer position.
    fn pointer_released(&self, handle: &mut Self::Handle, x: f32) -> DragEnd;
}

/// Default tracking primitive deriving slot geometry from column widths.
///
/// The candidate drop slot is the slot containing the lifted cell's
/// midpoint; the displaced set is every slot between the origin and the
/// candidate; the shift size is the lifted column's width, negative when
/// dragging rightward (displaced cells slide left) and positive when
/// dragging leftward. A release with the pointer outside the header bounds
/// cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerDragTracker;

impl PointerDragTracker {
    /// Creates the default tracker.
    pub fn new() -> Self {
        Self
    }
}

/// Tracking state for one [`PointerDragTracker`] gesture.
#[derive(Debug, Clone)]
pub struct PointerDragHandle {
    origin: DragOrigin,
    /// Left edge of each visible slot, cumulative over the widths.
    slot_positions: Vec<f32>,
    /// Total width of the header row.
    total_width: f32,
    moved: bool,
}

impl PointerDragHandle {
    /// The slot whose span contains the lifted cell's midpoint at pointer
    /// position `x`, clamped to the header bounds.
    fn candidate_slot(&self, x: f32) -> usize {
        let index = self.origin.visible_index;
        let drag_left = x - self.origin.press_x;
        let width = self.origin.column_widths[index];
        let center = self.slot_positions[index] + drag_left + width / 2.0;

        if center < 0.0 {
            return 0;
        }
        for (slot, &left) in self.slot_positions.iter().enumerate() {
            if center >= left && center < left + self.origin.column_widths[slot] {
                return slot;
            }
        }
        self.origin.column_widths.len() - 1
    }
}

impl DragTracker for PointerDragTracker {
    type Handle = PointerDragHandle;

    fn start(&self, origin: DragOrigin) -> Self::Handle {
        debug_assert!(origin.visible_index < origin.column_widths.len());

        let mut slot_positions = Vec::with_capacity(origin.column_widths.len());
        let mut left = 0.0;
        for &width in &origin.column_widths {
            slot_positions.push(left);
            left += width;
        }

        PointerDragHandle {
            origin,
            slot_positions,
            total_width: left,
            moved: false,
        }
    }

    fn pointer_moved(&self, handle: &mut Self::Handle, x: f32) -> DragUpdate {
        handle.moved = true;

        let index = handle.origin.visible_index;
        let width = handle.origin.column_widths[index];
        let drag_left = x - handle.origin.press_x;
        let candidate = handle.candidate_slot(x);

        let (shift_indexes, shift_size) = if candidate > index {
            // Dragging rightward: the passed-over cells slide left.
            ((index + 1..=candidate).collect(), -width)
        } else if candidate < index {
            // Dragging leftward: the passed-over cells slide right.
            ((candidate..index).collect(), width)
        } else {
            (HashSet::new(), 0.0)
        };

        DragUpdate {
            drag_left,
            drop_index: Some(candidate),
            shift_indexes,
            shift_size,
        }
    }

    fn pointer_released(&self, handle: &mut Self::Handle, x: f32) -> DragEnd {
        if !handle.moved || x < 0.0 || x > handle.total_width {
            return DragEnd::Cancel;
        }
        DragEnd::Commit {
            drop_index: handle.candidate_slot(x),
        }
    }
}
