//! Prelude module for Gridline.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```ignore
//! use gridline::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Object System
// ============================================================================

pub use gridline_core::{ConnectionId, Object, ObjectId, Signal};

// ============================================================================
// Column and Sort Model
// ============================================================================

pub use crate::model::{Column, ColumnType, SortDirection, SortEntry, SortSpec};

// ============================================================================
// Header Widget and Gesture State
// ============================================================================

pub use crate::widget::events::{MouseButton, MousePressEvent, MouseReleaseEvent};
pub use crate::widget::{
    DragState, DragTracker, DragUpdate, PointerDragTracker, ResizeDrag, ResizeInfo, ResizeTracker,
};
pub use crate::widget::widgets::HeaderView;
