//! Widget system for Gridline.
//!
//! This module provides the interaction foundation for the header widgets:
//!
//! - Pointer [`events`](crate::widget::events) with the accepted/claimed
//!   flag the dispatcher threads through its handlers
//! - The drag-to-reorder state record and tracking primitives
//!   ([`column_drag`](crate::widget::column_drag))
//! - The resize state record and tracking primitive
//!   ([`column_resize`](crate::widget::column_resize))
//! - The concrete widgets ([`widgets`](crate::widget::widgets)), currently
//!   [`HeaderView`](crate::widget::widgets::HeaderView)
//!
//! # Overview
//!
//! Gridline widgets are toolkit-agnostic: the host resolves raw platform
//! input to header cells and feeds the widget small event values; the
//! widget runs its state machines synchronously and reports committed
//! transitions through signals. Nothing here paints; the host's renderer
//! reads the widget's presentation state (`cell_shift`, hover, gesture
//! flags) to draw cells.

pub mod column_drag;
pub mod column_resize;
pub mod events;
pub mod widgets;

pub use column_drag::{
    DragEnd, DragOrigin, DragState, DragTracker, DragUpdate, PointerDragHandle, PointerDragTracker,
};
pub use column_resize::{
    MINIMUM_COLUMN_WIDTH, ResizeDrag, ResizeHandle, ResizeInfo, ResizeState, ResizeTracker,
};
pub use events::{EventBase, MouseButton, MousePressEvent, MouseReleaseEvent};
pub use widgets::HeaderView;
