//! Column resize state and pointer tracking.
//!
//! The resize gesture has a linear lifecycle (start, zero or more deltas,
//! drop) with no branching: the header forwards each descriptor to the
//! owning grid unchanged and only bookends the gesture with its
//! [`ResizeState`] flag. [`ResizeTracker`] is the provided tracking
//! primitive, turning pointer positions into successive [`ResizeDrag`]
//! descriptors with a minimum-width clamp.

/// Minimum width a column can be resized down to.
pub const MINIMUM_COLUMN_WIDTH: f32 = 20.0;

/// Whether a resize gesture is in progress.
///
/// Owned exclusively by the header's resize coordinator; mutually exclusive
/// with a reorder gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeState {
    /// True between resize start and drop.
    pub resizing: bool,
}

/// Descriptor of an in-flight column resize, forwarded to the owning grid
/// on start, on every delta, and on drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDrag {
    /// Visible index of the column being resized.
    pub visible_index: usize,
    /// Name of the column being resized.
    pub name: String,
    /// The column's width when the gesture started.
    pub start_size: f32,
    /// The current (clamped) width.
    pub size: f32,
    /// Pointer travel since the gesture started.
    pub delta: f32,
}

/// Committed outcome of a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeInfo {
    /// The final column width.
    pub size: f32,
    /// Total pointer travel over the gesture.
    pub delta: f32,
}

/// Tracking state for one [`ResizeTracker`] gesture.
#[derive(Debug, Clone)]
pub struct ResizeHandle {
    visible_index: usize,
    name: String,
    start_size: f32,
    press_x: f32,
}

/// Default resize tracking primitive.
///
/// Derives the new width from pointer travel, clamped to a minimum so a
/// column can never be dragged out of existence.
#[derive(Debug, Clone, Copy)]
pub struct ResizeTracker {
    minimum_size: f32,
}

impl Default for ResizeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeTracker {
    /// Creates a tracker with the default minimum width.
    pub fn new() -> Self {
        Self {
            minimum_size: MINIMUM_COLUMN_WIDTH,
        }
    }

    /// Creates a tracker with a custom minimum width.
    pub fn with_minimum_size(minimum_size: f32) -> Self {
        Self {
            minimum_size: minimum_size.max(1.0),
        }
    }

    /// The minimum width the tracker clamps to.
    pub fn minimum_size(&self) -> f32 {
        self.minimum_size
    }

    /// Begins tracking a resize of the column at `visible_index`.
    pub fn start(
        &self,
        visible_index: usize,
        name: impl Into<String>,
        start_size: f32,
        press_x: f32,
    ) -> ResizeHandle {
        ResizeHandle {
            visible_index,
            name: name.into(),
            start_size,
            press_x,
        }
    }

    /// The descriptor for the gesture's starting state.
    pub fn start_drag(&self, handle: &ResizeHandle) -> ResizeDrag {
        self.drag_at(handle, handle.press_x)
    }

    /// Translates a pointer position into the current descriptor.
    pub fn pointer_moved(&self, handle: &ResizeHandle, x: f32) -> ResizeDrag {
        self.drag_at(handle, x)
    }

    /// Concludes the gesture, yielding the final descriptor and the
    /// committed outcome.
    pub fn pointer_released(&self, handle: &ResizeHandle, x: f32) -> (ResizeDrag, ResizeInfo) {
        let drag = self.drag_at(handle, x);
        let info = ResizeInfo {
            size: drag.size,
            delta: drag.delta,
        };
        (drag, info)
    }

    fn drag_at(&self, handle: &ResizeHandle, x: f32) -> ResizeDrag {
        let delta = x - handle.press_x;
        let size = (handle.start_size + delta).max(self.minimum_size);
        ResizeDrag {
            visible_index: handle.visible_index,
            name: handle.name.clone(),
            start_size: handle.start_size,
            size,
            delta,
        }
    }
}
