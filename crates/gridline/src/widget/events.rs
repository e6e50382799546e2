//! Pointer events consumed by the header's interaction dispatcher.
//!
//! Gridline is UI-toolkit-agnostic: the host resolves raw platform input
//! down to "press/release at this position on this header cell" and hands
//! the header these small event values. Positions are one-dimensional (the
//! offset along the header's axis in widget-local coordinates) because that
//! is all the gesture coordinators consume.
//!
//! # Event claiming
//!
//! [`EventBase`] carries an accepted flag. A handler that consumes an event
//! calls [`EventBase::accept`]; later handlers fed the *same* event value
//! see it as claimed and stand down. This is how a resize press keeps the
//! generic cell press from also arming a reorder gesture, and how a
//! concluded resize or drag keeps the pending release from toggling sort.
//! It is a structured replacement for mutating marker fields onto a
//! platform event object.

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all header events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position along the header axis, in widget-local coordinates.
    pub local_x: f32,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_x: f32) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_x,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position along the header axis, in widget-local coordinates.
    pub local_x: f32,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_x: f32) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_starts_unaccepted() {
        let event = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(!event.base.is_accepted());
    }

    #[test]
    fn test_accept_ignore_round_trip() {
        let mut event = MouseReleaseEvent::new(MouseButton::Left, 0.0);

        event.base.accept();
        assert!(event.base.is_accepted());

        event.base.ignore();
        assert!(!event.base.is_accepted());
    }
}
