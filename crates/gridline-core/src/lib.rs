//! Core systems for Gridline.
//!
//! This crate provides the foundational components of the Gridline grid
//! widget toolkit:
//!
//! - **Signal/Slot System**: Type-safe inter-object communication with
//!   synchronous, same-thread delivery
//! - **Object Identity**: Stable unique identifiers for widget-like objects
//!
//! # Signal/Slot Example
//!
//! ```
//! use gridline_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod object;
pub mod signal;

pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
