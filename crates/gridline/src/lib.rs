//! Gridline - the interactive column-header toolkit for data grids.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! Gridline owns the interaction state machines of a grid's header row:
//! click-to-sort with multi-column specifications, drag-to-reorder with a
//! live shift preview, and column resizing. It stays agnostic of the host
//! UI toolkit: rendering and layout remain with the host, which feeds the
//! header resolved pointer events and reads back its presentation state.
//!
//! # Example
//!
//! ```
//! use gridline::model::Column;
//! use gridline::widget::widgets::HeaderView;
//!
//! let header = HeaderView::new()
//!     .with_all_columns(vec![Column::new("id"), Column::new("name")])
//!     .with_columns(vec![Column::new("id"), Column::new("name")])
//!     .with_reorder_enabled(true);
//!
//! header.column_dropped.connect(|&(drag, drop)| {
//!     println!("move column {} to {}", drag, drop);
//! });
//! ```

pub use gridline_core::*;

pub mod model;
pub mod prelude;
pub mod widget;
