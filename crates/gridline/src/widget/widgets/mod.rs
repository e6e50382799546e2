//! Concrete widgets built on the Gridline interaction foundation.

mod header_view;

pub use header_view::HeaderView;
