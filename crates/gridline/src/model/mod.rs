//! Column and sort model for Gridline.
//!
//! This module holds the data the header controller operates over, separated
//! from display logic:
//!
//! - [`Column`]: one column's declaration (identity, type, interaction flags)
//! - [`SortSpec`]: the ordered multi-column sort specification
//! - Index translation between the visible column subset and the full
//!   declared column list, always by `name` identity
//!
//! # Example
//!
//! ```
//! use gridline::model::{Column, SortSpec};
//!
//! let title = Column::new("title").with_title("Title");
//! let mut spec = SortSpec::new();
//! spec.toggle(&title);
//! assert_eq!(spec.len(), 1);
//! ```

mod column;
mod sort;

pub use column::{Column, ColumnType, index_of_name, visible_to_full_index};
pub use sort::{SortComparator, SortCycle, SortDirection, SortEntry, SortSpec};
