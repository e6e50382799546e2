//! Column declarations and name-identity index translation.
//!
//! A [`Column`] describes one column of the owning grid: its unique `name`,
//! display title, data type, and which interactions it participates in
//! (sorting, resizing, drag-reorder). Columns are owned by the grid and
//! read-only to the header; the header receives two ordered lists of them:
//! the currently *visible* columns (in render order) and *all* declared
//! columns. The two lists may diverge in both length and order, so every
//! translation between them goes through column `name` identity, never raw
//! position.

use std::fmt;

use super::sort::{SortComparator, SortCycle};

/// The data type a column holds.
///
/// Carried opaquely into sort entries so the owning grid can pick a
/// type-appropriate comparison when no explicit comparator is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// Free-form text.
    #[default]
    Text,
    /// Numeric values.
    Number,
    /// Date/time values.
    Date,
    /// Boolean flags.
    Boolean,
}

/// Declaration of a single grid column.
///
/// Columns are identified by `name`, which must be unique across the grid's
/// declared columns. Uniqueness is a configuration-time obligation of the
/// caller; the header does not defend against duplicates.
///
/// # Example
///
/// ```
/// use gridline::model::{Column, ColumnType};
///
/// let column = Column::new("age")
///     .with_title("Age")
///     .with_column_type(ColumnType::Number)
///     .with_resizable(false);
/// assert!(column.sortable);
/// assert!(!column.resizable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique identifier within the grid.
    pub name: String,

    /// Human-readable header text.
    pub title: String,

    /// The data type of the column's cells.
    pub column_type: ColumnType,

    /// Whether clicking the header cycles this column's sort direction.
    pub sortable: bool,

    /// Whether the column exposes a resize handle.
    pub resizable: bool,

    /// Whether the column can be lifted and reordered by dragging.
    pub draggable: bool,

    /// Injected comparator, carried into the column's sort entry.
    ///
    /// The header never invokes it; the owning grid applies it when sorting
    /// rows.
    pub sort_fn: Option<SortComparator>,

    /// Custom sort-cycle strategy replacing the default
    /// none → ascending → descending → none transition.
    pub toggle_sort: Option<SortCycle>,
}

impl Column {
    /// Creates a column with the given unique name.
    ///
    /// The title defaults to the name; all interactions are enabled.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            column_type: ColumnType::default(),
            sortable: true,
            resizable: true,
            draggable: true,
            sort_fn: None,
            toggle_sort: None,
        }
    }

    /// Sets the header text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the column's data type.
    pub fn with_column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Enables or disables sort toggling for this column.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enables or disables the resize handle for this column.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Enables or disables drag-reorder for this column.
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Injects a comparator carried into this column's sort entry.
    pub fn with_sort_fn(mut self, sort_fn: SortComparator) -> Self {
        self.sort_fn = Some(sort_fn);
        self
    }

    /// Replaces the default sort cycle with a custom strategy.
    pub fn with_toggle_sort(mut self, toggle_sort: SortCycle) -> Self {
        self.toggle_sort = Some(toggle_sort);
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("column_type", &self.column_type)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("draggable", &self.draggable)
            .field("sort_fn", &self.sort_fn.as_ref().map(|_| ".."))
            .field("toggle_sort", &self.toggle_sort.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Returns the first index in `columns` whose `name` matches.
pub fn index_of_name(columns: &[Column], name: &str) -> Option<usize> {
    columns.iter().position(|column| column.name == name)
}

/// Translates an index within the visible column subset to the
/// corresponding index within the full declared column list.
///
/// Resolution goes through the column's `name`: the visible column at
/// `visible_index` is looked up, then its name is searched in `all`.
/// Returns `None` if `visible_index` is out of bounds or the name is absent
/// from `all`. That configuration should not occur, but must not panic;
/// callers check before dispatching a reorder command.
pub fn visible_to_full_index(
    visible: &[Column],
    all: &[Column],
    visible_index: usize,
) -> Option<usize> {
    let column = visible.get(visible_index)?;
    index_of_name(all, &column.name)
}
