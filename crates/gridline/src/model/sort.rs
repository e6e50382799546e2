//! Multi-column sort specification.
//!
//! A [`SortSpec`] is the ordered, name-keyed list encoding multi-column sort
//! priority and direction: array order is priority, and there is at most one
//! entry per distinct column name. Toggling a column walks it through the
//! three-state cycle none → ascending → descending → none; an entry that
//! lands back on none is pruned from the specification, never retained.
//!
//! Columns may replace the default cycle with a [`SortCycle`] strategy,
//! which receives the column's entry detached from the specification
//! together with mutable access to the rest of it, and signals removal by
//! omission (returning `None`).
//!
//! # Example
//!
//! ```
//! use gridline::model::{Column, SortDirection, SortSpec};
//!
//! let age = Column::new("age");
//! let mut spec = SortSpec::new();
//!
//! spec.toggle(&age);
//! assert_eq!(spec.find("age").unwrap().direction, Some(SortDirection::Ascending));
//!
//! spec.toggle(&age);
//! assert_eq!(spec.find("age").unwrap().direction, Some(SortDirection::Descending));
//!
//! spec.toggle(&age);
//! assert!(spec.is_empty());
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::column::{Column, ColumnType};

/// Comparator over two type-erased cell values.
///
/// Carried opaquely from [`Column::sort_fn`] into the column's sort entry;
/// the owning grid downcasts and applies it when ordering rows.
pub type SortComparator = Arc<dyn Fn(&dyn Any, &dyn Any) -> Ordering + Send + Sync>;

/// Custom sort-cycle strategy.
///
/// Invoked with the column's entry detached from the specification and
/// mutable access to the remaining entries. The strategy may rewrite the
/// entry, edit the rest of the specification, or both. Returning `Some`
/// keeps the entry (reinserted at its original priority); returning `None`
/// removes it.
pub type SortCycle = Arc<dyn Fn(SortEntry, &mut SortSpec) -> Option<SortEntry> + Send + Sync>;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

/// One column's entry in the sort specification.
///
/// `direction: None` means the entry exists but is not (yet) sorted, the
/// state a freshly created entry is in before its first cycle transition.
#[derive(Clone)]
pub struct SortEntry {
    /// The column this entry sorts by.
    pub name: String,
    /// The column's data type, carried for the owning grid's comparators.
    pub column_type: ColumnType,
    /// Injected comparator, if the column supplied one.
    pub comparator: Option<SortComparator>,
    /// Current direction; `None` while unset.
    pub direction: Option<SortDirection>,
}

impl SortEntry {
    /// Creates an unset entry for a name and type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            comparator: None,
            direction: None,
        }
    }

    /// Creates the entry a toggle starts from for `column`: name, type, and
    /// comparator taken from the column, direction unset.
    pub fn for_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            column_type: column.column_type,
            comparator: column.sort_fn.clone(),
            direction: None,
        }
    }

    /// Sets the direction.
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Whether the entry currently sorts ascending.
    pub fn is_ascending(&self) -> bool {
        self.direction == Some(SortDirection::Ascending)
    }

    /// Whether the entry currently sorts descending.
    pub fn is_descending(&self) -> bool {
        self.direction == Some(SortDirection::Descending)
    }
}

impl fmt::Debug for SortEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortEntry")
            .field("name", &self.name)
            .field("column_type", &self.column_type)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .field("direction", &self.direction)
            .finish()
    }
}

/// The ordered multi-column sort specification.
///
/// Entry order is sort priority. The manager maintains at most one entry per
/// distinct name and prunes entries whose toggle lands on unsorted.
#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries in priority order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Iterates the entries in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the specification is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry whose `name` matches.
    pub fn find(&self, name: &str) -> Option<&SortEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Returns the priority position of the entry for `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Appends an entry, replacing any existing entry with the same name in
    /// place so name uniqueness holds.
    pub fn push(&mut self, entry: SortEntry) {
        match self.position(&entry.name) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Removes the entry for `name` if present. Returns whether an entry was
    /// removed; absence is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&SortEntry) -> bool) {
        self.entries.retain(keep);
    }

    /// Cycles `column`'s entry through its sort transition.
    ///
    /// If no entry exists for the column, one is created with direction
    /// unset and appended (lowest priority). The entry is then detached and
    /// run through the column's cycle strategy: [`Column::toggle_sort`] if
    /// supplied, the default none → ascending → descending → none cycle
    /// otherwise. A surviving entry is reinserted at its original priority;
    /// a cycle that lands on unsorted prunes the entry, leaving the other
    /// columns' priorities untouched.
    pub fn toggle(&mut self, column: &Column) {
        let index = match self.position(&column.name) {
            Some(index) => index,
            None => {
                self.entries.push(SortEntry::for_column(column));
                self.entries.len() - 1
            }
        };

        let entry = self.entries.remove(index);
        let kept = match &column.toggle_sort {
            Some(cycle) => cycle(entry, self),
            None => default_cycle(entry),
        };

        if let Some(entry) = kept {
            // A custom cycle may have shrunk the specification; clamp the
            // reinsertion point.
            let at = index.min(self.entries.len());
            self.entries.insert(at, entry);
        }
    }
}

/// The default three-state transition: unset → ascending → descending →
/// unsorted, with the unsorted outcome signalled by omission.
fn default_cycle(mut entry: SortEntry) -> Option<SortEntry> {
    entry.direction = match entry.direction {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    };
    entry.direction.is_some().then_some(entry)
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortEntry;
    type IntoIter = std::slice::Iter<'a, SortEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// The owning grid may hand the header a single entry, a list, or nothing at
// all; each normalizes into a specification.

impl From<SortEntry> for SortSpec {
    fn from(entry: SortEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }
}

impl From<Vec<SortEntry>> for SortSpec {
    fn from(entries: Vec<SortEntry>) -> Self {
        Self { entries }
    }
}

impl<T: Into<SortSpec>> From<Option<T>> for SortSpec {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl FromIterator<SortEntry> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
