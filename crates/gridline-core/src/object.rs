//! Object identity for Gridline.
//!
//! Provides stable identifiers for widget-like objects. Gridline widgets do
//! not form an ownership tree; all that is needed is a cheap, unique, stable
//! handle so collaborators can refer to a widget without borrowing it.
//!
//! # Key Types
//!
//! - [`Object`] - Base trait that all identified objects implement
//! - [`ObjectId`] - Unique stable identifier for each object

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an object.
///
/// `ObjectId`s are allocated from a process-wide monotonic counter and are
/// never reused, so a stored id stays unambiguous even after the object it
/// named is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate the next unique object id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Convert the ObjectId to a raw u64 value.
    ///
    /// This is useful for interop with external systems that need a numeric
    /// ID. The raw value can be converted back using [`ObjectId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }

    /// Create an ObjectId from a raw u64 value.
    ///
    /// Note: this does not check whether any live object carries this id.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Base trait for objects with a stable identity.
pub trait Object {
    /// Returns this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ids_are_unique() {
        let a = ObjectId::next();
        let b = ObjectId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_id_raw_round_trip() {
        let id = ObjectId::next();
        assert_eq!(ObjectId::from_raw(id.as_raw()), id);
    }
}
