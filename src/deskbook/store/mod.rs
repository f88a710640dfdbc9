//! # Storage Layer
//!
//! This module defines the storage abstraction for deskbook. The [`DataStore`]
//! trait is generic over the record it holds, so the contact book and the note
//! book each get their own store and never share one.
//!
//! ## Design Rationale
//!
//! Storage sits behind a trait so the command layer only ever sees an ordered
//! sequence of records. Lookup rules (case-insensitive names, substring search,
//! note handles) live in `commands/`, not here.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store. Records live for the
//!   lifetime of the session and are dropped with it.
//!
//! ## Ordering
//!
//! Every store preserves insertion order. Positions are zero-based and shift
//! down by one after a [`DataStore::remove`]; [`DataStore::replace`] never
//! moves a record.

use crate::error::Result;

pub mod memory;

/// Abstract interface for an ordered record store.
pub trait DataStore<R> {
    /// Append a record at the end of the sequence
    fn append(&mut self, record: R) -> Result<()>;

    /// Snapshot of all records in insertion order
    fn records(&self) -> Result<Vec<R>>;

    /// Remove the record at `position` and return it
    fn remove(&mut self, position: usize) -> Result<R>;

    /// Overwrite the record at `position` in place
    fn replace(&mut self, position: usize, record: R) -> Result<()>;

    /// Number of records currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
