//! # Display Indexes
//!
//! Notes have no key field, and their handles ([`NoteId`]) are not meant to be
//! typed by a person. List views therefore number notes by their 1-based
//! position in the store, and a client hands such a number back to the API to
//! get the note's handle.
//!
//! A display index is only a view of the store at one moment: it is resolved to
//! a handle before any operation runs, so edits always target a note by
//! identity, even when two notes share a title.

use crate::model::{Note, NoteId};
use serde::Serialize;
use std::str::FromStr;

/// A user-facing, 1-based position of a note in its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// Zero-based store position, or `None` for index 0.
    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayNote {
    pub index: DisplayIndex,
    pub note: Note,
}

impl DisplayNote {
    pub fn id(&self) -> NoteId {
        self.note.id
    }
}

/// Pairs every note with its display index, keeping store order.
pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: DisplayIndex(i + 1),
            note,
        })
        .collect()
}
