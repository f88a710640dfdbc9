//! Note book operations.
//!
//! Notes are referenced by their [`NoteId`] handle. Clients that show numbered
//! lists turn a typed number into a handle with [`resolve`] first.

use crate::error::{DeskbookError, Result};
use crate::index::{index_notes, DisplayIndex, DisplayNote};
use crate::model::{Note, NoteId};
use crate::store::DataStore;

pub mod add;
pub mod edit;
pub mod list;
pub mod search;
pub mod view;

/// Every note paired with its display index, in store order.
pub fn indexed_notes<S: DataStore<Note>>(store: &S) -> Result<Vec<DisplayNote>> {
    Ok(index_notes(store.records()?))
}

/// The note with handle `id`, together with its current display index.
pub fn note_by_id<S: DataStore<Note>>(store: &S, id: NoteId) -> Result<DisplayNote> {
    indexed_notes(store)?
        .into_iter()
        .find(|dn| dn.note.id == id)
        .ok_or_else(|| DeskbookError::note_not_found(id.to_string()))
}

/// Maps a display index to the handle of the note currently at that position.
pub fn resolve<S: DataStore<Note>>(store: &S, index: DisplayIndex) -> Result<NoteId> {
    let notes = store.records()?;
    index
        .position()
        .and_then(|position| notes.get(position))
        .map(|note| note.id)
        .ok_or_else(|| DeskbookError::note_not_found(index.to_string()))
}
