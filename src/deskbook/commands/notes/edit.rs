use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::DataStore;
use chrono::Utc;

use super::note_by_id;

/// New values for the three editable fields of a note.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NoteUpdate {
    pub fn new(id: NoteId, title: String, content: String, category: String) -> Self {
        Self {
            id,
            title,
            content,
            category,
        }
    }
}

/// Rewrites title, content and category of the note with the update's handle.
/// The note keeps its handle and its position in the store.
pub fn run<S: DataStore<Note>>(store: &mut S, update: NoteUpdate) -> Result<CmdResult> {
    let mut display_note = note_by_id(store, update.id)?;
    let position = display_note.index.0 - 1;

    let note = &mut display_note.note;
    note.title = update.title;
    note.content = update.content;
    note.category = update.category;
    note.updated_at = Utc::now();
    store.replace(position, note.clone())?;
    tracing::debug!(id = %note.id, position, "note edited");

    let message = CmdMessage::success(format!("Edited note: {}", note.title));
    let mut result = CmdResult::default().with_affected_notes(vec![display_note]);
    result.add_message(message);
    Ok(result)
}
