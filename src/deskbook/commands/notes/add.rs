use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::model::Note;
use crate::store::DataStore;

/// Appends a note. Any field may be empty.
pub fn run<S: DataStore<Note>>(
    store: &mut S,
    title: String,
    content: String,
    category: String,
) -> Result<CmdResult> {
    let note = Note::new(title, content, category);
    store.append(note.clone())?;

    // Appended last, so its index is the new length
    let display_note = DisplayNote {
        index: DisplayIndex(store.len()),
        note,
    };
    tracing::debug!(id = %display_note.note.id, notes = store.len(), "note added");

    let message = CmdMessage::success(format!("Added new note: {}", display_note.note.title));
    let mut result = CmdResult::default().with_affected_notes(vec![display_note]);
    result.add_message(message);
    Ok(result)
}
