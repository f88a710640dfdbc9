use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::DataStore;

use super::note_by_id;

pub fn run<S: DataStore<Note>>(store: &S, id: NoteId) -> Result<CmdResult> {
    let display_note = note_by_id(store, id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Displayed details for: {}",
        display_note.note.title
    )));
    Ok(result.with_listed_notes(vec![display_note]))
}
