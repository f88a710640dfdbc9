use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;

use super::indexed_notes;

/// Lists every note in store order. Clients that only need the titles use
/// [`CmdResult::note_titles`].
pub fn run<S: DataStore<Note>>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(indexed_notes(store)?))
}
