use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;

use super::indexed_notes;

/// Case-insensitive substring search over title and content.
///
/// Matches keep store order and their store display index. The category is not
/// searched. An empty query matches every note.
pub fn run<S: DataStore<Note>>(store: &S, query: &str) -> Result<CmdResult> {
    let needle = query.to_lowercase();
    let matches: Vec<_> = indexed_notes(store)?
        .into_iter()
        .filter(|dn| dn.note.matches_lowered(&needle))
        .collect();
    tracing::debug!(matches = matches.len(), notes = store.len(), "note search");

    let mut result = CmdResult::default().with_listed_notes(matches);
    result.add_message(CmdMessage::info("Search completed."));
    Ok(result)
}
