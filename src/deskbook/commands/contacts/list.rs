use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub const NO_CONTACTS: &str = "No contacts found.";

/// Lists every contact in insertion order.
///
/// An empty book is not an error: the result carries no contacts and a
/// [`NO_CONTACTS`] info message instead.
pub fn run<S: DataStore<Contact>>(store: &S) -> Result<CmdResult> {
    let contacts = store.records()?;
    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info(NO_CONTACTS));
    }
    Ok(result.with_listed_contacts(contacts))
}
