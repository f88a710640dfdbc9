use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{DeskbookError, Field, Result};
use crate::model::Contact;
use crate::store::DataStore;

/// Returns the first contact whose name matches `name`, ignoring case.
pub fn run<S: DataStore<Contact>>(store: &S, name: &str) -> Result<CmdResult> {
    require(Field::Name, name)?;

    let contact = store
        .records()?
        .into_iter()
        .find(|contact| contact.name_matches(name))
        .ok_or_else(|| DeskbookError::contact_not_found(name))?;

    let mut result = CmdResult::default().with_listed_contacts(vec![contact]);
    result.add_message(CmdMessage::info("Contact found:"));
    Ok(result)
}
