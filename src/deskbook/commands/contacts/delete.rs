use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{DeskbookError, Field, Result};
use crate::model::Contact;
use crate::store::DataStore;

use super::position_of;

/// Removes the first contact whose name matches `name`, ignoring case.
pub fn run<S: DataStore<Contact>>(store: &mut S, name: &str) -> Result<CmdResult> {
    require(Field::Name, name)?;

    let position = position_of(store, name)?.ok_or_else(|| DeskbookError::contact_not_found(name))?;
    let removed = store.remove(position)?;
    tracing::debug!(position, contacts = store.len(), "contact deleted");

    let mut result = CmdResult::default().with_affected_contacts(vec![removed]);
    result.add_message(CmdMessage::success("Contact deleted successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contacts::{add, find};
    use crate::error::RecordKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_matching_contact() {
        let mut store = StoreFixture::new()
            .with_contact("Ann", "1")
            .with_contact("Bob", "2")
            .contacts;

        let result = run(&mut store, "BOB").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_contacts[0].name, "Bob");
        assert_eq!(result.messages[0].content, "Contact deleted successfully.");

        assert!(matches!(
            find::run(&store, "bob"),
            Err(DeskbookError::NotFound {
                kind: RecordKind::Contact,
                ..
            })
        ));
    }

    #[test]
    fn deletes_only_first_duplicate() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Bob".into(), "1".into(), false).unwrap();
        add::run(&mut store, "bob".into(), "2".into(), true).unwrap();

        run(&mut store, "Bob").unwrap();
        assert_eq!(store.len(), 1);

        // The duplicate left behind by the overwrite is still there
        let found = find::run(&store, "bob").unwrap();
        assert_eq!(found.listed_contacts[0].phone_number, "2");
    }

    #[test]
    fn missing_contact_is_not_found() {
        let mut store = StoreFixture::new().with_contact("Ann", "1").contacts;
        let err = run(&mut store, "Zed").unwrap_err();
        assert!(matches!(err, DeskbookError::NotFound { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn partial_names_do_not_match() {
        let mut store = StoreFixture::new().with_contact("Annabel", "1").contacts;
        assert!(run(&mut store, "Ann").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = StoreFixture::new().with_contact("Ann", "1").contacts;
        let err = run(&mut store, "").unwrap_err();
        assert!(matches!(err, DeskbookError::EmptyField(Field::Name)));
        assert_eq!(store.len(), 1);
    }
}
