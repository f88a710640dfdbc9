use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{DeskbookError, Field, Result};
use crate::model::Contact;
use crate::store::DataStore;

use super::position_of;

/// Adds a contact.
///
/// When a contact with the same name (ignoring case) already exists, the caller
/// must pass the user's answer in `overwrite`. A refusal leaves the store alone
/// and yields [`DeskbookError::Declined`]. An acceptance appends the new contact
/// and keeps the old one, so both names coexist afterwards.
pub fn run<S: DataStore<Contact>>(
    store: &mut S,
    name: String,
    phone_number: String,
    overwrite: bool,
) -> Result<CmdResult> {
    require(Field::Name, &name)?;
    require(Field::PhoneNumber, &phone_number)?;

    let existing = position_of(store, &name)?;
    if existing.is_some() && !overwrite {
        tracing::debug!(contacts = store.len(), "contact add declined");
        return Err(DeskbookError::Declined);
    }

    let contact = Contact::new(name, phone_number);
    store.append(contact.clone())?;
    tracing::debug!(
        contacts = store.len(),
        overwrite = existing.is_some(),
        "contact added"
    );

    let mut result = CmdResult::default().with_affected_contacts(vec![contact]);
    result.add_message(CmdMessage::success("Contact added successfully."));
    if existing.is_some() {
        result.add_message(CmdMessage::warning(
            "The earlier contact with this name was kept as well.",
        ));
    }
    Ok(result)
}

/// Whether a contact named `name` (ignoring case) is already stored.
///
/// Clients call this before asking for the rest of the record so they can put
/// the overwrite question to the user first.
pub fn exists<S: DataStore<Contact>>(store: &S, name: &str) -> Result<bool> {
    require(Field::Name, name)?;
    Ok(position_of(store, name)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contacts::find;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_contact_at_end() {
        let mut store = StoreFixture::new().with_contacts(2).contacts;
        let result = run(&mut store, "Bob".into(), "555-1111".into(), false).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.records().unwrap()[2].name, "Bob");
        assert_eq!(result.affected_contacts[0].phone_number, "555-1111");
        assert_eq!(result.messages[0].content, "Contact added successfully.");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn added_contact_is_findable() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Carol".into(), "555-2222".into(), false).unwrap();

        let found = find::run(&store, "carol").unwrap();
        assert_eq!(found.listed_contacts[0].name, "Carol");
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ".into(), "555".into(), false).unwrap_err();
        assert!(matches!(err, DeskbookError::EmptyField(Field::Name)));
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_empty_phone_number() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Bob".into(), "\t".into(), false).unwrap_err();
        assert!(matches!(err, DeskbookError::EmptyField(Field::PhoneNumber)));
        assert!(store.is_empty());
    }

    #[test]
    fn name_is_checked_before_phone_number() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "".into(), "".into(), false).unwrap_err();
        assert!(matches!(err, DeskbookError::EmptyField(Field::Name)));
    }

    #[test]
    fn declined_overwrite_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Bob".into(), "555-1111".into(), false).unwrap();

        let err = run(&mut store, "bob".into(), "555-2222".into(), false).unwrap_err();
        assert!(matches!(err, DeskbookError::Declined));
        assert_eq!(store.len(), 1);

        let found = find::run(&store, "BOB").unwrap();
        assert_eq!(found.listed_contacts[0].phone_number, "555-1111");
    }

    #[test]
    fn confirmed_overwrite_keeps_both_records() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Bob".into(), "555-1111".into(), false).unwrap();
        let result = run(&mut store, "BOB".into(), "555-2222".into(), true).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);

        // The first match still wins lookups
        let found = find::run(&store, "bob").unwrap();
        assert_eq!(found.listed_contacts[0].phone_number, "555-1111");
    }

    #[test]
    fn overwrite_flag_without_conflict_just_adds() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Dan".into(), "1".into(), true).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn values_are_stored_as_entered() {
        let mut store = InMemoryStore::new();
        run(&mut store, " Eve ".into(), " 555 ".into(), false).unwrap();
        let contact = &store.records().unwrap()[0];
        assert_eq!(contact.name, " Eve ");
        assert_eq!(contact.phone_number, " 555 ");
    }

    #[test]
    fn exists_ignores_case() {
        let store = StoreFixture::new().with_contact("Bob", "1").contacts;
        assert!(exists(&store, "bOb").unwrap());
        assert!(!exists(&store, "Bo").unwrap());
    }

    #[test]
    fn exists_rejects_empty_name() {
        let store: InMemoryStore<Contact> = InMemoryStore::new();
        assert!(matches!(
            exists(&store, " "),
            Err(DeskbookError::EmptyField(Field::Name))
        ));
    }
}
