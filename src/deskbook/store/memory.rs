use super::DataStore;
use crate::error::{DeskbookError, Result};

/// Session-lifetime storage. Does NOT persist data.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.records.len() {
            return Err(DeskbookError::Store(format!(
                "Position {} out of range ({} records)",
                position,
                self.records.len()
            )));
        }
        Ok(())
    }
}

impl<R: Clone> DataStore<R> for InMemoryStore<R> {
    fn append(&mut self, record: R) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn remove(&mut self, position: usize) -> Result<R> {
        self.check_position(position)?;
        Ok(self.records.remove(position))
    }

    fn replace(&mut self, position: usize, record: R) -> Result<()> {
        self.check_position(position)?;
        self.records[position] = record;
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Contact, Note};

    pub struct StoreFixture {
        pub contacts: InMemoryStore<Contact>,
        pub notes: InMemoryStore<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                contacts: InMemoryStore::new(),
                notes: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(format!("Contact {}", i + 1), format!("555-000{}", i));
                self.contacts.append(contact).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone_number: &str) -> Self {
            let contact = Contact::new(name.to_string(), phone_number.to_string());
            self.contacts.append(contact).unwrap();
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                    "test".to_string(),
                );
                self.notes.append(note).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str, category: &str) -> Self {
            let note = Note::new(title.to_string(), content.to_string(), category.to_string());
            self.notes.append(note).unwrap();
            self
        }
    }
}
