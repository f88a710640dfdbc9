//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every deskbook operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the two stores for the lifetime of a session
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display indexes typed by a user → note handles)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/`
//! - **I/O**: no stdout, stderr or prompts. A UI collects every input first,
//!   then makes one call per operation.
//! - **Presentation**: it returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `DeskbookApi<C, N>` takes one store per record type. The contact store and
//! the note store never see each other.
//!
//! ## Testing Strategy
//!
//! API tests check that each method reaches the right command with the right
//! arguments. Command logic is tested in the command modules.

use crate::commands::{self, contacts, notes};
use crate::error::{DeskbookError, Result};
use crate::index::DisplayIndex;
use crate::model::{Contact, Note, NoteId};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::str::FromStr;

/// The main API facade for deskbook operations.
pub struct DeskbookApi<C: DataStore<Contact>, N: DataStore<Note>> {
    contacts: C,
    notes: N,
}

/// The session-lifetime API used by the binary.
pub type InMemoryApi = DeskbookApi<InMemoryStore<Contact>, InMemoryStore<Note>>;

impl InMemoryApi {
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new(), InMemoryStore::new())
    }
}

impl<C: DataStore<Contact>, N: DataStore<Note>> DeskbookApi<C, N> {
    pub fn new(contacts: C, notes: N) -> Self {
        Self { contacts, notes }
    }

    // --- Contacts ---

    pub fn add_contact(
        &mut self,
        name: String,
        phone_number: String,
        overwrite: bool,
    ) -> Result<commands::CmdResult> {
        contacts::add::run(&mut self.contacts, name, phone_number, overwrite)
    }

    pub fn contact_exists(&self, name: &str) -> Result<bool> {
        contacts::add::exists(&self.contacts, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        contacts::delete::run(&mut self.contacts, name)
    }

    pub fn find_contact(&self, name: &str) -> Result<commands::CmdResult> {
        contacts::find::run(&self.contacts, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        contacts::list::run(&self.contacts)
    }

    // --- Notes ---

    pub fn add_note(
        &mut self,
        title: String,
        content: String,
        category: String,
    ) -> Result<commands::CmdResult> {
        notes::add::run(&mut self.notes, title, content, category)
    }

    pub fn edit_note(
        &mut self,
        id: NoteId,
        title: String,
        content: String,
        category: String,
    ) -> Result<commands::CmdResult> {
        let update = notes::edit::NoteUpdate::new(id, title, content, category);
        notes::edit::run(&mut self.notes, update)
    }

    pub fn search_notes(&self, query: &str) -> Result<commands::CmdResult> {
        notes::search::run(&self.notes, query)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        notes::list::run(&self.notes)
    }

    pub fn list_note_titles(&self) -> Result<Vec<String>> {
        Ok(notes::list::run(&self.notes)?.note_titles())
    }

    pub fn view_note(&self, id: NoteId) -> Result<commands::CmdResult> {
        notes::view::run(&self.notes, id)
    }

    /// Turns a user-typed display index ("1", "2", ...) into a note handle.
    pub fn resolve_note<I: AsRef<str>>(&self, index: I) -> Result<NoteId> {
        let index = DisplayIndex::from_str(index.as_ref()).map_err(DeskbookError::Api)?;
        notes::resolve(&self.notes, index)
    }
}

pub use crate::commands::contacts::list::NO_CONTACTS;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::index::DisplayNote;
