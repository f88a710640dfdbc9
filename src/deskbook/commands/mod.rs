//! # Command Layer
//!
//! This module contains the **core business logic** of deskbook. Each operation
//! lives in its own submodule and implements pure Rust functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate required fields
//! - Apply the lookup rules (case-insensitive names, substring search, handles)
//! - Mutate the store
//! - Return a structured [`CmdResult`] with the records involved and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **User interaction**: no prompts. A decision such as "overwrite the
//!   existing contact?" arrives as a plain argument, already answered.
//! - **Exit codes**: they return `Result` and let the caller decide
//!
//! ## Testing Strategy
//!
//! This is where most of the tests live. They run against `InMemoryStore` and
//! the fixtures in [`crate::store::memory::fixtures`].
//!
//! ## Command Modules
//!
//! - [`contacts`]: add, exists, delete, find and list contacts
//! - [`notes`]: add, edit, search, list and view notes

use crate::error::{DeskbookError, Field, Result};
use crate::index::DisplayNote;
use crate::model::Contact;
use serde::Serialize;

pub mod contacts;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// `affected_*` holds records created, changed or removed by the command;
/// `listed_*` holds records the caller asked to see.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// Titles of the listed notes, in order.
    pub fn note_titles(&self) -> Vec<String> {
        self.listed_notes
            .iter()
            .map(|dn| dn.note.title.clone())
            .collect()
    }
}

/// Rejects values that are empty or whitespace-only.
pub(crate) fn require(field: Field, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskbookError::EmptyField(field));
    }
    Ok(())
}
