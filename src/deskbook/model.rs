use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, phone_number: String) -> Self {
        Self {
            name,
            phone_number,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive exact comparison against the contact's name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name == name || self.name.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {}, Phone: {}", self.name, self.phone_number)
    }
}

/// Opaque handle to a note.
///
/// Notes carry no key field of their own, so the handle is the only stable
/// way to refer back to one after it was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title,
            content,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match over title and content.
    /// `needle` must already be lowercased.
    pub fn matches_lowered(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}\nContent: {}\nCategory: {}",
            self.title, self.content, self.category
        )
    }
}
