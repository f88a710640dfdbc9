use thiserror::Error;

/// A required text input of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    PhoneNumber,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::PhoneNumber => write!(f, "Phone number"),
        }
    }
}

/// The kind of record a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Contact,
    Note,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Contact => write!(f, "Contact"),
            RecordKind::Note => write!(f, "Note"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeskbookError {
    #[error("{0} cannot be empty.")]
    EmptyField(Field),

    #[error("{kind} not found.")]
    NotFound { kind: RecordKind, key: String },

    #[error("Overwrite declined.")]
    Declined,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

impl DeskbookError {
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        DeskbookError::NotFound {
            kind: RecordKind::Contact,
            key: name.into(),
        }
    }

    pub fn note_not_found(key: impl Into<String>) -> Self {
        DeskbookError::NotFound {
            kind: RecordKind::Note,
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_messages_name_the_field() {
        assert_eq!(
            DeskbookError::EmptyField(Field::Name).to_string(),
            "Name cannot be empty."
        );
        assert_eq!(
            DeskbookError::EmptyField(Field::PhoneNumber).to_string(),
            "Phone number cannot be empty."
        );
    }

    #[test]
    fn not_found_messages_name_the_kind() {
        assert_eq!(
            DeskbookError::contact_not_found("bob").to_string(),
            "Contact not found."
        );
        assert_eq!(
            DeskbookError::note_not_found("3").to_string(),
            "Note not found."
        );
    }
}
