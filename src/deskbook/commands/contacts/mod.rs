//! Contact book operations.
//!
//! Contacts are looked up by name, compared case-insensitively and exactly.
//! When several contacts share a name (which a confirmed overwrite allows,
//! see [`add`]), lookups always act on the first one in store order.

use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub mod add;
pub mod delete;
pub mod find;
pub mod list;

/// Store position of the first contact whose name matches `name`.
pub(crate) fn position_of<S: DataStore<Contact>>(store: &S, name: &str) -> Result<Option<usize>> {
    Ok(store
        .records()?
        .iter()
        .position(|contact| contact.name_matches(name)))
}
