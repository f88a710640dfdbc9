//! Output formatting.
//!
//! Every function returns a `String`; the session decides where it goes.
//! Widths are measured on the plain text before styling is applied.

use super::styles::{CATEGORY, INDEX, LABEL, TIME, TITLE};
use chrono::{DateTime, Utc};
use colored::Colorize;
use deskbook::api::{CmdMessage, DisplayNote, MessageLevel};
use deskbook::error::{DeskbookError, Result};
use deskbook::model::Contact;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 14;
pub const NO_NOTES: &str = "No notes found.";
pub const DECLINED: &str = "Contact not added.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// User-facing text for a failed command.
///
/// Validation outcomes read like the messages of a successful command; only
/// unexpected failures get the `Error:` prefix.
pub fn render_error(error: &DeskbookError) -> String {
    match error {
        DeskbookError::Declined => DECLINED.dimmed().to_string(),
        DeskbookError::EmptyField(_) | DeskbookError::NotFound { .. } => {
            error.to_string().yellow().to_string()
        }
        other => format!("Error: {}", other).red().to_string(),
    }
}

pub fn render_contacts(contacts: &[Contact], width: usize) -> String {
    contacts
        .iter()
        .map(|contact| truncate_to_width(&contact.to_string(), width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_note_list(notes: &[DisplayNote], width: usize) -> String {
    if notes.is_empty() {
        return NO_NOTES.to_string();
    }

    notes
        .iter()
        .map(|dn| render_note_row(dn, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_note_row(dn: &DisplayNote, width: usize) -> String {
    let idx_str = format!("{:>3}. ", dn.index.0);
    let note = &dn.note;
    let category = if note.category.is_empty() {
        String::new()
    } else {
        format!("  [{}]", note.category)
    };

    let available = width.saturating_sub(idx_str.width() + TIME_WIDTH);
    let title = truncate_to_width(&note.title, available.saturating_sub(category.width()));
    let category = truncate_to_width(&category, available.saturating_sub(title.width()));
    let padding = available.saturating_sub(title.width() + category.width());

    format!(
        "{}{}{}{}{}",
        INDEX.apply_to(idx_str),
        TITLE.apply_to(title),
        CATEGORY.apply_to(category),
        " ".repeat(padding),
        TIME.apply_to(format_time_ago(note.created_at))
    )
}

/// Full details of one note, in the `Title/Content/Category` form.
pub fn render_note(dn: &DisplayNote) -> String {
    let note = &dn.note;
    format!(
        "{} {}\n{} {}\n{} {}",
        LABEL.apply_to("Title:"),
        TITLE.apply_to(&note.title),
        LABEL.apply_to("Content:"),
        note.content,
        LABEL.apply_to("Category:"),
        note.category
    )
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
