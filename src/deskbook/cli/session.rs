//! # Interactive Session
//!
//! A session owns the API (and with it both books) from start to end of input.
//! Each line is split into words, parsed with clap and dispatched to a handler.
//!
//! Handlers gather every input a command needs first (from the line, or by
//! prompting), then make exactly one API call and render its result. The only
//! exception is `contacts add`, which asks the API whether the name is taken
//! before it asks the user about overwriting.
//!
//! A failed command is reported and the session carries on. Only terminal I/O
//! errors end it early.

use super::prompt::Terminal;
use super::render;
use super::setup::{ContactCommands, Line, LineCommand, NoteCommands, NoteFields};
use super::words::split_words;
use clap::error::ErrorKind;
use clap::Parser;
use deskbook::api::{CmdResult, InMemoryApi};
use deskbook::config::DeskbookConfig;
use deskbook::error::{DeskbookError, Result};
use deskbook::model::NoteId;
use std::io::{BufRead, Write};

const GREETING: &str = "Welcome to Deskbook! Type `help` for commands, `quit` to leave.";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    api: InMemoryApi,
    term: Terminal<R, W>,
    config: DeskbookConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(api: InMemoryApi, input: R, output: W, config: DeskbookConfig) -> Self {
        Self {
            api,
            term: Terminal::new(input, output),
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("session started");
        self.term.print(GREETING)?;

        loop {
            let prompt = self.config.prompt.clone();
            let Some(line) = self.term.ask(&prompt)? else {
                break;
            };
            match self.run_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(DeskbookError::Io(e)) => return Err(DeskbookError::Io(e)),
                Err(e) => {
                    tracing::debug!(error = %e, "command failed");
                    self.term.print(&render::render_error(&e))?;
                }
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn run_line(&mut self, line: &str) -> Result<Flow> {
        let words = split_words(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Help and usage errors are shown as-is
                if e.kind() != ErrorKind::DisplayHelp {
                    tracing::debug!(kind = ?e.kind(), "unparsable line");
                }
                let text = e.render().to_string();
                self.term.print(text.trim_end())?;
                return Ok(Flow::Continue);
            }
        };

        match parsed.command {
            LineCommand::Contacts(cmd) => self.contacts(cmd)?,
            LineCommand::Notes(cmd) => self.notes(cmd)?,
            LineCommand::Config => self.show_config()?,
            LineCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    // --- Contacts ---

    fn contacts(&mut self, cmd: ContactCommands) -> Result<()> {
        match cmd {
            ContactCommands::List { json } => self.list_contacts(json),
            ContactCommands::Add { name } => self.add_contact(name),
            ContactCommands::Delete { name } => {
                let Some(name) = self.words_or_ask(name, "Enter name to delete: ")? else {
                    return Ok(());
                };
                let result = self.api.delete_contact(&name)?;
                self.print_messages(&result)
            }
            ContactCommands::Find { name } => {
                let Some(name) = self.words_or_ask(name, "Enter name to search: ")? else {
                    return Ok(());
                };
                let result = self.api.find_contact(&name)?;
                self.print_messages(&result)?;
                let width = self.config.line_width();
                self.term
                    .print(&render::render_contacts(&result.listed_contacts, width))
            }
        }
    }

    fn list_contacts(&mut self, json: bool) -> Result<()> {
        let result = self.api.list_contacts()?;
        if json {
            return self.term.print(&render::render_json(&result.listed_contacts)?);
        }
        if !result.listed_contacts.is_empty() {
            let width = self.config.line_width();
            self.term
                .print(&render::render_contacts(&result.listed_contacts, width))?;
        }
        self.print_messages(&result)
    }

    fn add_contact(&mut self, name: Vec<String>) -> Result<()> {
        let Some(name) = self.words_or_ask(name, "Enter name: ")? else {
            return Ok(());
        };

        let mut overwrite = false;
        if self.api.contact_exists(&name)? {
            match self
                .term
                .confirm("Contact already exists. Do you want to overwrite it?")?
            {
                Some(true) => overwrite = true,
                Some(false) => return Err(DeskbookError::Declined),
                None => return Ok(()),
            }
        }

        let Some(phone_number) = self.term.ask("Enter phone number: ")? else {
            return Ok(());
        };
        let result = self.api.add_contact(name, phone_number, overwrite)?;
        self.print_messages(&result)
    }

    // --- Notes ---

    fn notes(&mut self, cmd: NoteCommands) -> Result<()> {
        match cmd {
            NoteCommands::List { json } => {
                let result = self.api.list_notes()?;
                self.print_notes(&result, json)
            }
            NoteCommands::Add { fields } => self.add_note(fields),
            NoteCommands::Edit { index, fields } => {
                let id = self.api.resolve_note(&index)?;
                self.edit_note(id, fields)
            }
            NoteCommands::Search { json, query } => {
                let result = self.api.search_notes(&query.join(" "))?;
                self.print_notes(&result, json)?;
                if !json {
                    self.print_messages(&result)?;
                }
                Ok(())
            }
            NoteCommands::View { index } => {
                let id = self.api.resolve_note(&index)?;
                let result = self.api.view_note(id)?;
                for dn in &result.listed_notes {
                    self.term.print(&render::render_note(dn))?;
                }
                self.print_messages(&result)
            }
        }
    }

    fn add_note(&mut self, fields: NoteFields) -> Result<()> {
        let Some(title) = self.field_or_ask(fields.title, "Title: ")? else {
            return Ok(());
        };
        let Some(content) = self.field_or_ask(fields.content, "Content: ")? else {
            return Ok(());
        };
        let Some(category) = self.field_or_ask(fields.category, "Category: ")? else {
            return Ok(());
        };

        let result = self.api.add_note(title, content, category)?;
        self.print_messages(&result)
    }

    fn edit_note(&mut self, id: NoteId, fields: NoteFields) -> Result<()> {
        let current = self.api.view_note(id)?;
        let Some(current) = current.listed_notes.into_iter().next() else {
            return Err(DeskbookError::note_not_found(id.to_string()));
        };
        let note = current.note;

        let Some(title) = self.field_or_keep(fields.title, "Title", &note.title)? else {
            return Ok(());
        };
        let Some(content) = self.field_or_keep(fields.content, "Content", &note.content)? else {
            return Ok(());
        };
        let Some(category) = self.field_or_keep(fields.category, "Category", &note.category)?
        else {
            return Ok(());
        };

        let result = self.api.edit_note(id, title, content, category)?;
        self.print_messages(&result)
    }

    fn print_notes(&mut self, result: &CmdResult, json: bool) -> Result<()> {
        if json {
            return self.term.print(&render::render_json(&result.listed_notes)?);
        }
        let width = self.config.line_width();
        self.term
            .print(&render::render_note_list(&result.listed_notes, width))
    }

    // --- Misc ---

    fn show_config(&mut self) -> Result<()> {
        for (key, value) in self.config.entries() {
            self.term.print(&format!("{} = {}", key, value))?;
        }
        Ok(())
    }

    fn print_messages(&mut self, result: &CmdResult) -> Result<()> {
        if result.messages.is_empty() {
            return Ok(());
        }
        self.term.print(&render::render_messages(&result.messages))
    }

    /// Words from the line joined by single spaces, or the answer to `label`
    /// when there are none. Quoting keeps other spacing intact.
    fn words_or_ask(&mut self, words: Vec<String>, label: &str) -> Result<Option<String>> {
        if words.is_empty() {
            return self.term.ask(label);
        }
        Ok(Some(words.join(" ")))
    }

    fn field_or_ask(&mut self, value: Option<String>, label: &str) -> Result<Option<String>> {
        match value {
            Some(value) => Ok(Some(value)),
            None => self.term.ask(label),
        }
    }

    fn field_or_keep(
        &mut self,
        value: Option<String>,
        label: &str,
        current: &str,
    ) -> Result<Option<String>> {
        match value {
            Some(value) => Ok(Some(value)),
            None => self.term.ask_or_keep(label, current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    impl TestSession {
        fn output(&self) -> String {
            String::from_utf8_lossy(self.term.output()).into_owned()
        }
    }

    fn run_script(script: &str) -> TestSession {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> TestSession {
        colored::control::set_override(false);
        console::set_colors_enabled(false);

        let config = DeskbookConfig {
            prompt: "> ".to_string(),
            ..Default::default()
        };
        let mut session = Session::new(
            InMemoryApi::in_memory(),
            Cursor::new(script.to_vec()),
            Vec::new(),
            config,
        );
        session.run().unwrap();
        session
    }

    #[test]
    fn greets_and_ends_on_eof() {
        let session = run_script("");
        assert!(session.output().starts_with(GREETING));
    }

    #[test]
    fn adds_and_lists_contacts() {
        let session = run_script("contacts add\nBob\n555-1111\ncontacts list\n");
        let out = session.output();
        assert!(out.contains("Enter name: "));
        assert!(out.contains("Enter phone number: "));
        assert!(out.contains("Contact added successfully."));
        assert!(out.contains("Name: Bob, Phone: 555-1111"));
    }

    #[test]
    fn empty_contact_list_is_reported() {
        let out = run_script("contacts list\n").output();
        assert!(out.contains("No contacts found."));
    }

    #[test]
    fn empty_name_aborts_before_phone_prompt() {
        let out = run_script("contacts add\n   \n").output();
        assert!(out.contains("Name cannot be empty."));
        assert!(!out.contains("Enter phone number: "));
    }

    #[test]
    fn empty_phone_is_rejected() {
        let out = run_script("contacts add Bob\n\ncontacts list\n").output();
        assert!(out.contains("Phone number cannot be empty."));
        assert!(out.contains("No contacts found."));
    }

    #[test]
    fn declined_overwrite_keeps_original() {
        let script = "contacts add Bob\n555-1111\n\
                      contacts add bob\nn\n\
                      contacts find BOB\n";
        let out = run_script(script).output();
        assert!(out.contains("Contact already exists. Do you want to overwrite it? [y/N] "));
        assert!(out.contains("Contact not added."));
        assert!(out.contains("Contact found:\nName: Bob, Phone: 555-1111"));
        assert_eq!(out.matches("Enter phone number: ").count(), 1);
    }

    #[test]
    fn confirmed_overwrite_appends_duplicate() {
        let script = "contacts add Bob\n1\n\
                      contacts add bob\ny\n2\n\
                      contacts list\n";
        let out = run_script(script).output();
        assert!(out.contains("Name: Bob, Phone: 1\nName: bob, Phone: 2"));
    }

    #[test]
    fn deletes_and_reports_missing() {
        let script = "contacts add Ann\n1\n\
                      contacts delete ANN\n\
                      contacts delete\nAnn\n";
        let out = run_script(script).output();
        assert!(out.contains("Contact deleted successfully."));
        assert!(out.contains("Enter name to delete: "));
        assert!(out.contains("Contact not found."));
    }

    #[test]
    fn notes_add_list_and_view() {
        let script = "notes add --title Alpha --content first --category greek\n\
                      notes add\nbeta\nsecond\n\n\
                      notes list\n\
                      notes view 2\n";
        let out = run_script(script).output();
        assert!(out.contains("Added new note: Alpha"));
        assert!(out.contains("Added new note: beta"));
        assert!(out.contains("  1. Alpha  [greek]"));
        assert!(out.contains("  2. beta"));
        assert!(out.contains("Title: beta\nContent: second\nCategory: \n"));
        assert!(out.contains("Displayed details for: beta"));
    }

    #[test]
    fn notes_search_ignores_case() {
        let script = "notes add -t Alpha -c x -k y\n\
                      notes add -t best -c x -k y\n\
                      notes add -t gamma -c x -k y\n\
                      notes search A\n";
        let out = run_script(script).output();
        assert!(out.contains("  1. Alpha"));
        assert!(out.contains("  3. gamma"));
        assert!(!out.contains("  2. best"));
        assert!(out.contains("Search completed."));
    }

    #[test]
    fn notes_edit_keeps_position_and_defaults() {
        let script = "notes add -t One -c a -k x\n\
                      notes add -t Two -c b -k y\n\
                      notes edit 1 --title Uno\n\n\n\
                      notes view 1\n";
        let out = run_script(script).output();
        assert!(out.contains("Content [a]: "));
        assert!(out.contains("Edited note: Uno"));
        assert!(out.contains("Title: Uno\nContent: a\nCategory: x"));
    }

    #[test]
    fn notes_edit_dash_clears_field() {
        let script = "notes add -t One -c a -k x\n\
                      notes edit 1\n\n\n-\n\
                      notes view 1\n";
        let out = run_script(script).output();
        assert!(out.contains("Category [x]: "));
        assert!(out.contains("Title: One\nContent: a\nCategory: \n"));
    }

    #[test]
    fn invalid_utf8_input_keeps_session_alive() {
        let script = b"contacts add Bob\n555\ncontacts add Jos\xE9\n1\ncontacts list\n";
        let out = run_bytes(script).output();
        assert!(out.contains("Name: Bob, Phone: 555"));
        assert!(out.contains("Name: Jos\u{FFFD}, Phone: 1"));
    }

    #[test]
    fn quoted_name_keeps_inner_spacing() {
        let script = "contacts add \"Mary   Ann\"\n1\ncontacts find mary   ann\ncontacts find \"MARY   ANN\"\n";
        let out = run_script(script).output();
        assert!(out.contains("Contact not found."));
        assert!(out.contains("Contact found:\nName: Mary   Ann, Phone: 1"));
    }

    #[test]
    fn bad_note_index_is_reported() {
        let out = run_script("notes view 7\nnotes view x\n").output();
        assert!(out.contains("Note not found."));
        assert!(out.contains("Error: Invalid index format: x"));
    }

    #[test]
    fn json_listing() {
        let out = run_script("notes add -t T -c C -k K\nnotes list --json\n").output();
        assert!(out.contains("\"title\": \"T\""));
        assert!(out.contains("\"index\": 1"));
    }

    #[test]
    fn help_and_unknown_commands_do_not_end_session() {
        let out = run_script("help\nfrobnicate\ncontacts list\n").output();
        assert!(out.contains("contacts"));
        assert!(out.contains("No contacts found."));
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_script("quit\ncontacts list\n").output();
        assert!(!out.contains("No contacts found."));
    }

    #[test]
    fn unterminated_quote_is_reported() {
        let out = run_script("notes add --title \"oops\n").output();
        assert!(out.contains("Error: Unterminated quote"));
    }

    #[test]
    fn shows_config() {
        let out = run_script("config\n").output();
        assert!(out.contains("line_width = 100"));
        assert!(out.contains("prompt = \"> \""));
    }
}
