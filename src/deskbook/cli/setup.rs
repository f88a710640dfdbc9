use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Process arguments.
#[derive(Parser, Debug)]
#[command(name = "deskbook", version)]
#[command(
    about = "In-memory contact book and note manager",
    long_about = "Starts an interactive session holding a contact book and a note book.\n\
                  Nothing is saved: the books live until the session ends.\n\
                  Type `help` inside the session for its commands."
)]
pub struct Cli {
    /// Config file (defaults to deskbook.toml in the OS config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed inside a session.
#[derive(Parser, Debug)]
#[command(
    name = "deskbook",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Subcommand, Debug)]
pub enum LineCommand {
    /// Manage contacts
    #[command(subcommand)]
    #[command(alias = "c")]
    Contacts(ContactCommands),

    /// Manage notes
    #[command(subcommand)]
    #[command(alias = "n")]
    Notes(NoteCommands),

    /// Show the active configuration
    Config,

    /// End the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// List all contacts
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a contact (prompts for anything missing)
    Add {
        /// Name words, joined with single spaces; quote the name to keep other spacing
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Delete a contact by name
    #[command(alias = "rm")]
    Delete {
        /// Name words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Find a contact by name
    #[command(alias = "search")]
    Find {
        /// Name words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// List all notes
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note (prompts for any field not given)
    Add {
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Edit a note
    ///
    /// Prompts for any field not given. An empty answer keeps the current value
    /// and `-` clears it; `--title ""` clears it as well.
    #[command(alias = "e")]
    Edit {
        /// Index of the note as shown by `notes list`
        index: String,

        #[command(flatten)]
        fields: NoteFields,
    },

    /// Search titles and contents (an empty query matches everything)
    #[command(alias = "s")]
    Search {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Query words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show the details of a note
    #[command(alias = "v")]
    View {
        /// Index of the note as shown by `notes list`
        index: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct NoteFields {
    /// Title
    #[arg(long, short)]
    pub title: Option<String>,

    /// Content
    #[arg(long, short)]
    pub content: Option<String>,

    /// Category
    #[arg(long, short = 'k')]
    pub category: Option<String>,
}
