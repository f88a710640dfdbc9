//! # Terminal Client
//!
//! The binary's presentation layer. It reads process arguments, loads the
//! configuration, sets up logging and colors, then hands stdin and stdout to a
//! [`session::Session`].
//!
//! - `setup`: clap definitions for process arguments and session lines
//! - `words`: splits a typed line into words, honoring quotes
//! - `prompt`: line-oriented input and output
//! - `render`: turns command results into text
//! - `styles`: shared terminal styles

mod prompt;
mod render;
mod session;
mod setup;
mod styles;
mod words;

use clap::Parser;
use deskbook::api::InMemoryApi;
use deskbook::config::DeskbookConfig;
use deskbook::error::Result;
use deskbook::logging::init_logging;
use session::Session;
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = DeskbookConfig::load(cli.config.as_deref())?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let level = if cli.verbose { "debug" } else { config.log.as_str() };
    init_logging(level)?;
    tracing::debug!(config = ?config, "configuration loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        InMemoryApi::in_memory(),
        stdin.lock(),
        stdout.lock(),
        config,
    );
    session.run()
}
