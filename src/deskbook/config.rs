//! # Configuration
//!
//! Deskbook configuration is loaded with [`confique`], layered from environment
//! variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `DESKBOOK_COLOR`, `DESKBOOK_LINE_WIDTH`,
//!    `DESKBOOK_PROMPT`, `DESKBOOK_LOG`.
//! 2. **Config file**: the path passed with `--config`, otherwise
//!    `deskbook.toml` in the OS config directory (via `directories`).
//!    A missing file is fine.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `color` | `true` | Styled output when the terminal supports it |
//! | `line_width` | `100` | Width list rows are truncated to |
//! | `prompt` | `deskbook> ` | Session prompt |
//! | `log` | `warn` | Log filter used when `RUST_LOG` is unset |
//!
//! Nothing here affects records: the books are never written to disk.

use crate::error::{DeskbookError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "deskbook.toml";
const DEFAULT_PROMPT: &str = "deskbook> ";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 20;

/// Session settings, stored in `deskbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeskbookConfig {
    /// Styled output when the terminal supports it
    #[config(env = "DESKBOOK_COLOR", default = true)]
    pub color: bool,

    /// Width list rows are truncated to
    #[config(env = "DESKBOOK_LINE_WIDTH", default = 100)]
    pub line_width: usize,

    /// Prompt shown before each command
    #[config(env = "DESKBOOK_PROMPT", default = "deskbook> ")]
    pub prompt: String,

    /// Log filter (`error`, `warn`, `info`, `debug`, `trace` or a full
    /// `tracing` directive) used when `RUST_LOG` is unset
    #[config(env = "DESKBOOK_LOG", default = "warn")]
    pub log: String,
}

impl Default for DeskbookConfig {
    fn default() -> Self {
        Self {
            color: true,
            line_width: DEFAULT_LINE_WIDTH,
            prompt: DEFAULT_PROMPT.to_string(),
            log: "warn".to_string(),
        }
    }
}

impl DeskbookConfig {
    /// Loads the layered configuration. `explicit` wins over the default file
    /// location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = explicit.map(Path::to_path_buf).or_else(default_config_path);
        Self::load_from(file.as_deref())
    }

    /// Loads environment, then `file` if given, then defaults.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| DeskbookError::Config(e.to_string()))
    }

    /// Line width, never narrower than a usable minimum.
    pub fn line_width(&self) -> usize {
        self.line_width.max(MIN_LINE_WIDTH)
    }

    /// `key = value` lines for every setting, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("color", self.color.to_string()),
            ("line_width", self.line_width.to_string()),
            ("prompt", format!("{:?}", self.prompt)),
            ("log", self.log.clone()),
        ]
    }
}

/// `<os config dir>/deskbook.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "deskbook").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
