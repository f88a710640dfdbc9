//! # Deskbook Architecture
//!
//! Deskbook is a **UI-agnostic record library**: a contact book and a note book,
//! each held in memory for one session. The `deskbook` binary is one client of
//! it: an interactive terminal session.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prompts for fields, renders output  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the stores               │
//! │  - Normalizes inputs (display indexes → note handles)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/contacts, commands/notes)          │
//! │  - Validation, lookup rules, mutations                      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore<R> trait, InMemoryStore<R>                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, never prints, never prompts and never exits. A question
//! such as "overwrite the existing contact?" is asked by the client, and its
//! answer arrives as a `bool`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `InMemoryStore`.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: session tests over in-memory input/output, plus end-to-end runs
//!    of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`store`]: storage abstraction and the in-memory store
//! - [`model`]: `Contact`, `Note`, `NoteId`
//! - [`index`]: display indexes for numbered note lists
//! - [`config`]: layered session configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
