//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student roster library**: a validated list of
//! student records with add, edit and delete, persisted to a single slot. The
//! terminal client shipped with it is one UI; the same core could sit behind a web
//! form.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints tables and messages    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form Controller (form.rs)                                  │
//! │  - Adding / Editing(i) state machine                        │
//! │  - Owns the store, the form inputs and the rendered table   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → duplicate check → mutate → persist            │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `Slot` trait: FileSlot (production), InMemorySlot (tests)│
//! │  - RecordStore: ordered records, positional mutations       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records are always valid
//!
//! [`model::StudentRecord`] can only be built by [`validation::validate`]. Records
//! loaded from disk go through the same function, so nothing invalid is ever
//! displayed or written back.
//!
//! ## Positional identity
//!
//! Rows are addressed by their position in the current table. Each render bumps a
//! generation counter that is stamped into every row action, and the controller
//! refuses actions from an older render. See [`table`].
//!
//! ## Module Overview
//!
//! - [`form`]: The form controller, entry point for UI clients
//! - [`commands`]: Add, update and delete logic
//! - [`validation`]: Field rules and live input shaping
//! - [`table`]: Display list rendering
//! - [`store`]: Slot abstraction and the record store
//! - [`model`]: `StudentRecord`, `FormFields`, `Field`
//! - [`config`]: Configuration management
//! - [`logging`]: File logging bootstrap
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod store;
pub mod table;
pub mod validation;
