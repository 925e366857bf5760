//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## One-shot commands
//!
//! `add`, `edit`, `delete`, `list` each open the roster, perform one form action
//! through [`roster::form::FormController`], print the outcome and exit. A refused
//! submission exits with status 1 and leaves the roster untouched.
//!
//! Running `roster` with no arguments lists the roster.
//!
//! ## Interactive form
//!
//! `roster form` keeps one controller alive and reads commands from stdin, so the
//! add/edit state machine is visible: `edit 2` loads row 2 into the form and the
//! prompt switches from `add>` to `update>`. Field commands shape input as it is
//! typed; `submit` runs the full validation regardless.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (tables, colors, messages)
//! - `prompt`: Yes/no confirmation
//! - `session`: The interactive form loop
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
mod prompt;
mod session;
pub mod setup;

pub use commands::run;
