//! # Command Layer
//!
//! Each mutation lives in its own module and follows the same sequence:
//! validate → (duplicate check) → mutate → persist. Every command returns a
//! [`CmdResult`]. User-facing refusals, such as a validation failure or a duplicate,
//! are error-level [`CmdMessage`]s in the result rather than `Err`; `Err` is kept for
//! persistence failures, after the in-memory sequence has been rolled back.

use crate::model::StudentRecord;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<StudentRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    /// True when the command was refused and nothing changed.
    pub fn is_rejected(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// True when the store was mutated and persisted.
    pub fn is_applied(&self) -> bool {
        !self.affected_records.is_empty() && !self.is_rejected()
    }
}
