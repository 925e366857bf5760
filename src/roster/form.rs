//! # Form Controller
//!
//! The single owner of the roster at runtime. It holds the [`RecordStore`], the
//! current form inputs, the edit-mode marker and the last rendered
//! [`DisplayList`], and it is the entry point every UI client talks to.
//!
//! ## States
//!
//! ```text
//!            edit_row(i)                 edit_row(j)
//!   Adding ─────────────▶ Editing(i) ───────────────▶ Editing(j)
//!     ▲                      │
//!     └──────────────────────┘
//!      successful submit, confirmed delete, reset
//! ```
//!
//! A refused submission (validation or duplicate) never changes state and never
//! clears the form.
//!
//! ## Ordering
//!
//! Every successful mutation runs mutate → persist → redraw → reset. The command
//! layer rolls the mutation back if the persist step fails, so the rendered view
//! never shows something the slot does not hold.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, FormFields, StudentRecord};
use crate::store::{RecordStore, Slot};
use crate::table::{render, ActionKind, DisplayList, RowAction};
use crate::validation::shape_input;
use log::debug;

pub const ADD_LABEL: &str = "Add";
pub const UPDATE_LABEL: &str = "Update";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    /// Store index of the record the next submit will replace
    Editing(usize),
}

pub struct FormController<S: Slot> {
    store: RecordStore<S>,
    mode: FormMode,
    fields: FormFields,
    view: DisplayList,
}

impl<S: Slot> FormController<S> {
    /// Loads the slot and renders the initial table.
    pub fn open(slot: S) -> Self {
        let store = RecordStore::open(slot);
        let view = render(store.records(), 0);
        Self {
            store,
            mode: FormMode::Adding,
            fields: FormFields::default(),
            view,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Adding => ADD_LABEL,
            FormMode::Editing(_) => UPDATE_LABEL,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn view(&self) -> &DisplayList {
        &self.view
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Sets a field exactly as given.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.fields.set(field, value);
    }

    /// Sets a field as if typed into the form, stripping characters the field
    /// can never hold. Returns the value that was kept.
    pub fn type_field(&mut self, field: Field, typed: &str) -> &str {
        self.fields.set(field, shape_input(field, typed));
        self.fields.get(field)
    }

    pub fn fill(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn submit(&mut self) -> Result<CmdResult> {
        let result = match self.mode {
            FormMode::Adding => commands::add::run(&mut self.store, &self.fields)?,
            FormMode::Editing(index) => {
                commands::update::run(&mut self.store, index, &self.fields)?
            }
        };

        if result.is_applied() {
            self.redraw();
            self.reset();
        }
        Ok(result)
    }

    /// Enters edit mode for the row the action was rendered for.
    pub fn edit_row(&mut self, action: RowAction) -> CmdResult {
        if let Some(refused) = self.check_action(action, ActionKind::Edit) {
            return refused;
        }
        let Some(record) = self.store.get(action.index) else {
            return CmdResult::default().with_message(CmdMessage::warning(format!(
                "No student at position {}",
                action.index + 1
            )));
        };

        self.fields = FormFields::from_record(record);
        self.mode = FormMode::Editing(action.index);
        debug!("event=edit_mode position={}", action.index + 1);

        CmdResult::default().with_message(CmdMessage::info(format!(
            "Editing student {}: {}",
            action.index + 1,
            record.name()
        )))
    }

    /// Deletes the row the action was rendered for, if `confirm` agrees.
    ///
    /// A declined confirmation is a silent no-op.
    pub fn delete_row<F>(&mut self, action: RowAction, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&StudentRecord) -> bool,
    {
        if let Some(refused) = self.check_action(action, ActionKind::Delete) {
            return Ok(refused);
        }
        let Some(record) = self.store.get(action.index) else {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "No student at position {}",
                action.index + 1
            ))));
        };
        if !confirm(record) {
            return Ok(CmdResult::default());
        }

        let result = commands::delete::run(&mut self.store, action.index)?;
        if result.is_applied() {
            self.redraw();
            self.reset();
        }
        Ok(result)
    }

    /// Clears the form and leaves edit mode.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.mode = FormMode::Adding;
    }

    fn redraw(&mut self) {
        self.view = render(self.store.records(), self.view.generation + 1);
    }

    fn check_action(&self, action: RowAction, expected: ActionKind) -> Option<CmdResult> {
        if action.kind != expected {
            return Some(CmdResult::default().with_message(CmdMessage::error(format!(
                "Expected a {:?} action, got {:?}",
                expected, action.kind
            ))));
        }
        if action.generation != self.view.generation {
            debug!(
                "event=stale_action generation={} current={}",
                action.generation, self.view.generation
            );
            return Some(CmdResult::default().with_message(CmdMessage::warning(
                "The list changed since that row was shown; pick the row again",
            )));
        }
        None
    }
}
