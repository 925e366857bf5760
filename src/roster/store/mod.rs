//! # Storage Layer
//!
//! The roster persists into a single named **slot**: one value, overwritten in
//! full on every save. The [`Slot`] trait abstracts where that value lives.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: Production storage, `<data_dir>/<slot_key>.json`
//! - [`memory::InMemorySlot`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Ann Lee", "id": "123", "email": "a@b.com", "contact": "1234567890" }
//! ]
//! ```
//!
//! There is no version field. Anything that does not parse as the array above is
//! treated as an empty roster.
//!
//! ## RecordStore
//!
//! [`RecordStore`] owns the in-memory sequence and the slot. Its three mutations
//! (`insert_at_end`, `replace_at`, `remove_at`) never touch the slot; callers
//! `save` afterwards. Out-of-range positions are ignored rather than panicking.

use crate::error::Result;
use crate::model::{FormFields, StudentRecord};
use crate::validation::validate;
use log::{debug, warn};

pub mod fs;
pub mod memory;

/// A single persisted value holding the serialized roster.
pub trait Slot {
    /// Read the slot's contents. `Ok(None)` means the slot has never been written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot's contents in one write.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Human-readable location, for log lines
    fn describe(&self) -> String;
}

/// Reads and validates every record in the slot.
///
/// Never fails: a missing, unreadable or malformed slot yields an empty roster,
/// and individual entries that no longer validate are dropped.
pub fn load_records<S: Slot>(slot: &S) -> Vec<StudentRecord> {
    let contents = match slot.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!("event=load slot={} status=absent", slot.describe());
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=load slot={} status=unreadable error={}",
                slot.describe(),
                err
            );
            return Vec::new();
        }
    };

    let raw: Vec<FormFields> = match serde_json::from_str(&contents) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                "event=load slot={} status=malformed error={}",
                slot.describe(),
                err
            );
            return Vec::new();
        }
    };

    let total = raw.len();
    let records: Vec<StudentRecord> = raw
        .iter()
        .enumerate()
        .filter_map(|(i, fields)| match validate(fields) {
            Ok(record) => Some(record),
            Err(rejection) => {
                warn!(
                    "event=load slot={} status=dropped_entry position={} reason=\"{}\"",
                    slot.describe(),
                    i + 1,
                    rejection
                );
                None
            }
        })
        .collect();

    debug!(
        "event=load slot={} status=ok records={} dropped={}",
        slot.describe(),
        records.len(),
        total - records.len()
    );
    records
}

/// The in-memory roster plus the slot it persists to.
pub struct RecordStore<S: Slot> {
    slot: S,
    records: Vec<StudentRecord>,
}

impl<S: Slot> RecordStore<S> {
    /// Opens the store, loading whatever the slot currently holds.
    pub fn open(slot: S) -> Self {
        let records = load_records(&slot);
        Self { slot, records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Writes the full sequence to the slot, replacing its previous contents.
    pub fn save(&mut self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;
        self.slot.write(&contents)
    }

    pub fn insert_at_end(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// Returns `false` (and changes nothing) if there is no record at `index`.
    pub fn replace_at(&mut self, index: usize, record: StudentRecord) -> bool {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Returns the removed record, or `None` if there is no record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<StudentRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Puts back a snapshot taken before a mutation whose save failed.
    pub(crate) fn restore(&mut self, snapshot: Vec<StudentRecord>) {
        self.records = snapshot;
    }
}
