use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, Slot};
use log::info;

use super::helpers::persist;

/// Removes the record at `index`. Confirmation is the caller's job.
pub fn run<S: Slot>(store: &mut RecordStore<S>, index: usize) -> Result<CmdResult> {
    let snapshot = store.records().to_vec();
    let Some(removed) = store.remove_at(index) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No student at position {}",
            index + 1
        ))));
    };
    persist(store, snapshot)?;

    info!("event=delete position={} remaining={}", index + 1, store.len());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Student deleted ({}): {}",
            index + 1,
            removed.name()
        )))
        .with_affected_records(vec![removed]))
}
