use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FormFields;
use crate::store::{RecordStore, Slot};
use crate::validation::validate;
use log::info;

use super::helpers::persist;

/// Replaces the record at `index`.
///
/// There is no duplicate check here: editing a record into a copy of another
/// existing record is accepted.
pub fn run<S: Slot>(
    store: &mut RecordStore<S>,
    index: usize,
    fields: &FormFields,
) -> Result<CmdResult> {
    let record = match validate(fields) {
        Ok(record) => record,
        Err(rejection) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(rejection.to_string())))
        }
    };

    let snapshot = store.records().to_vec();
    if !store.replace_at(index, record.clone()) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "No student at position {}",
            index + 1
        ))));
    }
    persist(store, snapshot)?;

    info!("event=update position={}", index + 1);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Student updated ({}): {}",
            index + 1,
            record.name()
        )))
        .with_affected_records(vec![record]))
}
