use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FormFields;
use crate::store::{RecordStore, Slot};
use crate::validation::validate;
use log::{debug, info};

use super::helpers::{is_duplicate, persist};

pub const DUPLICATE_MESSAGE: &str = "Student record already exists";

pub fn run<S: Slot>(store: &mut RecordStore<S>, fields: &FormFields) -> Result<CmdResult> {
    let record = match validate(fields) {
        Ok(record) => record,
        Err(rejection) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(rejection.to_string())))
        }
    };

    if is_duplicate(store.records(), &record) {
        debug!("event=add status=duplicate");
        return Ok(CmdResult::default().with_message(CmdMessage::error(DUPLICATE_MESSAGE)));
    }

    let snapshot = store.records().to_vec();
    store.insert_at_end(record.clone());
    persist(store, snapshot)?;

    info!("event=add position={}", store.len());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Student added ({}): {}",
            store.len(),
            record.name()
        )))
        .with_affected_records(vec![record]))
}
