use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::{RecordStore, Slot};
use log::error;

/// True iff some record equals `candidate` on all four fields.
pub fn is_duplicate(records: &[StudentRecord], candidate: &StudentRecord) -> bool {
    records.iter().any(|existing| existing == candidate)
}

/// Saves the store, restoring `snapshot` if the write fails.
pub(super) fn persist<S: Slot>(
    store: &mut RecordStore<S>,
    snapshot: Vec<StudentRecord>,
) -> Result<()> {
    if let Err(err) = store.save() {
        error!(
            "event=save slot={} status=failed error={}",
            store.slot().describe(),
            err
        );
        store.restore(snapshot);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormFields;
    use crate::store::memory::fixtures::student;
    use crate::store::memory::InMemorySlot;
    use crate::validation::validate;

    #[test]
    fn exact_match_is_duplicate() {
        let records = vec![student(1), student(2)];
        assert!(is_duplicate(&records, &student(2)));
    }

    #[test]
    fn any_differing_field_is_not_duplicate() {
        let base = FormFields::new("Ann Lee", "123", "a@b.com", "1234567890");
        let records = vec![validate(&base).unwrap()];

        for variant in [
            FormFields::new("Ann Leo", "123", "a@b.com", "1234567890"),
            FormFields::new("Ann Lee", "124", "a@b.com", "1234567890"),
            FormFields::new("Ann Lee", "123", "a@b.org", "1234567890"),
            FormFields::new("Ann Lee", "123", "a@b.com", "1234567891"),
            FormFields::new("ann lee", "123", "a@b.com", "1234567890"),
        ] {
            assert!(!is_duplicate(&records, &validate(&variant).unwrap()));
        }
    }

    #[test]
    fn comparison_is_after_trimming() {
        let records = vec![validate(&FormFields::new("Ann", "1", "a@b.com", "1234567890")).unwrap()];
        let padded = validate(&FormFields::new(" Ann ", " 1", "a@b.com ", "1234567890")).unwrap();
        assert!(is_duplicate(&records, &padded));
    }

    #[test]
    fn empty_store_has_no_duplicates() {
        assert!(!is_duplicate(&[], &student(0)));
    }

    #[test]
    fn failed_persist_rolls_back() {
        let slot = InMemorySlot::new().rejecting_writes();
        let mut store = RecordStore::open(slot);
        let snapshot = store.records().to_vec();
        store.insert_at_end(student(1));

        assert!(persist(&mut store, snapshot).is_err());
        assert!(store.is_empty());
    }
}
