use super::Slot;
use crate::error::{RosterError, Result};

/// In-memory slot for testing and development.
/// Does NOT persist data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    contents: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// A slot whose reads and writes both fail.
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Keeps current contents readable but fails every later write.
    pub fn rejecting_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.clone()
    }
}

impl Slot for InMemorySlot {
    fn read(&self) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(RosterError::Io(std::io::Error::other("slot read failed")));
        }
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Io(std::io::Error::other("slot write failed")));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{FormFields, StudentRecord};
    use crate::store::RecordStore;
    use crate::validation::validate;

    /// Builds a valid record whose fields are derived from `n`.
    pub fn student(n: usize) -> StudentRecord {
        validate(&student_fields(n)).unwrap()
    }

    pub fn student_fields(n: usize) -> FormFields {
        let letter = (b'A' + (n % 26) as u8) as char;
        FormFields::new(
            format!("Student {}", letter),
            format!("{}", 100 + n),
            format!("student{}@school.edu", n),
            format!("{:010}", 5550000000u64 + n as u64),
        )
    }

    pub struct StoreFixture {
        pub slot: InMemorySlot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                slot: InMemorySlot::new(),
            }
        }

        /// Persists `count` generated students into the slot.
        pub fn with_students(mut self, count: usize) -> Self {
            let records: Vec<StudentRecord> = (0..count).map(student).collect();
            let contents = serde_json::to_string(&records).unwrap();
            self.slot.write(&contents).unwrap();
            self
        }

        pub fn with_student(mut self, fields: FormFields) -> Self {
            let mut store = RecordStore::open(self.slot.clone());
            store.insert_at_end(validate(&fields).unwrap());
            store.save().unwrap();
            self.slot = store.slot().clone();
            self
        }

        pub fn store(&self) -> RecordStore<InMemorySlot> {
            RecordStore::open(self.slot.clone())
        }
    }
}
