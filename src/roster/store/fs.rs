use super::Slot;
use crate::error::{RosterError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SLOT_EXT: &str = "json";

/// File-backed slot: `<root>/<key>.json`.
///
/// Writes go to a temp file next to the slot which is then renamed over it, so a
/// reader sees either the previous roster or the new one.
#[derive(Debug, Clone)]
pub struct FileSlot {
    root: PathBuf,
    key: String,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            key: key.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(format!("{}.{}", self.key, SLOT_EXT))
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(".{}.{}.tmp", self.key, SLOT_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.ensure_dir()?;
        let temp = self.temp_path();
        fs::write(&temp, contents).map_err(RosterError::Io)?;
        fs::rename(&temp, self.path()).map_err(RosterError::Io)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
