use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SLOT_KEY: &str = "students";

/// Configuration for roster, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Name of the persisted slot (file stem of `<slot_key>.json`)
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Ask before deleting a record
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

/// Keys settable through `roster config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    SlotKey,
    ConfirmDelete,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::SlotKey, ConfigKey::ConfirmDelete];
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::SlotKey => f.write_str("slot-key"),
            ConfigKey::ConfirmDelete => f.write_str("confirm-delete"),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "slot-key" | "slot_key" => Ok(ConfigKey::SlotKey),
            "confirm-delete" | "confirm_delete" => Ok(ConfigKey::ConfirmDelete),
            other => Err(RosterError::Config(format!("Unknown config key: {}", other))),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::SlotKey => self.slot_key.clone(),
            ConfigKey::ConfirmDelete => self.confirm_delete.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::SlotKey => {
                validate_slot_key(value)?;
                self.slot_key = value.to_string();
            }
            ConfigKey::ConfirmDelete => {
                self.confirm_delete = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(RosterError::Config(format!(
                            "confirm-delete expects true or false, got {}",
                            other
                        )))
                    }
                };
            }
        }
        Ok(())
    }
}

/// Slot keys become file names, so they are restricted to a safe alphabet.
fn validate_slot_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(RosterError::Config("slot-key cannot be empty".into()));
    }
    if let Some(ch) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(RosterError::Config(format!(
            "slot-key contains invalid character '{}' (only letters, digits, '-' and '_')",
            ch
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.slot_key, "students");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("roster");

        let mut config = RosterConfig::default();
        config.set(ConfigKey::SlotKey, "class_b").unwrap();
        config.set(ConfigKey::ConfirmDelete, "no").unwrap();
        config.save(&nested).unwrap();

        let loaded = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded.slot_key, "class_b");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"confirm_delete": false}"#).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.slot_key, "students");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_rejects_unsafe_slot_key() {
        let mut config = RosterConfig::default();
        assert!(config.set(ConfigKey::SlotKey, "../etc").is_err());
        assert!(config.set(ConfigKey::SlotKey, "").is_err());
        assert_eq!(config.slot_key, "students");
    }

    #[test]
    fn test_rejects_non_boolean() {
        let mut config = RosterConfig::default();
        assert!(config.set(ConfigKey::ConfirmDelete, "maybe").is_err());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("slot-key".parse::<ConfigKey>().unwrap(), ConfigKey::SlotKey);
        assert_eq!(
            "confirm_delete".parse::<ConfigKey>().unwrap(),
            ConfigKey::ConfirmDelete
        );
        assert!("file-ext".parse::<ConfigKey>().is_err());
        for key in ConfigKey::ALL {
            assert_eq!(key.to_string().parse::<ConfigKey>().unwrap(), key);
        }
    }
}
