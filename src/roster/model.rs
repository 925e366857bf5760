//! # Data Model
//!
//! [`StudentRecord`] is the only entity. Its fields are private and its constructor
//! is crate-private: the one way to obtain a record is [`crate::validation::validate`],
//! so every record that reaches the store or the table already satisfies the field
//! constraints.
//!
//! [`FormFields`] is the other half: the four raw text inputs exactly as the user
//! typed them, before any validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated student record.
///
/// Serializes as `{"name", "id", "email", "contact"}`. There is deliberately no
/// `Deserialize` impl; persisted entries are read as [`FormFields`] and validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    name: String,
    id: String,
    email: String,
    contact: String,
}

impl StudentRecord {
    pub(crate) fn new(name: String, id: String, email: String, contact: String) -> Self {
        Self {
            name,
            id,
            email,
            contact,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }
}

/// The four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Id,
    Email,
    Contact,
}

impl Field {
    /// Form order; also the order in which empty fields are reported.
    pub const ALL: [Field; 4] = [Field::Name, Field::Id, Field::Email, Field::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "student ID",
            Field::Email => "email",
            Field::Contact => "contact number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "id" => Ok(Field::Id),
            "email" => Ok(Field::Email),
            "contact" => Ok(Field::Contact),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Raw, unvalidated form input.
///
/// Also the on-disk shape of a persisted entry, which is why it derives `Deserialize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    pub fn from_record(record: &StudentRecord) -> Self {
        Self::new(
            record.name(),
            record.id(),
            record.email(),
            record.contact(),
        )
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Id => &self.id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Id => self.id = value,
            Field::Email => self.email = value,
            Field::Contact => self.contact = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
