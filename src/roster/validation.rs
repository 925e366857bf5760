//! Field validation and live input shaping.
//!
//! Two layers enforce the same constraints:
//! - [`shape_input`] is a permissive filter applied while the user types. It drops
//!   characters that can never be valid in a field.
//! - [`validate`] is the authoritative check, run on every submission regardless of
//!   whether the input was shaped.
//!
//! Valid records:
//! - `name`: ASCII letters and spaces only
//! - `id`: ASCII digits only
//! - `email`: `local@domain.tld`, no whitespace
//! - `contact`: ten or more ASCII digits, no upper bound

use crate::model::{Field, FormFields, StudentRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name regex"));
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid id regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s]+$").expect("valid email regex"));
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,}$").expect("valid contact regex"));

/// Validates raw form input and builds a [`StudentRecord`].
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. every field non-empty after trimming (reported in form order)
/// 2. name
/// 3. id
/// 4. email
/// 5. contact
///
/// On success the fields are trimmed and otherwise kept as typed.
///
/// # Examples
/// ```
/// use roster::model::FormFields;
/// use roster::validation::{validate, Rejection};
///
/// let ok = validate(&FormFields::new(" Ann Lee ", "123", "a@b.com", "1234567890")).unwrap();
/// assert_eq!(ok.name(), "Ann Lee");
///
/// let err = validate(&FormFields::new("Ann", "12a", "a@b.com", "1234567890"));
/// assert_eq!(err, Err(Rejection::InvalidId));
/// ```
pub fn validate(fields: &FormFields) -> Result<StudentRecord, Rejection> {
    let name = fields.name.trim();
    let id = fields.id.trim();
    let email = fields.email.trim();
    let contact = fields.contact.trim();

    for (field, value) in Field::ALL.iter().zip([name, id, email, contact]) {
        if value.is_empty() {
            return Err(Rejection::MissingField(*field));
        }
    }

    if !NAME_RE.is_match(name) {
        return Err(Rejection::InvalidName);
    }
    if !ID_RE.is_match(id) {
        return Err(Rejection::InvalidId);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(Rejection::InvalidEmail);
    }
    if !CONTACT_RE.is_match(contact) {
        return Err(Rejection::InvalidContact);
    }

    Ok(StudentRecord::new(
        name.to_string(),
        id.to_string(),
        email.to_string(),
        contact.to_string(),
    ))
}

/// Strips characters a field can never accept.
///
/// Name keeps ASCII letters and spaces; id and contact keep ASCII digits;
/// email is passed through untouched.
pub fn shape_input(field: Field, raw: &str) -> String {
    match field {
        Field::Name => raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect(),
        Field::Id | Field::Contact => raw.chars().filter(|c| c.is_ascii_digit()).collect(),
        Field::Email => raw.to_string(),
    }
}

/// Why a submission was refused by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A field is empty after trimming
    MissingField(Field),
    InvalidName,
    InvalidId,
    InvalidEmail,
    InvalidContact,
}

impl Rejection {
    /// The field the rejection is about.
    pub fn field(&self) -> Field {
        match self {
            Rejection::MissingField(field) => *field,
            Rejection::InvalidName => Field::Name,
            Rejection::InvalidId => Field::Id,
            Rejection::InvalidEmail => Field::Email,
            Rejection::InvalidContact => Field::Contact,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingField(field) => {
                write!(f, "All fields are required (missing {})", field)
            }
            Rejection::InvalidName => write!(f, "Name may contain only letters and spaces"),
            Rejection::InvalidId => write!(f, "Student ID must contain only digits"),
            Rejection::InvalidEmail => {
                write!(f, "Email must look like name@domain.tld")
            }
            Rejection::InvalidContact => {
                write!(f, "Contact number must be at least 10 digits")
            }
        }
    }
}

impl std::error::Error for Rejection {}
