//! Participant model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{FIRST_NAME_FIELD, LAST_NAME_FIELD};

/// Resolved participant identity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
}

impl Participant {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Raw participant directory entry as stored in the JSON document
///
/// Entries are kept as raw JSON and only interpreted when their bib is looked
/// up, so a malformed entry nobody finishes under never fails a run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DirectoryEntry {
    value: Value,
}

impl DirectoryEntry {
    /// Whether the entry holds nothing usable (`{}`, `null`, `""`, `[]`, `0`, `false`)
    pub fn is_blank(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
        }
    }

    /// Build the participant, defaulting absent or `null` names to ""
    ///
    /// Fails when the entry is not an object or a name field is not a string.
    pub fn to_participant(&self) -> Result<Participant, String> {
        let Value::Object(fields) = &self.value else {
            return Err(format!("expected an object, got {}", self.value));
        };

        Ok(Participant {
            first_name: name_field(fields, FIRST_NAME_FIELD)?,
            last_name: name_field(fields, LAST_NAME_FIELD)?,
        })
    }
}

fn name_field(fields: &Map<String, Value>, key: &str) -> Result<String, String> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(format!("field \"{key}\" must be a string, got {other}")),
    }
}
