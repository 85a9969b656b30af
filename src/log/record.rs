//! Log record definitions
//!
//! Defines a single log record and its one-line text encoding.

use crate::error::{KvError, Result};

/// Literal tag that starts every SET line
pub const SET_TAG: &str = "SET";

/// A single operation stored in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Bind `key` to `value`
    Set { key: String, value: String },
}

impl Record {
    /// Build a SET record, rejecting fields the line format can't carry
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let value = value.into();
        validate_field("key", &key)?;
        validate_field("value", &value)?;
        Ok(Record::Set { key, value })
    }

    /// Key this record writes
    pub fn key(&self) -> &str {
        match self {
            Record::Set { key, .. } => key,
        }
    }

    /// Value this record writes
    pub fn value(&self) -> &str {
        match self {
            Record::Set { value, .. } => value,
        }
    }

    /// Encode as one newline-terminated line: `SET <key> <value>\n`
    pub fn encode(&self) -> String {
        match self {
            Record::Set { key, value } => format!("{} {} {}\n", SET_TAG, key, value),
        }
    }

    /// Decode one line (with or without its trailing newline)
    ///
    /// Returns `None` unless the line splits into exactly three
    /// whitespace-separated fields and the first one is `SET`.
    pub fn decode(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let (tag, key, value) = (fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() || tag != SET_TAG {
            return None;
        }
        Some(Record::Set {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn validate_field(name: &str, field: &str) -> Result<()> {
    if field.is_empty() {
        return Err(KvError::InvalidRecord(format!("{} must not be empty", name)));
    }
    if field.chars().any(char::is_whitespace) {
        return Err(KvError::InvalidRecord(format!(
            "{} must not contain whitespace: {:?}",
            name, field
        )));
    }
    Ok(())
}
