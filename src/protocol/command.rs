//! Command definitions
//!
//! Represents commands from clients and parses them from text lines.

use crate::error::{KvError, Result};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key-value pair
    Set { key: String, value: String },

    /// Get a value by key
    Get { key: String },

    /// End the session
    Exit,
}

/// Parse one input line
///
/// Blank lines yield `Ok(None)`. Wrong arity or an unknown command name is
/// `KvError::InvalidCommand`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(name) = parts.first() else {
        return Ok(None);
    };

    let command = match (name.to_ascii_uppercase().as_str(), parts.as_slice()) {
        ("SET", [_, key, value]) => Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        },
        ("GET", [_, key]) => Command::Get {
            key: key.to_string(),
        },
        ("EXIT", [_]) => Command::Exit,
        _ => return Err(KvError::InvalidCommand(line.trim().to_string())),
    };

    Ok(Some(command))
}
