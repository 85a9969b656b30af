//! Response definitions
//!
//! Represents responses to clients.

use std::fmt;

use crate::error::KvError;

/// Rendered for a GET on a missing key
pub const NULL_MARKER: &str = "NULL";

/// A response to send to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// SET committed
    Ok,

    /// GET hit
    Value(String),

    /// GET miss
    Null,

    /// Rejected command or failed operation
    Error(String),
}

impl Response {
    /// Create an ERROR response from a failed operation
    pub fn from_error(err: &KvError) -> Self {
        match err {
            KvError::InvalidCommand(_) => Response::Error("Invalid command".to_string()),
            other => Response::Error(other.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("OK"),
            Response::Value(value) => f.write_str(value),
            Response::Null => f.write_str(NULL_MARKER),
            Response::Error(message) => write!(f, "ERR: {}", message),
        }
    }
}
