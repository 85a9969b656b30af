//! Protocol Module
//!
//! Line-oriented text protocol spoken by the shell.
//!
//! ## Requests
//! ```text
//! SET <key> <value>
//! GET <key>
//! EXIT
//! ```
//! Command names are case-insensitive; tokens are whitespace-separated.
//!
//! ## Responses
//! - `OK`            - SET committed
//! - `<value>`       - GET hit
//! - `NULL`          - GET miss
//! - `ERR: <reason>` - rejected command or failed write

mod command;
mod response;

pub use command::{parse_command, Command};
pub use response::{Response, NULL_MARKER};
