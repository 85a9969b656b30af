//! Append-Only Log Module
//!
//! Provides durability guarantees through append-only logging.
//!
//! ## Responsibilities
//! - Append records to the end of the file and sync before acknowledging
//! - Replay every well-formed record in file order on startup
//! - Skip malformed lines (a crash mid-append leaves a cut-short tail)
//! - Hold an exclusive lock on the file for the lifetime of the handle
//!
//! ## File Format
//! ```text
//! ┌───────────────────────────────┐
//! │ SET <key> <value>\n           │  record 1
//! ├───────────────────────────────┤
//! │ SET <key> <value>\n           │  record 2
//! ├───────────────────────────────┤
//! │ SET <key>                     │  torn tail (skipped on replay)
//! └───────────────────────────────┘
//! ```
//!
//! Fields are separated by whitespace and never escaped, so keys and values
//! can't contain whitespace.

mod record;
mod file;
mod replay;

pub use record::{Record, SET_TAG};
pub use file::Log;
pub use replay::ReplayStats;
