//! Shell Module
//!
//! Drives a store from a line-oriented command stream.
//!
//! ## Architecture
//! - One session per input stream (stdin for the binary)
//! - Commands executed one at a time, to completion
//! - One response line per command, flushed immediately

mod session;

pub use session::{execute, Session, SessionSummary};
