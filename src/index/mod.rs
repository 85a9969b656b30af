//! Index Module
//!
//! In-memory view of the latest value per key.
//!
//! ## Responsibilities
//! - Apply SET records in order (overwrite in place, else append)
//! - Answer lookups with last-write-wins semantics
//! - Preserve insertion order for iteration
//!
//! ## Data Structure Choice
//! A plain `Vec` scanned linearly, mirroring the linear structure of the
//! log. `get` walks from the newest entry back to the oldest.

mod table;

pub use table::{Index, IndexEntry};
