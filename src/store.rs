//! Store Module
//!
//! Coordinates the in-memory index with the append-only log.
//!
//! ## Responsibilities
//! - Rebuild the index from the log on startup
//! - Persist every SET before it becomes visible
//! - Serve GETs from memory only

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::index::{Index, IndexEntry};
use crate::log::{Log, Record};

/// The key-value store
///
/// ## Write ordering
///
/// `set` appends to the log first and applies to the index only once the
/// append is durable. A failed append leaves the index untouched, so the
/// in-memory state never runs ahead of what a restart would recover.
///
/// Writes take `&mut self`; there is exactly one writer.
#[derive(Debug)]
pub struct Store {
    /// Append-only log (source of truth)
    log: Log,

    /// Latest value per key
    index: Index,
}

impl Store {
    /// Open the log at the configured path and replay it
    pub fn open(config: &Config) -> Result<Self> {
        let log = Log::open(&config.log_path)?;
        Self::from_log(log)
    }

    /// Open with a path (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().log_path(path).build();
        Self::open(&config)
    }

    /// Build a store over an already opened log
    ///
    /// On startup:
    /// 1. Replay every well-formed record
    /// 2. Apply them to a fresh index in file order
    pub fn from_log(log: Log) -> Result<Self> {
        let (records, stats) = log.replay_with_stats()?;

        let mut index = Index::new();
        for record in &records {
            match record {
                Record::Set { key, value } => index.apply(key, value),
            }
        }

        if stats.lines_skipped > 0 {
            tracing::warn!(
                "Log replay skipped {} malformed line(s) in {}",
                stats.lines_skipped,
                log.path().display()
            );
        }
        tracing::info!(
            "Log replay: {} records, {} keys, {} bytes",
            stats.records_replayed,
            index.len(),
            stats.bytes_read
        );

        Ok(Self { log, index })
    }

    /// Set `key` to `value`
    ///
    /// Returns only after the record is durable. On error nothing is
    /// applied and the write must be considered not committed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let record = Record::set(key, value)?;

        self.log.append(&record)?;
        self.index.apply(key, value);

        Ok(())
    }

    /// Get the value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries in first-write order
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.index.iter()
    }

    /// Path of the log file
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Records appended since this store was opened
    pub fn records_appended(&self) -> u64 {
        self.log.records_appended()
    }
}
