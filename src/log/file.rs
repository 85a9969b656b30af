//! Log file handle
//!
//! Owns the on-disk file: opening, locking, appending and replaying.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{KvError, Result};
use super::replay::replay_lines;
use super::{Record, ReplayStats};

/// Durable, append-only record log
///
/// The file is opened in append mode, so every write lands at the end
/// regardless of where earlier reads left off. An exclusive advisory lock is
/// held until the `Log` is dropped, and replay reads through the same handle.
#[derive(Debug)]
pub struct Log {
    /// Path the log was opened with
    path: PathBuf,

    /// Append handle (also carries the lock)
    file: File,

    /// The file may end mid-line (torn tail or failed write); the next
    /// append must start with a newline
    needs_newline: bool,

    /// Successful appends through this handle
    records_appended: u64,
}

impl Log {
    /// Open or create the log file at `path`
    ///
    /// Nothing is parsed yet. Fails if the parent directory is missing or
    /// inaccessible, or if another handle already holds the lock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&path)?;

        FileExt::try_lock_exclusive(&file).map_err(|e| {
            if e.kind() == fs2::lock_contended_error().kind() {
                KvError::LogLocked(path.clone())
            } else {
                KvError::Io(e)
            }
        })?;

        let needs_newline = ends_mid_line(&file)?;
        if needs_newline {
            tracing::warn!(
                "Log {} ends without a newline; the torn tail will be closed on next write",
                path.display()
            );
        }

        tracing::debug!("Opened log at {}", path.display());

        Ok(Self {
            path,
            file,
            needs_newline,
            records_appended: 0,
        })
    }

    /// Read every well-formed record from the start of the file, in order
    pub fn replay(&self) -> Result<Vec<Record>> {
        let (records, _) = self.replay_with_stats()?;
        Ok(records)
    }

    /// Same as [`Log::replay`], plus counters describing the pass
    ///
    /// Reads at most the file length observed when the pass starts.
    pub fn replay_with_stats(&self) -> Result<(Vec<Record>, ReplayStats)> {
        let len = self.file.metadata()?.len();
        let mut file = &self.file;
        file.seek(SeekFrom::Start(0))?;
        replay_lines(BufReader::new(file.take(len)))
    }

    /// Append a record and block until it is on stable storage
    ///
    /// On error the record may or may not have reached the file; the
    /// caller must not treat it as committed.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let mut line = String::new();
        if self.needs_newline {
            line.push('\n');
        }
        line.push_str(&record.encode());

        // Cleared only once the whole line is synced
        self.needs_newline = true;
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        self.file.sync_all()?;
        self.needs_newline = false;

        self.records_appended += 1;
        tracing::debug!(key = record.key(), "Appended record ({} bytes)", line.len());
        Ok(())
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended through this handle
    pub fn records_appended(&self) -> u64 {
        self.records_appended
    }
}

/// True if the file is non-empty and its last byte isn't `\n`
fn ends_mid_line(file: &File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut reader = file;
    reader.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    reader.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
