//! Log Replay
//!
//! Rebuilds the record sequence from the raw bytes of a log file.

use std::io::BufRead;

use crate::error::Result;
use super::Record;

/// Result of a replay pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Number of well-formed records returned
    pub records_replayed: u64,

    /// Number of non-blank lines skipped as malformed
    pub lines_skipped: u64,

    /// Total bytes read from the file
    pub bytes_read: u64,
}

/// Read every line from `reader` and decode the well-formed ones in order
///
/// Lines that are not valid UTF-8 or don't have the `SET <key> <value>`
/// shape are counted and skipped. Only a failed read is an error.
pub(crate) fn replay_lines<R: BufRead>(mut reader: R) -> Result<(Vec<Record>, ReplayStats)> {
    let mut records = Vec::new();
    let mut stats = ReplayStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_read += n as u64;

        let decoded = std::str::from_utf8(&buf).ok().and_then(Record::decode);
        match decoded {
            Some(record) => {
                records.push(record);
                stats.records_replayed += 1;
            }
            None if buf.iter().all(u8::is_ascii_whitespace) => {}
            None => {
                stats.lines_skipped += 1;
                tracing::debug!(
                    "Skipping malformed log line at byte {}",
                    stats.bytes_read - n as u64
                );
            }
        }
    }

    Ok((records, stats))
}
