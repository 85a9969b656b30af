//! Index implementation
//!
//! Vec-backed index with linear lookup.

/// A single key/value pair held by the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: String,
    pub value: String,
}

/// Ordered sequence of key/value entries
#[derive(Debug, Default)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    /// Create a new empty Index
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a SET: overwrite the existing entry for `key`, or append one
    ///
    /// Keeps at most one entry per key.
    pub fn apply(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.value.clear();
                entry.value.push_str(value);
            }
            None => self.entries.push(IndexEntry {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Look up `key`, searching from the most recently appended entry
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }
}
