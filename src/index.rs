use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::decode::decode_fragment;
use crate::encode::encode_fragment;
use crate::error::SearchDataError;
use crate::types::SearchEntry;

/// An ordered, immutable search table.
///
/// Instances come from [`crate::decode::decode_fragment`], from
/// [`crate::builtin::builtin`], or from an explicit entry list. The table is
/// generator output and is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchEntry> {
        self.entries.iter()
    }

    /// Exact-key lookup.
    ///
    /// Assumes the ascending-key invariant checked by
    /// [`crate::validate::validate`]; on an unsorted table the result is
    /// unspecified.
    pub fn get(&self, key: &str) -> Option<&SearchEntry> {
        self.entries
            .binary_search_by(|e| e.key.as_str().cmp(key))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Number of link targets across all entries.
    pub fn target_count(&self) -> usize {
        self.entries.iter().map(|e| e.targets.len()).sum()
    }

    /// Read and decode a fragment file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SearchDataError> {
        let text = std::fs::read_to_string(path)?;
        decode_fragment(&text)
    }

    /// Write the canonical encoding to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SearchDataError> {
        std::fs::write(path, encode_fragment(self))?;
        Ok(())
    }

    /// Lowercase hex SHA-256 of the canonical encoding.
    ///
    /// Computed over [`encode_fragment`] output rather than the input text,
    /// so two fragments that differ only in whitespace fingerprint the same.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(encode_fragment(self).as_bytes());
        hex::encode(digest)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a SearchEntry;
    type IntoIter = std::slice::Iter<'a, SearchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<SearchEntry>> for SearchIndex {
    fn from(entries: Vec<SearchEntry>) -> Self {
        Self::new(entries)
    }
}
