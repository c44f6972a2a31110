//! Reverse index from normalized name forms to region codes.

use std::collections::HashMap;

use crate::normalize::normalize;
use crate::region::Directory;

/// Normalized key forms for one region, in directory order.
#[derive(Debug, Clone)]
pub(crate) struct RegionKeys {
    /// Normalized full name.
    pub full: String,
    /// Short form: first comma-delimited segment, then first whitespace
    /// token of the normalized name. Absent when identical to `full`.
    pub short: Option<String>,
}

/// Precomputed mapping from normalized name forms to region codes.
///
/// Built once from a [`Directory`] and read-only afterward. Two regions can
/// in principle normalize to the same key; the later one wins. Known
/// limitation, not resolved here.
#[derive(Debug, Clone)]
pub struct ReverseIndex {
    by_key: HashMap<String, String>,
    keys: Vec<RegionKeys>,
}

impl ReverseIndex {
    /// Build the index from a directory.
    ///
    /// O(number of regions); infallible. A name that normalizes to nothing
    /// degrades to an empty full key which is simply never matched, since
    /// empty input is handled before the index is consulted.
    pub fn build(directory: &Directory) -> Self {
        let mut by_key = HashMap::new();
        let mut keys = Vec::with_capacity(directory.len());

        for region in directory.iter() {
            let full = normalize(&region.name);
            let short = short_key(&full).filter(|s| *s != full);

            by_key.insert(full.clone(), region.code.clone());
            if let Some(ref short) = short {
                by_key.insert(short.clone(), region.code.clone());
            }

            keys.push(RegionKeys { full, short });
        }

        Self { by_key, keys }
    }

    /// Resolve a normalized key to a region code.
    pub fn code_for(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Key forms per region, aligned with directory order.
    pub(crate) fn region_keys(&self) -> &[RegionKeys] {
        &self.keys
    }
}

/// Derive the short form of a normalized name: first comma-delimited
/// segment, then its first whitespace token.
fn short_key(normalized: &str) -> Option<String> {
    normalized
        .split(',')
        .next()
        .and_then(|segment| segment.split_whitespace().next())
        .map(str::to_string)
}
