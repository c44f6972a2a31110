//! Region and directory types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::table::REGION_TABLE;

/// An administrative region entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique region code (e.g. "77").
    pub code: String,
    /// Display name (e.g. "Москва").
    pub name: String,
}

impl Region {
    /// Create a region entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The immutable, ordered directory of regions.
///
/// Iteration order is definition order, which also governs the ordering of
/// lookup results. Built once at startup and never mutated afterward.
#[derive(Debug, Clone)]
pub struct Directory {
    regions: Vec<Region>,
    by_code: HashMap<String, usize>,
}

impl Directory {
    /// Build a directory from `(code, name)` pairs, preserving their order.
    pub fn new<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let regions: Vec<Region> = pairs
            .into_iter()
            .map(|(code, name)| Region::new(code, name))
            .collect();

        let by_code = regions
            .iter()
            .enumerate()
            .map(|(idx, region)| (region.code.clone(), idx))
            .collect();

        Self { regions, by_code }
    }

    /// Build the directory from the built-in Russian region code table.
    pub fn builtin() -> Self {
        Self::new(REGION_TABLE.iter().copied())
    }

    /// Look up a region by its exact code.
    pub fn by_code(&self, code: &str) -> Option<&Region> {
        self.by_code.get(code).map(|&idx| &self.regions[idx])
    }

    /// Iterate over regions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Number of regions in the directory.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_definition_order() {
        let directory = Directory::new([("77", "Москва"), ("78", "Санкт-Петербург")]);

        let names: Vec<&str> = directory.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Москва", "Санкт-Петербург"]);
    }

    #[test]
    fn test_by_code() {
        let directory = Directory::new([("77", "Москва"), ("78", "Санкт-Петербург")]);

        assert_eq!(directory.by_code("77").unwrap().name, "Москва");
        assert!(directory.by_code("99").is_none());
    }

    #[test]
    fn test_builtin_table_loads() {
        let directory = Directory::builtin();

        assert!(!directory.is_empty());
        assert_eq!(directory.by_code("77").unwrap().name, "Москва");
        assert_eq!(directory.by_code("78").unwrap().name, "Санкт-Петербург");
    }

    #[test]
    fn test_builtin_codes_are_unique() {
        let directory = Directory::builtin();
        let mut codes: Vec<&str> = directory.iter().map(|r| r.code.as_str()).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}
