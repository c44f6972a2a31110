//! The matcher: exact code hit first, then substring matches.

use crate::index::ReverseIndex;
use crate::normalize::normalize;
use crate::region::{Directory, Region};

/// Display cap for multi-match results.
pub const MAX_MATCHES: usize = 5;

/// Ordered lookup result.
///
/// Matches follow directory definition order, never hash-map iteration
/// order. At most [`MAX_MATCHES`] entries are kept; `truncated` records
/// whether more existed.
#[derive(Debug, Clone)]
pub struct MatchResult {
    regions: Vec<Region>,
    truncated: bool,
    exact_code: bool,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            regions: Vec::new(),
            truncated: false,
            exact_code: false,
        }
    }

    /// Whether no region matched.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of matches kept (after the display cap).
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// The single match, if there is exactly one.
    pub fn single(&self) -> Option<&Region> {
        match self.regions.as_slice() {
            [region] => Some(region),
            _ => None,
        }
    }

    /// Iterate over matches in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Whether matches beyond the display cap were discarded.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Whether the match came from the exact-code rule.
    pub fn exact_code(&self) -> bool {
        self.exact_code
    }
}

/// Look up raw user input against the directory.
///
/// Rules, in order, short-circuiting at the first that yields matches:
///
/// 1. Exact code: trimmed input equal to a region code returns exactly that
///    region.
/// 2. Substring: every region whose normalized full name or short key
///    contains the normalized input, in directory order, without duplicates.
///
/// Absence of a match is a normal empty result. Given the same directory and
/// input the result is always identical.
pub fn lookup(raw: &str, directory: &Directory, index: &ReverseIndex) -> MatchResult {
    let trimmed = raw.trim();

    if let Some(region) = directory.by_code(trimmed) {
        return MatchResult {
            regions: vec![region.clone()],
            truncated: false,
            exact_code: true,
        };
    }

    let needle = normalize(raw);
    if needle.is_empty() {
        return MatchResult::empty();
    }

    let mut regions = Vec::new();
    let mut truncated = false;

    for (region, keys) in directory.iter().zip(index.region_keys()) {
        let contained = keys.full.contains(&needle)
            || keys.short.as_deref().is_some_and(|s| s.contains(&needle));
        if !contained {
            continue;
        }
        if regions.len() == MAX_MATCHES {
            truncated = true;
            break;
        }
        regions.push(region.clone());
    }

    MatchResult {
        regions,
        truncated,
        exact_code: false,
    }
}
