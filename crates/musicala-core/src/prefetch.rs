//! Session-wide record of which videos have been hinted for preload.

use std::collections::HashSet;

/// Sources already handed to the browser as preload hints.
#[derive(Debug, Clone, Default)]
pub struct PrefetchSet {
    hinted: HashSet<String>,
}

impl PrefetchSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `src` as hinted. Returns `true` only the first time a given
    /// non-empty source is claimed.
    pub fn claim(&mut self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        self.hinted.insert(src.to_owned())
    }

    /// Whether `src` has been hinted this session.
    #[must_use]
    pub fn contains(&self, src: &str) -> bool {
        self.hinted.contains(src)
    }

    /// Number of distinct sources hinted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hinted.len()
    }

    /// Whether nothing has been hinted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hinted.is_empty()
    }
}
