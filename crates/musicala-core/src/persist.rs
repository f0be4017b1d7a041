//! Persistence of the last-viewed spot.
//!
//! Storage is best-effort: a missing, disabled or full store never
//! affects navigation, and anything unreadable falls back to the first
//! spot.

use log::debug;

use crate::port::KeyValueStore;

/// Parse a stored index, accepting it only if it names a spot.
///
/// The value must be a finite, non-negative integer below `len`
/// (surrounding whitespace is ignored). Anything else returns `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range-checked integral value
pub fn parse_saved_index(raw: &str, len: usize) -> Option<usize> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    let index = value as usize;
    (index < len).then_some(index)
}

/// Reads and writes the last-viewed index under a fixed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persistence {
    key: String,
}

impl Persistence {
    /// Persist under `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restore the saved index, or `0` if nothing valid is stored.
    pub fn load<S>(&self, store: &S, len: usize) -> usize
    where
        S: KeyValueStore + ?Sized,
    {
        match store.get_item(&self.key) {
            Ok(Some(raw)) => parse_saved_index(&raw, len).unwrap_or_else(|| {
                debug!("ignoring stored index {raw:?}");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                debug!("could not read saved index: {e}");
                0
            }
        }
    }

    /// Save `index`. Failures are logged and otherwise ignored.
    pub fn save<S>(&self, store: &mut S, index: usize)
    where
        S: KeyValueStore + ?Sized,
    {
        if let Err(e) = store.set_item(&self.key, &index.to_string()) {
            debug!("could not save index {index}: {e}");
        }
    }
}
