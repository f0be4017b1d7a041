//! Index arithmetic for stepping through the catalog.

/// Wrap `target` into `[0, len)` using Euclidean remainder.
///
/// Equivalent to `((target % len) + len) % len` for every `target`,
/// including negative values and values far beyond `len`. Returns `0`
/// when `len` is zero.
#[must_use]
pub fn wrap(target: i64, len: usize) -> usize {
    let Ok(n) = i64::try_from(len) else {
        // More spots than i64::MAX is not a real catalog.
        return usize::try_from(target).unwrap_or(0);
    };
    if n == 0 {
        return 0;
    }
    usize::try_from(target.rem_euclid(n)).unwrap_or(0)
}

/// A one-step move through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous spot (wraps from the first to the last).
    Previous,
    /// Towards the next spot (wraps from the last to the first).
    Next,
}

impl Direction {
    /// Signed index delta for this direction.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// Target index when stepping from `current` in a catalog of `len`.
    #[must_use]
    pub fn step(self, current: usize, len: usize) -> usize {
        let current = i64::try_from(current).unwrap_or(0);
        wrap(current.saturating_add(self.offset()), len)
    }
}
