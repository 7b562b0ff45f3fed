//! Core reduction types and tuning constants.
//!
//! This module defines the small, copyable values shared by every reducer:
//!
//! - [`IndexRange`] — a half-open interval `[start, end)` over the input,
//! - [`DEFAULT_ADAPTIVE_THRESHOLD`] — the leaf cutoff of the fork/join reducer,
//! - thread-name prefixes for the per-call worker pools.
//!
//! ## Invariants
//!
//! Every [`IndexRange`] produced by this crate satisfies
//! `0 <= start <= end <= input.len()`. Ranges are descriptions of work only;
//! they never own or copy input data.
//!
//! This module contains no unsafe code.

use std::fmt;
use std::ops::Range;


/// Default leaf size of the adaptive fork/join reducer.
///
/// Ranges of this many elements or fewer are summed sequentially instead of
/// being split further. The value is a tuning parameter, not a semantic
/// requirement: any positive value yields the same split structure and the
/// same combination order.

pub const DEFAULT_ADAPTIVE_THRESHOLD: usize = 5_000;

/// Thread-name prefix for workers of the adaptive reducer pool.
pub const ADAPTIVE_WORKER_PREFIX: &str = "adaptive-worker";

/// Thread-name prefix for workers of the fixed-task reducer pool.
pub const FIXED_TASK_WORKER_PREFIX: &str = "fixed-task-worker";

/// A half-open index interval `[start, end)` describing one unit of work.
///
/// ## Semantics
/// * `start` is inclusive, `end` is exclusive.
/// * An empty range (`start == end`) is valid and sums to `0.0`.
///
/// ## Invariants
/// * `start <= end`, enforced by [`IndexRange::new`].

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// First index covered by the range.
    pub start: usize,

    /// One past the last index covered by the range.
    pub end: usize,
}

impl IndexRange {
    /// Creates a range, clamping `end` up to `start` if it would precede it.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Range covering an entire slice of length `len`.
    #[inline]
    pub const fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Number of indices covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the range covers no indices.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Splits the range at `start + len / 2`.
    ///
    /// The left half receives the smaller share when the length is odd.

    #[inline]
    pub const fn split_half(&self) -> (IndexRange, IndexRange) {
        let mid = self.start + self.len() / 2;
        (
            IndexRange { start: self.start, end: mid },
            IndexRange { start: mid, end: self.end },
        )
    }

    /// Converts to a standard library range for slicing.
    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_inverted_bounds() {
        let r = IndexRange::new(7, 3);
        assert_eq!(r, IndexRange { start: 7, end: 7 });
        assert!(r.is_empty());
    }

    #[test]
    fn split_half_covers_range() {
        let (l, r) = IndexRange::new(10, 21).split_half();
        assert_eq!(l, IndexRange::new(10, 15));
        assert_eq!(r, IndexRange::new(15, 21));
        assert_eq!(l.len() + r.len(), 11);
    }

    #[test]
    fn display_is_half_open() {
        assert_eq!(IndexRange::new(2, 5).to_string(), "[2, 5)");
    }
}
