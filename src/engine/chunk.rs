//! Static chunk planning for the fixed-task reducer.
//!
//! A [`ChunkPlan`] partitions `[0, len)` into exactly `num_tasks` contiguous
//! ranges. Planning is pure index arithmetic and knows nothing about threads;
//! the fixed-task reducer computes a plan first and only then maps each chunk
//! to a unit of parallel work.
//!
//! ## Layout
//! ```text
//! chunk_size = ceil(len / num_tasks)
//! chunk i    = [min(i * chunk_size, len), min((i + 1) * chunk_size, len))
//! ```
//!
//! ## Guarantees
//! * exactly `num_tasks` ranges are produced,
//! * ranges are contiguous and non-overlapping, in index order,
//! * their union is `[0, len)`,
//! * when `num_tasks > len` (or `len == 0`) trailing ranges are empty.

use crate::engine::error::InvalidTaskCountError;
use crate::engine::types::IndexRange;


/// Number of elements per chunk: `ceil(n_elements / n_chunks)`.
///
/// `n_chunks` must be non-zero; [`ChunkPlan::new`] checks this before calling.

#[inline]
pub fn chunk_size(n_chunks: usize, n_elements: usize) -> usize {
    n_elements.div_ceil(n_chunks)
}

/// Inclusive start index of chunk `chunk`, clamped to `n_elements`.
#[inline]
pub fn chunk_start_inclusive(chunk: usize, n_chunks: usize, n_elements: usize) -> usize {
    chunk
        .saturating_mul(chunk_size(n_chunks, n_elements))
        .min(n_elements)
}

/// Exclusive end index of chunk `chunk`, clamped to `n_elements`.
#[inline]
pub fn chunk_end_exclusive(chunk: usize, n_chunks: usize, n_elements: usize) -> usize {
    chunk
        .saturating_add(1)
        .saturating_mul(chunk_size(n_chunks, n_elements))
        .min(n_elements)
}

/// Deterministic partition of `[0, len)` into `num_tasks` chunks.
///
/// ## Example
/// ```
/// use reciprocal_sum::engine::chunk::ChunkPlan;
/// use reciprocal_sum::IndexRange;
///
/// let plan = ChunkPlan::new(10, 4).unwrap();
/// let ranges: Vec<_> = plan.ranges().collect();
/// assert_eq!(ranges, vec![
///     IndexRange::new(0, 3),
///     IndexRange::new(3, 6),
///     IndexRange::new(6, 9),
///     IndexRange::new(9, 10),
/// ]);
/// ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    len: usize,
    num_tasks: usize,
    chunk_size: usize,
}

impl ChunkPlan {
    /// Plans `num_tasks` chunks over `len` elements.
    ///
    /// ## Errors
    /// Returns [`InvalidTaskCountError`] when `num_tasks == 0`.

    pub fn new(len: usize, num_tasks: usize) -> Result<Self, InvalidTaskCountError> {
        if num_tasks == 0 {
            return Err(InvalidTaskCountError { requested: num_tasks });
        }
        Ok(Self {
            len,
            num_tasks,
            chunk_size: chunk_size(num_tasks, len),
        })
    }

    /// Total number of elements partitioned.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the plan covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks, empty ones included.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Size of every non-final, non-empty chunk.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Range of chunk `i`. Indices past `num_tasks` yield an empty range at `len`.
    #[inline]
    pub fn range(&self, i: usize) -> IndexRange {
        IndexRange::new(
            chunk_start_inclusive(i, self.num_tasks, self.len),
            chunk_end_exclusive(i, self.num_tasks, self.len),
        )
    }

    /// All chunk ranges in index order.
    pub fn ranges(&self) -> impl ExactSizeIterator<Item = IndexRange> + '_ {
        (0..self.num_tasks).map(move |i| self.range(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tasks_is_rejected() {
        assert_eq!(
            ChunkPlan::new(100, 0),
            Err(InvalidTaskCountError { requested: 0 })
        );
    }

    #[test]
    fn last_chunk_is_truncated() {
        let plan = ChunkPlan::new(10, 3).unwrap();
        assert_eq!(plan.chunk_size(), 4);
        let ranges: Vec<_> = plan.ranges().collect();
        assert_eq!(
            ranges,
            vec![IndexRange::new(0, 4), IndexRange::new(4, 8), IndexRange::new(8, 10)]
        );
    }

    #[test]
    fn more_tasks_than_elements_gives_empty_tail() {
        let plan = ChunkPlan::new(3, 5).unwrap();
        let ranges: Vec<_> = plan.ranges().collect();
        assert_eq!(ranges.len(), 5);
        assert_eq!(&ranges[..3], &[IndexRange::new(0, 1), IndexRange::new(1, 2), IndexRange::new(2, 3)]);
        assert!(ranges[3].is_empty() && ranges[4].is_empty());
        assert!(ranges.iter().all(|r| r.end <= 3));
    }

    #[test]
    fn empty_input_gives_all_empty_chunks() {
        let plan = ChunkPlan::new(0, 4).unwrap();
        assert_eq!(plan.chunk_size(), 0);
        assert!(plan.ranges().all(|r| r == IndexRange::new(0, 0)));
    }

    #[test]
    fn range_past_last_chunk_is_empty_at_len() {
        let plan = ChunkPlan::new(10, 3).unwrap();
        assert_eq!(plan.range(3), IndexRange::new(10, 10));
        assert_eq!(plan.range(usize::MAX), IndexRange::new(10, 10));
    }

    #[test]
    fn free_helpers_match_plan() {
        let plan = ChunkPlan::new(2_000_003, 8).unwrap();
        for (i, r) in plan.ranges().enumerate() {
            assert_eq!(r.start, chunk_start_inclusive(i, 8, 2_000_003));
            assert_eq!(r.end, chunk_end_exclusive(i, 8, 2_000_003));
        }
    }
}
