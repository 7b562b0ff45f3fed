//! Adaptive fork/join reduction.
//!
//! ## Algorithm
//! The reducer recursively halves the index range until a subrange holds at
//! most `threshold` elements, sums each such leaf sequentially, and combines
//! partial sums bottom-up:
//!
//! ```text
//! sum([s, e)) = seq([s, e))                      if e - s <= threshold
//!             = sum([s, m)) + sum([m, e))        m = s + (e - s) / 2
//! ```
//!
//! ## Execution model
//! At every split the left half is made available for stealing while the
//! current worker computes the right half itself, then joins on the left.
//! This is `rayon::join` with the closures ordered so that the *right*
//! half runs inline. An idle worker in the pool may steal the left half; if
//! none does, the current worker runs it after finishing the right.
//!
//! ## Determinism
//! Whichever half finishes first, the partial sums are always combined as
//! `left + right`. The tree of additions depends only on the input length and
//! the threshold, so repeated calls on the same input are bit-identical
//! regardless of thread count or scheduling.
//!
//! ## Resources
//! Each call to [`AdaptiveForkJoinReducer::reduce`] builds its own pool and
//! drops it before returning.

use crate::engine::error::ReduceResult;
use crate::engine::pool::PoolConfig;
use crate::engine::sequential::sequential_range_sum;
use crate::engine::types::{IndexRange, ADAPTIVE_WORKER_PREFIX, DEFAULT_ADAPTIVE_THRESHOLD};
use crate::profiling::profiler::{self, Arg};


/// Recursive fork/join reducer over a work-stealing pool.
///
/// ## Configuration
/// * `threshold` — leaf size; ranges this long or shorter are not split.
///   Defaults to [`DEFAULT_ADAPTIVE_THRESHOLD`]. Zero is treated as one.
/// * `threads` — worker count; `None` sizes the pool to the host.
///
/// ## Example
/// ```
/// use reciprocal_sum::AdaptiveForkJoinReducer;
///
/// let reducer = AdaptiveForkJoinReducer::new().with_threshold(2);
/// let sum = reducer.reduce(&[1.0, 2.0, 4.0]).unwrap();
/// assert!((sum - 1.75).abs() < 1e-12);
/// ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdaptiveForkJoinReducer {
    threshold: usize,
    threads: Option<usize>,
}

impl Default for AdaptiveForkJoinReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptiveForkJoinReducer {
    /// Reducer with the default threshold and a host-sized pool.
    pub const fn new() -> Self {
        Self {
            threshold: DEFAULT_ADAPTIVE_THRESHOLD,
            threads: None,
        }
    }

    /// Sets the leaf size. `0` is normalised to `1`.
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = if threshold == 0 { 1 } else { threshold };
        self
    }

    /// Pins the pool to exactly `threads` workers. `0` restores host sizing.
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = if threads == 0 { None } else { Some(threads) };
        self
    }

    /// Current leaf size.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Configured worker count, if pinned.
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Sums the reciprocals of `input` on a fresh pool.
    ///
    /// ## Errors
    /// Fails only if the worker pool cannot be built.

    pub fn reduce(&self, input: &[f64]) -> ReduceResult<f64> {
        let pool = PoolConfig {
            threads: self.threads,
            ..PoolConfig::adaptive(ADAPTIVE_WORKER_PREFIX)
        }
        .build()?;

        let span = profiler::span("reduce::adaptive")
            .arg("len", Arg::U64(input.len() as u64))
            .arg("threshold", Arg::U64(self.threshold as u64))
            .arg("threads", Arg::U64(pool.current_num_threads() as u64));

        let threshold = self.threshold;
        let sum = pool.install(|| fork_join_sum(input, IndexRange::full(input.len()), threshold));
        let _g = span.arg("sum", Arg::F64(sum));
        Ok(sum)
    }
}

/// Recursive body of the adaptive reducer.
///
/// Must run inside a rayon pool for the left halves to be stealable; outside
/// one, `rayon::join` falls back to the global pool.

pub(crate) fn fork_join_sum(input: &[f64], range: IndexRange, threshold: usize) -> f64 {
    if range.len() <= threshold {
        return sequential_range_sum(input, range);
    }

    let (left, right) = range.split_half();

    // join runs its first closure inline and exposes the second to thieves.
    let (right_sum, left_sum) = rayon::join(
        || fork_join_sum(input, right, threshold),
        || fork_join_sum(input, left, threshold),
    );

    left_sum + right_sum
}
