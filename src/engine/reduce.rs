//! Top-level reduction entry points.
//!
//! This module exposes the three pure functions callers use to compute
//! `Σ 1/x` over a read-only slice:
//!
//! * [`sequential_sum`] — single-threaded linear scan (re-exported from
//!   [`crate::engine::sequential`]),
//! * [`adaptive_parallel_sum`] — recursive fork/join over a pool sized to
//!   the host,
//! * [`fixed_task_parallel_sum`] — flat fan-out over exactly `num_tasks`
//!   chunks.
//!
//! ## Execution model
//! Both parallel variants run in two phases:
//!
//! 1. **Parallel accumulation**
//!    * Each task sums a disjoint index range of the shared input.
//!    * The input is never mutated, so tasks need no synchronization.
//!
//! 2. **Deterministic combination**
//!    * Partial sums are added in a fixed order: left before right for the
//!      fork/join tree, chunk index order for the fixed fan-out.
//!    * The order depends only on input length and the tuning parameter,
//!      never on which worker finished first.
//!
//! Floating-point addition is not associative, so the parallel results can
//! differ from [`sequential_sum`] in the last bits. They never differ from
//! themselves across runs.
//!
//! ## Preconditions
//! Elements should be finite and non-zero. This is not checked; violating it
//! yields `inf` or `NaN` rather than an error.
//!
//! ## Usage example
//! ```
//! use reciprocal_sum::{adaptive_parallel_sum, fixed_task_parallel_sum, sequential_sum};
//!
//! let input = [1.0, 2.0, 4.0];
//! let expected = sequential_sum(&input);
//!
//! assert!((adaptive_parallel_sum(&input)? - expected).abs() < 1e-12);
//! assert!((fixed_task_parallel_sum(&input, 2)? - expected).abs() < 1e-12);
//! # Ok::<(), reciprocal_sum::ReduceError>(())
//! ```

use crate::engine::adaptive::AdaptiveForkJoinReducer;
use crate::engine::error::ReduceResult;
use crate::engine::fixed::FixedTaskReducer;

pub use crate::engine::sequential::sequential_sum;


/// Sums reciprocals with the adaptive fork/join reducer at its defaults.
///
/// Equivalent to `AdaptiveForkJoinReducer::new().reduce(input)`.
///
/// ## Errors
/// Fails only if the worker pool cannot be built.

pub fn adaptive_parallel_sum(input: &[f64]) -> ReduceResult<f64> {
    AdaptiveForkJoinReducer::new().reduce(input)
}

/// Sums reciprocals with `num_tasks` statically partitioned leaf tasks.
///
/// Equivalent to `FixedTaskReducer::new().reduce(input, num_tasks)`.
///
/// ## Errors
/// * `num_tasks == 0` → [`ReduceError::InvalidTaskCount`](crate::ReduceError::InvalidTaskCount)
/// * pool creation failure → [`ReduceError::PoolBuild`](crate::ReduceError::PoolBuild)

pub fn fixed_task_parallel_sum(input: &[f64], num_tasks: usize) -> ReduceResult<f64> {
    FixedTaskReducer::new().reduce(input, num_tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_agree_on_small_input() {
        let input = [1.0, 2.0, 4.0];
        assert_eq!(sequential_sum(&input), 1.75);
        assert!((adaptive_parallel_sum(&input).unwrap() - 1.75).abs() < 1e-12);
        for n in 1..=5 {
            assert!((fixed_task_parallel_sum(&input, n).unwrap() - 1.75).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(adaptive_parallel_sum(&[]).unwrap(), 0.0);
        assert_eq!(fixed_task_parallel_sum(&[], 3).unwrap(), 0.0);
    }
}
