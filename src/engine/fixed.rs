//! Fixed-task parallel reduction.
//!
//! Unlike the adaptive reducer, the fan-out here is flat and decided up
//! front: a [`ChunkPlan`] cuts `[0, len)` into exactly `num_tasks` ranges and
//! each range becomes one leaf task on a pool of exactly `num_tasks` workers.
//! Leaves never split further.
//!
//! ## Determinism
//! Tasks write their partial sums into a slot indexed by chunk number. Once
//! the scope has joined every task, the slots are added in chunk order, so
//! the result does not depend on completion order.

use crate::engine::chunk::ChunkPlan;
use crate::engine::error::ReduceResult;
use crate::engine::pool::PoolConfig;
use crate::engine::sequential::sequential_range_sum;
use crate::engine::types::FIXED_TASK_WORKER_PREFIX;
use crate::profiling::profiler::{self, Arg};


/// Flat fan-out reducer with a caller-chosen task count.
///
/// ## Example
/// ```
/// use reciprocal_sum::FixedTaskReducer;
///
/// // More tasks than elements: trailing chunks are empty and add zero.
/// let sum = FixedTaskReducer::new().reduce(&[1.0, 2.0, 4.0], 8).unwrap();
/// assert!((sum - 1.75).abs() < 1e-12);
/// ```

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedTaskReducer;

impl FixedTaskReducer {
    /// Creates the reducer. It carries no state between calls.
    pub const fn new() -> Self {
        FixedTaskReducer
    }

    /// Sums the reciprocals of `input` using exactly `num_tasks` leaf tasks.
    ///
    /// ## Errors
    /// * [`ReduceError::InvalidTaskCount`](crate::ReduceError::InvalidTaskCount)
    ///   when `num_tasks == 0`; checked before any thread is spawned.
    /// * [`ReduceError::PoolBuild`](crate::ReduceError::PoolBuild) if the
    ///   worker pool cannot be created.
    ///
    /// ## Cost
    /// The pool gets one OS thread per task, spawned before any summing
    /// starts, even when most chunks are empty. A `num_tasks` far above the
    /// input length or the core count pays thread startup for nothing, and
    /// very large values can hit the OS thread limit and surface as
    /// `PoolBuild`.

    pub fn reduce(&self, input: &[f64], num_tasks: usize) -> ReduceResult<f64> {
        let plan = ChunkPlan::new(input.len(), num_tasks)?;
        let pool = PoolConfig::exact(num_tasks, FIXED_TASK_WORKER_PREFIX).build()?;

        let span = profiler::span("reduce::fixed_task")
            .arg("len", Arg::U64(input.len() as u64))
            .arg("num_tasks", Arg::U64(num_tasks as u64))
            .arg("threads", Arg::U64(pool.current_num_threads() as u64))
            .arg("chunk_size", Arg::U64(plan.chunk_size() as u64));

        let mut partials = vec![0.0f64; plan.num_tasks()];

        pool.scope(|s| {
            for (slot, range) in partials.iter_mut().zip(plan.ranges()) {
                s.spawn(move |_| {
                    *slot = sequential_range_sum(input, range);
                });
            }
        });

        let sum = partials.iter().fold(0.0, |acc, &p| acc + p);
        let _g = span.arg("sum", Arg::F64(sum));
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::ReduceError;
    use crate::engine::sequential::sequential_sum;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i % 89 + 1) as f64).collect()
    }

    /// Reference fold over the same chunk plan on one thread.
    fn chunked_sum(input: &[f64], num_tasks: usize) -> f64 {
        let plan = ChunkPlan::new(input.len(), num_tasks).unwrap();
        plan.ranges()
            .map(|r| sequential_range_sum(input, r))
            .fold(0.0, |acc, p| acc + p)
    }

    #[test]
    fn zero_tasks_fails_fast() {
        let err = FixedTaskReducer::new().reduce(&[1.0], 0).unwrap_err();
        assert!(matches!(err, ReduceError::InvalidTaskCount(e) if e.requested == 0));
    }

    #[test]
    fn empty_input_is_zero_for_any_task_count() {
        for n in [1, 2, 16] {
            assert_eq!(FixedTaskReducer::new().reduce(&[], n).unwrap(), 0.0);
        }
    }

    #[test]
    fn single_task_matches_sequential_exactly() {
        let input = ramp(10_000);
        assert_eq!(FixedTaskReducer::new().reduce(&input, 1).unwrap(), sequential_sum(&input));
    }

    #[test]
    fn chunk_order_fold_is_bit_identical() {
        let input = ramp(100_003);
        for n in [2, 3, 8, 13] {
            let got = FixedTaskReducer::new().reduce(&input, n).unwrap();
            assert_eq!(got.to_bits(), chunked_sum(&input, n).to_bits());
        }
    }

    #[test]
    fn many_tasks_on_tiny_input_still_sums() {
        let sum = FixedTaskReducer::new().reduce(&[4.0], 64).unwrap();
        assert_eq!(sum, 0.25);
    }
}
