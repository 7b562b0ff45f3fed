//! Sequential reciprocal summation.
//!
//! The linear scan here is both the correctness oracle for the parallel
//! reducers and the leaf computation they run on each final subrange.
//!
//! Division by zero is not guarded: a zero element contributes `±inf` and
//! a non-finite element propagates through the sum per IEEE 754.

use crate::engine::types::IndexRange;
use crate::profiling::profiler::{self, Arg};


/// Sums `1 / x` over the indices of `range`, left to right.
///
/// `range` must lie within `input`; the parallel reducers only pass ranges
/// derived from `IndexRange::full(input.len())`.

#[inline]
pub fn sequential_range_sum(input: &[f64], range: IndexRange) -> f64 {
    input[range.as_range()]
        .iter()
        .fold(0.0, |acc, &x| acc + 1.0 / x)
}

/// Sums the reciprocals of every element of `input`, in index order.
///
/// Returns `0.0` for an empty slice.
///
/// ## Example
/// ```
/// use reciprocal_sum::sequential_sum;
/// assert_eq!(sequential_sum(&[1.0, 2.0, 4.0]), 1.75);
/// ```

pub fn sequential_sum(input: &[f64]) -> f64 {
    let span = profiler::span("reduce::sequential").arg("len", Arg::U64(input.len() as u64));
    let sum = sequential_range_sum(input, IndexRange::full(input.len()));
    let _g = span.arg("sum", Arg::F64(sum));
    sum
}
