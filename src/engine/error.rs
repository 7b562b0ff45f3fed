//! Error types for the parallel reducers.
//!
//! The error taxonomy is deliberately narrow. Leaf computation cannot fail:
//! zero or non-finite inputs propagate infinity/NaN through ordinary IEEE 754
//! arithmetic and are a caller precondition, not an error. What remains are
//! failures that happen *before* any arithmetic runs:
//!
//! * an invalid task count passed to the fixed-task reducer,
//! * the operating system refusing to spawn a worker pool.
//!
//! ## Display vs. Debug
//! * [`fmt::Display`] gives a short, lowercase message suitable for logs.
//! * [`fmt::Debug`] (derived) retains full structure for diagnostics.
//!
//! ## Example
//! ```
//! use reciprocal_sum::{fixed_task_parallel_sum, ReduceError};
//!
//! match fixed_task_parallel_sum(&[1.0, 2.0], 0) {
//!     Err(ReduceError::InvalidTaskCount(e)) => assert_eq!(e.requested, 0),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::fmt;


/// Returned when a fixed-task reduction is asked to use zero tasks.
///
/// A chunk plan over zero tasks has no meaningful chunk size, so the request
/// is rejected before any pool is built.
///
/// ### Fields
/// * `requested` — The task count the caller supplied.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTaskCountError {

    /// Task count supplied by the caller.
    pub requested: usize,
}

impl fmt::Display for InvalidTaskCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task count {} (must be at least 1)", self.requested)
    }
}

impl std::error::Error for InvalidTaskCountError {}

/// Returned when a per-call worker pool could not be created.
///
/// Wraps the underlying [`rayon::ThreadPoolBuildError`] together with the
/// thread count that was requested.

#[derive(Debug)]
pub struct PoolBuildError {

    /// Requested worker count; `None` means rayon's default sizing.
    pub threads: Option<usize>,

    /// Underlying rayon failure.
    pub source: rayon::ThreadPoolBuildError,
}

impl fmt::Display for PoolBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threads {
            Some(n) => write!(f, "failed to build worker pool with {n} threads: {}", self.source),
            None => write!(f, "failed to build default worker pool: {}", self.source),
        }
    }
}

impl std::error::Error for PoolBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Aggregate error returned by the parallel reduction entry points.
///
/// `From` conversions exist for each leaf error so internal code can use `?`.

#[derive(Debug)]
pub enum ReduceError {

    /// `num_tasks` was zero.
    InvalidTaskCount(InvalidTaskCountError),

    /// The worker pool could not be created.
    PoolBuild(PoolBuildError),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvalidTaskCount(e) => write!(f, "{e}"),
            ReduceError::PoolBuild(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::InvalidTaskCount(e) => Some(e),
            ReduceError::PoolBuild(e) => Some(e),
        }
    }
}

impl From<InvalidTaskCountError> for ReduceError {
    fn from(e: InvalidTaskCountError) -> Self {
        ReduceError::InvalidTaskCount(e)
    }
}

impl From<PoolBuildError> for ReduceError {
    fn from(e: PoolBuildError) -> Self {
        ReduceError::PoolBuild(e)
    }
}

/// Convenience alias for results produced by the parallel reducers.
pub type ReduceResult<T> = Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_task_count_display() {
        let e: ReduceError = InvalidTaskCountError { requested: 0 }.into();
        assert_eq!(e.to_string(), "invalid task count 0 (must be at least 1)");
        assert!(e.source().is_some());
    }
}
