//! # reciprocal_sum
//!
//! Task-parallel reduction micro-benchmark: the sum of reciprocals of an
//! `f64` slice, computed three ways.
//!
//! ## Reducers
//! - **Sequential** — linear scan; the oracle and the performance floor
//! - **Adaptive fork/join** — recursive halving down to a leaf threshold on
//!   a work-stealing pool sized to the host
//! - **Fixed-task** — `num_tasks` contiguous chunks planned up front, one
//!   leaf task each, on a pool of exactly `num_tasks` workers
//!
//! ## Design Goals
//! - Read-only shared input, no locking
//! - Deterministic combination order, so parallel results are reproducible
//! - One pool per call, released before the call returns

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(dead_code)]

pub mod engine;
/// Feature-gated Chrome Trace profiling of reduction calls.
pub mod profiling;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::reduce::{
    adaptive_parallel_sum,
    fixed_task_parallel_sum,
    sequential_sum,
};

pub use engine::adaptive::AdaptiveForkJoinReducer;
pub use engine::fixed::FixedTaskReducer;
pub use engine::chunk::ChunkPlan;
pub use engine::pool::PoolConfig;

pub use engine::error::{
    ReduceResult,
    ReduceError,
    InvalidTaskCountError,
    PoolBuildError,
};

pub use engine::types::{
    IndexRange,
    DEFAULT_ADAPTIVE_THRESHOLD,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used reduction types.
///
/// Import with:
/// ```rust
/// use reciprocal_sum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        adaptive_parallel_sum,
        fixed_task_parallel_sum,
        sequential_sum,
        AdaptiveForkJoinReducer,
        FixedTaskReducer,
        ReduceError,
        ReduceResult,
    };
}
