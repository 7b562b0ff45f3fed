//! Per-call worker pools.
//!
//! Each top-level parallel reduction owns a fresh [`rayon::ThreadPool`]. The
//! pool is built at the start of the call, used through
//! [`rayon::ThreadPool::install`] or [`rayon::ThreadPool::scope`], and
//! dropped when the call returns. Dropping a rayon pool tells its workers to
//! terminate, so no threads outlive the reduction on any exit path.
//!
//! No process-wide pool is touched: `rayon`'s global pool is never
//! configured or used by this crate.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::engine::error::PoolBuildError;
use crate::profiling::profiler;


/// Description of a worker pool to be built for a single reduction.
///
/// ## Fields
/// * `threads` — exact worker count, or `None` for rayon's default
///   (the host's available parallelism, or `RAYON_NUM_THREADS` when set).
/// * `name_prefix` — worker thread names become `"{prefix}-{index}"`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Exact worker count; `None` defers to rayon.
    pub threads: Option<usize>,

    /// Prefix for worker thread names.
    pub name_prefix: &'static str,
}

impl PoolConfig {
    /// Pool sized to the host's available parallelism.
    pub const fn adaptive(name_prefix: &'static str) -> Self {
        Self { threads: None, name_prefix }
    }

    /// Pool with exactly `threads` workers.
    pub const fn exact(threads: usize, name_prefix: &'static str) -> Self {
        Self { threads: Some(threads), name_prefix }
    }

    /// Builds the pool.
    ///
    /// Worker threads are named and, when profiling is enabled, registered
    /// with the trace so per-worker lanes carry readable labels.
    ///
    /// ## Errors
    /// Returns [`PoolBuildError`] if the OS refuses to spawn worker threads.

    pub fn build(&self) -> Result<ThreadPool, PoolBuildError> {
        let prefix = self.name_prefix;
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(move |i| format!("{prefix}-{i}"))
            .start_handler(move |i| profiler::thread_name(format!("{prefix}-{i}")));

        if let Some(n) = self.threads {
            builder = builder.num_threads(n);
        }

        builder.build().map_err(|source| PoolBuildError {
            threads: self.threads,
            source,
        })
    }
}
