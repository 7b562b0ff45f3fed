/// Chrome Trace (flame-style) execution profiler.
///
/// Records one span per top-level reduction call, with the input length and
/// the threshold or task count as arguments, plus a named lane per pool
/// worker. The resulting JSON opens in:
///
/// - `chrome://tracing`
/// - <https://ui.perfetto.dev>
///
/// ## Feature flag
///
/// Recording is only compiled in with the `profiling` feature:
///
/// ```bash
/// cargo bench --features profiling
/// ```
///
/// Without it every call is an inline no-op, so reducers stay free of
/// observable side effects.
///
/// ## Usage
///
/// ```no_run
/// use reciprocal_sum::profiling::profiler;
///
/// profiler::init("profile/trace.json");
/// let sum = reciprocal_sum::adaptive_parallel_sum(&[1.0, 2.0, 4.0]).unwrap();
/// profiler::shutdown();
/// # let _ = sum;
/// ```

pub mod profiler;
