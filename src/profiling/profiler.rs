//! Chrome Trace profiling for reductions.
//!
//! Feature-gated with `--features profiling`.
//!
//! Usage:
//!   reciprocal_sum::profiling::profiler::init("profile/trace.json");
//!   let sum = reciprocal_sum::adaptive_parallel_sum(&input)?;
//!   reciprocal_sum::profiling::profiler::shutdown();

use std::path::Path;

#[cfg(feature = "profiling")]
mod enabled {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::{Mutex, OnceLock, PoisonError};
    use std::time::Instant;

    use super::*;


    /// One recorded trace event.
    #[derive(Debug)]
    enum TraceEvent {
        /// `ph:"X"` complete event.
        Span {
            name: &'static str,
            ts_us: u64,
            dur_us: u64,
            tid: u64,
            args: Vec<(&'static str, Arg)>,
        },
        /// `ph:"M"` thread-name metadata.
        ThreadName { tid: u64, name: String },
    }

    struct Recorder {
        start: Instant,
        out_path: PathBuf,
        recording: AtomicBool,
        events: Mutex<Vec<TraceEvent>>,
    }

    static RECORDER: OnceLock<Recorder> = OnceLock::new();
    static NEXT_TID: AtomicU64 = AtomicU64::new(1);

    thread_local! {
        static TID: u64 = NEXT_TID.fetch_add(1, Ordering::Relaxed);
    }

    fn tid() -> u64 {
        TID.with(|t| *t)
    }

    fn active() -> Option<&'static Recorder> {
        RECORDER
            .get()
            .filter(|r| r.recording.load(Ordering::Acquire))
    }

    fn record(rec: &Recorder, ev: TraceEvent) {
        rec.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ev);
    }

    /// Starts recording. Later calls are ignored.
    pub fn init<P: AsRef<Path>>(path: P) {
        let _ = RECORDER.set(Recorder {
            start: Instant::now(),
            out_path: path.as_ref().to_path_buf(),
            recording: AtomicBool::new(true),
            events: Mutex::new(Vec::new()),
        });
    }

    /// Stops recording and writes the trace file.
    pub fn shutdown() {
        if let Some(rec) = RECORDER.get() {
            rec.recording.store(false, Ordering::Release);
            if let Err(e) = write_trace(rec) {
                eprintln!("profiler::shutdown failed to write trace: {e}");
            }
        }
    }

    /// Labels the calling thread in the trace viewer.
    pub fn thread_name(name: impl Into<String>) {
        if let Some(rec) = active() {
            record(rec, TraceEvent::ThreadName { tid: tid(), name: name.into() });
        }
    }

    /// Opens a span that is recorded when the guard drops.
    pub fn span(name: &'static str) -> SpanGuard {
        match active() {
            Some(rec) => SpanGuard {
                inner: Some(OpenSpan {
                    name,
                    start: rec.start.elapsed().as_micros() as u64,
                    tid: tid(),
                    args: Vec::new(),
                }),
            },
            None => SpanGuard { inner: None },
        }
    }

    struct OpenSpan {
        name: &'static str,
        start: u64,
        tid: u64,
        args: Vec<(&'static str, Arg)>,
    }

    /// RAII guard for an open span.
    pub struct SpanGuard {
        inner: Option<OpenSpan>,
    }

    impl SpanGuard {
        /// Attaches an argument shown in the span's detail pane.
        #[inline]
        pub fn arg(mut self, key: &'static str, value: Arg) -> Self {
            if let Some(open) = self.inner.as_mut() {
                open.args.push((key, value));
            }
            self
        }
    }

    impl Drop for SpanGuard {
        fn drop(&mut self) {
            let (Some(open), Some(rec)) = (self.inner.take(), active()) else {
                return;
            };
            let now = rec.start.elapsed().as_micros() as u64;
            record(
                rec,
                TraceEvent::Span {
                    name: open.name,
                    ts_us: open.start,
                    dur_us: now.saturating_sub(open.start),
                    tid: open.tid,
                    args: open.args,
                },
            );
        }
    }

    fn write_trace(rec: &Recorder) -> std::io::Result<()> {
        let events = std::mem::take(&mut *rec.events.lock().unwrap_or_else(PoisonError::into_inner));

        if let Some(parent) = rec.out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut w = BufWriter::new(File::create(&rec.out_path)?);

        write!(w, "{{\"traceEvents\":[")?;
        for (i, ev) in events.iter().enumerate() {
            if i > 0 {
                write!(w, ",")?;
            }
            match ev {
                TraceEvent::Span { name, ts_us, dur_us, tid, args } => {
                    write!(w, "{{\"name\":")?;
                    write_json_string(&mut w, name)?;
                    write!(
                        w,
                        ",\"cat\":\"reduce\",\"ph\":\"X\",\"ts\":{ts_us},\"dur\":{dur_us},\"pid\":1,\"tid\":{tid}"
                    )?;
                    if !args.is_empty() {
                        write!(w, ",\"args\":{{")?;
                        for (j, (k, v)) in args.iter().enumerate() {
                            if j > 0 {
                                write!(w, ",")?;
                            }
                            write_json_string(&mut w, k)?;
                            write!(w, ":")?;
                            write_arg(&mut w, v)?;
                        }
                        write!(w, "}}")?;
                    }
                    write!(w, "}}")?;
                }
                TraceEvent::ThreadName { tid, name } => {
                    write!(
                        w,
                        "{{\"name\":\"thread_name\",\"ph\":\"M\",\"pid\":1,\"tid\":{tid},\"args\":{{\"name\":"
                    )?;
                    write_json_string(&mut w, name)?;
                    write!(w, "}}}}")?;
                }
            }
        }
        write!(w, "]}}")?;
        w.flush()
    }

    fn write_arg<W: Write>(w: &mut W, v: &Arg) -> std::io::Result<()> {
        match v {
            Arg::U64(n) => write!(w, "{n}"),
            Arg::F64(x) if x.is_finite() => write!(w, "{x}"),
            // NaN and inf are not valid JSON numbers
            Arg::F64(x) => write_json_string(w, &x.to_string()),
        }
    }

    fn write_json_string<W: Write>(w: &mut W, s: &str) -> std::io::Result<()> {
        write!(w, "\"")?;
        for ch in s.chars() {
            match ch {
                '"' => write!(w, "\\\"")?,
                '\\' => write!(w, "\\\\")?,
                c if c.is_control() => write!(w, "\\u{:04x}", c as u32)?,
                c => write!(w, "{c}")?,
            }
        }
        write!(w, "\"")
    }
}

#[cfg(not(feature = "profiling"))]
mod disabled {
    use super::*;

    /// No-op.
    #[inline]
    pub fn init<P: AsRef<Path>>(_path: P) {}

    /// No-op.
    #[inline]
    pub fn shutdown() {}

    /// No-op.
    #[inline]
    pub fn thread_name(_name: impl Into<String>) {}

    /// Returns an inert guard.
    #[inline]
    pub fn span(_name: &'static str) -> SpanGuard {
        SpanGuard
    }

    /// Inert span guard.
    pub struct SpanGuard;

    impl SpanGuard {
        /// No-op.
        #[inline]
        pub fn arg(self, _key: &'static str, _value: Arg) -> Self {
            self
        }
    }
}

/// Argument value attached to a span.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Unsigned integer value (lengths, counts, thresholds).
    U64(u64),

    /// Floating-point value (the reduced sum).
    F64(f64),
}

#[cfg(feature = "profiling")]
pub use enabled::{init, shutdown, span, thread_name, SpanGuard};

#[cfg(not(feature = "profiling"))]
pub use disabled::{init, shutdown, span, thread_name, SpanGuard};
