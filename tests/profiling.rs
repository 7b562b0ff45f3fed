#![cfg(feature = "profiling")]

use serde_json::Value;

use reciprocal_sum::profiling::profiler::{self, Arg};
use reciprocal_sum::{sequential_sum, AdaptiveForkJoinReducer, FixedTaskReducer};

fn span<'a>(events: &'a [Value], name: &str) -> &'a Value {
    events
        .iter()
        .find(|e| e["ph"] == "X" && e["name"] == name)
        .unwrap_or_else(|| panic!("no span named {name:?}"))
}

fn has_worker_lane(events: &[Value], prefix: &str) -> bool {
    events.iter().any(|e| {
        e["ph"] == "M"
            && e["name"] == "thread_name"
            && e["args"]["name"].as_str().is_some_and(|n| n.starts_with(prefix))
    })
}

// The recorder is process-wide and starts once, so everything runs in one test.
#[test]
fn trace_file_records_reductions_and_worker_lanes() {
    let path = std::env::temp_dir().join(format!("reciprocal_sum_trace_{}.json", std::process::id()));
    profiler::init(&path);

    let input: Vec<f64> = (0..20_000).map(|i| (i % 50 + 1) as f64).collect();
    let adaptive = AdaptiveForkJoinReducer::new().with_threads(2).reduce(&input).unwrap();
    let fixed = FixedTaskReducer::new().reduce(&[1.0, 2.0], 3).unwrap();
    let degenerate = sequential_sum(&[0.0]);
    {
        let _g = profiler::span("odd \"name\"\twith\u{1}ctl").arg("nan", Arg::F64(f64::NAN));
    }

    profiler::shutdown();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let trace: Value = serde_json::from_str(&text).unwrap();
    let events = trace["traceEvents"].as_array().unwrap();

    let a = &span(events, "reduce::adaptive")["args"];
    assert_eq!(a["len"], 20_000);
    assert_eq!(a["threshold"], 5_000);
    assert_eq!(a["threads"], 2);
    assert_eq!(a["sum"].as_f64().unwrap(), adaptive);

    let f = &span(events, "reduce::fixed_task")["args"];
    assert_eq!(f["len"], 2);
    assert_eq!(f["num_tasks"], 3);
    assert_eq!(f["threads"], 3);
    assert_eq!(f["chunk_size"], 1);
    assert_eq!(f["sum"].as_f64().unwrap(), fixed);

    // Non-finite sums are written as strings so the file stays valid JSON.
    assert!(degenerate.is_infinite());
    let s = &span(events, "reduce::sequential")["args"];
    assert_eq!(s["len"], 1);
    assert_eq!(s["sum"], "inf");

    let odd = span(events, "odd \"name\"\twith\u{1}ctl");
    assert_eq!(odd["args"]["nan"], "NaN");

    assert!(has_worker_lane(events, "adaptive-worker-"));
    assert!(has_worker_lane(events, "fixed-task-worker-"));
}
