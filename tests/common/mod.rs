#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TWO_MILLION: usize = 2_000_000;
pub const SEED: u64 = 314;

/// Uniform random integers in `[1, 100]`, so no element is zero.
pub fn create_array(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.random_range(1..=100u32) as f64).collect()
}

pub fn ncores() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    let err = (actual - expected).abs();
    assert!(
        err < tol,
        "result mismatch: expected = {expected}, calculated = {actual}, absolute error = {err}"
    );
}
