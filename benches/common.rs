#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ELEMENTS_SMALL: usize = 2_000_000;
pub const ELEMENTS_LARGE: usize = 200_000_000;

/// Seeded input of uniform integers in `[1, 100]`.
pub fn make_input(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(314);
    (0..n).map(|_| rng.random_range(1..=100u32) as f64).collect()
}

pub fn ncores() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
