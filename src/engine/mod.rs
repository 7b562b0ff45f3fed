//! # Engine Module
//!
//! Reduction engine implementation.
//!
//! This module contains the building blocks of the three reducers:
//! - Index ranges and tuning constants
//! - Chunk planning for the fixed fan-out
//! - The sequential leaf computation
//! - Per-call worker pools
//! - The adaptive fork/join and fixed-task reducers
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod chunk;
pub mod sequential;
pub mod pool;
pub mod adaptive;
pub mod fixed;
pub mod reduce;
