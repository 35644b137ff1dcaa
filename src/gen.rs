// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generation Context
//!
//! A `Gen` bundles the random number generator with the current size
//! parameter. It is threaded by `&mut` through the suite runner, the tester
//! dispatch and the shrink search; there is no process-wide random state, so a
//! fixed seed replays a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source plus the size bound for generated values
#[derive(Debug, Clone)]
pub struct Gen {
    rng: StdRng,
    size: usize,
}

impl Gen {
    /// Deterministic generator for a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            size: 0,
        }
    }

    /// Current size parameter
    pub fn size(&self) -> usize {
        self.size
    }

    /// Replace the size parameter
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Uniform natural in `lo..=hi`
    ///
    /// Bounds are swapped when given out of order.
    pub fn choose_nat(&mut self, lo: u64, hi: u64) -> u64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform integer in `lo..=hi`
    pub fn choose_int(&mut self, lo: i64, hi: i64) -> i64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.gen_range(lo..=hi)
    }

    /// Fair coin
    pub fn choose_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
