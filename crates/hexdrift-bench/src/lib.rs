//! Benchmark profiles and utilities for the Hexdrift engine.
//!
//! - [`reference_config`]: radius 16 window (721 cells), default rates
//! - [`stress_config`]: radius 64 window (12 097 cells), short rebase limits
//! - [`random_walk`]: deterministic steering sequence via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexdrift_core::Direction;
use hexdrift_engine::EngineConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reference profile: a radius-16 window with the default generator rates.
pub fn reference_config(seed: u64) -> EngineConfig {
    EngineConfig {
        radius: 16,
        seed,
        ..EngineConfig::default()
    }
}

/// Stress profile: a radius-64 window with frequent rebases of both frames.
pub fn stress_config(seed: u64) -> EngineConfig {
    EngineConfig {
        radius: 64,
        expire: 512,
        time_limit: 257,
        move_limit: 129,
        spatial_range: 96,
        seed,
        ..EngineConfig::default()
    }
}

/// A walk of `len` steps that turns at most one step per move, so it
/// wanders rather than reversing onto itself.
pub fn random_walk(len: usize, seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut heading = Direction::East;
    (0..len)
        .map(|_| {
            heading = match rng.random_range(0..4u8) {
                0 => heading.rotated_cw(),
                1 => heading.rotated_ccw(),
                _ => heading,
            };
            heading
        })
        .collect()
}
