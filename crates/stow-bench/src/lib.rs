//! Benchmark profiles and utilities for stow.
//!
//! - [`bench_values`]: deterministic value sequence for push workloads
//! - [`arena_for_pushes`]: an arena sized exactly for `n` pushes into one
//!   fresh container

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stow_alloc::{Arena, ArenaConfig, SharedArena};
use stow_vec::growth_footprint;

/// Deterministic pseudo-random values.
///
/// A fixed LCG keyed by `seed`, so every run pushes the same data.
pub fn bench_values(n: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state
        })
        .collect()
}

/// An arena with exactly enough room for `n` pushes into one container.
///
/// # Panics
///
/// Panics if the footprint of `n` pushes overflows `usize`.
pub fn arena_for_pushes<T>(n: usize) -> SharedArena<T> {
    let capacity = growth_footprint(n).expect("bench sizes stay far below usize::MAX");
    Arena::new(ArenaConfig::new(capacity)).into_shared()
}

#[cfg(test)]
mod tests {
    use stow_vec::StowVec;

    use super::*;

    #[test]
    fn bench_values_are_deterministic() {
        assert_eq!(bench_values(16, 42), bench_values(16, 42));
        assert_ne!(bench_values(16, 42), bench_values(16, 43));
    }

    #[test]
    fn arena_for_pushes_fits_exactly() {
        let arena = arena_for_pushes::<u64>(1000);
        let mut v: StowVec<u64> = StowVec::new_in(&arena);
        v.try_extend(bench_values(1000, 7)).unwrap();
        assert_eq!(arena.remaining(), 0);
        assert!(v.push(0).is_err());
    }
}
