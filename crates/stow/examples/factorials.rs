//! Stow factorials: the same values through four different containers.
//!
//! Demonstrates:
//!   1. An `IndexMap` keyed by index, as a reference
//!   2. The same map with every value routed through an arena-backed `StowVec`
//!   3. A `StowVec` on the default heap
//!   4. A `StowVec` drawing from a logging arena
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p stow --example factorials
//!
//! At `debug` level every arena allocate / release / construct / destroy
//! is logged with its element count and address.

use indexmap::IndexMap;
use stow::prelude::*;
use stow_test_utils::factorial;
use tracing_subscriber::{fmt, EnvFilter};

const COUNT: u64 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // ─── Reference map on the default allocator ────────────────────

    let mut map_default: IndexMap<u64, u64> = IndexMap::new();
    for i in 0..COUNT {
        map_default.insert(i, factorial(i));
    }
    print_pairs(map_default.iter().map(|(&k, &v)| (k, v)));

    // ─── Map whose values live in an arena ─────────────────────────

    let pair_arena = Arena::<(u64, u64)>::new(ArenaConfig::default()).into_shared();
    let mut pairs: StowVec<(u64, u64)> = StowVec::new_in(&pair_arena);
    let mut map_arena: IndexMap<u64, usize> = IndexMap::new();
    for i in 0..COUNT {
        map_arena.insert(i, pairs.len());
        pairs.push((i, factorial(i)))?;
    }
    for (&key, &slot) in &map_arena {
        let (_, value) = pairs.at(slot)?;
        println!("{key} {value}");
    }

    // ─── StowVec on the default heap ───────────────────────────────

    let mut on_heap = StowVec::new();
    for i in 0..COUNT {
        on_heap.push(factorial(i))?;
    }
    for i in 0..on_heap.len() {
        println!("{i} {}", on_heap.at(i)?);
    }

    // ─── StowVec on a logging arena ────────────────────────────────

    let arena = Arena::<u64>::new(ArenaConfig::default()).into_shared();
    let mut in_arena: StowVec<u64> = StowVec::new_in(&arena);
    for i in 0..COUNT {
        in_arena.push(factorial(i))?;
    }
    for i in 0..in_arena.len() {
        println!("{i} {}", in_arena.at(i)?);
    }

    tracing::info!(
        used = arena.used(),
        capacity = arena.capacity(),
        allocations = arena.stats().allocations,
        "arena after {COUNT} pushes"
    );
    Ok(())
}

fn print_pairs(pairs: impl Iterator<Item = (u64, u64)>) {
    for (key, value) in pairs {
        println!("{key} {value}");
    }
}
