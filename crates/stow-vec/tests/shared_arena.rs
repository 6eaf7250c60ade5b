//! Integration tests: containers over the heap and over shared arenas.
//!
//! Covers the reference factorial workload on both strategies and the
//! process of several containers exhausting one arena together.

use stow_alloc::{AllocError, AllocOp, Arena, ArenaConfig, SharedArena, Strategy};
use stow_test_utils::{factorials, FACTORIALS_0_TO_9};
use stow_vec::{growth_footprint, SeqError, StowVec};

fn pool(capacity: usize) -> SharedArena<u64> {
    Arena::new(ArenaConfig::new(capacity)).into_shared()
}

// ── Factorial workload ──────────────────────────────────────────────

#[test]
fn factorials_on_default_heap() {
    let mut v = StowVec::new();
    for value in factorials(10) {
        v.push(value).unwrap();
    }

    assert_eq!(v.len(), 10);
    for (i, expected) in FACTORIALS_0_TO_9.iter().enumerate() {
        assert_eq!(v.at(i).unwrap(), expected);
    }
}

#[test]
fn factorials_on_default_arena() {
    let arena = Arena::<u64>::new(ArenaConfig::default()).into_shared();
    let mut v: StowVec<u64> = StowVec::new_in(&arena);
    for value in factorials(10) {
        v.push(value).unwrap();
    }

    assert_eq!(v.as_slice(), &FACTORIALS_0_TO_9);
    assert_eq!(arena.used(), growth_footprint(10).unwrap());
    assert_eq!(arena.used(), 31);
}

#[test]
fn heap_and_arena_containers_agree() {
    let arena = pool(100);
    let mut on_heap = StowVec::new();
    let mut in_arena: StowVec<u64> = StowVec::new_in(&arena);
    for value in factorials(12) {
        on_heap.push(value).unwrap();
        in_arena.push(value).unwrap();
    }
    assert_eq!(on_heap, in_arena);
    assert!(on_heap.iter().eq(in_arena.begin()));
}

// ── Shared pool bound ──────────────────────────────────────────────

#[test]
fn two_containers_exhaust_one_arena_together() {
    let arena = pool(100);
    let mut first: StowVec<u64> = StowVec::new_in(&arena);
    let mut second: StowVec<u64> = StowVec::new_in(&arena);

    // Either container alone fits comfortably.
    assert!(growth_footprint(32).unwrap() <= 100);
    assert!(growth_footprint(17).unwrap() <= 100);

    for i in 0..32 {
        first.push(i).unwrap();
    }
    assert_eq!(arena.used(), 63);

    for i in 0..16 {
        second.push(i).unwrap();
    }
    assert_eq!(arena.used(), 63 + 31);

    // The 17th element needs a 32-slot buffer; only 6 slots are left.
    let err = second.push(16).unwrap_err();
    assert_eq!(
        err,
        SeqError::Alloc(AllocError::PoolExhausted {
            requested: 32,
            remaining: 6
        })
    );
    assert_eq!(second.len(), 16);
    assert_eq!(second.capacity(), 16);
    assert_eq!(first.len(), 32);
}

#[test]
fn separate_arenas_do_not_interfere() {
    let a = pool(100);
    let b = pool(100);
    let mut first: StowVec<u64> = StowVec::new_in(&a);
    let mut second: StowVec<u64> = StowVec::new_in(&b);
    for i in 0..32 {
        first.push(i).unwrap();
        second.push(i).unwrap();
    }
    assert_eq!(a.used(), 63);
    assert_eq!(b.used(), 63);
}

#[test]
fn sixty_elements_outgrow_a_default_arena_alone() {
    let arena = pool(ArenaConfig::DEFAULT_CAPACITY);
    let mut v: StowVec<u64> = StowVec::new_in(&arena);
    let mut pushed = 0;
    for i in 0..60 {
        if v.push(i).is_err() {
            break;
        }
        pushed += 1;
    }
    // Buffers of 1..=32 use 63 slots; the 64-slot buffer does not fit.
    assert_eq!(pushed, 32);
    assert_eq!(arena.remaining(), 37);
}

#[test]
fn churn_consumes_the_pool_monotonically() {
    let arena = pool(100);
    let mut previous = 0;
    let mut rounds = 0;
    loop {
        let mut v: StowVec<u64> = StowVec::new_in(&arena);
        let mut ok = true;
        for i in 0..4 {
            if v.push(i).is_err() {
                ok = false;
                break;
            }
        }
        drop(v);
        assert!(arena.used() >= previous);
        previous = arena.used();
        if !ok {
            break;
        }
        rounds += 1;
    }

    // Each round holds at most four elements yet consumes seven slots that
    // are never given back.
    assert_eq!(rounds, 14);
    let stats = arena.stats();
    assert!(stats.elements_released >= 14 * 7);
    assert_eq!(stats.elements_allocated, arena.used());
    assert_eq!(stats.live_values(), 0);
}

#[test]
fn clones_draw_from_the_same_arena() {
    let arena = pool(20);
    let mut v: StowVec<u64> = StowVec::new_in(&arena);
    v.try_extend([1, 2, 3]).unwrap();
    let copy = v.try_clone().unwrap();
    assert!(copy.strategy().same_source(v.strategy()));
    assert_eq!(arena.used(), 7 + 4);
}

#[test]
fn arena_outlives_its_last_container() {
    let arena = pool(10);
    let weak = std::rc::Rc::downgrade(&arena);
    let v: StowVec<u64> = StowVec::new_in(arena);
    assert!(weak.upgrade().is_some());
    drop(v);
    assert!(weak.upgrade().is_none());
}

#[test]
fn journal_addresses_match_the_container_buffer() {
    let arena = Arena::<u64>::new(ArenaConfig::new(10).with_event_journal()).into_shared();
    let mut v: StowVec<u64> = StowVec::new_in(Strategy::from(&arena));
    v.push(7).unwrap();
    let buffer = v.as_slice().as_ptr().addr();

    let events = arena.events();
    assert_eq!(events[0].op, AllocOp::Allocate);
    assert_eq!(events[0].addr, buffer);
    assert_eq!(events[1].op, AllocOp::Construct);
    assert_eq!(events[1].addr, buffer);
}
