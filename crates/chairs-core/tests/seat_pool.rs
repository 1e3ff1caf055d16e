// crates/chairs-core/tests/seat_pool.rs
//
// The seat pool is the one structure the whole game's safety rests on:
// under concurrent takers, exactly min(armed, callers) attempts may
// succeed. These tests race real OS threads through a barrier so every
// taker hits the pool at the same instant.

use std::sync::{Arc, Barrier};
use std::thread;

use chairs_core::SeatPool;

fn race_takers(pool: &Arc<SeatPool>, callers: usize) -> usize {
    let barrier = Arc::new(Barrier::new(callers));
    let mut handles = Vec::with_capacity(callers);

    for _ in 0..callers {
        let pool = Arc::clone(pool);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            pool.try_take()
        }));
    }

    handles
        .into_iter()
        .map(|h| h.join().expect("taker thread panicked"))
        .filter(|&granted| granted)
        .count()
}

#[test]
fn more_takers_than_seats_grants_exactly_armed_count() {
    let pool = Arc::new(SeatPool::new());
    pool.arm(3);

    let granted = race_takers(&pool, 4);

    assert_eq!(granted, 3);
    assert_eq!(pool.remaining(), 0);
}

#[test]
fn heavy_contention_never_overgrants() {
    let pool = Arc::new(SeatPool::new());
    pool.arm(7);

    let granted = race_takers(&pool, 16);

    assert_eq!(granted, 7);
    assert_eq!(pool.remaining(), 0);
}

#[test]
fn fewer_takers_than_seats_all_succeed() {
    let pool = Arc::new(SeatPool::new());
    pool.arm(5);

    let granted = race_takers(&pool, 3);

    assert_eq!(granted, 3);
    assert_eq!(pool.remaining(), 2);
}

#[test]
fn unarmed_pool_rejects_everyone() {
    let pool = SeatPool::new();

    assert!(!pool.try_take());
    assert_eq!(pool.remaining(), 0);
}

#[test]
fn zero_armed_pool_rejects_everyone() {
    let pool = Arc::new(SeatPool::new());
    pool.arm(0);

    let granted = race_takers(&pool, 4);

    assert_eq!(granted, 0);
}

#[test]
fn rearming_restores_capacity_for_the_next_round() {
    let pool = SeatPool::new();

    pool.arm(2);
    assert!(pool.try_take());
    assert!(pool.try_take());
    assert!(!pool.try_take());

    // Next round: one fewer seat, full capacity again.
    pool.arm(1);
    assert_eq!(pool.remaining(), 1);
    assert!(pool.try_take());
    assert!(!pool.try_take());
}

#[test]
fn failed_take_leaves_the_count_at_zero() {
    let pool = SeatPool::new();
    pool.arm(1);

    assert!(pool.try_take());
    assert!(!pool.try_take());
    assert!(!pool.try_take());
    assert_eq!(pool.remaining(), 0);
}
