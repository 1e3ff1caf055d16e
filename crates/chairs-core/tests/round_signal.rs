// crates/chairs-core/tests/round_signal.rs

use std::sync::Arc;

use chairs_core::RoundSignal;

/// Give spawned waiters a chance to reach their suspension point on the
/// current-thread test runtime.
async fn let_waiters_block() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn stop_releases_all_waiters_at_once() {
    let signal = Arc::new(RoundSignal::new());

    let mut waiters = Vec::new();
    for _ in 0..5 {
        let signal = Arc::clone(&signal);
        waiters.push(tokio::spawn(async move {
            signal.wait_for_stop().await;
        }));
    }

    let_waiters_block().await;
    for waiter in &waiters {
        assert!(!waiter.is_finished(), "waiter released before stop");
    }

    signal.stop();

    for waiter in waiters {
        waiter.await.expect("waiter panicked");
    }
}

#[tokio::test]
async fn late_arrival_returns_immediately() {
    let signal = RoundSignal::new();
    signal.stop();

    // No other task will ever touch the signal; this only returns if
    // the already-stopped state is observed on entry.
    signal.wait_for_stop().await;
    assert!(signal.is_stopped());
}

#[tokio::test]
async fn reset_reblocks_waiters_until_the_next_stop() {
    let signal = Arc::new(RoundSignal::new());

    // Round 1.
    signal.stop();
    assert!(signal.is_stopped());

    // Round 2 opens; a waiter arriving now must block again.
    signal.reset();
    assert!(!signal.is_stopped());

    let waiter = {
        let signal = Arc::clone(&signal);
        tokio::spawn(async move {
            signal.wait_for_stop().await;
        })
    };

    let_waiters_block().await;
    assert!(!waiter.is_finished(), "waiter saw a stale stop");

    signal.stop();
    waiter.await.expect("waiter panicked");
}

#[tokio::test]
async fn waiter_parked_before_the_stop_is_released_by_it() {
    let signal = Arc::new(RoundSignal::new());

    let waiter = {
        let signal = Arc::clone(&signal);
        tokio::spawn(async move {
            signal.wait_for_stop().await;
        })
    };

    let_waiters_block().await;
    signal.stop();

    waiter.await.expect("waiter panicked");
}
