//! Round-scoped pool of biddable seats.
//!
//! The pool is re-armed by the coordinator at the start of every round
//! and drained by racing players; it is never replenished mid-round.
//!
//! The take path is a single atomic read-modify-write, so under
//! concurrent callers exactly `min(armed, callers)` attempts succeed:
//! no double-grant, no lost seat. There is deliberately no blocking
//! variant; once the pool is empty, failure is immediate and final
//! for the round.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counting pool of seats available this round.
#[derive(Debug)]
pub struct SeatPool {
    seats: AtomicUsize,
}

impl SeatPool {
    /// Create an empty pool (zero seats until the first `arm`).
    pub fn new() -> Self {
        SeatPool {
            seats: AtomicUsize::new(0),
        }
    }

    /// Reset the pool to `n` biddable seats.
    ///
    /// Called once per round by the coordinator, before any player is
    /// released to race.
    pub fn arm(&self, n: usize) {
        self.seats.store(n, Ordering::SeqCst);
    }

    /// Attempt to take one seat.
    ///
    /// Returns `true` if a seat was available (the count is decremented),
    /// `false` otherwise (the count stays at zero). The decrement is one
    /// atomic operation, never a separate check-then-decrement.
    pub fn try_take(&self) -> bool {
        self.seats
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Number of seats still biddable.
    pub fn remaining(&self) -> usize {
        self.seats.load(Ordering::Acquire)
    }
}

impl Default for SeatPool {
    fn default() -> Self {
        Self::new()
    }
}
