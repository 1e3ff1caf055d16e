//! Shared game state: who is still in, who sat down this round, and
//! the per-round seat count.
//!
//! One instance is shared by the coordinator and every player for the
//! process lifetime. All fields live behind a single mutex, so the
//! elimination decrement can never race a concurrent read-modify-write;
//! readers may observe a stale-but-monotonically-shrinking count.
//!
//! Invariant owned here: at the start of every round,
//! `seats_this_round == remaining - 1`. Over the course of a round,
//! `remaining` decreases by exactly 1 and `seats_this_round` players
//! register as seated. Violations of that invariant (a second
//! elimination in one round, an unknown player id, a round started with
//! fewer than two players) are programming errors and panic loudly
//! rather than being swallowed.

use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::player_id::PlayerId;

#[derive(Debug)]
struct Inner {
    /// Active player count; decremented exactly once per round, by the
    /// eliminated player's own handling path.
    remaining: usize,

    /// Surviving player identities. Read by the coordinator only at
    /// game end, to report the winner.
    active: BTreeSet<PlayerId>,

    /// Players seated in the current round; cleared by `start_round`.
    seated: Vec<PlayerId>,

    /// Seats biddable this round, recomputed by `start_round`.
    seats_this_round: usize,

    /// Current round number, 1-based. Zero before the first round.
    round: u32,

    /// Whether this round's single elimination already happened.
    eliminated_this_round: bool,
}

/// Shared mutable state of one musical-chairs game.
#[derive(Debug)]
pub struct GameState {
    inner: Mutex<Inner>,
}

impl GameState {
    /// Create the state with the given set of players.
    pub fn new(ids: impl IntoIterator<Item = PlayerId>) -> Self {
        let active: BTreeSet<PlayerId> = ids.into_iter().collect();
        GameState {
            inner: Mutex::new(Inner {
                remaining: active.len(),
                active,
                seated: Vec::new(),
                seats_this_round: 0,
                round: 0,
                eliminated_this_round: false,
            }),
        }
    }

    /// Open the next round: bump the round number, clear the seated
    /// roster, and compute the seat count for the round.
    ///
    /// Returns `remaining - 1`, the number of seats to arm. Called once
    /// per round by the coordinator, before the seat pool is armed.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two players remain; a round with nobody to
    /// eliminate is a violated precondition.
    pub fn start_round(&self) -> usize {
        let mut inner = self.lock();
        assert!(
            inner.remaining >= 2,
            "round started with {} players remaining",
            inner.remaining
        );

        inner.round += 1;
        inner.seated.clear();
        inner.eliminated_this_round = false;
        inner.seats_this_round = inner.remaining - 1;
        inner.seats_this_round
    }

    /// Record that `id` secured a seat this round.
    ///
    /// Called at most once per player per round, by the player itself.
    pub fn register_seated(&self, id: PlayerId) {
        let mut inner = self.lock();
        assert!(
            inner.active.contains(&id),
            "unknown player {} registered seated",
            id
        );
        inner.seated.push(id);
    }

    /// Remove `id` from the game: decrement the live count by exactly
    /// one and drop the id from the active set.
    ///
    /// Called by the eliminated player itself, once per round.
    ///
    /// # Panics
    ///
    /// Panics on a second elimination within the same round or on an id
    /// that is not active — both indicate the armed seat count was
    /// wrong, which is a fatal internal invariant violation.
    pub fn eliminate(&self, id: PlayerId) {
        let mut inner = self.lock();
        assert!(
            !inner.eliminated_this_round,
            "second elimination in round {} (player {})",
            inner.round, id
        );
        assert!(inner.active.remove(&id), "unknown player {} eliminated", id);

        inner.remaining -= 1;
        inner.eliminated_this_round = true;
    }

    /// Number of players still in the game.
    ///
    /// Idempotent between mutations: repeated calls with no intervening
    /// `eliminate` return the same value.
    pub fn remaining_count(&self) -> usize {
        self.lock().remaining
    }

    /// Current round number (zero before the first round starts).
    pub fn round(&self) -> u32 {
        self.lock().round
    }

    /// Seats armed for the current round.
    pub fn seats_this_round(&self) -> usize {
        self.lock().seats_this_round
    }

    /// Players seated so far in the current round, in seating order.
    pub fn seated_this_round(&self) -> Vec<PlayerId> {
        self.lock().seated.clone()
    }

    /// The winner's id, available only once exactly one player remains.
    pub fn sole_survivor_id(&self) -> Option<PlayerId> {
        let inner = self.lock();
        if inner.remaining == 1 {
            inner.active.iter().next().copied()
        } else {
            None
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means another actor panicked mid-update;
        // nothing here can continue meaningfully past that.
        self.inner.lock().expect("game state lock poisoned")
    }
}
