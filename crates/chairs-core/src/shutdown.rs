//! Process-wide shutdown flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Terminal, set-once flag raised by the coordinator when a sole
/// survivor has been determined.
///
/// Players check it on every release from the round signal and at the
/// top of their loop; once set, they terminate without racing.
#[derive(Debug)]
pub struct ShutdownFlag {
    triggered: AtomicBool,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        ShutdownFlag {
            triggered: AtomicBool::new(false),
        }
    }

    /// Raise the flag. There is no way to lower it again.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::Release);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::Acquire)
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}
