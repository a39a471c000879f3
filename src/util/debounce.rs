//! Generation-counting debouncer.
//!
//! Each call to [`Debouncer::schedule`] supersedes every earlier ticket. The
//! caller sleeps for the quiet period and then asks [`Debouncer::is_current`];
//! only the latest ticket answers `true`, so stale timers turn into no-ops
//! without having to cancel them.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Default)]
pub struct Debouncer {
    generation: Cell<u64>,
}

impl Debouncer {
    /// Start a new quiet period, invalidating any pending ticket.
    pub fn schedule(&self) -> DebounceTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        DebounceTicket(next)
    }

    /// Invalidate the pending ticket without issuing a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    #[must_use]
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.get() == ticket.0
    }
}
