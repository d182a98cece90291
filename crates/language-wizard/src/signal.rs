//! Reusable broadcast gate behind [`TranslationStore::wait`].
//!
//! A waiter records the generation that is current when it arrives and
//! sleeps until that generation is superseded or the gate is closed. Each
//! trip bumps the generation and wakes every sleeper at once, which leaves
//! the gate armed again for whoever arrives next. Closing is terminal: the
//! flag never clears, so waiters arriving afterwards return without
//! blocking.
//!
//! [`TranslationStore::wait`]: crate::TranslationStore::wait

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::event::Event;

#[derive(Debug, Default)]
struct Gate {
    generation: u64,
    closed: bool,
}

/// Generation counter plus condition variable.
#[derive(Debug, Default)]
pub(crate) struct ChangeSignal {
    gate: Mutex<Gate>,
    tripped: Condvar,
}

impl ChangeSignal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Releases every current waiter with [`Event::LanguageChanged`].
    ///
    /// Does nothing once the gate is closed.
    pub(crate) fn trip(&self) {
        let mut gate = self.lock();
        if gate.closed {
            return;
        }
        gate.generation = gate.generation.wrapping_add(1);
        self.tripped.notify_all();
    }

    /// Releases every current and future waiter with [`Event::Close`].
    pub(crate) fn close(&self) {
        let mut gate = self.lock();
        gate.closed = true;
        gate.generation = gate.generation.wrapping_add(1);
        self.tripped.notify_all();
    }

    /// Blocks until the next trip or close.
    pub(crate) fn wait(&self) -> Event {
        let gate = self.lock();
        let armed_at = gate.generation;
        let gate = self
            .tripped
            .wait_while(gate, |gate| !gate.closed && gate.generation == armed_at)
            .unwrap_or_else(PoisonError::into_inner);

        // The closed flag decides, not the generation, so a waiter released
        // by a close never reports a change.
        if gate.closed {
            Event::Close
        } else {
            Event::LanguageChanged
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
