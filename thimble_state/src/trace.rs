// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for state transitions.
//!
//! The machine does not store history. For embedders that want to answer
//! questions like "what happened during that gesture?", this module provides
//! a minimal, additive observer hook plus a small recorder, [`EventLog`],
//! which stores the timestamped transition stream.

use alloc::vec::Vec;

use crate::events::StateEvent;

/// A callback sink for state transitions.
///
/// Install one with
/// [`TouchTracker::set_trace`](crate::machine::TouchTracker::set_trace); the
/// machine invokes it for every event it emits, in order, with the timestamp
/// of the operation that produced it.
pub trait TransitionTrace {
    /// Called once per emitted transition event.
    fn transition(&mut self, now: u64, event: StateEvent);
}

/// Records the full timestamped transition stream.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    entries: Vec<(u64, StateEvent)>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Clears all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The recorded `(timestamp, event)` pairs, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[(u64, StateEvent)] {
        &self.entries
    }

    /// Counts occurrences of `event` in the log.
    #[must_use]
    pub fn count(&self, event: StateEvent) -> usize {
        self.entries.iter().filter(|(_, e)| *e == event).count()
    }
}

impl TransitionTrace for EventLog {
    fn transition(&mut self, now: u64, event: StateEvent) {
        self.entries.push((now, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TouchStatus;

    #[test]
    fn log_records_in_order_with_timestamps() {
        let mut log = EventLog::new();
        log.transition(10, StateEvent::TouchStatusChanged(TouchStatus::Started));
        log.transition(20, StateEvent::TapCompleted);

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].0, 10);
        assert_eq!(log.count(StateEvent::TapCompleted), 1);

        log.clear();
        assert!(log.entries().is_empty());
    }
}
