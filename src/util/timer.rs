// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Cancellable deferred tasks.
//!
//! A [`DeferredQueue`] holds payloads that become due at some point in the
//! future. It does not own a clock or a thread: callers pass the current
//! [`Instant`] in, and whoever drives the queue (in this application the tick
//! event) polls it for due payloads. This keeps the debounce logic testable
//! without sleeping.

use std::time::{Duration, Instant};

/// Identifies a scheduled entry so that it can be cancelled later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    deadline: Instant,
    payload: T,
}

#[derive(Debug)]
pub(crate) struct DeferredQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due `delay` after `now`.
    pub(crate) fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle(self.next_id);

        self.entries.push(Entry {
            handle,
            deadline: now + delay,
            payload,
        });

        handle
    }

    /// Cancels a scheduled entry, returning `false` if it already fired or was
    /// cancelled before.
    pub(crate) fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Removes and returns every payload whose deadline is at or before `now`,
    /// earliest deadline first.
    pub(crate) fn poll_due(&mut self, now: Instant) -> Vec<T> {
        if self.next_deadline().is_none_or(|deadline| deadline > now) {
            return vec![];
        }

        let (mut due, pending): (Vec<Entry<T>>, Vec<Entry<T>>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;

        due.sort_by_key(|entry| entry.deadline);
        due.into_iter().map(|entry| entry.payload).collect()
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn nothing_is_due_before_the_deadline() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(start, 2 * SECOND, "fetch");

        assert!(queue.poll_due(start + SECOND).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(start + 2 * SECOND));
    }

    #[test]
    fn due_entries_are_removed_in_deadline_order() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(start, 3 * SECOND, "late");
        queue.schedule(start, SECOND, "early");
        queue.schedule(start, 10 * SECOND, "pending");

        assert_eq!(queue.poll_due(start + 5 * SECOND), vec!["early", "late"]);
        assert_eq!(queue.len(), 1);
        assert!(queue.poll_due(start + 5 * SECOND).is_empty());
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        let first = queue.schedule(start, SECOND, 1);
        let second = queue.schedule(start, SECOND, 2);

        assert!(queue.cancel(first));
        assert!(!queue.cancel(first));

        assert_eq!(queue.poll_due(start + SECOND), vec![2]);
        assert!(!queue.cancel(second));
        assert!(queue.is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let now = Instant::now();
        let mut queue = DeferredQueue::new();
        let a = queue.schedule(now, SECOND, ());
        let b = queue.schedule(now, SECOND, ());
        assert_ne!(a, b);
    }
}
