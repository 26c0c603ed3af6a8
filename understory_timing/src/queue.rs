// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

/// Shortest period accepted by [`TimerQueue::set_interval`].
///
/// Shorter periods are raised to this value so that a single
/// [`TimerQueue::advance`] can never produce an unbounded number of ticks.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle for a timer issued by a [`TimerQueue`].
///
/// Ids are never reused by the queue that issued them, so a stale id can be
/// compared against freshly issued ones without ambiguity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
}

/// Deterministic queue of one-shot and repeating timers on a virtual clock.
///
/// The clock starts at zero and only moves when the host calls
/// [`TimerQueue::advance`] or [`TimerQueue::advance_to`]. Nothing fires on
/// its own; due timers are collected with [`TimerQueue::pop_due`].
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Issues a one-shot timer due `delay` after the current time.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.insert(self.now.saturating_add(delay), None)
    }

    /// Issues a repeating timer first due one `period` from now.
    ///
    /// Periods shorter than [`MIN_INTERVAL`] are raised to it.
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_INTERVAL);
        self.insert(self.now.saturating_add(period), Some(period))
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the id is unknown, already fired (one-shot) or
    /// already cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while `id` is scheduled to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the next deadline of `id`, if it is still pending.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.deadline)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Moves the clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Moves the clock to `time`. The clock never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        if time > self.now {
            self.now = time;
        }
    }

    /// Removes and returns the earliest timer whose deadline has passed.
    ///
    /// Repeating timers stay pending with their deadline pushed back by one
    /// period. Returns `None` once nothing is due at the current time.
    pub fn pop_due(&mut self) -> Option<TimerId> {
        let now = self.now;
        let (index, entry) = self
            .entries
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))?;
        match entry.period {
            Some(period) => {
                self.entries[index].deadline = entry.deadline.saturating_add(period);
            }
            None => {
                self.entries.swap_remove(index);
            }
        }
        Some(entry.id)
    }

    fn insert(&mut self, deadline: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            period,
        });
        id
    }
}
