// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives.
//!
//! UI runtimes rarely agree on how timers work: browsers hand out
//! `setTimeout`/`setInterval` handles, native shells poll an event loop, and
//! tests want a clock they can step by hand. This crate provides a small,
//! deterministic [`TimerQueue`] that models one-shot and repeating timers on a
//! virtual monotonic clock. Hosts are expected to:
//! - Issue timers with [`TimerQueue::set_timeout`] / [`TimerQueue::set_interval`]
//!   and keep the returned [`TimerId`] around.
//! - Move the clock forward with [`TimerQueue::advance`] (or
//!   [`TimerQueue::advance_to`]) from their frame or event loop.
//! - Repeatedly call [`TimerQueue::pop_due`] and dispatch each fired id to
//!   whatever owns it.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let once = timers.set_timeout(Duration::from_millis(800));
//! let tick = timers.set_interval(Duration::from_millis(500));
//!
//! timers.advance(Duration::from_millis(1_000));
//!
//! let mut fired = Vec::new();
//! while let Some(id) = timers.pop_due() {
//!     fired.push(id);
//! }
//! // The interval fires at 500 ms, the timeout at 800 ms, the interval again at 1000 ms.
//! assert_eq!(fired, vec![tick, once, tick]);
//! assert!(!timers.is_pending(once));
//! assert!(timers.is_pending(tick));
//! ```
//!
//! Fired ids are yielded earliest deadline first; timers sharing a deadline
//! fire in the order they were issued. A repeating timer that fell behind by
//! several periods is yielded once per missed period.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{MIN_INTERVAL, TimerId, TimerQueue};
