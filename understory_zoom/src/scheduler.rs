// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::Point;

use crate::host::Timers;
use crate::request::Callback;

/// Which transitions of a [`crate::ZoomPort`] are waiting on a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PendingTransitions {
    /// The delay before edge panning starts.
    pub pan_engage: bool,
    /// The repeating edge-pan tick.
    pub pan_update: bool,
    /// The completion callback.
    pub completion: bool,
    /// Outstanding steps of an eased scroll.
    pub scroll_steps: usize,
}

impl PendingTransitions {
    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// What a fired timer meant to its viewport.
pub(crate) enum Fired {
    PanEngage,
    PanTick,
    Complete(Callback),
    ScrollStep(Point),
}

/// Timer handles owned by one viewport.
///
/// Each slot holds at most one timer; arming a slot cancels whatever it held.
pub(crate) struct Transitions<T> {
    pan_engage: Option<T>,
    pan_update: Option<T>,
    completion: Option<(T, Callback)>,
    scroll_steps: Vec<(T, Point)>,
}

impl<T: Copy + Eq> Transitions<T> {
    pub(crate) fn new() -> Self {
        Self {
            pan_engage: None,
            pan_update: None,
            completion: None,
            scroll_steps: Vec::new(),
        }
    }

    pub(crate) fn cancel_all<S: Timers<Id = T>>(&mut self, timers: &mut S) {
        self.cancel_pan(timers);
        if let Some((id, _)) = self.completion.take() {
            timers.cancel(id);
        }
        for (id, _) in self.scroll_steps.drain(..) {
            timers.cancel(id);
        }
    }

    pub(crate) fn cancel_pan<S: Timers<Id = T>>(&mut self, timers: &mut S) {
        if let Some(id) = self.pan_engage.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.pan_update.take() {
            timers.cancel(id);
        }
    }

    pub(crate) fn arm_pan_engage<S: Timers<Id = T>>(&mut self, timers: &mut S, delay: Duration) {
        self.cancel_pan(timers);
        self.pan_engage = Some(timers.set_timeout(delay));
    }

    pub(crate) fn engage_pan<S: Timers<Id = T>>(&mut self, timers: &mut S, period: Duration) {
        self.cancel_pan(timers);
        self.pan_update = Some(timers.set_interval(period));
    }

    pub(crate) fn arm_completion<S: Timers<Id = T>>(
        &mut self,
        timers: &mut S,
        delay: Duration,
        callback: Callback,
    ) {
        if let Some((id, _)) = self.completion.take() {
            timers.cancel(id);
        }
        self.completion = Some((timers.set_timeout(delay), callback));
    }

    pub(crate) fn arm_scroll_step<S: Timers<Id = T>>(
        &mut self,
        timers: &mut S,
        delay: Duration,
        position: Point,
    ) {
        self.scroll_steps.push((timers.set_timeout(delay), position));
    }

    /// Claims a fired timer. Returns `None` for timers this viewport does not
    /// (or no longer) own.
    pub(crate) fn take(&mut self, id: T) -> Option<Fired> {
        if self.pan_engage == Some(id) {
            self.pan_engage = None;
            return Some(Fired::PanEngage);
        }
        if self.pan_update == Some(id) {
            return Some(Fired::PanTick);
        }
        if matches!(self.completion, Some((pending, _)) if pending == id) {
            return self
                .completion
                .take()
                .map(|(_, callback)| Fired::Complete(callback));
        }
        let index = self.scroll_steps.iter().position(|(pending, _)| *pending == id)?;
        let (_, position) = self.scroll_steps.remove(index);
        Some(Fired::ScrollStep(position))
    }

    pub(crate) fn pending(&self) -> PendingTransitions {
        PendingTransitions {
            pan_engage: self.pan_engage.is_some(),
            pan_update: self.pan_update.is_some(),
            completion: self.completion.is_some(),
            scroll_steps: self.scroll_steps.len(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Transitions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transitions")
            .field("pan_engage", &self.pan_engage)
            .field("pan_update", &self.pan_update)
            .field("completion", &self.completion.as_ref().map(|(id, _)| id))
            .field("scroll_steps", &self.scroll_steps)
            .finish()
    }
}
