// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::easing::TimingFunction;
use crate::modes::ScrollBehavior;

/// Tunables for a [`crate::ZoomPort`].
///
/// The defaults match the classic zoom.js feel: an 800 ms linear transform
/// transition, a 12% edge band for panning that moves up to 14 content units
/// per tick at 60 Hz, and 20 units of padding around zoomed elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Length of a zoom transition.
    ///
    /// Panning engages and completion callbacks fire once this has elapsed.
    pub transition_duration: Duration,
    /// Timing function of the easing transition in [`crate::Mode::Fixed`].
    pub transition_timing: TimingFunction,
    /// Fraction of the container size, per axis, that forms the edge band
    /// in which the pointer pans the view.
    pub pan_range: f64,
    /// Largest pan step per tick, in content units at a zoom level of `1.0`.
    pub pan_distance: f64,
    /// Period of the pan update tick.
    pub pan_tick: Duration,
    /// Padding added on each side of an element when zooming to it and the
    /// request does not specify one.
    pub default_padding: f64,
    /// How the container scrolls to a new target in [`crate::Mode::Scrolling`].
    pub scroll_behavior: ScrollBehavior,
    /// Number of steps used by [`ScrollBehavior::Eased`].
    ///
    /// Zero falls back to an instant jump.
    pub smooth_scroll_steps: u32,
}

impl ZoomConfig {
    /// The default configuration.
    pub const DEFAULT: Self = Self {
        transition_duration: Duration::from_millis(800),
        transition_timing: TimingFunction::Linear,
        pan_range: 0.12,
        pan_distance: 14.0,
        pan_tick: Duration::from_nanos(16_666_667),
        default_padding: 20.0,
        scroll_behavior: ScrollBehavior::Instant,
        smooth_scroll_steps: 120,
    };
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
