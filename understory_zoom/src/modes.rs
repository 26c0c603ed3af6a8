// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::CubicBezierEasing;

/// How a zoomed view is positioned over the content.
///
/// The mode only changes through [`crate::ZoomPort::set_fixed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scale the content and scroll its container so the target is centered.
    ///
    /// Visual translation comes from native scrolling, so easing transitions
    /// are never applied in this mode.
    #[default]
    Scrolling,
    /// Scale and translate the content in place.
    ///
    /// The container's scroll position is left untouched and is used as the
    /// reference point when computing the translation.
    Fixed,
}

/// How the scroll container reaches its new position in [`Mode::Scrolling`].
///
/// This is consulted by [`crate::ZoomPort::zoom_to`] after the content style
/// has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ScrollBehavior {
    /// Jump straight to the target scroll position.
    #[default]
    Instant,
    /// Step towards the target over the transition duration along `curve`.
    ///
    /// See [`crate::SmoothScroll`] for how steps are laid out in time.
    Eased(CubicBezierEasing),
}
