// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};

use crate::easing::TimingFunction;
use crate::geometry::{ViewFrame, centering_offset};
use crate::modes::Mode;

/// Zoom styling of the content element.
///
/// This is a description of what the content should look like; the
/// [`crate::Dom`] implementation turns it into concrete style properties
/// (see [`crate::css::declarations`]).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ContentStyle {
    /// No zoom styling: the content is laid out at its natural size.
    #[default]
    Natural,
    /// A visual transform `scale(scale) translate(translate)` around `origin`.
    Transform {
        /// Transform origin in content coordinates.
        origin: Point,
        /// Uniform scale factor.
        scale: f64,
        /// Translation applied after scaling, in unscaled units.
        translate: Vec2,
    },
    /// Emulation for hosts without transforms: the content is resized to
    /// `scale * 100%` and zoomed, and optionally offset to `position`.
    ///
    /// Known limitation: in [`Mode::Fixed`] the emulation can only shift the
    /// content by its relative position. There is no origin-based
    /// translation, so the target is framed less precisely than with
    /// transforms.
    Emulated {
        /// Uniform scale factor.
        scale: f64,
        /// Relative `left`/`top` offset, present in [`Mode::Fixed`] only.
        position: Option<Point>,
    },
}

impl ContentStyle {
    /// Returns the scale factor this style applies.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match *self {
            Self::Natural => 1.0,
            Self::Transform { scale, .. } | Self::Emulated { scale, .. } => scale,
        }
    }

    /// Returns the mapping from content coordinates to the container's
    /// scrolled content coordinates.
    #[must_use]
    pub fn affine(&self) -> Affine {
        match *self {
            Self::Natural => Affine::IDENTITY,
            Self::Transform {
                origin,
                scale,
                translate,
            } => {
                let origin = origin.to_vec2();
                Affine::translate(origin)
                    * Affine::scale(scale)
                    * Affine::translate(translate)
                    * Affine::translate(-origin)
            }
            Self::Emulated { scale, position } => {
                let offset = position.map_or(Vec2::ZERO, Point::to_vec2);
                Affine::translate(offset) * Affine::scale(scale)
            }
        }
    }
}

/// Transform transition applied to the content while easing is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Length of the transition.
    pub duration: Duration,
    /// Timing function of the transition.
    pub timing: TimingFunction,
}

/// The outcome of magnifying a view frame: the style to apply to the
/// content and, in [`Mode::Scrolling`], where to scroll the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnification {
    /// Styling for the content element.
    pub style: ContentStyle,
    /// Target scroll position of the container, if it should move.
    pub scroll_to: Option<Point>,
}

impl Magnification {
    /// Computes how to show `frame` at `scale` inside a container of size
    /// `container` that is currently scrolled to `scroll`.
    ///
    /// A scale of exactly `1` always produces [`ContentStyle::Natural`].
    #[must_use]
    pub fn compute(
        scale: f64,
        frame: ViewFrame,
        container: Size,
        scroll: Point,
        mode: Mode,
        transforms: bool,
    ) -> Self {
        let offset = centering_offset(frame, scale, container);
        let fixed = mode == Mode::Fixed;
        let style = if scale == 1.0 {
            ContentStyle::Natural
        } else if !transforms {
            ContentStyle::Emulated {
                scale,
                position: fixed.then(|| Point::ORIGIN - offset.to_vec2()),
            }
        } else if fixed {
            let shift = (frame.origin - scroll) * scale
                - (container.to_vec2() - frame.size.to_vec2() * scale) / 2.0;
            ContentStyle::Transform {
                origin: scroll,
                scale,
                translate: -shift / scale,
            }
        } else {
            ContentStyle::Transform {
                origin: Point::ORIGIN,
                scale,
                translate: Vec2::ZERO,
            }
        };
        Self {
            style,
            scroll_to: (!fixed).then_some(offset),
        }
    }
}
