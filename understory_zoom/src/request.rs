// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Size};

/// Callback run once a zoom transition has finished.
pub type Callback = Box<dyn FnOnce()>;

/// Parameters of a [`crate::ZoomPort::zoom_to`] call.
///
/// Every field is optional:
/// - An element, when present, wins over explicit geometry and is framed
///   with `padding` on each side.
/// - Otherwise `x`/`y` override the origin of the currently visible frame,
///   and `width`/`height` override its size only when both are given.
/// - Without an explicit scale the frame is fitted into the container, never
///   zooming out below `1`.
///
/// NaN values count as absent.
pub struct ZoomRequest<E> {
    pub(crate) element: Option<E>,
    pub(crate) x: Option<f64>,
    pub(crate) y: Option<f64>,
    pub(crate) width: Option<f64>,
    pub(crate) height: Option<f64>,
    pub(crate) scale: Option<f64>,
    pub(crate) padding: Option<f64>,
    pub(crate) pan: Option<bool>,
    pub(crate) on_complete: Option<Callback>,
}

impl<E> ZoomRequest<E> {
    /// Creates an empty request, which frames the currently visible region.
    #[must_use]
    pub fn new() -> Self {
        Self {
            element: None,
            x: None,
            y: None,
            width: None,
            height: None,
            scale: None,
            padding: None,
            pan: None,
            on_complete: None,
        }
    }

    /// Zooms to `element`.
    #[must_use]
    pub fn element(mut self, element: E) -> Self {
        self.element = Some(element);
        self
    }

    /// Sets the left edge of the target frame in content coordinates.
    #[must_use]
    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the top edge of the target frame in content coordinates.
    #[must_use]
    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets the width of the target frame. Ignored without a height.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height of the target frame. Ignored without a width.
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the origin of the target frame.
    #[must_use]
    pub fn origin(self, origin: Point) -> Self {
        self.x(origin.x).y(origin.y)
    }

    /// Sets the size of the target frame.
    #[must_use]
    pub fn size(self, size: Size) -> Self {
        self.width(size.width).height(size.height)
    }

    /// Sets the whole target frame.
    #[must_use]
    pub fn rect(self, rect: Rect) -> Self {
        self.origin(rect.origin()).size(rect.size())
    }

    /// Uses an explicit scale instead of fitting the frame.
    ///
    /// Unlike a fitted scale this may be below `1`.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the padding around an element target.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Enables or disables edge panning from now on.
    #[must_use]
    pub fn pan(mut self, pan: bool) -> Self {
        self.pan = Some(pan);
        self
    }

    /// Runs `callback` once the zoom transition has finished.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

impl<E> Default for ZoomRequest<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for ZoomRequest<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomRequest")
            .field("element", &self.element)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scale", &self.scale)
            .field("padding", &self.padding)
            .field("pan", &self.pan)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Drops NaN, the "not a number was given" marker.
pub(crate) fn number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
