// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::style::{ContentStyle, Transition};

/// The surface responsible for scrolling zoomed content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<E> {
    /// The top-level window viewport.
    Window,
    /// A scrollable element.
    Element(E),
}

impl<E: PartialEq> Frame<E> {
    /// Returns `true` if this frame is the given element.
    #[must_use]
    pub fn is_element(&self, element: &E) -> bool {
        matches!(self, Self::Element(e) if e == element)
    }
}

/// Document and style access needed by a [`crate::ZoomPort`].
///
/// Implementations adapt a concrete document model (a browser DOM, a test
/// double, a native widget tree) to the handful of reads and writes the zoom
/// engine performs. All rectangles are in client (viewport) coordinates, like
/// `getBoundingClientRect`; offsets are layout offsets relative to the offset
/// parent, like `offsetLeft`/`offsetTop`.
pub trait Dom {
    /// Handle to an element.
    type Element: Clone + PartialEq + Debug;

    /// Returns the document body, the default zoom surface.
    fn body(&self) -> Self::Element;

    /// Returns the parent of `element` if that parent is an element.
    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Returns the offset parent of `element`, if any.
    fn offset_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Returns the layout offset of `element` within its offset parent.
    fn offset_position(&self, element: &Self::Element) -> Point;

    /// Returns the bounding rectangle of `element` as currently rendered.
    ///
    /// This includes the effect of any transform applied to it or its
    /// ancestors.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Returns the scroll offset of `element`.
    fn scroll_position(&self, element: &Self::Element) -> Point;

    /// Scrolls `element` to `position`.
    fn set_scroll_position(&mut self, element: &Self::Element, position: Point);

    /// Returns the size of the window viewport.
    fn window_size(&self) -> Size;

    /// Returns the scroll offset of the window.
    fn window_scroll(&self) -> Point;

    /// Scrolls the window to `position`.
    fn scroll_window_to(&mut self, position: Point);

    /// Wraps `element` in a new scrollable (`overflow: auto`) container
    /// inserted at its current place in the tree, and returns the container.
    fn insert_scroll_container(&mut self, element: &Self::Element) -> Self::Element;

    /// Returns `true` if visual transforms are available.
    ///
    /// This is queried once, when a [`crate::ZoomPort`] is created.
    fn supports_transforms(&self) -> bool;

    /// Replaces the zoom styling of `element` with `style`.
    ///
    /// See [`crate::css::declarations`] for the CSS this corresponds to.
    fn apply_content_style(&mut self, element: &Self::Element, style: &ContentStyle);

    /// Sets or clears the transform transition of `element`.
    fn set_transition(&mut self, element: &Self::Element, transition: Option<Transition>);
}

/// Timer service used for pan engagement, pan ticks, and completion
/// callbacks.
///
/// Hosts route fired timers back to the owning viewport through
/// [`crate::ZoomPort::on_timer`].
pub trait Timers {
    /// Handle to an issued timer.
    type Id: Copy + Eq + Debug;

    /// Issues a one-shot timer that fires after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> Self::Id;

    /// Issues a repeating timer that fires every `period` until cancelled.
    fn set_interval(&mut self, period: Duration) -> Self::Id;

    /// Cancels a timer. Cancelling a fired or unknown timer does nothing.
    fn cancel(&mut self, id: Self::Id);
}

#[cfg(feature = "timing_adapter")]
impl Timers for understory_timing::TimerQueue {
    type Id = understory_timing::TimerId;

    fn set_timeout(&mut self, delay: Duration) -> Self::Id {
        Self::set_timeout(self, delay)
    }

    fn set_interval(&mut self, period: Duration) -> Self::Id {
        Self::set_interval(self, period)
    }

    fn cancel(&mut self, id: Self::Id) {
        Self::cancel(self, id);
    }
}
