// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame geometry: container rectangles, scroll offsets, element positions,
//! and the view-frame math shared by zooming and panning.

use kurbo::{Point, Rect, Size, Vec2};

use crate::host::{Dom, Frame};

/// A target rectangle in unscaled content coordinates.
///
/// Unlike [`Rect`], the size is kept exactly as given and is never
/// normalized, so a degenerate request stays degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrame {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl ViewFrame {
    /// Creates a view frame from its origin and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the center of the frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.origin + self.size.to_vec2() / 2.0
    }

    /// Returns the frame as a (normalized) rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

impl From<Rect> for ViewFrame {
    fn from(rect: Rect) -> Self {
        Self::new(rect.origin(), rect.size())
    }
}

/// Returns the client rectangle of `frame`.
///
/// The window's rectangle is anchored at the origin.
pub fn frame_rect<D: Dom>(dom: &D, frame: &Frame<D::Element>) -> Rect {
    match frame {
        Frame::Window => Rect::from_origin_size(Point::ORIGIN, dom.window_size()),
        Frame::Element(element) => dom.bounding_rect(element),
    }
}

/// Returns the scroll offset of `frame`.
pub fn scroll_position<D: Dom>(dom: &D, frame: &Frame<D::Element>) -> Point {
    match frame {
        Frame::Window => dom.window_scroll(),
        Frame::Element(element) => dom.scroll_position(element),
    }
}

/// Scrolls `frame` to `position`.
pub fn set_scroll_position<D: Dom>(dom: &mut D, frame: &Frame<D::Element>, position: Point) {
    match frame {
        Frame::Window => dom.scroll_window_to(position),
        Frame::Element(element) => dom.set_scroll_position(element, position),
    }
}

/// Returns the layout position of `element` relative to `outer`.
///
/// Offsets are summed up the offset-parent chain until the chain ends, the
/// body is reached, or the walk arrives at `outer`.
pub fn absolute_position<D: Dom>(
    dom: &D,
    element: &D::Element,
    outer: &Frame<D::Element>,
) -> Point {
    let body = dom.body();
    let mut position = dom.offset_position(element);
    let mut current = element.clone();
    while current != body && !outer.is_element(&current) {
        let Some(parent) = dom.offset_parent(&current) else {
            break;
        };
        position += dom.offset_position(&parent).to_vec2();
        current = parent;
    }
    position
}

/// Returns the content-space frame currently shown by a container.
///
/// The frame keeps the container's size and is centered on the content
/// point at the middle of the container at zoom `level`.
#[must_use]
pub fn visible_frame(level: f64, container: Rect, scroll: Point) -> ViewFrame {
    let half = container.size().to_vec2() / 2.0;
    let origin = (scroll.to_vec2() + half) / level - half;
    ViewFrame::new(origin.to_point(), container.size())
}

/// Returns the scroll position that centers `frame` at `scale`.
#[must_use]
pub fn centering_offset(frame: ViewFrame, scale: f64, container: Size) -> Point {
    (frame.center().to_vec2() * scale - container.to_vec2() / 2.0).to_point()
}

/// Returns the scale at which `frame` fits inside `container`, never below `1`.
///
/// A degenerate frame yields a non-finite or nonsensical scale, which
/// callers are expected to reject.
#[must_use]
pub fn fit_scale(frame: ViewFrame, container: Size) -> f64 {
    let sx = container.width / frame.size.width;
    let sy = container.height / frame.size.height;
    sx.min(sy).max(1.0)
}

/// Returns `frame` grown by `padding` on every side.
#[must_use]
pub fn pad(frame: ViewFrame, padding: f64) -> ViewFrame {
    let inset = Vec2::new(padding, padding);
    ViewFrame::new(
        frame.origin - inset,
        frame.size + Size::new(2.0 * padding, 2.0 * padding),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{ViewFrame, centering_offset, fit_scale, pad, visible_frame};

    #[test]
    fn visible_frame_at_unit_level_is_scroll_rect() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let frame = visible_frame(1.0, container, Point::new(100.0, 50.0));
        assert_eq!(frame.origin, Point::new(100.0, 50.0));
        assert_eq!(frame.size, Size::new(800.0, 600.0));
    }

    #[test]
    fn visible_frame_keeps_center_when_zoomed() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let scroll = Point::new(600.0, 300.0);
        let level = 2.0;
        let frame = visible_frame(level, container, scroll);
        // The content point under the container center maps back to it.
        let center = frame.center();
        assert!((center.x * level - scroll.x - 400.0).abs() < 1e-9);
        assert!((center.y * level - scroll.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn centering_offset_centers_frame() {
        let frame = ViewFrame::new(Point::new(300.0, 100.0), Size::new(200.0, 100.0));
        let offset = centering_offset(frame, 2.0, Size::new(800.0, 600.0));
        assert_eq!(offset, Point::new(400.0, 0.0));
    }

    #[test]
    fn fit_scale_uses_tighter_axis() {
        let frame = ViewFrame::new(Point::ORIGIN, Size::new(240.0, 190.0));
        let scale = fit_scale(frame, Size::new(800.0, 600.0));
        assert!((scale - 600.0 / 190.0).abs() < 1e-12);
    }

    #[test]
    fn fit_scale_never_zooms_out() {
        let frame = ViewFrame::new(Point::ORIGIN, Size::new(1600.0, 1200.0));
        assert_eq!(fit_scale(frame, Size::new(800.0, 600.0)), 1.0);
    }

    #[test]
    fn fit_scale_of_empty_frame_is_not_finite() {
        let frame = ViewFrame::new(Point::ORIGIN, Size::ZERO);
        assert!(!fit_scale(frame, Size::new(800.0, 600.0)).is_finite());
    }

    #[test]
    fn pad_grows_every_side() {
        let frame = ViewFrame::new(Point::new(50.0, 60.0), Size::new(200.0, 150.0));
        let padded = pad(frame, 20.0);
        assert_eq!(padded.origin, Point::new(30.0, 40.0));
        assert_eq!(padded.size, Size::new(240.0, 190.0));
        assert_eq!(padded.center(), frame.center());
    }
}
