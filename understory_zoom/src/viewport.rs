// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace};

use crate::config::ZoomConfig;
use crate::easing::SmoothScroll;
use crate::geometry::{self, ViewFrame};
use crate::host::{Dom, Frame, Timers};
use crate::modes::{Mode, ScrollBehavior};
use crate::pan::pan_delta;
use crate::request::{Callback, ZoomRequest, number};
use crate::scheduler::{Fired, PendingTransitions, Transitions};
use crate::style::{Magnification, Transition};

/// Zoom controller for one document surface.
///
/// A `ZoomPort` owns the zoom state of a content element and the container
/// that scrolls it: the current level, the [`Mode`], the easing and panning
/// flags, the last known pointer position, and every timer it has armed.
///
/// It does not own the document or the timer service. Each operation
/// borrows a [`Dom`] and, where timers are involved, a [`Timers`]
/// implementation, and the host routes fired timers back through
/// [`ZoomPort::on_timer`].
///
/// `E` is the document's element handle and `T` the timer service's id.
#[derive(Debug)]
pub struct ZoomPort<E, T> {
    level: f64,
    mode: Mode,
    easing: bool,
    panning: bool,
    content: E,
    container: Frame<E>,
    transforms: bool,
    pointer: Point,
    config: ZoomConfig,
    transitions: Transitions<T>,
}

impl<E, T> ZoomPort<E, T>
where
    E: Clone + PartialEq + Debug,
    T: Copy + Eq + Debug,
{
    /// Creates a zoom controller for `target` with the default configuration.
    ///
    /// See [`ZoomPort::with_config`].
    pub fn new<D: Dom<Element = E>>(dom: &mut D, target: Option<E>) -> Self {
        Self::with_config(dom, target, ZoomConfig::default())
    }

    /// Creates a zoom controller for `target`, or for the document body when
    /// no target is given.
    ///
    /// An element other than the body that sits inside another element is
    /// wrapped in a new scroll container; otherwise the window scrolls.
    /// Transform support is queried here, once.
    pub fn with_config<D: Dom<Element = E>>(
        dom: &mut D,
        target: Option<E>,
        config: ZoomConfig,
    ) -> Self {
        let body = dom.body();
        let content = target.unwrap_or_else(|| body.clone());
        let container = if content != body && dom.parent_element(&content).is_some() {
            Frame::Element(dom.insert_scroll_container(&content))
        } else {
            Frame::Window
        };
        let transforms = dom.supports_transforms();
        debug!(?content, ?container, transforms, "zoom surface created");
        Self {
            level: 1.0,
            mode: Mode::default(),
            easing: false,
            panning: false,
            content,
            container,
            transforms,
            pointer: Point::ORIGIN,
            config,
            transitions: Transitions::new(),
        }
    }

    /// Returns the current zoom level; `1` is unzoomed.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.level
    }

    /// Returns `true` while zoomed in or out.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.level != 1.0
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` in [`Mode::Fixed`].
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.mode == Mode::Fixed
    }

    /// Returns `true` if easing transitions are enabled.
    #[must_use]
    pub fn easing(&self) -> bool {
        self.easing
    }

    /// Returns `true` if edge panning is enabled.
    #[must_use]
    pub fn panning(&self) -> bool {
        self.panning
    }

    /// Returns the element being zoomed.
    #[must_use]
    pub fn content(&self) -> &E {
        &self.content
    }

    /// Returns the frame that scrolls the content.
    #[must_use]
    pub fn container(&self) -> &Frame<E> {
        &self.container
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the last pointer position recorded while zoomed.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns which transitions are waiting on a timer.
    #[must_use]
    pub fn pending(&self) -> PendingTransitions {
        self.transitions.pending()
    }

    /// Zooms to the element or region described by `request`.
    ///
    /// The visual change is applied before returning. Pending transitions
    /// from earlier calls are cancelled; then, if panning is enabled and the
    /// view is zoomed, edge panning is scheduled to engage once the
    /// transition has finished, and the completion callback, if any, is
    /// scheduled for the same moment.
    ///
    /// A request that resolves to a NaN, infinite, zero or negative scale is
    /// ignored entirely.
    pub fn zoom_to<D, S>(&mut self, dom: &mut D, timers: &mut S, request: ZoomRequest<E>)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        let ZoomRequest {
            element,
            x,
            y,
            width,
            height,
            scale,
            padding,
            pan,
            on_complete,
        } = request;

        let container = geometry::frame_rect(dom, &self.container);
        let scroll = geometry::scroll_position(dom, &self.container);
        let mut frame = geometry::visible_frame(self.level, container, scroll);

        if let Some(element) = element {
            let origin = geometry::absolute_position(dom, &element, &self.container);
            let bounds = dom.bounding_rect(&element);
            let padding = number(padding).unwrap_or(self.config.default_padding);
            let size = Size::new(bounds.width() / self.level, bounds.height() / self.level);
            frame = geometry::pad(ViewFrame::new(origin, size), padding);
        } else {
            if let Some(x) = number(x) {
                frame.origin.x = x;
            }
            if let Some(y) = number(y) {
                frame.origin.y = y;
            }
            if let (Some(width), Some(height)) = (number(width), number(height)) {
                frame.size = Size::new(width, height);
            }
        }

        let scale = number(scale).unwrap_or_else(|| geometry::fit_scale(frame, container.size()));
        if !(scale.is_finite() && scale > 0.0) {
            debug!(scale, "ignoring zoom request with invalid scale");
            return;
        }

        self.transitions.cancel_all(timers);
        self.magnify(dom, timers, scale, frame, container.size(), scroll);

        if let Some(pan) = pan {
            self.panning = pan;
        }
        if self.panning && self.is_zoomed() {
            self.transitions.arm_pan_engage(timers, self.config.transition_duration);
        }
        if let Some(callback) = on_complete {
            self.transitions.arm_completion(timers, self.config.transition_duration, callback);
        }
    }

    /// Returns to the natural, unzoomed layout.
    ///
    /// When not zoomed this only cancels pending transitions; the content
    /// style and scroll position are left as they are.
    pub fn zoom_out<D, S>(&mut self, dom: &mut D, timers: &mut S)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        self.zoom_out_inner(dom, timers, None);
    }

    /// Returns to the natural layout and runs `on_complete` once the
    /// transition has finished.
    pub fn zoom_out_with<D, S>(
        &mut self,
        dom: &mut D,
        timers: &mut S,
        on_complete: impl FnOnce() + 'static,
    ) where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        self.zoom_out_inner(dom, timers, Some(alloc::boxed::Box::new(on_complete)));
    }

    /// Same as [`ZoomPort::zoom_out`].
    pub fn reset<D, S>(&mut self, dom: &mut D, timers: &mut S)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        self.zoom_out(dom, timers);
    }

    /// Zooms to `scale` around the center of the visible region.
    ///
    /// NaN is ignored.
    pub fn set_scale<D, S>(&mut self, dom: &mut D, timers: &mut S, scale: f64)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        if !scale.is_nan() {
            self.zoom_to(dom, timers, ZoomRequest::new().scale(scale));
        }
    }

    /// Switches between [`Mode::Fixed`] and [`Mode::Scrolling`].
    ///
    /// Easing follows the mode: it is enabled with fixed mode and disabled
    /// with scrolling mode.
    pub fn set_fixed<D: Dom<Element = E>>(&mut self, dom: &mut D, fixed: bool) {
        self.mode = if fixed { Mode::Fixed } else { Mode::Scrolling };
        debug!(mode = ?self.mode, "zoom mode changed");
        self.set_easing(dom, fixed);
    }

    /// Enables or disables easing transitions.
    ///
    /// The transition is only applied to the content in [`Mode::Fixed`] with
    /// transform support; in every other case it is cleared.
    pub fn set_easing<D: Dom<Element = E>>(&mut self, dom: &mut D, easing: bool) {
        self.easing = easing;
        let transition = (self.transforms && self.is_fixed() && easing).then_some(Transition {
            duration: self.config.transition_duration,
            timing: self.config.transition_timing,
        });
        dom.set_transition(&self.content, transition);
    }

    /// Enables or disables edge panning for subsequent zooms.
    ///
    /// A pan loop that is already running keeps its timer but stops moving
    /// the view while panning is disabled.
    pub fn set_panning(&mut self, panning: bool) {
        self.panning = panning;
    }

    /// Handles an activation (click) on `target`: zooms to it.
    pub fn activate_zoom<D, S>(&mut self, dom: &mut D, timers: &mut S, target: E)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        self.zoom_to(dom, timers, ZoomRequest::new().element(target));
    }

    /// Handles a cancel (escape) request: zooms out if zoomed.
    pub fn cancel_zoom<D, S>(&mut self, dom: &mut D, timers: &mut S)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        if self.is_zoomed() {
            self.zoom_out(dom, timers);
        }
    }

    /// Records the pointer position in client coordinates.
    ///
    /// Positions are only recorded while zoomed; the pan loop reads the last
    /// recorded one.
    pub fn pointer_moved(&mut self, position: Point) {
        if self.is_zoomed() {
            self.pointer = position;
        }
    }

    /// Handles a fired timer.
    ///
    /// Returns `false` if `id` is not a timer this viewport currently owns,
    /// for example one that was superseded by a later zoom; such timers have
    /// no effect.
    pub fn on_timer<D, S>(&mut self, dom: &mut D, timers: &mut S, id: T) -> bool
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        let Some(fired) = self.transitions.take(id) else {
            trace!(?id, "ignoring foreign or stale timer");
            return false;
        };
        match fired {
            Fired::PanEngage => {
                trace!("edge panning engaged");
                self.transitions.engage_pan(timers, self.config.pan_tick);
            }
            Fired::PanTick => self.pan(dom),
            Fired::Complete(callback) => callback(),
            Fired::ScrollStep(position) => {
                geometry::set_scroll_position(dom, &self.container, position);
            }
        }
        true
    }

    /// Cancels every pending transition, for when the surface goes away.
    pub fn teardown<S: Timers<Id = T>>(&mut self, timers: &mut S) {
        self.transitions.cancel_all(timers);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomPortDebugInfo<E> {
        ZoomPortDebugInfo {
            level: self.level,
            mode: self.mode,
            easing: self.easing,
            panning: self.panning,
            supports_transforms: self.transforms,
            container: self.container.clone(),
            pointer: self.pointer,
            pending: self.pending(),
        }
    }

    fn zoom_out_inner<D, S>(&mut self, dom: &mut D, timers: &mut S, on_complete: Option<Callback>)
    where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        self.transitions.cancel_all(timers);
        // Already natural: leave the style and scroll position alone.
        if self.is_zoomed() {
            self.zoom_to(dom, timers, ZoomRequest::new().scale(1.0));
        }
        if let Some(callback) = on_complete {
            self.transitions.arm_completion(timers, self.config.transition_duration, callback);
        }
    }

    fn magnify<D, S>(
        &mut self,
        dom: &mut D,
        timers: &mut S,
        scale: f64,
        frame: ViewFrame,
        container: Size,
        scroll: Point,
    ) where
        D: Dom<Element = E>,
        S: Timers<Id = T>,
    {
        let magnification =
            Magnification::compute(scale, frame, container, scroll, self.mode, self.transforms);
        dom.apply_content_style(&self.content, &magnification.style);

        if let Some(target) = magnification.scroll_to {
            match self.config.scroll_behavior {
                _ if target == scroll => {}
                ScrollBehavior::Eased(curve) if self.config.smooth_scroll_steps > 0 => {
                    let steps = SmoothScroll::new(
                        curve,
                        scroll,
                        target,
                        self.config.transition_duration,
                        self.config.smooth_scroll_steps,
                    );
                    for step in steps {
                        self.transitions.arm_scroll_step(timers, step.delay, step.position);
                    }
                }
                _ => geometry::set_scroll_position(dom, &self.container, target),
            }
        }

        debug!(scale, ?frame, mode = ?self.mode, "zoom applied");
        self.level = scale;
    }

    fn pan<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        if !self.panning {
            return;
        }
        let container = geometry::frame_rect(dom, &self.container);
        let scroll = geometry::scroll_position(dom, &self.container);
        let delta = pan_delta(container, self.pointer, self.level, &self.config);
        if delta != Vec2::ZERO {
            trace!(?delta, "edge pan");
            geometry::set_scroll_position(dom, &self.container, scroll + delta);
        }
    }
}

/// Debug snapshot of a [`ZoomPort`] state.
#[derive(Clone, Debug)]
pub struct ZoomPortDebugInfo<E> {
    /// Current zoom level.
    pub level: f64,
    /// Current mode.
    pub mode: Mode,
    /// Whether easing transitions are enabled.
    pub easing: bool,
    /// Whether edge panning is enabled.
    pub panning: bool,
    /// Whether the document supports visual transforms.
    pub supports_transforms: bool,
    /// Frame that scrolls the content.
    pub container: Frame<E>,
    /// Last recorded pointer position.
    pub pointer: Point,
    /// Transitions waiting on a timer.
    pub pending: PendingTransitions,
}
