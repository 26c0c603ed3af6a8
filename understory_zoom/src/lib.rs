// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: zoom and edge-pan control for scrollable document surfaces.
//!
//! This crate models the zoom state of one content element inside the
//! container that scrolls it. It focuses on:
//! - Framing: resolving an element, a region, or the current view into a
//!   padded frame and the scale that fits it.
//! - Magnification: deciding how the content is scaled (a visual transform,
//!   or a layout emulation when transforms are unavailable) and where the
//!   container scrolls.
//! - Edge panning: nudging the view while the pointer rests near an edge.
//! - Timed transitions: pan engagement, completion callbacks, and eased
//!   scrolling, all driven by host timers.
//!
//! It does **not** own a document or an event loop. Callers are expected to:
//! - Implement [`Dom`] for their document, and [`Timers`] for their timer
//!   service (or use `understory_timing::TimerQueue` with the default
//!   `timing_adapter` feature).
//! - Forward activations, cancel requests, and pointer motion to
//!   [`ZoomPort::activate_zoom`], [`ZoomPort::cancel_zoom`] and
//!   [`ZoomPort::pointer_moved`].
//! - Route fired timers back through [`ZoomPort::on_timer`].
//! - Turn [`ContentStyle`] into whatever their document understands; the
//!   [`css`] module covers style-sheet based hosts.
//!
//! ## Framing and magnification
//!
//! The pure pieces can be used on their own:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom::geometry::{fit_scale, pad};
//! use understory_zoom::{ContentStyle, Magnification, Mode, ViewFrame};
//!
//! let container = Size::new(800.0, 600.0);
//! let frame = pad(ViewFrame::new(Point::new(100.0, 100.0), Size::new(200.0, 150.0)), 20.0);
//! let scale = fit_scale(frame, container);
//! assert_eq!(scale, 600.0 / 190.0);
//!
//! let m = Magnification::compute(scale, frame, container, Point::ORIGIN, Mode::Scrolling, true);
//! assert!(matches!(m.style, ContentStyle::Transform { .. }));
//! // Scrolling mode moves the container so the frame is centered.
//! let center = m.style.affine() * frame.center();
//! let scroll = m.scroll_to.unwrap();
//! assert!((center.x - scroll.x - 400.0).abs() < 1e-9);
//! assert!((center.y - scroll.y - 300.0).abs() < 1e-9);
//! ```
//!
//! ## Edge panning
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_zoom::{ZoomConfig, pan_delta};
//!
//! let container = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let config = ZoomConfig::default();
//!
//! // In the middle of the container nothing moves.
//! assert_eq!(pan_delta(container, Point::new(500.0, 500.0), 2.0, &config), Vec2::ZERO);
//! // Near the right edge the view moves right.
//! assert!(pan_delta(container, Point::new(990.0, 500.0), 2.0, &config).x > 0.0);
//! ```
//!
//! ## Design notes
//!
//! - Every operation borrows the document and the timer service; a
//!   [`ZoomPort`] holds only its own state and the ids of its own timers.
//! - Starting a zoom cancels every transition left over from the previous
//!   one, so at most one pan engagement, one pan loop, and one completion
//!   callback are pending at a time.
//! - Requests that resolve to an unusable scale are ignored rather than
//!   reported.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod css;
mod easing;
pub mod geometry;
mod host;
mod modes;
mod pan;
mod request;
mod scheduler;
mod style;
mod viewport;

pub use config::ZoomConfig;
pub use easing::{CubicBezierEasing, ScrollStep, SmoothScroll, TimingFunction};
pub use geometry::ViewFrame;
pub use host::{Dom, Frame, Timers};
pub use modes::{Mode, ScrollBehavior};
pub use pan::pan_delta;
pub use request::{Callback, ZoomRequest};
pub use scheduler::PendingTransitions;
pub use style::{ContentStyle, Magnification, Transition};
pub use viewport::{ZoomPort, ZoomPortDebugInfo};
