// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS rendering of zoom styling, for [`crate::Dom`] implementations backed
//! by a style sheet model.
//!
//! An empty value means "remove the property".
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_zoom::ContentStyle;
//! use understory_zoom::css::declarations;
//!
//! let style = ContentStyle::Transform {
//!     origin: Point::ORIGIN,
//!     scale: 2.0,
//!     translate: Vec2::ZERO,
//! };
//! let decls = declarations(&style);
//! assert!(decls.iter().any(|d| d.property == "transform" && d.value == "scale(2)"));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::easing::TimingFunction;
use crate::style::{ContentStyle, Transition};

/// Vendor prefixes for hosts that still need prefixed transform properties.
pub const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

/// A single CSS property assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Unprefixed property name.
    pub property: &'static str,
    /// Property value; empty to remove the property.
    pub value: String,
}

impl Declaration {
    fn set(property: &'static str, value: String) -> Self {
        Self { property, value }
    }

    fn clear(property: &'static str) -> Self {
        Self {
            property,
            value: String::new(),
        }
    }
}

/// Renders `style` as the full set of zoom-related declarations.
///
/// Every property zoom styling may touch is present in the output, so
/// applying it replaces whatever an earlier style left behind.
#[must_use]
pub fn declarations(style: &ContentStyle) -> Vec<Declaration> {
    match *style {
        ContentStyle::Natural => [
            "transform",
            "transform-origin",
            "position",
            "left",
            "top",
            "width",
            "height",
            "zoom",
        ]
        .into_iter()
        .map(Declaration::clear)
        .collect(),
        ContentStyle::Transform {
            origin,
            scale,
            translate,
        } => {
            let mut transform = format!("scale({scale})");
            if translate.x != 0.0 || translate.y != 0.0 {
                transform.push_str(&format!(" translate({}px, {}px)", translate.x, translate.y));
            }
            alloc::vec![
                Declaration::set("transform-origin", format!("{}px {}px", origin.x, origin.y)),
                Declaration::set("transform", transform),
                Declaration::clear("position"),
                Declaration::clear("left"),
                Declaration::clear("top"),
                Declaration::clear("width"),
                Declaration::clear("height"),
                Declaration::clear("zoom"),
            ]
        }
        ContentStyle::Emulated { scale, position } => {
            let (left, top) = match position {
                Some(p) => (format!("{}px", p.x), format!("{}px", p.y)),
                None => (String::new(), String::new()),
            };
            let percent = format!("{}%", scale * 100.0);
            alloc::vec![
                Declaration::clear("transform"),
                Declaration::clear("transform-origin"),
                Declaration::set("position", String::from("relative")),
                Declaration::set("left", left),
                Declaration::set("top", top),
                Declaration::set("width", percent.clone()),
                Declaration::set("height", percent),
                Declaration::set("zoom", format!("{scale}")),
            ]
        }
    }
}

/// Renders a timing function.
#[must_use]
pub fn timing_function_value(timing: &TimingFunction) -> String {
    match timing {
        TimingFunction::Linear => String::from("linear"),
        TimingFunction::CubicBezier(c) => {
            format!("cubic-bezier({}, {}, {}, {})", c.x1, c.y1, c.x2, c.y2)
        }
    }
}

/// Renders the value of the `transition` property for `transition`.
#[must_use]
pub fn transition_value(transition: &Transition) -> String {
    format!(
        "transform {}ms {}",
        transition.duration.as_millis(),
        timing_function_value(&transition.timing)
    )
}

/// Returns the vendor-prefixed spellings of `property`.
pub fn vendor_variants(property: &str) -> impl Iterator<Item = String> + '_ {
    VENDOR_PREFIXES
        .into_iter()
        .map(move |prefix| format!("{prefix}{property}"))
}
