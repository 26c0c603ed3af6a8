// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory document and timer host for integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Not every test binary uses every helper."
)]

use std::collections::BTreeMap;
use std::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use understory_timing::{TimerId, TimerQueue};
use understory_zoom::css;
use understory_zoom::{ContentStyle, Dom, Frame, Transition, ZoomConfig, ZoomPort};

pub type NodeId = usize;

pub const BODY: NodeId = 0;

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub offset_parent: Option<NodeId>,
    pub offset: Point,
    pub size: Size,
    pub scroll: Point,
    pub content_style: ContentStyle,
    pub style: BTreeMap<&'static str, String>,
    pub transition: Option<String>,
}

/// Element tree with layout boxes, scroll offsets, and applied styles.
///
/// Bounding rectangles are laid out from the offset chain and scaled by the
/// zoom styles applied to an element and its ancestors.
#[derive(Clone, Debug)]
pub struct FakeDom {
    pub nodes: Vec<Node>,
    pub window_size: Size,
    pub window_scroll: Point,
    pub transforms: bool,
    pub scroll_containers: Vec<NodeId>,
}

impl FakeDom {
    pub fn new(window_size: Size) -> Self {
        let body = Node {
            size: window_size,
            ..Node::default()
        };
        Self {
            nodes: vec![body],
            window_size,
            window_scroll: Point::ORIGIN,
            transforms: true,
            scroll_containers: Vec::new(),
        }
    }

    pub fn without_transforms(mut self) -> Self {
        self.transforms = false;
        self
    }

    /// Adds a child of `parent` laid out at `offset` within it.
    pub fn add(&mut self, parent: NodeId, offset: Point, size: Size) -> NodeId {
        self.nodes.push(Node {
            parent: Some(parent),
            offset_parent: Some(parent),
            offset,
            size,
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    /// Adds a node that is not attached to the document.
    pub fn add_detached(&mut self, size: Size) -> NodeId {
        self.nodes.push(Node {
            size,
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes[id].style.get(property).map(String::as_str)
    }

    fn layout_origin(&self, id: NodeId) -> Point {
        let mut origin = Point::ORIGIN;
        let mut current = Some(id);
        while let Some(node) = current {
            origin += self.nodes[node].offset.to_vec2();
            current = self.nodes[node].offset_parent;
        }
        origin
    }

    fn applied_scale(&self, id: NodeId) -> f64 {
        let mut scale = 1.0;
        let mut current = Some(id);
        while let Some(node) = current {
            scale *= self.nodes[node].content_style.scale();
            current = self.nodes[node].parent;
        }
        scale
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn body(&self) -> NodeId {
        BODY
    }

    fn parent_element(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes[*element].parent
    }

    fn offset_parent(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes[*element].offset_parent
    }

    fn offset_position(&self, element: &NodeId) -> Point {
        self.nodes[*element].offset
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        let size = self.nodes[*element].size * self.applied_scale(*element);
        Rect::from_origin_size(self.layout_origin(*element), size)
    }

    fn scroll_position(&self, element: &NodeId) -> Point {
        self.nodes[*element].scroll
    }

    fn set_scroll_position(&mut self, element: &NodeId, position: Point) {
        self.nodes[*element].scroll = position;
    }

    fn window_size(&self) -> Size {
        self.window_size
    }

    fn window_scroll(&self) -> Point {
        self.window_scroll
    }

    fn scroll_window_to(&mut self, position: Point) {
        self.window_scroll = position;
    }

    fn insert_scroll_container(&mut self, element: &NodeId) -> NodeId {
        let target = &self.nodes[*element];
        let wrapper = Node {
            parent: target.parent,
            offset_parent: target.offset_parent,
            offset: target.offset,
            size: target.size,
            ..Node::default()
        };
        self.nodes.push(wrapper);
        let id = self.nodes.len() - 1;
        let target = &mut self.nodes[*element];
        target.parent = Some(id);
        target.offset_parent = Some(id);
        target.offset = Point::ORIGIN;
        self.nodes[id].style.insert("overflow", String::from("auto"));
        self.scroll_containers.push(id);
        id
    }

    fn supports_transforms(&self) -> bool {
        self.transforms
    }

    fn apply_content_style(&mut self, element: &NodeId, style: &ContentStyle) {
        let node = &mut self.nodes[*element];
        node.content_style = *style;
        for declaration in css::declarations(style) {
            node.style.insert(declaration.property, declaration.value);
        }
    }

    fn set_transition(&mut self, element: &NodeId, transition: Option<Transition>) {
        self.nodes[*element].transition = transition.as_ref().map(css::transition_value);
    }
}

/// A document plus a virtual clock, wired to a zoom controller.
#[derive(Debug)]
pub struct Host {
    pub dom: FakeDom,
    pub timers: TimerQueue,
    pub port: ZoomPort<NodeId, TimerId>,
}

impl Host {
    pub fn new(dom: FakeDom, target: Option<NodeId>) -> Self {
        Self::with_config(dom, target, ZoomConfig::default())
    }

    pub fn with_config(mut dom: FakeDom, target: Option<NodeId>, config: ZoomConfig) -> Self {
        let port = ZoomPort::with_config(&mut dom, target, config);
        Self {
            dom,
            timers: TimerQueue::new(),
            port,
        }
    }

    /// Advances the clock by `ms` milliseconds and dispatches every timer
    /// that comes due, returning how many the controller claimed.
    pub fn run(&mut self, ms: u64) -> usize {
        self.timers.advance(Duration::from_millis(ms));
        let mut claimed = 0;
        while let Some(id) = self.timers.pop_due() {
            if self.port.on_timer(&mut self.dom, &mut self.timers, id) {
                claimed += 1;
            }
        }
        claimed
    }

    pub fn scroll(&self) -> Point {
        match self.port.container() {
            Frame::Window => self.dom.window_scroll,
            Frame::Element(id) => self.dom.node(*id).scroll,
        }
    }

    pub fn set_scroll(&mut self, position: Point) {
        match self.port.container() {
            Frame::Window => self.dom.window_scroll = position,
            Frame::Element(id) => self.dom.nodes[*id].scroll = position,
        }
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn approx_point(a: Point, b: Point) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}

pub fn approx_vec(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}
