//! In-memory host.
//!
//! Models just enough of a page for the manager: two bounding boxes, the
//! element's inline style, a set of input fields, pending animation frames
//! and registered listeners. Frames never fire on their own; the embedder
//! drains them with `take_pending_frames` and feeds them to the manager.

use super::{AreaHost, Axis, EventKind, FrameToken, ListenerHandle, ListenerTarget, Role};
use crate::geometry::{Bounds, Point};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Inline style state of the dragged element
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementStyle {
    /// `left`/`top` in pixels, `None` until first written
    pub position: Option<Point>,
    /// Transition disabled and layer promoted
    pub drag_hints: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    container: Option<Bounds>,
    element: Option<Bounds>,
    /// Screen pixels per element pixel, mirrors a CSS scale on the container
    render_scale: f64,
    style: ElementStyle,
    style_writes: usize,
    fields: HashMap<String, String>,
    next_frame: u64,
    pending_frames: BTreeSet<FrameToken>,
    next_listener: u64,
    listeners: BTreeMap<ListenerHandle, (ListenerTarget, EventKind)>,
}

impl HeadlessHost {
    pub fn new(container: Bounds, element: Bounds) -> Self {
        Self {
            container: Some(container),
            element: Some(element),
            render_scale: 1.0,
            ..Default::default()
        }
    }

    /// Host where neither element exists
    pub fn empty() -> Self {
        Self {
            render_scale: 1.0,
            ..Default::default()
        }
    }

    pub fn with_render_scale(mut self, scale: f64) -> Self {
        self.render_scale = scale;
        self
    }

    /// Add an input field the manager may write to
    pub fn with_field(mut self, id: impl Into<String>) -> Self {
        self.fields.insert(id.into(), String::new());
        self
    }

    pub fn without_element(mut self) -> Self {
        self.element = None;
        self
    }

    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }

    pub fn set_container_bounds(&mut self, bounds: Bounds) {
        self.container = Some(bounds);
    }

    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    /// Number of `set_element_position` calls so far
    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    pub fn field(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    pub fn pending_frame_count(&self) -> usize {
        self.pending_frames.len()
    }

    /// Remove and return every pending frame, oldest first
    pub fn take_pending_frames(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending_frames).into_iter().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_listening(&self, target: ListenerTarget, kind: EventKind) -> bool {
        self.listeners.values().any(|&(t, k)| t == target && k == kind)
    }
}

impl AreaHost for HeadlessHost {
    fn bounds(&self, role: Role) -> Option<Bounds> {
        match role {
            Role::Container => self.container,
            Role::Element => self.element,
        }
    }

    fn set_element_position(&mut self, position: Point) {
        self.style.position = Some(position);
        self.style_writes += 1;
        if let (Some(container), Some(element)) = (self.container, self.element.as_mut()) {
            element.origin = container.origin + position.scale(self.render_scale);
        }
    }

    fn set_drag_hints(&mut self, dragging: bool) {
        self.style.drag_hints = dragging;
    }

    fn write_field(&mut self, _axis: Axis, field_id: &str, text: &str) -> bool {
        match self.fields.get_mut(field_id) {
            Some(value) => {
                text.clone_into(value);
                true
            }
            None => false,
        }
    }

    fn request_frame(&mut self) -> FrameToken {
        self.next_frame += 1;
        let token = FrameToken(self.next_frame);
        self.pending_frames.insert(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending_frames.remove(&token);
    }

    fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerHandle {
        self.next_listener += 1;
        let handle = ListenerHandle(self.next_listener);
        self.listeners.insert(handle, (target, kind));
        handle
    }

    fn unlisten(&mut self, handle: ListenerHandle) {
        self.listeners.remove(&handle);
    }
}
