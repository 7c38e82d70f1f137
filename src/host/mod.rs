//! Host environment abstraction.
//!
//! The manager never touches the DOM directly. Everything it needs from
//! the page (geometry, inline style, input fields, animation frames and
//! listener registration) goes through `AreaHost`, which keeps the manager
//! testable without a browser.
//!
//! ## Implementations
//!
//! - `HeadlessHost` - in-memory stand-in with manual frame ticking
//! - `DomHost` - `web-sys` binding (feature `web`)

mod headless;
#[cfg(feature = "web")]
pub mod web;

pub use headless::{ElementStyle, HeadlessHost};

use crate::geometry::{Bounds, Point};
use serde::Serialize;

/// The two elements a manager is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Container,
    Element,
}

/// Axis of a mirrored input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The draggable element (drag start)
    Element,
    /// The whole document (moves and releases outside the element)
    Document,
}

/// Native event types the manager listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl EventKind {
    /// DOM event type name
    pub fn dom_name(&self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }
}

/// Listeners registered by every bound manager
pub const LISTENERS: [(ListenerTarget, EventKind); 7] = [
    (ListenerTarget::Element, EventKind::MouseDown),
    (ListenerTarget::Element, EventKind::TouchStart),
    (ListenerTarget::Document, EventKind::MouseMove),
    (ListenerTarget::Document, EventKind::MouseUp),
    (ListenerTarget::Document, EventKind::TouchMove),
    (ListenerTarget::Document, EventKind::TouchEnd),
    (ListenerTarget::Document, EventKind::TouchCancel),
];

/// Handle returned by `AreaHost::listen`, consumed by `AreaHost::unlisten`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(pub u64);

/// Token identifying one requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FrameToken(pub u64);

/// Everything the manager needs from its environment.
///
/// Hosts deliver input through `AreaPositionManager::handle_input` and
/// fired frames through `AreaPositionManager::on_frame`.
pub trait AreaHost {
    /// Bounding box in screen pixels, `None` if the element is absent
    fn bounds(&self, role: Role) -> Option<Bounds>;

    /// Write the element's inline position (`left`/`top`, in pixels)
    fn set_element_position(&mut self, position: Point);

    /// Toggle drag presentation hints (transition off, own compositing layer)
    fn set_drag_hints(&mut self, dragging: bool);

    /// Write `text` into the input field `field_id`.
    ///
    /// Returns false when the field does not exist.
    fn write_field(&mut self, axis: Axis, field_id: &str, text: &str) -> bool;

    /// Ask for a callback on the next display refresh
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a previously requested frame; unknown tokens are ignored
    fn cancel_frame(&mut self, token: FrameToken);

    fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerHandle;

    /// Remove a listener; unknown handles are ignored
    fn unlisten(&mut self, handle: ListenerHandle);
}
