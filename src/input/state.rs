//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (mouse down / single-finger touch start)
//! Dragging -> Dragging   (re-entrant start: fresh anchor offset)
//! Dragging -> Idle       (mouse up, touch end/cancel, teardown)
//! ```

use crate::geometry::Point;
use serde::Serialize;

/// Which input started the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragSource {
    Mouse,
    /// Only the touch point with this identifier drives the session
    Touch { identifier: i32 },
    /// Started through the API rather than a host event
    Api,
}

/// Data owned by one drag session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragSession {
    /// Offset from the element's top-left corner to the grab point
    pub anchor_offset: Point,
    /// Pointer position at drag start
    pub start_pointer: Point,
    pub source: DragSource,
}

#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// Dragging the element
    Dragging(DragSession),
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn anchor_offset(&self) -> Option<Point> {
        self.session().map(|s| s.anchor_offset)
    }

    /// Touch identifier driving the session, if it was started by touch
    pub fn tracked_touch(&self) -> Option<i32> {
        match self.session()?.source {
            DragSource::Touch { identifier } => Some(identifier),
            _ => None,
        }
    }

    /// Start (or restart) a session
    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Reset to Idle, returning the finished session
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
