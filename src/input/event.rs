//! Host-neutral input events.
//!
//! Hosts translate their native mouse and touch events into `InputEvent`
//! before handing them to the manager.

use crate::geometry::{Point, point};

/// Phase of a pointer or touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    /// mousedown / touchstart
    Start,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    End,
    /// touchcancel
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` value
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// One finger on the touch surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub identifier: i32,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(identifier: i32, x: f64, y: f64) -> Self {
        Self {
            identifier,
            position: point(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Mouse {
        phase: InputPhase,
        button: MouseButton,
        position: Point,
    },
    Touch {
        phase: InputPhase,
        /// Touch points still on the surface (`TouchEvent.touches`)
        touches: Vec<TouchPoint>,
        /// Touch points that changed in this event (`TouchEvent.changedTouches`)
        changed: Vec<TouchPoint>,
    },
}

impl InputEvent {
    pub fn mouse(phase: InputPhase, x: f64, y: f64) -> Self {
        Self::Mouse {
            phase,
            button: MouseButton::Primary,
            position: point(x, y),
        }
    }

    pub fn phase(&self) -> InputPhase {
        match self {
            Self::Mouse { phase, .. } | Self::Touch { phase, .. } => *phase,
        }
    }

    /// Position of the touch point with `identifier`, looking at the changed
    /// points first
    pub fn touch_position(&self, identifier: i32) -> Option<Point> {
        match self {
            Self::Touch { touches, changed, .. } => changed
                .iter()
                .chain(touches.iter())
                .find(|t| t.identifier == identifier)
                .map(|t| t.position),
            Self::Mouse { .. } => None,
        }
    }
}
