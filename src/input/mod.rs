//! Pointer and touch input handling for the draggable area.
//!
//! ## Architecture
//!
//! Input arrives as host-neutral `InputEvent`s. The drag session is an
//! explicit state machine (`DragState`), and all pixel arithmetic lives in
//! `coords` so the manager never repeats the conversion formulas.
//!
//! ## Modules
//!
//! - `event` - Host-neutral mouse and touch events
//! - `state` - Drag state machine and the per-session data
//! - `coords` - Pointer to pixel to physical-unit conversion

pub mod coords;
mod event;
mod state;

pub use event::{InputEvent, InputPhase, MouseButton, TouchPoint};
pub use state::{DragSession, DragSource, DragState};
