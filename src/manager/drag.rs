//! Drag operations - input routing, session transitions, frame application.
//!
//! ## Performance Notes
//!
//! Move events can arrive several times per display refresh. They never
//! touch the host synchronously: the latest coordinates are parked in the
//! frame coalescer and applied once when the frame fires.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::AreaPositionManager;
use crate::constants::TARGET_FRAME_MS;
use crate::frame::FrameDecision;
use crate::geometry::{Point, point};
use crate::host::{AreaHost, Axis, FrameToken, Role};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{DragSession, DragSource, InputEvent, InputPhase, MouseButton};
use crate::profile_scope;
use tracing::{debug, trace, warn};

impl<H: AreaHost> AreaPositionManager<H> {
    /// Route a host input event.
    ///
    /// Returns true when the event was consumed by the drag, so the host can
    /// suppress default handling (page scroll on touch).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.enabled {
            return false;
        }

        match event {
            InputEvent::Mouse { phase, button, position } => match phase {
                InputPhase::Start => {
                    *button == MouseButton::Primary && self.start_session(*position, DragSource::Mouse)
                }
                InputPhase::Move => self.follows_mouse() && self.update_pointer(*position),
                InputPhase::End | InputPhase::Cancel => {
                    if !self.follows_mouse() {
                        return false;
                    }
                    self.end_drag();
                    true
                }
            },
            InputEvent::Touch { phase, touches, changed } => match phase {
                InputPhase::Start => {
                    // A second finger never starts or hijacks a session
                    if touches.len() != 1 {
                        trace!(touches = touches.len(), "ignoring multi-touch start");
                        return false;
                    }
                    let touch = touches[0];
                    self.start_session(touch.position, DragSource::Touch { identifier: touch.identifier })
                }
                InputPhase::Move => {
                    let Some(identifier) = self.drag.tracked_touch() else {
                        return false;
                    };
                    match event.touch_position(identifier) {
                        Some(position) => self.update_pointer(position),
                        None => false,
                    }
                }
                InputPhase::End | InputPhase::Cancel => {
                    let Some(identifier) = self.drag.tracked_touch() else {
                        return false;
                    };
                    let lifted = changed.iter().any(|t| t.identifier == identifier)
                        || touches.iter().all(|t| t.identifier != identifier);
                    if lifted {
                        self.end_drag();
                    }
                    lifted
                }
            },
        }
    }

    /// Start a drag at the given pointer position.
    ///
    /// Calling it while a drag is active restarts the session with a fresh
    /// anchor offset; a frame scheduled by the old session is discarded.
    pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) {
        self.start_session(point(pointer_x, pointer_y), DragSource::Api);
    }

    /// Record a pointer move; the element moves on the next applied frame
    pub fn update_drag(&mut self, pointer_x: f64, pointer_y: f64) {
        self.update_pointer(point(pointer_x, pointer_y));
    }

    /// End the current drag. Safe to call when no drag is active.
    pub fn end_drag(&mut self) {
        self.frames.cancel(&mut self.host);
        if let Some(session) = self.drag.finish() {
            if self.config.drag_hints {
                self.host.set_drag_hints(false);
            }
            debug!(source = ?session.source, "drag ended");
        }
    }

    /// Deliver a fired animation frame.
    ///
    /// Returns true if the frame applied a new position.
    pub fn on_frame(&mut self, token: FrameToken, timestamp_ms: f64) -> bool {
        if !self.enabled {
            trace!(?token, "frame after teardown ignored");
            return false;
        }

        match self.frames.on_frame(token, timestamp_ms, &mut self.host) {
            FrameDecision::Apply(pointer) => self.apply_pointer(pointer),
            FrameDecision::Deferred(_) | FrameDecision::Stale => false,
        }
    }

    fn follows_mouse(&self) -> bool {
        matches!(
            self.drag.session(),
            Some(DragSession {
                source: DragSource::Mouse | DragSource::Api,
                ..
            })
        )
    }

    fn start_session(&mut self, pointer: Point, source: DragSource) -> bool {
        if !self.enabled {
            return false;
        }
        if !pointer.is_finite() {
            warn!(?pointer, "ignoring drag start at non-finite position");
            return false;
        }

        if self.drag.is_active() {
            debug!("drag restarted while active");
        }
        self.frames.cancel(&mut self.host);
        self.frames.reset_timing();

        if let Some(provider) = self.scale_provider.as_ref() {
            let scale = provider();
            self.set_scale(scale);
        }

        let Some(element) = self.host.bounds(Role::Element) else {
            warn!("draggable element disappeared, drag not started");
            self.end_drag();
            return false;
        };

        let anchor_offset = pointer - element.origin;
        self.drag.start(DragSession {
            anchor_offset,
            start_pointer: pointer,
            source,
        });
        if self.config.drag_hints {
            self.host.set_drag_hints(true);
        }
        debug!(?source, anchor_x = anchor_offset.x, anchor_y = anchor_offset.y, "drag started");
        true
    }

    fn update_pointer(&mut self, pointer: Point) -> bool {
        if !self.enabled || !self.drag.is_active() {
            return false;
        }
        if !pointer.is_finite() {
            warn!(?pointer, "ignoring non-finite pointer move");
            return false;
        }
        self.frames.schedule(pointer, &mut self.host);
        true
    }

    fn apply_pointer(&mut self, pointer: Point) -> bool {
        profile_scope!("apply_frame", TARGET_FRAME_MS);

        let Some(anchor) = self.drag.anchor_offset() else {
            return false;
        };
        let Some(container) = self.host.bounds(Role::Container) else {
            warn!("container disappeared, frame dropped");
            return false;
        };

        let ctx = self.coordinate_context(container.origin);
        let pixel = CoordinateConverter::pointer_to_pixel(pointer, anchor, &ctx);
        self.apply_pixel(pixel, &ctx);
        true
    }

    /// Write style, then fields, then notify - in that order
    pub(super) fn apply_pixel(&mut self, pixel: Point, ctx: &CoordinateContext) {
        let physical = CoordinateConverter::pixel_to_physical(pixel, ctx);

        self.host.set_element_position(pixel);
        self.position = Some(pixel);
        self.physical_position = Some(physical);
        self.write_fields(physical);

        trace!(x = pixel.x, y = pixel.y, "position applied");
        if let Some(callback) = self.on_update.as_mut() {
            callback();
        }
    }

    fn write_fields(&mut self, physical: Point) {
        let precision = Some(self.config.precision);
        let fields = [
            (Axis::X, self.config.x_field_id.as_deref(), physical.x),
            (Axis::Y, self.config.y_field_id.as_deref(), physical.y),
        ];
        for (axis, id, value) in fields {
            let Some(id) = id else { continue };
            let text = self.formatter.format(value, precision);
            if !self.host.write_field(axis, id, &text) {
                trace!(field = id, "mirrored field not found");
            }
        }
    }
}
