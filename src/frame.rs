//! Frame coalescing for drag updates.
//!
//! Input events can arrive far more often than the display refreshes. The
//! coalescer keeps at most one frame request outstanding and only the most
//! recent pointer coordinates; when the frame fires it decides whether to
//! apply them, wait for a later frame (minimum spacing), or drop the tick
//! because the request was superseded.

use crate::geometry::Point;
use crate::host::{AreaHost, FrameToken};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct PendingFrame {
    token: FrameToken,
    pointer: Point,
}

/// What to do with a fired frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameDecision {
    /// Apply the latest pointer coordinates
    Apply(Point),
    /// Too soon after the last applied frame; a new frame was requested
    Deferred(FrameToken),
    /// Token is not the outstanding request (cancelled or superseded)
    Stale,
}

/// Counters for frame scheduling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Frame requests issued to the host
    pub requested: u64,
    /// Frames that applied a position
    pub applied: u64,
    /// Frames re-requested because of the minimum spacing
    pub deferred: u64,
    /// Fired frames that were discarded
    pub stale: u64,
    /// Move events folded into an already pending frame
    pub coalesced: u64,
}

#[derive(Debug, Clone)]
pub struct FrameCoalescer {
    pending: Option<PendingFrame>,
    last_applied_ms: Option<f64>,
    min_interval_ms: f64,
    stats: FrameStats,
}

impl FrameCoalescer {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            pending: None,
            last_applied_ms: None,
            min_interval_ms,
            stats: FrameStats::default(),
        }
    }

    /// Record the latest pointer position, requesting a frame if none is pending
    pub fn schedule<H: AreaHost>(&mut self, pointer: Point, host: &mut H) -> FrameToken {
        match self.pending.as_mut() {
            Some(pending) => {
                pending.pointer = pointer;
                self.stats.coalesced += 1;
                pending.token
            }
            None => {
                let token = host.request_frame();
                self.stats.requested += 1;
                self.pending = Some(PendingFrame { token, pointer });
                token
            }
        }
    }

    /// Decide what a fired frame does
    pub fn on_frame<H: AreaHost>(&mut self, token: FrameToken, timestamp_ms: f64, host: &mut H) -> FrameDecision {
        let Some(pending) = self.pending else {
            self.stats.stale += 1;
            trace!(?token, "frame fired with nothing pending");
            return FrameDecision::Stale;
        };
        if pending.token != token {
            self.stats.stale += 1;
            trace!(?token, outstanding = ?pending.token, "discarding superseded frame");
            return FrameDecision::Stale;
        }

        if let Some(last) = self.last_applied_ms {
            if timestamp_ms - last < self.min_interval_ms {
                let next = host.request_frame();
                self.stats.requested += 1;
                self.stats.deferred += 1;
                self.pending = Some(PendingFrame {
                    token: next,
                    pointer: pending.pointer,
                });
                trace!(elapsed = timestamp_ms - last, "deferring frame");
                return FrameDecision::Deferred(next);
            }
        }

        self.pending = None;
        self.last_applied_ms = Some(timestamp_ms);
        self.stats.applied += 1;
        FrameDecision::Apply(pending.pointer)
    }

    /// Cancel the outstanding request, if any
    pub fn cancel<H: AreaHost>(&mut self, host: &mut H) {
        if let Some(pending) = self.pending.take() {
            host.cancel_frame(pending.token);
            trace!(token = ?pending.token, "cancelled pending frame");
        }
    }

    /// Forget the spacing history so the next frame applies immediately
    pub fn reset_timing(&mut self) {
        self.last_applied_ms = None;
    }

    pub fn pending_token(&self) -> Option<FrameToken> {
        self.pending.map(|p| p.token)
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
