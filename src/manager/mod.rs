//! Area position manager.
//!
//! One manager owns one container/element pair. It turns pointer input
//! into the element's pixel position and the matching physical offset from
//! the container center, mirrors the physical values into two input fields
//! and notifies the embedder after every applied change.
//!
//! ## Modules
//!
//! - `lifecycle` - Builder, initialization, teardown
//! - `drag` - Input routing, drag sessions, frame application
//! - `positioning` - Programmatic positioning and conversion settings

mod drag;
mod lifecycle;
mod positioning;

pub use lifecycle::ManagerBuilder;

use crate::config::AreaConfig;
use crate::format::Formatter;
use crate::frame::{FrameCoalescer, FrameStats};
use crate::geometry::{Point, Size};
use crate::host::{AreaHost, FrameToken, ListenerHandle};
use crate::input::coords::CoordinateContext;
use crate::input::{DragSession, DragState};
use serde::Serialize;

/// Supplies the current container scale (e.g. read from a CSS transform)
pub type ScaleProvider = Box<dyn Fn() -> f64>;

/// Called after every applied position change
pub type UpdateCallback = Box<dyn FnMut()>;

pub struct AreaPositionManager<H: AreaHost> {
    host: H,
    /// False when elements were missing at initialization or after teardown
    enabled: bool,
    config: AreaConfig,
    scale: f64,
    units_per_pixel: f64,
    container_size: Size,
    drag: DragState,
    frames: FrameCoalescer,
    listeners: Vec<ListenerHandle>,
    position: Option<Point>,
    physical_position: Option<Point>,
    formatter: Box<dyn Formatter>,
    scale_provider: Option<ScaleProvider>,
    on_update: Option<UpdateCallback>,
}

/// Serializable view of a manager, for debugging and tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerSnapshot {
    pub enabled: bool,
    pub active: bool,
    pub session: Option<DragSession>,
    pub scale: f64,
    pub units_per_pixel: f64,
    pub container_size: Size,
    pub position: Option<Point>,
    pub physical_position: Option<Point>,
    pub pending_frame: Option<FrameToken>,
    pub listeners: usize,
    pub stats: FrameStats,
}

impl<H: AreaHost> AreaPositionManager<H> {
    pub fn builder(host: H) -> ManagerBuilder<H> {
        ManagerBuilder::new(host)
    }

    /// Bind with the default configuration, formatter and no callback
    pub fn new(host: H) -> Self {
        Self::builder(host).initialize()
    }

    /// True when bound to both elements and not torn down
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while a drag session is in progress
    pub fn is_active(&self) -> bool {
        self.drag.is_active()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Last applied pixel position, relative to the container
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Last applied offset from the container center, in physical units
    pub fn physical_position(&self) -> Option<Point> {
        self.physical_position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn units_per_pixel(&self) -> f64 {
        self.units_per_pixel
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    pub fn stats(&self) -> &FrameStats {
        self.frames.stats()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn snapshot(&self) -> ManagerSnapshot {
        ManagerSnapshot {
            enabled: self.enabled,
            active: self.drag.is_active(),
            session: self.drag.session().copied(),
            scale: self.scale,
            units_per_pixel: self.units_per_pixel,
            container_size: self.container_size,
            position: self.position,
            physical_position: self.physical_position,
            pending_frame: self.frames.pending_token(),
            listeners: self.listeners.len(),
            stats: *self.frames.stats(),
        }
    }

    fn coordinate_context(&self, container_origin: Point) -> CoordinateContext {
        CoordinateContext::new(container_origin, self.container_size, self.scale, self.units_per_pixel)
    }
}
