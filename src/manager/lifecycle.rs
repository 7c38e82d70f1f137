//! Manager lifecycle - construction, listener binding and teardown.

use super::{AreaPositionManager, ScaleProvider, UpdateCallback};
use crate::config::AreaConfig;
use crate::error::{AreaError, AreaResult};
use crate::format::{FixedFormatter, Formatter};
use crate::frame::FrameCoalescer;
use crate::geometry::Size;
use crate::host::{AreaHost, LISTENERS, Role};
use crate::input::DragState;
use tracing::{debug, warn};

/// Collects the optional collaborators of a manager.
///
/// # Example
/// ```ignore
/// let manager = AreaPositionManager::builder(host)
///     .config(config)
///     .formatter(|v: f64, p: Option<usize>| format!("{:.*} mm", p.unwrap_or(1), v))
///     .on_update(move || redraw())
///     .initialize();
/// ```
pub struct ManagerBuilder<H: AreaHost> {
    host: H,
    config: AreaConfig,
    formatter: Option<Box<dyn Formatter>>,
    scale_provider: Option<ScaleProvider>,
    on_update: Option<UpdateCallback>,
}

impl<H: AreaHost> ManagerBuilder<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: AreaConfig::default(),
            formatter: None,
            scale_provider: None,
            on_update: None,
        }
    }

    pub fn config(mut self, config: AreaConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default fixed-precision formatter
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Query the container scale at every drag start
    pub fn scale_provider(mut self, provider: impl Fn() -> f64 + 'static) -> Self {
        self.scale_provider = Some(Box::new(provider));
        self
    }

    /// Callback invoked after every applied position change
    pub fn on_update(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Bind to the host elements.
    ///
    /// Missing elements are not an error: the manager comes back disabled
    /// and every operation on it is a no-op.
    pub fn initialize(self) -> AreaPositionManager<H> {
        let (manager, error) = self.bind();
        if let Some(err) = error {
            warn!(%err, "area manager disabled");
        }
        manager
    }

    /// Like `initialize`, but reports missing elements as an error
    pub fn try_initialize(self) -> AreaResult<AreaPositionManager<H>> {
        match self.bind() {
            (manager, None) => Ok(manager),
            (_, Some(err)) => Err(err),
        }
    }

    fn bind(self) -> (AreaPositionManager<H>, Option<AreaError>) {
        let ManagerBuilder {
            host,
            mut config,
            formatter,
            scale_provider,
            on_update,
        } = self;

        if let Err(err) = config.validate() {
            warn!(%err, "invalid area config, falling back to defaults");
            config = AreaConfig::default();
        }

        let formatter = formatter.unwrap_or_else(|| Box::new(FixedFormatter::new(config.precision)));
        let container = host.bounds(Role::Container);
        let element = host.bounds(Role::Element);

        let mut manager = AreaPositionManager {
            host,
            enabled: false,
            scale: config.scale,
            units_per_pixel: config.units_per_pixel,
            container_size: Size::ZERO,
            drag: DragState::default(),
            frames: FrameCoalescer::new(config.min_frame_interval_ms),
            listeners: Vec::new(),
            position: None,
            physical_position: None,
            formatter,
            scale_provider,
            on_update,
            config,
        };

        let error = match (container, element) {
            (Some(container), Some(_)) => {
                manager.container_size = container.size;
                manager.bind_listeners();
                manager.enabled = true;
                debug!(
                    width = container.size.width,
                    height = container.size.height,
                    "area manager bound"
                );
                None
            }
            (None, _) => Some(AreaError::MissingElement("container".to_string())),
            (_, None) => Some(AreaError::MissingElement("draggable element".to_string())),
        };

        (manager, error)
    }
}

impl<H: AreaHost> AreaPositionManager<H> {
    fn bind_listeners(&mut self) {
        for (target, kind) in LISTENERS {
            let handle = self.host.listen(target, kind);
            self.listeners.push(handle);
        }
    }

    /// Cancel any pending frame, end the session and detach all listeners.
    ///
    /// The manager is disabled afterwards. Calling it again does nothing.
    pub fn teardown(&mut self) {
        if !self.enabled && self.listeners.is_empty() {
            return;
        }

        self.frames.cancel(&mut self.host);
        if self.drag.finish().is_some() && self.config.drag_hints {
            self.host.set_drag_hints(false);
        }
        let detached = self.listeners.len();
        for handle in self.listeners.drain(..) {
            self.host.unlisten(handle);
        }
        self.enabled = false;
        debug!(detached, "area manager torn down");
    }
}

impl<H: AreaHost> Drop for AreaPositionManager<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
