//! Drag/position manager for the tablet area visualizer.
//!
//! A draggable rectangle inside a bounded container represents the active
//! area of a tablet. `AreaPositionManager` follows mouse and single-finger
//! touch drags, converts the element's pixel position into a physical
//! offset from the container center, mirrors it into two input fields and
//! notifies the embedder so dependent visuals can be redrawn.
//!
//! ## Architecture
//!
//! The manager is host-agnostic. Hosts implement `host::AreaHost` and feed
//! `InputEvent`s and fired animation frames into the manager:
//!
//! ```text
//! host input -> handle_input -> DragState -> FrameCoalescer
//! host frame -> on_frame -> coords -> style + fields -> on_update
//! ```
//!
//! `host::HeadlessHost` keeps everything in memory; `host::web::DomHost`
//! (feature `web`) binds to real DOM elements.

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod manager;
pub mod perf;

pub use config::AreaConfig;
pub use error::{AreaError, AreaResult};
pub use format::{FixedFormatter, Formatter};
pub use geometry::{Bounds, Point, Size};
pub use host::{AreaHost, HeadlessHost};
pub use input::{InputEvent, InputPhase, TouchPoint};
pub use manager::{AreaPositionManager, ManagerBuilder, ManagerSnapshot};
