//! Crate-wide constants.
//!
//! Centralizes magic numbers and default identifiers so the manager, the
//! configuration layer and the hosts agree on them.

// ============================================================================
// Frame Timing
// ============================================================================

/// Minimum spacing between two applied visual updates (caps drag at ~60Hz)
pub const MIN_FRAME_INTERVAL_MS: f64 = 16.0;

/// Target frame time for 60 FPS; a frame application slower than this is reported
pub const TARGET_FRAME_MS: f64 = 16.67;

// ============================================================================
// Conversion Defaults
// ============================================================================

/// Default container-to-element scale (no CSS transform)
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default pixel to physical unit factor
pub const DEFAULT_UNITS_PER_PIXEL: f64 = 1.0;

/// Decimal places used when mirroring physical values into input fields
pub const DEFAULT_PRECISION: usize = 1;

// ============================================================================
// Host Identifiers
// ============================================================================

/// Input field mirroring the horizontal offset in physical units
pub const DEFAULT_X_FIELD_ID: &str = "area-offset-x";

/// Input field mirroring the vertical offset in physical units
pub const DEFAULT_Y_FIELD_ID: &str = "area-offset-y";

/// File name of the persisted configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "area.json";

/// Directory (under the platform config dir) holding the configuration
pub const CONFIG_DIR_NAME: &str = "areaviz";

// ============================================================================
// Presentation Hints
// ============================================================================

/// CSS `will-change` value applied while dragging; promotes the element to
/// its own compositing layer
pub const DRAG_WILL_CHANGE: &str = "transform";

/// CSS `transition` value applied while dragging
pub const DRAG_TRANSITION: &str = "none";
