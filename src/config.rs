//! Manager configuration.
//!
//! `AreaConfig` is plain serde data so it can be embedded in a page as JSON
//! or stored next to other user settings. Every field has a default, so a
//! partial (or empty) JSON object is a valid configuration.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PRECISION, DEFAULT_SCALE, DEFAULT_UNITS_PER_PIXEL,
    DEFAULT_X_FIELD_ID, DEFAULT_Y_FIELD_ID, MIN_FRAME_INTERVAL_MS,
};
use crate::error::{AreaError, AreaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for one area position manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    /// Container-pixel to element-space multiplier (CSS zoom on the container)
    pub scale: f64,
    /// Pixel to physical unit (millimetre) factor
    pub units_per_pixel: f64,
    /// Decimal places for mirrored physical values
    pub precision: usize,
    /// Minimum spacing between applied frames
    pub min_frame_interval_ms: f64,
    /// Input field mirroring the horizontal physical offset
    pub x_field_id: Option<String>,
    /// Input field mirroring the vertical physical offset
    pub y_field_id: Option<String>,
    /// Apply presentation hints (no transition, own layer) while dragging
    pub drag_hints: bool,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            units_per_pixel: DEFAULT_UNITS_PER_PIXEL,
            precision: DEFAULT_PRECISION,
            min_frame_interval_ms: MIN_FRAME_INTERVAL_MS,
            x_field_id: Some(DEFAULT_X_FIELD_ID.to_string()),
            y_field_id: Some(DEFAULT_Y_FIELD_ID.to_string()),
            drag_hints: true,
        }
    }
}

impl AreaConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> AreaResult<Self> {
        let config: AreaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> AreaResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(path = %path.display(), "loaded area config");
        Ok(config)
    }

    /// Load from `path`, falling back to defaults if the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> AreaResult<Self> {
        match Self::load(path) {
            Err(AreaError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> AreaResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> AreaResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AreaError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.units_per_pixel.is_finite() {
            return Err(AreaError::InvalidConfig(format!(
                "units_per_pixel must be finite, got {}",
                self.units_per_pixel
            )));
        }
        if !self.min_frame_interval_ms.is_finite() || self.min_frame_interval_ms < 0.0 {
            return Err(AreaError::InvalidConfig(format!(
                "min_frame_interval_ms must be non-negative, got {}",
                self.min_frame_interval_ms
            )));
        }
        Ok(())
    }

    /// Config without mirrored input fields
    pub fn without_fields(mut self) -> Self {
        self.x_field_id = None;
        self.y_field_id = None;
        self
    }
}

/// Default location of the persisted configuration
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
