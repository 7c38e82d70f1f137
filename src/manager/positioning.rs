//! Programmatic positioning and conversion settings.

use super::AreaPositionManager;
use crate::geometry::{Point, Size, point, size};
use crate::host::{AreaHost, Role};
use crate::input::coords::CoordinateConverter;
use tracing::{debug, warn};

impl<H: AreaHost> AreaPositionManager<H> {
    /// Set the container-to-element scale. Non-positive values are rejected.
    pub fn set_scale(&mut self, value: f64) {
        if !value.is_finite() || value <= 0.0 {
            warn!(value, "rejecting invalid scale");
            return;
        }
        self.scale = value;
    }

    /// Set the cached container size used for centering.
    ///
    /// Container size is only ever a centering offset, never a divisor, so
    /// zero is accepted.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        let new_size = size(width, height);
        if !new_size.is_valid() {
            warn!(width, height, "rejecting invalid container size");
            return;
        }
        self.container_size = new_size;
    }

    /// Re-read the container size from the host after a layout change
    pub fn refresh_container_size(&mut self) -> Option<Size> {
        let bounds = self.host.bounds(Role::Container)?;
        self.set_container_size(bounds.size.width, bounds.size.height);
        debug!(
            width = self.container_size.width,
            height = self.container_size.height,
            "container size refreshed"
        );
        Some(self.container_size)
    }

    pub fn set_units_per_pixel(&mut self, value: f64) {
        if !value.is_finite() {
            warn!(value, "rejecting invalid units per pixel");
            return;
        }
        self.units_per_pixel = value;
    }

    /// Place the element without drag input.
    ///
    /// With `in_physical_units` the coordinates are offsets from the
    /// container center in physical units; otherwise they are pixels
    /// relative to the container. The update callback always runs.
    pub fn set_position(&mut self, x: f64, y: f64, in_physical_units: bool) {
        if !self.enabled {
            return;
        }

        let ctx = self.coordinate_context(Point::ZERO);
        let pixel = if in_physical_units {
            match CoordinateConverter::physical_to_pixel(point(x, y), &ctx) {
                Some(pixel) => pixel,
                None => {
                    warn!(units_per_pixel = self.units_per_pixel, "cannot convert from physical units");
                    return;
                }
            }
        } else {
            point(x, y)
        };

        if !pixel.is_finite() {
            warn!(?pixel, "ignoring non-finite position");
            return;
        }
        self.apply_pixel(pixel, &ctx);
    }
}
