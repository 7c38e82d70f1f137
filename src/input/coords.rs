//! Coordinate conversion utilities for the draggable area.
//!
//! Centralizes the pointer -> pixel -> physical formulas so that drag
//! updates and programmatic positioning share one implementation.

use crate::geometry::{Point, Size, point};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    /// Top-left of the container in screen pixels
    pub container_origin: Point,
    /// Cached container layout size
    pub container_size: Size,
    /// Container-pixel to element-space multiplier
    pub scale: f64,
    /// Pixel to physical unit factor
    pub units_per_pixel: f64,
}

impl CoordinateContext {
    #[inline]
    pub fn new(container_origin: Point, container_size: Size, scale: f64, units_per_pixel: f64) -> Self {
        Self {
            container_origin,
            container_size,
            scale,
            units_per_pixel,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer position to the element's pixel position.
    ///
    /// `anchor` is the grab offset captured at drag start.
    #[inline]
    pub fn pointer_to_pixel(pointer: Point, anchor: Point, ctx: &CoordinateContext) -> Point {
        point(
            (pointer.x - ctx.container_origin.x - anchor.x) / ctx.scale,
            (pointer.y - ctx.container_origin.y - anchor.y) / ctx.scale,
        )
    }

    /// Convert a pixel position to physical units relative to the container center
    #[inline]
    pub fn pixel_to_physical(pixel: Point, ctx: &CoordinateContext) -> Point {
        let center = ctx.container_size.center();
        point(
            (pixel.x - center.x) * ctx.units_per_pixel,
            (pixel.y - center.y) * ctx.units_per_pixel,
        )
    }

    /// Convert physical units back to a pixel position.
    ///
    /// Returns `None` when `units_per_pixel` is zero (not invertible).
    #[inline]
    pub fn physical_to_pixel(physical: Point, ctx: &CoordinateContext) -> Option<Point> {
        if ctx.units_per_pixel == 0.0 || !ctx.units_per_pixel.is_finite() {
            return None;
        }
        let center = ctx.container_size.center();
        Some(point(
            physical.x / ctx.units_per_pixel + center.x,
            physical.y / ctx.units_per_pixel + center.y,
        ))
    }
}
