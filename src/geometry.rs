//! Plain geometry types in CSS pixel space.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or offset) in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// An axis-aligned box, as returned by a bounding client rect
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

#[inline]
pub fn size(width: f64, height: f64) -> Size {
    Size { width, height }
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Scale both components by `factor`
    #[inline]
    pub fn scale(self, factor: f64) -> Point {
        point(self.x * factor, self.y * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Center of a box of this size, relative to its own origin
    #[inline]
    pub fn center(&self) -> Point {
        point(self.width / 2.0, self.height / 2.0)
    }

    /// Sizes must be finite and non-negative to be usable as a layout box
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(point(x, y), size(width, height))
    }
}
