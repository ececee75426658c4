//! # Configuration
//!
//! Named, optional construction arguments for a [`Point`].
//!
//! Any subset of `x`, `y`, `z` may be given, in any order. Whatever is left
//! out defaults to zero.

use super::point::Point;

/// Construction arguments for a point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointConfig {
    /// X coordinate, zero when unset
    pub x: Option<f64>,

    /// Y coordinate, zero when unset
    pub y: Option<f64>,

    /// Z coordinate, zero when unset
    pub z: Option<f64>,
}

impl PointConfig {
    /// Empty configuration: builds the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x coordinate
    pub fn with_x(mut self, x: impl Into<f64>) -> Self {
        self.x = Some(x.into());
        self
    }

    /// Set the y coordinate
    pub fn with_y(mut self, y: impl Into<f64>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Set the z coordinate
    pub fn with_z(mut self, z: impl Into<f64>) -> Self {
        self.z = Some(z.into());
        self
    }

    /// Build the point, filling unset coordinates with zero
    pub fn build(self) -> Point {
        Point::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }
}

impl From<PointConfig> for Point {
    fn from(config: PointConfig) -> Self {
        config.build()
    }
}
