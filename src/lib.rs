//! # points-demo
//!
//! A 3D `Point` written in Rust and shipped as a Python extension module.
//!
//! ## Overview
//!
//! The crate is split the same way as any binding crate:
//!
//! - **`core`**: the `Point` value type. Construct, clear, render, parse.
//! - **`adapters::python`**: PyO3 bindings, built with `--features python`
//!   into the `points_demo.point` extension module.
//! - **`points-demo`** binary: the same operations from a shell.
//!
//! ## Rust Usage
//!
//! ```rust
//! use points_demo::{Point, PointConfig};
//!
//! let mut point = PointConfig::new().with_x(1).with_y(2).with_z(-3.5).build();
//! assert_eq!(point.to_text(), "Point(1.0, 2.0, -3.5)");
//!
//! point.clear();
//! assert_eq!(point, Point::origin());
//! ```
//!
//! ## Python Usage
//!
//! ```python
//! from points_demo import Point
//!
//! point = Point(x=1, y=2, z=-3.5)
//! print(point)        # Point(1.0, 2.0, -3.5)
//! point.clear()
//! ```

pub mod core;
pub mod adapters;

// Re-exports for convenience
pub use core::{Point, PointConfig, PointError, PointResult};
