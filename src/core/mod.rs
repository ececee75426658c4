//! # Core Domain
//!
//! Pure value types, no I/O. The foundation of points-demo.
//!
//! - `Point` - A position in 3D space
//! - `PointConfig` - Named optional coordinates used to build a `Point`
//! - `PointError` - Invalid input while building or parsing a `Point`
//!
//! Nothing here knows about Python. The bindings live in `adapters`.

mod point;
pub mod config;
pub mod error;

// Re-exports
pub use point::{parse_coordinate, Point, COORDINATES};
pub use config::PointConfig;
pub use error::{PointError, PointResult};
