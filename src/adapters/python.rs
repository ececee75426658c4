//! Python Bindings for points-demo
//!
//! Exposes the Rust `Point` to Python via PyO3 as the extension module
//! `points_demo.point`.
//!
//! ## Usage
//! ```python
//! from points_demo import Point
//!
//! point = Point(x=2.0, y=-1.0, z=4.0)
//! point            # Point(2.0, -1.0, 4.0)
//! point.x = 5
//! point.clear()
//! point            # Point(0.0, 0.0, 0.0)
//! ```

use pyo3::prelude::*;
use pyo3::exceptions::{PyTypeError, PyValueError};

use crate::core::{Point, PointConfig, PointError};

impl From<PointError> for PyErr {
    fn from(err: PointError) -> Self {
        match err {
            PointError::InvalidArgument { .. } => PyTypeError::new_err(err.to_string()),
            PointError::Malformed(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

// =============================================================================
// Point
// =============================================================================

/// A point in 3D space.
///
/// Examples
/// --------
/// Create a point.
///
/// >>> from points_demo import Point
/// >>> point = Point()
/// >>> point
/// Point(0.0, 0.0, 0.0)
///
/// Modify the x coordinate.
///
/// >>> point.x = 2.0
/// >>> point.x
/// 2.0
///
/// Initialize with non-default coordinates.
///
/// >>> point = Point(x=2.0, y=-1.0, z=4.0)
/// >>> point
/// Point(2.0, -1.0, 4.0)
///
/// Clear the point.
///
/// >>> point.clear()
/// >>> point
/// Point(0.0, 0.0, 0.0)
#[pyclass(name = "Point", module = "points_demo.point", subclass)]
#[derive(Clone)]
pub struct PyPoint {
    inner: Point,
}

#[pymethods]
impl PyPoint {
    /// Create a new Point
    ///
    /// Args:
    ///     x: X position (default: 0.0)
    ///     y: Y position (default: 0.0)
    ///     z: Z position (default: 0.0)
    #[new]
    #[pyo3(signature = (*, x=0.0, y=0.0, z=0.0))]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: PointConfig::new().with_x(x).with_y(y).with_z(z).build(),
        }
    }

    /// Parse a point from its textual form, e.g. "Point(1.0, 2.0, -3.5)"
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        let inner: Point = text.parse()?;
        Ok(Self { inner })
    }

    /// X Position.
    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[setter]
    fn set_x(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.x = extract_coordinate("x", value)?;
        Ok(())
    }

    /// Y Position.
    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    #[setter]
    fn set_y(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.y = extract_coordinate("y", value)?;
        Ok(())
    }

    /// Z Position.
    #[getter]
    fn z(&self) -> f64 {
        self.inner.z
    }

    #[setter]
    fn set_z(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.z = extract_coordinate("z", value)?;
        Ok(())
    }

    /// Clear the point, effectively setting it to (0.0, 0.0, 0.0).
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn __repr__(&self) -> String {
        self.inner.to_text()
    }

    fn __str__(&self) -> String {
        self.inner.to_text()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Convert any Python real number (int, float, bool, `__float__`) to f64
///
/// Only a `TypeError` means "not a number". Anything else, such as the
/// `OverflowError` for an int beyond f64 range, is passed through.
fn extract_coordinate(name: &str, value: &Bound<'_, PyAny>) -> PyResult<f64> {
    value.extract::<f64>().map_err(|err| {
        if err.is_instance_of::<PyTypeError>(value.py()) {
            PointError::invalid_argument(
                name,
                format!("must be a real number, not {}", value.get_type()),
            )
            .into()
        } else {
            err
        }
    })
}

// =============================================================================
// Module Definition
// =============================================================================

#[pymodule]
#[pyo3(name = "point")]
fn points_demo_point(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPoint>()?;

    m.add("__doc__", "Example point module that contains the Point class.")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
