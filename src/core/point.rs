//! # Point
//!
//! A position in three-dimensional space. The whole domain of this crate.
//!
//! Coordinates are stored as `f64`. Integer input is widened on the way in,
//! so `Point::new(1.0, 2.0, -3.5)` and `Point(x=1, y=2, z=-3.5)` on the
//! Python side describe the same value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{PointError, PointResult};

/// Names of the three coordinates, in storage order
pub const COORDINATES: [&str; 3] = ["x", "y", "z"];

/// A point in 3D space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a new point from explicit coordinates
    ///
    /// # Example
    /// ```
    /// use points_demo::Point;
    /// let p = Point::new(1.0, 2.0, -3.5);
    /// assert_eq!((p.x, p.y, p.z), (1.0, 2.0, -3.5));
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        log::trace!("constructing point ({}, {}, {})", x, y, z);
        Self { x, y, z }
    }

    /// The point at (0, 0, 0)
    pub fn origin() -> Self {
        Self::default()
    }

    /// Reset every coordinate to zero, in place
    pub fn clear(&mut self) {
        log::debug!("clearing {}", self);
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }

    /// Check if this is the origin
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Coordinates as an `(x, y, z)` tuple
    pub fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Human-readable form, e.g. `Point(1.0, 2.0, -3.5)`
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        p.coords()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point({}, {}, {})",
            Coordinate(self.x),
            Coordinate(self.y),
            Coordinate(self.z)
        )
    }
}

/// Renders a coordinate the way Python's `float.__repr__` does: shortest
/// round-trip digits, always with a decimal point in positional form, and
/// `1e+16` / `1e-05` style once the decimal exponent leaves `-4..16`.
struct Coordinate(f64);

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        // `{:e}` gives the shortest round-trip mantissa, e.g. "-2.5e20".
        let sci = format!("{:e}", v);
        let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

        if v != 0.0 && !(-4..16).contains(&exp) {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
        } else {
            write!(f, "{:?}", v)
        }
    }
}

/// Parse a single named coordinate from text
///
/// # Example
/// ```
/// use points_demo::core::parse_coordinate;
/// assert_eq!(parse_coordinate("z", " -3.5 ").unwrap(), -3.5);
/// assert!(parse_coordinate("x", "abc").is_err());
/// ```
pub fn parse_coordinate(name: &str, text: &str) -> PointResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PointError::invalid_argument(name, "expected a number, got nothing"));
    }

    trimmed.parse::<f64>().map_err(|_| {
        PointError::invalid_argument(name, format!("expected a number, got {:?}", trimmed))
    })
}

impl FromStr for Point {
    type Err = PointError;

    /// Accepts `Point(x, y, z)` or a bare `x, y, z`
    fn from_str(s: &str) -> PointResult<Self> {
        let s = s.trim();
        let body = match (s.strip_prefix("Point("), s.strip_suffix(')')) {
            (Some(rest), Some(_)) => &rest[..rest.len() - 1],
            (None, None) => s,
            _ => {
                return Err(PointError::Malformed(format!(
                    "unbalanced parentheses in {:?}",
                    s
                )))
            }
        };

        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() != COORDINATES.len() {
            return Err(PointError::Malformed(format!(
                "expected {} coordinates, got {}",
                COORDINATES.len(),
                parts.len()
            )));
        }

        let x = parse_coordinate(COORDINATES[0], parts[0])?;
        let y = parse_coordinate(COORDINATES[1], parts[1])?;
        let z = parse_coordinate(COORDINATES[2], parts[2])?;

        log::debug!("parsed point from {:?}", s);
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let p = Point::default();
        assert_eq!(p.coords(), (0.0, 0.0, 0.0));
        assert!(p.is_origin());
        assert_eq!(Point::origin(), p);
    }

    #[test]
    fn test_new_reads_back() {
        let p = Point::new(1.0, 2.0, -3.5);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
        assert_eq!(p.z, -3.5);
    }

    #[test]
    fn test_fields_are_settable() {
        let mut p = Point::origin();
        p.x = 2.0;
        assert_eq!(p.coords(), (2.0, 0.0, 0.0));
    }

    #[test]
    fn test_clear() {
        let mut p = Point::new(1.0, 2.0, 3.0);
        p.clear();
        assert_eq!(p.coords(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_clear_twice() {
        let mut p = Point::new(-7.25, 1e10, 0.5);
        p.clear();
        p.clear();
        assert!(p.is_origin());
    }

    #[test]
    fn test_text_form() {
        assert_eq!(Point::origin().to_text(), "Point(0.0, 0.0, 0.0)");
        assert_eq!(Point::new(2.0, -1.0, 4.0).to_text(), "Point(2.0, -1.0, 4.0)");
    }

    #[test]
    fn test_text_contains_coordinates() {
        let text = Point::new(1.0, 2.0, -3.5).to_text();
        assert!(text.contains("1"));
        assert!(text.contains("2"));
        assert!(text.contains("-3.5"));

        let text = Point::new(0.1, 123.456, -0.001).to_text();
        for value in ["0.1", "123.456", "-0.001"] {
            assert!(text.contains(value), "{} missing from {}", value, text);
        }
    }

    #[test]
    fn test_text_non_finite() {
        let p = Point::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(p.to_text(), "Point(nan, inf, -inf)");
    }

    #[test]
    fn test_text_exponent_range() {
        let cases = [
            (1e16, "1e+16"),
            (2.5e20, "2.5e+20"),
            (-1.7976931348623157e308, "-1.7976931348623157e+308"),
            (1e-5, "1e-05"),
            (-1.5e-7, "-1.5e-07"),
            (5e-324, "5e-324"),
        ];
        for (value, expected) in cases {
            let text = Point::new(0.0, 0.0, value).to_text();
            assert_eq!(text, format!("Point(0.0, 0.0, {})", expected));
        }
    }

    #[test]
    fn test_text_exponent_boundaries() {
        assert_eq!(Point::new(1e-4, 0.0, 0.0).to_text(), "Point(0.0001, 0.0, 0.0)");
        assert_eq!(
            Point::new(9999999999999998.0, 0.0, 0.0).to_text(),
            "Point(9999999999999998.0, 0.0, 0.0)"
        );
        assert_eq!(Point::new(-0.0, 0.0, 0.0).to_text(), "Point(-0.0, 0.0, 0.0)");
    }

    #[test]
    fn test_text_exponent_roundtrip() {
        let p = Point::new(1e16, -2.5e-20, 1e-5);
        assert_eq!(p.to_text().parse::<Point>().unwrap(), p);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point = (1.0, 2.0, 3.0).into();
        assert_eq!(p, Point::new(1.0, 2.0, 3.0));
        let t: (f64, f64, f64) = p.into();
        assert_eq!(t, (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_text_form() {
        let p: Point = "Point(1.0, 2.0, -3.5)".parse().unwrap();
        assert_eq!(p, Point::new(1.0, 2.0, -3.5));
    }

    #[test]
    fn test_parse_bare_triple() {
        let p: Point = " 1, 2 ,-3.5 ".parse().unwrap();
        assert_eq!(p, Point::new(1.0, 2.0, -3.5));
    }

    #[test]
    fn test_parse_roundtrip() {
        let p = Point::new(0.1, -123.456, 6.02e15);
        assert_eq!(p.to_text().parse::<Point>().unwrap(), p);
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = "Point(1.0, abc, 3.0)".parse::<Point>().unwrap_err();
        assert!(matches!(
            err,
            PointError::InvalidArgument { ref coordinate, .. } if coordinate == "y"
        ));
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = "1.0, 2.0".parse::<Point>().unwrap_err();
        assert!(matches!(err, PointError::Malformed(_)));
    }

    #[test]
    fn test_parse_unbalanced() {
        let err = "Point(1.0, 2.0, 3.0".parse::<Point>().unwrap_err();
        assert!(matches!(err, PointError::Malformed(_)));
    }

    #[test]
    fn test_parse_coordinate_empty() {
        let err = parse_coordinate("z", "   ").unwrap_err();
        assert_eq!(
            err,
            PointError::invalid_argument("z", "expected a number, got nothing")
        );
    }

    #[test]
    fn test_serde_json() {
        let p = Point::new(1.0, 2.0, -3.5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":-3.5}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_serde_rejects_non_numeric() {
        let result: Result<Point, _> = serde_json::from_str(r#"{"x":"a","y":0,"z":0}"#);
        assert!(result.is_err());
    }
}
