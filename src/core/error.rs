//! # Errors
//!
//! Everything that can go wrong while building a point from untrusted input.

/// Result type for point construction and parsing
pub type PointResult<T> = Result<T, PointError>;

/// Point construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    /// A coordinate value is not a number
    #[error("invalid argument for '{coordinate}': {reason}")]
    InvalidArgument {
        coordinate: String,
        reason: String,
    },

    /// Text does not have the `Point(x, y, z)` shape
    #[error("malformed point: {0}")]
    Malformed(String),
}

impl PointError {
    pub fn invalid_argument(coordinate: impl Into<String>, reason: impl Into<String>) -> Self {
        PointError::InvalidArgument {
            coordinate: coordinate.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PointError::invalid_argument("x", "expected a number, got \"abc\"");
        assert_eq!(
            err.to_string(),
            "invalid argument for 'x': expected a number, got \"abc\""
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = PointError::Malformed("expected 3 coordinates, got 2".into());
        assert_eq!(err.to_string(), "malformed point: expected 3 coordinates, got 2");
    }
}
