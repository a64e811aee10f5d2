//! Error types for the Rillic landing page

use thiserror::Error;

/// Main error type for Rillic operations
#[derive(Error, Debug)]
pub enum RillicError {
    /// Element geometry could not be used for normalization
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A configuration constant lies outside its supported range
    #[error("Config value `{field}` = {value} is outside {min}..={max}")]
    ConfigOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image bytes were not a format the page can embed
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
}

/// Reasons a bounding rectangle cannot be used
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the rect components is NaN or infinite
    #[error("rect component is not finite")]
    NotFinite,

    /// Width or height is zero or negative (element not laid out)
    #[error("rect has no area ({width}x{height})")]
    Degenerate { width: f64, height: f64 },
}

/// Result type alias using RillicError
pub type RillicResult<T> = Result<T, RillicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RillicError::ConfigOutOfRange {
            field: "tilt",
            value: 45.0,
            min: 0.0,
            max: 30.0,
        };
        assert_eq!(
            format!("{}", err),
            "Config value `tilt` = 45 is outside 0..=30"
        );
    }

    #[test]
    fn test_error_from_geometry() {
        let err: RillicError = GeometryError::NotFinite.into();
        assert!(matches!(err, RillicError::Geometry(GeometryError::NotFinite)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RillicError = io_err.into();
        assert!(matches!(err, RillicError::Io(_)));
    }
}
