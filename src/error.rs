//! Error types for dxfentities library

use std::io;
use thiserror::Error;

/// Main error type for dxfentities operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during stream operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported DXF format version
    #[error("Unsupported DXF version: {0:?}")]
    UnsupportedVersion(String),

    /// Error parsing DXF tag stream
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid DXF group code encountered
    #[error("Invalid DXF code: {0}")]
    InvalidDxfCode(i32),

    /// Invalid entity or object type name
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// A field value outside its allowed domain
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A required field is missing or empty at write time
    #[error("Missing required field on {entity} with handle {handle:#X}: {field}")]
    MissingField {
        entity: &'static str,
        handle: u64,
        field: &'static str,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxfentities operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnsupportedVersion("AC1003".to_string());
        assert_eq!(err.to_string(), "Unsupported DXF version: \"AC1003\"");
    }

    #[test]
    fn test_missing_field_error() {
        let err = DxfError::MissingField {
            entity: "APPID",
            handle: 0x2D,
            field: "application name",
        };
        assert!(err.to_string().contains("APPID"));
        assert!(err.to_string().contains("0x2D"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
