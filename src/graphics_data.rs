//! Embedded binary graphics data.
//!
//! Entities saved by some applications carry a proxy-graphics payload:
//! a declared byte size (group 92) followed by the data encoded as hex
//! text in chunks of up to 254 characters (repeated group 310 lines).
//! The payload is opaque; it is preserved verbatim through a round trip.

use crate::error::{DxfError, Result};

/// An entity's embedded binary graphics payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryGraphicsData {
    /// Declared size of the decoded data in bytes (group 92).
    pub size: i32,
    /// Hex-text chunk lines in stream order (group 310).
    lines: Vec<String>,
}

impl BinaryGraphicsData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self {
            size: 0,
            lines: Vec::new(),
        }
    }

    /// Append one group-310 chunk line.
    ///
    /// Empty chunk lines are rejected: a zero-length chunk is never valid
    /// on the wire.
    pub fn push_line(&mut self, line: impl Into<String>) -> Result<()> {
        let line = line.into();
        if line.is_empty() {
            return Err(DxfError::InvalidValue(
                "graphics data chunk line may not be empty".to_string(),
            ));
        }
        self.lines.push(line);
        Ok(())
    }

    /// The chunk lines in stream order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of chunk lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the payload has no chunk lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_line() {
        let mut data = BinaryGraphicsData::new();
        data.push_line("DEADBEEF").unwrap();
        data.push_line("CAFE").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.lines()[0], "DEADBEEF");
    }

    #[test]
    fn test_empty_chunk_rejected() {
        let mut data = BinaryGraphicsData::new();
        assert!(data.push_line("").is_err());
        assert!(data.is_empty());
    }

    #[test]
    fn test_chunk_order_preserved() {
        let mut data = BinaryGraphicsData::new();
        for chunk in ["AA", "BB", "CC"] {
            data.push_line(chunk).unwrap();
        }
        let collected: Vec<&str> = data.lines().iter().map(String::as_str).collect();
        assert_eq!(collected, ["AA", "BB", "CC"]);
    }
}
