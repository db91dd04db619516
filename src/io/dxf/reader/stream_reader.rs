//! DXF stream reader trait and common types

use crate::error::Result;
use crate::io::dxf::GroupCodeValueType;
use crate::types::{Handle, Vector3};

/// A DXF code/value pair
#[derive(Debug, Clone)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The value type implied by the code
    pub value_type: GroupCodeValueType,

    /// String representation of the value
    pub value_string: String,

    /// Integer value (if applicable)
    pub value_int: Option<i64>,

    /// Floating-point value (if applicable)
    pub value_double: Option<f64>,
}

impl DxfCodePair {
    /// Create a new code/value pair, parsing the value per the code's type
    pub fn new(code: i32, value_string: String) -> Self {
        let value_type = GroupCodeValueType::from_code(code);

        let value_int = match value_type {
            GroupCodeValueType::Int16
            | GroupCodeValueType::Int32
            | GroupCodeValueType::Int64
            | GroupCodeValueType::Byte
            | GroupCodeValueType::Bool => value_string.trim().parse::<i64>().ok(),
            _ => None,
        };

        let value_double = match value_type {
            GroupCodeValueType::Double => value_string.trim().parse::<f64>().ok(),
            _ => None,
        };

        Self {
            code,
            value_type,
            value_string,
            value_int,
            value_double,
        }
    }

    /// Get value as string
    pub fn as_string(&self) -> &str {
        &self.value_string
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        self.value_int
    }

    /// Get value as i16
    pub fn as_i16(&self) -> Option<i16> {
        self.value_int.and_then(|v| i16::try_from(v).ok())
    }

    /// Get value as i32
    pub fn as_i32(&self) -> Option<i32> {
        self.value_int.and_then(|v| i32::try_from(v).ok())
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value_double
    }

    /// Get value as boolean (nonzero integer)
    pub fn as_bool(&self) -> Option<bool> {
        self.value_int.map(|v| v != 0)
    }

    /// Get value as handle (hex string)
    pub fn as_handle(&self) -> Option<Handle> {
        Handle::from_hex(&self.value_string)
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next code without consuming it
    fn peek_code(&mut self) -> Result<Option<i32>>;

    /// Push a pair back to be read again on the next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// The 1-based line number of the last value read, for diagnostics
    fn line_number(&self) -> usize;
}

/// Helper for reading 3D points from consecutive code pairs
pub struct PointReader {
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    group: Option<usize>,
}

impl PointReader {
    /// Create a new point reader
    pub fn new() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
            group: None,
        }
    }

    /// Add a coordinate value
    pub fn add_coordinate(&mut self, pair: &DxfCodePair) -> bool {
        if let Some(axis) = GroupCodeValueType::coordinate_axis(pair.code) {
            let coord_group = GroupCodeValueType::coordinate_group(pair.code);

            // A different group means this pair belongs to another point
            if self.group.is_some() && self.group != coord_group {
                return false;
            }

            self.group = coord_group;

            if let Some(value) = pair.as_double() {
                match axis {
                    0 => self.x = Some(value),
                    1 => self.y = Some(value),
                    2 => self.z = Some(value),
                    _ => return false,
                }
                return true;
            }
        }
        false
    }

    /// Check if we have at least an X/Y pair
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Get the point (z defaults to 0 if not provided)
    pub fn get_point(&self) -> Option<Vector3> {
        if let (Some(x), Some(y)) = (self.x, self.y) {
            Some(Vector3::new(x, y, self.z.unwrap_or(0.0)))
        } else {
            None
        }
    }

    /// Reset the reader for the next point
    pub fn reset(&mut self) {
        self.x = None;
        self.y = None;
        self.z = None;
        self.group = None;
    }
}

impl Default for PointReader {
    fn default() -> Self {
        Self::new()
    }
}
