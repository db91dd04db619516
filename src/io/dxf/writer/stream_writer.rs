//! DXF stream writer trait and common types

use crate::error::Result;
use crate::types::{Color, Handle, Vector2, Vector3};

/// Trait for writing DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with a byte value (for codes 280-289)
    fn write_byte(&mut self, code: i32, value: u8) -> Result<()>;

    /// Write a code/value pair with a 16-bit integer value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a code/value pair with a 32-bit integer value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a code/value pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a code/value pair with a handle value
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()>;

    /// Flush the writer
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 2D point (codes 14/24 or similar)
    fn write_point2d(&mut self, x_code: i32, point: Vector2) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        Ok(())
    }

    /// Write a 3D point (codes 10/20/30 or similar)
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        self.write_double(x_code + 20, point.z)?;
        Ok(())
    }

    /// Write a color index
    fn write_color(&mut self, code: i32, color: Color) -> Result<()> {
        self.write_i16(code, color.index())
    }

    /// Write a record's type-name tag
    fn write_entity_type(&mut self, entity_type: &str) -> Result<()> {
        self.write_string(0, entity_type)
    }

    /// Write a subclass marker
    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(100, marker)
    }

    /// Write a 102-bracketed owner group
    fn write_owner_group(&mut self, group_name: &str, code: i32, handle: &str) -> Result<()> {
        self.write_string(102, group_name)?;
        self.write_string(code, handle)?;
        self.write_string(102, "}")?;
        Ok(())
    }
}

// Auto-implement the extension trait for all stream writers,
// trait objects included
impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}
