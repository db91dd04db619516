//! I/O module for reading and writing DXF tag streams

pub mod dxf;

pub use dxf::{DxfTextReader, DxfTextWriter, EntityReader, EntityWriter};
