//! DXF (Drawing Exchange Format) tag stream reading and writing

mod group_code;
pub mod reader;
pub mod writer;

pub use group_code::GroupCodeValueType;
pub use reader::{DxfCodePair, DxfRecord, DxfStreamReader, DxfTextReader, EntityReader, PointReader};
pub use writer::{DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, EntityWriter};
