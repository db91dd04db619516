//! DXF tag stream reading

mod entity_reader;
mod stream_reader;
mod text_reader;

pub use entity_reader::{DxfRecord, EntityReader};
pub use stream_reader::{DxfCodePair, DxfStreamReader, PointReader};
pub use text_reader::DxfTextReader;
