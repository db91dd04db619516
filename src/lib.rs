//! # dxfentities
//!
//! A pure Rust library for reading and writing DXF entity, object and
//! table records at the tag stream level.
//!
//! Each supported record kind (3DFACE, APPID, BODY, CIRCLE, DICTIONARY,
//! IMAGE, RASTERVARIABLES, REGION, XLINE) follows the same template:
//! construct with defaults, decode from a sequential group-code/value tag
//! stream, encode back out honoring format-version gating. File and
//! section assembly is left to the caller; this crate handles the records
//! themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfentities::io::dxf::{DxfTextReader, EntityReader, DxfRecord};
//! use dxfentities::entities::EntityType;
//! use dxfentities::types::DxfVersion;
//!
//! let fragment = "  0\nCIRCLE\n  8\n0\n 10\n1.0\n 20\n2.0\n 30\n0.0\n 40\n5.0\n  0\nEOF\n";
//! let mut stream = DxfTextReader::from_string(fragment);
//! let mut reader = EntityReader::new(&mut stream, DxfVersion::R14);
//!
//! if let Some(DxfRecord::Entity(EntityType::Circle(circle))) = reader.next_record()? {
//!     assert_eq!(circle.radius, 5.0);
//! }
//! # Ok::<(), dxfentities::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Entity` - base trait for drawable entities
//! - `TableEntry` - trait for table entries
//! - `EntityReader` / `EntityWriter` - per-kind tag stream codecs
//! - `NotificationCollection` - non-fatal diagnostics from a decode/encode
//!   pass (unknown tags, coerced defaults, embedded comments)
//!
//! ## Parse policy
//!
//! Decoding is deliberately lenient: unknown group codes and mismatched
//! subclass markers are reported as notifications and skipped, never
//! failing the parse. Hard errors are reserved for I/O failures and
//! malformed code lines.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod graphics_data;
pub mod io;
pub mod notification;
pub mod objects;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, DxfVersion, Handle, Vector2, Vector3};

// Re-export entity types
pub use entities::{Body, Circle, Entity, EntityType, Face3D, RasterImage, Region, XLine};

// Re-export object types
pub use objects::{Dictionary, RasterVariables};

// Re-export table types
pub use tables::{AppId, Table, TableEntry};

// Re-export I/O types
pub use io::dxf::{DxfRecord, DxfTextReader, DxfTextWriter, EntityReader, EntityWriter};

// Re-export diagnostics
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_version_is_r14() {
        assert_eq!(DxfVersion::default(), DxfVersion::R14);
    }
}
