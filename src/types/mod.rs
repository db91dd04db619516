//! Shared value types and process-wide defaults

pub mod color;
pub mod handle;
pub mod vector;
pub mod version;

pub use color::Color;
pub use handle::Handle;
pub use vector::{Vector2, Vector3};
pub use version::DxfVersion;

/// Default linetype name for new entities.
pub const DEFAULT_LINETYPE: &str = "BYLAYER";

/// Default layer name for new entities.
pub const DEFAULT_LAYER: &str = "0";

/// Default extrusion direction for planar entities.
pub const DEFAULT_EXTRUSION: Vector3 = Vector3::UNIT_Z;
