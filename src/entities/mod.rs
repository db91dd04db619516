//! DXF entity types and traits

use crate::error::{DxfError, Result};
use crate::graphics_data::BinaryGraphicsData;
use crate::types::{Color, Handle, DEFAULT_EXTRUSION, DEFAULT_LAYER, DEFAULT_LINETYPE};
use crate::types::Vector3;

pub mod acis;
pub mod circle;
pub mod face3d;
pub mod raster_image;
pub mod xline;

pub use acis::{Body, ProprietaryData, Region};
pub use circle::{Circle, PointClassification};
pub use face3d::{Face3D, InvisibleEdgeFlags};
pub use raster_image::{ClipType, ImageDisplayFlags, RasterImage};
pub use xline::XLine;

/// Base trait for all drawable entities
pub trait Entity {
    /// Get the entity's unique handle
    fn handle(&self) -> Handle;

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String);

    /// Get the entity's color
    fn color(&self) -> Color;

    /// Set the entity's color
    fn set_color(&mut self, color: Color);

    /// Check if the entity is invisible
    fn is_invisible(&self) -> bool;

    /// Set the entity's visibility
    fn set_invisible(&mut self, invisible: bool);

    /// Whether the entity lives in paper space
    fn is_paper_space(&self) -> bool;

    /// Get the DXF type name of the entity
    fn entity_type(&self) -> &'static str;
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle (group 5); `Handle::NULL` means unset
    pub handle: Handle,
    /// Linetype name (group 6)
    pub linetype: String,
    /// Layer name (group 8)
    pub layer: String,
    /// Elevation (group 38, pre-R12 drawings only)
    pub elevation: f64,
    /// Thickness (group 39), never negative
    pub thickness: f64,
    /// Linetype scale (group 48), never negative
    pub linetype_scale: f64,
    /// Visibility flag (group 60, 1 = invisible)
    pub invisible: bool,
    /// Color (group 62)
    pub color: Color,
    /// Paper space flag (group 67)
    pub paper_space: bool,
    /// Embedded graphics payload (groups 92/310), if any
    pub graphics: Option<BinaryGraphicsData>,
    /// Soft-pointer handle string to the owner dictionary (group 330)
    pub owner_soft: String,
    /// Hard-owner handle string to the owner dictionary (group 360)
    pub owner_hard: String,
}

impl EntityCommon {
    /// Create new common entity data with the documented defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            linetype: DEFAULT_LINETYPE.to_string(),
            layer: DEFAULT_LAYER.to_string(),
            elevation: 0.0,
            thickness: 0.0,
            linetype_scale: 1.0,
            invisible: false,
            color: Color::ByLayer,
            paper_space: false,
            graphics: None,
            owner_soft: String::new(),
            owner_hard: String::new(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    /// Set the thickness, rejecting negative values.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        if thickness < 0.0 {
            return Err(DxfError::InvalidValue(format!(
                "thickness may not be negative, got {}",
                thickness
            )));
        }
        self.thickness = thickness;
        Ok(())
    }

    /// Set the linetype scale, rejecting negative values.
    pub fn set_linetype_scale(&mut self, scale: f64) -> Result<()> {
        if scale < 0.0 {
            return Err(DxfError::InvalidValue(format!(
                "linetype scale may not be negative, got {}",
                scale
            )));
        }
        self.linetype_scale = scale;
        Ok(())
    }

    /// Reset empty linetype/layer strings to their documented defaults.
    ///
    /// Applied after decoding and before encoding; the wire format treats
    /// an empty string as "not set".
    pub fn normalize(&mut self) {
        if self.linetype.is_empty() {
            self.linetype = DEFAULT_LINETYPE.to_string();
        }
        if self.layer.is_empty() {
            self.layer = DEFAULT_LAYER.to_string();
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an extrusion vector differs from the default (0, 0, 1).
pub(crate) fn is_default_extrusion(extrusion: Vector3) -> bool {
    extrusion == DEFAULT_EXTRUSION
}

/// Enumeration of all entity kinds for type-safe storage
#[derive(Debug, Clone)]
pub enum EntityType {
    /// 3DFACE entity
    Face3D(Face3D),
    /// BODY entity
    Body(Body),
    /// CIRCLE entity
    Circle(Circle),
    /// IMAGE entity
    Image(RasterImage),
    /// REGION entity
    Region(Region),
    /// XLINE entity (construction line, infinite)
    XLine(XLine),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Face3D(e) => e,
            EntityType::Body(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Image(e) => e,
            EntityType::Region(e) => e,
            EntityType::XLine(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Face3D(e) => e,
            EntityType::Body(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Image(e) => e,
            EntityType::Region(e) => e,
            EntityType::XLine(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_defaults() {
        let common = EntityCommon::new();
        assert_eq!(common.handle, Handle::NULL);
        assert_eq!(common.linetype, "BYLAYER");
        assert_eq!(common.layer, "0");
        assert_eq!(common.elevation, 0.0);
        assert_eq!(common.thickness, 0.0);
        assert_eq!(common.linetype_scale, 1.0);
        assert!(!common.invisible);
        assert_eq!(common.color, Color::ByLayer);
        assert!(!common.paper_space);
        assert!(common.graphics.is_none());
        assert_eq!(common.owner_soft, "");
        assert_eq!(common.owner_hard, "");
    }

    #[test]
    fn test_set_thickness_rejects_negative() {
        let mut common = EntityCommon::new();
        assert!(common.set_thickness(-1.0).is_err());
        assert_eq!(common.thickness, 0.0);
        common.set_thickness(2.5).unwrap();
        assert_eq!(common.thickness, 2.5);
    }

    #[test]
    fn test_set_linetype_scale_rejects_negative() {
        let mut common = EntityCommon::new();
        assert!(common.set_linetype_scale(-0.5).is_err());
        assert_eq!(common.linetype_scale, 1.0);
    }

    #[test]
    fn test_normalize_restores_defaults() {
        let mut common = EntityCommon::new();
        common.linetype.clear();
        common.layer.clear();
        common.normalize();
        assert_eq!(common.linetype, "BYLAYER");
        assert_eq!(common.layer, "0");
    }
}
