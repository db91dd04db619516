//! XLine entity (construction line)

use super::{Entity, EntityCommon};
use crate::types::{Color, Handle, Vector3};

/// XLINE entity - an infinite construction line
///
/// Defined by a base point and a unit direction vector; the line extends
/// to infinity in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct XLine {
    /// Common entity data
    pub common: EntityCommon,
    /// Base point (groups 10/20/30)
    pub base_point: Vector3,
    /// Unit direction vector (groups 11/21/31)
    pub direction: Vector3,
}

impl XLine {
    /// Create a new construction line along the X axis through the origin
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            base_point: Vector3::ZERO,
            direction: Vector3::UNIT_X,
        }
    }

    /// Create a construction line through a point in a given direction
    ///
    /// The direction is normalized; the wire format requires a unit vector.
    pub fn from_point_direction(base_point: Vector3, direction: Vector3) -> Self {
        Self {
            base_point,
            direction: direction.normalize(),
            ..Self::new()
        }
    }

    /// A point on the line at the given parameter (base + t * direction)
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.base_point + self.direction * t
    }
}

impl Default for XLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for XLine {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn set_layer(&mut self, layer: String) {
        self.common.layer = layer;
    }

    fn color(&self) -> Color {
        self.common.color
    }

    fn set_color(&mut self, color: Color) {
        self.common.color = color;
    }

    fn is_invisible(&self) -> bool {
        self.common.invisible
    }

    fn set_invisible(&mut self, invisible: bool) {
        self.common.invisible = invisible;
    }

    fn is_paper_space(&self) -> bool {
        self.common.paper_space
    }

    fn entity_type(&self) -> &'static str {
        "XLINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xline_creation() {
        let xline = XLine::new();
        assert_eq!(xline.base_point, Vector3::ZERO);
        assert_eq!(xline.direction, Vector3::UNIT_X);
        assert_eq!(xline.entity_type(), "XLINE");
    }

    #[test]
    fn test_direction_normalized() {
        let xline = XLine::from_point_direction(Vector3::ZERO, Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(xline.direction, Vector3::UNIT_Y);
    }

    #[test]
    fn test_point_at() {
        let xline = XLine::from_point_direction(
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );
        assert_eq!(xline.point_at(3.0), Vector3::new(4.0, 2.0, 0.0));
        assert_eq!(xline.point_at(-1.0), Vector3::new(0.0, 2.0, 0.0));
    }
}
