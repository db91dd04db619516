//! Circle entity

use super::{Entity, EntityCommon};
use crate::error::{DxfError, Result};
use crate::types::{Color, Handle, Vector3, DEFAULT_EXTRUSION};

/// Classification of a point against a circle's edge.
///
/// The plain classification uses exact floating-point comparison for
/// `OnEdge`, matching the wire format's exact-value semantics. Derived
/// geometry should use [`Circle::classify_point_with_tolerance`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    /// The point lies strictly inside the circle
    Inside,
    /// The point lies exactly on the circle's edge
    OnEdge,
    /// The point lies strictly outside the circle
    Outside,
}

/// A circle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the circle (groups 10/20/30)
    pub center: Vector3,
    /// Radius of the circle (group 40)
    pub radius: f64,
    /// Extrusion direction (groups 210/220/230)
    pub extrusion: Vector3,
}

impl Circle {
    /// Create a new circle at the origin with radius 1
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            extrusion: DEFAULT_EXTRUSION,
        }
    }

    /// Create a new circle with center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }

    /// Create a new circle from coordinates and radius
    pub fn from_coords(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Circle::from_center_radius(Vector3::new(x, y, z), radius)
    }

    /// Set the radius, rejecting zero and negative values.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if radius <= 0.0 {
            return Err(DxfError::InvalidValue(format!(
                "circle radius must be positive, got {}",
                radius
            )));
        }
        self.radius = radius;
        Ok(())
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Get the circumference of the circle
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Get the area of the circle
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Classify a point against the circle's edge.
    ///
    /// The test is planar: only X and Y are compared, with the circle
    /// taken to lie in the z = 0 plane. `OnEdge` requires the squared
    /// distance to equal the squared radius exactly.
    pub fn classify_point(&self, point: Vector3) -> PointClassification {
        let dx = self.center.x - point.x;
        let dy = self.center.y - point.y;
        let dist_sq = dx * dx + dy * dy;
        let radius_sq = self.radius * self.radius;

        if dist_sq < radius_sq {
            PointClassification::Inside
        } else if dist_sq > radius_sq {
            PointClassification::Outside
        } else {
            PointClassification::OnEdge
        }
    }

    /// Classify a point with an explicit edge tolerance.
    ///
    /// Points whose distance from the edge is within `tolerance` classify
    /// as `OnEdge`.
    pub fn classify_point_with_tolerance(
        &self,
        point: Vector3,
        tolerance: f64,
    ) -> PointClassification {
        let dx = self.center.x - point.x;
        let dy = self.center.y - point.y;
        let dist = (dx * dx + dy * dy).sqrt();

        if (dist - self.radius).abs() <= tolerance {
            PointClassification::OnEdge
        } else if dist < self.radius {
            PointClassification::Inside
        } else {
            PointClassification::Outside
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Circle {
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
        "CIRCLE"
    }
}
