//! Face3D entity (3DFACE)

use super::{Entity, EntityCommon};
use crate::types::{Color, Handle, Vector3};

use bitflags::bitflags;

bitflags! {
    /// Edge visibility flags for a 3D face (group 70).
    ///
    /// A set bit marks the corresponding edge invisible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InvisibleEdgeFlags: i16 {
        /// First edge (corner 1 to corner 2) is invisible.
        const FIRST = 1;
        /// Second edge (corner 2 to corner 3) is invisible.
        const SECOND = 2;
        /// Third edge (corner 3 to corner 4) is invisible.
        const THIRD = 4;
        /// Fourth edge (corner 4 to corner 1) is invisible.
        const FOURTH = 8;
    }
}

/// Face3D entity - a 3D face with 3 or 4 vertices
///
/// A 3DFACE is a surface defined by four corner points; a triangular face
/// repeats the third corner as the fourth. Individual edges can be marked
/// invisible via the flags word.
#[derive(Debug, Clone, PartialEq)]
pub struct Face3D {
    /// Common entity data
    pub common: EntityCommon,
    /// First corner point (groups 10/20/30)
    pub first_corner: Vector3,
    /// Second corner point (groups 11/21/31)
    pub second_corner: Vector3,
    /// Third corner point (groups 12/22/32)
    pub third_corner: Vector3,
    /// Fourth corner point (groups 13/23/33)
    pub fourth_corner: Vector3,
    /// Invisible edge flags (group 70)
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3D {
    /// Create a new 3D face with four corners
    pub fn new(first: Vector3, second: Vector3, third: Vector3, fourth: Vector3) -> Self {
        Self {
            common: EntityCommon::default(),
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
            invisible_edges: InvisibleEdgeFlags::empty(),
        }
    }

    /// Create a triangular 3D face (3 corners)
    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::new(first, second, third, third)
    }

    /// Builder: set invisible edge flags
    pub fn with_invisible_edges(mut self, flags: InvisibleEdgeFlags) -> Self {
        self.invisible_edges = flags;
        self
    }

    /// Check if this is a triangle (fourth corner coincides with third)
    pub fn is_triangle(&self) -> bool {
        (self.third_corner - self.fourth_corner).length() < 1e-10
    }

    /// Get all corner points
    pub fn corners(&self) -> Vec<Vector3> {
        if self.is_triangle() {
            vec![self.first_corner, self.second_corner, self.third_corner]
        } else {
            vec![
                self.first_corner,
                self.second_corner,
                self.third_corner,
                self.fourth_corner,
            ]
        }
    }
}

impl Default for Face3D {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO, Vector3::ZERO)
    }
}

impl Entity for Face3D {
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
        "3DFACE"
    }
}
