//! RasterImage entity (IMAGE)
//!
//! Displays an external raster image within a drawing. The pixel data
//! itself lives in an IMAGEDEF object; this entity references that object
//! by handle and carries placement, sizing, clipping and display state.

use super::{Entity, EntityCommon};
use crate::types::{Color, Handle, Vector2, Vector3};

use bitflags::bitflags;

bitflags! {
    /// Image display property flags (group 70).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ImageDisplayFlags: i16 {
        /// Show the image.
        const SHOW_IMAGE = 1;
        /// Show the image even when not aligned with the screen.
        const SHOW_NOT_ALIGNED = 2;
        /// Use the clipping boundary.
        const USE_CLIPPING_BOUNDARY = 4;
        /// Transparency is on.
        const TRANSPARENCY_ON = 8;
    }
}

impl Default for ImageDisplayFlags {
    fn default() -> Self {
        ImageDisplayFlags::SHOW_IMAGE | ImageDisplayFlags::USE_CLIPPING_BOUNDARY
    }
}

/// Clipping boundary type (group 71).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i16)]
pub enum ClipType {
    /// Rectangular clipping (two opposite corners).
    #[default]
    Rectangular = 1,
    /// Polygonal clipping (three or more vertices).
    Polygonal = 2,
}

impl From<i16> for ClipType {
    fn from(value: i16) -> Self {
        match value {
            2 => Self::Polygonal,
            _ => Self::Rectangular,
        }
    }
}

/// IMAGE entity
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    /// Common entity data
    pub common: EntityCommon,
    /// Class version (group 90)
    pub class_version: i32,
    /// Insertion point in WCS (groups 10/20/30)
    pub insertion_point: Vector3,
    /// U-vector of a single pixel, world units (groups 11/21/31)
    pub u_vector: Vector3,
    /// V-vector of a single pixel, world units (groups 12/22/32)
    pub v_vector: Vector3,
    /// Image size in pixels, U/V as x/y (groups 13/23)
    pub pixel_size: Vector2,
    /// Display property flags (group 70)
    pub display_flags: ImageDisplayFlags,
    /// Clipping boundary type (group 71)
    pub clip_type: ClipType,
    /// Clipping state, on/off (group 280)
    pub clipping_state: bool,
    /// Brightness, 0-100 (group 281)
    pub brightness: u8,
    /// Contrast, 0-100 (group 282)
    pub contrast: u8,
    /// Fade, 0-100 (group 283)
    pub fade: u8,
    /// Clip boundary vertices in image pixel space (repeated groups 14/24,
    /// count in group 91). Rectangular: two opposite corners; polygonal:
    /// three or more vertices.
    pub clip_vertices: Vec<Vector2>,
    /// Hard reference to the IMAGEDEF object (group 340)
    pub definition_ref: String,
    /// Hard reference to the IMAGEDEF_REACTOR object (group 360)
    pub definition_reactor_ref: String,
}

impl RasterImage {
    /// Create a new image at the origin with a one-pixel placeholder size
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            class_version: 0,
            insertion_point: Vector3::ZERO,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::UNIT_Y,
            pixel_size: Vector2::new(1.0, 1.0),
            display_flags: ImageDisplayFlags::default(),
            clip_type: ClipType::Rectangular,
            clipping_state: false,
            brightness: 50,
            contrast: 50,
            fade: 0,
            clip_vertices: Vec::new(),
            definition_ref: String::new(),
            definition_reactor_ref: String::new(),
        }
    }

    /// Create an image with insertion point and pixel dimensions
    pub fn with_placement(insertion_point: Vector3, width_pixels: f64, height_pixels: f64) -> Self {
        Self {
            insertion_point,
            pixel_size: Vector2::new(width_pixels, height_pixels),
            ..Self::new()
        }
    }

    /// Replace the clip boundary with a rectangle spanning two corners
    pub fn set_rectangular_clip(&mut self, corner1: Vector2, corner2: Vector2) {
        self.clip_type = ClipType::Rectangular;
        self.clip_vertices = vec![corner1, corner2];
    }

    /// Replace the clip boundary with a polygon
    pub fn set_polygonal_clip(&mut self, vertices: Vec<Vector2>) {
        self.clip_type = ClipType::Polygonal;
        self.clip_vertices = vertices;
    }

    /// Number of clip boundary vertices (the group-91 count)
    pub fn clip_vertex_count(&self) -> usize {
        self.clip_vertices.len()
    }

    /// Width of the image in world units
    pub fn world_width(&self) -> f64 {
        self.u_vector.length() * self.pixel_size.x
    }

    /// Height of the image in world units
    pub fn world_height(&self) -> f64 {
        self.v_vector.length() * self.pixel_size.y
    }
}

impl Default for RasterImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for RasterImage {
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
        "IMAGE"
    }
}
