//! ACIS-backed entities (BODY, REGION)
//!
//! Both entities carry their geometry as opaque modeler data: text lines
//! produced by the ACIS solid modeler, preserved verbatim through a round
//! trip. Primary lines travel as group 1 and additional lines as group 3,
//! interleaved; the original interleaving order is significant and kept.

use super::{Entity, EntityCommon};
use crate::types::{Color, Handle};

/// The only modeler format version this library understands.
///
/// Decoders force any other value back to this with a warning.
pub const MODELER_FORMAT_VERSION: i16 = 1;

/// One opaque line of proprietary modeler data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProprietaryData {
    /// Position of this line within the entity's data, starting at 0.
    pub order: i32,
    /// The opaque payload line, preserved verbatim.
    pub line: String,
    /// True for additional data (group 3), false for primary (group 1).
    pub additional: bool,
}

impl ProprietaryData {
    /// Create a primary (group 1) data line.
    pub fn primary(order: i32, line: impl Into<String>) -> Self {
        Self {
            order,
            line: line.into(),
            additional: false,
        }
    }

    /// Create an additional (group 3) data line.
    pub fn additional(order: i32, line: impl Into<String>) -> Self {
        Self {
            order,
            line: line.into(),
            additional: true,
        }
    }
}

/// BODY entity - an ACIS solid body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Common entity data
    pub common: EntityCommon,
    /// Modeler format version (group 70), always 1
    pub modeler_format_version: i16,
    /// Proprietary data lines in original interleaved order
    pub proprietary_data: Vec<ProprietaryData>,
}

impl Body {
    /// Create a new empty body
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            modeler_format_version: MODELER_FORMAT_VERSION,
            proprietary_data: Vec::new(),
        }
    }

    /// Append a primary (group 1) data line, assigning the next order index.
    pub fn push_primary_line(&mut self, line: impl Into<String>) {
        let order = self.proprietary_data.len() as i32;
        self.proprietary_data.push(ProprietaryData::primary(order, line));
    }

    /// Append an additional (group 3) data line, assigning the next order index.
    pub fn push_additional_line(&mut self, line: impl Into<String>) {
        let order = self.proprietary_data.len() as i32;
        self.proprietary_data
            .push(ProprietaryData::additional(order, line));
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Body {
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
        "BODY"
    }
}

/// REGION entity - a bounded planar ACIS region
///
/// Wire-identical to BODY apart from the type name and subclass marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Common entity data
    pub common: EntityCommon,
    /// Modeler format version (group 70), always 1
    pub modeler_format_version: i16,
    /// Proprietary data lines in original interleaved order
    pub proprietary_data: Vec<ProprietaryData>,
}

impl Region {
    /// Create a new empty region
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            modeler_format_version: MODELER_FORMAT_VERSION,
            proprietary_data: Vec::new(),
        }
    }

    /// Append a primary (group 1) data line, assigning the next order index.
    pub fn push_primary_line(&mut self, line: impl Into<String>) {
        let order = self.proprietary_data.len() as i32;
        self.proprietary_data.push(ProprietaryData::primary(order, line));
    }

    /// Append an additional (group 3) data line, assigning the next order index.
    pub fn push_additional_line(&mut self, line: impl Into<String>) {
        let order = self.proprietary_data.len() as i32;
        self.proprietary_data
            .push(ProprietaryData::additional(order, line));
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Region {
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
        "REGION"
    }
}
