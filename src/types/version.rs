//! DXF format version
//!
//! Versions are totally ordered so version gating is a plain comparison:
//! subclass markers require at least R13, owner-dictionary 102 groups
//! require at least R14, embedded graphics data requires at least R2000.

use std::fmt;

/// DXF format version, ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DxfVersion {
    /// AutoCAD Release 10 (AC1006)
    R10,
    /// AutoCAD Release 11 (AC1009)
    R11,
    /// AutoCAD Release 12 (AC1009)
    R12,
    /// AutoCAD Release 13 (AC1012)
    R13,
    /// AutoCAD Release 14 (AC1014)
    #[default]
    R14,
    /// AutoCAD 2000 (AC1015)
    R2000,
}

impl DxfVersion {
    /// The $ACADVER string written for this version.
    pub fn version_string(&self) -> &'static str {
        match self {
            DxfVersion::R10 => "AC1006",
            DxfVersion::R11 | DxfVersion::R12 => "AC1009",
            DxfVersion::R13 => "AC1012",
            DxfVersion::R14 => "AC1014",
            DxfVersion::R2000 => "AC1015",
        }
    }

    /// Resolve a $ACADVER string to a version.
    ///
    /// Ambiguous strings resolve to the newest release that wrote them
    /// (AC1009 is shared by R11 and R12 and resolves to R12).
    pub fn from_version_string(s: &str) -> Option<Self> {
        match s.trim() {
            "AC1006" => Some(DxfVersion::R10),
            "AC1009" => Some(DxfVersion::R12),
            "AC1012" => Some(DxfVersion::R13),
            "AC1014" => Some(DxfVersion::R14),
            "AC1015" => Some(DxfVersion::R2000),
            _ => None,
        }
    }

    /// Whether subclass markers (group 100) are written at this version.
    pub fn has_subclass_markers(&self) -> bool {
        *self >= DxfVersion::R13
    }

    /// Whether 102-bracketed owner dictionary groups are written.
    pub fn has_owner_dictionary_groups(&self) -> bool {
        *self >= DxfVersion::R14
    }

    /// Whether embedded binary graphics data (92/310) is written.
    pub fn has_graphics_data(&self) -> bool {
        *self >= DxfVersion::R2000
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version_string())
    }
}
