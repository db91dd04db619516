//! RasterVariables object (RASTERVARIABLES)
//!
//! Drawing-wide display settings for raster images. One instance per
//! drawing, owned by the ACAD_IMAGE_VARS dictionary entry.

use super::ObjectCommon;

/// RASTERVARIABLES object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterVariables {
    /// Common object data
    pub common: ObjectCommon,
    /// Class version (group 90)
    pub class_version: i32,
    /// Whether image frames are displayed (group 70, 0 = off, 1 = on)
    pub display_frame: bool,
    /// Display quality (group 71, 0 = draft, 1 = high)
    pub high_quality: bool,
    /// Real-world units for inserted images (group 72):
    /// 0 = none, 1 = mm, 2 = cm, 3 = m, 4 = km, 5 = in, 6 = ft, 7 = yd, 8 = mi
    pub units: i16,
}

impl RasterVariables {
    /// Create a new instance with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let vars = RasterVariables::new();
        assert_eq!(vars.class_version, 0);
        assert!(!vars.display_frame);
        assert!(!vars.high_quality);
        assert_eq!(vars.units, 0);
    }
}
