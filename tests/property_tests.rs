//! Property tests for the round-trip law.

mod common;

use common::roundtrip;
use dxfentities::entities::{Circle, EntityType, XLine};
use dxfentities::io::dxf::DxfRecord;
use dxfentities::types::{DxfVersion, Handle, Vector3};
use proptest::prelude::*;

// Coordinates kept within a range that survives the 15-digit text encoding
// without precision loss.
fn coord() -> impl Strategy<Value = f64> {
    (-1.0e6..1.0e6f64).prop_map(|v| (v * 1024.0).round() / 1024.0)
}

fn radius() -> impl Strategy<Value = f64> {
    (1.0e-3..1.0e6f64).prop_map(|v| (v * 1024.0).round() / 1024.0)
}

proptest! {
    #[test]
    fn circle_roundtrip_law(
        x in coord(),
        y in coord(),
        z in coord(),
        r in radius(),
        handle in 1u64..0xFFFF_FFFF,
    ) {
        let mut circle = Circle::from_coords(x, y, z, r);
        circle.common.handle = Handle::new(handle);

        let DxfRecord::Entity(EntityType::Circle(decoded)) = roundtrip(
            &DxfRecord::Entity(EntityType::Circle(circle.clone())),
            DxfVersion::R14,
        ) else {
            panic!("expected a CIRCLE back");
        };

        prop_assert_eq!(decoded.common.handle, circle.common.handle);
        prop_assert_eq!(decoded.center, circle.center);
        prop_assert_eq!(decoded.radius, circle.radius);
    }

    #[test]
    fn xline_roundtrip_law(
        x in coord(),
        y in coord(),
        z in coord(),
    ) {
        let xline = XLine::from_point_direction(
            Vector3::new(x, y, z),
            Vector3::UNIT_Y,
        );

        let DxfRecord::Entity(EntityType::XLine(decoded)) = roundtrip(
            &DxfRecord::Entity(EntityType::XLine(xline.clone())),
            DxfVersion::R14,
        ) else {
            panic!("expected an XLINE back");
        };

        prop_assert_eq!(decoded.base_point, xline.base_point);
        prop_assert_eq!(decoded.direction, xline.direction);
    }
}
