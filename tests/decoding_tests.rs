//! Decode tests — tag-dispatch loops, lenient parse policy, post-loop
//! normalization.

mod common;

use common::{decode_all, decode_one};
use dxfentities::entities::EntityType;
use dxfentities::io::dxf::DxfRecord;
use dxfentities::notification::NotificationType;
use dxfentities::types::{Color, DxfVersion, Handle, Vector2};
use std::f64::consts::PI;

#[test]
fn decode_circle_scenario() {
    let fragment = "  0\nCIRCLE\n  5\n2D\n  8\nWALLS\n 10\n1.0\n 20\n2.0\n 30\n0.0\n 40\n5.0\n 62\n3\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Circle(circle)) = record else {
        panic!("expected a CIRCLE record");
    };
    assert_eq!(circle.common.handle, Handle::new(0x2D));
    assert_eq!(circle.common.layer, "WALLS");
    assert_eq!(circle.center.x, 1.0);
    assert_eq!(circle.center.y, 2.0);
    assert_eq!(circle.center.z, 0.0);
    assert_eq!(circle.radius, 5.0);
    assert_eq!(circle.common.color, Color::Index(3));
    assert!((circle.area() - PI * 25.0).abs() < 1e-12);
    assert!(notifications.is_empty());
}

#[test]
fn decode_unknown_group_code_continues() {
    // A 9999 tag mid-stream must be skipped; later tags still populate.
    let fragment =
        "  0\nCIRCLE\n 10\n1.0\n 20\n2.0\n9999\ngarbage\n 40\n7.5\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Circle(circle)) = record else {
        panic!("expected a CIRCLE record");
    };
    assert_eq!(circle.radius, 7.5);
    assert!(notifications.has_type(NotificationType::Warning));
    let warnings = notifications.of_type(NotificationType::Warning);
    assert!(warnings[0].message.contains("9999"));
}

#[test]
fn decode_bad_subclass_marker_warns_but_continues() {
    let fragment = "  0\nCIRCLE\n100\nAcDbBanana\n 40\n2.0\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Circle(circle)) = record else {
        panic!("expected a CIRCLE record");
    };
    assert_eq!(circle.radius, 2.0);
    assert!(notifications
        .of_type(NotificationType::Warning)
        .iter()
        .any(|n| n.message.contains("AcDbBanana")));
}

#[test]
fn decode_subclass_marker_below_r13_is_accepted_with_warning() {
    let fragment = "  0\nCIRCLE\n100\nAcDbCircle\n 40\n2.0\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R12);

    let DxfRecord::Entity(EntityType::Circle(circle)) = record else {
        panic!("expected a CIRCLE record");
    };
    assert_eq!(circle.radius, 2.0);
    assert!(notifications
        .of_type(NotificationType::Warning)
        .iter()
        .any(|n| n.message.contains("pre-R13")));
}

#[test]
fn decode_comment_is_reported_not_stored() {
    let fragment = "  0\nCIRCLE\n999\nplotted yesterday\n 40\n1.0\n  0\nEOF\n";
    let (_, notifications) = decode_one(fragment, DxfVersion::R14);

    let comments = notifications.of_type(NotificationType::Comment);
    assert_eq!(comments.len(), 1);
    assert!(comments[0].message.contains("plotted yesterday"));
}

#[test]
fn decode_empty_linetype_and_layer_reset_to_defaults() {
    let fragment = "  0\nXLINE\n  6\n\n  8\n\n 10\n0.0\n 20\n0.0\n 11\n1.0\n 21\n0.0\n  0\nEOF\n";
    let (record, _) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::XLine(xline)) = record else {
        panic!("expected an XLINE record");
    };
    assert_eq!(xline.common.linetype, "BYLAYER");
    assert_eq!(xline.common.layer, "0");
}

#[test]
fn decode_region_interleaved_proprietary_data() {
    let fragment = "  0\nREGION\n100\nAcDbEntity\n  8\n0\n100\nAcDbModelerGeometry\n 70\n1\n  1\nfirst primary\n  3\nfirst additional\n  1\nsecond primary\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Region(region)) = record else {
        panic!("expected a REGION record");
    };
    assert_eq!(region.proprietary_data.len(), 3);
    assert_eq!(region.proprietary_data[0].line, "first primary");
    assert!(!region.proprietary_data[0].additional);
    assert_eq!(region.proprietary_data[0].order, 0);
    assert_eq!(region.proprietary_data[1].line, "first additional");
    assert!(region.proprietary_data[1].additional);
    assert_eq!(region.proprietary_data[1].order, 1);
    assert_eq!(region.proprietary_data[2].order, 2);
    assert!(notifications.is_empty());
}

#[test]
fn decode_body_invalid_modeler_version_forced_to_one() {
    let fragment = "  0\nBODY\n 70\n3\n  1\nacis line\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Body(body)) = record else {
        panic!("expected a BODY record");
    };
    assert_eq!(body.modeler_format_version, 1);
    assert!(notifications
        .of_type(NotificationType::Warning)
        .iter()
        .any(|n| n.message.contains("modeler format version")));
}

#[test]
fn decode_face3d_corners_and_flags() {
    let fragment = "  0\n3DFACE\n 10\n0.0\n 20\n0.0\n 30\n0.0\n 11\n1.0\n 21\n0.0\n 31\n0.0\n 12\n1.0\n 22\n1.0\n 32\n0.0\n 13\n0.0\n 23\n1.0\n 33\n0.0\n 70\n5\n  0\nEOF\n";
    let (record, _) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Face3D(face)) = record else {
        panic!("expected a 3DFACE record");
    };
    assert_eq!(face.second_corner.x, 1.0);
    assert_eq!(face.fourth_corner.y, 1.0);
    assert_eq!(face.invisible_edges.bits(), 5);
    assert!(!face.is_triangle());
}

#[test]
fn decode_image_with_clip_boundary() {
    let fragment = "  0\nIMAGE\n 90\n0\n 10\n1.0\n 20\n2.0\n 30\n0.0\n 11\n0.01\n 21\n0.0\n 31\n0.0\n 12\n0.0\n 22\n0.01\n 32\n0.0\n 13\n640.0\n 23\n480.0\n340\nA0\n 70\n7\n280\n1\n281\n60\n282\n40\n283\n10\n 71\n2\n 91\n3\n 14\n0.0\n 24\n0.0\n 14\n639.0\n 24\n0.0\n 14\n320.0\n 24\n479.0\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Image(image)) = record else {
        panic!("expected an IMAGE record");
    };
    assert_eq!(image.pixel_size, Vector2::new(640.0, 480.0));
    assert_eq!(image.definition_ref, "A0");
    assert_eq!(image.display_flags.bits(), 7);
    assert!(image.clipping_state);
    assert_eq!(image.brightness, 60);
    assert_eq!(image.contrast, 40);
    assert_eq!(image.fade, 10);
    assert_eq!(image.clip_vertex_count(), 3);
    assert_eq!(image.clip_vertices[2], Vector2::new(320.0, 479.0));
    assert!(notifications.is_empty());
}

#[test]
fn decode_image_vertex_count_mismatch_warns() {
    let fragment =
        "  0\nIMAGE\n 91\n5\n 14\n0.0\n 24\n0.0\n 14\n1.0\n 24\n1.0\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Entity(EntityType::Image(image)) = record else {
        panic!("expected an IMAGE record");
    };
    assert_eq!(image.clip_vertex_count(), 2);
    assert!(notifications
        .of_type(NotificationType::Warning)
        .iter()
        .any(|n| n.message.contains("declared 5")));
}

#[test]
fn decode_dictionary_entries_in_order() {
    let fragment = "  0\nDICTIONARY\n  5\nC\n330\n0\n100\nAcDbDictionary\n  3\nACAD_GROUP\n350\nD\n  3\nACAD_LAYOUT\n350\n1A\n  0\nEOF\n";
    let (record, _) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::Dictionary(dict) = record else {
        panic!("expected a DICTIONARY record");
    };
    assert_eq!(dict.common.handle, Handle::new(0xC));
    assert_eq!(dict.common.owner_soft, "0");
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.entries[0].name, "ACAD_GROUP");
    assert_eq!(dict.entries[0].object_handle, "D");
    assert_eq!(dict.get("acad_layout"), Some("1A"));
}

#[test]
fn decode_raster_variables() {
    let fragment = "  0\nRASTERVARIABLES\n  5\nE\n100\nAcDbRasterVariables\n 90\n0\n 70\n1\n 71\n1\n 72\n5\n  0\nEOF\n";
    let (record, _) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::RasterVariables(vars) = record else {
        panic!("expected a RASTERVARIABLES record");
    };
    assert!(vars.display_frame);
    assert!(vars.high_quality);
    assert_eq!(vars.units, 5);
}

#[test]
fn decode_appid() {
    let fragment = "  0\nAPPID\n  5\n12\n100\nAcDbSymbolTableRecord\n100\nAcDbRegAppTableRecord\n  2\nACAD\n 70\n0\n  0\nEOF\n";
    let (record, notifications) = decode_one(fragment, DxfVersion::R14);

    let DxfRecord::AppId(appid) = record else {
        panic!("expected an APPID record");
    };
    assert_eq!(appid.application_name, "ACAD");
    assert_eq!(appid.handle, Handle::new(0x12));
    assert!(notifications.is_empty());
}

#[test]
fn decode_unknown_record_type_is_skipped() {
    let fragment = "  0\nWIPEOUT\n 10\n0.0\n 20\n0.0\n  0\nCIRCLE\n 40\n2.0\n  0\nEOF\n";
    let (records, notifications) = decode_all(fragment, DxfVersion::R14);

    assert_eq!(records.len(), 1);
    assert!(matches!(
        records[0],
        DxfRecord::Entity(EntityType::Circle(_))
    ));
    assert!(notifications.has_type(NotificationType::NotImplemented));
}

#[test]
fn decode_entity_graphics_data() {
    let fragment = "  0\nCIRCLE\n 40\n1.0\n 92\n8\n310\nDEADBEEF\n310\nCAFEBABE\n  0\nEOF\n";
    let (record, _) = decode_one(fragment, DxfVersion::R2000);

    let DxfRecord::Entity(EntityType::Circle(circle)) = record else {
        panic!("expected a CIRCLE record");
    };
    let graphics = circle.common.graphics.as_ref().expect("graphics expected");
    assert_eq!(graphics.size, 8);
    assert_eq!(graphics.lines(), ["DEADBEEF", "CAFEBABE"]);
}

#[test]
fn decode_malformed_code_line_is_hard_error() {
    let mut stream = dxfentities::io::dxf::DxfTextReader::from_string("  0\nCIRCLE\nnot_a_code\nvalue\n");
    let mut reader =
        dxfentities::io::dxf::EntityReader::new(&mut stream, DxfVersion::R14);
    assert!(reader.next_record().is_err());
}
