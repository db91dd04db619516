//! Shared test utilities for dxfentities integration tests.

#![allow(dead_code)]

use dxfentities::io::dxf::{DxfRecord, DxfTextReader, EntityReader, EntityWriter, DxfTextWriter};
use dxfentities::notification::NotificationCollection;
use dxfentities::types::DxfVersion;

/// Decode every record in a DXF fragment, returning the records and the
/// notifications produced along the way.
pub fn decode_all(fragment: &str, version: DxfVersion) -> (Vec<DxfRecord>, NotificationCollection) {
    let mut stream = DxfTextReader::from_string(fragment);
    let mut reader = EntityReader::new(&mut stream, version);

    let mut records = Vec::new();
    while let Some(record) = reader.next_record().expect("decode failed") {
        records.push(record);
    }
    let notifications = reader.take_notifications();
    (records, notifications)
}

/// Decode exactly one record from a fragment.
pub fn decode_one(fragment: &str, version: DxfVersion) -> (DxfRecord, NotificationCollection) {
    let (mut records, notifications) = decode_all(fragment, version);
    assert_eq!(records.len(), 1, "expected exactly one record");
    (records.remove(0), notifications)
}

/// Encode a record to its ASCII tag stream form.
pub fn encode(record: &DxfRecord, version: DxfVersion) -> String {
    let mut buf = Vec::new();
    {
        let mut writer = DxfTextWriter::new(&mut buf);
        let mut entity_writer = EntityWriter::new(&mut writer, version);
        entity_writer.write_record(record).expect("encode failed");
    }
    String::from_utf8(buf).unwrap()
}

/// Encode a record, then decode the produced stream back into a record.
pub fn roundtrip(record: &DxfRecord, version: DxfVersion) -> DxfRecord {
    let mut encoded = encode(record, version);
    encoded.push_str("  0\nEOF\n");
    let (decoded, _) = decode_one(&encoded, version);
    decoded
}
