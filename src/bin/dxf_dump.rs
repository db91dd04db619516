//! Dump the records found in a DXF fragment file.
//!
//! Usage: dxf_dump <file.dxf> [version]
//!
//! Reads entity/object/table records from the file and prints a one-line
//! summary per record, followed by any notifications the decoder produced.

use anyhow::{bail, Context, Result};
use dxfentities::entities::{Entity, EntityType};
use dxfentities::io::dxf::{DxfRecord, DxfTextReader, EntityReader};
use dxfentities::tables::TableEntry;
use dxfentities::types::DxfVersion;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => bail!("usage: dxf_dump <file.dxf> [AC1006|AC1009|AC1012|AC1014|AC1015]"),
    };
    let version = match args.next() {
        Some(v) => DxfVersion::from_version_string(&v)
            .with_context(|| format!("unknown version string '{}'", v))?,
        None => DxfVersion::default(),
    };

    let file = File::open(&path).with_context(|| format!("cannot open {}", path))?;
    let mut stream = DxfTextReader::new(BufReader::new(file));
    let mut reader = EntityReader::new(&mut stream, version);

    let mut count = 0usize;
    while let Some(record) = reader
        .next_record()
        .with_context(|| format!("decode failed in {}", path))?
    {
        count += 1;
        match &record {
            DxfRecord::Entity(entity) => {
                let e = entity.as_entity();
                println!(
                    "{:>4}. {} handle={} layer={}",
                    count,
                    e.entity_type(),
                    e.handle(),
                    e.layer()
                );
                if let EntityType::Circle(circle) = entity {
                    println!(
                        "      center={} radius={} area={:.4}",
                        circle.center,
                        circle.radius,
                        circle.area()
                    );
                }
            }
            DxfRecord::Dictionary(dict) => {
                println!("{:>4}. DICTIONARY with {} entries", count, dict.len());
                for entry in &dict.entries {
                    println!("      {} -> {}", entry.name, entry.object_handle);
                }
            }
            DxfRecord::RasterVariables(vars) => {
                println!(
                    "{:>4}. RASTERVARIABLES frame={} quality={} units={}",
                    count, vars.display_frame, vars.high_quality, vars.units
                );
            }
            DxfRecord::AppId(appid) => {
                println!("{:>4}. APPID {}", count, appid.name());
            }
        }
    }

    println!("{} record(s) read from {}", count, path);

    let notifications = reader.take_notifications();
    if !notifications.is_empty() {
        println!("\n{} notification(s):", notifications.len());
        for n in &notifications {
            println!("  {}", n);
        }
    }

    Ok(())
}
