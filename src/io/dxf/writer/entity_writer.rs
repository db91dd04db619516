//! Per-kind record encoders
//!
//! Each encoder validates the record, then emits its fixed tag sequence.
//! Validation happens before the first byte of the record is written, so a
//! refused record leaves the output untouched. Optional groups are
//! version-gated: subclass markers from R13, 102-bracketed owner groups
//! from R14, embedded graphics data from R2000.

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::entities::{
    is_default_extrusion, Body, Circle, EntityCommon, EntityType, Face3D, RasterImage, Region,
    XLine,
};
use crate::entities::ProprietaryData;
use crate::error::{DxfError, Result};
use crate::io::dxf::reader::DxfRecord;
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::{Dictionary, ObjectCommon, RasterVariables};
use crate::tables::AppId;
use crate::types::{Color, DxfVersion, DEFAULT_LAYER, DEFAULT_LINETYPE};

/// Encodes entity, object and table records onto a tag stream.
pub struct EntityWriter<'a> {
    writer: &'a mut dyn DxfStreamWriter,
    version: DxfVersion,
    notifications: NotificationCollection,
}

impl<'a> EntityWriter<'a> {
    /// Create a new record writer for the given target version
    pub fn new(writer: &'a mut dyn DxfStreamWriter, version: DxfVersion) -> Self {
        Self {
            writer,
            version,
            notifications: NotificationCollection::new(),
        }
    }

    /// The target format version used for gating decisions
    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Notifications collected so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Take the collected notifications, leaving the collection empty
    pub fn take_notifications(&mut self) -> NotificationCollection {
        std::mem::take(&mut self.notifications)
    }

    /// Write any decoded record
    pub fn write_record(&mut self, record: &DxfRecord) -> Result<()> {
        match record {
            DxfRecord::Entity(entity) => self.write_entity(entity),
            DxfRecord::Dictionary(dictionary) => self.write_dictionary(dictionary),
            DxfRecord::RasterVariables(vars) => self.write_raster_variables(vars),
            DxfRecord::AppId(appid) => self.write_appid(appid),
        }
    }

    /// Write a drawable entity
    pub fn write_entity(&mut self, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Face3D(e) => self.write_face3d(e),
            EntityType::Body(e) => self.write_body(e),
            EntityType::Circle(e) => self.write_circle(e),
            EntityType::Image(e) => self.write_image(e),
            EntityType::Region(e) => self.write_region(e),
            EntityType::XLine(e) => self.write_xline(e),
        }
    }

    // ===== Shared emit helpers =====

    /// Handle tag and owner-dictionary brackets, then the AcDbEntity marker.
    fn write_entity_header(&mut self, common: &EntityCommon) -> Result<()> {
        if common.handle.is_valid() {
            self.writer.write_handle(5, common.handle)?;
        }
        if self.version.has_owner_dictionary_groups() {
            if !common.owner_soft.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_REACTORS", 330, &common.owner_soft)?;
            }
            if !common.owner_hard.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_XDICTIONARY", 360, &common.owner_hard)?;
            }
        }
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbEntity")?;
        }
        Ok(())
    }

    /// Common attributes: paperspace, layer, linetype, color, scale,
    /// visibility, graphics payload. Default values are omitted.
    fn write_entity_attributes(&mut self, common: &EntityCommon, entity: &'static str) -> Result<()> {
        if common.paper_space {
            self.writer.write_i16(67, 1)?;
        }

        let layer = if common.layer.is_empty() {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "empty layer string on {} entity with handle {:#X}, relocated to layer {}",
                    entity,
                    common.handle.value(),
                    DEFAULT_LAYER
                ),
            );
            DEFAULT_LAYER
        } else {
            common.layer.as_str()
        };
        self.writer.write_string(8, layer)?;

        let linetype = if common.linetype.is_empty() {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "empty linetype string on {} entity with handle {:#X}, reset to {}",
                    entity,
                    common.handle.value(),
                    DEFAULT_LINETYPE
                ),
            );
            DEFAULT_LINETYPE
        } else {
            common.linetype.as_str()
        };
        if linetype != DEFAULT_LINETYPE {
            self.writer.write_string(6, linetype)?;
        }

        if common.color != Color::ByLayer {
            self.writer.write_color(62, common.color)?;
        }
        if common.linetype_scale != 1.0 {
            self.writer.write_double(48, common.linetype_scale)?;
        }
        if common.invisible {
            self.writer.write_i16(60, 1)?;
        }
        if self.version.has_graphics_data() {
            if let Some(graphics) = &common.graphics {
                self.writer.write_i32(92, graphics.size)?;
                for line in graphics.lines() {
                    self.writer.write_string(310, line)?;
                }
            }
        }
        Ok(())
    }

    /// Elevation and thickness, emitted only away from their defaults.
    fn write_elevation_thickness(&mut self, common: &EntityCommon) -> Result<()> {
        if self.version <= DxfVersion::R11 && common.elevation != 0.0 {
            self.writer.write_double(38, common.elevation)?;
        }
        if common.thickness != 0.0 {
            self.writer.write_double(39, common.thickness)?;
        }
        Ok(())
    }

    /// Object handle tag and owner-dictionary brackets.
    fn write_object_header(&mut self, common: &ObjectCommon) -> Result<()> {
        if common.handle.is_valid() {
            self.writer.write_handle(5, common.handle)?;
        }
        if self.version.has_owner_dictionary_groups() {
            if !common.owner_soft.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_REACTORS", 330, &common.owner_soft)?;
            }
            if !common.owner_hard.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_XDICTIONARY", 360, &common.owner_hard)?;
            }
        }
        Ok(())
    }

    // ===== Entity encoders =====

    /// Write a CIRCLE entity
    pub fn write_circle(&mut self, circle: &Circle) -> Result<()> {
        if circle.radius == 0.0 {
            return Err(DxfError::InvalidValue(format!(
                "radius value equals 0.0 for the CIRCLE entity with handle {:#X}",
                circle.common.handle.value()
            )));
        }

        self.writer.write_entity_type("CIRCLE")?;
        self.write_entity_header(&circle.common)?;
        self.write_entity_attributes(&circle.common, "CIRCLE")?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbCircle")?;
        }
        self.write_elevation_thickness(&circle.common)?;
        self.writer.write_point3d(10, circle.center)?;
        self.writer.write_double(40, circle.radius)?;
        if self.version >= DxfVersion::R12 && !is_default_extrusion(circle.extrusion) {
            self.writer.write_point3d(210, circle.extrusion)?;
        }
        Ok(())
    }

    /// Write a 3DFACE entity
    pub fn write_face3d(&mut self, face: &Face3D) -> Result<()> {
        self.writer.write_entity_type("3DFACE")?;
        self.write_entity_header(&face.common)?;
        self.write_entity_attributes(&face.common, "3DFACE")?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbFace")?;
        }
        self.write_elevation_thickness(&face.common)?;
        self.writer.write_point3d(10, face.first_corner)?;
        self.writer.write_point3d(11, face.second_corner)?;
        self.writer.write_point3d(12, face.third_corner)?;
        self.writer.write_point3d(13, face.fourth_corner)?;
        if !face.invisible_edges.is_empty() {
            self.writer.write_i16(70, face.invisible_edges.bits())?;
        }
        Ok(())
    }

    /// Write an XLINE entity
    pub fn write_xline(&mut self, xline: &XLine) -> Result<()> {
        self.writer.write_entity_type("XLINE")?;
        self.write_entity_header(&xline.common)?;
        self.write_entity_attributes(&xline.common, "XLINE")?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbXline")?;
        }
        self.write_elevation_thickness(&xline.common)?;
        self.writer.write_point3d(10, xline.base_point)?;
        self.writer.write_point3d(11, xline.direction)?;
        Ok(())
    }

    /// Write a BODY entity
    pub fn write_body(&mut self, body: &Body) -> Result<()> {
        self.write_modeler_geometry(
            "BODY",
            &body.common,
            body.modeler_format_version,
            &body.proprietary_data,
        )
    }

    /// Write a REGION entity
    pub fn write_region(&mut self, region: &Region) -> Result<()> {
        self.write_modeler_geometry(
            "REGION",
            &region.common,
            region.modeler_format_version,
            &region.proprietary_data,
        )
    }

    /// Shared encoder for the ACIS-backed entities.
    fn write_modeler_geometry(
        &mut self,
        entity_name: &'static str,
        common: &EntityCommon,
        modeler_format_version: i16,
        proprietary_data: &[ProprietaryData],
    ) -> Result<()> {
        self.writer.write_entity_type(entity_name)?;
        self.write_entity_header(common)?;
        self.write_entity_attributes(common, entity_name)?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbModelerGeometry")?;
            self.writer.write_i16(70, modeler_format_version)?;
        }
        // Preserve the original interleaving of primary and additional lines
        for data in proprietary_data {
            let code = if data.additional { 3 } else { 1 };
            self.writer.write_string(code, &data.line)?;
        }
        Ok(())
    }

    /// Write an IMAGE entity
    pub fn write_image(&mut self, image: &RasterImage) -> Result<()> {
        self.writer.write_entity_type("IMAGE")?;
        self.write_entity_header(&image.common)?;
        self.write_entity_attributes(&image.common, "IMAGE")?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbRasterImage")?;
        }
        self.writer.write_i32(90, image.class_version)?;
        self.writer.write_point3d(10, image.insertion_point)?;
        self.writer.write_point3d(11, image.u_vector)?;
        self.writer.write_point3d(12, image.v_vector)?;
        self.writer.write_point2d(13, image.pixel_size)?;
        if !image.definition_ref.is_empty() {
            self.writer.write_string(340, &image.definition_ref)?;
        }
        self.writer.write_i16(70, image.display_flags.bits())?;
        self.writer.write_byte(280, image.clipping_state as u8)?;
        self.writer.write_byte(281, image.brightness)?;
        self.writer.write_byte(282, image.contrast)?;
        self.writer.write_byte(283, image.fade)?;
        if !image.definition_reactor_ref.is_empty() {
            self.writer.write_string(360, &image.definition_reactor_ref)?;
        }
        self.writer.write_i16(71, image.clip_type as i16)?;
        self.writer.write_i32(91, image.clip_vertices.len() as i32)?;
        for vertex in &image.clip_vertices {
            self.writer.write_point2d(14, *vertex)?;
        }
        Ok(())
    }

    // ===== Object encoders =====

    /// Write a DICTIONARY object
    pub fn write_dictionary(&mut self, dictionary: &Dictionary) -> Result<()> {
        self.writer.write_entity_type("DICTIONARY")?;
        self.write_object_header(&dictionary.common)?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbDictionary")?;
        }
        for entry in &dictionary.entries {
            if entry.name.is_empty() {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "empty entry name in DICTIONARY with handle {:#X}, entry skipped",
                        dictionary.common.handle.value()
                    ),
                );
                continue;
            }
            self.writer.write_string(3, &entry.name)?;
            self.writer.write_string(350, &entry.object_handle)?;
        }
        Ok(())
    }

    /// Write a RASTERVARIABLES object
    pub fn write_raster_variables(&mut self, vars: &RasterVariables) -> Result<()> {
        self.writer.write_entity_type("RASTERVARIABLES")?;
        self.write_object_header(&vars.common)?;
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbRasterVariables")?;
        }
        self.writer.write_i32(90, vars.class_version)?;
        self.writer.write_i16(70, vars.display_frame as i16)?;
        self.writer.write_i16(71, vars.high_quality as i16)?;
        self.writer.write_i16(72, vars.units)?;
        Ok(())
    }

    // ===== Table entry encoders =====

    /// Write an APPID table entry
    pub fn write_appid(&mut self, appid: &AppId) -> Result<()> {
        if appid.application_name.is_empty() {
            return Err(DxfError::MissingField {
                entity: "APPID",
                handle: appid.handle.value(),
                field: "application name",
            });
        }

        self.writer.write_entity_type("APPID")?;
        if appid.handle.is_valid() {
            self.writer.write_handle(5, appid.handle)?;
        }
        if self.version.has_owner_dictionary_groups() {
            if !appid.owner_soft.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_REACTORS", 330, &appid.owner_soft)?;
            }
            if !appid.owner_hard.is_empty() {
                self.writer
                    .write_owner_group("{ACAD_XDICTIONARY", 360, &appid.owner_hard)?;
            }
        }
        if self.version.has_subclass_markers() {
            self.writer.write_subclass("AcDbSymbolTableRecord")?;
            self.writer.write_subclass("AcDbRegAppTableRecord")?;
        }
        self.writer.write_string(2, &appid.application_name)?;
        self.writer.write_i16(70, appid.flags.bits())?;
        Ok(())
    }
}
