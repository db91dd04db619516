//! Per-kind record decoders
//!
//! Each decoder consumes tags from the stream until the next code-0 tag
//! (which is pushed back for the caller) and copies recognized values into
//! the record's fields. The policy is deliberately lenient: unknown group
//! codes and mismatched subclass markers produce notifications and parsing
//! continues, favoring forward/backward format compatibility over strict
//! validation.

use super::stream_reader::{DxfCodePair, DxfStreamReader, PointReader};
use crate::entities::{
    Body, Circle, EntityCommon, EntityType, Face3D, ImageDisplayFlags, InvisibleEdgeFlags,
    RasterImage, Region, XLine,
};
use crate::entities::acis::MODELER_FORMAT_VERSION;
use crate::error::Result;
use crate::graphics_data::BinaryGraphicsData;
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::{Dictionary, ObjectCommon, RasterVariables};
use crate::tables::appid::{AppId, AppIdFlags};
use crate::types::{Color, DxfVersion, Vector2};

/// Any record this library can decode.
#[derive(Debug, Clone)]
pub enum DxfRecord {
    /// A drawable entity
    Entity(EntityType),
    /// A DICTIONARY object
    Dictionary(Dictionary),
    /// A RASTERVARIABLES object
    RasterVariables(RasterVariables),
    /// An APPID table entry
    AppId(AppId),
}

/// Decodes entity, object and table records from a tag stream.
///
/// The stream is expected to be positioned just after a record's type-name
/// tag when a `read_*` method is called. Non-fatal issues are collected in
/// the notification collection; a hard error (I/O failure, malformed code
/// line) aborts the decode and drops the partially built record.
pub struct EntityReader<'a> {
    reader: &'a mut dyn DxfStreamReader,
    version: DxfVersion,
    notifications: NotificationCollection,
}

impl<'a> EntityReader<'a> {
    /// Create a new record reader over a tag stream
    pub fn new(reader: &'a mut dyn DxfStreamReader, version: DxfVersion) -> Self {
        Self {
            reader,
            version,
            notifications: NotificationCollection::new(),
        }
    }

    /// The declared format version used for gating diagnostics
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

    /// Read the next record from the stream.
    ///
    /// Skips ahead to the next code-0 tag, dispatches on the type name and
    /// decodes the record. Returns `Ok(None)` at end of stream or on an
    /// `ENDSEC`/`ENDTAB`/`EOF` marker. Unrecognized type names are skipped
    /// with a `NotImplemented` notification.
    pub fn next_record(&mut self) -> Result<Option<DxfRecord>> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code != 0 {
                continue;
            }
            match pair.value_string.as_str() {
                "ENDSEC" | "ENDTAB" | "EOF" => return Ok(None),
                name => {
                    if let Some(record) = self.read_record(name)? {
                        return Ok(Some(record));
                    }
                    // Unknown type: skipped, keep scanning
                }
            }
        }
        Ok(None)
    }

    /// Decode one record of the named kind from the current position.
    ///
    /// Returns `Ok(None)` for a type name this library does not handle,
    /// after skipping its tags.
    pub fn read_record(&mut self, type_name: &str) -> Result<Option<DxfRecord>> {
        let record = match type_name {
            "3DFACE" => DxfRecord::Entity(EntityType::Face3D(self.read_face3d()?)),
            "BODY" => DxfRecord::Entity(EntityType::Body(self.read_body()?)),
            "CIRCLE" => DxfRecord::Entity(EntityType::Circle(self.read_circle()?)),
            "IMAGE" => DxfRecord::Entity(EntityType::Image(self.read_image()?)),
            "REGION" => DxfRecord::Entity(EntityType::Region(self.read_region()?)),
            "XLINE" => DxfRecord::Entity(EntityType::XLine(self.read_xline()?)),
            "DICTIONARY" => DxfRecord::Dictionary(self.read_dictionary()?),
            "RASTERVARIABLES" => DxfRecord::RasterVariables(self.read_raster_variables()?),
            "APPID" => DxfRecord::AppId(self.read_appid()?),
            other => {
                self.notifications.notify(
                    NotificationType::NotImplemented,
                    format!("record type {} is not handled, skipping", other),
                );
                self.skip_record()?;
                return Ok(None);
            }
        };
        Ok(Some(record))
    }

    /// Consume tags until the next code-0 tag, pushing it back.
    fn skip_record(&mut self) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }
        }
        Ok(())
    }

    // ===== Shared dispatch helpers =====

    /// Handle a group code shared by all drawable entities.
    ///
    /// Returns true if the pair was consumed.
    fn handle_entity_common(&mut self, common: &mut EntityCommon, pair: &DxfCodePair) -> bool {
        match pair.code {
            5 => {
                match pair.as_handle() {
                    Some(handle) => common.handle = handle,
                    None => self.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "unparsable handle '{}' at line {}",
                            pair.value_string,
                            self.reader.line_number()
                        ),
                    ),
                }
                true
            }
            6 => {
                common.linetype = pair.value_string.clone();
                true
            }
            8 => {
                common.layer = pair.value_string.clone();
                true
            }
            38 => {
                if let Some(v) = pair.as_double() {
                    common.elevation = v;
                }
                true
            }
            39 => {
                if let Some(v) = pair.as_double() {
                    common.thickness = v;
                }
                true
            }
            48 => {
                if let Some(v) = pair.as_double() {
                    common.linetype_scale = v;
                }
                true
            }
            60 => {
                common.invisible = pair.as_bool().unwrap_or(false);
                true
            }
            62 => {
                if let Some(v) = pair.as_i16() {
                    common.color = Color::from_index(v);
                }
                true
            }
            67 => {
                common.paper_space = pair.as_bool().unwrap_or(false);
                true
            }
            92 => {
                let graphics = common.graphics.get_or_insert_with(BinaryGraphicsData::new);
                graphics.size = pair.as_i32().unwrap_or(0);
                true
            }
            310 => {
                let graphics = common.graphics.get_or_insert_with(BinaryGraphicsData::new);
                if graphics.push_line(pair.value_string.clone()).is_err() {
                    self.notifications.notify(
                        NotificationType::Warning,
                        format!(
                            "empty graphics data chunk at line {}",
                            self.reader.line_number()
                        ),
                    );
                }
                true
            }
            330 => {
                common.owner_soft = pair.value_string.clone();
                true
            }
            360 => {
                common.owner_hard = pair.value_string.clone();
                true
            }
            _ => false,
        }
    }

    /// Handle a group code shared by non-graphical objects.
    fn handle_object_common(&mut self, common: &mut ObjectCommon, pair: &DxfCodePair) -> bool {
        match pair.code {
            5 => {
                match pair.as_handle() {
                    Some(handle) => common.handle = handle,
                    None => self.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "unparsable handle '{}' at line {}",
                            pair.value_string,
                            self.reader.line_number()
                        ),
                    ),
                }
                true
            }
            330 => {
                common.owner_soft = pair.value_string.clone();
                true
            }
            360 => {
                common.owner_hard = pair.value_string.clone();
                true
            }
            _ => false,
        }
    }

    /// Validate a subclass marker against the expected set for the record.
    fn check_subclass(&mut self, pair: &DxfCodePair, expected: &[&str]) {
        if self.version < DxfVersion::R13 {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "subclass marker '{}' in a pre-R13 stream at line {}",
                    pair.value_string,
                    self.reader.line_number()
                ),
            );
        }
        if !expected.contains(&pair.value_string.as_str()) {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "bad subclass marker '{}' at line {}, expected one of {:?}",
                    pair.value_string,
                    self.reader.line_number(),
                    expected
                ),
            );
        }
    }

    /// Record a group-999 comment line.
    fn record_comment(&mut self, pair: &DxfCodePair) {
        self.notifications.notify(
            NotificationType::Comment,
            format!("DXF comment: {}", pair.value_string),
        );
    }

    /// Record an unrecognized group code.
    fn warn_unknown(&mut self, pair: &DxfCodePair) {
        self.notifications.notify(
            NotificationType::Warning,
            format!(
                "unknown group code {} at line {}, skipped",
                pair.code,
                self.reader.line_number()
            ),
        );
    }

    // ===== Entity decoders =====

    /// Read a CIRCLE entity
    pub fn read_circle(&mut self) -> Result<Circle> {
        let mut circle = Circle::new();
        let mut center = PointReader::new();
        let mut extrusion = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                10 | 20 | 30 => {
                    center.add_coordinate(&pair);
                }
                40 => {
                    if let Some(radius) = pair.as_double() {
                        circle.radius = radius;
                    }
                }
                100 => self.check_subclass(&pair, &["AcDbEntity", "AcDbCircle"]),
                210 | 220 | 230 => {
                    extrusion.add_coordinate(&pair);
                }
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_entity_common(&mut circle.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if let Some(pt) = center.get_point() {
            circle.center = pt;
        }
        if let Some(pt) = extrusion.get_point() {
            circle.extrusion = pt;
        }
        circle.common.normalize();

        Ok(circle)
    }

    /// Read a 3DFACE entity
    pub fn read_face3d(&mut self) -> Result<Face3D> {
        let mut face = Face3D::default();
        let mut corners = [
            PointReader::new(),
            PointReader::new(),
            PointReader::new(),
            PointReader::new(),
        ];

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                10 | 20 | 30 => {
                    corners[0].add_coordinate(&pair);
                }
                11 | 21 | 31 => {
                    corners[1].add_coordinate(&pair);
                }
                12 | 22 | 32 => {
                    corners[2].add_coordinate(&pair);
                }
                13 | 23 | 33 => {
                    corners[3].add_coordinate(&pair);
                }
                70 => {
                    if let Some(flags) = pair.as_i16() {
                        face.invisible_edges = InvisibleEdgeFlags::from_bits_truncate(flags);
                    }
                }
                100 => self.check_subclass(&pair, &["AcDbEntity", "AcDbFace"]),
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_entity_common(&mut face.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if let Some(pt) = corners[0].get_point() {
            face.first_corner = pt;
        }
        if let Some(pt) = corners[1].get_point() {
            face.second_corner = pt;
        }
        if let Some(pt) = corners[2].get_point() {
            face.third_corner = pt;
        }
        if let Some(pt) = corners[3].get_point() {
            face.fourth_corner = pt;
        }
        face.common.normalize();

        Ok(face)
    }

    /// Read an XLINE entity
    pub fn read_xline(&mut self) -> Result<XLine> {
        let mut xline = XLine::new();
        let mut base = PointReader::new();
        let mut direction = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                10 | 20 | 30 => {
                    base.add_coordinate(&pair);
                }
                11 | 21 | 31 => {
                    direction.add_coordinate(&pair);
                }
                100 => self.check_subclass(&pair, &["AcDbEntity", "AcDbXline"]),
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_entity_common(&mut xline.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if let Some(pt) = base.get_point() {
            xline.base_point = pt;
        }
        if let Some(pt) = direction.get_point() {
            xline.direction = pt;
        }
        xline.common.normalize();

        Ok(xline)
    }

    /// Read a BODY entity
    pub fn read_body(&mut self) -> Result<Body> {
        let mut body = Body::new();
        self.read_modeler_geometry(
            &mut body.common,
            &mut body.modeler_format_version,
            &mut body.proprietary_data,
            "BODY",
        )?;
        Ok(body)
    }

    /// Read a REGION entity
    pub fn read_region(&mut self) -> Result<Region> {
        let mut region = Region::new();
        self.read_modeler_geometry(
            &mut region.common,
            &mut region.modeler_format_version,
            &mut region.proprietary_data,
            "REGION",
        )?;
        Ok(region)
    }

    /// Shared decode loop for the ACIS-backed entities.
    ///
    /// BODY and REGION are wire-identical apart from the type name; both
    /// interleave primary (group 1) and additional (group 3) proprietary
    /// data lines whose original order must be preserved.
    fn read_modeler_geometry(
        &mut self,
        common: &mut EntityCommon,
        modeler_format_version: &mut i16,
        proprietary_data: &mut Vec<crate::entities::ProprietaryData>,
        entity_name: &str,
    ) -> Result<()> {
        use crate::entities::ProprietaryData;

        let mut order: i32 = 0;

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                1 => {
                    proprietary_data.push(ProprietaryData::primary(order, pair.value_string.clone()));
                    order += 1;
                }
                3 => {
                    proprietary_data
                        .push(ProprietaryData::additional(order, pair.value_string.clone()));
                    order += 1;
                }
                70 => {
                    if let Some(v) = pair.as_i16() {
                        *modeler_format_version = v;
                    }
                }
                100 => self.check_subclass(&pair, &["AcDbEntity", "AcDbModelerGeometry"]),
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_entity_common(common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if *modeler_format_version != MODELER_FORMAT_VERSION {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "invalid modeler format version {} on {} entity, forced to {}",
                    modeler_format_version, entity_name, MODELER_FORMAT_VERSION
                ),
            );
            *modeler_format_version = MODELER_FORMAT_VERSION;
        }
        common.normalize();

        Ok(())
    }

    /// Read an IMAGE entity
    pub fn read_image(&mut self) -> Result<RasterImage> {
        let mut image = RasterImage::new();
        let mut insertion = PointReader::new();
        let mut u_vector = PointReader::new();
        let mut v_vector = PointReader::new();
        let mut pixel_size = PointReader::new();
        let mut declared_vertex_count: Option<i32> = None;
        let mut clip_x: Option<f64> = None;
        let mut clip_vertices: Vec<Vector2> = Vec::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                10 | 20 | 30 => {
                    insertion.add_coordinate(&pair);
                }
                11 | 21 | 31 => {
                    u_vector.add_coordinate(&pair);
                }
                12 | 22 | 32 => {
                    v_vector.add_coordinate(&pair);
                }
                13 | 23 => {
                    pixel_size.add_coordinate(&pair);
                }
                // Clip boundary vertices arrive as repeated 14/24 pairs
                14 => {
                    clip_x = pair.as_double();
                }
                24 => {
                    if let (Some(x), Some(y)) = (clip_x.take(), pair.as_double()) {
                        clip_vertices.push(Vector2::new(x, y));
                    }
                }
                70 => {
                    if let Some(flags) = pair.as_i16() {
                        image.display_flags = ImageDisplayFlags::from_bits_truncate(flags);
                    }
                }
                71 => {
                    if let Some(v) = pair.as_i16() {
                        image.clip_type = v.into();
                    }
                }
                90 => {
                    if let Some(v) = pair.as_i32() {
                        image.class_version = v;
                    }
                }
                91 => {
                    declared_vertex_count = pair.as_i32();
                }
                100 => self.check_subclass(&pair, &["AcDbEntity", "AcDbRasterImage"]),
                280 => {
                    image.clipping_state = pair.as_bool().unwrap_or(false);
                }
                281 => {
                    if let Some(v) = pair.as_int() {
                        image.brightness = v.clamp(0, 100) as u8;
                    }
                }
                282 => {
                    if let Some(v) = pair.as_int() {
                        image.contrast = v.clamp(0, 100) as u8;
                    }
                }
                283 => {
                    if let Some(v) = pair.as_int() {
                        image.fade = v.clamp(0, 100) as u8;
                    }
                }
                340 => {
                    image.definition_ref = pair.value_string.clone();
                }
                // 360 references the IMAGEDEF_REACTOR here, not an owner
                360 => {
                    image.definition_reactor_ref = pair.value_string.clone();
                }
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_entity_common(&mut image.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if let Some(pt) = insertion.get_point() {
            image.insertion_point = pt;
        }
        if let Some(pt) = u_vector.get_point() {
            image.u_vector = pt;
        }
        if let Some(pt) = v_vector.get_point() {
            image.v_vector = pt;
        }
        if let Some(pt) = pixel_size.get_point() {
            image.pixel_size = Vector2::new(pt.x, pt.y);
        }
        if let Some(declared) = declared_vertex_count {
            if declared as usize != clip_vertices.len() {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "clip boundary declared {} vertices but carried {}",
                        declared,
                        clip_vertices.len()
                    ),
                );
            }
        }
        image.clip_vertices = clip_vertices;
        image.common.normalize();

        Ok(image)
    }

    // ===== Object decoders =====

    /// Read a DICTIONARY object
    pub fn read_dictionary(&mut self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        let mut pending_name: Option<String> = None;

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                3 => {
                    // A name without a following 350 tag is dropped below
                    pending_name = Some(pair.value_string.clone());
                }
                350 => {
                    if let Some(name) = pending_name.take() {
                        dictionary.add_entry(name, pair.value_string.clone());
                    } else {
                        self.notifications.notify(
                            NotificationType::Warning,
                            format!(
                                "dictionary entry handle without a name at line {}",
                                self.reader.line_number()
                            ),
                        );
                    }
                }
                100 => self.check_subclass(&pair, &["AcDbDictionary"]),
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_object_common(&mut dictionary.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        if let Some(name) = pending_name {
            self.notifications.notify(
                NotificationType::Warning,
                format!("dictionary entry '{}' has no object handle, dropped", name),
            );
        }

        Ok(dictionary)
    }

    /// Read a RASTERVARIABLES object
    pub fn read_raster_variables(&mut self) -> Result<RasterVariables> {
        let mut vars = RasterVariables::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                70 => {
                    vars.display_frame = pair.as_bool().unwrap_or(false);
                }
                71 => {
                    vars.high_quality = pair.as_bool().unwrap_or(false);
                }
                72 => {
                    if let Some(v) = pair.as_i16() {
                        vars.units = v;
                    }
                }
                90 => {
                    if let Some(v) = pair.as_i32() {
                        vars.class_version = v;
                    }
                }
                100 => self.check_subclass(&pair, &["AcDbRasterVariables"]),
                999 => self.record_comment(&pair),
                _ => {
                    if !self.handle_object_common(&mut vars.common, &pair) {
                        self.warn_unknown(&pair);
                    }
                }
            }
        }

        Ok(vars)
    }

    // ===== Table entry decoders =====

    /// Read an APPID table entry
    pub fn read_appid(&mut self) -> Result<AppId> {
        let mut appid = AppId::new("");

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                2 => {
                    appid.application_name = pair.value_string.clone();
                }
                5 => match pair.as_handle() {
                    Some(handle) => appid.handle = handle,
                    None => self.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "unparsable handle '{}' at line {}",
                            pair.value_string,
                            self.reader.line_number()
                        ),
                    ),
                },
                70 => {
                    if let Some(v) = pair.as_i16() {
                        appid.flags = AppIdFlags::from_bits_truncate(v);
                    }
                }
                100 => {
                    self.check_subclass(&pair, &["AcDbSymbolTableRecord", "AcDbRegAppTableRecord"])
                }
                330 => {
                    appid.owner_soft = pair.value_string.clone();
                }
                360 => {
                    appid.owner_hard = pair.value_string.clone();
                }
                999 => self.record_comment(&pair),
                _ => self.warn_unknown(&pair),
            }
        }

        Ok(appid)
    }
}
