//! The image record:
//! a DICOM instance read from or destined to a Part-10 file,
//! with the attributes most consumers look for
//! projected out of its data set.
use crate::error::{
    InvalidUidSnafu, MissingAttributeSnafu, Result, UnsupportedTransferSyntaxSnafu, WriteFileSnafu,
    WriteMetaSnafu,
};
use crate::meta::{FileMetaTable, FileMetaTableBuilder};
use crate::pixeldata::PixelDataDescriptor;
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use byteordered::ByteOrdered;
use chrono::{NaiveDate, NaiveTime};
use p10_core::uid::{validate_uid, UidGenerator};
use p10_core::value::{InMemFragment, PixelFragmentSequence};
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, Value, VR};
use p10_dictionary::{tags, uids};
use p10_encoding::transfer_syntax::{TransferSyntax, EXPLICIT_VR_LITTLE_ENDIAN};
use p10_parser::{Conformance, Warning, WarningKind};
use snafu::{ensure, OptionExt, ResultExt};
use std::path::Path;
use tracing::warn;

/// A DICOM image instance.
///
/// An image record is obtained by reading a file
/// (see [`read`](crate::read) and [`open_file`](crate::open_file))
/// or authored through an [`ImageRecordBuilder`].
/// It is immutable once built.
/// The full data set and file meta table are kept,
/// so that writing it back reproduces every attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    meta: FileMetaTable,
    data_set: DataSet,
    transfer_syntax: &'static TransferSyntax,

    study_instance_uid: String,
    series_instance_uid: String,
    sop_instance_uid: String,
    sop_class_uid: String,

    modality: Option<String>,
    patient_name: Option<String>,
    patient_id: Option<String>,
    patient_birth_date: Option<NaiveDate>,
    study_date: Option<NaiveDate>,
    study_time: Option<NaiveTime>,
    accession_number: Option<String>,
    study_description: Option<String>,
    series_description: Option<String>,
    series_number: Option<i32>,
    instance_number: Option<i32>,

    pixel_data: Option<PixelDataDescriptor>,
    warnings: Vec<Warning>,
}

fn text_of(ds: &DataSet, tag: Tag) -> Option<String> {
    ds.element_opt(tag)
        .and_then(|e| e.value().primitive())
        .map(|v| v.to_str().trim_end_matches(['\0', ' ']).to_string())
        .filter(|s| !s.is_empty())
}

/// Collects the warnings of the projection,
/// or turns them into errors under strict conformance.
struct Projection {
    conformance: Conformance,
    warnings: Vec<Warning>,
}

impl Projection {
    fn warn(&mut self, kind: WarningKind, tag: Tag) {
        warn!("{} at {}", kind, tag);
        self.warnings.push(Warning::detached(kind, Some(tag)));
    }

    /// An identifying UID, required to be present.
    fn uid(&mut self, ds: &DataSet, tag: Tag) -> Result<String> {
        let uid = text_of(ds, tag).context(MissingAttributeSnafu { tag })?;
        self.check_uid(tag, uid)
    }

    fn check_uid(&mut self, tag: Tag, uid: String) -> Result<String> {
        if let Err(e) = validate_uid(&uid) {
            if self.conformance == Conformance::Strict {
                return Err(e).context(InvalidUidSnafu { tag, uid });
            }
            self.warn(WarningKind::InvalidUid, tag);
        }
        Ok(uid)
    }

    fn date(&mut self, ds: &DataSet, tag: Tag) -> Option<NaiveDate> {
        let value = ds.element_opt(tag)?.value().primitive()?;
        if value.to_str().trim().is_empty() {
            return None;
        }
        match value.to_date() {
            Ok(date) => Some(date),
            Err(_) => {
                self.warn(WarningKind::MalformedValue, tag);
                None
            }
        }
    }

    fn time(&mut self, ds: &DataSet, tag: Tag) -> Option<NaiveTime> {
        let value = ds.element_opt(tag)?.value().primitive()?;
        if value.to_str().trim().is_empty() {
            return None;
        }
        match value.to_time() {
            Ok(time) => Some(time),
            Err(_) => {
                self.warn(WarningKind::MalformedValue, tag);
                None
            }
        }
    }

    fn int(&mut self, ds: &DataSet, tag: Tag) -> Option<i32> {
        let value = ds.element_opt(tag)?.value().primitive()?;
        if value.to_str().trim().is_empty() {
            return None;
        }
        match value.to_int::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.warn(WarningKind::MalformedValue, tag);
                None
            }
        }
    }

    /// Check native pixel data against its attributes.
    fn pixel_data(&mut self, ds: &DataSet) -> Result<Option<PixelDataDescriptor>> {
        let descriptor = match PixelDataDescriptor::from_data_set(ds) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                if ds.contains(tags::PIXEL_DATA) {
                    warn!("Pixel data attributes are not usable: {}", e);
                }
                return Ok(None);
            }
        };

        if let Some(value) = ds
            .element_opt(tags::PIXEL_DATA)
            .and_then(|e| e.value().primitive())
        {
            let len = value.to_bytes().len();
            if self.conformance == Conformance::Strict {
                descriptor.check_native_len(len)?;
            } else if !descriptor.native_len_matches(len) {
                warn!(
                    "Pixel data has {} bytes, but {} bytes are expected",
                    len,
                    descriptor.expected_native_len()
                );
                self.warnings.push(Warning::detached(
                    WarningKind::PixelDataSizeMismatch,
                    Some(tags::PIXEL_DATA),
                ));
            }
        }
        Ok(Some(descriptor))
    }
}

impl ImageRecord {
    /// Project a record out of a file meta table and the data set which follows it.
    ///
    /// `warnings` are those collected while reading,
    /// to which the warnings of the projection are added.
    pub(crate) fn from_parts(
        meta: FileMetaTable,
        data_set: DataSet,
        transfer_syntax: &'static TransferSyntax,
        warnings: Vec<Warning>,
        conformance: Conformance,
    ) -> Result<Self> {
        let mut p = Projection {
            conformance,
            warnings,
        };
        let ds = &data_set;

        let study_instance_uid = p.uid(ds, tags::STUDY_INSTANCE_UID)?;
        let series_instance_uid = p.uid(ds, tags::SERIES_INSTANCE_UID)?;
        let sop_instance_uid = match text_of(ds, tags::SOP_INSTANCE_UID) {
            Some(uid) => p.check_uid(tags::SOP_INSTANCE_UID, uid)?,
            None => p.check_uid(
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                meta.media_storage_sop_instance_uid.clone(),
            )?,
        };
        let sop_class_uid = text_of(ds, tags::SOP_CLASS_UID)
            .unwrap_or_else(|| meta.media_storage_sop_class_uid.clone());

        let patient_birth_date = p.date(ds, tags::PATIENT_BIRTH_DATE);
        let study_date = p.date(ds, tags::STUDY_DATE);
        let study_time = p.time(ds, tags::STUDY_TIME);
        let series_number = p.int(ds, tags::SERIES_NUMBER);
        let instance_number = p.int(ds, tags::INSTANCE_NUMBER);
        let pixel_data = p.pixel_data(ds)?;

        Ok(ImageRecord {
            study_instance_uid,
            series_instance_uid,
            sop_instance_uid,
            sop_class_uid,
            modality: text_of(ds, tags::MODALITY),
            patient_name: text_of(ds, tags::PATIENT_NAME),
            patient_id: text_of(ds, tags::PATIENT_ID),
            patient_birth_date,
            study_date,
            study_time,
            accession_number: text_of(ds, tags::ACCESSION_NUMBER),
            study_description: text_of(ds, tags::STUDY_DESCRIPTION),
            series_description: text_of(ds, tags::SERIES_DESCRIPTION),
            series_number,
            instance_number,
            pixel_data,
            warnings: p.warnings,
            meta,
            transfer_syntax,
            data_set,
        })
    }

    /// The file meta table, as read or built.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// The full data set, without the file meta group.
    pub fn data_set(&self) -> &DataSet {
        &self.data_set
    }

    /// Take the full data set out of the record.
    pub fn into_data_set(self) -> DataSet {
        self.data_set
    }

    /// The transfer syntax of the data set, as declared in the file meta table.
    pub fn transfer_syntax(&self) -> &'static TransferSyntax {
        self.transfer_syntax
    }

    /// Study Instance UID (0020,000D)
    pub fn study_instance_uid(&self) -> &str {
        &self.study_instance_uid
    }

    /// Series Instance UID (0020,000E)
    pub fn series_instance_uid(&self) -> &str {
        &self.series_instance_uid
    }

    /// SOP Instance UID (0008,0018),
    /// or the media storage SOP instance UID of the file meta table
    /// when absent from the data set
    pub fn sop_instance_uid(&self) -> &str {
        &self.sop_instance_uid
    }

    /// SOP Class UID (0008,0016),
    /// or the media storage SOP class UID of the file meta table
    /// when absent from the data set
    pub fn sop_class_uid(&self) -> &str {
        &self.sop_class_uid
    }

    /// Modality (0008,0060)
    pub fn modality(&self) -> Option<&str> {
        self.modality.as_deref()
    }

    /// Patient's Name (0010,0010)
    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    /// Patient ID (0010,0020)
    pub fn patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    /// Patient's Birth Date (0010,0030)
    pub fn patient_birth_date(&self) -> Option<NaiveDate> {
        self.patient_birth_date
    }

    /// Study Date (0008,0020)
    pub fn study_date(&self) -> Option<NaiveDate> {
        self.study_date
    }

    /// Study Time (0008,0030)
    pub fn study_time(&self) -> Option<NaiveTime> {
        self.study_time
    }

    /// Accession Number (0008,0050)
    pub fn accession_number(&self) -> Option<&str> {
        self.accession_number.as_deref()
    }

    /// Study Description (0008,1030)
    pub fn study_description(&self) -> Option<&str> {
        self.study_description.as_deref()
    }

    /// Series Description (0008,103E)
    pub fn series_description(&self) -> Option<&str> {
        self.series_description.as_deref()
    }

    /// Series Number (0020,0011)
    pub fn series_number(&self) -> Option<i32> {
        self.series_number
    }

    /// Instance Number (0020,0013)
    pub fn instance_number(&self) -> Option<i32> {
        self.instance_number
    }

    /// The pixel data attributes,
    /// if the Image Pixel module is present.
    pub fn pixel_data(&self) -> Option<&PixelDataDescriptor> {
        self.pixel_data.as_ref()
    }

    /// The warnings collected while reading the record.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Encode the record in the given transfer syntax
    /// and write it to a new file.
    pub fn write_to_file<P>(&self, path: P, ts: &TransferSyntax) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = crate::write(self, ts)?;
        std::fs::write(path, bytes).context(WriteFileSnafu { filename: path })
    }
}

/// Pixel data to put in a new record.
#[derive(Debug, Clone, PartialEq)]
enum PixelPayload {
    Native(Vec<u8>),
    Encapsulated {
        offset_table: Vec<u32>,
        fragments: Vec<InMemFragment>,
    },
}

/// A builder of new image records.
///
/// Identifying UIDs which are not given are generated,
/// and the SOP class is derived from the modality when not given.
///
/// # Example
///
/// ```
/// # use p10_object::{ImageRecordBuilder, PixelDataDescriptor};
/// let record = ImageRecordBuilder::new()
///     .modality("CT")
///     .patient_name("Doe^Jane")
///     .native_pixel_data(PixelDataDescriptor::new(2, 2, 8), vec![0, 64, 128, 255])
///     .build()?;
/// assert_eq!(record.sop_class_uid(), "1.2.840.10008.5.1.4.1.1.2");
/// assert!(record.study_instance_uid().starts_with("2.25."));
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageRecordBuilder {
    uid_generator: UidGenerator,
    transfer_syntax: &'static TransferSyntax,

    study_instance_uid: Option<String>,
    series_instance_uid: Option<String>,
    sop_instance_uid: Option<String>,
    sop_class_uid: Option<String>,

    modality: Option<String>,
    patient_name: Option<String>,
    patient_id: Option<String>,
    patient_birth_date: Option<NaiveDate>,
    study_date: Option<NaiveDate>,
    study_time: Option<NaiveTime>,
    accession_number: Option<String>,
    study_description: Option<String>,
    series_description: Option<String>,
    series_number: Option<i32>,
    instance_number: Option<i32>,

    pixel_data: Option<(PixelDataDescriptor, PixelPayload)>,
    elements: Vec<DataElement>,
}

impl Default for ImageRecordBuilder {
    fn default() -> Self {
        ImageRecordBuilder {
            uid_generator: UidGenerator::default(),
            transfer_syntax: &EXPLICIT_VR_LITTLE_ENDIAN,
            study_instance_uid: None,
            series_instance_uid: None,
            sop_instance_uid: None,
            sop_class_uid: None,
            modality: None,
            patient_name: None,
            patient_id: None,
            patient_birth_date: None,
            study_date: None,
            study_time: None,
            accession_number: None,
            study_description: None,
            series_description: None,
            series_number: None,
            instance_number: None,
            pixel_data: None,
            elements: Vec::new(),
        }
    }
}

macro_rules! text_setter {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub fn $name<T>(mut self, value: T) -> Self
        where
            T: Into<String>,
        {
            self.$name = Some(value.into());
            self
        }
    };
}

impl ImageRecordBuilder {
    /// Create a builder with no attributes,
    /// generating UIDs under the `2.25` root,
    /// for the Explicit VR Little Endian transfer syntax.
    pub fn new() -> Self {
        ImageRecordBuilder::default()
    }

    /// Generate missing UIDs with the given generator.
    pub fn uid_generator(mut self, generator: UidGenerator) -> Self {
        self.uid_generator = generator;
        self
    }

    /// Declare the transfer syntax of the record in its file meta table.
    pub fn transfer_syntax(mut self, ts: &'static TransferSyntax) -> Self {
        self.transfer_syntax = ts;
        self
    }

    text_setter!(
        /// Define the Study Instance UID.
        study_instance_uid
    );
    text_setter!(
        /// Define the Series Instance UID.
        series_instance_uid
    );
    text_setter!(
        /// Define the SOP Instance UID.
        sop_instance_uid
    );
    text_setter!(
        /// Define the SOP Class UID,
        /// instead of deriving it from the modality.
        sop_class_uid
    );
    text_setter!(
        /// Define the Modality.
        modality
    );
    text_setter!(
        /// Define the Patient's Name.
        patient_name
    );
    text_setter!(
        /// Define the Patient ID.
        patient_id
    );
    text_setter!(
        /// Define the Accession Number.
        accession_number
    );
    text_setter!(
        /// Define the Study Description.
        study_description
    );
    text_setter!(
        /// Define the Series Description.
        series_description
    );

    /// Define the Patient's Birth Date.
    pub fn patient_birth_date(mut self, date: NaiveDate) -> Self {
        self.patient_birth_date = Some(date);
        self
    }

    /// Define the Study Date.
    pub fn study_date(mut self, date: NaiveDate) -> Self {
        self.study_date = Some(date);
        self
    }

    /// Define the Study Time.
    pub fn study_time(mut self, time: NaiveTime) -> Self {
        self.study_time = Some(time);
        self
    }

    /// Define the Series Number.
    pub fn series_number(mut self, number: i32) -> Self {
        self.series_number = Some(number);
        self
    }

    /// Define the Instance Number.
    pub fn instance_number(mut self, number: i32) -> Self {
        self.instance_number = Some(number);
        self
    }

    /// Define native pixel data.
    /// Samples wider than 8 bits are expected in little endian byte order.
    pub fn native_pixel_data(mut self, descriptor: PixelDataDescriptor, data: Vec<u8>) -> Self {
        self.pixel_data = Some((descriptor, PixelPayload::Native(data)));
        self
    }

    /// Define encapsulated pixel data.
    /// The transfer syntax must be set to one with the codec of the fragments.
    pub fn encapsulated_pixel_data(
        mut self,
        descriptor: PixelDataDescriptor,
        offset_table: Vec<u32>,
        fragments: Vec<InMemFragment>,
    ) -> Self {
        self.pixel_data = Some((
            descriptor,
            PixelPayload::Encapsulated {
                offset_table,
                fragments,
            },
        ));
        self
    }

    /// Add any other attribute to the data set.
    ///
    /// Attributes set through the other methods of the builder take precedence.
    pub fn element(mut self, element: DataElement) -> Self {
        self.elements.push(element);
        self
    }

    fn uid_or_new(&self, tag: Tag, uid: Option<String>) -> Result<String> {
        match uid {
            Some(uid) => {
                validate_uid(&uid)
                    .context(InvalidUidSnafu { tag, uid: uid.as_str() })?;
                Ok(uid)
            }
            None => Ok(self.uid_generator.generate()),
        }
    }

    /// Build the record.
    ///
    /// Fails if a given UID is not valid,
    /// if native pixel data does not have the size
    /// implied by its descriptor,
    /// or if the transfer syntax does not fit the pixel data.
    pub fn build(self) -> Result<ImageRecord> {
        let ts = self.transfer_syntax;
        ensure!(
            ts.is_supported(),
            UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
        );

        let study_instance_uid =
            self.uid_or_new(tags::STUDY_INSTANCE_UID, self.study_instance_uid.clone())?;
        let series_instance_uid =
            self.uid_or_new(tags::SERIES_INSTANCE_UID, self.series_instance_uid.clone())?;
        let sop_instance_uid =
            self.uid_or_new(tags::SOP_INSTANCE_UID, self.sop_instance_uid.clone())?;
        let sop_class_uid = match self.sop_class_uid {
            Some(uid) => {
                validate_uid(&uid).context(InvalidUidSnafu {
                    tag: tags::SOP_CLASS_UID,
                    uid: uid.as_str(),
                })?;
                uid
            }
            None => uids::sop_class_for_modality(self.modality.as_deref().unwrap_or("OT"))
                .to_string(),
        };

        let mut ds = DataSet::from_element_iter(self.elements);
        let ui = |tag: Tag, uid: &str| DataElement::new(tag, VR::UI, PrimitiveValue::from(uid));
        ds.put(ui(tags::SOP_CLASS_UID, &sop_class_uid));
        ds.put(ui(tags::SOP_INSTANCE_UID, &sop_instance_uid));
        ds.put(ui(tags::STUDY_INSTANCE_UID, &study_instance_uid));
        ds.put(ui(tags::SERIES_INSTANCE_UID, &series_instance_uid));

        let texts = [
            (tags::MODALITY, VR::CS, self.modality),
            (tags::PATIENT_NAME, VR::PN, self.patient_name),
            (tags::PATIENT_ID, VR::LO, self.patient_id),
            (tags::ACCESSION_NUMBER, VR::SH, self.accession_number),
            (tags::STUDY_DESCRIPTION, VR::LO, self.study_description),
            (tags::SERIES_DESCRIPTION, VR::LO, self.series_description),
            (
                tags::PATIENT_BIRTH_DATE,
                VR::DA,
                self.patient_birth_date.map(|d| d.format("%Y%m%d").to_string()),
            ),
            (
                tags::STUDY_DATE,
                VR::DA,
                self.study_date.map(|d| d.format("%Y%m%d").to_string()),
            ),
            (
                tags::STUDY_TIME,
                VR::TM,
                self.study_time.map(|t| t.format("%H%M%S").to_string()),
            ),
            (
                tags::SERIES_NUMBER,
                VR::IS,
                self.series_number.map(|n| n.to_string()),
            ),
            (
                tags::INSTANCE_NUMBER,
                VR::IS,
                self.instance_number.map(|n| n.to_string()),
            ),
        ];
        let needs_unicode = texts
            .iter()
            .any(|(_, _, value)| value.as_deref().map_or(false, |v| !v.is_ascii()));
        if needs_unicode && !ds.contains(tags::SPECIFIC_CHARACTER_SET) {
            ds.put_str(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192");
        }
        for (tag, vr, value) in texts {
            if let Some(value) = value {
                ds.put_str(tag, vr, value);
            }
        }

        if let Some((descriptor, payload)) = self.pixel_data {
            descriptor.fill_data_set(&mut ds);
            let element = match payload {
                PixelPayload::Native(data) => {
                    ensure!(
                        !ts.codec().is_encapsulated(),
                        UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
                    );
                    descriptor.check_native_len(data.len())?;
                    native_pixel_element(&descriptor, data)
                }
                PixelPayload::Encapsulated {
                    offset_table,
                    fragments,
                } => {
                    ensure!(
                        ts.codec().is_encapsulated(),
                        UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
                    );
                    DataElement::new(
                        tags::PIXEL_DATA,
                        VR::OB,
                        Value::PixelSequence(PixelFragmentSequence::new(offset_table, fragments)),
                    )
                }
            };
            ds.put(element);
        }

        let meta = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(sop_class_uid.as_str())
            .media_storage_sop_instance_uid(sop_instance_uid.as_str())
            .transfer_syntax(ts.uid())
            .implementation_class_uid(IMPLEMENTATION_CLASS_UID)
            .implementation_version_name(IMPLEMENTATION_VERSION_NAME)
            .build()
            .context(WriteMetaSnafu)?;

        ImageRecord::from_parts(meta, ds, ts, Vec::new(), Conformance::Strict)
    }
}

/// Native pixel data as OW when samples are wider than 8 bits,
/// OB otherwise.
fn native_pixel_element(descriptor: &PixelDataDescriptor, data: Vec<u8>) -> DataElement {
    if descriptor.bits_allocated <= 8 || data.len() % 2 != 0 {
        return DataElement::new(tags::PIXEL_DATA, VR::OB, PrimitiveValue::from(data));
    }
    let mut reader = ByteOrdered::le(&data[..]);
    let mut words = Vec::with_capacity(data.len() / 2);
    while let Ok(word) = reader.read_u16() {
        words.push(word);
    }
    DataElement::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::from(words))
}

#[cfg(test)]
mod tests {
    use super::{ImageRecord, ImageRecordBuilder};
    use crate::error::ErrorKind;
    use crate::meta::FileMetaTableBuilder;
    use crate::pixeldata::PixelDataDescriptor;
    use chrono::{NaiveDate, NaiveTime};
    use p10_core::uid::UidGenerator;
    use p10_core::{DataElement, DataSet, PrimitiveValue, VR};
    use p10_dictionary::{tags, uids};
    use p10_encoding::transfer_syntax::{EXPLICIT_VR_LITTLE_ENDIAN, JPEG_BASELINE};
    use p10_parser::{Conformance, WarningKind};

    fn meta() -> crate::meta::FileMetaTable {
        FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::CT_IMAGE_STORAGE)
            .media_storage_sop_instance_uid("1.2.3.4.5")
            .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN.uid())
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .build()
            .unwrap()
    }

    fn data_set() -> DataSet {
        let mut ds = DataSet::new();
        ds.put_str(tags::STUDY_DATE, VR::DA, "20240229");
        ds.put_str(tags::STUDY_TIME, VR::TM, "101530.25");
        ds.put_str(tags::MODALITY, VR::CS, "CT");
        ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        ds.put_str(tags::PATIENT_BIRTH_DATE, VR::DA, "1970");
        ds.put_str(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3.4");
        ds.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4.1");
        ds.put_str(tags::SERIES_NUMBER, VR::IS, " 3");
        ds
    }

    #[test]
    fn project_attributes() {
        let record = ImageRecord::from_parts(
            meta(),
            data_set(),
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Lenient,
        )
        .unwrap();

        assert_eq!(record.study_instance_uid(), "1.2.3.4");
        assert_eq!(record.series_instance_uid(), "1.2.3.4.1");
        // taken from the file meta table
        assert_eq!(record.sop_instance_uid(), "1.2.3.4.5");
        assert_eq!(record.sop_class_uid(), uids::CT_IMAGE_STORAGE);
        assert_eq!(record.modality(), Some("CT"));
        assert_eq!(record.patient_name(), Some("Doe^John"));
        assert_eq!(record.patient_id(), None);
        assert_eq!(record.study_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(
            record.study_time(),
            NaiveTime::from_hms_micro_opt(10, 15, 30, 250_000)
        );
        assert_eq!(record.series_number(), Some(3));
        assert_eq!(record.pixel_data(), None);

        // the birth date is not a full date
        assert_eq!(record.patient_birth_date(), None);
        assert_eq!(record.warnings().len(), 1);
        assert_eq!(record.warnings()[0].kind, WarningKind::MalformedValue);
        assert_eq!(record.warnings()[0].tag, Some(tags::PATIENT_BIRTH_DATE));
    }

    #[test]
    fn missing_study_uid() {
        let mut ds = data_set();
        ds.remove(tags::STUDY_INSTANCE_UID);
        let err = ImageRecord::from_parts(
            meta(),
            ds,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Lenient,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
    }

    #[test]
    fn invalid_uid_per_conformance() {
        let mut ds = data_set();
        ds.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2..3");

        let record = ImageRecord::from_parts(
            meta(),
            ds.clone(),
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Lenient,
        )
        .unwrap();
        assert_eq!(record.series_instance_uid(), "1.2..3");
        assert!(record
            .warnings()
            .iter()
            .any(|w| w.kind == WarningKind::InvalidUid
                && w.tag == Some(tags::SERIES_INSTANCE_UID)));

        let err = ImageRecord::from_parts(
            meta(),
            ds,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Strict,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUid);
    }

    #[test]
    fn pixel_size_mismatch_per_conformance() {
        let mut ds = data_set();
        PixelDataDescriptor::new(2, 2, 8).fill_data_set(&mut ds);
        ds.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::from(&[1_u8, 2, 3][..]),
        ));

        let record = ImageRecord::from_parts(
            meta(),
            ds.clone(),
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Lenient,
        )
        .unwrap();
        assert!(record
            .warnings()
            .iter()
            .any(|w| w.kind == WarningKind::PixelDataSizeMismatch));
        assert_eq!(record.pixel_data().map(|p| p.rows), Some(2));

        let err = ImageRecord::from_parts(
            meta(),
            ds,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Vec::new(),
            Conformance::Strict,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PixelDataSizeMismatch);
    }

    #[test]
    fn build_new_record() {
        let generator = UidGenerator::new("1.2.826.0.1.3680043").unwrap();
        let record = ImageRecordBuilder::new()
            .uid_generator(generator)
            .modality("MR")
            .patient_id("P-0001")
            .study_date(NaiveDate::from_ymd_opt(2023, 11, 5).unwrap())
            .instance_number(7)
            .native_pixel_data(PixelDataDescriptor::new(2, 2, 16), vec![0; 8])
            .build()
            .unwrap();

        assert!(record.warnings().is_empty());
        assert_eq!(record.sop_class_uid(), uids::MR_IMAGE_STORAGE);
        assert!(record
            .study_instance_uid()
            .starts_with("1.2.826.0.1.3680043."));
        assert_ne!(record.study_instance_uid(), record.series_instance_uid());
        assert_eq!(record.meta().media_storage_sop_instance_uid, record.sop_instance_uid());
        assert_eq!(record.meta().transfer_syntax, EXPLICIT_VR_LITTLE_ENDIAN.uid());
        assert_eq!(record.study_date(), NaiveDate::from_ymd_opt(2023, 11, 5));
        assert_eq!(record.instance_number(), Some(7));

        let ds = record.data_set();
        assert_eq!(ds.element(tags::PIXEL_DATA).unwrap().vr(), VR::OW);
        assert_eq!(
            ds.element(tags::HIGH_BIT).unwrap().value().primitive().unwrap().to_int::<u16>().unwrap(),
            15
        );
    }

    #[test]
    fn build_rejects_bad_input() {
        let err = ImageRecordBuilder::new()
            .study_instance_uid("1.2.840.10008.1.1.")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUid);

        let err = ImageRecordBuilder::new()
            .native_pixel_data(PixelDataDescriptor::new(512, 512, 16), vec![0; 524_287])
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PixelDataSizeMismatch);

        let err = ImageRecordBuilder::new()
            .transfer_syntax(&JPEG_BASELINE)
            .native_pixel_data(PixelDataDescriptor::new(2, 2, 8), vec![0; 4])
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTransferSyntax);
    }

    #[test]
    fn non_ascii_text_declares_unicode() {
        let record = ImageRecordBuilder::new()
            .patient_name("Иванков^Андрей")
            .build()
            .unwrap();
        assert_eq!(
            record.data_set().element(tags::SPECIFIC_CHARACTER_SET).unwrap().value().to_str().unwrap(),
            "ISO_IR 192"
        );

        let record = ImageRecordBuilder::new()
            .element(DataElement::new(
                tags::SPECIFIC_CHARACTER_SET,
                VR::CS,
                PrimitiveValue::from("ISO_IR 100"),
            ))
            .patient_name("René")
            .build()
            .unwrap();
        assert_eq!(
            record.data_set().element(tags::SPECIFIC_CHARACTER_SET).unwrap().value().to_str().unwrap(),
            "ISO_IR 100"
        );

        let record = ImageRecordBuilder::new().patient_name("Doe^John").build().unwrap();
        assert!(!record.data_set().contains(tags::SPECIFIC_CHARACTER_SET));
    }

    #[test]
    fn secondary_capture_without_modality() {
        let record = ImageRecordBuilder::new().build().unwrap();
        assert_eq!(record.sop_class_uid(), uids::SECONDARY_CAPTURE_IMAGE_STORAGE);
        assert_eq!(record.modality(), None);
    }
}
