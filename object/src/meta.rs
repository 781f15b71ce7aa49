//! Module containing data structures and readers of DICOM file meta information tables.
//!
//! A DICOM file starts with a 128-byte preamble and the magic code `DICM`,
//! followed by the file meta group (0002,xxxx),
//! which is always encoded in Explicit VR Little Endian
//! and declares the transfer syntax of the rest of the file.
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, VR};
use p10_dictionary::tags;
use p10_encoding::transfer_syntax::{TransferSyntax, EXPLICIT_VR_LITTLE_ENDIAN};
use p10_parser::dataset::{read, write};
use p10_parser::stateful::decode::{Error as DecoderError, StatefulDecoder};
use p10_parser::{read_dataset, write_dataset, ParseOptions, Parsed, WriteOptions};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::warn;

/// The length of the file preamble in bytes.
pub const PREAMBLE_LEN: usize = 128;

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// Offset of the first file meta element.
const META_START: usize = PREAMBLE_LEN + DICM_MAGIC_CODE.len();

/// The file meta attributes held by [`FileMetaTable`].
const TABLE_TAGS: [Tag; 12] = [
    tags::FILE_META_INFORMATION_GROUP_LENGTH,
    tags::FILE_META_INFORMATION_VERSION,
    tags::MEDIA_STORAGE_SOP_CLASS_UID,
    tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
    tags::TRANSFER_SYNTAX_UID,
    tags::IMPLEMENTATION_CLASS_UID,
    tags::IMPLEMENTATION_VERSION_NAME,
    tags::SOURCE_APPLICATION_ENTITY_TITLE,
    tags::SENDING_APPLICATION_ENTITY_TITLE,
    tags::RECEIVING_APPLICATION_ENTITY_TITLE,
    tags::PRIVATE_INFORMATION_CREATOR_UID,
    tags::PRIVATE_INFORMATION,
];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// There are not enough bytes for the preamble and magic code.
    #[snafu(display("File header truncated: {} bytes available", len))]
    TruncatedHeader { len: usize, backtrace: Backtrace },

    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data: no DICM magic code at offset 128"))]
    BadMagic { backtrace: Backtrace },

    /// The bounds of the file meta group could not be determined.
    #[snafu(display("Could not scan file meta group"))]
    ScanGroup {
        #[snafu(backtrace)]
        source: DecoderError,
    },

    /// The file meta group could not be read as a data set.
    #[snafu(display("Could not read file meta group"))]
    ReadGroup {
        #[snafu(backtrace)]
        source: read::Error,
    },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The declared transfer syntax is unknown or cannot be handled.
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteGroup {
        #[snafu(backtrace)]
        source: write::Error,
    },
}

impl Error {
    /// The byte offset in the file where the error was found.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::TruncatedHeader { len, .. } => Some(*len as u64),
            Error::BadMagic { .. } => Some(PREAMBLE_LEN as u64),
            Error::ScanGroup { source } => source.offset(),
            Error::ReadGroup { source } => source.offset(),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta information table, as
/// specified in [1], along with the file preamble.
///
/// UID and text values are kept without their trailing padding.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_7.html
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// The 128-byte file preamble, kept verbatim
    pub preamble: [u8; PREAMBLE_LEN],
    /// File Meta Information Group Length, as found in the source.
    /// It is always derived anew when the table is written.
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Sending Application Entity Title
    pub sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title
    pub receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID
    pub private_information_creator_uid: Option<String>,
    /// Private Information
    pub private_information: Option<Vec<u8>>,
}

fn text_of(ds: &DataSet, tag: Tag) -> Option<String> {
    ds.element_opt(tag)
        .and_then(|e| e.value().primitive())
        .map(|v| v.to_str().trim_end_matches(['\0', ' ']).to_string())
}

impl FileMetaTable {
    /// Read the preamble, the magic code and the file meta group
    /// from the start of a DICOM file.
    ///
    /// Returns the table and the bytes of the data set which follows it.
    /// The group extends for as long as elements of group 0002 follow,
    /// so a stale group length value does not corrupt the read.
    pub fn parse(bytes: &[u8]) -> Result<(Parsed<FileMetaTable>, &[u8])> {
        ensure!(
            bytes.len() >= META_START,
            TruncatedHeaderSnafu { len: bytes.len() }
        );
        ensure!(
            bytes[PREAMBLE_LEN..META_START] == DICM_MAGIC_CODE,
            BadMagicSnafu
        );
        let mut preamble = [0u8; PREAMBLE_LEN];
        preamble.copy_from_slice(&bytes[..PREAMBLE_LEN]);

        // find the end of the group
        let mut decoder = StatefulDecoder::new_with(
            &bytes[META_START..],
            &EXPLICIT_VR_LITTLE_ENDIAN,
            META_START as u64,
        )
        .context(ScanGroupSnafu)?;
        loop {
            let position = decoder.position() as usize;
            match bytes.get(position..position + 2) {
                Some(&[lo, hi]) if u16::from_le_bytes([lo, hi]) == 0x0002 => {}
                _ => break,
            }
            let (header, _) = decoder.decode_header().context(ScanGroupSnafu)?;
            decoder.read_value_bytes(&header).context(ScanGroupSnafu)?;
        }
        let meta_end = decoder.position() as usize;

        let options = ParseOptions::default().base_offset(META_START as u64);
        let Parsed { value: ds, warnings } = read_dataset(
            &bytes[META_START..meta_end],
            &EXPLICIT_VR_LITTLE_ENDIAN,
            options,
        )
        .context(ReadGroupSnafu)?;

        let table = FileMetaTable::from_data_set(preamble, &ds)?;
        // the group length element itself takes 12 bytes
        let actual_len = (meta_end - META_START) as u64;
        if ds.contains(tags::FILE_META_INFORMATION_GROUP_LENGTH)
            && u64::from(table.information_group_length) + 12 != actual_len
        {
            warn!(
                "File meta group length is {}, but the group spans {} bytes",
                table.information_group_length,
                actual_len.saturating_sub(12)
            );
        }

        Ok((
            Parsed {
                value: table,
                warnings,
            },
            &bytes[meta_end..],
        ))
    }

    fn from_data_set(preamble: [u8; PREAMBLE_LEN], ds: &DataSet) -> Result<Self> {
        for elem in ds.group(0x0002) {
            if !TABLE_TAGS.contains(&elem.tag()) {
                warn!(
                    "Discarding file meta attribute {} ({:?}), which is not kept in the table",
                    elem.tag(),
                    elem.vr()
                );
            }
        }
        let information_group_length = ds
            .element_opt(tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .and_then(|e| e.value().primitive())
            .and_then(|v| v.to_int::<u32>().ok())
            .unwrap_or_default();
        let information_version = ds
            .element_opt(tags::FILE_META_INFORMATION_VERSION)
            .and_then(|e| e.value().primitive())
            .map(|v| v.to_bytes())
            .filter(|v| v.len() == 2)
            .map(|v| [v[0], v[1]])
            // Missing information version, will assume (00H, 01H)
            .unwrap_or([0, 1]);

        let transfer_syntax = text_of(ds, tags::TRANSFER_SYNTAX_UID).context(MissingElementSnafu {
            alias: "TransferSyntaxUID",
        })?;
        let ts = TransferSyntax::from_uid(&transfer_syntax);
        ensure!(
            ts.map_or(false, TransferSyntax::is_supported),
            UnsupportedTransferSyntaxSnafu {
                uid: transfer_syntax.clone()
            }
        );

        Ok(FileMetaTable {
            preamble,
            information_group_length,
            information_version,
            media_storage_sop_class_uid: text_of(ds, tags::MEDIA_STORAGE_SOP_CLASS_UID).context(
                MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                },
            )?,
            media_storage_sop_instance_uid: text_of(ds, tags::MEDIA_STORAGE_SOP_INSTANCE_UID)
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                })?,
            transfer_syntax,
            implementation_class_uid: text_of(ds, tags::IMPLEMENTATION_CLASS_UID).context(
                MissingElementSnafu {
                    alias: "ImplementationClassUID",
                },
            )?,
            implementation_version_name: text_of(ds, tags::IMPLEMENTATION_VERSION_NAME),
            source_application_entity_title: text_of(ds, tags::SOURCE_APPLICATION_ENTITY_TITLE),
            sending_application_entity_title: text_of(ds, tags::SENDING_APPLICATION_ENTITY_TITLE),
            receiving_application_entity_title: text_of(
                ds,
                tags::RECEIVING_APPLICATION_ENTITY_TITLE,
            ),
            private_information_creator_uid: text_of(ds, tags::PRIVATE_INFORMATION_CREATOR_UID),
            private_information: ds
                .element_opt(tags::PRIVATE_INFORMATION)
                .and_then(|e| e.value().primitive())
                .map(|v| v.to_bytes().into_owned()),
        })
    }

    /// Obtain the transfer syntax declared by this table.
    ///
    /// Returns `None` if the transfer syntax is not known.
    pub fn transfer_syntax(&self) -> Option<&'static TransferSyntax> {
        TransferSyntax::from_uid(&self.transfer_syntax)
    }

    /// Collect the table's attributes into a data set,
    /// including a group length element.
    pub fn to_data_set(&self) -> DataSet {
        let uid = |tag: Tag, value: &str| DataElement::new(tag, VR::UI, PrimitiveValue::from(value));

        let mut ds = DataSet::new();
        ds.put(DataElement::new(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            PrimitiveValue::from(self.information_group_length),
        ));
        ds.put(DataElement::new(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            PrimitiveValue::from(&self.information_version[..]),
        ));
        ds.put(uid(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            &self.media_storage_sop_class_uid,
        ));
        ds.put(uid(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            &self.media_storage_sop_instance_uid,
        ));
        ds.put(uid(tags::TRANSFER_SYNTAX_UID, &self.transfer_syntax));
        ds.put(uid(
            tags::IMPLEMENTATION_CLASS_UID,
            &self.implementation_class_uid,
        ));
        if let Some(v) = &self.implementation_version_name {
            ds.put_str(tags::IMPLEMENTATION_VERSION_NAME, VR::SH, v.as_str());
        }
        if let Some(v) = &self.source_application_entity_title {
            ds.put_str(tags::SOURCE_APPLICATION_ENTITY_TITLE, VR::AE, v.as_str());
        }
        if let Some(v) = &self.sending_application_entity_title {
            ds.put_str(tags::SENDING_APPLICATION_ENTITY_TITLE, VR::AE, v.as_str());
        }
        if let Some(v) = &self.receiving_application_entity_title {
            ds.put_str(tags::RECEIVING_APPLICATION_ENTITY_TITLE, VR::AE, v.as_str());
        }
        if let Some(v) = &self.private_information_creator_uid {
            ds.put(uid(tags::PRIVATE_INFORMATION_CREATOR_UID, v));
        }
        if let Some(v) = &self.private_information {
            ds.put(DataElement::new(
                tags::PRIVATE_INFORMATION,
                VR::OB,
                PrimitiveValue::from(&v[..]),
            ));
        }
        ds
    }

    /// Serialize the preamble, the magic code and the file meta group.
    ///
    /// The group length element is derived from the encoded group,
    /// regardless of the value in [`information_group_length`](Self::information_group_length).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let group = write_dataset(
            &self.to_data_set(),
            &EXPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::default(),
        )
        .context(WriteGroupSnafu)?;
        let mut out = Vec::with_capacity(META_START + group.len());
        out.extend_from_slice(&self.preamble);
        out.extend_from_slice(&DICM_MAGIC_CODE);
        out.extend_from_slice(&group);
        Ok(out)
    }
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Clone, Default)]
pub struct FileMetaTableBuilder {
    /// File preamble
    preamble: Option<[u8; PREAMBLE_LEN]>,
    /// File Meta Information Version (OB)
    information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID (UI)
    media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID (UI)
    media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID (UI)
    transfer_syntax: Option<String>,
    /// Implementation Class UID (UI)
    implementation_class_uid: Option<String>,

    /// Implementation Version Name (SH)
    implementation_version_name: Option<String>,
    /// Source Application Entity Title (AE)
    source_application_entity_title: Option<String>,
    /// Sending Application Entity Title (AE)
    sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title (AE)
    receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID (UI)
    private_information_creator_uid: Option<String>,
    /// Private Information (OB)
    private_information: Option<Vec<u8>>,
}

/// Length of a text value once padded to even length.
fn padded_len(s: &str) -> u32 {
    let len = s.len() as u32;
    len + len % 2
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the file preamble. It is all zeros by default.
    pub fn preamble(mut self, value: [u8; PREAMBLE_LEN]) -> FileMetaTableBuilder {
        self.preamble = Some(value);
        self
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(value.into());
        self
    }

    /// Define the sending application entity title.
    pub fn sending_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.sending_application_entity_title = Some(value.into());
        self
    }

    /// Define the receiving application entity title.
    pub fn receiving_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.receiving_application_entity_title = Some(value.into());
        self
    }

    /// Define the private information creator UID.
    pub fn private_information_creator_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.private_information_creator_uid = Some(value.into());
        self
    }

    /// Define the private information as a vector of bytes.
    pub fn private_information<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<Vec<u8>>,
    {
        self.private_information = Some(value.into());
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<FileMetaTable> {
        let information_version = self.information_version.unwrap_or([0, 1]);
        let media_storage_sop_class_uid =
            self.media_storage_sop_class_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                })?;
        let media_storage_sop_instance_uid =
            self.media_storage_sop_instance_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                })?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntax",
        })?;
        let implementation_class_uid =
            self.implementation_class_uid
                .context(MissingElementSnafu {
                    alias: "ImplementationClassUID",
                })?;

        // the expected meta group size,
        // not including the group length element itself
        let optional_text = [
            &self.implementation_version_name,
            &self.source_application_entity_title,
            &self.sending_application_entity_title,
            &self.receiving_application_entity_title,
            &self.private_information_creator_uid,
        ];
        let information_group_length = 14
            + 8
            + padded_len(&media_storage_sop_class_uid)
            + 8
            + padded_len(&media_storage_sop_instance_uid)
            + 8
            + padded_len(&transfer_syntax)
            + 8
            + padded_len(&implementation_class_uid)
            + optional_text
                .iter()
                .filter_map(|s| s.as_deref())
                .map(|s| 8 + padded_len(s))
                .sum::<u32>()
            + self
                .private_information
                .as_ref()
                .map(|x| 12 + x.len() as u32 + x.len() as u32 % 2)
                .unwrap_or(0);

        Ok(FileMetaTable {
            preamble: self.preamble.unwrap_or([0; PREAMBLE_LEN]),
            information_group_length,
            information_version,
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid,
            implementation_version_name: self.implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            sending_application_entity_title: self.sending_application_entity_title,
            receiving_application_entity_title: self.receiving_application_entity_title,
            private_information_creator_uid: self.private_information_creator_uid,
            private_information: self.private_information,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FileMetaTable, FileMetaTableBuilder, PREAMBLE_LEN};

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // magic code
        b'D', b'I', b'C', b'M',
        // File Meta Information Group Length: (0000,0002) ; UL ; 4 ; 200
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xc8, 0x00, 0x00, 0x00,
        // File Meta Information Version: (0002, 0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // Media Storage SOP Class UID (0002, 0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0" (ComputedRadiographyImageStorage)
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e,
        0x31, 0x2e, 0x31, 0x00,
        // Media Storage SOP Instance UID (0002, 0003) ; UI ; 56 ; "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x38, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34,
        0x2e, 0x35, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x2e, 0x31, 0x32, 0x33,
        0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
        0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x2e, 0x31, 0x32, 0x33, 0x34,
        0x35, 0x36, 0x37, 0x00,
        // Transfer Syntax UID (0002, 0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0" (LittleEndianExplicit)
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
        // Implementation Class UID (0002, 0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x34, 0x35,
        0x2e, 0x36, 0x2e, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x2e, 0x32, 0x33, 0x34,
        // optional elements:

        // Implementation Version Name (0002,0013) ; SH ; "RUSTY_DICOM_269"
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x10, 0x00, 0x52, 0x55, 0x53, 0x54, 0x59, 0x5f, 0x44,
        0x49, 0x43, 0x4f, 0x4d, 0x5f, 0x32, 0x36, 0x39, 0x20,
        // Source Application Entity Title (0002, 0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00,
        // start of the data set: (0008,0060) CS "MR"
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
    ];

    fn with_preamble(rest: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; PREAMBLE_LEN];
        out[..4].copy_from_slice(b"II*\0");
        out.extend_from_slice(rest);
        out
    }

    #[test]
    fn read_meta_table() {
        let bytes = with_preamble(TEST_META_1);
        let (table, rest) = FileMetaTable::parse(&bytes).unwrap();
        assert!(table.is_clean());
        let table = table.value;

        assert_eq!(&table.preamble[..4], b"II*\0");
        assert_eq!(table.information_group_length, 200);
        assert_eq!(table.information_version, [0u8, 1u8]);
        assert_eq!(table.media_storage_sop_class_uid, "1.2.840.10008.5.1.4.1.1.1");
        assert_eq!(
            table.media_storage_sop_instance_uid,
            "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567"
        );
        assert_eq!(table.transfer_syntax, "1.2.840.10008.1.2.1");
        assert_eq!(table.implementation_class_uid, "1.2.345.6.7890.1.234");
        assert_eq!(
            table.implementation_version_name.as_deref(),
            Some("RUSTY_DICOM_269")
        );
        assert_eq!(table.source_application_entity_title.as_deref(), Some(""));
        assert_eq!(table.sending_application_entity_title, None);
        assert_eq!(table.private_information, None);

        assert_eq!(rest, &[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R']);
    }

    #[test]
    fn write_meta_table_back() {
        let bytes = with_preamble(TEST_META_1);
        let (table, _) = FileMetaTable::parse(&bytes).unwrap();
        let out = table.value.to_bytes().unwrap();
        // the preamble is echoed verbatim and the group is written as read
        assert_eq!(&out[..], &bytes[..bytes.len() - 10]);
    }

    #[test]
    fn stale_group_length_is_tolerated() {
        let mut bytes = with_preamble(TEST_META_1);
        // declare 100 bytes instead of 200
        bytes[140] = 0x64;
        let (table, rest) = FileMetaTable::parse(&bytes).unwrap();
        assert_eq!(table.value.information_group_length, 100);
        assert_eq!(rest.len(), 10);

        let out = table.value.to_bytes().unwrap();
        assert_eq!(&out[140..144], &200_u32.to_le_bytes());
    }

    #[test]
    fn huge_group_length_is_tolerated() {
        let mut bytes = with_preamble(TEST_META_1);
        bytes[140..144].copy_from_slice(&0xFFFF_FFF8_u32.to_le_bytes());
        let (table, rest) = FileMetaTable::parse(&bytes).unwrap();
        assert_eq!(table.value.information_group_length, 0xFFFF_FFF8);
        assert_eq!(rest.len(), 10);

        let out = table.value.to_bytes().unwrap();
        assert_eq!(&out[140..144], &200_u32.to_le_bytes());
    }

    #[test]
    fn unknown_meta_attributes_are_discarded() {
        let original = with_preamble(TEST_META_1);
        let (group, data_set) = original.split_at(original.len() - 10);
        let mut bytes = group.to_vec();
        // (0002,0099) SH "XY"
        bytes.extend_from_slice(&[0x02, 0x00, 0x99, 0x00, b'S', b'H', 0x02, 0x00, b'X', b'Y']);
        bytes.extend_from_slice(data_set);
        let (table, rest) = FileMetaTable::parse(&bytes).unwrap();
        assert_eq!(rest, data_set);
        assert_eq!(table.value.implementation_class_uid, "1.2.345.6.7890.1.234");

        let out = table.value.to_bytes().unwrap();
        assert_eq!(&out[..], group);
    }

    #[test]
    fn group_length_of_built_table() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.826.0.1.3680043.8.498.1234567890123456789")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("P10_CODEC_01")
            .build()
            .unwrap();
        assert_eq!(table.information_group_length, 178);

        let out = table.to_bytes().unwrap();
        assert_eq!(&out[140..144], &178_u32.to_le_bytes());
        assert_eq!(out.len(), 132 + 12 + 178);

        // a stale value is not trusted
        let mut stale = table.clone();
        stale.information_group_length = 7;
        assert_eq!(stale.to_bytes().unwrap(), out);
    }

    #[test]
    fn bad_magic() {
        let err = FileMetaTable::parse(&[0u8; 132]).unwrap_err();
        assert!(matches!(err, Error::BadMagic { .. }));
        assert_eq!(err.offset(), Some(128));
    }

    #[test]
    fn truncated_header() {
        let err = FileMetaTable::parse(&[0u8; 100]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader { len: 100, .. }));
    }

    #[test]
    fn unsupported_transfer_syntax() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2.1.99")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .build()
            .unwrap();
        let bytes = table.to_bytes().unwrap();
        let err = FileMetaTable::parse(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedTransferSyntax { ref uid, .. } if uid == "1.2.840.10008.1.2.1.99"
        ));
    }

    #[test]
    fn missing_transfer_syntax() {
        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "TransferSyntax",
                ..
            }
        ));
    }
}
