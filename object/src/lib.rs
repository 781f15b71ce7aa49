#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the high-level API for reading and writing
//! DICOM Part-10 files.
//!
//! A file is read in full into an [`ImageRecord`],
//! which keeps the file meta table and the complete data set,
//! and projects the identifying UIDs, patient and study attributes,
//! and the pixel data attributes out of it.
//! Recoverable deviations from the standard
//! are collected as [`Warning`]s in the record,
//! unless reading with [`Conformance::Strict`].
//!
//! # Examples
//!
//! Read a file and fetch some attributes:
//!
//! ```no_run
//! use p10_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let record = open_file("0001.dcm")?;
//!
//! let study = record.study_instance_uid();
//! let modality = record.modality().unwrap_or("OT");
//! for warning in record.warnings() {
//!     println!("{}", warning);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Build a new instance and encode it:
//!
//! ```
//! use p10_object::{read, write, ImageRecordBuilder, PixelDataDescriptor};
//! use p10_object::transfer_syntax::EXPLICIT_VR_BIG_ENDIAN;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let record = ImageRecordBuilder::new()
//!     .modality("US")
//!     .patient_id("12345")
//!     .native_pixel_data(PixelDataDescriptor::new(4, 4, 8), vec![0; 16])
//!     .build()?;
//!
//! let bytes = write(&record, &EXPLICIT_VR_BIG_ENDIAN)?;
//! assert_eq!(&bytes[128..132], b"DICM");
//!
//! let copy = read(&bytes)?;
//! assert_eq!(copy.data_set(), record.data_set());
//! assert_eq!(copy.patient_id(), Some("12345"));
//! # Ok(())
//! # }
//! # foo().unwrap();
//! ```
//!
//! Pixel data is taken out of a record with [`extract_pixel_data`],
//! resulting in a buffer of native samples
//! or of compressed fragments grouped by frame.
//! Decompression is left to a [`PixelDataDecoder`].
pub mod error;
pub mod file;
pub mod meta;
pub mod pixeldata;
pub mod record;

pub use crate::error::{CodecError, ErrorKind, Result};
pub use crate::file::{open_file, ReadOptions};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::pixeldata::{PixelBuffer, PixelDataDecoder, PixelDataDescriptor};
pub use crate::record::{ImageRecord, ImageRecordBuilder};
pub use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, Value, VR};
pub use p10_encoding::transfer_syntax::{self, TransferSyntax};
pub use p10_parser::{Conformance, Warning, WarningKind};

use crate::error::{UnsupportedTransferSyntaxSnafu, WriteDataSetSnafu, WriteMetaSnafu};
use p10_dictionary::tags;
use p10_parser::{write_dataset, WriteOptions};
use snafu::{ensure, ResultExt};
use tracing::debug;

/// The implementation class UID written to the file meta group
/// of new instances.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.262086406829110419931297894772577063974";

/// The implementation version name written to the file meta group
/// of new instances.
pub const IMPLEMENTATION_VERSION_NAME: &str = "P10_RS_0.1";

/// Read an image record from the full contents of a DICOM file,
/// with the default options.
///
/// See [`ReadOptions`] for reading with other options.
pub fn read(bytes: &[u8]) -> Result<ImageRecord> {
    ReadOptions::new().from_bytes(bytes)
}

/// Encode an image record as a DICOM file in the given transfer syntax.
///
/// The file meta group is written with the new transfer syntax
/// and a freshly derived group length.
/// Encapsulated pixel data can only be written
/// in a transfer syntax of the same codec,
/// and native pixel data only in a native transfer syntax.
/// Native pixel data must have the size implied by its attributes.
pub fn write(record: &ImageRecord, ts: &TransferSyntax) -> Result<Vec<u8>> {
    ensure!(
        ts.is_supported(),
        UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
    );
    if let Some(element) = record.data_set().element_opt(tags::PIXEL_DATA) {
        match element.value() {
            Value::Primitive(value) => {
                if let Some(descriptor) = record.pixel_data() {
                    descriptor.check_native_len(value.to_bytes().len())?;
                }
            }
            Value::PixelSequence(_) => {
                ensure!(
                    ts.codec() == record.transfer_syntax().codec(),
                    UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
                );
            }
            Value::Sequence(_) => {}
        }
    }
    debug!("Writing data set in {} ({})", ts.name(), ts.uid());

    let mut meta = record.meta().clone();
    meta.transfer_syntax = ts.uid().to_string();
    let mut bytes = meta.to_bytes().context(WriteMetaSnafu)?;
    let data_set =
        write_dataset(record.data_set(), ts, WriteOptions::default()).context(WriteDataSetSnafu)?;
    bytes.extend_from_slice(&data_set);
    Ok(bytes)
}

/// Take the pixel data out of an image record.
///
/// The returned buffer is owned by the caller.
/// Fails with [`ErrorKind::MissingAttribute`]
/// if the record has no pixel data
/// or lacks the attributes needed to interpret it.
pub fn extract_pixel_data(record: &ImageRecord) -> Result<PixelBuffer> {
    pixeldata::extract(record.data_set(), record.transfer_syntax())
}
