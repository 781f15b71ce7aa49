//! The top-level error type of the codec,
//! and the classification of its failures.
use crate::meta;
use p10_core::uid::InvalidUidError;
use p10_core::Tag;
use p10_parser::dataset::{read, write};
use p10_parser::stateful::decode::Error as DecoderError;
use snafu::{Backtrace, Snafu};
use std::fmt;
use std::path::PathBuf;

/// An error from reading or writing a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    #[snafu(display("Could not read file meta group"))]
    ReadMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },
    #[snafu(display("Could not write file meta group"))]
    WriteMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },
    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: read::Error,
    },
    #[snafu(display("Could not write data set"))]
    WriteDataSet {
        #[snafu(backtrace)]
        source: write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Invalid UID `{}` in {}", uid, tag))]
    InvalidUid {
        tag: Tag,
        uid: String,
        source: InvalidUidError,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Pixel data has {} bytes, but {} bytes are expected",
        actual,
        expected
    ))]
    PixelDataSizeMismatch {
        expected: usize,
        actual: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Missing attribute {}", tag))]
    MissingAttribute { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Invalid value of {}: {}", tag, reason))]
    InvalidValue {
        tag: Tag,
        reason: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not decode pixel data"))]
    DecodePixelData {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Alias for a result with the codec error type.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// The class of a codec failure.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The `DICM` magic code is missing
    BadMagic,
    /// The file ends before the file meta group does
    TruncatedHeader,
    /// A value or structure extends past the end of the data
    TruncatedValue,
    /// The transfer syntax is unknown, unsupported,
    /// or does not fit the pixel data encoding
    UnsupportedTransferSyntax,
    /// An unknown tag could not be handled
    UnknownTag,
    /// A tag is not greater than the one before it
    OutOfOrderTag,
    /// Sequences are nested too deeply
    SequenceTooDeep,
    /// Native pixel data does not have the expected size
    PixelDataSizeMismatch,
    /// An identifying UID is not well formed
    InvalidUid,
    /// The file could not be opened, read or written
    IoFailure,
    /// A required attribute is absent
    MissingAttribute,
    /// A value could not be used as required
    InvalidValue,
    /// Any other structural failure
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ErrorKind::BadMagic => "bad magic code",
            ErrorKind::TruncatedHeader => "truncated header",
            ErrorKind::TruncatedValue => "truncated value",
            ErrorKind::UnsupportedTransferSyntax => "unsupported transfer syntax",
            ErrorKind::UnknownTag => "unknown tag",
            ErrorKind::OutOfOrderTag => "tag out of order",
            ErrorKind::SequenceTooDeep => "sequence too deep",
            ErrorKind::PixelDataSizeMismatch => "pixel data size mismatch",
            ErrorKind::InvalidUid => "invalid UID",
            ErrorKind::IoFailure => "I/O failure",
            ErrorKind::MissingAttribute => "missing attribute",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::Other => "malformed data",
        };
        f.write_str(s)
    }
}

fn decoder_kind(e: &DecoderError) -> ErrorKind {
    match e {
        DecoderError::UnsupportedTransferSyntax { .. } => ErrorKind::UnsupportedTransferSyntax,
        DecoderError::TruncatedValue { .. } => ErrorKind::TruncatedValue,
        _ => ErrorKind::Other,
    }
}

fn read_kind(e: &read::Error) -> ErrorKind {
    match e {
        read::Error::CreateDecoder { source } | read::Error::ReadElement { source } => {
            decoder_kind(source)
        }
        read::Error::OutOfOrderTag { .. } => ErrorKind::OutOfOrderTag,
        read::Error::SequenceTooDeep { .. } => ErrorKind::SequenceTooDeep,
        _ => ErrorKind::Other,
    }
}

fn write_kind(e: &write::Error) -> ErrorKind {
    match e {
        write::Error::UnsupportedTransferSyntax { .. }
        | write::Error::EncapsulationMismatch { .. } => ErrorKind::UnsupportedTransferSyntax,
        write::Error::EncodeValue { .. } | write::Error::ValueTooLarge { .. } => {
            ErrorKind::InvalidValue
        }
        _ => ErrorKind::Other,
    }
}

fn meta_kind(e: &meta::Error) -> ErrorKind {
    match e {
        meta::Error::TruncatedHeader { .. } => ErrorKind::TruncatedHeader,
        meta::Error::BadMagic { .. } => ErrorKind::BadMagic,
        // the meta group itself ends early
        meta::Error::ScanGroup { source } => match decoder_kind(source) {
            ErrorKind::TruncatedValue => ErrorKind::TruncatedHeader,
            kind => kind,
        },
        meta::Error::ReadGroup { source } => match read_kind(source) {
            ErrorKind::TruncatedValue => ErrorKind::TruncatedHeader,
            kind => kind,
        },
        meta::Error::MissingElement { .. } => ErrorKind::MissingAttribute,
        meta::Error::UnsupportedTransferSyntax { .. } => ErrorKind::UnsupportedTransferSyntax,
        meta::Error::WriteGroup { source } => write_kind(source),
    }
}

impl CodecError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::ReadMeta { source } | CodecError::WriteMeta { source } => {
                meta_kind(source)
            }
            CodecError::ReadDataSet { source } => read_kind(source),
            CodecError::WriteDataSet { source } => write_kind(source),
            CodecError::UnsupportedTransferSyntax { .. } => ErrorKind::UnsupportedTransferSyntax,
            CodecError::InvalidUid { .. } => ErrorKind::InvalidUid,
            CodecError::PixelDataSizeMismatch { .. } => ErrorKind::PixelDataSizeMismatch,
            CodecError::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            CodecError::InvalidValue { .. } => ErrorKind::InvalidValue,
            CodecError::OpenFile { .. }
            | CodecError::ReadFile { .. }
            | CodecError::WriteFile { .. } => ErrorKind::IoFailure,
            CodecError::DecodePixelData { .. } => ErrorKind::Other,
        }
    }

    /// The byte offset in the file where the failure was found, if known.
    ///
    /// Offsets of data set failures are relative to the start of the file,
    /// preamble included.
    pub fn offset(&self) -> Option<u64> {
        match self {
            CodecError::ReadMeta { source } => source.offset(),
            CodecError::ReadDataSet { source } => source.offset(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorKind;
    use p10_core::Tag;
    use snafu::IntoError;

    #[test]
    fn io_errors_are_classified() {
        let err = super::OpenFileSnafu {
            filename: "missing.dcm",
        }
        .into_error(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(err.offset(), None);
        assert_eq!(err.to_string(), "Could not open file 'missing.dcm'");
    }

    #[test]
    fn display_kind() {
        let err = super::MissingAttributeSnafu {
            tag: Tag(0x7FE0, 0x0010),
        }
        .build();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
        assert_eq!(err.kind().to_string(), "missing attribute");
    }
}
