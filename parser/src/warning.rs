//! Non-fatal findings collected while reading a data set.

use p10_core::Tag;
use std::fmt;

/// The kind of a recoverable deviation from the standard.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum WarningKind {
    /// The tag is not in the dictionary,
    /// so its value was read as unknown bytes (VR UN).
    UnknownTag,
    /// The tag is not greater than the one before it.
    /// Duplicates are discarded in favor of the first occurrence.
    OutOfOrderTag,
    /// Native pixel data does not have the size implied by its attributes.
    PixelDataSizeMismatch,
    /// An identifying UID is not well formed.
    InvalidUid,
    /// An item or sequence delimiter was found outside of its context.
    StrayDelimiter,
    /// A value could not be interpreted according to its VR
    /// and was kept as raw bytes.
    MalformedValue,
    /// The Specific Character Set names a repertoire which is not supported.
    /// Text is read in the default repertoire instead.
    UnsupportedCharacterSet,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            WarningKind::UnknownTag => "unknown tag",
            WarningKind::OutOfOrderTag => "tag out of order",
            WarningKind::PixelDataSizeMismatch => "pixel data size mismatch",
            WarningKind::InvalidUid => "invalid UID",
            WarningKind::StrayDelimiter => "stray delimiter",
            WarningKind::MalformedValue => "malformed value",
            WarningKind::UnsupportedCharacterSet => "unsupported character set",
        };
        f.write_str(s)
    }
}

/// A recoverable deviation found while reading,
/// reported alongside the successful result.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Warning {
    /// what was found
    pub kind: WarningKind,
    /// the tag of the offending element, if any
    pub tag: Option<Tag>,
    /// the byte offset of the offending element, if known
    pub offset: Option<u64>,
}

impl Warning {
    /// Create a warning about the element at the given offset.
    pub fn new(kind: WarningKind, tag: Tag, offset: u64) -> Self {
        Warning {
            kind,
            tag: Some(tag),
            offset: Some(offset),
        }
    }

    /// Create a warning which is not attached to a position in the source.
    pub fn detached(kind: WarningKind, tag: Option<Tag>) -> Self {
        Warning {
            kind,
            tag,
            offset: None,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(tag) = self.tag {
            write!(f, " at {}", tag)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset {:#x})", offset)?;
        }
        Ok(())
    }
}

/// A successfully read value together with the warnings collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// the value read
    pub value: T,
    /// the recoverable deviations found, in reading order
    pub warnings: Vec<Warning>,
}

impl<T> Parsed<T> {
    /// Transform the value, keeping the warnings.
    pub fn map<U, F>(self, f: F) -> Parsed<U>
    where
        F: FnOnce(T) -> U,
    {
        Parsed {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Whether no warnings were collected.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
