//! This module contains all DICOM data element encoding logic.

use byteordered::{ByteOrdered, Endianness};
use p10_core::header::{DataElementHeader, Length};
use p10_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

pub mod explicit;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write element header of {}", tag))]
    WriteHeader {
        tag: Tag,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    /// The value is too long for the 16-bit length field of its VR.
    #[snafu(display("Value of {} with VR {} is too long ({} bytes)", tag, vr, len))]
    ValueTooLong {
        tag: Tag,
        vr: VR,
        len: Length,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for a data element encoder.
pub trait Encode {
    /// Retrieve the encoder's endianness.
    fn endianness(&self) -> Endianness;

    /// Encode and write an element tag.
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness());
        to.write_u16(tag.0).context(WriteTagSnafu)?;
        to.write_u16(tag.1).context(WriteTagSnafu)?;
        Ok(())
    }

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write;

    /// Encode and write a DICOM sequence item header to the given destination.
    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = ByteOrdered::runtime(Vec::with_capacity(8), self.endianness());
        buf.write_u16(Tag::ITEM.0).context(WriteItemHeaderSnafu)?;
        buf.write_u16(Tag::ITEM.1).context(WriteItemHeaderSnafu)?;
        buf.write_u32(len).context(WriteItemHeaderSnafu)?;
        to.write_all(&buf.into_inner())
            .context(WriteItemHeaderSnafu)
    }

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_tag(&mut to, Tag::ITEM_DELIMITER)?;
        to.write_all(&[0u8; 4]).context(WriteItemDelimiterSnafu)
    }

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_tag(&mut to, Tag::SEQUENCE_DELIMITER)?;
        to.write_all(&[0u8; 4])
            .context(WriteSequenceDelimiterSnafu)
    }
}

impl<T: ?Sized> Encode for &T
where
    T: Encode,
{
    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_tag(to, tag)
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        (**self).encode_element_header(to, de)
    }

    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_item_header(to, len)
    }

    fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_sequence_delimiter(to)
    }
}

/// Type trait for a data element encoder to a single known writer type `W`.
///
/// Unlike [`Encode`], this trait is object safe.
pub trait EncodeTo<W: ?Sized + Write> {
    /// Retrieve the encoder's endianness.
    fn endianness(&self) -> Endianness;

    /// Encode and write an element tag.
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()>;

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize>;

    /// Encode and write a DICOM sequence item header to the given destination.
    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()>;

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter(&self, to: &mut W) -> Result<()>;

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()>;
}

impl<T, W: ?Sized> EncodeTo<W> for T
where
    T: Encode,
    W: Write,
{
    fn endianness(&self) -> Endianness {
        Encode::endianness(self)
    }

    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()> {
        Encode::encode_tag(self, to, tag)
    }

    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize> {
        Encode::encode_element_header(self, to, de)
    }

    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()> {
        Encode::encode_item_header(self, to, len)
    }

    fn encode_item_delimiter(&self, to: &mut W) -> Result<()> {
        Encode::encode_item_delimiter(self, to)
    }

    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()> {
        Encode::encode_sequence_delimiter(self, to)
    }
}
