//! Explicit VR syntax transfer implementation,
//! in either byte order.

use crate::encode::{Encode, Result, ValueTooLongSnafu, WriteHeaderSnafu};
use byteordered::{ByteOrdered, Endianness};
use p10_core::header::DataElementHeader;
use snafu::{ensure, ResultExt};
use std::io::Write;

/// A concrete encoder for the Explicit VR transfer syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVREncoder {
    endianness: Endianness,
}

impl Default for ExplicitVREncoder {
    fn default() -> Self {
        ExplicitVREncoder::little_endian()
    }
}

impl ExplicitVREncoder {
    /// Create an encoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVREncoder { endianness }
    }

    /// Create an encoder for Explicit VR Little Endian.
    pub fn little_endian() -> Self {
        Self::new(Endianness::Little)
    }

    /// Create an encoder for Explicit VR Big Endian.
    pub fn big_endian() -> Self {
        Self::new(Endianness::Big)
    }
}

impl Encode for ExplicitVREncoder {
    fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        let tag = de.tag;
        let mut buf = ByteOrdered::runtime(Vec::with_capacity(12), self.endianness);
        buf.write_u16(tag.0).context(WriteHeaderSnafu { tag })?;
        buf.write_u16(tag.1).context(WriteHeaderSnafu { tag })?;

        if tag.0 == 0xFFFE {
            // item and delimiters have no VR
            buf.write_u32(de.len.0).context(WriteHeaderSnafu { tag })?;
        } else if de.vr.has_short_length() {
            ensure!(
                de.len.0 <= u32::from(u16::MAX),
                ValueTooLongSnafu {
                    tag,
                    vr: de.vr,
                    len: de.len
                }
            );
            buf.write_all(&de.vr.to_bytes())
                .context(WriteHeaderSnafu { tag })?;
            buf.write_u16(de.len.0 as u16)
                .context(WriteHeaderSnafu { tag })?;
        } else {
            buf.write_all(&de.vr.to_bytes())
                .context(WriteHeaderSnafu { tag })?;
            buf.write_all(&[0, 0]).context(WriteHeaderSnafu { tag })?;
            buf.write_u32(de.len.0).context(WriteHeaderSnafu { tag })?;
        }

        let buf = buf.into_inner();
        to.write_all(&buf).context(WriteHeaderSnafu { tag })?;
        Ok(buf.len())
    }
}
