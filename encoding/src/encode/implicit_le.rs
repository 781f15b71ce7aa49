//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::{Encode, Result, WriteHeaderSnafu};
use byteordered::byteorder::{LittleEndian, WriteBytesExt};
use byteordered::Endianness;
use p10_core::header::DataElementHeader;
use snafu::ResultExt;
use std::io::Write;

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitVRLittleEndianEncoder;

impl Encode for ImplicitVRLittleEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        let tag = de.tag;
        let mut buf = [0u8; 8];
        {
            let mut buf = &mut buf[..];
            buf.write_u16::<LittleEndian>(tag.0)
                .context(WriteHeaderSnafu { tag })?;
            buf.write_u16::<LittleEndian>(tag.1)
                .context(WriteHeaderSnafu { tag })?;
            buf.write_u32::<LittleEndian>(de.len.0)
                .context(WriteHeaderSnafu { tag })?;
        }
        to.write_all(&buf).context(WriteHeaderSnafu { tag })?;
        Ok(8)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianEncoder;
    use crate::encode::Encode;
    use p10_core::header::{DataElementHeader, Length};
    use p10_core::{Tag, VR};

    #[test]
    fn encode_implicit_vr_le() {
        let enc = ImplicitVRLittleEndianEncoder;
        let mut out = Vec::new();
        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8)),
            )
            .unwrap();
        assert_eq!(n, 8);
        assert_eq!(out, &[0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00]);
    }
}
