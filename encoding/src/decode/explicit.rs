//! Explicit VR syntax transfer implementation,
//! in either byte order.

use crate::decode::{
    BadSequenceHeaderSnafu, Decode, DecodeFrom, ReadHeaderTagSnafu, ReadItemHeaderSnafu,
    ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu, ReadVrSnafu, Result,
};
use byteordered::{ByteOrdered, Endianness};
use p10_core::header::{DataElementHeader, Length, SequenceItemHeader};
use p10_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR transfer syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVRDecoder {
    endianness: Endianness,
}

impl Default for ExplicitVRDecoder {
    fn default() -> Self {
        ExplicitVRDecoder::little_endian()
    }
}

impl ExplicitVRDecoder {
    /// Create a decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVRDecoder { endianness }
    }

    /// Create a decoder for Explicit VR Little Endian.
    pub fn little_endian() -> Self {
        Self::new(Endianness::Little)
    }

    /// Create a decoder for Explicit VR Big Endian.
    pub fn big_endian() -> Self {
        Self::new(Endianness::Big)
    }

    /// The byte order expected by this decoder.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}

impl Decode for ExplicitVRDecoder {
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let mut source = ByteOrdered::runtime(source, self.endianness);

        // retrieve tag
        let group = source.read_u16().context(ReadHeaderTagSnafu)?;
        let element = source.read_u16().context(ReadHeaderTagSnafu)?;

        if group == 0xFFFE {
            // item delimiters do not have VR or reserved field
            let len = source.read_u32().context(ReadItemLengthSnafu)?;
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        let mut vr = [0u8; 2];
        source.read_exact(&mut vr).context(ReadVrSnafu)?;
        let vr = VR::from_binary(vr).unwrap_or(VR::UN);

        // PS3.5 7.1.2: short VRs have a 16-bit length right after the VR,
        // all other VRs have 2 reserved bytes and a 32-bit length
        if vr.has_short_length() {
            let len = source.read_u16().context(ReadLengthSnafu)?;
            Ok((
                DataElementHeader::new((group, element), vr, Length(u32::from(len))),
                8,
            ))
        } else {
            let mut reserved = [0u8; 2];
            source.read_exact(&mut reserved).context(ReadReservedSnafu)?;
            let len = source.read_u32().context(ReadLengthSnafu)?;
            Ok((
                DataElementHeader::new((group, element), vr, Length(len)),
                12,
            ))
        }
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        let mut buf = ByteOrdered::runtime(&buf[..], self.endianness);
        let group = buf.read_u16().context(ReadItemHeaderSnafu)?;
        let element = buf.read_u16().context(ReadItemHeaderSnafu)?;
        let len = buf.read_u32().context(ReadItemHeaderSnafu)?;

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut source = ByteOrdered::runtime(source, self.endianness);
        let group = source.read_u16().context(ReadTagSnafu)?;
        let element = source.read_u16().context(ReadTagSnafu)?;
        Ok(Tag(group, element))
    }
}

impl<S: ?Sized> DecodeFrom<S> for ExplicitVRDecoder
where
    S: Read,
{
    #[inline]
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        Decode::decode_header(self, source)
    }

    #[inline]
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        Decode::decode_item_header(self, source)
    }

    #[inline]
    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        Decode::decode_tag(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRDecoder;
    use crate::decode::Decode;
    use p10_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use p10_core::{Tag, VR};

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW_LE: &[u8] = &[
        0x02, 0x00, 0x10, 0x00,     // (0002,0010) (LE) Transfer Syntax UID
            b'U', b'I',             // VR: UI (UID)
            0x14, 0x00,             // Length: 20 bytes (LE)
                // UID: 1.2.840.10008.1.2.1 (ExplicitVRLittleEndian)
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'1', b'.', b'2', b'.', b'1',
                0x00,               // Padding to make length even
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) (LE) Referenced Series Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x0A, 0x00, 0x00, 0x00, // Length: 10
        0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
    ];

    #[rustfmt::skip]
    const RAW_BE: &[u8] = &[
        0x00, 0x28, 0x00, 0x10,     // (0028,0010) (BE) Rows
            b'U', b'S',             // VR: US
            0x00, 0x02,             // Length: 2 (BE)
                0x02, 0x00,         // 512
        0x7F, 0xE0, 0x00, 0x10,     // (7FE0,0010) (BE) Pixel Data
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // Reserved
            0x00, 0x00, 0x00, 0x04, // Length: 4 (BE)
    ];

    #[test]
    fn decode_explicit_vr_le() {
        let reader = ExplicitVRDecoder::little_endian();
        let mut source = RAW_LE;

        let (elem, bytes_read) = reader
            .decode_header(&mut source)
            .expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0002, 0x0010));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(20));
        assert_eq!(bytes_read, 8);
        assert_eq!(&source[..20], b"1.2.840.10008.1.2.1\0");
        source = &source[20..];

        let (elem, bytes_read) = reader
            .decode_header(&mut source)
            .expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0008, 0x1115));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let item = reader
            .decode_item_header(&mut source)
            .expect("should find an item header");
        assert_eq!(item, SequenceItemHeader::Item { len: Length(10) });

        // delimiters are read as headers with VR UN
        let (elem, bytes_read) = reader
            .decode_header(&mut source)
            .expect("should find a delimiter");
        assert!(elem.is_sequence_delimiter());
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(bytes_read, 8);
        assert!(source.is_empty());
    }

    #[test]
    fn decode_explicit_vr_be() {
        let reader = ExplicitVRDecoder::big_endian();
        let mut source = RAW_BE;

        let (elem, bytes_read) = reader.decode_header(&mut source).unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.vr(), VR::US);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(bytes_read, 8);
        source = &source[2..];

        let (elem, bytes_read) = reader.decode_header(&mut source).unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.length(), Length(4));
        assert_eq!(bytes_read, 12);
    }

    #[test]
    fn truncated_header_is_eof() {
        let reader = ExplicitVRDecoder::little_endian();
        let mut source = &RAW_LE[..6];
        let err = reader.decode_header(&mut source).unwrap_err();
        assert!(err.is_eof());
    }
}
