//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::{
    BadSequenceHeaderSnafu, Decode, DecodeFrom, ReadHeaderTagSnafu, ReadItemHeaderSnafu,
    ReadLengthSnafu, ReadTagSnafu, Result,
};
use byteordered::byteorder::{LittleEndian, ReadBytesExt};
use p10_core::dictionary::DataDictionary;
use p10_core::header::{DataElementHeader, Length, SequenceItemHeader};
use p10_core::{Tag, VR};
use p10_dictionary::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains an attribute dictionary for resolving
/// value representations.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder { dict: dictionary }
    }

    /// Resolve the value representation of an element
    /// whose header does not carry one.
    pub fn resolve_vr(&self, tag: Tag) -> VR {
        // The VR of OW must be used for Pixel Data (7FE0,0010)
        // and Overlay Data (60xx,3000) in Implicit VR Little Endian.
        if tag == Tag::PIXEL_DATA || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
            VR::OW
        } else if tag.0 == 0xFFFE {
            VR::UN
        } else {
            self.dict.vr_of(tag).unwrap_or(VR::UN)
        }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let group = source
            .read_u16::<LittleEndian>()
            .context(ReadHeaderTagSnafu)?;
        let element = source
            .read_u16::<LittleEndian>()
            .context(ReadHeaderTagSnafu)?;
        let len = source.read_u32::<LittleEndian>().context(ReadLengthSnafu)?;

        let tag = Tag(group, element);
        let vr = self.resolve_vr(tag);
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        let mut buf = &buf[..];
        let group = buf
            .read_u16::<LittleEndian>()
            .context(ReadItemHeaderSnafu)?;
        let element = buf
            .read_u16::<LittleEndian>()
            .context(ReadItemHeaderSnafu)?;
        let len = buf
            .read_u32::<LittleEndian>()
            .context(ReadItemHeaderSnafu)?;
        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let group = source.read_u16::<LittleEndian>().context(ReadTagSnafu)?;
        let element = source.read_u16::<LittleEndian>().context(ReadTagSnafu)?;
        Ok(Tag(group, element))
    }
}

impl<S: ?Sized, D> DecodeFrom<S> for ImplicitVRLittleEndianDecoder<D>
where
    S: Read,
    D: DataDictionary,
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
    use super::{ImplicitVRLittleEndianDecoder, StandardImplicitVRLittleEndianDecoder};
    use crate::decode::Decode;
    use p10_core::dictionary::StubDataDictionary;
    use p10_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use p10_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            0x08, 0x00, 0x00, 0x00, // Length: 8
                b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0xAB, 0xCD,
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x01, 0x02, 0x03, 0x04,
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
    ];

    #[test]
    fn decode_with_standard_dictionary() {
        let dec = StandardImplicitVRLittleEndianDecoder::default();
        let mut source = RAW;

        let (elem, bytes_read) = dec.decode_header(&mut source).unwrap();
        assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.length(), Length(8));
        assert_eq!(bytes_read, 8);
        source = &source[8..];

        // unknown to the dictionary
        let (elem, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(elem.tag(), Tag(0x0009, 0x1010));
        assert_eq!(elem.vr(), VR::UN);
        source = &source[2..];

        let (elem, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(elem.tag(), Tag::PIXEL_DATA);
        assert_eq!(elem.vr(), VR::OW);
        source = &source[4..];

        let item = dec.decode_item_header(&mut source).unwrap();
        assert_eq!(
            item,
            SequenceItemHeader::Item {
                len: Length::UNDEFINED
            }
        );
        assert!(item.is_item());
    }

    #[test]
    fn stub_dictionary_resolves_to_un() {
        let dec = ImplicitVRLittleEndianDecoder::with_dict(StubDataDictionary);
        assert_eq!(dec.resolve_vr(Tag(0x0010, 0x0010)), VR::UN);
        assert_eq!(dec.resolve_vr(Tag(0x6002, 0x3000)), VR::OW);
        assert_eq!(dec.resolve_vr(Tag::PIXEL_DATA), VR::OW);
    }
}
