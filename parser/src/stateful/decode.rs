//! This module provides the element level of reading a DICOM data set:
//! decoding one header or one value at a time
//! from an in-memory byte source,
//! while keeping track of the reading position.

use p10_core::header::{DataElementHeader, HasLength, Header, SequenceItemHeader};
use p10_core::{PrimitiveValue, Tag};
use p10_encoding::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use p10_encoding::decode::Error as DecodeError;
use p10_encoding::transfer_syntax::{DynDecoder, TransferSyntax};
use p10_encoding::value::Error as ValueError;
use p10_encoding::text::SpecificCharacterSet;
use p10_encoding::{decode_value, Endianness};
use snafu::{Backtrace, OptionExt, Snafu};
use std::fmt;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Truncated value at offset {:#x}: needed {} bytes, {} available",
        offset,
        needed,
        available
    ))]
    TruncatedValue {
        offset: u64,
        needed: u64,
        available: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode element header at offset {:#x}", offset))]
    DecodeHeader {
        offset: u64,
        #[snafu(backtrace)]
        source: DecodeError,
    },
    #[snafu(display("Undefined length of primitive value {} at offset {:#x}", tag, offset))]
    UndefinedValueLength {
        tag: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode value of {} at offset {:#x}", tag, offset))]
    DecodeValue {
        tag: Tag,
        offset: u64,
        #[snafu(backtrace)]
        source: ValueError,
    },
}

impl Error {
    /// The byte offset in the source where the error was found.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::UnsupportedTransferSyntax { .. } => None,
            Error::TruncatedValue { offset, .. }
            | Error::DecodeHeader { offset, .. }
            | Error::UndefinedValueLength { offset, .. }
            | Error::DecodeValue { offset, .. } => Some(*offset),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The header decoding rules in effect.
struct Syntax<'a> {
    decoder: DynDecoder<'a, &'a [u8]>,
    endianness: Endianness,
    explicit_vr: bool,
}

/// A stateful decoder of data elements over an in-memory source.
///
/// Each call consumes exactly one header, item header or value,
/// and the absolute position is kept so that errors and warnings
/// can name the offending byte offset.
pub struct StatefulDecoder<'a> {
    source: &'a [u8],
    position: usize,
    base_offset: u64,
    syntax: Syntax<'a>,
    /// syntaxes to restore, see `enter_implicit_vr_le`
    saved: Vec<Syntax<'a>>,
    /// the repertoire of text values
    charset: SpecificCharacterSet,
}

impl fmt::Debug for StatefulDecoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StatefulDecoder")
            .field("len", &self.source.len())
            .field("position", &self.position)
            .field("base_offset", &self.base_offset)
            .field("endianness", &self.syntax.endianness)
            .field("explicit_vr", &self.syntax.explicit_vr)
            .field("charset", &self.charset)
            .finish()
    }
}

impl<'a> StatefulDecoder<'a> {
    /// Create a new decoder of the given source,
    /// encoded in the given transfer syntax.
    ///
    /// `base_offset` is the position of `source` in the enclosing file,
    /// and is added to every offset reported.
    pub fn new_with(source: &'a [u8], ts: &TransferSyntax, base_offset: u64) -> Result<Self> {
        let decoder = ts
            .decoder()
            .context(UnsupportedTransferSyntaxSnafu { uid: ts.uid() })?;
        Ok(StatefulDecoder {
            source,
            position: 0,
            base_offset,
            syntax: Syntax {
                decoder,
                endianness: ts.endianness(),
                explicit_vr: ts.is_explicit_vr(),
            },
            saved: Vec::new(),
            charset: SpecificCharacterSet::Default,
        })
    }

    /// The absolute offset of the next byte to read.
    #[inline]
    pub fn position(&self) -> u64 {
        self.base_offset + self.position as u64
    }

    /// The number of bytes left in the source.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position
    }

    /// Whether the whole source has been read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The byte order of values in the current syntax.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.syntax.endianness
    }

    /// Whether the current syntax has explicit value representations.
    #[inline]
    pub fn is_explicit_vr(&self) -> bool {
        self.syntax.explicit_vr
    }

    /// The character repertoire in which text values are read.
    #[inline]
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.charset
    }

    /// Read the following text values in the given repertoire.
    #[inline]
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.charset = charset;
    }

    /// Switch to Implicit VR Little Endian until the matching
    /// [`leave_implicit_vr_le`](Self::leave_implicit_vr_le).
    ///
    /// The content of a UN element with undefined length
    /// is encoded in this syntax regardless of the transfer syntax.
    pub fn enter_implicit_vr_le(&mut self) {
        let implicit = Syntax {
            decoder: Box::new(StandardImplicitVRLittleEndianDecoder::default()),
            endianness: Endianness::Little,
            explicit_vr: false,
        };
        let previous = std::mem::replace(&mut self.syntax, implicit);
        self.saved.push(previous);
    }

    /// Restore the syntax in effect before the last
    /// [`enter_implicit_vr_le`](Self::enter_implicit_vr_le).
    pub fn leave_implicit_vr_le(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.syntax = previous;
        }
    }

    fn truncated<T>(&self, needed: usize) -> Result<T> {
        TruncatedValueSnafu {
            offset: self.position(),
            needed: needed as u64,
            available: self.remaining() as u64,
        }
        .fail()
    }

    /// Decode the next data element header.
    ///
    /// Returns the header and the offset where it starts.
    pub fn decode_header(&mut self) -> Result<(DataElementHeader, u64)> {
        let offset = self.position();
        let source: &'a [u8] = self.source;
        let mut rest: &'a [u8] = &source[self.position..];
        match self.syntax.decoder.decode_header(&mut rest) {
            Ok((header, bytes_read)) => {
                self.position += bytes_read;
                Ok((header, offset))
            }
            // a header cut short is a truncated element
            Err(e) if e.is_eof() => self.truncated(8),
            Err(source) => Err(Error::DecodeHeader { offset, source }),
        }
    }

    /// Decode the next item header or sequence delimiter.
    ///
    /// Returns the header and the offset where it starts.
    pub fn decode_item_header(&mut self) -> Result<(SequenceItemHeader, u64)> {
        let offset = self.position();
        let source: &'a [u8] = self.source;
        let mut rest: &'a [u8] = &source[self.position..];
        match self.syntax.decoder.decode_item_header(&mut rest) {
            Ok(header) => {
                self.position += 8;
                Ok((header, offset))
            }
            Err(e) if e.is_eof() => self.truncated(8),
            Err(source) => Err(Error::DecodeHeader { offset, source }),
        }
    }

    /// Read the raw value bytes of the element with the given header.
    pub fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<&'a [u8]> {
        let len = header.length().get().context(UndefinedValueLengthSnafu {
            tag: header.tag(),
            offset: self.position(),
        })? as usize;
        self.read_bytes(len)
    }

    /// Read the given number of raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return self.truncated(len);
        }
        let source: &'a [u8] = self.source;
        let bytes = &source[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Read and interpret the value of the element with the given header.
    pub fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let offset = self.position();
        let bytes = self.read_value_bytes(header)?;
        decode_value(header.vr(), bytes, self.syntax.endianness, self.charset).map_err(
            |source| Error::DecodeValue {
                tag: header.tag(),
                offset,
                source,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, StatefulDecoder};
    use p10_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use p10_core::{PrimitiveValue, Tag, VR};
    use p10_encoding::text::SpecificCharacterSet;
    use p10_encoding::transfer_syntax::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
            b'C', b'S',             // VR: CS
            0x02, 0x00,             // Length: 2
                b'M', b'R',
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
            b'U', b'S',             // VR: US
            0x02, 0x00,             // Length: 2
                0x00, 0x02,         // 512
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N',             // VR: PN
            0x08, 0x00,             // Length: 8
                b'D', b'o', b'e',   // ... only 3 bytes
    ];

    #[test]
    fn reads_elements_in_sequence() {
        let mut decoder = StatefulDecoder::new_with(RAW, &EXPLICIT_VR_LITTLE_ENDIAN, 132).unwrap();

        let (header, offset) = decoder.decode_header().unwrap();
        assert_eq!(offset, 132);
        assert_eq!(header.tag(), Tag(0x0008, 0x0060));
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from("MR"));
        assert_eq!(decoder.position(), 142);

        let (header, _) = decoder.decode_header().unwrap();
        assert_eq!(header.vr(), VR::US);
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from(512_u16));

        let (header, offset) = decoder.decode_header().unwrap();
        assert_eq!(offset, 152);
        assert_eq!(header.length(), Length(8));
        match decoder.read_value(&header) {
            Err(Error::TruncatedValue {
                offset,
                needed,
                available,
                ..
            }) => {
                assert_eq!(offset, 160);
                assert_eq!(needed, 8);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn truncated_header() {
        let mut decoder = StatefulDecoder::new_with(&RAW[..4], &EXPLICIT_VR_LITTLE_ENDIAN, 0).unwrap();
        let err = decoder.decode_header().unwrap_err();
        assert!(matches!(err, Error::TruncatedValue { offset: 0, .. }));
    }

    #[test]
    fn big_endian_values() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x28, 0x00, 0x11, b'U', b'S', 0x00, 0x02, 0x01, 0x00,
        ];
        let mut decoder = StatefulDecoder::new_with(raw, &EXPLICIT_VR_BIG_ENDIAN, 0).unwrap();
        let (header, _) = decoder.decode_header().unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0011));
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from(256_u16));
        assert!(decoder.is_exhausted());
    }

    #[test]
    fn switch_to_implicit_vr() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, 0x0E, 0x00, 0x00, 0x00, // item, 14 bytes
            0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, // (0008,0060), 2 bytes
                b'C', b'T',
        ];
        let mut decoder = StatefulDecoder::new_with(raw, &EXPLICIT_VR_LITTLE_ENDIAN, 0).unwrap();
        decoder.enter_implicit_vr_le();
        assert!(!decoder.is_explicit_vr());
        let (item, _) = decoder.decode_item_header().unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(14) });
        let (header, _) = decoder.decode_header().unwrap();
        assert_eq!(header.vr(), VR::CS);
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from("CT"));
        decoder.leave_implicit_vr_le();
        assert!(decoder.is_explicit_vr());
    }

    #[test]
    fn implicit_vr_syntax() {
        let decoder = StatefulDecoder::new_with(&[], &IMPLICIT_VR_LITTLE_ENDIAN, 0).unwrap();
        assert!(!decoder.is_explicit_vr());
        assert!(decoder.is_exhausted());
    }

    #[test]
    fn text_in_declared_repertoire() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x06, 0x00, // (0010,0010) PN, 6 bytes
                b'R', b'e', b'n', 0xC3, 0xA9, b' ',
        ];
        let mut decoder = StatefulDecoder::new_with(raw, &EXPLICIT_VR_LITTLE_ENDIAN, 0).unwrap();
        assert_eq!(decoder.character_set(), SpecificCharacterSet::Default);
        decoder.set_character_set(SpecificCharacterSet::IsoIr192);
        let (header, _) = decoder.decode_header().unwrap();
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from("René"));
    }
}
