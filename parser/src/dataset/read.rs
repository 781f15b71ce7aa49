//! This module contains the data set reader,
//! which drives the element decoder across a whole data set
//! and builds the in-memory element tree.
//!
//! Sequences are read recursively, up to the configured nesting level.
//! Recoverable deviations are collected as [`Warning`]s,
//! whereas structural failures abort the read.

use crate::options::ParseOptions;
use crate::stateful::decode::{Error as DecoderError, StatefulDecoder};
use crate::warning::{Parsed, Warning, WarningKind};
use p10_core::header::{DataElementHeader, Header, Length, SequenceItemHeader};
use p10_core::value::{DataSetSequence, PixelFragmentSequence, C};
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, Value, VR};
use p10_encoding::decode_value;
use p10_encoding::text::SpecificCharacterSet;
use p10_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{trace, warn};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not create decoder"))]
    CreateDecoder {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read data element"))]
    ReadElement {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display(
        "Tag {} at offset {:#x} is not greater than the previous tag {}",
        tag,
        offset,
        previous
    ))]
    OutOfOrderTag {
        tag: Tag,
        previous: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Sequence at offset {:#x} is nested {} levels deep", offset, depth))]
    SequenceTooDeep {
        depth: u32,
        offset: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected item tag {} at offset {:#x}", tag, offset))]
    UnexpectedItemTag {
        tag: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Inconsistent sequence end: expected end at {:#x} but read up to {:#x}",
        end_of_sequence,
        bytes_read
    ))]
    InconsistentSequenceEnd {
        end_of_sequence: u64,
        bytes_read: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined length of pixel data item at offset {:#x}", offset))]
    UndefinedItemLength { offset: u64, backtrace: Backtrace },
    #[snafu(display("Basic offset table of {} bytes at offset {:#x}", len, offset))]
    BadOffsetTable {
        len: u32,
        offset: u64,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The byte offset in the source where the error was found.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::CreateDecoder { source } | Error::ReadElement { source } => source.offset(),
            Error::OutOfOrderTag { offset, .. }
            | Error::SequenceTooDeep { offset, .. }
            | Error::UnexpectedItemTag { offset, .. }
            | Error::UndefinedItemLength { offset, .. }
            | Error::BadOffsetTable { offset, .. } => Some(*offset),
            Error::InconsistentSequenceEnd { bytes_read, .. } => Some(*bytes_read),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where the data set being read ends.
#[derive(Debug, Copy, Clone, PartialEq)]
enum End {
    /// at the end of the source
    Source,
    /// at the given absolute position
    Position(u64),
    /// at the next item delimiter
    ItemDelimiter,
}

/// Read a full data set from the given bytes.
///
/// # Example
///
/// ```
/// # use p10_parser::{read_dataset, ParseOptions};
/// # use p10_encoding::transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN;
/// # use p10_core::Tag;
/// let bytes: &[u8] = &[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R'];
/// let parsed = read_dataset(bytes, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default())?;
/// let modality = parsed.value.element(Tag(0x0008, 0x0060))?;
/// assert_eq!(modality.value().to_str()?, "MR");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_dataset(
    source: &[u8],
    ts: &TransferSyntax,
    options: ParseOptions,
) -> Result<Parsed<DataSet>> {
    DataSetReader::new_with_ts_options(source, ts, options)?.read_to_end()
}

/// A reader of a complete data set over an in-memory source.
#[derive(Debug)]
pub struct DataSetReader<'a> {
    /// the element decoder
    decoder: StatefulDecoder<'a>,
    /// the options of this reader
    options: ParseOptions,
    /// warnings collected so far
    warnings: Vec<Warning>,
}

impl<'a> DataSetReader<'a> {
    /// Create a new data set reader with the default options.
    #[inline]
    pub fn new_with_ts(source: &'a [u8], ts: &TransferSyntax) -> Result<Self> {
        Self::new_with_ts_options(source, ts, ParseOptions::default())
    }

    /// Create a new data set reader with the given options.
    pub fn new_with_ts_options(
        source: &'a [u8],
        ts: &TransferSyntax,
        options: ParseOptions,
    ) -> Result<Self> {
        let decoder =
            StatefulDecoder::new_with(source, ts, options.base_offset).context(CreateDecoderSnafu)?;
        Ok(DataSetReader {
            decoder,
            options,
            warnings: Vec::new(),
        })
    }

    /// Read the data set until the end of the source.
    pub fn read_to_end(mut self) -> Result<Parsed<DataSet>> {
        let value = self.read_data_set(End::Source, 0)?;
        Ok(Parsed {
            value,
            warnings: self.warnings,
        })
    }

    fn warn(&mut self, kind: WarningKind, tag: Tag, offset: u64) {
        warn!("{} at {} (offset {:#x})", kind, tag, offset);
        self.warnings.push(Warning::new(kind, tag, offset));
    }

    fn read_data_set(&mut self, end: End, depth: u32) -> Result<DataSet> {
        let mut out = DataSet::new();
        let mut last_tag: Option<Tag> = None;
        // an item may declare its own character set,
        // which ends with the item
        let charset = self.decoder.character_set();

        loop {
            match end {
                End::Source if self.decoder.is_exhausted() => break,
                End::Position(end) if self.decoder.position() >= end => {
                    let bytes_read = self.decoder.position();
                    ensure!(
                        bytes_read == end,
                        InconsistentSequenceEndSnafu {
                            end_of_sequence: end,
                            bytes_read
                        }
                    );
                    break;
                }
                _ => {}
            }

            // an item delimiter missing at the end of the source
            // surfaces here as a truncated header
            let (header, offset) = self.decoder.decode_header().context(ReadElementSnafu)?;
            let tag = header.tag();
            match tag {
                Tag::ITEM_DELIMITER if end == End::ItemDelimiter => break,
                Tag::ITEM_DELIMITER | Tag::SEQUENCE_DELIMITER => {
                    self.warn(WarningKind::StrayDelimiter, tag, offset);
                    continue;
                }
                Tag::ITEM => return UnexpectedItemTagSnafu { tag, offset }.fail(),
                _ => {}
            }

            if let Some(previous) = last_tag.filter(|previous| tag <= *previous) {
                ensure!(
                    !self.options.is_strict(),
                    OutOfOrderTagSnafu {
                        tag,
                        previous,
                        offset
                    }
                );
                self.warn(WarningKind::OutOfOrderTag, tag, offset);
            }
            last_tag = Some(last_tag.map_or(tag, |previous| previous.max(tag)));

            let element = self.read_element(header, offset, depth)?;
            if tag == Tag::SPECIFIC_CHARACTER_SET && !out.contains(tag) {
                self.switch_character_set(&element, offset);
            }
            // of duplicate tags, the first occurrence is kept
            out.put_if_absent(element);
        }

        self.decoder.set_character_set(charset);
        Ok(out)
    }

    /// Read the following text in the repertoire declared by
    /// a Specific Character Set element.
    ///
    /// Only the first value is considered,
    /// as code extensions are not supported.
    fn switch_character_set(&mut self, element: &DataElement, offset: u64) {
        let code = match element.value() {
            Value::Primitive(PrimitiveValue::Strs(codes)) => {
                codes.first().map(String::as_str).unwrap_or_default()
            }
            Value::Primitive(PrimitiveValue::Str(code)) => code.as_str(),
            _ => "",
        };
        match SpecificCharacterSet::from_code(code) {
            Some(charset) => {
                trace!("Reading text in {:?}", charset);
                self.decoder.set_character_set(charset);
            }
            None => {
                self.warn(WarningKind::UnsupportedCharacterSet, element.tag(), offset);
                self.decoder.set_character_set(SpecificCharacterSet::Default);
            }
        }
    }

    fn read_element(
        &mut self,
        header: DataElementHeader,
        offset: u64,
        depth: u32,
    ) -> Result<DataElement> {
        let tag = header.tag();

        if header.is_encapsulated_pixeldata() {
            let fragments = self.read_pixel_sequence()?;
            return Ok(DataElement::new(tag, header.vr(), fragments));
        }

        if header.is_non_primitive() {
            ensure!(
                depth < self.options.max_depth,
                SequenceTooDeepSnafu {
                    depth: depth + 1,
                    offset
                }
            );
            trace!("Entering sequence {} at depth {}", tag, depth + 1);

            // PS3.5 6.2.2: the content of UN with undefined length
            // is encoded in Implicit VR Little Endian
            let implicit_un =
                header.vr() == VR::UN && header.len.is_undefined() && self.decoder.is_explicit_vr();
            if implicit_un {
                self.decoder.enter_implicit_vr_le();
            }
            let items = self.read_sequence(header.len, depth + 1);
            if implicit_un {
                self.decoder.leave_implicit_vr_le();
            }
            return Ok(DataElement::new(tag, VR::SQ, items?));
        }

        if header.vr() == VR::UN && !self.decoder.is_explicit_vr() {
            self.warn(WarningKind::UnknownTag, tag, offset);
        }

        let bytes = self
            .decoder
            .read_value_bytes(&header)
            .context(ReadElementSnafu)?;
        let value = match decode_value(
            header.vr(),
            bytes,
            self.decoder.endianness(),
            self.decoder.character_set(),
        ) {
            Ok(value) => value,
            Err(e) => {
                trace!("Keeping raw value of {}: {}", tag, e);
                self.warn(WarningKind::MalformedValue, tag, offset);
                PrimitiveValue::U8(C::from_slice(bytes))
            }
        };
        Ok(DataElement::new(tag, header.vr(), value))
    }

    fn read_sequence(&mut self, len: Length, depth: u32) -> Result<DataSetSequence> {
        let mut items = Vec::new();

        if let Some(byte_len) = len.get() {
            let end = self.decoder.position() + u64::from(byte_len);
            while self.decoder.position() < end {
                let (item, offset) = self
                    .decoder
                    .decode_item_header()
                    .context(ReadElementSnafu)?;
                match item {
                    SequenceItemHeader::Item { len } => items.push(self.read_item(len, depth)?),
                    other => self.warn(WarningKind::StrayDelimiter, other.tag(), offset),
                }
            }
            let bytes_read = self.decoder.position();
            ensure!(
                bytes_read == end,
                InconsistentSequenceEndSnafu {
                    end_of_sequence: end,
                    bytes_read
                }
            );
        } else {
            loop {
                let (item, offset) = self
                    .decoder
                    .decode_item_header()
                    .context(ReadElementSnafu)?;
                match item {
                    SequenceItemHeader::Item { len } => items.push(self.read_item(len, depth)?),
                    SequenceItemHeader::ItemDelimiter => {
                        self.warn(WarningKind::StrayDelimiter, Tag::ITEM_DELIMITER, offset)
                    }
                    SequenceItemHeader::SequenceDelimiter => break,
                }
            }
        }

        Ok(DataSetSequence::new(items, len))
    }

    fn read_item(&mut self, len: Length, depth: u32) -> Result<DataSet> {
        let end = match len.get() {
            Some(len) => End::Position(self.decoder.position() + u64::from(len)),
            None => End::ItemDelimiter,
        };
        let mut item = self.read_data_set(end, depth)?;
        item.set_length(len);
        Ok(item)
    }

    fn read_pixel_sequence(&mut self) -> Result<PixelFragmentSequence> {
        let mut offset_table: Option<C<u32>> = None;
        let mut fragments = C::new();

        loop {
            let (item, offset) = self
                .decoder
                .decode_item_header()
                .context(ReadElementSnafu)?;
            let len = match item {
                SequenceItemHeader::Item { len } => {
                    len.get().context(UndefinedItemLengthSnafu { offset })?
                }
                SequenceItemHeader::ItemDelimiter => {
                    self.warn(WarningKind::StrayDelimiter, Tag::ITEM_DELIMITER, offset);
                    continue;
                }
                SequenceItemHeader::SequenceDelimiter => break,
            };
            let bytes = self
                .decoder
                .read_bytes(len as usize)
                .context(ReadElementSnafu)?;

            if offset_table.is_none() {
                // the first item is the basic offset table
                ensure!(len % 4 == 0, BadOffsetTableSnafu { len, offset });
                offset_table = Some(
                    bytes
                        .chunks_exact(4)
                        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                );
            } else {
                fragments.push(bytes.to_vec());
            }
        }

        Ok(PixelFragmentSequence::new(
            offset_table.unwrap_or_default(),
            fragments,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{read_dataset, Error};
    use crate::options::{Conformance, ParseOptions};
    use crate::stateful::decode::Error as DecoderError;
    use crate::warning::WarningKind;
    use p10_core::header::{HasLength, Length};
    use p10_core::{Tag, Value, VR};
    use p10_encoding::transfer_syntax::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};

    #[rustfmt::skip]
    const SEQUENCES: &[u8] = &[
        0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
                b'M', b'R',
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
            0xFE, 0xFF, 0x00, 0xE0, // Item
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
                0x20, 0x00, 0x0E, 0x00, // (0020,000E) Series Instance UID
                    b'U', b'I', 0x06, 0x00,
                        b'1', b'.', b'2', b'.', b'3', 0x00,
            0xFE, 0xFF, 0x0D, 0xE0, // Item Delimitation Item
            0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, // Item
            0x0A, 0x00, 0x00, 0x00, // length 10
                0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
                    b'C', b'S', 0x02, 0x00,
                        b'C', b'T',
            0xFE, 0xFF, 0xDD, 0xE0, // Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N', 0x08, 0x00,
                b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
    ];

    #[test]
    fn read_nested_sequences() {
        let parsed =
            read_dataset(SEQUENCES, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        assert!(parsed.is_clean());
        let ds = parsed.value;
        assert_eq!(ds.len(), 3);

        let seq = ds.element(Tag(0x0008, 0x1115)).unwrap();
        assert_eq!(seq.vr(), VR::SQ);
        let items = seq.value().items().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].length().is_undefined());
        assert_eq!(
            items[0]
                .element(Tag(0x0020, 0x000E))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "1.2.3"
        );
        assert_eq!(items[1].length(), Length(10));
        assert_eq!(
            items[1]
                .element(Tag(0x0008, 0x0060))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "CT"
        );
        assert_eq!(
            ds.element(Tag(0x0010, 0x0010))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "Doe^John"
        );
    }

    #[rustfmt::skip]
    const DECREASING: &[u8] = &[
        0x08, 0x00, 0x10, 0x00,     // (0008,0010)
            b'S', b'H', 0x02, 0x00,
                b'A', b'B',
        0x08, 0x00, 0x05, 0x00,     // (0008,0005) Specific Character Set
            b'C', b'S', 0x0A, 0x00,
                b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        0x08, 0x00, 0x10, 0x00,     // (0008,0010) again
            b'S', b'H', 0x02, 0x00,
                b'X', b'Y',
    ];

    #[test]
    fn out_of_order_strict() {
        let options = ParseOptions::default().conformance(Conformance::Strict);
        let err = read_dataset(DECREASING, &EXPLICIT_VR_LITTLE_ENDIAN, options).unwrap_err();
        match err {
            Error::OutOfOrderTag {
                tag,
                previous,
                offset,
                ..
            } => {
                assert_eq!(tag, Tag(0x0008, 0x0005));
                assert_eq!(previous, Tag(0x0008, 0x0010));
                assert_eq!(offset, 10);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn out_of_order_lenient() {
        let parsed =
            read_dataset(DECREASING, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.warnings.len(), 2);
        assert!(parsed
            .warnings
            .iter()
            .all(|w| w.kind == WarningKind::OutOfOrderTag));
        assert_eq!(parsed.warnings[0].offset, Some(10));
        let ds = parsed.value;
        assert_eq!(ds.len(), 2);
        // the first occurrence wins
        assert_eq!(
            ds.element(Tag(0x0008, 0x0010))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "AB"
        );
    }

    #[test]
    fn missing_delimiters_are_truncation() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
        ];
        let err = read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ReadElement {
                source: DecoderError::TruncatedValue { offset: 30, .. }
            }
        ));
        assert_eq!(err.offset(), Some(30));
    }

    #[test]
    fn nesting_limit() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let options = ParseOptions::default().max_depth(1);
        let err = read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, options).unwrap_err();
        assert!(matches!(
            err,
            Error::SequenceTooDeep {
                depth: 2,
                offset: 20,
                ..
            }
        ));
    }

    #[test]
    fn unknown_tags_in_implicit_vr() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, 0x02, 0x00, 0x00, 0x00, // (0009,1010)
                0xAB, 0xCD,
            0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, // (0010,0010)
                b'D', b'o', b'e', b' ',
        ];
        let parsed =
            read_dataset(raw, &IMPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].kind, WarningKind::UnknownTag);
        assert_eq!(parsed.warnings[0].tag, Some(Tag(0x0009, 0x1010)));
        let ds = parsed.value;
        let private = ds.element(Tag(0x0009, 0x1010)).unwrap();
        assert_eq!(private.vr(), VR::UN);
        assert_eq!(private.value().primitive().unwrap().to_bytes().as_ref(), &[0xAB, 0xCD]);
        let name = ds.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.vr(), VR::PN);
        assert_eq!(name.value().to_str().unwrap(), "Doe");
    }

    #[test]
    fn encapsulated_pixel_data() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, // basic offset table
                0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, // fragment
                0xFF, 0xD8, 0xFF, 0xD9,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let parsed =
            read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        let pixel_data = parsed.value.element(Tag::PIXEL_DATA).unwrap();
        match pixel_data.value() {
            Value::PixelSequence(seq) => {
                assert_eq!(seq.offset_table(), &[0_u32]);
                assert_eq!(seq.fragments(), &[vec![0xFF_u8, 0xD8, 0xFF, 0xD9]]);
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn stray_delimiters_are_skipped() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
        ];
        let parsed =
            read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].kind, WarningKind::StrayDelimiter);
        assert_eq!(parsed.warnings[0].offset, Some(0));
        assert_eq!(parsed.value.len(), 1);
    }

    #[test]
    fn unknown_vr_with_undefined_length() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, b'U', b'N', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T',
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'D', b'o', b'e', b' ',
        ];
        let parsed =
            read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        let ds = parsed.value;
        let seq = ds.element(Tag(0x0009, 0x1010)).unwrap();
        assert_eq!(seq.vr(), VR::SQ);
        let items = seq.value().items().unwrap();
        assert_eq!(items.len(), 1);
        let modality = items[0].element(Tag(0x0008, 0x0060)).unwrap();
        assert_eq!(modality.vr(), VR::CS);
        assert_eq!(modality.value().to_str().unwrap(), "CT");
        // back to explicit VR after the sequence
        assert_eq!(ds.element(Tag(0x0010, 0x0010)).unwrap().vr(), VR::PN);
    }

    #[test]
    fn item_overruns_its_length() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0x12, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00, // claims 8 bytes
                0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T', // has 10
        ];
        let err = read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentSequenceEnd {
                end_of_sequence: 28,
                bytes_read: 30,
                ..
            }
        ));
    }

    #[rustfmt::skip]
    const CHARACTER_SETS: &[u8] = &[
        0x08, 0x00, 0x05, 0x00,     // (0008,0005) Specific Character Set
            b'C', b'S', 0x0A, 0x00,
                b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
            0xFE, 0xFF, 0x00, 0xE0, // Item
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
                0x08, 0x00, 0x05, 0x00, // (0008,0005) Specific Character Set
                    b'C', b'S', 0x0A, 0x00,
                        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'9', b'2',
                0x10, 0x00, 0x10, 0x00, // (0010,0010) Patient Name
                    b'P', b'N', 0x06, 0x00,
                        b'R', b'e', b'n', 0xC3, 0xA9, b' ',
            0xFE, 0xFF, 0x0D, 0xE0, // Item Delimitation Item
            0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, // Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N', 0x04, 0x00,
                b'R', b'e', b'n', 0xE9,
    ];

    #[test]
    fn text_in_declared_character_set() {
        let parsed = read_dataset(
            CHARACTER_SETS,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            ParseOptions::default(),
        )
        .unwrap();
        assert!(parsed.is_clean());
        let ds = parsed.value;

        let items = ds.element(Tag(0x0008, 0x1115)).unwrap().value().items().unwrap();
        let name = items[0].element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.value().to_str().unwrap(), "René");
        // the item's character set ends with the item
        let name = ds.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.value().to_str().unwrap(), "René");
    }

    #[test]
    fn unsupported_character_set() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0E, 0x00,
                b'I', b'S', b'O', b' ', b'2', b'0', b'2', b'2', b' ', b'I', b'R', b' ', b'8', b'7',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00,
                b'R', b'e', b'n', 0xE9,
        ];
        let parsed =
            read_dataset(raw, &EXPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].kind, WarningKind::UnsupportedCharacterSet);
        assert_eq!(parsed.warnings[0].tag, Some(Tag(0x0008, 0x0005)));
        assert_eq!(parsed.warnings[0].offset, Some(0));
        let name = parsed.value.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.value().to_str().unwrap(), "René");
    }
}
