//! This module contains the data set writer,
//! which serializes an in-memory data set
//! in a given transfer syntax.
//!
//! Defined lengths of sequences and items are always recomputed
//! from their encoded content,
//! and group length elements are handled
//! according to the [`GroupLengthPolicy`].
//! Text is encoded in the repertoire declared by
//! the Specific Character Set of the enclosing data set.

use crate::options::{GroupLengthPolicy, WriteOptions};
use p10_core::header::{DataElementHeader, HasLength, Length};
use p10_core::value::{DataSetSequence, PixelFragmentSequence};
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, Value, VR};
use p10_encoding::encode::Error as EncodeError;
use p10_encoding::transfer_syntax::{Codec, DynEncoder, TransferSyntax};
use p10_encoding::value::Error as ValueError;
use p10_encoding::{encode_value, Endianness, SpecificCharacterSet};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{trace, warn};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not encode element header"))]
    EncodeHeader {
        #[snafu(backtrace)]
        source: EncodeError,
    },
    #[snafu(display("Could not encode value of {}", tag))]
    EncodeValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: ValueError,
    },
    /// Native pixel data in an encapsulated transfer syntax, or vice versa.
    #[snafu(display("Pixel data encapsulation does not match transfer syntax {}", uid))]
    EncapsulationMismatch {
        encapsulated: bool,
        uid: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Value of {} is too large to encode ({} bytes)", tag, len))]
    ValueTooLarge {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Serialize a data set in the given transfer syntax.
pub fn write_dataset(ds: &DataSet, ts: &TransferSyntax, options: WriteOptions) -> Result<Vec<u8>> {
    DataSetWriter::new_with_ts_options(ts, options)?.write(ds)
}

/// A writer of complete data sets to an in-memory buffer.
pub struct DataSetWriter<'w> {
    encoder: DynEncoder<'w, Vec<u8>>,
    endianness: Endianness,
    codec: Codec,
    ts_uid: &'static str,
    options: WriteOptions,
}

impl std::fmt::Debug for DataSetWriter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("DataSetWriter")
            .field("encoder", &"EncodeTo<Vec<u8>>")
            .field("endianness", &self.endianness)
            .field("codec", &self.codec)
            .field("ts_uid", &self.ts_uid)
            .field("options", &self.options)
            .finish()
    }
}

fn byte_len(tag: Tag, len: usize) -> Result<u32> {
    // the undefined length marker is not a valid byte count
    u32::try_from(len)
        .ok()
        .filter(|len| *len != u32::MAX)
        .context(ValueTooLargeSnafu { tag, len })
}

impl<'w> DataSetWriter<'w> {
    /// Create a data set writer with the default options.
    #[inline]
    pub fn new_with_ts(ts: &TransferSyntax) -> Result<Self> {
        Self::new_with_ts_options(ts, WriteOptions::default())
    }

    /// Create a data set writer with the given options.
    pub fn new_with_ts_options(ts: &TransferSyntax, options: WriteOptions) -> Result<Self> {
        let encoder = ts
            .encoder()
            .context(UnsupportedTransferSyntaxSnafu { uid: ts.uid() })?;
        Ok(DataSetWriter {
            encoder,
            endianness: ts.endianness(),
            codec: ts.codec(),
            ts_uid: ts.uid(),
            options,
        })
    }

    /// Serialize the whole data set.
    pub fn write(&self, ds: &DataSet) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_data_set(&mut out, ds, 0, SpecificCharacterSet::Default)?;
        Ok(out)
    }

    /// The character set in which the text of the given data set is written:
    /// its own Specific Character Set, or that of the enclosing data set.
    fn character_set_of(ds: &DataSet, inherited: SpecificCharacterSet) -> SpecificCharacterSet {
        let elem = match ds.element_opt(Tag::SPECIFIC_CHARACTER_SET) {
            Some(elem) => elem,
            None => return inherited,
        };
        let code = match elem.value() {
            Value::Primitive(PrimitiveValue::Strs(codes)) => {
                codes.first().map(String::as_str).unwrap_or_default()
            }
            Value::Primitive(PrimitiveValue::Str(code)) => code.as_str(),
            _ => "",
        };
        SpecificCharacterSet::from_code(code).unwrap_or_else(|| {
            warn!("Unsupported character set {:?}, writing text as is", code);
            SpecificCharacterSet::Default
        })
    }

    fn write_data_set(
        &self,
        to: &mut Vec<u8>,
        ds: &DataSet,
        depth: u32,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let charset = Self::character_set_of(ds, charset);
        let mut elements = ds.iter().peekable();
        while let Some(first) = elements.peek() {
            let group = first.tag().group();
            let mut group_buf = Vec::new();
            let mut has_group_length = false;
            while let Some(elem) = elements.next_if(|e| e.tag().group() == group) {
                if elem.tag().is_group_length() {
                    has_group_length = true;
                    continue;
                }
                self.write_element(&mut group_buf, elem, depth, charset)?;
            }

            let keep_group_length = match self.options.group_length {
                GroupLengthPolicy::Recompute => has_group_length,
                GroupLengthPolicy::Omit => has_group_length && group == 0x0002,
            };
            if keep_group_length {
                let tag = Tag(group, 0x0000);
                let len = byte_len(tag, group_buf.len())?;
                trace!("Group length of {:04X} is {}", group, len);
                let elem = DataElement::new(tag, VR::UL, PrimitiveValue::from(len));
                self.write_element(to, &elem, depth, charset)?;
            }
            to.extend_from_slice(&group_buf);
        }
        Ok(())
    }

    fn write_element(
        &self,
        to: &mut Vec<u8>,
        elem: &DataElement,
        depth: u32,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let tag = elem.tag();
        match elem.value() {
            Value::Primitive(PrimitiveValue::Empty) if elem.vr() == VR::SQ => {
                self.write_sequence(to, tag, &DataSetSequence::empty(), depth, charset)
            }
            Value::Primitive(value) => {
                ensure!(
                    depth > 0 || tag != Tag::PIXEL_DATA || !self.codec.is_encapsulated(),
                    EncapsulationMismatchSnafu {
                        encapsulated: false,
                        uid: self.ts_uid
                    }
                );
                let bytes = encode_value(value, elem.vr(), self.endianness, charset)
                    .context(EncodeValueSnafu { tag })?;
                let len = byte_len(tag, bytes.len())?;
                self.encoder
                    .encode_element_header(to, DataElementHeader::new(tag, elem.vr(), Length(len)))
                    .context(EncodeHeaderSnafu)?;
                to.extend_from_slice(&bytes);
                Ok(())
            }
            Value::Sequence(seq) => self.write_sequence(to, tag, seq, depth, charset),
            Value::PixelSequence(seq) => self.write_pixel_sequence(to, tag, seq),
        }
    }

    fn write_sequence(
        &self,
        to: &mut Vec<u8>,
        tag: Tag,
        seq: &DataSetSequence,
        depth: u32,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let mut body = Vec::new();
        for item in seq.items() {
            let mut item_body = Vec::new();
            self.write_data_set(&mut item_body, item, depth + 1, charset)?;
            if item.length().is_undefined() {
                self.encoder
                    .encode_item_header(&mut body, Length::UNDEFINED.0)
                    .context(EncodeHeaderSnafu)?;
                body.extend_from_slice(&item_body);
                self.encoder
                    .encode_item_delimiter(&mut body)
                    .context(EncodeHeaderSnafu)?;
            } else {
                let len = byte_len(Tag::ITEM, item_body.len())?;
                self.encoder
                    .encode_item_header(&mut body, len)
                    .context(EncodeHeaderSnafu)?;
                body.extend_from_slice(&item_body);
            }
        }

        let undefined = seq.length().is_undefined();
        let len = if undefined {
            Length::UNDEFINED
        } else {
            Length(byte_len(tag, body.len())?)
        };
        self.encoder
            .encode_element_header(to, DataElementHeader::new(tag, VR::SQ, len))
            .context(EncodeHeaderSnafu)?;
        to.extend_from_slice(&body);
        if undefined {
            self.encoder
                .encode_sequence_delimiter(to)
                .context(EncodeHeaderSnafu)?;
        }
        Ok(())
    }

    fn write_pixel_sequence(
        &self,
        to: &mut Vec<u8>,
        tag: Tag,
        seq: &PixelFragmentSequence,
    ) -> Result<()> {
        ensure!(
            self.codec.is_encapsulated(),
            EncapsulationMismatchSnafu {
                encapsulated: true,
                uid: self.ts_uid
            }
        );

        self.encoder
            .encode_element_header(to, DataElementHeader::new(tag, VR::OB, Length::UNDEFINED))
            .context(EncodeHeaderSnafu)?;

        // basic offset table, always little endian
        let offset_table = seq.offset_table();
        let table_len = byte_len(tag, offset_table.len() * 4)?;
        self.encoder
            .encode_item_header(to, table_len)
            .context(EncodeHeaderSnafu)?;
        for offset in offset_table {
            to.extend_from_slice(&offset.to_le_bytes());
        }

        for fragment in seq.fragments() {
            let padded_len = fragment.len() + fragment.len() % 2;
            let len = byte_len(tag, padded_len)?;
            self.encoder
                .encode_item_header(to, len)
                .context(EncodeHeaderSnafu)?;
            to.extend_from_slice(fragment);
            if padded_len > fragment.len() {
                to.push(0);
            }
        }

        self.encoder
            .encode_sequence_delimiter(to)
            .context(EncodeHeaderSnafu)
    }
}
