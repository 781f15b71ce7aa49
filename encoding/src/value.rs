//! Decoding and encoding of primitive element values,
//! according to their value representation.
//!
//! | VR                                               | value      |
//! |--------------------------------------------------|------------|
//! | AE AS CS DA DS DT IS LO PN SH TM UC UI           | `Strs`     |
//! | LT ST UT UR                                      | `Str`      |
//! | AT                                               | `Tags`     |
//! | OB UN                                            | `U8`       |
//! | US OW                                            | `U16`      |
//! | SS                                               | `I16`      |
//! | UL OL                                            | `U32`      |
//! | SL                                               | `I32`      |
//! | UV OV                                            | `U64`      |
//! | SV                                               | `I64`      |
//! | FL OF                                            | `F32`      |
//! | FD OD                                            | `F64`      |
//!
//! Text is decoded and encoded in the repertoire
//! given by the [`SpecificCharacterSet`] of the enclosing data set.

use crate::text::{
    trim_trailing_padding, DecodeTextError, EncodeTextError, SpecificCharacterSet, TextCodec,
};
use byteordered::Endianness;
use p10_core::value::{ValueType, C};
use p10_core::{PrimitiveValue, Tag, VR};
use snafu::{ensure, Backtrace, ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The value length is not a multiple of the size of its numbers.
    #[snafu(display(
        "Value of length {} is not a multiple of {} bytes, as required by VR {}",
        len,
        element_size,
        vr
    ))]
    BadValueLength {
        vr: VR,
        len: usize,
        element_size: usize,
        backtrace: Backtrace,
    },
    /// Sequences are not primitive values.
    #[snafu(display("VR {} does not hold a primitive value", vr))]
    NotPrimitive { vr: VR, backtrace: Backtrace },
    /// The in-memory value cannot be encoded with the element's VR.
    #[snafu(display("Cannot encode a {:?} value as VR {}", value_type, vr))]
    IncompatibleValue {
        vr: VR,
        value_type: ValueType,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode text of VR {}", vr))]
    DecodeText {
        vr: VR,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
    #[snafu(display("Could not encode text of VR {}", vr))]
    EncodeText {
        vr: VR,
        #[snafu(backtrace)]
        source: EncodeTextError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

macro_rules! decode_numbers {
    ($bytes: expr, $endianness: expr, $t: ty) => {{
        const N: usize = std::mem::size_of::<$t>();
        $bytes
            .chunks_exact(N)
            .map(|chunk| {
                let mut raw = [0u8; N];
                raw.copy_from_slice(chunk);
                match $endianness {
                    Endianness::Little => <$t>::from_le_bytes(raw),
                    Endianness::Big => <$t>::from_be_bytes(raw),
                }
            })
            .collect::<C<$t>>()
    }};
}

macro_rules! encode_numbers {
    ($values: expr, $endianness: expr) => {{
        let mut out = Vec::with_capacity($values.len() * 8);
        for v in $values.iter() {
            match $endianness {
                Endianness::Little => out.extend_from_slice(&v.to_le_bytes()),
                Endianness::Big => out.extend_from_slice(&v.to_be_bytes()),
            }
        }
        out
    }};
}

/// Size in bytes of each number held by a binary VR,
/// or `None` for text and byte VRs.
fn element_size(vr: VR) -> Option<usize> {
    use VR::*;
    match vr {
        US | OW | SS => Some(2),
        AT => Some(4),
        UL | OL | SL | FL | OF => Some(4),
        UV | OV | SV | FD | OD => Some(8),
        _ => None,
    }
}

/// Decode the raw bytes of a primitive value.
///
/// Trailing padding is removed from text values,
/// and text which is nothing but padding becomes an empty value.
pub fn decode_value(
    vr: VR,
    bytes: &[u8],
    endianness: Endianness,
    charset: SpecificCharacterSet,
) -> Result<PrimitiveValue> {
    use VR::*;

    ensure!(vr != SQ, NotPrimitiveSnafu { vr });
    if bytes.is_empty() {
        return Ok(PrimitiveValue::Empty);
    }

    if vr.is_textual() {
        let text = charset
            .for_vr(vr)
            .decode(bytes)
            .context(DecodeTextSnafu { vr })?;
        let text = trim_trailing_padding(&text);
        if text.is_empty() {
            return Ok(PrimitiveValue::Empty);
        }
        if vr.is_single_text() {
            return Ok(PrimitiveValue::Str(text.to_string()));
        }
        return Ok(PrimitiveValue::Strs(
            text.split('\\').map(str::to_string).collect(),
        ));
    }

    if let Some(size) = element_size(vr) {
        ensure!(
            bytes.len() % size == 0,
            BadValueLengthSnafu {
                vr,
                len: bytes.len(),
                element_size: size
            }
        );
    }

    Ok(match vr {
        AT => {
            let parts = decode_numbers!(bytes, endianness, u16);
            PrimitiveValue::Tags(parts.chunks_exact(2).map(|p| Tag(p[0], p[1])).collect())
        }
        US | OW => PrimitiveValue::U16(decode_numbers!(bytes, endianness, u16)),
        SS => PrimitiveValue::I16(decode_numbers!(bytes, endianness, i16)),
        UL | OL => PrimitiveValue::U32(decode_numbers!(bytes, endianness, u32)),
        SL => PrimitiveValue::I32(decode_numbers!(bytes, endianness, i32)),
        UV | OV => PrimitiveValue::U64(decode_numbers!(bytes, endianness, u64)),
        SV => PrimitiveValue::I64(decode_numbers!(bytes, endianness, i64)),
        FL | OF => PrimitiveValue::F32(decode_numbers!(bytes, endianness, f32)),
        FD | OD => PrimitiveValue::F64(decode_numbers!(bytes, endianness, f64)),
        // OB, UN and anything unforeseen
        _ => PrimitiveValue::U8(C::from_slice(bytes)),
    })
}

/// Encode a primitive value into its raw bytes,
/// padded to an even length.
///
/// Byte values (`U8`) are written as is for any VR.
/// Fails if text has characters outside of the repertoire.
pub fn encode_value(
    value: &PrimitiveValue,
    vr: VR,
    endianness: Endianness,
    charset: SpecificCharacterSet,
) -> Result<Vec<u8>> {
    use PrimitiveValue as P;
    use VR::*;

    let incompatible = || {
        IncompatibleValueSnafu {
            vr,
            value_type: value.value_type(),
        }
        .fail()
    };

    let mut out = match (vr, value) {
        (_, P::Empty) => Vec::new(),
        (_, P::U8(bytes)) => bytes.to_vec(),
        (SQ, _) => return incompatible(),
        (vr, P::Tags(_)) if vr.is_textual() => return incompatible(),
        (vr, value) if vr.is_textual() => charset
            .for_vr(vr)
            .encode(&value.to_str())
            .context(EncodeTextSnafu { vr })?,
        (AT, P::Tags(tags)) => {
            let parts: Vec<u16> = tags.iter().flat_map(|t| [t.0, t.1]).collect();
            encode_numbers!(parts, endianness)
        }
        (US | OW, P::U16(values)) => encode_numbers!(values, endianness),
        (SS, P::I16(values)) => encode_numbers!(values, endianness),
        (UL | OL, P::U32(values)) => encode_numbers!(values, endianness),
        (SL, P::I32(values)) => encode_numbers!(values, endianness),
        (UV | OV, P::U64(values)) => encode_numbers!(values, endianness),
        (SV, P::I64(values)) => encode_numbers!(values, endianness),
        (FL | OF, P::F32(values)) => encode_numbers!(values, endianness),
        (FD | OD, P::F64(values)) => encode_numbers!(values, endianness),
        _ => return incompatible(),
    };

    if out.len() % 2 == 1 {
        out.push(vr.padding());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use p10_core::value::C;
    use smallvec::smallvec;

    const CHARSET: SpecificCharacterSet = SpecificCharacterSet::Default;

    #[test]
    fn decode_text_values() {
        let value = decode_value(VR::CS, b"ORIGINAL\\PRIMARY ", Endianness::Little, CHARSET).unwrap();
        assert_eq!(
            value,
            PrimitiveValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY".to_string()])
        );

        let value = decode_value(VR::UI, b"1.2.840.10008.1.2.1\0", Endianness::Little, CHARSET).unwrap();
        assert_eq!(value.string().unwrap(), "1.2.840.10008.1.2.1");

        // backslashes are not separators in single-valued text
        let value = decode_value(VR::LT, b"C:\\temp ", Endianness::Little, CHARSET).unwrap();
        assert_eq!(value, PrimitiveValue::Str("C:\\temp".to_string()));

        let value = decode_value(VR::LO, b"  ", Endianness::Little, CHARSET).unwrap();
        assert_eq!(value, PrimitiveValue::Empty);
    }

    #[test]
    fn decode_binary_values() {
        let value = decode_value(VR::US, &[0x00, 0x02], Endianness::Little, CHARSET).unwrap();
        assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
        let value = decode_value(VR::US, &[0x02, 0x00], Endianness::Big, CHARSET).unwrap();
        assert_eq!(value, PrimitiveValue::U16(smallvec![512]));

        let value = decode_value(
            VR::AT,
            &[0x10, 0x00, 0x20, 0x00, 0xE0, 0x7F, 0x10, 0x00],
            Endianness::Little,
            CHARSET,
        )
        .unwrap();
        let tags: C<Tag> = smallvec![Tag(0x0010, 0x0020), Tag::PIXEL_DATA];
        assert_eq!(value, PrimitiveValue::Tags(tags));

        let value = decode_value(VR::FD, &1.5_f64.to_le_bytes(), Endianness::Little, CHARSET).unwrap();
        assert_eq!(value.to_float64().unwrap(), 1.5);

        let value = decode_value(VR::UN, &[1, 2, 3], Endianness::Little, CHARSET).unwrap();
        assert_eq!(value, PrimitiveValue::U8(smallvec![1, 2, 3]));
    }

    #[test]
    fn bad_lengths_and_sequences() {
        assert!(matches!(
            decode_value(VR::UL, &[1, 2, 3], Endianness::Little, CHARSET),
            Err(Error::BadValueLength {
                element_size: 4,
                len: 3,
                ..
            })
        ));
        assert!(matches!(
            decode_value(VR::SQ, &[], Endianness::Little, CHARSET),
            Err(Error::NotPrimitive { .. })
        ));
    }

    #[test]
    fn encode_pads_to_even_length() {
        let out = encode_value(&PrimitiveValue::from("MR1"), VR::CS, Endianness::Little, CHARSET).unwrap();
        assert_eq!(out, b"MR1 ");
        let out =
            encode_value(&PrimitiveValue::from("1.2.3"), VR::UI, Endianness::Little, CHARSET).unwrap();
        assert_eq!(out, b"1.2.3\0");
        let out = encode_value(
            &PrimitiveValue::U8(smallvec![1, 2, 3]),
            VR::OB,
            Endianness::Little,
            CHARSET,
        )
        .unwrap();
        assert_eq!(out, &[1, 2, 3, 0]);
    }

    #[test]
    fn encode_numbers_in_byte_order() {
        let value = PrimitiveValue::from(0x0102_u16);
        assert_eq!(
            encode_value(&value, VR::US, Endianness::Little, CHARSET).unwrap(),
            &[0x02, 0x01]
        );
        assert_eq!(
            encode_value(&value, VR::US, Endianness::Big, CHARSET).unwrap(),
            &[0x01, 0x02]
        );
        // numbers may be written into text VRs
        assert_eq!(
            encode_value(&PrimitiveValue::from(42_i32), VR::IS, Endianness::Little, CHARSET).unwrap(),
            b"42"
        );
    }

    #[test]
    fn encode_incompatible() {
        assert!(matches!(
            encode_value(&PrimitiveValue::from("x"), VR::US, Endianness::Little, CHARSET),
            Err(Error::IncompatibleValue { .. })
        ));
        assert!(matches!(
            encode_value(&PrimitiveValue::from(1_u32), VR::US, Endianness::Little, CHARSET),
            Err(Error::IncompatibleValue { .. })
        ));
    }

    #[test]
    fn text_in_declared_repertoire() {
        let latin1 = SpecificCharacterSet::IsoIr100;
        let value = decode_value(VR::PN, b"Ren\xE9", Endianness::Little, latin1).unwrap();
        assert_eq!(value.to_str(), "René");
        assert_eq!(
            encode_value(&value, VR::PN, Endianness::Little, latin1).unwrap(),
            b"Ren\xE9"
        );

        let utf8 = SpecificCharacterSet::IsoIr192;
        let value = decode_value(VR::LO, b"Ren\xC3\xA9", Endianness::Little, utf8).unwrap();
        assert_eq!(value.to_str(), "René");
        assert_eq!(
            encode_value(&value, VR::LO, Endianness::Little, utf8).unwrap(),
            b"Ren\xC3\xA9 "
        );

        // code strings are never in the declared repertoire
        let value = decode_value(VR::CS, b"ISO_IR 192", Endianness::Little, utf8).unwrap();
        assert_eq!(value.to_str(), "ISO_IR 192");

        assert!(matches!(
            encode_value(
                &PrimitiveValue::from("Иванков"),
                VR::PN,
                Endianness::Little,
                latin1
            ),
            Err(Error::EncodeText { vr: VR::PN, .. })
        ));
    }
}
