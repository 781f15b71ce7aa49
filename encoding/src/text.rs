//! Character repertoire handling.
//!
//! The text of SH, LO, ST, LT, PN, UC and UT values
//! is encoded in the repertoire named by the Specific Character Set
//! (0008,0005) of the enclosing data set.
//! Other textual VRs always use the default repertoire.
//!
//! Supported repertoires are the default (ISO-IR 6),
//! ISO-IR 100 (Latin-1) and ISO-IR 192 (UTF-8).
//! See [`SpecificCharacterSet`].

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, EncoderTrap, Encoding, RawDecoder, StringWriter};
use p10_core::VR;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// The text has characters outside of the repertoire.
    #[snafu(display("Cannot encode text in {}: {}", charset, message))]
    EncodeCustom {
        charset: &'static str,
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    #[snafu(display("Cannot decode text in {}: {}", charset, message))]
    DecodeCustom {
        charset: &'static str,
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

type EncodeResult<T> = Result<T, EncodeTextError>;
type DecodeResult<T> = Result<T, DecodeTextError>;

/// A holder of encoding and decoding mechanisms for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// The defined term of the repertoire,
    /// as found in the Specific Character Set (0008,0005).
    fn name(&self) -> &'static str;

    /// Decode the given bytes as a single string.
    /// The result may contain backslashes delimiting multiple values.
    fn decode(&self, text: &[u8]) -> DecodeResult<String>;

    /// Encode a text value, which may contain backslashes
    /// delimiting multiple values.
    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>>;
}

impl<'a, T: ?Sized> TextCodec for &'a T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        (**self).encode(text)
    }
}

/// The supported character repertoires.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default character set.
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): the Latin alphabet no. 1.
    IsoIr100,
    /// **ISO-IR 192**: Unicode in UTF-8.
    IsoIr192,
}

impl SpecificCharacterSet {
    /// Obtain the character set identified by the given defined term.
    ///
    /// An empty term is the default character set.
    ///
    /// # Example
    ///
    /// ```
    /// # use p10_encoding::text::SpecificCharacterSet;
    /// let charset = SpecificCharacterSet::from_code("ISO_IR 100");
    /// assert_eq!(charset, Some(SpecificCharacterSet::IsoIr100));
    /// assert_eq!(SpecificCharacterSet::from_code("ISO 2022 IR 87"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        use self::SpecificCharacterSet::*;
        match code.trim_matches(|c| c == ' ' || c == '\0') {
            "" | "ISO_IR 6" | "ISO_IR_6" | "ISO 2022 IR 6" => Some(Default),
            "ISO_IR 100" | "ISO_IR_100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR 192" | "ISO_IR_192" => Some(IsoIr192),
            _ => None,
        }
    }

    /// The repertoire in which values of the given VR are encoded
    /// when this character set is declared.
    pub fn for_vr(self, vr: VR) -> Self {
        use VR::*;
        match vr {
            SH | LO | ST | LT | PN | UC | UT => self,
            _ => SpecificCharacterSet::Default,
        }
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        match self {
            SpecificCharacterSet::Default => DefaultCharacterSetCodec.name(),
            SpecificCharacterSet::IsoIr100 => IsoIr100CharacterSetCodec.name(),
            SpecificCharacterSet::IsoIr192 => Utf8CharacterSetCodec.name(),
        }
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        match self {
            SpecificCharacterSet::Default => DefaultCharacterSetCodec.decode(text),
            SpecificCharacterSet::IsoIr100 => IsoIr100CharacterSetCodec.decode(text),
            SpecificCharacterSet::IsoIr192 => Utf8CharacterSetCodec.decode(text),
        }
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        match self {
            SpecificCharacterSet::Default => DefaultCharacterSetCodec.encode(text),
            SpecificCharacterSet::IsoIr100 => IsoIr100CharacterSetCodec.encode(text),
            SpecificCharacterSet::IsoIr192 => Utf8CharacterSetCodec.encode(text),
        }
    }
}

/// Replace each undecodable byte with the octal escape `\ooo`.
fn decode_text_trap(
    _decoder: &mut dyn RawDecoder,
    input: &[u8],
    output: &mut dyn StringWriter,
) -> bool {
    for &c in input {
        output.write_char('\\');
        output.write_char(char::from(b'0' + (c >> 6)));
        output.write_char(char::from(b'0' + ((c >> 3) & 7)));
        output.write_char(char::from(b'0' + (c & 7)));
    }
    true
}

/// Create and implement a character set type using the `encoding` crate.
macro_rules! decl_character_set {
    ($typ: ident, $term: literal, $val: expr) => {
        #[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
        #[doc = "Data type for the "]
        #[doc = $term]
        #[doc = "character set encoding."]
        pub struct $typ;

        impl TextCodec for $typ {
            fn name(&self) -> &'static str {
                $term
            }

            fn decode(&self, text: &[u8]) -> DecodeResult<String> {
                $val.decode(text, DecoderTrap::Call(decode_text_trap))
                    .map_err(|message| {
                        DecodeCustomSnafu {
                            charset: $term,
                            message,
                        }
                        .build()
                    })
            }

            fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
                $val.encode(text, EncoderTrap::Strict).map_err(|message| {
                    EncodeCustomSnafu {
                        charset: $term,
                        message,
                    }
                    .build()
                })
            }
        }
    };
}

// ISO 8859-1 is a superset of the default repertoire,
// so text written by lax encoders still decodes
decl_character_set!(DefaultCharacterSetCodec, "ISO_IR 6", ISO_8859_1);
decl_character_set!(IsoIr100CharacterSetCodec, "ISO_IR 100", ISO_8859_1);
decl_character_set!(Utf8CharacterSetCodec, "ISO_IR 192", UTF_8);

/// Remove the trailing padding of a text value:
/// spaces and NUL bytes.
pub fn trim_trailing_padding(text: &str) -> &str {
    text.trim_end_matches(|c| c == ' ' || c == '\0')
}
