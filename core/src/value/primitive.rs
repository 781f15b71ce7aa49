//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use crate::header::Tag;
use chrono::{NaiveDate, NaiveTime};
use num_traits::NumCast;
use smallvec::SmallVec;
use snafu::Snafu;
use std::borrow::Cow;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// # Example
///
/// ```
/// # use p10_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Strs(smallvec!["Smith^John".to_string()]));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Used for zero-length values.
    Empty,

    /// A sequence of strings.
    /// Used for AE, AS, CS, DA, DS, DT, IS, LO, PN, SH, TM, UC and UI,
    /// where the backslash separates multiple values.
    Strs(C<String>),

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// The value is a sequence of bytes.
    /// Used for OB and UN.
    U8(C<u8>),

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD and FD.
    F64(C<f64>),
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the `DataSetSequence` and `PixelSequence` entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// A data set sequence.
    DataSetSequence,
    /// An item. Used for the values of encapsulated pixel data.
    PixelSequence,
    /// A sequence of strings.
    Strs,
    /// A single string.
    Str,
    /// A sequence of attribute tags.
    Tags,
    /// The value is a sequence of unsigned 8-bit integers.
    U8,
    /// The value is a sequence of signed 16-bit integers.
    I16,
    /// The value is a sequence of unsigned 16-bit integers.
    U16,
    /// The value is a sequence of signed 32-bit integers.
    I32,
    /// The value is a sequence of unsigned 32-bit integers.
    U32,
    /// The value is a sequence of signed 64-bit integers.
    I64,
    /// The value is a sequence of unsigned 64-bit integers.
    U64,
    /// The value is a sequence of 32-bit floating point numbers.
    F32,
    /// The value is a sequence of 64-bit floating point numbers.
    F64,
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
///
/// This error is raised whenever it is not possible to retrieve the requested
/// value, either because the inner representation is not compatible with the
/// requested value type, or a conversion would be required.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {:?}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// The reason why a value could not be read into the requested type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// Could not parse text as an integer
    #[snafu(display("could not parse integer"))]
    ParseInteger { source: ParseIntError },
    /// Could not parse text as a floating point number
    #[snafu(display("could not parse decimal number"))]
    ParseFloat { source: ParseFloatError },
    /// The value does not fit the requested numeric type
    #[snafu(display("value {} does not fit the requested type", value))]
    NarrowConvert { value: String },
    /// Malformed date string
    #[snafu(display("invalid date `{}`", value))]
    ParseDate { value: String },
    /// Malformed time string
    #[snafu(display("invalid time `{}`", value))]
    ParseTime { value: String },
}

/// An error type for a failed attempt at converting a value
/// into another representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's original representation
    pub original: ValueType,
    /// The reason why the conversion was unsuccessful,
    /// or none if a conversion from the given original representation
    /// is not possible
    pub cause: Option<InvalidValueReadError>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not convert {:?} to a {}",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as _)
    }
}

/// Implement `From` for a single element of a primitive type
/// and for a smallvec of that type.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }

        impl From<C<$typ>> for PrimitiveValue {
            fn from(value: C<$typ>) -> Self {
                PrimitiveValue::$variant(value)
            }
        }

        impl From<Vec<$typ>> for PrimitiveValue {
            fn from(value: Vec<$typ>) -> Self {
                PrimitiveValue::$variant(C::from_vec(value))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Strs(C::from_elem(value, 1))
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Strs(C::from_elem(value.to_owned(), 1))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from_slice(value))
    }
}

impl PrimitiveValue {
    /// Create a single-valued text value for LT, ST, UT or UR.
    pub fn new_text(text: impl Into<String>) -> Self {
        PrimitiveValue::Str(text.into())
    }

    /// Create a multi-string value from a sequence of strings.
    pub fn new_strs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PrimitiveValue::Strs(values.into_iter().map(Into::into).collect())
    }

    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
        }
    }

    /// Determine the value's type.
    pub fn value_type(&self) -> ValueType {
        use PrimitiveValue::*;
        match self {
            Empty => ValueType::Empty,
            Str(_) => ValueType::Str,
            Strs(_) => ValueType::Strs,
            Tags(_) => ValueType::Tags,
            U8(_) => ValueType::U8,
            I16(_) => ValueType::I16,
            U16(_) => ValueType::U16,
            I32(_) => ValueType::I32,
            U32(_) => ValueType::U32,
            I64(_) => ValueType::I64,
            U64(_) => ValueType::U64,
            F32(_) => ValueType::F32,
            F64(_) => ValueType::F64,
        }
    }

    /// Check whether the value is empty, either as `Empty`
    /// or as a container without any elements.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Convert the primitive value into a string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as is.
    /// Multiple values are joined with a backslash,
    /// which is the value delimiter in DICOM text.
    /// Binary values are formatted in decimal notation.
    ///
    /// # Example
    ///
    /// ```
    /// # use p10_core::PrimitiveValue;
    /// # use smallvec::smallvec;
    /// assert_eq!(
    ///     PrimitiveValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY".to_string()]).to_str(),
    ///     "ORIGINAL\\PRIMARY",
    /// );
    /// assert_eq!(PrimitiveValue::U16(smallvec![512, 256]).to_str(), "512\\256");
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        use PrimitiveValue::*;
        match self {
            Empty => Cow::from(""),
            Str(values) => Cow::from(values.as_str()),
            Strs(values) if values.len() == 1 => Cow::from(values[0].as_str()),
            Strs(values) => Cow::from(values.join("\\")),
            Tags(values) => Cow::from(join_display(values)),
            U8(values) => Cow::from(join_display(values)),
            I16(values) => Cow::from(join_display(values)),
            U16(values) => Cow::from(join_display(values)),
            I32(values) => Cow::from(join_display(values)),
            U32(values) => Cow::from(join_display(values)),
            I64(values) => Cow::from(join_display(values)),
            U64(values) => Cow::from(join_display(values)),
            F32(values) => Cow::from(join_display(values)),
            F64(values) => Cow::from(join_display(values)),
        }
    }

    /// Convert the primitive value into a multi-string representation,
    /// one string per individual value.
    pub fn to_multi_str(&self) -> Cow<[String]> {
        fn seq_to_str<T: fmt::Display>(values: &[T]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        use PrimitiveValue::*;
        match self {
            Empty => Cow::from(&[][..]),
            Str(value) => Cow::from(vec![value.clone()]),
            Strs(values) => Cow::from(&values[..]),
            Tags(values) => Cow::from(seq_to_str(values)),
            U8(values) => Cow::from(seq_to_str(values)),
            I16(values) => Cow::from(seq_to_str(values)),
            U16(values) => Cow::from(seq_to_str(values)),
            I32(values) => Cow::from(seq_to_str(values)),
            U32(values) => Cow::from(seq_to_str(values)),
            I64(values) => Cow::from(seq_to_str(values)),
            U64(values) => Cow::from(seq_to_str(values)),
            F32(values) => Cow::from(seq_to_str(values)),
            F64(values) => Cow::from(seq_to_str(values)),
        }
    }

    /// Get a single string value.
    ///
    /// If it contains multiple strings,
    /// only the first one is returned.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str, CastValueError> {
        use PrimitiveValue::*;
        match self {
            Strs(c) if !c.is_empty() => Ok(&c[0]),
            Str(s) => Ok(s),
            _ => Err(CastValueError {
                requested: "string",
                got: self.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values
    /// if the variant is either `Str` or `Strs`.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        use PrimitiveValue::*;
        match self {
            Strs(c) => Ok(c),
            Str(s) => Ok(std::slice::from_ref(s)),
            _ => Err(CastValueError {
                requested: "strings",
                got: self.value_type(),
            }),
        }
    }

    /// Get the inner sequence of attribute tags.
    pub fn tags(&self) -> Result<&[Tag], CastValueError> {
        match self {
            PrimitiveValue::Tags(c) => Ok(c),
            _ => Err(CastValueError {
                requested: "tags",
                got: self.value_type(),
            }),
        }
    }

    /// Get a single 16-bit unsigned integer value.
    ///
    /// An error is returned if the variant is not `U16`
    /// or the value is empty.
    pub fn uint16(&self) -> Result<u16, CastValueError> {
        match self {
            PrimitiveValue::U16(c) if !c.is_empty() => Ok(c[0]),
            _ => Err(CastValueError {
                requested: "uint16",
                got: self.value_type(),
            }),
        }
    }

    /// Get a single 32-bit unsigned integer value.
    pub fn uint32(&self) -> Result<u32, CastValueError> {
        match self {
            PrimitiveValue::U32(c) if !c.is_empty() => Ok(c[0]),
            _ => Err(CastValueError {
                requested: "uint32",
                got: self.value_type(),
            }),
        }
    }

    /// Retrieve a single integer of type `T` from this value.
    ///
    /// If the value is already represented as an integer,
    /// it is returned after a conversion to the target type.
    /// An error is returned if the integer cannot be represented
    /// by the given integer type.
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain an integer,
    /// ignoring any surrounding whitespace.
    /// Otherwise, the operation fails.
    ///
    /// # Example
    ///
    /// ```
    /// # use p10_core::PrimitiveValue;
    /// # use smallvec::smallvec;
    /// assert_eq!(PrimitiveValue::from(" 42 ").to_int::<i32>().ok(), Some(42));
    /// assert_eq!(PrimitiveValue::U16(smallvec![512]).to_int::<u32>().ok(), Some(512));
    /// assert!(PrimitiveValue::I16(smallvec![-1]).to_int::<u16>().is_err());
    /// ```
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        T: FromStr<Err = ParseIntError>,
    {
        self.to_multi_int::<T>()?
            .into_iter()
            .next()
            .ok_or_else(|| ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            })
    }

    /// Retrieve a sequence of integers of type `T` from this value.
    ///
    /// Strings are parsed one by one; binary values are converted.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast,
        T: FromStr<Err = ParseIntError>,
    {
        fn cast_all<T: NumCast, S: NumCast + Copy + fmt::Display>(
            values: &[S],
            original: ValueType,
        ) -> Result<Vec<T>, ConvertValueError> {
            values
                .iter()
                .map(|v| {
                    T::from(*v).ok_or_else(|| ConvertValueError {
                        requested: "integer",
                        original,
                        cause: Some(InvalidValueReadError::NarrowConvert {
                            value: v.to_string(),
                        }),
                    })
                })
                .collect()
        }

        let original = self.value_type();
        use PrimitiveValue::*;
        match self {
            Str(s) => parse_int(s, original).map(|v| vec![v]),
            Strs(values) => values.iter().map(|s| parse_int(s, original)).collect(),
            U8(values) => cast_all(values, original),
            I16(values) => cast_all(values, original),
            U16(values) => cast_all(values, original),
            I32(values) => cast_all(values, original),
            U32(values) => cast_all(values, original),
            I64(values) => cast_all(values, original),
            U64(values) => cast_all(values, original),
            Empty | Tags(_) | F32(_) | F64(_) => Err(ConvertValueError {
                requested: "integer",
                original,
                cause: None,
            }),
        }
    }

    /// Retrieve a single 64-bit floating point number from this value.
    ///
    /// Decimal strings (DS) are parsed, ignoring surrounding whitespace.
    /// Binary numbers of any kind are converted.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.to_multi_float64()?
            .into_iter()
            .next()
            .ok_or_else(|| ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: None,
            })
    }

    /// Retrieve a sequence of 64-bit floating point numbers from this value.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        fn widen<S: Copy + Into<f64>>(values: &[S]) -> Vec<f64> {
            values.iter().map(|v| (*v).into()).collect()
        }

        let original = self.value_type();
        let parse = |s: &str| -> Result<f64, ConvertValueError> {
            s.trim().parse().map_err(|source| ConvertValueError {
                requested: "float64",
                original,
                cause: Some(InvalidValueReadError::ParseFloat { source }),
            })
        };

        use PrimitiveValue::*;
        match self {
            Str(s) => parse(s).map(|v| vec![v]),
            Strs(values) => values.iter().map(|s| parse(s)).collect(),
            U8(values) => Ok(widen(values)),
            I16(values) => Ok(widen(values)),
            U16(values) => Ok(widen(values)),
            I32(values) => Ok(widen(values)),
            U32(values) => Ok(widen(values)),
            I64(values) => Ok(values.iter().map(|v| *v as f64).collect()),
            U64(values) => Ok(values.iter().map(|v| *v as f64).collect()),
            F32(values) => Ok(widen(values)),
            F64(values) => Ok(values.to_vec()),
            Empty | Tags(_) => Err(ConvertValueError {
                requested: "float64",
                original,
                cause: None,
            }),
        }
    }

    /// Retrieve the raw bytes of this value.
    ///
    /// Byte values (`U8`) are borrowed as is
    /// and text is provided as its UTF-8 encoding.
    /// Wider numbers are laid out in little endian byte order.
    pub fn to_bytes(&self) -> Cow<[u8]> {
        use PrimitiveValue::*;
        match self {
            Empty => Cow::from(&[][..]),
            U8(values) => Cow::from(&values[..]),
            Str(_) | Strs(_) => match self.to_str() {
                Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                Cow::Owned(s) => Cow::Owned(s.into_bytes()),
            },
            Tags(values) => Cow::from(
                values
                    .iter()
                    .flat_map(|t| {
                        let [g0, g1] = t.0.to_le_bytes();
                        let [e0, e1] = t.1.to_le_bytes();
                        [g0, g1, e0, e1]
                    })
                    .collect::<Vec<u8>>(),
            ),
            I16(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            U16(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            I32(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            U32(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            I64(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            U64(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            F32(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
            F64(values) => Cow::from(values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>()),
        }
    }

    /// Retrieve a single date from a DA value.
    ///
    /// The standard `YYYYMMDD` form is accepted,
    /// as well as the legacy `YYYY.MM.DD` form.
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        let text = self.string().map_err(|e| ConvertValueError {
            requested: "date",
            original: e.got,
            cause: None,
        })?;
        parse_date(text.trim()).ok_or_else(|| ConvertValueError {
            requested: "date",
            original: self.value_type(),
            cause: Some(InvalidValueReadError::ParseDate {
                value: text.to_owned(),
            }),
        })
    }

    /// Retrieve a single time from a TM value.
    ///
    /// Accepted forms are `HH`, `HHMM`, `HHMMSS` and `HHMMSS.FFFFFF`,
    /// with missing components taken as zero.
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        let text = self.string().map_err(|e| ConvertValueError {
            requested: "time",
            original: e.got,
            cause: None,
        })?;
        parse_time(text.trim()).ok_or_else(|| ConvertValueError {
            requested: "time",
            original: self.value_type(),
            cause: Some(InvalidValueReadError::ParseTime {
                value: text.to_owned(),
            }),
        })
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

fn join_display<T: fmt::Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push('\\');
        }
        out.push_str(&v.to_string());
    }
    out
}

fn parse_int<T>(text: &str, original: ValueType) -> Result<T, ConvertValueError>
where
    T: FromStr<Err = ParseIntError>,
{
    let text = text.trim();
    // IS values may carry an explicit plus sign
    let text = text.strip_prefix('+').unwrap_or(text);
    text.parse().map_err(|source| ConvertValueError {
        requested: "integer",
        original,
        cause: Some(InvalidValueReadError::ParseInteger { source }),
    })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let digits: String = match text.len() {
        8 => text.to_owned(),
        10 if text.as_bytes()[4] == b'.' && text.as_bytes()[7] == b'.' => text.replace('.', ""),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = digits[0..4].parse().ok()?;
    let month = digits[4..6].parse().ok()?;
    let day = digits[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let (main, frac) = match text.split_once('.') {
        Some((main, frac)) => (main, Some(frac)),
        None => (text, None),
    };
    if !main.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hour, minute, second) = match main.len() {
        2 => (main.parse().ok()?, 0, 0),
        4 => (main[0..2].parse().ok()?, main[2..4].parse().ok()?, 0),
        6 => (
            main[0..2].parse().ok()?,
            main[2..4].parse().ok()?,
            main[4..6].parse().ok()?,
        ),
        _ => return None,
    };
    let micro = match frac {
        None => 0,
        Some(frac) if frac.is_empty() || frac.len() > 6 || main.len() != 6 => return None,
        Some(frac) => {
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let value: u32 = frac.parse().ok()?;
            value * 10_u32.pow(6 - frac.len() as u32)
        }
    };
    NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
}
