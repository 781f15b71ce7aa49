//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data in accordance to the DICOM standard:
//!
//! - [`transfer_syntax`] hosts the known [transfer syntax specifiers],
//!   which produce element header decoders and encoders at run-time;
//! - [`decode`] and [`encode`] read and write element headers,
//!   item headers and delimiters in either VR mode and byte order;
//! - [`value`] converts between raw value bytes and primitive values,
//!   and [`text`] handles the character repertoire of text values.
//!
//! All APIs are based on synchronous I/O.
//!
//! [transfer syntax specifiers]: ./transfer_syntax/struct.TransferSyntax.html

pub mod decode;
pub mod encode;
pub mod text;
pub mod transfer_syntax;
pub mod value;

pub use byteordered::Endianness;
pub use decode::{Decode, DecodeFrom};
pub use encode::{Encode, EncodeTo};
pub use text::SpecificCharacterSet;
pub use transfer_syntax::{Codec, TransferSyntax};
pub use value::{decode_value, encode_value};
