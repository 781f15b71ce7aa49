#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate reads and writes complete data sets
//! encoded in a given transfer syntax.
//!
//! - [`stateful`] holds the element decoder,
//!   which tracks its position in the source
//!   and the transfer syntax in effect.
//! - [`dataset`] builds the element tree from raw bytes and back.
//! - [`warning`] describes the recoverable deviations
//!   reported by lenient reading.
//!
//! # Example
//!
//! ```
//! # use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, VR};
//! # use p10_encoding::transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;
//! use p10_parser::{read_dataset, write_dataset, ParseOptions, WriteOptions};
//!
//! let mut ds = DataSet::new();
//! ds.put(DataElement::new(Tag(0x0010, 0x0010), VR::PN, PrimitiveValue::from("Doe^John")));
//! let bytes = write_dataset(&ds, &IMPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default())?;
//! let parsed = read_dataset(&bytes, &IMPLICIT_VR_LITTLE_ENDIAN, ParseOptions::default())?;
//! assert_eq!(parsed.value, ds);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dataset;
pub mod options;
pub mod stateful;
pub mod warning;

pub use dataset::{read_dataset, write_dataset, DataSetReader, DataSetWriter};
pub use options::{Conformance, GroupLengthPolicy, ParseOptions, WriteOptions};
pub use stateful::decode::StatefulDecoder;
pub use warning::{Parsed, Warning, WarningKind};
