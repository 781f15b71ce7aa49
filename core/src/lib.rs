#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the P10 codec,
//! containing the concepts and data structures
//! shared by the encoding, parsing and object layers.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header,
//!   including common definitions for DICOM tags and value representations.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate tags to the attribute's typical VR and multiplicity.
//! - [`value`] holds definitions for values in standard DICOM elements,
//!   with the awareness of multiplicity, representation,
//!   and the possible presence of sequences.
//! - [`dataset`] holds the in-memory data element tree.
//! - [`uid`] validates and generates unique identifiers.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html
//! [`dataset`]: ./dataset/index.html
//! [`uid`]: ./uid/index.html

pub mod dataset;
pub mod dictionary;
pub mod header;
pub mod prelude;
pub mod uid;
pub mod value;

pub use dataset::{DataElement, DataSet};
pub use dictionary::DataDictionary;
pub use header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use value::{PrimitiveValue, Value};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
