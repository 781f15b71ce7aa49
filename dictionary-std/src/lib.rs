//! This crate implements the standard DICOM attribute dictionary
//! and declares well-known constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: Contains information about the
//!   DICOM attributes commonly found in imaging instances,
//!   as specified in [DICOM PS3.6].
//!   It is used to resolve value representations
//!   when reading data sets in implicit VR.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
