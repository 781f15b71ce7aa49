//! Prelude module.
//!
//! Contains the types and traits most often needed
//! to inspect and build data sets.

pub use crate::dataset::{DataElement, DataSet};
pub use crate::header::{HasLength as _, Header as _};
pub use crate::header::{Length, Tag, VR};
pub use crate::value::{PrimitiveValue, Value};
