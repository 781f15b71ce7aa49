//! Reading and writing of whole data sets,
//! on top of the element level decoders and encoders.

pub mod read;
pub mod write;

pub use self::read::{read_dataset, DataSetReader};
pub use self::write::{write_dataset, DataSetWriter};
