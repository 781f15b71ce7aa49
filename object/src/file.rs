use crate::error::{
    OpenFileSnafu, ReadDataSetSnafu, ReadFileSnafu, ReadMetaSnafu, Result,
    UnsupportedTransferSyntaxSnafu,
};
use crate::meta::FileMetaTable;
use crate::record::ImageRecord;
use p10_parser::options::DEFAULT_MAX_DEPTH;
use p10_parser::{read_dataset, Conformance, ParseOptions, Parsed};
use snafu::{OptionExt, ResultExt};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Create an image record by reading a file.
///
/// This function assumes the standard file encoding structure: 128-byte
/// preamble, `DICM` magic code, file meta group, and the rest of the data set.
pub fn open_file<P>(path: P) -> Result<ImageRecord>
where
    P: AsRef<Path>,
{
    ReadOptions::new().open_file(path)
}

/// A builder type for reading a DICOM file with additional options.
///
/// # Example
///
/// Create a `ReadOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.open_file()`](ReadOptions::open_file)
/// or [`.from_bytes()`](ReadOptions::from_bytes).
///
/// ```no_run
/// # use p10_object::{Conformance, ReadOptions};
/// let record = ReadOptions::new()
///     .conformance(Conformance::Strict)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadOptions {
    /// the conformance level
    pub conformance: Conformance,
    /// the maximum nesting level of sequences
    pub max_depth: u32,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            conformance: Conformance::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Set the conformance level.
    ///
    /// Under [`Conformance::Strict`],
    /// tags out of order, invalid identifying UIDs
    /// and native pixel data of the wrong size
    /// fail the read instead of being reported as warnings.
    pub fn conformance(mut self, conformance: Conformance) -> Self {
        self.conformance = conformance;
        self
    }

    /// Set the maximum nesting level of sequences.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Read an image record from the full contents of a DICOM file.
    pub fn from_bytes(self, bytes: &[u8]) -> Result<ImageRecord> {
        let (Parsed { value: meta, mut warnings }, rest) =
            FileMetaTable::parse(bytes).context(ReadMetaSnafu)?;
        let ts = meta
            .transfer_syntax()
            .context(UnsupportedTransferSyntaxSnafu {
                uid: meta.transfer_syntax.as_str(),
            })?;
        debug!("Reading data set in {} ({})", ts.name(), ts.uid());

        let options = ParseOptions::default()
            .conformance(self.conformance)
            .max_depth(self.max_depth)
            .base_offset((bytes.len() - rest.len()) as u64);
        let data_set = read_dataset(rest, ts, options).context(ReadDataSetSnafu)?;
        warnings.extend(data_set.warnings);

        ImageRecord::from_parts(meta, data_set.value, ts, warnings, self.conformance)
    }

    /// Read an image record from a file.
    pub fn open_file<P>(self, path: P) -> Result<ImageRecord>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut file = File::open(path).context(OpenFileSnafu { filename: path })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .context(ReadFileSnafu { filename: path })?;
        self.from_bytes(&bytes)
    }
}
