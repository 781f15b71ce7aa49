//! Options for reading and writing data sets.

/// How strictly the parser enforces the structure of a data set.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Conformance {
    /// Structural deviations which can be recovered from
    /// (such as tags out of ascending order)
    /// abort the parse.
    Strict,
    /// Recoverable deviations are collected as warnings
    /// and parsing continues.
    #[default]
    Lenient,
}

/// The set of options for the data set reader.
///
/// # Example
///
/// ```
/// # use p10_parser::{Conformance, ParseOptions};
/// let options = ParseOptions::default()
///     .conformance(Conformance::Strict)
///     .max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
    /// the conformance level
    pub conformance: Conformance,
    /// the maximum nesting level of sequences
    pub max_depth: u32,
    /// the position of the data set in the enclosing source,
    /// added to every reported offset
    pub base_offset: u64,
}

/// The default maximum nesting level of sequences.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            conformance: Conformance::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            base_offset: 0,
        }
    }
}

impl ParseOptions {
    /// Replace the conformance level of the options.
    pub fn conformance(mut self, conformance: Conformance) -> Self {
        self.conformance = conformance;
        self
    }

    /// Replace the maximum sequence nesting level of the options.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the base reader offset of the options.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }

    /// Whether recoverable deviations should abort the parse.
    pub fn is_strict(&self) -> bool {
        self.conformance == Conformance::Strict
    }
}

/// What the writer does with group length elements `(gggg,0000)`.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum GroupLengthPolicy {
    /// Group length elements present in the data set
    /// are written with a value derived from the encoded group.
    #[default]
    Recompute,
    /// Group length elements are not written,
    /// except for the file meta group.
    Omit,
}

/// The set of options for the data set writer.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
    /// the group length policy
    pub group_length: GroupLengthPolicy,
}

impl WriteOptions {
    /// Replace the group length policy of the options.
    pub fn group_length(mut self, group_length: GroupLengthPolicy) -> Self {
        self.group_length = group_length;
        self
    }
}
