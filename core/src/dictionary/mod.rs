//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary maps attribute tags to the attribute's keyword,
//! its typical value representation and its value multiplicity.
//! Under implicit VR transfer syntaxes, the dictionary is
//! the only source of an element's value representation.
//!
//! The standard dictionary lives in the `p10-dictionary` crate.

use crate::header::{Tag, VR};
use std::fmt;

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// `(group,element)` pair for each attribute,
/// but some attributes may span across multiple groups or elements.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from `(GGGG,0010)` to `(GGGG,00FF)`,
    /// where `GGGG` is an odd number
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed.
    /// The generic ranges are represented by an arbitrary
    /// member of the range.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls within this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t.0 == tag.0 & 0xFF00 && t.1 == tag.1,
            TagRange::Element100(t) => t.0 == tag.0 && t.1 == tag.1 & 0xFF00,
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// The value multiplicity of an attribute:
/// how many individual values its data element may hold.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct Multiplicity {
    /// minimum number of values
    pub min: u32,
    /// maximum number of values, unbounded if `None`
    pub max: Option<u32>,
}

impl Multiplicity {
    /// Exactly one value (`1`)
    pub const ONE: Multiplicity = Multiplicity::exact(1);
    /// Any number of values (`1-n`)
    pub const ONE_OR_MORE: Multiplicity = Multiplicity {
        min: 1,
        max: None,
    };

    /// A multiplicity of exactly `n` values.
    pub const fn exact(n: u32) -> Self {
        Multiplicity {
            min: n,
            max: Some(n),
        }
    }

    /// A multiplicity between `min` and `max` values, inclusive.
    pub const fn range(min: u32, max: u32) -> Self {
        Multiplicity {
            min,
            max: Some(max),
        }
    }

    /// Check whether a value with the given number of elements
    /// conforms to this multiplicity.
    /// Empty values always conform.
    pub fn admits(self, n: u32) -> bool {
        n == 0 || (n >= self.min && self.max.map_or(true, |max| n <= max))
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-n", self.min),
        }
    }
}

/// A dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
    /// The value multiplicity of the attribute
    pub vm: Multiplicity,
}

/// Type trait for a dictionary of DICOM attributes.
///
/// Attribute dictionaries provide the means to convert a tag
/// to an alias and vice versa,
/// as well as retrieving the attribute's typical VR.
///
/// The methods herein have no generic parameters,
/// so as to enable being used as a trait object.
pub trait DataDictionary: fmt::Debug {
    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>>;

    /// Resolve the value representation of an attribute,
    /// or `None` if the tag is not known.
    fn vr_of(&self, tag: Tag) -> Option<VR> {
        self.by_tag(tag).map(|e| e.vr)
    }
}

impl<D: DataDictionary + ?Sized> DataDictionary for &D {
    fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        (**self).by_tag(tag)
    }
}

/// An empty data dictionary, which knows no attributes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_ranges() {
        assert!(TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x60EE, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6100, 0x3000)));
        assert!(TagRange::Element100(Tag(0x0020, 0x3100)).contains(Tag(0x0020, 0x31FF)));
        assert!(TagRange::GroupLength.contains(Tag(0x0008, 0x0000)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0029, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0028, 0x0010)));
    }

    #[test]
    fn multiplicity() {
        assert!(Multiplicity::ONE.admits(1));
        assert!(!Multiplicity::ONE.admits(2));
        assert!(Multiplicity::ONE.admits(0));
        assert!(Multiplicity::ONE_OR_MORE.admits(30));
        assert_eq!(Multiplicity::range(1, 3).to_string(), "1-3");
        assert_eq!(Multiplicity::exact(2).to_string(), "2");
        assert_eq!(Multiplicity::ONE_OR_MORE.to_string(), "1-n");
    }

    #[test]
    fn stub_dictionary_knows_nothing() {
        assert_eq!(StubDataDictionary.vr_of(Tag(0x0010, 0x0010)), None);
    }
}
