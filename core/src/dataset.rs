//! In-memory data elements and data sets.
//!
//! A [`DataSet`] is an ordered tree:
//! its elements are kept sorted by tag,
//! and sequence elements own their items as nested data sets.

use crate::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
use crate::value::{PrimitiveValue, Value};
use snafu::{Backtrace, Snafu};
use std::collections::btree_map::{self, BTreeMap, Entry};

/// The error raised when an element is not present in a data set.
#[derive(Debug, Snafu)]
#[snafu(display("No such data element with tag {}", tag))]
pub struct NoSuchDataElementTag {
    /// The tag that was looked up
    pub tag: Tag,
    backtrace: Backtrace,
}

/// A data type that represents and owns a DICOM data element.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl DataElement {
    /// Create a data element from the given parts.
    ///
    /// The value length is not stored:
    /// it is always derived from the value when the element is encoded.
    #[inline]
    pub fn new<T: Into<Tag>, V: Into<Value>>(tag: T, vr: VR, value: V) -> Self {
        DataElement {
            tag: tag.into(),
            vr,
            value: value.into(),
        }
    }

    /// Create an empty data element.
    #[inline]
    pub fn empty<T: Into<Tag>>(tag: T, vr: VR) -> Self {
        DataElement::new(tag, vr, PrimitiveValue::Empty)
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the data value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Retrieve a mutable reference to the data value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Move the data value out of the element, discarding the rest.
    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Build a header for this element with the given length.
    #[inline]
    pub fn header(&self, len: Length) -> DataElementHeader {
        DataElementHeader::new(self.tag, self.vr, len)
    }
}

/// A DICOM data set: a collection of data elements
/// with unique tags, traversed in ascending tag order.
///
/// When the data set is a sequence item,
/// it also records whether it was delimited (undefined length)
/// so that writers can preserve the original encoding.
/// New data sets are defined-length.
///
/// Equality is semantic: the recorded length is not compared.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
    len: Length,
}

impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl HasLength for DataSet {
    fn length(&self) -> Length {
        self.len
    }
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Create a new empty item with the given encoded length.
    /// [`Length::UNDEFINED`] marks a delimited item.
    pub fn with_length(len: Length) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            len,
        }
    }

    /// Change the recorded encoded length of this data set.
    pub fn set_length(&mut self, len: Length) {
        self.len = len;
    }

    /// Create a data set from a sequence of elements.
    /// Later elements replace earlier ones with the same tag.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = DataElement>,
    {
        let mut out = DataSet::new();
        for elem in iter {
            out.put(elem);
        }
        out
    }

    /// Retrieve the number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&DataElement, NoSuchDataElementTag> {
        self.entries
            .get(&tag)
            .ok_or_else(|| NoSuchDataElementTagSnafu { tag }.build())
    }

    /// Retrieve a particular DICOM element by its tag,
    /// or `None` if it is not present.
    pub fn element_opt(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a mutable reference to a particular DICOM element.
    pub fn element_mut(&mut self, tag: Tag) -> Option<&mut DataElement> {
        self.entries.get_mut(&tag)
    }

    /// Whether an element with the given tag is present.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Insert a data element,
    /// returning the element it replaced, if any.
    pub fn put(&mut self, elem: DataElement) -> Option<DataElement> {
        self.entries.insert(elem.tag(), elem)
    }

    /// Insert a data element only if no element with the same tag exists.
    /// Returns `false` and discards `elem` otherwise.
    pub fn put_if_absent(&mut self, elem: DataElement) -> bool {
        match self.entries.entry(elem.tag()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(elem);
                true
            }
        }
    }

    /// Insert a primitive value with the given tag and VR,
    /// replacing any previous element.
    pub fn put_str(&mut self, tag: Tag, vr: VR, value: impl Into<String>) {
        self.put(DataElement::new(tag, vr, PrimitiveValue::from(value.into())));
    }

    /// Remove an element by its tag, returning whether it existed.
    pub fn remove(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove and return an element by its tag.
    pub fn take(&mut self, tag: Tag) -> Option<DataElement> {
        self.entries.remove(&tag)
    }

    /// Obtain an iterator over the elements in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> + '_ {
        self.entries.values()
    }

    /// Obtain an iterator over the tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Obtain an iterator over the elements of one group.
    pub fn group(&self, group: u16) -> impl Iterator<Item = &DataElement> + '_ {
        self.entries
            .range(Tag(group, 0x0000)..=Tag(group, 0xFFFF))
            .map(|(_, e)| e)
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = btree_map::IntoValues<Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl FromIterator<DataElement> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataElement>>(iter: T) -> Self {
        DataSet::from_element_iter(iter)
    }
}

impl Extend<DataElement> for DataSet {
    fn extend<T: IntoIterator<Item = DataElement>>(&mut self, iter: T) {
        for elem in iter {
            self.put(elem);
        }
    }
}

impl HasLength for DataElement {
    /// The length of an in-memory element is not known until it is encoded,
    /// except for encapsulated pixel data.
    fn length(&self) -> Length {
        match &self.value {
            Value::PixelSequence(seq) => seq.length(),
            Value::Sequence(seq) => seq.length(),
            Value::Primitive(_) => Length::UNDEFINED,
        }
    }
}

impl Header for DataElement {
    fn tag(&self) -> Tag {
        self.tag
    }
}
