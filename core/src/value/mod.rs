//! This module includes a high level abstraction over a DICOM data element's value.

use crate::dataset::DataSet;
use crate::header::{HasLength, Length};

mod primitive;

pub use self::primitive::{
    CastValueError, ConvertValueError, InvalidValueReadError, PrimitiveValue, ValueType, C,
};

/// Type alias for the in-memory pixel data fragment data.
pub type InMemFragment = Vec<u8>;

/// Representation of a full DICOM value,
/// which may be either primitive or a tree of nested data sets.
///
/// Equality is semantic:
/// the recorded lengths of sequences and items are not compared,
/// so a sequence read with undefined length equals
/// the same sequence written with an explicit length.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A sequence of items, each a nested data set.
    Sequence(DataSetSequence),
    /// A sequence of encapsulated pixel data fragments.
    PixelSequence(PixelFragmentSequence),
}

impl Value {
    /// Construct a DICOM value from a primitive value.
    #[inline]
    pub fn new(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }

    /// Construct a data set sequence value from a list of items
    /// and the length it should be encoded with.
    #[inline]
    pub fn new_sequence(items: impl Into<Vec<DataSet>>, length: Length) -> Self {
        Value::Sequence(DataSetSequence::new(items, length))
    }

    /// Construct an encapsulated pixel data value
    /// from a basic offset table and a list of fragments.
    ///
    /// **Note:** This function does not validate the offset table
    /// against the fragments.
    #[inline]
    pub fn new_pixel_sequence(
        offset_table: impl Into<C<u32>>,
        fragments: impl Into<C<InMemFragment>>,
    ) -> Self {
        Value::PixelSequence(PixelFragmentSequence::new(offset_table, fragments))
    }

    /// Obtain the number of individual values.
    /// In a sequence value, this is the number of items.
    /// In an encapsulated pixel data value, this is the number of fragments.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(seq) => seq.items().len() as u32,
            Value::PixelSequence(seq) => seq.fragments().len() as u32,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[DataSet]> {
        match self {
            Value::Sequence(seq) => Some(seq.items()),
            _ => None,
        }
    }

    /// Gets a mutable reference to the items of a sequence.
    pub fn items_mut(&mut self) -> Option<&mut Vec<DataSet>> {
        match self {
            Value::Sequence(seq) => Some(seq.items_mut()),
            _ => None,
        }
    }

    /// Gets a reference to the encapsulated pixel data fragments.
    pub fn fragments(&self) -> Option<&[InMemFragment]> {
        match self {
            Value::PixelSequence(seq) => Some(seq.fragments()),
            _ => None,
        }
    }

    /// Retrieves the basic offset table of encapsulated pixel data.
    pub fn offset_table(&self) -> Option<&[u32]> {
        match self {
            Value::PixelSequence(seq) => Some(seq.offset_table()),
            _ => None,
        }
    }

    /// Determine the value's type.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence(_) => ValueType::DataSetSequence,
            Value::PixelSequence(_) => ValueType::PixelSequence,
        }
    }

    /// Convert the full primitive value into a single string.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<std::borrow::Cow<str>, CastValueError> {
        match self {
            Value::Primitive(v) => Ok(v.to_str()),
            _ => Err(CastValueError {
                requested: "string",
                got: self.value_type(),
            }),
        }
    }
}

impl From<PrimitiveValue> for Value {
    #[inline]
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl From<DataSetSequence> for Value {
    #[inline]
    fn from(value: DataSetSequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<PixelFragmentSequence> for Value {
    #[inline]
    fn from(value: PixelFragmentSequence) -> Self {
        Value::PixelSequence(value)
    }
}

/// A sequence of complex data set items.
#[derive(Debug, Clone)]
pub struct DataSetSequence {
    /// The item sequence.
    items: Vec<DataSet>,
    /// The sequence length in bytes.
    ///
    /// The value may be [`UNDEFINED`](Length::UNDEFINED)
    /// if the sequence is delimited,
    /// otherwise the writer derives the actual byte length of all items.
    length: Length,
}

impl DataSetSequence {
    /// Construct a DICOM data sequence
    /// using a sequence of items and a length.
    ///
    /// Only the definedness of `length` is significant
    /// when the sequence is written:
    /// defined lengths are always recomputed.
    #[inline]
    pub fn new(items: impl Into<Vec<DataSet>>, length: Length) -> Self {
        DataSetSequence {
            items: items.into(),
            length,
        }
    }

    /// Construct an empty DICOM data sequence,
    /// with the length explicitly defined to zero.
    #[inline]
    pub fn empty() -> Self {
        DataSetSequence {
            items: Vec::new(),
            length: Length(0),
        }
    }

    /// Gets a reference to the items of a sequence.
    #[inline]
    pub fn items(&self) -> &[DataSet] {
        &self.items
    }

    /// Gets a mutable reference to the items of a sequence.
    #[inline]
    pub fn items_mut(&mut self) -> &mut Vec<DataSet> {
        &mut self.items
    }

    /// Obtain the items of the sequence.
    #[inline]
    pub fn into_items(self) -> Vec<DataSet> {
        self.items
    }
}

impl HasLength for DataSetSequence {
    #[inline]
    fn length(&self) -> Length {
        self.length
    }
}

impl PartialEq for DataSetSequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// A sequence of pixel data fragments in encapsulated form.
///
/// The first item of an encapsulated pixel data element
/// is always the basic offset table,
/// which is kept apart from the fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFragmentSequence {
    /// The value contents of the basic offset table.
    offset_table: C<u32>,
    /// The sequence of pixel data fragments.
    fragments: C<InMemFragment>,
}

impl PixelFragmentSequence {
    /// Construct a DICOM pixel sequence value
    /// from a basic offset table and a list of fragments.
    #[inline]
    pub fn new(offset_table: impl Into<C<u32>>, fragments: impl Into<C<InMemFragment>>) -> Self {
        PixelFragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into(),
        }
    }

    /// Construct a DICOM pixel sequence value
    /// from a list of fragments, with an empty basic offset table.
    #[inline]
    pub fn new_fragments(fragments: impl Into<C<InMemFragment>>) -> Self {
        PixelFragmentSequence {
            offset_table: C::new(),
            fragments: fragments.into(),
        }
    }

    /// Gets a reference to the basic offset table.
    #[inline]
    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    /// Gets a reference to the pixel data fragments.
    #[inline]
    pub fn fragments(&self) -> &[InMemFragment] {
        &self.fragments
    }

    /// Decompose the sequence into its offset table and fragments.
    #[inline]
    pub fn into_parts(self) -> (C<u32>, C<InMemFragment>) {
        (self.offset_table, self.fragments)
    }
}

impl HasLength for PixelFragmentSequence {
    /// Encapsulated pixel data is always of undefined length.
    #[inline]
    fn length(&self) -> Length {
        Length::UNDEFINED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataElement, DataSet};
    use crate::header::{Tag, VR};
    use smallvec::smallvec;

    #[test]
    fn sequence_equality_ignores_length() {
        let mut item = DataSet::new();
        item.put(DataElement::new(Tag(0x0008, 0x0100), VR::SH, PrimitiveValue::from("T-D1100")));
        let a = Value::new_sequence(vec![item.clone()], Length::UNDEFINED);
        let b = Value::new_sequence(vec![item], Length(24));
        assert_eq!(a, b);
        assert_eq!(a.multiplicity(), 1);
        assert_eq!(a.value_type(), ValueType::DataSetSequence);
    }

    #[test]
    fn pixel_sequence_accessors() {
        let offset_table: C<u32> = smallvec![0];
        let fragments: C<InMemFragment> = smallvec![vec![0xFF, 0xD8]];
        let v = Value::new_pixel_sequence(offset_table, fragments);
        assert_eq!(v.offset_table(), Some(&[0_u32][..]));
        assert_eq!(v.fragments().map(|f| f.len()), Some(1));
        assert!(v.primitive().is_none());
        assert!(v.to_str().is_err());
    }
}
