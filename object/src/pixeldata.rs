//! Module for pixel data extraction.
//!
//! Pixel data is either native,
//! one contiguous raster of samples for all frames,
//! or encapsulated,
//! a sequence of compressed fragments to be assembled into frames.
//! Decompression is not done here:
//! implementors of [`PixelDataDecoder`] take the assembled fragments
//! of each frame and turn them into native samples.
use crate::error::{
    DecodePixelDataSnafu, InvalidValueSnafu, MissingAttributeSnafu, PixelDataSizeMismatchSnafu,
    Result, UnsupportedTransferSyntaxSnafu,
};
use byteordered::ByteOrdered;
use p10_core::value::InMemFragment;
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, Value, VR};
use p10_dictionary::tags;
use p10_encoding::transfer_syntax::{Codec, TransferSyntax};
use snafu::{ensure, OptionExt, ResultExt};
use std::borrow::Cow;
use std::error::Error as StdError;
use tracing::{debug, warn};

/// The attributes of the Image Pixel module
/// which determine the shape of the pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelDataDescriptor {
    /// Rows (0028,0010)
    pub rows: u16,
    /// Columns (0028,0011)
    pub columns: u16,
    /// Bits Allocated (0028,0100)
    pub bits_allocated: u16,
    /// Bits Stored (0028,0101)
    pub bits_stored: u16,
    /// Samples per Pixel (0028,0002)
    pub samples_per_pixel: u16,
    /// Number of Frames (0028,0008)
    pub number_of_frames: u32,
    /// Photometric Interpretation (0028,0004)
    pub photometric_interpretation: String,
    /// Pixel Representation (0028,0103): 0 for unsigned, 1 for signed samples
    pub pixel_representation: u16,
    /// Planar Configuration (0028,0006)
    pub planar_configuration: u16,
}

fn uint_of(ds: &DataSet, tag: Tag) -> Result<Option<u32>> {
    let Some(value) = ds.element_opt(tag).and_then(|e| e.value().primitive()) else {
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }
    value
        .to_int::<u32>()
        .map(Some)
        .ok()
        .context(InvalidValueSnafu {
            tag,
            reason: "not an unsigned integer",
        })
}

fn narrow(tag: Tag, value: u32) -> Result<u16> {
    u16::try_from(value).ok().context(InvalidValueSnafu {
        tag,
        reason: "out of range",
    })
}

impl PixelDataDescriptor {
    /// Create a descriptor of single frame, single sample,
    /// unsigned monochrome data.
    pub fn new(rows: u16, columns: u16, bits_allocated: u16) -> Self {
        PixelDataDescriptor {
            rows,
            columns,
            bits_allocated,
            bits_stored: bits_allocated,
            samples_per_pixel: 1,
            number_of_frames: 1,
            photometric_interpretation: "MONOCHROME2".to_string(),
            pixel_representation: 0,
            planar_configuration: 0,
        }
    }

    /// Collect the Image Pixel module attributes of a data set.
    ///
    /// Rows, Columns and Bits Allocated are required.
    /// The other attributes fall back to
    /// single frame, single sample, unsigned data
    /// with all allocated bits stored.
    pub fn from_data_set(ds: &DataSet) -> Result<Self> {
        let required = |tag: Tag| -> Result<u16> {
            let value = uint_of(ds, tag)?.context(MissingAttributeSnafu { tag })?;
            narrow(tag, value)
        };
        let optional = |tag: Tag, default: u16| -> Result<u16> {
            uint_of(ds, tag)?.map_or(Ok(default), |v| narrow(tag, v))
        };

        let rows = required(tags::ROWS)?;
        let columns = required(tags::COLUMNS)?;
        let bits_allocated = required(tags::BITS_ALLOCATED)?;
        ensure!(
            bits_allocated > 0,
            InvalidValueSnafu {
                tag: tags::BITS_ALLOCATED,
                reason: "must not be zero",
            }
        );
        let samples_per_pixel = optional(tags::SAMPLES_PER_PIXEL, 1)?;
        let number_of_frames = uint_of(ds, tags::NUMBER_OF_FRAMES)?.unwrap_or(1);

        let photometric_interpretation = ds
            .element_opt(tags::PHOTOMETRIC_INTERPRETATION)
            .and_then(|e| e.value().primitive())
            .map(|v| v.to_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                if samples_per_pixel > 1 {
                    "RGB".to_string()
                } else {
                    "MONOCHROME2".to_string()
                }
            });

        Ok(PixelDataDescriptor {
            rows,
            columns,
            bits_allocated,
            bits_stored: optional(tags::BITS_STORED, bits_allocated)?,
            samples_per_pixel,
            number_of_frames,
            photometric_interpretation,
            pixel_representation: optional(tags::PIXEL_REPRESENTATION, 0)?,
            planar_configuration: optional(tags::PLANAR_CONFIGURATION, 0)?,
        })
    }

    /// Put the Image Pixel module attributes into a data set,
    /// replacing existing ones.
    pub fn fill_data_set(&self, ds: &mut DataSet) {
        let us = |tag: Tag, v: u16| DataElement::new(tag, VR::US, PrimitiveValue::from(v));

        ds.put(us(tags::SAMPLES_PER_PIXEL, self.samples_per_pixel));
        ds.put_str(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            self.photometric_interpretation.as_str(),
        );
        if self.samples_per_pixel > 1 {
            ds.put(us(tags::PLANAR_CONFIGURATION, self.planar_configuration));
        }
        if self.number_of_frames > 1 {
            ds.put_str(
                tags::NUMBER_OF_FRAMES,
                VR::IS,
                self.number_of_frames.to_string(),
            );
        }
        ds.put(us(tags::ROWS, self.rows));
        ds.put(us(tags::COLUMNS, self.columns));
        ds.put(us(tags::BITS_ALLOCATED, self.bits_allocated));
        ds.put(us(tags::BITS_STORED, self.bits_stored));
        ds.put(us(tags::HIGH_BIT, self.bits_stored.saturating_sub(1)));
        ds.put(us(tags::PIXEL_REPRESENTATION, self.pixel_representation));
    }

    fn frame_bits(&self) -> u64 {
        u64::from(self.rows)
            * u64::from(self.columns)
            * u64::from(self.samples_per_pixel)
            * u64::from(self.bits_allocated)
    }

    /// The size in bytes of one native frame,
    /// if frames start on byte boundaries.
    pub fn native_frame_len(&self) -> Option<usize> {
        let bits = self.frame_bits();
        if bits % 8 == 0 {
            Some((bits / 8) as usize)
        } else {
            None
        }
    }

    /// The size in bytes of the native pixel data of all frames,
    /// not counting the padding to even length.
    ///
    /// Bit-packed samples (such as with 1 bit allocated)
    /// are packed continuously across frames.
    pub fn expected_native_len(&self) -> usize {
        let bits = self.frame_bits() * u64::from(self.number_of_frames.max(1));
        ((bits + 7) / 8) as usize
    }

    /// Whether a native pixel data value of `len` bytes
    /// fits these attributes.
    /// One byte of padding is tolerated when the expected size is odd.
    pub fn native_len_matches(&self, len: usize) -> bool {
        let expected = self.expected_native_len();
        len == expected || (expected % 2 == 1 && len == expected + 1)
    }

    /// Fail with a size mismatch
    /// if a native pixel data value of `len` bytes does not fit these attributes.
    pub fn check_native_len(&self, len: usize) -> Result<()> {
        ensure!(
            self.native_len_matches(len),
            PixelDataSizeMismatchSnafu {
                expected: self.expected_native_len(),
                actual: len,
            }
        );
        Ok(())
    }
}

/// Pixel data taken out of a data set,
/// owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    /// Native pixel data.
    /// Samples wider than 8 bits are in little endian byte order.
    Native {
        /// the pixel data attributes
        descriptor: PixelDataDescriptor,
        /// the samples of all frames
        data: Vec<u8>,
    },
    /// Encapsulated pixel data.
    Encapsulated {
        /// the pixel data attributes
        descriptor: PixelDataDescriptor,
        /// the transfer syntax of the compressed fragments
        transfer_syntax: &'static TransferSyntax,
        /// the basic offset table as read
        offset_table: Vec<u32>,
        /// the fragments of each frame
        frames: Vec<Vec<InMemFragment>>,
    },
}

impl PixelBuffer {
    /// The pixel data attributes.
    pub fn descriptor(&self) -> &PixelDataDescriptor {
        match self {
            PixelBuffer::Native { descriptor, .. } | PixelBuffer::Encapsulated { descriptor, .. } => {
                descriptor
            }
        }
    }

    /// Whether the pixel data is made of compressed fragments.
    pub fn is_encapsulated(&self) -> bool {
        matches!(self, PixelBuffer::Encapsulated { .. })
    }

    /// The number of frames which can be retrieved.
    pub fn frame_count(&self) -> usize {
        match self {
            PixelBuffer::Native { descriptor, .. } => descriptor.number_of_frames.max(1) as usize,
            PixelBuffer::Encapsulated { frames, .. } => frames.len(),
        }
    }

    /// The bytes of the frame at index `i`.
    ///
    /// Compressed frames are returned as the concatenation of their fragments.
    /// Returns `None` if the frame does not exist,
    /// or if native frames do not start on byte boundaries.
    pub fn frame(&self, i: usize) -> Option<Cow<'_, [u8]>> {
        match self {
            PixelBuffer::Native { descriptor, data } => {
                if i >= self.frame_count() {
                    return None;
                }
                let len = descriptor.native_frame_len()?;
                data.get(i * len..(i + 1) * len).map(Cow::from)
            }
            PixelBuffer::Encapsulated { frames, .. } => match frames.get(i)?.as_slice() {
                [single] => Some(Cow::from(single.as_slice())),
                fragments => Some(Cow::from(fragments.concat())),
            },
        }
    }

    /// The compressed fragments of the frame at index `i`.
    pub fn frame_fragments(&self, i: usize) -> Option<&[InMemFragment]> {
        match self {
            PixelBuffer::Native { .. } => None,
            PixelBuffer::Encapsulated { frames, .. } => frames.get(i).map(Vec::as_slice),
        }
    }

    /// The raw native samples of all frames.
    pub fn native_data(&self) -> Option<&[u8]> {
        match self {
            PixelBuffer::Native { data, .. } => Some(data),
            PixelBuffer::Encapsulated { .. } => None,
        }
    }

    /// Read native 16-bit samples.
    ///
    /// Returns `None` for encapsulated data
    /// or when 16 bits are not allocated per sample.
    pub fn native_samples_u16(&self) -> Option<Vec<u16>> {
        let data = self.native_data()?;
        if self.descriptor().bits_allocated != 16 {
            return None;
        }
        let mut reader = ByteOrdered::le(data);
        let mut out = Vec::with_capacity(data.len() / 2);
        while let Ok(v) = reader.read_u16() {
            out.push(v);
        }
        Some(out)
    }

    /// Decompress all frames into a native buffer.
    ///
    /// Native buffers are returned as they are.
    pub fn decode_with(&self, decoder: &dyn PixelDataDecoder) -> Result<PixelBuffer> {
        let PixelBuffer::Encapsulated {
            descriptor,
            transfer_syntax,
            frames,
            ..
        } = self
        else {
            return Ok(self.clone());
        };
        let codec = transfer_syntax.codec();
        ensure!(
            decoder.supports(codec),
            UnsupportedTransferSyntaxSnafu {
                uid: transfer_syntax.uid()
            }
        );
        let mut data = Vec::with_capacity(descriptor.expected_native_len());
        for fragments in frames {
            let frame = decoder
                .decode_frame(codec, descriptor, fragments)
                .context(DecodePixelDataSnafu)?;
            data.extend_from_slice(&frame);
        }
        descriptor.check_native_len(data.len())?;
        Ok(PixelBuffer::Native {
            descriptor: descriptor.clone(),
            data,
        })
    }
}

/// Boxed error of a pixel data decoder.
pub type DecodeError = Box<dyn StdError + Send + Sync + 'static>;

/// A decompressor of encapsulated pixel data,
/// to be provided by the caller.
pub trait PixelDataDecoder {
    /// Whether this decoder can decompress data of the given codec.
    fn supports(&self, codec: Codec) -> bool;

    /// Decompress one frame from its fragments
    /// into native samples, in little endian byte order.
    fn decode_frame(
        &self,
        codec: Codec,
        descriptor: &PixelDataDescriptor,
        fragments: &[InMemFragment],
    ) -> Result<Vec<u8>, DecodeError>;
}

/// Take the pixel data out of a data set read under the given transfer syntax.
pub(crate) fn extract(ds: &DataSet, ts: &'static TransferSyntax) -> Result<PixelBuffer> {
    let element = ds
        .element_opt(tags::PIXEL_DATA)
        .context(MissingAttributeSnafu {
            tag: tags::PIXEL_DATA,
        })?;
    let descriptor = PixelDataDescriptor::from_data_set(ds)?;

    match element.value() {
        Value::Primitive(value) => {
            let data = value.to_bytes().into_owned();
            if !descriptor.native_len_matches(data.len()) {
                warn!(
                    "Pixel data has {} bytes, but {} bytes are expected",
                    data.len(),
                    descriptor.expected_native_len()
                );
            }
            Ok(PixelBuffer::Native { descriptor, data })
        }
        Value::PixelSequence(seq) => {
            let eot = ds
                .element_opt(tags::EXTENDED_OFFSET_TABLE)
                .and_then(|e| e.value().primitive())
                .and_then(|v| match v {
                    PrimitiveValue::U64(offsets) => Some(offsets.to_vec()),
                    PrimitiveValue::U8(bytes) => {
                        let mut reader = ByteOrdered::le(&bytes[..]);
                        let mut offsets = Vec::with_capacity(bytes.len() / 8);
                        while let Ok(v) = reader.read_u64() {
                            offsets.push(v);
                        }
                        Some(offsets)
                    }
                    _ => None,
                });
            let frames = assemble_frames(
                seq.fragments(),
                seq.offset_table(),
                eot.as_deref(),
                descriptor.number_of_frames,
                ts.codec(),
            );
            Ok(PixelBuffer::Encapsulated {
                descriptor,
                transfer_syntax: ts,
                offset_table: seq.offset_table().to_vec(),
                frames,
            })
        }
        Value::Sequence(_) => InvalidValueSnafu {
            tag: tags::PIXEL_DATA,
            reason: "pixel data holds data set items",
        }
        .fail(),
    }
}

/// Group fragments by the frame they start at,
/// given frame offsets relative to the first fragment item.
fn split_by_offsets<T>(fragments: &[InMemFragment], offsets: &[T]) -> Option<Vec<Vec<InMemFragment>>>
where
    T: Copy + Into<u64>,
{
    let offsets: Vec<u64> = offsets.iter().map(|&o| o.into()).collect();
    if offsets.first() != Some(&0) || offsets.windows(2).any(|w| w[0] >= w[1]) {
        return None;
    }

    let mut frames: Vec<Vec<InMemFragment>> = vec![Vec::new(); offsets.len()];
    let mut position = 0_u64;
    let mut frame = 0;
    for fragment in fragments {
        while frame + 1 < offsets.len() && position >= offsets[frame + 1] {
            frame += 1;
        }
        frames[frame].push(fragment.clone());
        // item header and value
        position += 8 + fragment.len() as u64;
    }
    if frames.iter().any(Vec::is_empty) {
        return None;
    }
    Some(frames)
}

fn starts_frame(codec: Codec, fragment: &[u8]) -> bool {
    if codec.is_jpeg_family() {
        fragment.starts_with(&[0xFF, 0xD8])
    } else if codec.is_jpeg2000_family() {
        fragment.starts_with(&[0xFF, 0x4F, 0xFF, 0x51])
    } else {
        false
    }
}

/// Assemble the fragments of encapsulated pixel data into frames.
///
/// Frame boundaries are taken from, in order of preference:
/// the basic offset table,
/// the extended offset table,
/// a one to one mapping when there are as many fragments as frames,
/// or the start-of-image markers of the codec.
/// Otherwise all fragments make a single frame.
fn assemble_frames(
    fragments: &[InMemFragment],
    offset_table: &[u32],
    extended_offset_table: Option<&[u64]>,
    number_of_frames: u32,
    codec: Codec,
) -> Vec<Vec<InMemFragment>> {
    if fragments.is_empty() {
        return Vec::new();
    }
    let number_of_frames = number_of_frames.max(1) as usize;

    if !offset_table.is_empty() {
        if let Some(frames) = split_by_offsets(fragments, offset_table) {
            debug!("Frames delimited by basic offset table");
            return frames;
        }
        warn!("Basic offset table does not match the fragments, ignoring it");
    }
    if let Some(eot) = extended_offset_table.filter(|t| !t.is_empty()) {
        if let Some(frames) = split_by_offsets(fragments, eot) {
            debug!("Frames delimited by extended offset table");
            return frames;
        }
        warn!("Extended offset table does not match the fragments, ignoring it");
    }
    if number_of_frames == 1 {
        return vec![fragments.to_vec()];
    }
    if fragments.len() == number_of_frames {
        return fragments.iter().map(|f| vec![f.clone()]).collect();
    }

    // scan for the start of each frame
    if starts_frame(codec, &fragments[0]) {
        let mut frames: Vec<Vec<InMemFragment>> = Vec::with_capacity(number_of_frames);
        for fragment in fragments {
            match frames.last_mut() {
                Some(frame) if !starts_frame(codec, fragment) => frame.push(fragment.clone()),
                _ => frames.push(vec![fragment.clone()]),
            }
        }
        if frames.len() == number_of_frames {
            debug!("Frames delimited by start-of-image markers");
            return frames;
        }
    }

    warn!(
        "Could not find the boundaries of {} frames in {} fragments",
        number_of_frames,
        fragments.len()
    );
    vec![fragments.to_vec()]
}
