//! Module containing the DICOM transfer syntax data structure
//! and the registry of transfer syntaxes known to this crate.
//!
//! A transfer syntax determines the byte order of the data set,
//! whether value representations are explicit,
//! and whether pixel data is encapsulated by a compression codec.
//! Codecs are only identified here:
//! decompression is an external concern.

use crate::decode::explicit::ExplicitVRDecoder;
use crate::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use crate::decode::DecodeFrom;
use crate::encode::explicit::ExplicitVREncoder;
use crate::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use crate::encode::EncodeTo;
use p10_dictionary::uids;
use std::fmt;
use std::io::{Read, Write};

pub use byteordered::Endianness;

/// A decoder with its type erased.
pub type DynDecoder<'s, S> = Box<dyn DecodeFrom<S> + 's>;

/// An encoder with its type erased.
pub type DynEncoder<'w, W> = Box<dyn EncodeTo<W> + 'w>;

/// The compression codec of encapsulated pixel data,
/// or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Codec {
    /// Pixel data is native (not encapsulated).
    None,
    /// The transfer syntax requires a transformation of the whole data set
    /// (deflate) or is a video stream, neither of which is supported.
    Unsupported,
    /// RLE Lossless
    Rle,
    /// JPEG Baseline (Process 1)
    JpegBaseline,
    /// JPEG Extended (Process 2 & 4)
    JpegExtended,
    /// JPEG Lossless, Non-Hierarchical (Process 14)
    JpegLossless,
    /// JPEG Lossless, Non-Hierarchical, First-Order Prediction
    JpegLosslessSv1,
    /// JPEG-LS Lossless
    JpegLsLossless,
    /// JPEG-LS Lossy (Near-Lossless)
    JpegLsNearLossless,
    /// JPEG 2000 (Lossless Only)
    Jpeg2000Lossless,
    /// JPEG 2000
    Jpeg2000,
    /// High-Throughput JPEG 2000 (Lossless Only)
    HtJpeg2000Lossless,
    /// High-Throughput JPEG 2000 with RPCL Options (Lossless Only)
    HtJpeg2000LosslessRpcl,
    /// High-Throughput JPEG 2000
    HtJpeg2000,
}

impl Codec {
    /// Whether pixel data under this codec is encapsulated in fragments.
    pub fn is_encapsulated(self) -> bool {
        !matches!(self, Codec::None | Codec::Unsupported)
    }

    /// Whether frames of this codec begin with a JPEG start-of-image marker.
    pub fn is_jpeg_family(self) -> bool {
        matches!(
            self,
            Codec::JpegBaseline
                | Codec::JpegExtended
                | Codec::JpegLossless
                | Codec::JpegLosslessSv1
                | Codec::JpegLsLossless
                | Codec::JpegLsNearLossless
        )
    }

    /// Whether frames of this codec begin with a JPEG 2000 codestream marker.
    pub fn is_jpeg2000_family(self) -> bool {
        matches!(
            self,
            Codec::Jpeg2000Lossless
                | Codec::Jpeg2000
                | Codec::HtJpeg2000Lossless
                | Codec::HtJpeg2000LosslessRpcl
                | Codec::HtJpeg2000
        )
    }
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The pixel data codec.
    codec: Codec,
}

const fn ts(
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    explicit_vr: bool,
    codec: Codec,
) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        byte_order,
        explicit_vr,
        codec,
    }
}

const fn encapsulated(uid: &'static str, name: &'static str, codec: Codec) -> TransferSyntax {
    ts(uid, name, Endianness::Little, true, codec)
}

/// Implicit VR Little Endian: the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = ts(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = ts(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// Explicit VR Big Endian (retired, still found in older archives)
#[allow(deprecated)]
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = ts(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

/// RLE Lossless
pub const RLE_LOSSLESS: TransferSyntax =
    encapsulated(uids::RLE_LOSSLESS, "RLE Lossless", Codec::Rle);

/// JPEG Baseline (Process 1)
pub const JPEG_BASELINE: TransferSyntax = encapsulated(
    uids::JPEG_BASELINE8_BIT,
    "JPEG Baseline (Process 1)",
    Codec::JpegBaseline,
);

/// JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: TransferSyntax = encapsulated(
    uids::JPEG_EXTENDED12_BIT,
    "JPEG Extended (Process 2 & 4)",
    Codec::JpegExtended,
);

/// JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEG_LOSSLESS,
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    Codec::JpegLossless,
);

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_SV1: TransferSyntax = encapsulated(
    uids::JPEG_LOSSLESS_SV1,
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    Codec::JpegLosslessSv1,
);

/// JPEG-LS Lossless
pub const JPEG_LS_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEGLS_LOSSLESS,
    "JPEG-LS Lossless Image Compression",
    Codec::JpegLsLossless,
);

/// JPEG-LS Lossy (Near-Lossless)
pub const JPEG_LS_NEAR_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEGLS_NEAR_LOSSLESS,
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    Codec::JpegLsNearLossless,
);

/// JPEG 2000 (Lossless Only)
pub const JPEG_2000_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEG2000_LOSSLESS,
    "JPEG 2000 Image Compression (Lossless Only)",
    Codec::Jpeg2000Lossless,
);

/// JPEG 2000
pub const JPEG_2000: TransferSyntax =
    encapsulated(uids::JPEG2000, "JPEG 2000 Image Compression", Codec::Jpeg2000);

/// High-Throughput JPEG 2000 (Lossless Only)
pub const HTJ2K_LOSSLESS: TransferSyntax = encapsulated(
    uids::HTJ2K_LOSSLESS,
    "High-Throughput JPEG 2000 Image Compression (Lossless Only)",
    Codec::HtJpeg2000Lossless,
);

/// High-Throughput JPEG 2000 with RPCL Options (Lossless Only)
pub const HTJ2K_LOSSLESS_RPCL: TransferSyntax = encapsulated(
    uids::HTJ2K_LOSSLESS_RPCL,
    "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)",
    Codec::HtJpeg2000LosslessRpcl,
);

/// High-Throughput JPEG 2000
pub const HTJ2K: TransferSyntax = encapsulated(
    uids::HTJ2K,
    "High-Throughput JPEG 2000 Image Compression",
    Codec::HtJpeg2000,
);

/// Deflated Explicit VR Little Endian (recognized, not supported)
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = ts(
    uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// MPEG2 Main Profile / Main Level (recognized, not supported)
pub const MPEG2_MAIN_PROFILE: TransferSyntax = ts(
    uids::MPEG2MPML,
    "MPEG2 Main Profile / Main Level",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// MPEG-4 AVC/H.264 High Profile (recognized, not supported)
pub const MPEG4_HIGH_PROFILE: TransferSyntax = ts(
    uids::MPEG4HP41,
    "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// HEVC/H.265 Main Profile (recognized, not supported)
pub const HEVC_MAIN_PROFILE: TransferSyntax = ts(
    uids::HEVCMP51,
    "HEVC/H.265 Main Profile / Level 5.1",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// All transfer syntaxes known to this crate.
static REGISTRY: [&TransferSyntax; 19] = [
    &IMPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_BIG_ENDIAN,
    &RLE_LOSSLESS,
    &JPEG_BASELINE,
    &JPEG_EXTENDED,
    &JPEG_LOSSLESS,
    &JPEG_LOSSLESS_SV1,
    &JPEG_LS_LOSSLESS,
    &JPEG_LS_NEAR_LOSSLESS,
    &JPEG_2000_LOSSLESS,
    &JPEG_2000,
    &HTJ2K_LOSSLESS,
    &HTJ2K_LOSSLESS_RPCL,
    &HTJ2K,
    &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    &MPEG2_MAIN_PROFILE,
    &MPEG4_HIGH_PROFILE,
    &HEVC_MAIN_PROFILE,
];

impl TransferSyntax {
    /// Obtain a transfer syntax by its UID.
    ///
    /// Trailing null characters and spaces in `uid`,
    /// as left by value padding, are ignored.
    /// Returns `None` if the transfer syntax is not known at all.
    /// A known but unsupported transfer syntax is returned
    /// and reports `false` in [`is_supported`](Self::is_supported).
    pub fn from_uid(uid: &str) -> Option<&'static TransferSyntax> {
        let uid = uid.trim_end_matches(|c| c == '\0' || c == ' ');
        REGISTRY.iter().copied().find(|ts| ts.uid == uid)
    }

    /// Iterate over all known transfer syntaxes.
    pub fn iter_all() -> impl Iterator<Item = &'static TransferSyntax> {
        REGISTRY.iter().copied()
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether value representations are explicitly encoded.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain the pixel data codec.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Whether data sets in this transfer syntax can be read and written.
    pub fn is_supported(&self) -> bool {
        self.codec != Codec::Unsupported
    }

    /// Whether pixel data in this transfer syntax is encapsulated.
    pub fn is_encapsulated_pixel_data(&self) -> bool {
        self.codec.is_encapsulated()
    }

    /// Whether pixel data in this transfer syntax is native.
    pub fn is_native_pixel_data(&self) -> bool {
        self.codec == Codec::None
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax.
    /// Returns `None` if the transfer syntax is not supported.
    pub fn decoder<'s, S>(&self) -> Option<DynDecoder<'s, S>>
    where
        S: ?Sized + Read + 's,
    {
        if !self.is_supported() {
            return None;
        }
        if self.explicit_vr {
            Some(Box::new(ExplicitVRDecoder::new(self.byte_order)))
        } else {
            Some(Box::new(StandardImplicitVRLittleEndianDecoder::default()))
        }
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax.
    /// Returns `None` if the transfer syntax is not supported.
    pub fn encoder<'w, W>(&self) -> Option<DynEncoder<'w, W>>
    where
        W: ?Sized + Write + 'w,
    {
        if !self.is_supported() {
            return None;
        }
        if self.explicit_vr {
            Some(Box::new(ExplicitVREncoder::new(self.byte_order)))
        } else {
            Some(Box::new(ImplicitVRLittleEndianEncoder::default()))
        }
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_padding() {
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts, &EXPLICIT_VR_LITTLE_ENDIAN);
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2 ").unwrap();
        assert_eq!(ts, &IMPLICIT_VR_LITTLE_ENDIAN);
        assert!(TransferSyntax::from_uid("1.2.3.4").is_none());
    }

    #[test]
    fn native_syntaxes() {
        assert!(!IMPLICIT_VR_LITTLE_ENDIAN.is_explicit_vr());
        assert_eq!(EXPLICIT_VR_BIG_ENDIAN.endianness(), Endianness::Big);
        for ts in [&IMPLICIT_VR_LITTLE_ENDIAN, &EXPLICIT_VR_LITTLE_ENDIAN, &EXPLICIT_VR_BIG_ENDIAN] {
            assert!(ts.is_supported());
            assert!(ts.is_native_pixel_data());
            assert!(!ts.is_encapsulated_pixel_data());
        }
    }

    #[test]
    fn encapsulated_syntaxes() {
        let jpeg = TransferSyntax::from_uid("1.2.840.10008.1.2.4.50").unwrap();
        assert_eq!(jpeg.codec(), Codec::JpegBaseline);
        assert!(jpeg.is_encapsulated_pixel_data());
        assert!(jpeg.is_explicit_vr());
        assert_eq!(jpeg.endianness(), Endianness::Little);
        assert!(jpeg.codec().is_jpeg_family());

        let htj2k = TransferSyntax::from_uid("1.2.840.10008.1.2.4.203").unwrap();
        assert!(htj2k.codec().is_jpeg2000_family());
        assert_eq!(RLE_LOSSLESS.codec(), Codec::Rle);
    }

    #[test]
    fn unsupported_syntaxes() {
        let deflate = TransferSyntax::from_uid("1.2.840.10008.1.2.1.99").unwrap();
        assert!(!deflate.is_supported());
        assert!(deflate.decoder::<&[u8]>().is_none());
        assert!(deflate.encoder::<Vec<u8>>().is_none());
        assert!(!MPEG2_MAIN_PROFILE.is_encapsulated_pixel_data());
    }

    #[test]
    fn registry_uids_are_unique() {
        let mut uids: Vec<_> = TransferSyntax::iter_all().map(|ts| ts.uid()).collect();
        uids.sort_unstable();
        uids.dedup();
        assert_eq!(uids.len(), REGISTRY.len());
    }
}
