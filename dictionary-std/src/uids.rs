//! UID declarations
// Automatically generated. Edit at your own risk.

/// SOP Class: Verification SOP Class
#[rustfmt::skip]
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1)
#[rustfmt::skip]
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4)
#[rustfmt::skip]
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
#[rustfmt::skip]
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
#[rustfmt::skip]
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2MPML: &str = "1.2.840.10008.1.2.4.100";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41: &str = "1.2.840.10008.1.2.4.102";
/// Transfer Syntax: HEVC/H.265 Main Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCMP51: &str = "1.2.840.10008.1.2.4.107";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const HTJ2K_LOSSLESS: &str = "1.2.840.10008.1.2.4.201";
/// Transfer Syntax: High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
#[rustfmt::skip]
pub const HTJ2K_LOSSLESS_RPCL: &str = "1.2.840.10008.1.2.4.202";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression
#[rustfmt::skip]
pub const HTJ2K: &str = "1.2.840.10008.1.2.4.203";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
/// SOP Class: Digital Mammography X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.2";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Nuclear Medicine Image Storage
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// SOP Class: Positron Emission Tomography Image Storage
#[rustfmt::skip]
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";

/// Obtain the storage SOP class of images of the given modality.
///
/// Modalities without a dedicated image storage class here
/// map to [`SECONDARY_CAPTURE_IMAGE_STORAGE`].
///
/// ```
/// # use p10_dictionary::uids;
/// assert_eq!(uids::sop_class_for_modality("CT"), uids::CT_IMAGE_STORAGE);
/// assert_eq!(uids::sop_class_for_modality("XC"), uids::SECONDARY_CAPTURE_IMAGE_STORAGE);
/// ```
pub fn sop_class_for_modality(modality: &str) -> &'static str {
    match modality.trim_end() {
        "CR" => COMPUTED_RADIOGRAPHY_IMAGE_STORAGE,
        "CT" => CT_IMAGE_STORAGE,
        "MR" => MR_IMAGE_STORAGE,
        "US" => ULTRASOUND_IMAGE_STORAGE,
        "DX" => DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION,
        "MG" => DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION,
        "NM" => NUCLEAR_MEDICINE_IMAGE_STORAGE,
        "PT" => POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE,
        _ => SECONDARY_CAPTURE_IMAGE_STORAGE,
    }
}
