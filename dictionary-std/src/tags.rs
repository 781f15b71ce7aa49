//! Data element tag declarations
//!
//! Each constant maps an attribute keyword to its tag.
//! Attributes repeating across groups, such as the overlay attributes,
//! are declared with the open digits zeroed.
// Automatically generated. Edit at your own risk.

use p10_core::dictionary::{DataDictionaryEntryRef, Multiplicity, TagRange::*};
use p10_core::header::{Tag, VR::*};

/// FileMetaInformationGroupLength 0002,0000 UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion 0002,0001 OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID 0002,0002 UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID 0002,0003 UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID 0002,0010 UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID 0002,0012 UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName 0002,0013 SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle 0002,0016 AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle 0002,0017 AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle 0002,0018 AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID 0002,0100 UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation 0002,0102 OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet 0008,0005 CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType 0008,0008 CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate 0008,0012 DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime 0008,0013 TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID 0008,0014 UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID 0008,0016 UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID 0008,0018 UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate 0008,0020 DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate 0008,0021 DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate 0008,0022 DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate 0008,0023 DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime 0008,002A DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime 0008,0030 TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime 0008,0031 TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime 0008,0032 TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime 0008,0033 TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber 0008,0050 SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality 0008,0060 CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType 0008,0064 CS 1
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer 0008,0070 LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName 0008,0080 LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress 0008,0081 ST 1
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName 0008,0090 PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue 0008,0100 SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator 0008,0102 SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning 0008,0104 LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// TimezoneOffsetFromUTC 0008,0201 SH 1
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName 0008,1010 SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription 0008,1030 LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence 0008,1032 SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription 0008,103E LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// PhysiciansOfRecord 0008,1048 PN 1-n
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// ManufacturerModelName 0008,1090 LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence 0008,1110 SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedSeriesSequence 0008,1115 SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence 0008,1140 SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID 0008,1150 UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID 0008,1155 UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DerivationDescription 0008,2111 ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// DerivationCodeSequence 0008,9215 SQ 1
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName 0010,0010 PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID 0010,0020 LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate 0010,0030 DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex 0010,0040 CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge 0010,1010 AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize 0010,1020 DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight 0010,1030 DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// AdditionalPatientHistory 0010,21B0 LT 1
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PatientComments 0010,4000 LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ContrastBolusAgent 0018,0010 LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined 0018,0015 CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence 0018,0020 CS 1-n
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SliceThickness 0018,0050 DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP 0018,0060 DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime 0018,0080 DS 1
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime 0018,0081 DS 1
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// MagneticFieldStrength 0018,0087 DS 1
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices 0018,0088 DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber 0018,1000 LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions 0018,1020 LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName 0018,1030 LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime 0018,1150 IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent 0018,1151 IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure 0018,1152 IS 1
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ImagerPixelSpacing 0018,1164 DS 2
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// PatientPosition 0018,5100 CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// DetectorType 0018,7004 CS 1
#[rustfmt::skip]
pub const DETECTOR_TYPE: Tag = Tag(0x0018, 0x7004);
/// StudyInstanceUID 0020,000D UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID 0020,000E UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID 0020,0010 SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber 0020,0011 IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber 0020,0012 IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber 0020,0013 IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation 0020,0020 CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient 0020,0032 DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient 0020,0037 DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID 0020,0052 UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality 0020,0060 CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// TemporalPositionIdentifier 0020,0100 IS 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// NumberOfTemporalPositions 0020,0105 IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// SliceLocation 0020,1041 DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments 0020,4000 LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel 0028,0002 US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation 0028,0004 CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration 0028,0006 US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames 0028,0008 IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer 0028,0009 AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows 0028,0010 US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns 0028,0011 US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing 0028,0030 DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio 0028,0034 IS 2
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated 0028,0100 US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored 0028,0101 US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit 0028,0102 US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation 0028,0103 US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue 0028,0106 US 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue 0028,0107 US 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue 0028,0120 US 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// BurnedInAnnotation 0028,0301 CS 1
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// WindowCenter 0028,1050 DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth 0028,1051 DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept 0028,1052 DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope 0028,1053 DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType 0028,1054 LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableDescriptor 0028,1101 US 3
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor 0028,1102 US 3
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor 0028,1103 US 3
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// RedPaletteColorLookupTableData 0028,1201 OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData 0028,1202 OW 1
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData 0028,1203 OW 1
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LossyImageCompression 0028,2110 CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio 0028,2112 DS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod 0028,2114 CS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// ModalityLUTSequence 0028,3000 SQ 1
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// VOILUTSequence 0028,3010 SQ 1
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestedProcedureDescription 0032,1060 LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// ScheduledProcedureStepID 0040,0009 SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// PerformedProcedureStepStartDate 0040,0244 DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime 0040,0245 TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepDescription 0040,0254 LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProtocolCodeSequence 0040,0260 SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// RequestAttributesSequence 0040,0275 SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ContentSequence 0040,A730 SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RadiopharmaceuticalInformationSequence 0054,0016 SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// NumberOfSlices 0054,0081 US 1
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// IconImageSequence 0088,0200 SQ 1
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// OverlayRows 60xx,0010 US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns 60xx,0011 US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType 60xx,0040 CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin 60xx,0050 SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated 60xx,0100 US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition 60xx,0102 US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData 60xx,3000 OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// ExtendedOffsetTable 7FE0,0001 OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths 7FE0,0002 OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData 7FE0,0008 OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData 7FE0,0009 OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData 7FE0,0010 OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence FFFA,FFFA SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding FFFC,FFFC OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: UL, vm: Multiplicity::ONE },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: OB, vm: Multiplicity::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: AE, vm: Multiplicity::ONE },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: AE, vm: Multiplicity::ONE },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: AE, vm: Multiplicity::ONE },
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: OB, vm: Multiplicity::ONE },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: CS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: CS, vm: Multiplicity { min: 2, max: None } },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: DT, vm: Multiplicity::ONE },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(MODALITY), alias: "Modality", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: ST, vm: Multiplicity::ONE },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: PN, vm: Multiplicity::ONE },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(PHYSICIANS_OF_RECORD), alias: "PhysiciansOfRecord", vr: PN, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: ST, vm: Multiplicity::ONE },
    E { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: PN, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: AS, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(ADDITIONAL_PATIENT_HISTORY), alias: "AdditionalPatientHistory", vr: LT, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: LT, vm: Multiplicity::ONE },
    E { tag: Single(CONTRAST_BOLUS_AGENT), alias: "ContrastBolusAgent", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(SCANNING_SEQUENCE), alias: "ScanningSequence", vr: CS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(KVP), alias: "KVP", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(REPETITION_TIME), alias: "RepetitionTime", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(ECHO_TIME), alias: "EchoTime", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(MAGNETIC_FIELD_STRENGTH), alias: "MagneticFieldStrength", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: LO, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(EXPOSURE), alias: "Exposure", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(IMAGER_PIXEL_SPACING), alias: "ImagerPixelSpacing", vr: DS, vm: Multiplicity::exact(2) },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(DETECTOR_TYPE), alias: "DetectorType", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: CS, vm: Multiplicity::exact(2) },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: DS, vm: Multiplicity::exact(3) },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: DS, vm: Multiplicity::exact(6) },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: UI, vm: Multiplicity::ONE },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(TEMPORAL_POSITION_IDENTIFIER), alias: "TemporalPositionIdentifier", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(NUMBER_OF_TEMPORAL_POSITIONS), alias: "NumberOfTemporalPositions", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: LT, vm: Multiplicity::ONE },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: IS, vm: Multiplicity::ONE },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: AT, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(ROWS), alias: "Rows", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(COLUMNS), alias: "Columns", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: DS, vm: Multiplicity::exact(2) },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: IS, vm: Multiplicity::exact(2) },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: DS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: DS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: DS, vm: Multiplicity::ONE },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: US, vm: Multiplicity::exact(3) },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: US, vm: Multiplicity::exact(3) },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: US, vm: Multiplicity::exact(3) },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: OW, vm: Multiplicity::ONE },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: OW, vm: Multiplicity::ONE },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: OW, vm: Multiplicity::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: CS, vm: Multiplicity::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: DS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_METHOD), alias: "LossyImageCompressionMethod", vr: CS, vm: Multiplicity::ONE_OR_MORE },
    E { tag: Single(MODALITY_LUT_SEQUENCE), alias: "ModalityLUTSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(VOILUT_SEQUENCE), alias: "VOILUTSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_ID), alias: "ScheduledProcedureStepID", vr: SH, vm: Multiplicity::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: DA, vm: Multiplicity::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: TM, vm: Multiplicity::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: LO, vm: Multiplicity::ONE },
    E { tag: Single(PERFORMED_PROTOCOL_CODE_SEQUENCE), alias: "PerformedProtocolCodeSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE), alias: "RadiopharmaceuticalInformationSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(NUMBER_OF_SLICES), alias: "NumberOfSlices", vr: US, vm: Multiplicity::ONE },
    E { tag: Single(ICON_IMAGE_SEQUENCE), alias: "IconImageSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: US, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: US, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: CS, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: SS, vm: Multiplicity::exact(2) },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: US, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: US, vm: Multiplicity::ONE },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: OW, vm: Multiplicity::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: OV, vm: Multiplicity::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: OV, vm: Multiplicity::ONE },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: OF, vm: Multiplicity::ONE },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: OD, vm: Multiplicity::ONE },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: OW, vm: Multiplicity::ONE },
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", vr: SQ, vm: Multiplicity::ONE },
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", vr: OB, vm: Multiplicity::ONE },
];

