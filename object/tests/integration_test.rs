use p10_core::header::Length;
use p10_core::value::DataSetSequence;
use p10_core::{DataElement, DataSet, PrimitiveValue, Tag, VR};
use p10_dictionary::{tags, uids};
use p10_object::transfer_syntax::{
    EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN, JPEG_BASELINE,
    JPEG_EXTENDED,
};
use p10_object::{
    extract_pixel_data, open_file, read, write, Conformance, ErrorKind, FileMetaTableBuilder,
    ImageRecordBuilder, PixelDataDescriptor, ReadOptions, TransferSyntax, WarningKind,
};
use p10_parser::{write_dataset, WriteOptions};
use rstest::rstest;

/// The file meta group, followed by the given data set bytes.
fn file_with(ts: &TransferSyntax, data_set: &[u8]) -> Vec<u8> {
    let mut bytes = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
        .media_storage_sop_instance_uid("1.2.3.4.100")
        .transfer_syntax(ts.uid())
        .implementation_class_uid("1.2.345.6.7890.1.234")
        .build()
        .unwrap()
        .to_bytes()
        .unwrap();
    bytes.extend_from_slice(data_set);
    bytes
}

fn identified() -> DataSet {
    let mut ds = DataSet::new();
    ds.put_str(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3.4");
    ds.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4.1");
    ds
}

fn item(id: &str) -> DataSet {
    let mut item = DataSet::new();
    item.put_str(tags::SCHEDULED_PROCEDURE_STEP_ID, VR::SH, id);
    item
}

#[rstest]
#[case(&IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_BIG_ENDIAN)]
fn round_trip(#[case] ts: &'static TransferSyntax) {
    let sequence = DataElement::new(
        tags::REQUEST_ATTRIBUTES_SEQUENCE,
        VR::SQ,
        DataSetSequence::new(vec![item("STEP1"), item("STEP02")], Length::UNDEFINED),
    );
    let record = ImageRecordBuilder::new()
        .transfer_syntax(ts)
        .modality("CT")
        .patient_name("Doe^John")
        .patient_id("0042")
        .series_number(2)
        .element(sequence)
        .native_pixel_data(
            PixelDataDescriptor::new(4, 2, 16),
            (0..16).collect::<Vec<u8>>(),
        )
        .build()
        .unwrap();

    let bytes = write(&record, ts).unwrap();
    let first = read(&bytes).unwrap();
    assert!(first.warnings().is_empty(), "{:?}", first.warnings());
    assert_eq!(first.transfer_syntax(), ts);
    assert_eq!(first.study_instance_uid(), record.study_instance_uid());
    assert_eq!(first.sop_class_uid(), uids::CT_IMAGE_STORAGE);
    assert_eq!(first.patient_name(), Some("Doe^John"));
    assert_eq!(first.series_number(), Some(2));
    let items = first
        .data_set()
        .element(tags::REQUEST_ATTRIBUTES_SEQUENCE)
        .unwrap()
        .value()
        .items()
        .unwrap();
    assert_eq!(items.len(), 2);

    let again = write(&first, ts).unwrap();
    assert_eq!(again, bytes);
    let second = read(&again).unwrap();
    assert_eq!(second.data_set(), first.data_set());

    let pixels = extract_pixel_data(&second).unwrap();
    assert_eq!(
        pixels.native_data().unwrap(),
        &(0..16).collect::<Vec<u8>>()[..]
    );
}

#[rstest]
#[case(&IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_BIG_ENDIAN)]
fn transcode_native(#[case] ts: &'static TransferSyntax) {
    let mut ds = identified();
    ds.put_str(tags::PATIENT_NAME, VR::PN, "Roe^Richard");
    PixelDataDescriptor::new(2, 2, 16).fill_data_set(&mut ds);
    ds.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(vec![1_u16, 2, 0x0300, 0x0400]),
    ));
    let bytes = file_with(
        &EXPLICIT_VR_LITTLE_ENDIAN,
        &write_dataset(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default()).unwrap(),
    );
    let record = read(&bytes).unwrap();

    let transcoded = read(&write(&record, ts).unwrap()).unwrap();
    assert_eq!(transcoded.transfer_syntax(), ts);
    assert_eq!(transcoded.data_set(), record.data_set());
    assert_eq!(
        extract_pixel_data(&transcoded).unwrap().native_samples_u16(),
        Some(vec![1, 2, 0x0300, 0x0400])
    );
}

#[rustfmt::skip]
const OUT_OF_ORDER: &[u8] = &[
    // (0008,0010) SH "AB"
    0x08, 0x00, 0x10, 0x00, b'S', b'H', 0x02, 0x00, b'A', b'B',
    // (0008,0005) CS "ISO_IR 100"
    0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0a, 0x00,
    b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
    // (0020,000D) UI "1.2.3.4"
    0x20, 0x00, 0x0d, 0x00, b'U', b'I', 0x08, 0x00,
    b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
    // (0020,000E) UI "1.2.3.4.5"
    0x20, 0x00, 0x0e, 0x00, b'U', b'I', 0x0a, 0x00,
    b'1', b'.', b'2', b'.', b'3', b'.', b'4', b'.', b'5', 0x00,
];

#[test]
fn tags_out_of_order() {
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, OUT_OF_ORDER);
    let data_set_start = (bytes.len() - OUT_OF_ORDER.len()) as u64;

    let err = ReadOptions::new()
        .conformance(Conformance::Strict)
        .from_bytes(&bytes)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfOrderTag);
    assert_eq!(err.offset(), Some(data_set_start + 10));

    let record = read(&bytes).unwrap();
    assert_eq!(record.warnings().len(), 1);
    let warning = &record.warnings()[0];
    assert_eq!(warning.kind, WarningKind::OutOfOrderTag);
    assert_eq!(warning.tag, Some(Tag(0x0008, 0x0005)));
    assert_eq!(warning.offset, Some(data_set_start + 10));
    assert!(record.data_set().contains(Tag(0x0008, 0x0005)));
    assert_eq!(record.series_instance_uid(), "1.2.3.4.5");

    // written back in ascending order
    let copy = read(&write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap()).unwrap();
    assert!(copy.warnings().is_empty());
}

#[test]
fn bad_magic() {
    let err = read(&[0; 132]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadMagic);
    assert_eq!(err.offset(), Some(128));
}

#[test]
fn truncated_header() {
    let err = read(&[0; 64]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedHeader);

    // cut in the middle of the file meta group
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, &[]);
    let err = read(&bytes[..bytes.len() - 5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedHeader);
}

#[test]
fn unsupported_transfer_syntax() {
    let bytes = file_with(
        &p10_object::transfer_syntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        &[],
    );
    let err = read(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedTransferSyntax);
}

#[test]
fn sequence_without_delimiters() {
    let mut ds = identified();
    let mut item = item("STEP1");
    item.set_length(Length::UNDEFINED);
    ds.put(DataElement::new(
        tags::REQUEST_ATTRIBUTES_SEQUENCE,
        VR::SQ,
        DataSetSequence::new(vec![item], Length::UNDEFINED),
    ));
    let data_set = write_dataset(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default()).unwrap();
    // item delimiter and sequence delimiter
    assert_eq!(
        &data_set[data_set.len() - 16..],
        &[0xFE, 0xFF, 0x0D, 0xE0, 0, 0, 0, 0, 0xFE, 0xFF, 0xDD, 0xE0, 0, 0, 0, 0]
    );

    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, &data_set[..data_set.len() - 16]);
    let err = read(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedValue);
    assert_eq!(err.offset(), Some(bytes.len() as u64));
}

#[test]
fn nesting_limit() {
    // three levels of sequences
    let mut inner = item("DEEP");
    for _ in 0..3 {
        let mut outer = DataSet::new();
        outer.put(DataElement::new(
            tags::REQUEST_ATTRIBUTES_SEQUENCE,
            VR::SQ,
            DataSetSequence::new(vec![inner], Length::UNDEFINED),
        ));
        inner = outer;
    }
    let mut ds = identified();
    for element in inner.iter() {
        ds.put(element.clone());
    }
    let data_set = write_dataset(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default()).unwrap();
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, &data_set);

    assert!(ReadOptions::new().max_depth(3).from_bytes(&bytes).is_ok());
    let err = ReadOptions::new().max_depth(2).from_bytes(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SequenceTooDeep);
}

#[test]
fn pixel_data_size() {
    let mut ds = identified();
    PixelDataDescriptor::new(512, 512, 16).fill_data_set(&mut ds);
    ds.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        PrimitiveValue::from(vec![0_u8; 524_286]),
    ));
    let data_set = write_dataset(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default()).unwrap();
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, &data_set);

    let record = read(&bytes).unwrap();
    assert_eq!(record.warnings().len(), 1);
    assert_eq!(record.warnings()[0].kind, WarningKind::PixelDataSizeMismatch);
    assert_eq!(record.pixel_data().unwrap().expected_native_len(), 524_288);
    // still available to the caller
    assert_eq!(
        extract_pixel_data(&record).unwrap().native_data().map(<[u8]>::len),
        Some(524_286)
    );

    // writers only produce conformant sizes
    let err = write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PixelDataSizeMismatch);

    let err = ReadOptions::new()
        .conformance(Conformance::Strict)
        .from_bytes(&bytes)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PixelDataSizeMismatch);

    // the exact size is accepted
    let record = ImageRecordBuilder::new()
        .native_pixel_data(PixelDataDescriptor::new(512, 512, 16), vec![0; 524_288])
        .build()
        .unwrap();
    let copy = read(&write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap()).unwrap();
    assert!(copy.warnings().is_empty());
}

#[rstest]
#[case("1.2.840.10008.1.1", true)]
#[case("1.2..3", false)]
#[case("1.02.3", false)]
#[case("1.2.3a", false)]
#[case(&format!("1.2.{}", "3".repeat(61)), false)]
#[case(&format!("1.2.{}", "3".repeat(60)), true)]
fn identifying_uids(#[case] uid: &str, #[case] valid: bool) {
    let built = ImageRecordBuilder::new().series_instance_uid(uid).build();
    match built {
        Ok(record) => {
            assert!(valid);
            assert_eq!(record.series_instance_uid(), uid);
        }
        Err(e) => {
            assert!(!valid);
            assert_eq!(e.kind(), ErrorKind::InvalidUid);
        }
    }

    // as read from a file
    let mut ds = identified();
    ds.put_str(tags::SERIES_INSTANCE_UID, VR::UI, uid);
    let data_set = write_dataset(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default()).unwrap();
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, &data_set);

    let lenient = read(&bytes).unwrap();
    assert_eq!(lenient.series_instance_uid(), uid);
    assert_eq!(
        lenient
            .warnings()
            .iter()
            .any(|w| w.kind == WarningKind::InvalidUid),
        !valid
    );
    let strict = ReadOptions::new()
        .conformance(Conformance::Strict)
        .from_bytes(&bytes);
    assert_eq!(strict.is_ok(), valid);
}

#[test]
fn group_length_is_derived() {
    let record = ImageRecordBuilder::new().modality("DX").build().unwrap();
    let mut bytes = write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let declared = u32::from_le_bytes([bytes[140], bytes[141], bytes[142], bytes[143]]);

    // a stale group length is not trusted on read, nor copied on write
    bytes[140..144].copy_from_slice(&999_u32.to_le_bytes());
    let stale = read(&bytes).unwrap();
    assert_eq!(stale.meta().information_group_length, 999);
    let fixed = write(&stale, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(&fixed[140..144], &declared.to_le_bytes());

    // the group ends where the data set begins
    let data_set = write_dataset(record.data_set(), &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default())
        .unwrap();
    assert_eq!(144 + declared as usize, fixed.len() - data_set.len());
}

#[test]
fn group_length_near_overflow() {
    let record = ImageRecordBuilder::new().modality("DX").build().unwrap();
    let bytes = write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let mut huge = bytes.clone();
    huge[140..144].copy_from_slice(&0xFFFF_FFF8_u32.to_le_bytes());

    let copy = read(&huge).unwrap();
    assert_eq!(copy.meta().information_group_length, 0xFFFF_FFF8);
    assert_eq!(write(&copy, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(), bytes);
}

#[rustfmt::skip]
const LATIN_1_NAME: &[u8] = &[
    // (0008,0005) CS "ISO_IR 100"
    0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00,
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
    // (0010,0010) PN "René" in ISO-8859-1
    0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'R', b'e', b'n', 0xE9,
    // (0020,000D) UI "1.2.3.4"
    0x20, 0x00, 0x0D, 0x00, b'U', b'I', 0x08, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
    // (0020,000E) UI "1.2.3.4.1"
    0x20, 0x00, 0x0E, 0x00, b'U', b'I', 0x0A, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'.', b'4', b'.', b'1', 0x00,
];

#[test]
fn text_keeps_declared_character_set() {
    let bytes = file_with(&EXPLICIT_VR_LITTLE_ENDIAN, LATIN_1_NAME);
    let record = read(&bytes).unwrap();
    assert_eq!(record.patient_name(), Some("René"));
    assert!(!record
        .warnings()
        .iter()
        .any(|w| w.kind == WarningKind::UnsupportedCharacterSet));

    let out = write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(out, bytes);
    assert!(out.ends_with(LATIN_1_NAME));
    assert!(out
        .windows(12)
        .any(|w| w == [0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'R', b'e', b'n', 0xE9]));

    let copy = read(&out).unwrap();
    assert_eq!(
        copy.data_set()
            .element(tags::SPECIFIC_CHARACTER_SET)
            .unwrap()
            .value()
            .to_str()
            .unwrap(),
        "ISO_IR 100"
    );
    assert_eq!(copy.patient_name(), Some("René"));
}

#[test]
fn preamble_is_preserved() {
    let record = ImageRecordBuilder::new().build().unwrap();
    let mut bytes = write(&record, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    bytes[..8].copy_from_slice(b"VENDOR01");

    let copy = read(&bytes).unwrap();
    assert_eq!(&copy.meta().preamble[..8], b"VENDOR01");
    assert_eq!(write(&copy, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(), bytes);
}

#[test]
fn encapsulated_pixel_data() {
    let descriptor = PixelDataDescriptor {
        number_of_frames: 2,
        ..PixelDataDescriptor::new(16, 16, 8)
    };
    let fragments = vec![
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00],
        vec![0xFF, 0xD9],
        vec![0xFF, 0xD8, 0x01, 0xFF, 0xD9, 0x00],
    ];
    let record = ImageRecordBuilder::new()
        .transfer_syntax(&JPEG_BASELINE)
        .modality("XC")
        // offsets of the first and third fragment items, once padded
        .encapsulated_pixel_data(descriptor, vec![0, 24], fragments)
        .build()
        .unwrap();
    assert_eq!(record.sop_class_uid(), uids::SECONDARY_CAPTURE_IMAGE_STORAGE);

    let bytes = write(&record, &JPEG_BASELINE).unwrap();
    let copy = read(&bytes).unwrap();
    assert!(copy.warnings().is_empty());
    assert_eq!(copy.transfer_syntax(), &JPEG_BASELINE);

    let pixels = extract_pixel_data(&copy).unwrap();
    assert!(pixels.is_encapsulated());
    assert_eq!(pixels.frame_count(), 2);
    assert_eq!(pixels.frame_fragments(0).unwrap().len(), 2);
    // fragments are padded to even length
    assert_eq!(
        &*pixels.frame(0).unwrap(),
        &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x00, 0xFF, 0xD9]
    );
    assert_eq!(&*pixels.frame(1).unwrap(), &[0xFF, 0xD8, 0x01, 0xFF, 0xD9, 0x00]);

    // no transcoding
    for ts in [&EXPLICIT_VR_LITTLE_ENDIAN, &JPEG_EXTENDED] {
        let err = write(&copy, ts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTransferSyntax);
    }
}

#[test]
fn missing_pixel_data() {
    let record = ImageRecordBuilder::new().build().unwrap();
    assert!(record.pixel_data().is_none());
    let err = extract_pixel_data(&record).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingAttribute);
}

#[test]
fn file_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dcm");

    let record = ImageRecordBuilder::new()
        .modality("NM")
        .patient_name("Doe^Jane")
        .native_pixel_data(PixelDataDescriptor::new(3, 3, 8), vec![7; 9])
        .build()
        .unwrap();
    record
        .write_to_file(&path, &EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();

    let copy = open_file(&path).unwrap();
    assert_eq!(copy.patient_name(), Some("Doe^Jane"));
    assert_eq!(copy.sop_instance_uid(), record.sop_instance_uid());
    assert_eq!(copy.pixel_data(), record.pixel_data());
    assert_eq!(copy.sop_class_uid(), uids::NUCLEAR_MEDICINE_IMAGE_STORAGE);
    // odd-sized pixel data is padded and still accepted
    assert!(copy.warnings().is_empty());

    let err = open_file(dir.path().join("missing.dcm")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}
