//! File-backed and in-memory sources classify the same way.

use crate::common::fixtures;
use crate::common::test_utils::{create_temp_file, open_temp};
use magicsniff::io::error::IoError;
use magicsniff::{find, find_file, IOLimits, SafeReader, Signature, SniffConfig, SniffError};
use std::fs::File;
use std::io::Cursor;

#[test]
fn test_safe_reader_source() {
    let (_file, reader) = open_temp(&fixtures::iso());
    assert_eq!(find(&reader), Signature::CdIso9660);
}

#[test]
fn test_std_file_source() {
    let temp = create_temp_file(&fixtures::png());
    let file = File::open(temp.path()).unwrap();
    assert_eq!(find(&file), Signature::PortableNetworkGraphics);
}

#[test]
fn test_empty_file_is_zero_byte() {
    let (_file, reader) = open_temp(&[]);
    assert_eq!(find(&reader), Signature::ZeroByte);
}

#[test]
fn test_cursor_and_bytes_sources() {
    let tar = fixtures::tar();
    assert_eq!(find(&Cursor::new(tar.clone())), Signature::TapeArchive);
    assert_eq!(find(&bytes::Bytes::from(tar)), Signature::TapeArchive);
}

#[test]
fn test_file_too_large() {
    let temp = create_temp_file(&fixtures::png());
    let limits = IOLimits { max_file_size: 8 };
    let result = SafeReader::open(temp.path(), limits);
    assert!(matches!(
        result,
        Err(IoError::FileTooLarge { limit: 8, .. })
    ));
}

#[test]
fn test_find_file_applies_the_config() {
    let prose = create_temp_file(&fixtures::prose(2000));
    let png = create_temp_file(&fixtures::png());
    let config = SniffConfig::default();
    assert_eq!(find_file(prose.path(), &config).unwrap(), Signature::PlainText);
    assert_eq!(
        find_file(png.path(), &config).unwrap(),
        Signature::PortableNetworkGraphics
    );

    // 1.5% control bytes and no newlines: plain text at the default 2%
    // tolerance, binary at 1%.
    let mut noisy = vec![b'a'; 1000];
    noisy[100..115].fill(0x01);
    let noisy = create_temp_file(&noisy);
    assert_eq!(find_file(noisy.path(), &config).unwrap(), Signature::PlainText);
    let strict =
        SniffConfig::from_json(r#"{"heuristics": {"text_tolerance_percent": 1}}"#).unwrap();
    assert_eq!(find_file(noisy.path(), &strict).unwrap(), Signature::Unknown);
}

#[test]
fn test_find_file_enforces_the_size_limit() {
    let temp = create_temp_file(&fixtures::iso());
    let config = SniffConfig::from_json(r#"{"io": {"max_file_size": 1024}}"#).unwrap();
    assert!(matches!(
        find_file(temp.path(), &config),
        Err(SniffError::Io(IoError::FileTooLarge { limit: 1024, .. }))
    ));

    let missing = temp.path().with_extension("missing");
    assert!(matches!(
        find_file(&missing, &config),
        Err(SniffError::Io(IoError::StdIo(_)))
    ));
}
