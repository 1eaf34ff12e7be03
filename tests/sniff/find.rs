//! Whole-catalog identification with `find`.

use crate::common::fixtures;
use magicsniff::{find, Signature};

/// Either signature of an overlapping pair is an acceptable answer.
fn assert_either(found: Signature, a: Signature, b: Signature) {
    assert!(found == a || found == b, "expected {a:?} or {b:?}, found {found:?}");
}

#[test]
fn test_empty_and_nil_sources_are_zero_byte() {
    let empty: &[u8] = &[];
    assert_eq!(find(&empty), Signature::ZeroByte);
    assert_eq!(find(&None::<Vec<u8>>), Signature::ZeroByte);
    assert_eq!(Signature::ZeroByte.as_str(), "0-byte data");
}

#[test]
fn test_common_formats() {
    magicsniff::logging::init_tracing();
    let cases: Vec<(Vec<u8>, Signature)> = vec![
        (fixtures::png(), Signature::PortableNetworkGraphics),
        (fixtures::jpeg(), Signature::JpegFileInterchangeFormat),
        (b"GIF89a\x01\x00\x01\x00\x80\x00\x00".to_vec(), Signature::GraphicsInterchangeFormat),
        (fixtures::zip(20, 8), Signature::PkwareZip),
        (fixtures::tar(), Signature::TapeArchive),
        (fixtures::iso(), Signature::CdIso9660),
        (fixtures::pdf(b"\n%%EOF\n"), Signature::PortableDocumentFormat),
        (fixtures::protracker(b"M.K."), Signature::MusicProTracker),
        (vec![0x1F, 0x8B, 0x08, 0x00, 0, 0, 0, 0, 0, 3], Signature::GzipCompressArchive),
        (b"BZh91AY&SY".to_vec(), Signature::Bzip2CompressArchive),
        (b"{\\rtf1\\ansi Hello}".to_vec(), Signature::RichTextFormat),
    ];
    for (data, expected) in cases {
        assert_eq!(find(&data), expected, "{expected:?}");
    }
}

#[test]
fn test_zip_compression_methods() {
    assert_eq!(find(&fixtures::zip(10, 1)), Signature::PkwareZipShrink);
    assert_eq!(find(&fixtures::zip(10, 3)), Signature::PkwareZipReduce);
    assert_eq!(find(&fixtures::zip(10, 6)), Signature::PkwareZipImplode);
    assert_eq!(find(&fixtures::zip(45, 8)), Signature::PkwareZip64);
    assert_eq!(find(&b"PK\x05\x06".to_vec()), Signature::PkwareZip);
}

#[test]
fn test_executables() {
    let pe = fixtures::pe(0x8664, 1_559_347_200, true, 6, 0);
    assert_eq!(find(&pe), Signature::MicrosoftExecutable);

    let mut pklite = fixtures::mz_stub();
    pklite[30..36].copy_from_slice(b"PKLITE");
    assert_either(find(&pklite), Signature::Pklite, Signature::MicrosoftExecutable);

    let mut pksfx = fixtures::mz_stub();
    pksfx[30..35].copy_from_slice(b"PKSFX");
    assert_either(find(&pksfx), Signature::Pksfx, Signature::MicrosoftExecutable);
}

#[test]
fn test_overlapping_magic_numbers() {
    assert_either(
        find(&b"Rar!\x1A\x07\x01\x00rest".to_vec()),
        Signature::RoshalArchiveV5,
        Signature::RoshalArchive,
    );
    assert_either(
        find(&b"ArC\x01\x00\x00".to_vec()),
        Signature::FreeArc,
        Signature::ArchiveSea,
    );
}

#[test]
fn test_find_is_idempotent() {
    let inputs = [
        fixtures::png(),
        fixtures::iso(),
        fixtures::prose(2000),
        vec![0x00, 0x01, 0x02, 0x03, 0x00, 0x00],
    ];
    for data in inputs {
        assert_eq!(find(&data), find(&data));
    }
}

#[test]
fn test_binary_noise_is_unknown() {
    let noise: Vec<u8> = (0..512u32).map(|i| (i * 7 % 31) as u8).collect();
    assert_eq!(find(&noise), Signature::Unknown);
    assert_eq!(Signature::Unknown.as_str(), "binary data");
}

/// A first box of 256 bytes begins with the same four bytes as an icon
/// header, so the media box type has to win.
#[test]
fn test_media_files_are_not_icons() {
    let media = |box_type: &[u8]| {
        let mut data = vec![0x00, 0x00, 0x01, 0x00];
        data.extend_from_slice(box_type);
        data.resize(256, 0);
        data
    };
    assert_eq!(find(&media(b"ftypisom")), Signature::Mpeg4);
    assert_eq!(find(&media(b"moov")), Signature::QuickTimeMovie);
    assert_eq!(find(&media(b"ftypqt  ")), Signature::QuickTimeMovie);
    assert_eq!(find(&media(b"ftypM4V ")), Signature::QuickTimeM4v);

    let mut icon = vec![0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x10];
    icon.resize(64, 0);
    assert_eq!(find(&icon), Signature::MicrosoftIcon);
}
