//! Category finders search one family and fall back to text.

use crate::common::fixtures;
use magicsniff::{
    archive, audio, disc_image, document, find_program, image, music, program, text, video,
    Signature, SniffError,
};

#[test]
fn test_each_finder_recognizes_its_family() {
    assert_eq!(archive(&fixtures::zip(20, 8)).unwrap(), Signature::PkwareZip);
    assert_eq!(image(&fixtures::png()).unwrap(), Signature::PortableNetworkGraphics);
    assert_eq!(disc_image(&fixtures::iso()).unwrap(), Signature::CdIso9660);
    assert_eq!(music(&fixtures::protracker(b"8CHN")).unwrap(), Signature::MusicProTracker);
    assert_eq!(
        document(&fixtures::pdf(b"\r\n%%EOF\r\n")).unwrap(),
        Signature::PortableDocumentFormat
    );
    assert_eq!(
        audio(&b"OggS\x00\x02\x00\x00".to_vec()).unwrap(),
        Signature::OggVorbisCodec
    );
    assert_eq!(
        video(&b"FLV\x01\x05\x00\x00\x00\x09".to_vec()).unwrap(),
        Signature::FlashVideo
    );
}

#[test]
fn test_finders_ignore_other_families() {
    let png = fixtures::png();
    assert_ne!(archive(&png).unwrap(), Signature::PortableNetworkGraphics);
    assert_ne!(music(&png).unwrap(), Signature::PortableNetworkGraphics);

    let zip = fixtures::zip(20, 8);
    assert_ne!(image(&zip).unwrap(), Signature::PkwareZip);
}

#[test]
fn test_finders_fall_back_to_text() {
    let prose = fixtures::prose(1500);
    assert_eq!(archive(&prose).unwrap(), Signature::PlainText);
    assert_eq!(video(&prose).unwrap(), Signature::PlainText);
    assert_eq!(text(&prose).unwrap(), Signature::PlainText);

    let ansi = b"\x1b[2J\x1b[1;33mWelcome\x1b[0m".to_vec();
    assert_eq!(image(&ansi).unwrap(), Signature::AnsiEscapeText);
}

#[test]
fn test_document_accepts_byte_order_marks() {
    let utf8 = b"\xEF\xBB\xBFhello".to_vec();
    assert_eq!(document(&utf8).unwrap(), Signature::Utf8Text);
    assert_eq!(text(&utf8).unwrap(), Signature::Utf8Text);
}

#[test]
fn test_program_and_descriptor() {
    let pe = fixtures::pe(0x014C, 946_684_800, false, 5, 1);
    assert_eq!(program(&pe).unwrap(), Signature::MicrosoftExecutable);

    let (sig, desc) = find_program(&pe).unwrap();
    assert_eq!(sig, Signature::MicrosoftExecutable);
    assert_eq!(desc.unwrap().to_string(), "Windows XP 32-bit");
}

#[test]
fn test_finders_reject_empty_sources() {
    let empty: Vec<u8> = Vec::new();
    assert!(matches!(archive(&empty), Err(SniffError::NilSource)));
    assert!(matches!(video(&None::<Vec<u8>>), Err(SniffError::NilSource)));
    assert!(matches!(text(&empty), Err(SniffError::NilSource)));
}
