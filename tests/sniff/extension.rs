//! Extension checks with `match_ext`.

use crate::common::fixtures;
use magicsniff::extension::{extensions, signatures_for};
use magicsniff::{match_ext, Signature, SniffError};

#[test]
fn test_matching_extension() {
    let png = fixtures::png();
    assert_eq!(
        match_ext("picture.png", &png).unwrap(),
        (true, Signature::PortableNetworkGraphics)
    );
    assert_eq!(
        match_ext("/tmp/PICTURE.PNG", &png).unwrap(),
        (true, Signature::PortableNetworkGraphics)
    );
}

#[test]
fn test_mismatched_extension_reports_the_content() {
    let png = fixtures::png();
    assert_eq!(
        match_ext("x.jpg", &png).unwrap(),
        (false, Signature::PortableNetworkGraphics)
    );
    assert_eq!(
        match_ext("archive.zip", &fixtures::jpeg()).unwrap(),
        (false, Signature::JpegFileInterchangeFormat)
    );
}

#[test]
fn test_shared_extensions() {
    let (ok, sig) = match_ext("setup.exe", &fixtures::pe(0x014C, 0, false, 4, 0)).unwrap();
    assert!(ok);
    assert_eq!(sig, Signature::MicrosoftExecutable);
    assert!(signatures_for(".exe").contains(&Signature::Pklite));
    assert!(extensions(Signature::JpegFileInterchangeFormat).contains(&".jpg"));
}

#[test]
fn test_empty_source_is_an_error() {
    assert!(matches!(
        match_ext("x.png", &Vec::<u8>::new()),
        Err(SniffError::NilSource)
    ));
}

#[test]
fn test_dotfile_name_is_its_own_extension() {
    assert_eq!(
        match_ext(".png", &fixtures::png()).unwrap(),
        (true, Signature::PortableNetworkGraphics)
    );
}
