//! Executable header parsing through the public API.

use crate::common::fixtures;
use chrono::Datelike;
use magicsniff::{find_executable, Architecture, NewExecutable, SniffError};

#[test]
fn test_pe32_plus_descriptor() {
    // 2019-06-01
    let data = fixtures::pe(0x8664, 1_559_347_200, true, 6, 0);
    let desc = find_executable(&data).unwrap();
    assert_eq!(desc.arch, Architecture::Amd64);
    assert_eq!(desc.ne, NewExecutable::None);
    assert_eq!((desc.major, desc.minor), (6, 0));
    assert_eq!(desc.timestamp.year(), 2019);
    assert_eq!(desc.to_string(), "Windows Vista 64-bit");
}

#[test]
fn test_pe32_descriptor() {
    let data = fixtures::pe(0x014C, 946_684_800, false, 4, 0);
    let desc = find_executable(&data).unwrap();
    assert_eq!(desc.arch, Architecture::Intel386);
    assert_eq!(desc.timestamp.year(), 2000);
    assert_eq!(desc.to_string(), "Windows NT v4.0");
}

#[test]
fn test_new_executable_descriptor() {
    let desc = find_executable(&fixtures::ne(4, 3, 0)).unwrap();
    assert_eq!(desc.arch, Architecture::Unknown);
    assert_eq!(desc.ne, NewExecutable::Windows386);
    assert_eq!(desc.to_string(), "Windows v3.0 for 386");
}

#[test]
fn test_non_executables_give_the_default() {
    let desc = find_executable(&fixtures::png()).unwrap();
    assert!(!desc.is_known());
    assert_eq!(desc.timestamp.timestamp(), 0);

    let truncated = fixtures::mz_stub()[..0x20].to_vec();
    assert!(!find_executable(&truncated).unwrap().is_known());
}

#[test]
fn test_empty_source_is_an_error() {
    assert!(matches!(
        find_executable(&Vec::<u8>::new()),
        Err(SniffError::NilSource)
    ));
}
