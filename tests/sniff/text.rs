//! Text heuristics on realistic inputs.

use crate::common::fixtures;
use magicsniff::matchers::text::{ansi, csi, plain_text, plain_text_with};
use magicsniff::{find, find_with, HeuristicConfig, Signature};

#[test]
fn test_prose_is_plain_text() {
    let prose = fixtures::prose(4000);
    assert!(plain_text(&prose));
    assert_eq!(find(&prose), Signature::PlainText);
}

#[test]
fn test_two_percent_tolerance() {
    // 1 control byte in 100 passes, 2 in 100 does not.
    let mut one = vec![b'a'; 100];
    one[50] = 0x01;
    assert!(plain_text(&one));

    let mut two = one.clone();
    two[60] = 0x02;
    assert!(!plain_text(&two));

    let relaxed = HeuristicConfig {
        text_tolerance_percent: 5,
        ..Default::default()
    };
    assert!(plain_text_with(&two, &relaxed));
}

#[test]
fn test_ansi_art() {
    let art = b"\x1b[0;1;33m  ** BBS **\r\n\x1b[0m".to_vec();
    assert!(ansi(&art));
    assert_eq!(find(&art), Signature::AnsiEscapeText);
}

#[test]
fn test_csi_without_ansi_sequences() {
    let data = b"\x1b[5Aup\x1b[Kclear\x1b[sSave\x1b[uRestore".to_vec();
    assert!(csi(&data));
    assert!(!ansi(&data));
}

#[test]
fn test_lone_clear_screen_is_ansi_but_not_csi() {
    let data = b"\x1b[2J".to_vec();
    assert!(ansi(&data));
    assert!(!csi(&data));
    assert_eq!(find(&data), Signature::AnsiEscapeText);
}

#[test]
fn test_bold_clear_normal_is_ansi_and_csi() {
    let data = b"\x1b[1;t\x1b[2Je\x1b[0;xt".to_vec();
    assert!(ansi(&data));
    assert!(csi(&data));
    assert_eq!(find(&data), Signature::AnsiEscapeText);
}

#[test]
fn test_find_with_custom_window() {
    let config = HeuristicConfig {
        window: 16,
        ..Default::default()
    };
    let prose = fixtures::prose(300);
    assert_eq!(find_with(&prose, &config), Signature::PlainText);
}
