//! Text heuristics and byte order marks.
//!
//! Text has no magic number, so these matchers scan the whole source in
//! fixed windows and classify it from the bytes it contains. Searches for
//! multi-byte sequences run inside a single window; a sequence that
//! straddles two windows is not seen.

use super::starts_with;
use crate::config::HeuristicConfig;
use crate::io::{scan, ByteSource};
use aho_corasick::AhoCorasick;
use memchr::memmem;
use once_cell::sync::Lazy;
use std::ops::ControlFlow;

const NUL: u8 = 0x00;
const BEL: u8 = 0x07;
const BS: u8 = 0x08;
const TAB: u8 = b'\t';
const LF: u8 = b'\n';
const VT: u8 = 0x0B;
const FF: u8 = 0x0C;
const CR: u8 = b'\r';
/// DOS end-of-file marker.
const SUB: u8 = 0x1A;
const ESC: u8 = 0x1B;

/// CSI suffix characters counted by [`csi`].
pub const CSI_CODES: [u8; 16] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'J', b'K', b'=', b's', b'u', b'#',
];

/// Reset, clear screen, bold and normal.
const ANSI_SEQUENCES: [&[u8]; 4] = [b"\x1b[0m", b"\x1b[2J", b"\x1b[1;", b"\x1b[0;"];

static ANSI_MATCHER: Lazy<Option<AhoCorasick>> =
    Lazy::new(|| AhoCorasick::new(ANSI_SEQUENCES).ok());

/// True for a byte that is neither printable ASCII nor one of the control
/// characters used by 8-bit and DOS era text.
pub fn not_ascii(b: u8) -> bool {
    (b < 0x20 || b > 0x7F)
        && !matches!(b, NUL | TAB | LF | VT | FF | CR | BEL | BS | ESC | SUB)
}

/// True for a byte outside ASCII text and the 0x80..=0xFF extended range.
pub fn not_plain_text(b: u8) -> bool {
    not_ascii(b) && b < 0x80
}

/// True for a byte that is not ISO 8859-1 text.
pub fn not_latin1(b: u8) -> bool {
    not_ascii(b) && !(0xA0..=0xFF).contains(&b)
}

/// True for a byte that is not Windows-1252 text.
///
/// Windows-1252 fills most of the C1 range with typography, leaving
/// 0x81, 0x8D, 0x8F, 0x90 and 0x9D unassigned.
pub fn not_windows_1252(b: u8) -> bool {
    not_latin1(b) && (b < 0x80 || matches!(b, 0x81 | 0x8D | 0x8F | 0x90 | 0x9D))
}

/// True when no byte of a full scan is rejected by `reject`.
fn every_byte(src: &dyn ByteSource, window: usize, reject: fn(u8) -> bool) -> bool {
    let walk = scan(src, window, |_, chunk| {
        if chunk.iter().any(|&b| reject(b)) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    matches!(walk, Ok(ControlFlow::Continue(())))
}

/// Every byte is ASCII text.
pub fn ascii(src: &dyn ByteSource) -> bool {
    every_byte(src, HeuristicConfig::default().window, not_ascii)
}

/// Every byte is ISO 8859-1 text.
pub fn latin1(src: &dyn ByteSource) -> bool {
    every_byte(src, HeuristicConfig::default().window, not_latin1)
}

/// Every byte is Windows-1252 text.
pub fn windows_1252(src: &dyn ByteSource) -> bool {
    every_byte(src, HeuristicConfig::default().window, not_windows_1252)
}

/// Plain text with the default tolerance.
pub fn plain_text(src: &dyn ByteSource) -> bool {
    plain_text_with(src, &HeuristicConfig::default())
}

fn below_tolerance(count: u64, size: u64, percent: u64) -> bool {
    u128::from(count) * 100 < u128::from(size) * u128::from(percent)
}

/// Plain text: the share of bytes rejected by [`not_plain_text`] stays
/// strictly below `config.text_tolerance_percent` of the total size.
///
/// An empty source is not plain text.
pub fn plain_text_with(src: &dyn ByteSource, config: &HeuristicConfig) -> bool {
    let size = src.size();
    let percent = config.text_tolerance_percent;
    let mut count = 0u64;
    let walk = scan(src, config.window, |_, chunk| {
        for &b in chunk {
            if not_plain_text(b) {
                count += 1;
                if !below_tolerance(count, size, percent) {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    });
    match walk {
        Ok(ControlFlow::Continue(())) => below_tolerance(count, size, percent),
        _ => false,
    }
}

/// IBM PC code page text with the default thresholds.
pub fn code_page(src: &dyn ByteSource) -> bool {
    code_page_with(src, &HeuristicConfig::default())
}

/// IBM PC code page text as found on DOS and 16-bit Windows machines.
///
/// There must be no pair of NUL bytes before the first DOS end-of-file
/// marker, and a source longer than one line of `config.columns` needs at
/// least `(size / columns) / 2` CRLF newlines.
pub fn code_page_with(src: &dyn ByteSource, config: &HeuristicConfig) -> bool {
    let mut newlines = 0u64;
    let mut before_eof = true;
    let walk = scan(src, config.window, |_, chunk| {
        if before_eof {
            let text = match memchr::memchr(SUB, chunk) {
                Some(pos) => {
                    before_eof = false;
                    &chunk[..pos]
                }
                None => chunk,
            };
            if memmem::find(text, &[NUL, NUL]).is_some() {
                return ControlFlow::Break(());
            }
        }
        newlines += memmem::find_iter(chunk, b"\r\n").count() as u64;
        ControlFlow::Continue(())
    });
    if !matches!(walk, Ok(ControlFlow::Continue(()))) {
        return false;
    }
    let size = src.size();
    if size > config.columns {
        return newlines >= (size / config.columns.max(1)) / 2;
    }
    true
}

/// Contains any of the common ANSI reset, clear, bold or normal sequences.
pub fn ansi(src: &dyn ByteSource) -> bool {
    ansi_with(src, &HeuristicConfig::default())
}

pub fn ansi_with(src: &dyn ByteSource, config: &HeuristicConfig) -> bool {
    let Some(matcher) = ANSI_MATCHER.as_ref() else {
        return false;
    };
    let walk = scan(src, config.window, |_, chunk| {
        if matcher.is_match(chunk) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    matches!(walk, Ok(ControlFlow::Break(())))
}

/// Contains at least three Control Sequence Introducer codes.
pub fn csi(src: &dyn ByteSource) -> bool {
    csi_with(src, &HeuristicConfig::default())
}

/// Counts CSI codes, `ESC [` followed by one of [`CSI_CODES`].
///
/// Each code is counted at most once per window, and the counts of all
/// windows are summed until `config.min_csi_codes` is reached.
pub fn csi_with(src: &dyn ByteSource, config: &HeuristicConfig) -> bool {
    let required = config.min_csi_codes;
    if required == 0 {
        return true;
    }
    let mut found = 0usize;
    let walk = scan(src, config.window, |_, chunk| {
        for code in CSI_CODES {
            if memmem::find(chunk, &[ESC, b'[', code]).is_some() {
                found += 1;
                if found >= required {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    });
    matches!(walk, Ok(ControlFlow::Break(())))
}

/// Starts with the UTF-8 byte order mark.
pub fn utf8(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xEF, 0xBB, 0xBF])
}

/// Starts with a UTF-16 byte order mark in either byte order.
pub fn utf16(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xFF, 0xFE]) || starts_with(src, &[0xFE, 0xFF])
}

/// Starts with a UTF-32 byte order mark in either byte order.
pub fn utf32(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xFF, 0xFE, 0x00, 0x00]) || starts_with(src, &[0x00, 0x00, 0xFE, 0xFF])
}

/// XBin text mode image.
pub fn xbin(src: &dyn ByteSource) -> bool {
    starts_with(src, b"XBIN\x1A")
}
