//! Audio formats and ID3 tag readers.

use super::{bytes_at, starts_with};
use crate::io::{probe, probe_array, probe_tail, ByteSource};
use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

/// Standard MIDI file.
pub fn midi(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MThd")
}

/// MPEG-1 Audio Layer III, tagged or starting on a frame sync.
pub fn mp3(src: &dyn ByteSource) -> bool {
    if starts_with(src, b"ID3") {
        return true;
    }
    match probe_array::<2>(src, 0) {
        Some([b0, b1]) => b0 == 0xFF && b1 & 0xE0 == 0xE0 && (b1 >> 1) & 0x03 == 0x01,
        None => false,
    }
}

/// ADTS framed AAC: frame sync with the layer bits cleared.
pub fn aac(src: &dyn ByteSource) -> bool {
    match probe_array::<2>(src, 0) {
        Some([b0, b1]) => b0 == 0xFF && b1 & 0xF6 == 0xF0,
        None => false,
    }
}

/// Xiph.Org Ogg page.
pub fn ogg(src: &dyn ByteSource) -> bool {
    starts_with(src, b"OggS")
}

/// Free Lossless Audio Codec stream.
pub fn flac(src: &dyn ByteSource) -> bool {
    starts_with(src, b"fLaC")
}

/// RIFF WAVE audio.
pub fn wave(src: &dyn ByteSource) -> bool {
    starts_with(src, b"RIFF") && bytes_at(src, 8, b"WAVE")
}

/// Decodes a 28-bit "synchsafe" integer, seven bits per byte.
pub fn synchsafe(bytes: &[u8]) -> i64 {
    bytes
        .iter()
        .fold(0i64, |acc, b| (acc << 7) | i64::from(b & 0x7F))
}

/// Formats the song description as "Title by Artist (Year)".
fn describe(title: &str, artist: &str, year: &str) -> Option<String> {
    if title.is_empty() && artist.is_empty() {
        return None;
    }
    let mut out = title.to_string();
    if !artist.is_empty() {
        if !out.is_empty() {
            out.push_str(" by ");
        }
        out.push_str(artist);
    }
    if !year.is_empty() {
        out.push_str(&format!(" ({year})"));
    }
    Some(out)
}

fn clean(text: &str) -> String {
    text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string()
}

fn latin1(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _, _) = WINDOWS_1252.decode(&bytes[..end]);
    clean(&text)
}

/// Song description from an ID3 version 1 tag in the last 128 bytes.
pub fn id3v1(src: &dyn ByteSource) -> Option<String> {
    let tag = probe_tail::<128>(src)?;
    if &tag[0..3] != b"TAG" {
        return None;
    }
    let title = latin1(&tag[3..33]);
    let artist = latin1(&tag[33..63]);
    let year = latin1(&tag[93..97]);
    describe(&title, &artist, &year)
}

/// Decodes an ID3v2 text frame body, leading encoding byte included.
fn text_frame(body: &[u8]) -> String {
    let Some((&encoding, text)) = body.split_first() else {
        return String::new();
    };
    let decoded = match encoding {
        0 => return latin1(text),
        // UTF-16 with a byte order mark; decode() sniffs it.
        1 => UTF_16LE.decode(text).0,
        2 => UTF_16BE.decode_without_bom_handling(text).0,
        _ => UTF_8.decode(text).0,
    };
    clean(&decoded)
}

/// Song description from the text frames of an ID3 version 2 tag.
///
/// Understands the three-character frames of v2.2 and the four-character
/// frames of v2.3 and v2.4.
pub fn id3v2(src: &dyn ByteSource) -> Option<String> {
    let header = probe_array::<10>(src, 0)?;
    if &header[0..3] != b"ID3" {
        return None;
    }
    let version = header[3];
    let flags = header[5];
    let tag_size = u64::try_from(synchsafe(&header[6..10])).ok()?;
    let end = (10 + tag_size).min(src.size());

    let mut offset = 10u64;
    if flags & 0x40 != 0 && version >= 3 {
        let ext = probe_array::<4>(src, offset)?;
        let ext_size = if version >= 4 {
            u64::try_from(synchsafe(&ext)).ok()?
        } else {
            u64::from(u32::from_be_bytes(ext)) + 4
        };
        offset += ext_size;
    }

    let (id_len, header_len) = if version == 2 { (3, 6) } else { (4, 10) };
    let (mut title, mut artist, mut year) = (String::new(), String::new(), String::new());
    while offset + header_len <= end {
        let Some(frame) = probe(src, offset, header_len as usize) else {
            break;
        };
        if frame[0] == 0 {
            break;
        }
        let id = &frame[..id_len];
        let size = match version {
            2 => u64::from(u32::from_be_bytes([0, frame[3], frame[4], frame[5]])),
            3 => u64::from(u32::from_be_bytes([frame[4], frame[5], frame[6], frame[7]])),
            _ => synchsafe(&frame[4..8]) as u64,
        };
        let body_at = offset + header_len;
        if size == 0 || body_at + size > end {
            break;
        }
        let wanted = matches!(
            id,
            b"TIT2" | b"TPE1" | b"TYER" | b"TDRC" | b"TT2" | b"TP1" | b"TYE"
        );
        if wanted {
            let Some(body) = probe(src, body_at, size as usize) else {
                break;
            };
            let text = text_frame(&body);
            match id {
                b"TIT2" | b"TT2" => title = text,
                b"TPE1" | b"TP1" => artist = text,
                _ => year = text.chars().take(4).collect(),
            }
        }
        offset = body_at + size;
    }
    describe(&title, &artist, &year)
}
