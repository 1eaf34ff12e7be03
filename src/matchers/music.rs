//! Tracked music modules.

use super::starts_with;
use crate::io::{probe, probe_array, ByteSource};

/// Offset of the format tag in a ProTracker style module.
const MOD_TAG_OFFSET: u64 = 1080;

/// FastTracker 2 extended module.
pub fn xm(src: &dyn ByteSource) -> bool {
    starts_with(src, b"Extended Module: ")
}

/// MultiTracker module.
pub fn mtm(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MTM\x10")
}

/// Impulse Tracker module.
pub fn it(src: &dyn ByteSource) -> bool {
    starts_with(src, b"IMPM")
}

/// Channel count encoded by a ProTracker family tag.
fn mod_channels(tag: &[u8; 4]) -> Option<u32> {
    let channels = match tag {
        b"M.K." | b"M!K!" | b"FLT4" => Some(4),
        b"FLT8" => Some(8),
        [n, b'C', b'H', b'N'] if n.is_ascii_digit() => Some(u32::from(n - b'0')),
        [a, b, b'C', b'H'] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    };
    channels.filter(|&n| n > 0)
}

/// ProTracker module and its multichannel descendants.
pub fn mk(src: &dyn ByteSource) -> bool {
    probe_array::<4>(src, MOD_TAG_OFFSET)
        .as_ref()
        .and_then(mod_channels)
        .is_some()
}

fn song_name(src: &dyn ByteSource, offset: u64, len: usize) -> String {
    let Some(raw) = probe(src, offset, len) else {
        return String::new();
    };
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).trim().to_string()
}

/// Describes the tracker that produced a module, with the song title when
/// the format stores one.
pub fn music_tracker(src: &dyn ByteSource) -> Option<String> {
    if xm(src) {
        return Some("extended module tracked music".to_string());
    }
    if mtm(src) {
        return Some("MultiTracker song".to_string());
    }
    if it(src) {
        let title = song_name(src, 4, 26);
        return Some(if title.is_empty() {
            "Impulse Tracker song".to_string()
        } else {
            format!("Impulse Tracker song, \"{title}\"")
        });
    }
    let tag = probe_array::<4>(src, MOD_TAG_OFFSET)?;
    let channels = mod_channels(&tag)?;
    Some(format!("ProTracker {channels}-channel song"))
}
