//! Video containers and streams.

use super::{bytes_at, starts_with};
use crate::io::{probe_array, ByteSource};

fn ftyp_brand(src: &dyn ByteSource) -> Option<[u8; 4]> {
    let head = probe_array::<12>(src, 0)?;
    if &head[4..8] != b"ftyp" {
        return None;
    }
    Some([head[8], head[9], head[10], head[11]])
}

/// ISO base media file with an MPEG-4 brand.
///
/// Brands claimed by QuickTime, iTunes video and AVIF are excluded.
pub fn mp4(src: &dyn ByteSource) -> bool {
    match ftyp_brand(src) {
        Some(brand) => !matches!(&brand, b"qt  " | b"M4V " | b"M4VH" | b"M4VP" | b"avif" | b"avis"),
        None => false,
    }
}

/// Apple QuickTime movie.
pub fn qt_mov(src: &dyn ByteSource) -> bool {
    bytes_at(src, 4, b"ftypqt  ") || bytes_at(src, 4, b"moov")
}

/// Apple iTunes video.
pub fn m4v(src: &dyn ByteSource) -> bool {
    bytes_at(src, 4, b"ftypM4V")
}

/// Microsoft Audio Video Interleave.
pub fn avi(src: &dyn ByteSource) -> bool {
    starts_with(src, b"RIFF") && bytes_at(src, 8, b"AVI ")
}

/// Advanced Systems Format header object, used by Windows Media.
pub fn wmv(src: &dyn ByteSource) -> bool {
    const ASF_HEADER: [u8; 16] = [
        0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE,
        0x6C,
    ];
    starts_with(src, &ASF_HEADER)
}

/// MPEG program stream pack or video sequence header.
pub fn mpeg(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x00, 0x00, 0x01, 0xBA]) || starts_with(src, &[0x00, 0x00, 0x01, 0xB3])
}

/// Adobe Flash Video.
pub fn flv(src: &dyn ByteSource) -> bool {
    starts_with(src, b"FLV\x01")
}

/// RealMedia file or RealPlayer recording.
pub fn real_media(src: &dyn ByteSource) -> bool {
    starts_with(src, b".RMF") || starts_with(src, b".REC")
}
