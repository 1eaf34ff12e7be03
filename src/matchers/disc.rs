//! CD and DVD disc images.

use super::{bytes_at, starts_with};
use crate::io::{probe_tail, ByteSource};

/// Offsets of the `CD001` identifier in the first three volume descriptors.
pub const ISO_DESCRIPTOR_OFFSETS: [u64; 3] = [32769, 34817, 36865];

/// ISO 9660 file system image.
pub fn iso(src: &dyn ByteSource) -> bool {
    ISO_DESCRIPTOR_OFFSETS
        .iter()
        .any(|&offset| bytes_at(src, offset, b"CD001"))
}

/// Nero image, identified by its footer.
pub fn nri(src: &dyn ByteSource) -> bool {
    let v2 = probe_tail::<12>(src).is_some_and(|tail| &tail[0..4] == b"NER5");
    v2 || probe_tail::<8>(src).is_some_and(|tail| &tail[0..4] == b"NERO")
}

/// PowerISO direct access archive.
pub fn daa(src: &dyn ByteSource) -> bool {
    starts_with(src, b"DAA\0\0\0\0\0")
}

/// Alcohol 120% media descriptor data, a raw image starting on a sector sync.
pub fn mdf(src: &dyn ByteSource) -> bool {
    const SYNC: [u8; 12] = [
        0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
    ];
    starts_with(src, &SYNC)
}
