//! Archives and stream compressors.
//!
//! The zip family is keyed on the first local file header: the "version
//! needed to extract" field separates zip64 archives, and the compression
//! method separates the legacy shrink, reduce and implode methods from
//! everything else.

use super::{bytes_at, starts_with};
use crate::io::{probe_array, ByteSource};

const ZIP_LOCAL: &[u8; 4] = b"PK\x03\x04";
const ZIP_EMPTY: &[u8; 4] = b"PK\x05\x06";
const ZIP_SPANNED: &[u8; 4] = b"PK\x07\x08";
const ZIP64_VERSION: u16 = 45;

/// Version needed and compression method of the first local header.
fn zip_local_header(src: &dyn ByteSource) -> Option<(u16, u16)> {
    let head = probe_array::<10>(src, 0)?;
    if &head[0..4] != ZIP_LOCAL {
        return None;
    }
    let version = u16::from_le_bytes([head[4], head[5]]);
    let method = u16::from_le_bytes([head[8], head[9]]);
    Some((version, method))
}

fn zip_method(src: &dyn ByteSource, accept: impl Fn(u16) -> bool) -> bool {
    match zip_local_header(src) {
        Some((version, method)) => version < ZIP64_VERSION && accept(method),
        None => false,
    }
}

/// Zip archive whose first entry uses the shrink method.
pub fn pk_shrink(src: &dyn ByteSource) -> bool {
    zip_method(src, |m| m == 1)
}

/// Zip archive whose first entry uses one of the four reduce methods.
pub fn pk_reduce(src: &dyn ByteSource) -> bool {
    zip_method(src, |m| (2..=5).contains(&m))
}

/// Zip archive whose first entry uses the implode method.
pub fn pk_implode(src: &dyn ByteSource) -> bool {
    zip_method(src, |m| m == 6)
}

/// Zip archive that needs zip64 support to extract.
pub fn zip64(src: &dyn ByteSource) -> bool {
    matches!(zip_local_header(src), Some((version, _)) if version >= ZIP64_VERSION)
}

/// Any other zip archive, including an empty one.
pub fn pkzip(src: &dyn ByteSource) -> bool {
    if starts_with(src, ZIP_EMPTY) {
        return true;
    }
    zip_method(src, |m| !(1..=6).contains(&m))
}

/// Spanned or split zip archive.
pub fn pkzip_multi(src: &dyn ByteSource) -> bool {
    starts_with(src, ZIP_SPANNED)
}

/// PKLITE compressed DOS executable.
pub fn pklite(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MZ") && bytes_at(src, 30, b"PKLITE")
}

/// PKSFX self-extracting zip.
pub fn pksfx(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MZ") && bytes_at(src, 30, b"PKSFX")
}

/// POSIX ustar tape archive.
pub fn tar(src: &dyn ByteSource) -> bool {
    bytes_at(src, 257, b"ustar")
}

/// RAR archive, versions 1.5 to 4.
pub fn rar(src: &dyn ByteSource) -> bool {
    starts_with(src, b"Rar!\x1A\x07\x00")
}

/// RAR archive, version 5.
pub fn rar_v5(src: &dyn ByteSource) -> bool {
    starts_with(src, b"Rar!\x1A\x07\x01\x00")
}

/// gzip stream using deflate.
pub fn gzip(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x1F, 0x8B, 0x08])
}

/// bzip2 stream with a valid block size digit.
pub fn bzip2(src: &dyn ByteSource) -> bool {
    match probe_array::<4>(src, 0) {
        Some([b'B', b'Z', b'h', level]) => (b'1'..=b'9').contains(&level),
        _ => false,
    }
}

/// 7-Zip archive.
pub fn x7z(src: &dyn ByteSource) -> bool {
    starts_with(src, &[b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C])
}

/// xz stream.
pub fn xz(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xFD, b'7', b'z', b'X', b'Z', 0x00])
}

/// Zstandard frame.
pub fn zstd(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x28, 0xB5, 0x2F, 0xFD])
}

/// FreeArc archive.
pub fn arc_free(src: &dyn ByteSource) -> bool {
    starts_with(src, b"ArC\x01")
}

/// ARC by System Enhancement Associates: marker byte and a known method.
pub fn arc_sea(src: &dyn ByteSource) -> bool {
    match probe_array::<2>(src, 0) {
        Some([0x1A, method]) => (1..=11).contains(&method),
        _ => false,
    }
}

/// LHarc and LHA archives, `-lh?-` or `-lz?-` at offset 2.
pub fn lzh_lha(src: &dyn ByteSource) -> bool {
    matches!(probe_array::<5>(src, 2), Some([b'-', b'l', _, _, b'-']))
}

/// Zoo archive.
pub fn zoo(src: &dyn ByteSource) -> bool {
    starts_with(src, b"ZOO ") && bytes_at(src, 20, &[0xDC, 0xA7, 0xC4, 0xFD])
}

/// ARJ archive.
pub fn arj(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x60, 0xEA])
}
