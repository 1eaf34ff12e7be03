//! Still image formats.

use super::{bytes_at, starts_with};
use crate::io::{probe_array, ByteSource};

/// Electronic Arts IFF container holding anything other than a bitmap.
pub fn iff(src: &dyn ByteSource) -> bool {
    let Some(head) = probe_array::<12>(src, 0) else {
        return false;
    };
    &head[0..4] == b"FORM" && &head[8..12] != b"ILBM" && &head[8..12] != b"PBM "
}

/// AV1 Image File Format.
pub fn avif(src: &dyn ByteSource) -> bool {
    let Some(head) = probe_array::<12>(src, 0) else {
        return false;
    };
    &head[4..8] == b"ftyp" && matches!(&head[8..12], b"avif" | b"avis")
}

/// JPEG File Interchange Format, including Exif and raw JPEG streams.
pub fn jpeg(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xFF, 0xD8, 0xFF])
}

/// JPEG 2000 as a JP2 container or a bare codestream.
pub fn jpeg2000(src: &dyn ByteSource) -> bool {
    const BOX: [u8; 12] = [
        0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
    ];
    starts_with(src, &BOX) || starts_with(src, &[0xFF, 0x4F, 0xFF, 0x51])
}

/// Portable Network Graphics.
pub fn png(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
}

/// Graphics Interchange Format, both 87a and 89a.
pub fn gif(src: &dyn ByteSource) -> bool {
    starts_with(src, b"GIF87a") || starts_with(src, b"GIF89a")
}

/// Google WebP in a RIFF container.
pub fn webp(src: &dyn ByteSource) -> bool {
    starts_with(src, b"RIFF") && bytes_at(src, 8, b"WEBP")
}

/// Tagged Image File Format in either byte order.
pub fn tiff(src: &dyn ByteSource) -> bool {
    starts_with(src, b"II*\0") || starts_with(src, b"MM\0*")
}

/// Windows and OS/2 bitmap.
///
/// `BM` alone is too weak, so the reserved words must be zero and the DIB
/// header size must be one of the published header versions.
pub fn bmp(src: &dyn ByteSource) -> bool {
    const DIB_SIZES: [u32; 7] = [12, 40, 52, 56, 64, 108, 124];
    let Some(head) = probe_array::<18>(src, 0) else {
        return false;
    };
    if &head[0..2] != b"BM" || head[6..10] != [0, 0, 0, 0] {
        return false;
    }
    let dib = u32::from_le_bytes([head[14], head[15], head[16], head[17]]);
    DIB_SIZES.contains(&dib)
}

/// ZSoft Personal Computer eXchange.
pub fn pcx(src: &dyn ByteSource) -> bool {
    let Some([magic, version, encoding, bpp]) = probe_array::<4>(src, 0) else {
        return false;
    };
    magic == 0x0A
        && matches!(version, 0 | 2 | 3 | 4 | 5)
        && encoding <= 1
        && matches!(bpp, 1 | 2 | 4 | 8)
}

/// Amiga Interleaved Bitmap, ILBM or the chunky PBM variant.
pub fn ilbm(src: &dyn ByteSource) -> bool {
    let Some(head) = probe_array::<12>(src, 0) else {
        return false;
    };
    &head[0..4] == b"FORM" && matches!(&head[8..12], b"ILBM" | b"PBM ")
}

/// Width and height from the BMHD chunk of an interleaved bitmap.
pub fn ilbm_decode(src: &dyn ByteSource) -> Option<(u16, u16)> {
    if !ilbm(src) {
        return None;
    }
    let bmhd = probe_array::<12>(src, 12)?;
    if &bmhd[0..4] != b"BMHD" {
        return None;
    }
    let width = u16::from_be_bytes([bmhd[8], bmhd[9]]);
    let height = u16::from_be_bytes([bmhd[10], bmhd[11]]);
    Some((width, height))
}

/// Microsoft Windows icon with at least one image.
pub fn ico(src: &dyn ByteSource) -> bool {
    let Some(head) = probe_array::<6>(src, 0) else {
        return false;
    };
    head[0..4] == [0x00, 0x00, 0x01, 0x00] && u16::from_le_bytes([head[4], head[5]]) >= 1
}

/// Remote Imaging Protocol script.
pub fn ripscrip(src: &dyn ByteSource) -> bool {
    starts_with(src, b"!|")
}
