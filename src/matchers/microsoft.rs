//! Microsoft and MS-DOS containers.

use super::{bytes_at, starts_with};
use crate::io::{probe_array, ByteSource};

/// Microsoft cabinet.
pub fn cab(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MSCF\0\0\0\0")
}

/// File compressed by the MS-DOS 6 `COMPRESS.EXE` KWAJ method.
pub fn dos_kwaj(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x4B, 0x57, 0x41, 0x4A, 0x88, 0xF0, 0x27, 0xD1])
}

/// File compressed by the MS-DOS `COMPRESS.EXE` SZDD method.
pub fn dos_szdd(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0x53, 0x5A, 0x44, 0x44, 0x88, 0xF0, 0x27, 0x33])
}

/// DOS MZ executable, and every format that extends it.
pub fn ms_exe(src: &dyn ByteSource) -> bool {
    starts_with(src, b"MZ") || starts_with(src, b"ZM")
}

/// OLE compound file, used by Office 97-2003 documents and installers.
pub fn ms_compound(src: &dyn ByteSource) -> bool {
    starts_with(src, &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
}

/// Windows help, compiled HTML help or a WinHelp table of contents.
pub fn hlp(src: &dyn ByteSource) -> bool {
    match probe_array::<4>(src, 0) {
        Some(head) if matches!(&head, b"ITSF" | b"LN\x02\x00" | b"?_\x03\x00") => true,
        _ => bytes_at(src, 6, &[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
    }
}
