//! Builders for minimal files of each supported format.
//!
//! Each builder produces just enough structure for its format to be
//! recognized, padded with data that no other matcher accepts.

/// The 8-byte PNG signature followed by an IHDR chunk.
pub fn png() -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend_from_slice(&[0x1F, 0x15, 0xC4, 0x89]);
    data
}

pub fn jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    data.extend_from_slice(b"JFIF\0\x01\x01");
    data.resize(64, 0);
    data
}

/// A zip local file header for one entry.
pub fn zip(version: u16, method: u16) -> Vec<u8> {
    let mut data = b"PK\x03\x04".to_vec();
    data.extend_from_slice(&version.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&method.to_le_bytes());
    data.extend_from_slice(&[0u8; 16]);
    data.extend_from_slice(&5u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(b"a.txt");
    data
}

/// A 2048-byte ISO 9660 volume with a primary volume descriptor at
/// sector 16.
pub fn iso() -> Vec<u8> {
    let mut data = vec![0u8; 32768 + 2048];
    data[32768] = 1;
    data[32769..32774].copy_from_slice(b"CD001");
    data[32774] = 1;
    data
}

/// A POSIX ustar header block for one file.
pub fn tar() -> Vec<u8> {
    let mut data = vec![0u8; 1024];
    data[..9].copy_from_slice(b"hello.txt");
    data[100..107].copy_from_slice(b"0000644");
    data[257..263].copy_from_slice(b"ustar\0");
    data[263..265].copy_from_slice(b"00");
    data
}

/// A ProTracker module with the given format tag.
pub fn protracker(tag: &[u8; 4]) -> Vec<u8> {
    let mut data = vec![0u8; 1084 + 1024];
    data[..10].copy_from_slice(b"test song!");
    data[1080..1084].copy_from_slice(tag);
    data
}

/// A PDF with the given end-of-file trailer.
pub fn pdf(trailer: &[u8]) -> Vec<u8> {
    let mut data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<< /Type /Catalog >>\nendobj\n".to_vec();
    data.extend_from_slice(b"trailer\n<< /Root 1 0 R >>\nstartxref\n9");
    data.extend_from_slice(trailer);
    data
}

const LFANEW: usize = 0x80;

/// A DOS MZ header whose `e_lfanew` points just past the stub.
pub fn mz_stub() -> Vec<u8> {
    let mut data = vec![0u8; LFANEW];
    data[0..2].copy_from_slice(b"MZ");
    data[2..4].copy_from_slice(&0x90u16.to_le_bytes());
    data[0x3C..0x40].copy_from_slice(&(LFANEW as u32).to_le_bytes());
    data
}

/// A Portable Executable with a COFF header and an optional header.
pub fn pe(machine: u16, timestamp: u32, plus: bool, major: u16, minor: u16) -> Vec<u8> {
    let mut data = mz_stub();
    data.extend_from_slice(b"PE\0\0");
    data.extend_from_slice(&machine.to_le_bytes());
    data.extend_from_slice(&3u16.to_le_bytes());
    data.extend_from_slice(&timestamp.to_le_bytes());
    data.extend_from_slice(&[0u8; 8]);
    let optional_size: u16 = if plus { 240 } else { 224 };
    data.extend_from_slice(&optional_size.to_le_bytes());
    data.extend_from_slice(&0x0102u16.to_le_bytes());
    let mut optional = vec![0u8; optional_size as usize];
    let magic: u16 = if plus { 0x20B } else { 0x10B };
    optional[0..2].copy_from_slice(&magic.to_le_bytes());
    optional[48..50].copy_from_slice(&major.to_le_bytes());
    optional[50..52].copy_from_slice(&minor.to_le_bytes());
    data.extend_from_slice(&optional);
    data
}

/// A New Executable with the given target OS and expected Windows version.
pub fn ne(target: u8, major: u8, minor: u8) -> Vec<u8> {
    let mut data = mz_stub();
    let mut header = vec![0u8; 64];
    header[0..2].copy_from_slice(b"NE");
    header[2] = 5;
    header[0x36] = target;
    header[0x3E] = minor;
    header[0x3F] = major;
    data.extend_from_slice(&header);
    data
}

/// `len` bytes of printable prose wrapped at 78 columns with CRLF.
pub fn prose(len: usize) -> Vec<u8> {
    let words = b"the quick brown fox jumps over the lazy dog ";
    let mut data = Vec::with_capacity(len);
    let mut column = 0;
    for &b in words.iter().cycle() {
        if data.len() >= len {
            break;
        }
        if column == 78 {
            data.extend_from_slice(b"\r\n");
            column = 0;
        } else {
            data.push(b);
            column += 1;
        }
    }
    data.truncate(len);
    data
}
