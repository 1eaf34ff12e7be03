//! Positional byte sources for content sniffing.
//!
//! Every matcher in the crate reads through the [`ByteSource`] trait, which
//! only exposes a total size and reads at an explicit offset. No read is
//! cursor-relative, so a source that supports concurrent positional reads
//! can be classified from several threads at once.
//!
//! [`SafeReader`] is the file-backed source. It memory-maps the file and
//! enforces [`IOLimits`] so callers can cap the size of untrusted input
//! before classification starts.

pub mod error;
pub mod window;

use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use window::{is_empty, probe, probe_array, probe_tail, scan};

/// A random-access byte source with a discoverable length.
pub trait ByteSource {
    /// Total number of bytes in the source.
    fn size(&self) -> u64;

    /// Reads up to `buf.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes copied, which is less than `buf.len()`
    /// when the read runs past the end of the source and zero when
    /// `offset` is at or beyond the end.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize>;
}

fn read_slice_at(data: &[u8], offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
    let Ok(start) = usize::try_from(offset) else {
        return Ok(0);
    };
    if start >= data.len() {
        return Ok(0);
    }
    let n = buf.len().min(data.len() - start);
    buf[..n].copy_from_slice(&data[start..start + n]);
    Ok(n)
}

impl ByteSource for [u8] {
    fn size(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self, offset, buf)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn size(&self) -> u64 {
        N as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self, offset, buf)
    }
}

impl ByteSource for Vec<u8> {
    fn size(&self) -> u64 {
        self.as_slice().len() as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self, offset, buf)
    }
}

impl ByteSource for Bytes {
    fn size(&self) -> u64 {
        self.as_ref().len() as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self, offset, buf)
    }
}

/// The cursor position is ignored; reads are always positional.
impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn size(&self) -> u64 {
        self.get_ref().as_ref().len() as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self.get_ref().as_ref(), offset, buf)
    }
}

#[cfg(any(unix, windows))]
impl ByteSource for File {
    fn size(&self) -> u64 {
        match self.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!(error = %err, "Cannot read file metadata, treating the file as empty");
                0
            }
        }
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        // A single positional read may return fewer bytes than requested
        // before EOF, so keep reading until the buffer is full or EOF.
        let mut filled = 0;
        while filled < buf.len() {
            let n = positional_read(self, &mut buf[filled..], offset + filled as u64)?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        Ok(filled)
    }
}

#[cfg(unix)]
fn positional_read(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<usize> {
    std::os::unix::fs::FileExt::read_at(file, buf, offset)
}

#[cfg(windows)]
fn positional_read(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<usize> {
    std::os::windows::fs::FileExt::seek_read(file, buf, offset)
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn size(&self) -> u64 {
        (**self).size()
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        (**self).read_at(offset, buf)
    }
}

/// `None` is the nil source: zero length, every read returns nothing.
impl<T: ByteSource> ByteSource for Option<T> {
    fn size(&self) -> u64 {
        self.as_ref().map_or(0, |src| src.size())
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Some(src) => src.read_at(offset, buf),
            None => Ok(0),
        }
    }
}

/// Defines the resource limits for file-backed sources.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024 * 1024, // 1GB
        }
    }
}

/// A safe, bounded file source that uses memory-mapping for efficient access.
///
/// Classification cost is linear in the size of the source, so the size
/// cap in `IOLimits` is the only latency bound on untrusted input.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens a file, memory-maps it, and wraps it in a `SafeReader`.
    ///
    /// This function will fail if the file size exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening file for sniffing"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: The file is backed by a real file on disk and we only request a read-only map.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the path this reader was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mapped contents, empty for a zero-length file.
    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

impl ByteSource for SafeReader {
    fn size(&self) -> u64 {
        self.file_size
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        read_slice_at(self.as_slice(), offset, buf)
    }
}
