//! Bounded reads over a [`ByteSource`].
//!
//! Two access patterns cover every matcher in the crate: a fixed-offset
//! probe of exactly N bytes, and a chunked scan over the whole source. A
//! probe that cannot be satisfied in full is reported as `None` and is
//! treated as "no match" by callers, never as an error.

use super::ByteSource;
use std::ops::ControlFlow;

/// Reads exactly `len` bytes at `offset`, or `None` on a short read.
pub fn probe(src: &dyn ByteSource, offset: u64, len: usize) -> Option<Vec<u8>> {
    let mut buf = vec![0u8; len];
    read_full(src, offset, &mut buf).then_some(buf)
}

/// Reads exactly `N` bytes at `offset` into an array.
pub fn probe_array<const N: usize>(src: &dyn ByteSource, offset: u64) -> Option<[u8; N]> {
    let mut buf = [0u8; N];
    read_full(src, offset, &mut buf).then_some(buf)
}

/// Reads the final `N` bytes of the source.
pub fn probe_tail<const N: usize>(src: &dyn ByteSource) -> Option<[u8; N]> {
    let offset = src.size().checked_sub(N as u64)?;
    probe_array(src, offset)
}

fn read_full(src: &dyn ByteSource, offset: u64, buf: &mut [u8]) -> bool {
    if offset.saturating_add(buf.len() as u64) > src.size() {
        return false;
    }
    matches!(src.read_at(offset, buf), Ok(n) if n == buf.len())
}

/// True when a 1-byte probe at offset 0 fails.
pub fn is_empty(src: &dyn ByteSource) -> bool {
    probe_array::<1>(src, 0).is_none()
}

/// Walks the source from offset 0 in `window`-sized pieces.
///
/// The final piece is shrunk to the remaining byte count. The visitor
/// receives the offset of each piece and its bytes, and may stop the walk
/// early by returning `ControlFlow::Break`. A read error ends the walk and
/// is returned to the caller.
pub fn scan<B, F>(src: &dyn ByteSource, window: usize, mut visit: F) -> std::io::Result<ControlFlow<B>>
where
    F: FnMut(u64, &[u8]) -> ControlFlow<B>,
{
    let size = src.size();
    let window = window.max(1);
    let mut buf = vec![0u8; window];
    let mut offset = 0u64;
    while offset < size {
        let want = (size - offset).min(window as u64) as usize;
        let n = src.read_at(offset, &mut buf[..want])?;
        if n == 0 {
            break;
        }
        if let ControlFlow::Break(b) = visit(offset, &buf[..n]) {
            return Ok(ControlFlow::Break(b));
        }
        offset += n as u64;
    }
    Ok(ControlFlow::Continue(()))
}
