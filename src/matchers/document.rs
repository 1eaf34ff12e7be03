//! Documents identified by both a header and a trailer.

use super::starts_with;
use crate::io::{probe, probe_tail, ByteSource};

const PDF_TRAILERS: [&[u8]; 4] = [
    b"\n%%EOF",
    b"\n%%EOF\n",
    b"\r\n%%EOF\r\n",
    b"\r%%EOF\r",
];

/// Portable Document Format with an end-of-file marker as its last line.
pub fn pdf(src: &dyn ByteSource) -> bool {
    if !starts_with(src, b"%PDF") {
        return false;
    }
    let size = src.size();
    PDF_TRAILERS.iter().any(|trailer| {
        let len = trailer.len();
        let Some(offset) = size.checked_sub(len as u64) else {
            return false;
        };
        probe(src, offset, len).is_some_and(|tail| tail == *trailer)
    })
}

/// Rich Text Format closed by a final brace.
pub fn rtf(src: &dyn ByteSource) -> bool {
    starts_with(src, b"{\\rtf") && probe_tail::<1>(src) == Some([b'}'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_trailers() {
        for trailer in PDF_TRAILERS {
            let mut data = b"%PDF-1.4\n1 0 obj\nendobj".to_vec();
            data.extend_from_slice(trailer);
            assert!(pdf(&data), "{trailer:?}");
        }
        assert!(!pdf(&b"%PDF-1.4\n1 0 obj".to_vec()));
        assert!(!pdf(&b"%PDF-1.4\n%%EOF  ".to_vec()));
        assert!(!pdf(&b"%PD".to_vec()));
    }

    #[test]
    fn test_rtf_needs_closing_brace() {
        assert!(rtf(&b"{\\rtf1\\ansi hello}".to_vec()));
        assert!(!rtf(&b"{\\rtf1\\ansi hello".to_vec()));
        assert!(!rtf(&b"{\\rt}".to_vec()));
    }
}
