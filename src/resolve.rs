//! Public classification operations.
//!
//! [`find`] runs the whole catalog and then the text heuristics, and never
//! fails. The category finders search only one family of matchers but
//! fall back to the same text heuristics, so a non-matching source still
//! resolves to a signature; they fail only on a nil or empty source.

use crate::config::{HeuristicConfig, SniffConfig};
use crate::error::{Result, SniffError};
use crate::executable::{self, ExecutableDescriptor};
use crate::extension::{extension_of, signatures_for};
use crate::io::{is_empty, ByteSource, SafeReader};
use crate::matchers::first_match;
use crate::matchers::text::{ansi_with, code_page_with, plain_text_with};
use crate::signature::{Category, Signature};
use std::path::Path;
use tracing::{debug, trace};

/// Identifies the type of `src` from its content.
///
/// Returns `ZeroByte` for an empty or nil source and `Unknown` when
/// nothing matched.
pub fn find(src: &dyn ByteSource) -> Signature {
    find_with(src, &HeuristicConfig::default())
}

/// [`find`] with tuned text heuristics.
pub fn find_with(src: &dyn ByteSource, config: &HeuristicConfig) -> Signature {
    if is_empty(src) {
        return Signature::ZeroByte;
    }
    let sig = first_match(src, |_| true).unwrap_or_else(|| fallback(src, config));
    debug!(signature = ?sig, size = src.size(), "find");
    sig
}

/// Opens the file at `path` within `config.io` and identifies it with
/// `config.heuristics`.
///
/// Fails only when the file cannot be opened or exceeds the size limit.
pub fn find_file<P: AsRef<Path>>(path: P, config: &SniffConfig) -> Result<Signature> {
    let reader = SafeReader::open(path, config.io.clone())?;
    let span = crate::span_trace!("find_file", path = %reader.path().display());
    let _guard = span.enter();
    Ok(find_with(&reader, &config.heuristics))
}

/// Text heuristics tried after the matchers, in a fixed order.
fn fallback(src: &dyn ByteSource, config: &HeuristicConfig) -> Signature {
    if ansi_with(src, config) {
        Signature::AnsiEscapeText
    } else if code_page_with(src, config) || plain_text_with(src, config) {
        Signature::PlainText
    } else {
        Signature::Unknown
    }
}

fn non_empty(src: &dyn ByteSource) -> Result<()> {
    if is_empty(src) {
        trace!("nil or empty source");
        return Err(SniffError::NilSource);
    }
    Ok(())
}

/// Searches one family, then falls back to the text heuristics.
fn find_in<F>(src: &dyn ByteSource, family: &str, member: F) -> Result<Signature>
where
    F: Fn(Signature) -> bool,
{
    non_empty(src)?;
    let config = HeuristicConfig::default();
    let sig = first_match(src, member).unwrap_or_else(|| fallback(src, &config));
    debug!(family, signature = ?sig, "find in family");
    Ok(sig)
}

fn in_category(category: Category) -> impl Fn(Signature) -> bool {
    move |sig| sig.category() == Some(category)
}

/// Identifies `src` as one of the archive formats.
pub fn archive(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "archive", in_category(Category::Archive))
}

/// Identifies `src` as one of the image formats.
pub fn image(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "image", in_category(Category::Image))
}

/// Identifies `src` as one of the video formats.
pub fn video(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "video", in_category(Category::Video))
}

/// Identifies `src` as one of the audio formats.
pub fn audio(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "audio", in_category(Category::Audio))
}

/// Identifies `src` as one of the tracked music formats.
pub fn music(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "music", in_category(Category::Music))
}

/// Identifies `src` as a disc image.
pub fn disc_image(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "disc image", in_category(Category::DiscImage))
}

/// Identifies `src` as a document.
///
/// Text with a byte order mark counts as a document as well.
pub fn document(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "document", |sig| {
        sig.category() == Some(Category::Document)
            || matches!(
                sig,
                Signature::Utf8Text | Signature::Utf16Text | Signature::Utf32Text
            )
    })
}

/// Identifies `src` as a DOS or Windows program.
///
/// PKSFX archives are programs too: they run as self-extractors.
pub fn program(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "program", |sig| {
        sig.category() == Some(Category::Program) || sig == Signature::Pksfx
    })
}

/// Identifies `src` as one of the text formats.
pub fn text(src: &dyn ByteSource) -> Result<Signature> {
    find_in(src, "text", in_category(Category::Text))
}

/// Checks whether the content of `src` agrees with the extension of
/// `filename`.
///
/// Only the catalog matchers of the signatures that claim the extension
/// are tried. The first that fires gives `(true, signature)`. Otherwise
/// the result is `(false, find(src))`, so the returned signature always
/// describes the content.
pub fn match_ext(filename: &str, src: &dyn ByteSource) -> Result<(bool, Signature)> {
    non_empty(src)?;
    let ext = extension_of(filename);
    let candidates = signatures_for(&ext);
    if let Some(sig) = first_match(src, |sig| candidates.contains(&sig)) {
        debug!(filename, signature = ?sig, "extension matches content");
        return Ok((true, sig));
    }
    let sig = find(src);
    debug!(filename, %ext, signature = ?sig, "extension does not match content");
    Ok((false, sig))
}

/// Parses the executable header chain of `src`.
///
/// Non-executables produce the default descriptor; only a nil or empty
/// source is an error.
pub fn find_executable(src: &dyn ByteSource) -> Result<ExecutableDescriptor> {
    non_empty(src)?;
    Ok(executable::parse(src))
}

/// Identifies `src` as a program and, when it has an MZ header, describes
/// the executable.
pub fn find_program(src: &dyn ByteSource) -> Result<(Signature, Option<ExecutableDescriptor>)> {
    let sig = program(src)?;
    let desc = match sig {
        Signature::MicrosoftExecutable | Signature::Pklite | Signature::Pksfx => {
            Some(executable::parse(src))
        }
        _ => None,
    };
    Ok((sig, desc))
}
