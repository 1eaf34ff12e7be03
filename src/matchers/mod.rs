//! The format matcher catalog.
//!
//! Each matcher is an independent predicate over a [`ByteSource`] that
//! answers whether the source carries the magic number, trailer or header
//! shape of one format. Matchers never fail: a short read is a miss.
//!
//! [`CATALOG`] lists every matcher in priority order. Formats with long or
//! offset-anchored signatures come first and formats recognized by one or
//! two leading bytes come last, so a weak signature can never shadow a
//! strong one. ANSI escaped text and plain text are absent; they are only
//! tried by the resolver once the catalog is exhausted.

pub mod archive;
pub mod audio;
pub mod disc;
pub mod document;
pub mod image;
pub mod microsoft;
pub mod music;
pub mod text;
pub mod video;

use crate::io::{probe, ByteSource};
use crate::signature::Signature;

/// A format predicate.
pub type Matcher = fn(&dyn ByteSource) -> bool;

/// Every matcher, most specific first.
pub static CATALOG: &[(Signature, Matcher)] = &[
    // Anchored past the first sector.
    (Signature::TapeArchive, archive::tar),
    (Signature::CdIso9660, disc::iso),
    // MZ stubs that carry a more specific marker.
    (Signature::Pklite, archive::pklite),
    (Signature::Pksfx, archive::pksfx),
    // Zip family.
    (Signature::PkwareZip64, archive::zip64),
    (Signature::PkwareZipShrink, archive::pk_shrink),
    (Signature::PkwareZipReduce, archive::pk_reduce),
    (Signature::PkwareZipImplode, archive::pk_implode),
    (Signature::PkwareZip, archive::pkzip),
    (Signature::PkwareMultiVolume, archive::pkzip_multi),
    // Compressors and archivers with long magic numbers.
    (Signature::RoshalArchiveV5, archive::rar_v5),
    (Signature::RoshalArchive, archive::rar),
    (Signature::X7zCompressArchive, archive::x7z),
    (Signature::XzCompressArchive, archive::xz),
    (Signature::ZStandardArchive, archive::zstd),
    (Signature::Bzip2CompressArchive, archive::bzip2),
    (Signature::GzipCompressArchive, archive::gzip),
    (Signature::MicrosoftCabinet, microsoft::cab),
    (Signature::MicrosoftDosKwaj, microsoft::dos_kwaj),
    (Signature::MicrosoftDosSzdd, microsoft::dos_szdd),
    (Signature::MicrosoftCompoundFile, microsoft::ms_compound),
    (Signature::CdPowerIso, disc::daa),
    (Signature::CdAlcohol120, disc::mdf),
    (Signature::CdNero, disc::nri),
    // ISO base media, keyed on the box type at offset 4.
    (Signature::QuickTimeM4v, video::m4v),
    (Signature::QuickTimeMovie, video::qt_mov),
    (Signature::Mpeg4, video::mp4),
    // Images.
    (Signature::PortableNetworkGraphics, image::png),
    (Signature::GraphicsInterchangeFormat, image::gif),
    (Signature::GoogleWebP, image::webp),
    (Signature::Av1ImageFile, image::avif),
    (Signature::Jpeg2000, image::jpeg2000),
    (Signature::JpegFileInterchangeFormat, image::jpeg),
    (Signature::TaggedImageFileFormat, image::tiff),
    (Signature::InterleavedBitmap, image::ilbm),
    (Signature::ElectronicArtsIff, image::iff),
    (Signature::MicrosoftIcon, image::ico),
    (Signature::BmpFileFormat, image::bmp),
    // Video.
    (Signature::MicrosoftAudioVideoInterleave, video::avi),
    (Signature::MicrosoftWindowsMedia, video::wmv),
    (Signature::FlashVideo, video::flv),
    (Signature::RealPlayer, video::real_media),
    (Signature::Mpeg, video::mpeg),
    // Audio and tracked music.
    (Signature::WaveAudioForWindows, audio::wave),
    (Signature::OggVorbisCodec, audio::ogg),
    (Signature::FreeLosslessAudioCodec, audio::flac),
    (Signature::MusicalInstrumentDigitalInterface, audio::midi),
    (Signature::MusicExtendedModule, music::xm),
    (Signature::MusicMultiTrackModule, music::mtm),
    (Signature::MusicImpulseTracker, music::it),
    (Signature::MusicProTracker, music::mk),
    // Documents.
    (Signature::PortableDocumentFormat, document::pdf),
    (Signature::RichTextFormat, document::rtf),
    (Signature::WindowsHelpFile, microsoft::hlp),
    (Signature::XBinText, text::xbin),
    // Short magic numbers.
    (Signature::FreeArc, archive::arc_free),
    (Signature::ZooArchive, archive::zoo),
    (Signature::YoshiLha, archive::lzh_lha),
    (Signature::ArchiveRobertJung, archive::arj),
    (Signature::Utf32Text, text::utf32),
    (Signature::Utf16Text, text::utf16),
    (Signature::Utf8Text, text::utf8),
    (Signature::MicrosoftExecutable, microsoft::ms_exe),
    // One or two byte signatures.
    (Signature::PersonalComputerExchange, image::pcx),
    (Signature::RipScrip, image::ripscrip),
    (Signature::ArchiveSea, archive::arc_sea),
    (Signature::Mpeg1AudioLayer3, audio::mp3),
    (Signature::MpegAdvancedAudioCoding, audio::aac),
];

/// The catalog matcher of `sig`, if it has one.
pub fn matcher_for(sig: Signature) -> Option<Matcher> {
    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == sig)
        .map(|(_, matcher)| *matcher)
}

/// First signature in catalog order accepted by `filter` whose matcher fires.
pub fn first_match<F>(src: &dyn ByteSource, filter: F) -> Option<Signature>
where
    F: Fn(Signature) -> bool,
{
    CATALOG
        .iter()
        .filter(|(sig, _)| filter(*sig))
        .find(|(_, matcher)| matcher(src))
        .map(|(sig, _)| *sig)
}

/// The source starts with `magic`.
pub(crate) fn starts_with(src: &dyn ByteSource, magic: &[u8]) -> bool {
    bytes_at(src, 0, magic)
}

/// The source holds `magic` at `offset`.
pub(crate) fn bytes_at(src: &dyn ByteSource, offset: u64, magic: &[u8]) -> bool {
    probe(src, offset, magic.len()).is_some_and(|found| found == magic)
}
