//! Conventional filename extensions for each signature.
//!
//! The mapping is many-to-many: a signature may have several extensions
//! and several signatures share one (every zip variant claims `.zip`).
//! Extensions are stored lowercase with their leading dot.

use crate::signature::Signature;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Extensions conventionally used for `sig`. Empty for the sentinels.
pub fn extensions(sig: Signature) -> &'static [&'static str] {
    use Signature::*;
    match sig {
        ZeroByte | Unknown => &[],
        ElectronicArtsIff => &[".iff"],
        Av1ImageFile => &[".avif"],
        JpegFileInterchangeFormat => &[".jpg", ".jpeg"],
        Jpeg2000 => &[".jp2", ".j2k", ".jpf", ".jpx", ".jpm", ".mj2"],
        PortableNetworkGraphics => &[".png"],
        GraphicsInterchangeFormat => &[".gif"],
        GoogleWebP => &[".webp"],
        TaggedImageFileFormat => &[".tif", ".tiff"],
        BmpFileFormat => &[".bmp"],
        PersonalComputerExchange => &[".pcx"],
        InterleavedBitmap => &[".ilbm", ".lbm", ".iff"],
        MicrosoftIcon => &[".ico"],
        RipScrip => &[".rip"],
        Mpeg4 => &[".mp4"],
        QuickTimeMovie => &[".mov"],
        QuickTimeM4v => &[".m4v"],
        MicrosoftAudioVideoInterleave => &[".avi"],
        MicrosoftWindowsMedia => &[".wmv"],
        Mpeg => &[".mpg", ".mpeg"],
        FlashVideo => &[".flv"],
        RealPlayer => &[".rv", ".rm", ".rmvb"],
        MusicalInstrumentDigitalInterface => &[".mid", ".midi"],
        Mpeg1AudioLayer3 => &[".mp3"],
        MpegAdvancedAudioCoding => &[".aac", ".mp3"],
        OggVorbisCodec => &[".ogg"],
        FreeLosslessAudioCodec => &[".flac"],
        WaveAudioForWindows => &[".wav"],
        MusicExtendedModule => &[".xm"],
        MusicMultiTrackModule => &[".mtm"],
        MusicImpulseTracker => &[".it"],
        MusicProTracker => &[".mod"],
        PkwareZipShrink | PkwareZipReduce | PkwareZipImplode | PkwareZip64 | PkwareZip
        | PkwareMultiVolume => &[".zip"],
        Pklite => &[".exe", ".zip"],
        Pksfx => &[".exe", ".zip"],
        TapeArchive => &[".tar"],
        RoshalArchive | RoshalArchiveV5 => &[".rar"],
        GzipCompressArchive => &[".gz"],
        Bzip2CompressArchive => &[".bz2"],
        X7zCompressArchive => &[".7z"],
        XzCompressArchive => &[".xz"],
        ZStandardArchive => &[".zst"],
        FreeArc | ArchiveSea => &[".arc"],
        YoshiLha => &[".lzh", ".lha"],
        ZooArchive => &[".zoo"],
        ArchiveRobertJung => &[".arj"],
        MicrosoftCabinet => &[".cab"],
        MicrosoftDosKwaj => &[".com"],
        MicrosoftDosSzdd => &[".exe"],
        MicrosoftExecutable => &[".exe", ".com", ".dll"],
        MicrosoftCompoundFile => &[".doc", ".xls", ".ppt", ".msi"],
        CdIso9660 => &[".iso"],
        CdNero => &[".nri"],
        CdPowerIso => &[".daa"],
        CdAlcohol120 => &[".mdf"],
        WindowsHelpFile => &[".hlp"],
        PortableDocumentFormat => &[".pdf"],
        RichTextFormat => &[".rtf"],
        XBinText => &[".xb"],
        Utf8Text | Utf16Text | Utf32Text => &[".txt"],
        AnsiEscapeText => &[".ans"],
        PlainText => &[".txt"],
    }
}

static BY_EXTENSION: Lazy<HashMap<&'static str, Vec<Signature>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Vec<Signature>> = HashMap::new();
    for sig in Signature::ALL {
        for ext in extensions(sig) {
            map.entry(*ext).or_default().push(sig);
        }
    }
    map
});

/// Signatures that claim `ext`, in enumeration order.
///
/// `ext` must be lowercase and include the leading dot.
pub fn signatures_for(ext: &str) -> &'static [Signature] {
    BY_EXTENSION.get(ext).map(Vec::as_slice).unwrap_or(&[])
}

/// Lowercase extension of `filename` with a leading dot, or an empty string.
///
/// The extension runs from the last dot of the final path element, so a
/// bare dotfile such as `.png` has the extension `.png`.
pub fn extension_of(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    name.rfind('.')
        .map(|dot| name[dot..].to_lowercase())
        .unwrap_or_default()
}
