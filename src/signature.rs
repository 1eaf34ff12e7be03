//! File type signatures and their labels.
//!
//! [`Signature`] is a closed, ordered set of every type the crate can
//! report. The two sentinels `ZeroByte` and `Unknown` come first; the
//! remaining variants are grouped by family in the order the families
//! appear in the matcher catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad family a signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Image,
    Video,
    Audio,
    Music,
    Archive,
    Program,
    DiscImage,
    Document,
    Text,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Image => "image",
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Music => "music",
            Category::Archive => "archive",
            Category::Program => "program",
            Category::DiscImage => "disc image",
            Category::Document => "document",
            Category::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identified type of a byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Signature {
    /// The source holds no bytes.
    ZeroByte,
    /// Nothing in the catalog matched and the content is not text.
    Unknown,
    /// Interchange File Format container from Electronic Arts.
    ElectronicArtsIff,
    /// AV1 Image File Format.
    Av1ImageFile,
    /// JPEG File Interchange Format.
    JpegFileInterchangeFormat,
    /// JPEG 2000.
    Jpeg2000,
    /// Portable Network Graphics.
    PortableNetworkGraphics,
    /// Graphics Interchange Format.
    GraphicsInterchangeFormat,
    /// Google WebP.
    GoogleWebP,
    /// Tagged Image File Format.
    TaggedImageFileFormat,
    /// Windows and OS/2 bitmap.
    BmpFileFormat,
    /// ZSoft Personal Computer eXchange.
    PersonalComputerExchange,
    /// Amiga Interleaved Bitmap.
    InterleavedBitmap,
    /// Microsoft Windows icon.
    MicrosoftIcon,
    /// Remote Imaging Protocol script.
    RipScrip,
    /// MPEG-4 Part 14.
    Mpeg4,
    /// Apple QuickTime movie.
    QuickTimeMovie,
    /// Apple iTunes video.
    QuickTimeM4v,
    /// Microsoft Audio Video Interleave.
    MicrosoftAudioVideoInterleave,
    /// Microsoft Advanced Systems Format.
    MicrosoftWindowsMedia,
    /// MPEG program or video stream.
    Mpeg,
    /// Adobe Flash Video.
    FlashVideo,
    /// RealNetworks RealMedia.
    RealPlayer,
    /// Standard MIDI file.
    MusicalInstrumentDigitalInterface,
    /// MPEG-1 Audio Layer III.
    Mpeg1AudioLayer3,
    /// MPEG-2/4 ADTS AAC stream.
    MpegAdvancedAudioCoding,
    /// Xiph.Org Ogg container.
    OggVorbisCodec,
    /// Free Lossless Audio Codec.
    FreeLosslessAudioCodec,
    /// Microsoft RIFF WAVE.
    WaveAudioForWindows,
    /// FastTracker 2 extended module.
    MusicExtendedModule,
    /// MultiTracker module.
    MusicMultiTrackModule,
    /// Impulse Tracker module.
    MusicImpulseTracker,
    /// ProTracker module.
    MusicProTracker,
    /// Zip archive using the shrink method.
    PkwareZipShrink,
    /// Zip archive using a reduce method.
    PkwareZipReduce,
    /// Zip archive using the implode method.
    PkwareZipImplode,
    /// Zip archive with zip64 extensions.
    PkwareZip64,
    /// Zip archive.
    PkwareZip,
    /// Spanned zip archive.
    PkwareMultiVolume,
    /// PKLITE compressed executable.
    Pklite,
    /// PKSFX self-extracting archive.
    Pksfx,
    /// POSIX ustar archive.
    TapeArchive,
    /// RAR archive up to version 4.
    RoshalArchive,
    /// RAR archive version 5.
    RoshalArchiveV5,
    /// Gzip stream.
    GzipCompressArchive,
    /// Bzip2 stream.
    Bzip2CompressArchive,
    /// 7-Zip archive.
    X7zCompressArchive,
    /// Xz stream.
    XzCompressArchive,
    /// Zstandard frame.
    ZStandardArchive,
    /// FreeArc archive.
    FreeArc,
    /// System Enhancement Associates ARC.
    ArchiveSea,
    /// LHarc/LHA archive.
    YoshiLha,
    /// Zoo archive.
    ZooArchive,
    /// ARJ archive.
    ArchiveRobertJung,
    /// Microsoft cabinet.
    MicrosoftCabinet,
    /// MS-DOS KWAJ compressed file.
    MicrosoftDosKwaj,
    /// MS-DOS SZDD compressed file.
    MicrosoftDosSzdd,
    /// MZ executable.
    MicrosoftExecutable,
    /// OLE compound file.
    MicrosoftCompoundFile,
    /// ISO 9660 image.
    CdIso9660,
    /// Nero image.
    CdNero,
    /// PowerISO image.
    CdPowerIso,
    /// Alcohol 120% image.
    CdAlcohol120,
    /// Windows help.
    WindowsHelpFile,
    /// Portable Document Format.
    PortableDocumentFormat,
    /// Rich Text Format.
    RichTextFormat,
    /// XBin text mode image.
    XBinText,
    /// UTF-8 text with byte order mark.
    Utf8Text,
    /// UTF-16 text with byte order mark.
    Utf16Text,
    /// UTF-32 text with byte order mark.
    Utf32Text,
    /// Text with ANSI escape codes.
    AnsiEscapeText,
    /// Plain or code page text.
    PlainText,
}

impl Signature {
    /// Short label for integers outside the enumeration.
    pub const ERROR_LABEL: &'static str = "error";
    /// Long label for integers outside the enumeration.
    pub const ERROR_TITLE: &'static str = "Error";

    /// Every signature in declaration order, sentinels first.
    pub const ALL: [Signature; 72] = [
        Signature::ZeroByte,
        Signature::Unknown,
        Signature::ElectronicArtsIff,
        Signature::Av1ImageFile,
        Signature::JpegFileInterchangeFormat,
        Signature::Jpeg2000,
        Signature::PortableNetworkGraphics,
        Signature::GraphicsInterchangeFormat,
        Signature::GoogleWebP,
        Signature::TaggedImageFileFormat,
        Signature::BmpFileFormat,
        Signature::PersonalComputerExchange,
        Signature::InterleavedBitmap,
        Signature::MicrosoftIcon,
        Signature::RipScrip,
        Signature::Mpeg4,
        Signature::QuickTimeMovie,
        Signature::QuickTimeM4v,
        Signature::MicrosoftAudioVideoInterleave,
        Signature::MicrosoftWindowsMedia,
        Signature::Mpeg,
        Signature::FlashVideo,
        Signature::RealPlayer,
        Signature::MusicalInstrumentDigitalInterface,
        Signature::Mpeg1AudioLayer3,
        Signature::MpegAdvancedAudioCoding,
        Signature::OggVorbisCodec,
        Signature::FreeLosslessAudioCodec,
        Signature::WaveAudioForWindows,
        Signature::MusicExtendedModule,
        Signature::MusicMultiTrackModule,
        Signature::MusicImpulseTracker,
        Signature::MusicProTracker,
        Signature::PkwareZipShrink,
        Signature::PkwareZipReduce,
        Signature::PkwareZipImplode,
        Signature::PkwareZip64,
        Signature::PkwareZip,
        Signature::PkwareMultiVolume,
        Signature::Pklite,
        Signature::Pksfx,
        Signature::TapeArchive,
        Signature::RoshalArchive,
        Signature::RoshalArchiveV5,
        Signature::GzipCompressArchive,
        Signature::Bzip2CompressArchive,
        Signature::X7zCompressArchive,
        Signature::XzCompressArchive,
        Signature::ZStandardArchive,
        Signature::FreeArc,
        Signature::ArchiveSea,
        Signature::YoshiLha,
        Signature::ZooArchive,
        Signature::ArchiveRobertJung,
        Signature::MicrosoftCabinet,
        Signature::MicrosoftDosKwaj,
        Signature::MicrosoftDosSzdd,
        Signature::MicrosoftExecutable,
        Signature::MicrosoftCompoundFile,
        Signature::CdIso9660,
        Signature::CdNero,
        Signature::CdPowerIso,
        Signature::CdAlcohol120,
        Signature::WindowsHelpFile,
        Signature::PortableDocumentFormat,
        Signature::RichTextFormat,
        Signature::XBinText,
        Signature::Utf8Text,
        Signature::Utf16Text,
        Signature::Utf32Text,
        Signature::AnsiEscapeText,
        Signature::PlainText,
    ];

    /// Looks up a signature by its position in the enumeration.
    pub fn from_index(index: usize) -> Option<Signature> {
        Self::ALL.get(index).copied()
    }

    /// Position of the signature in the enumeration.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase-leaning label, e.g. "PNG image".
    pub fn as_str(&self) -> &'static str {
        match self {
            Signature::ZeroByte => "0-byte data",
            Signature::Unknown => "binary data",
            Signature::ElectronicArtsIff => "IFF image",
            Signature::Av1ImageFile => "AV1 image",
            Signature::JpegFileInterchangeFormat => "JPEG image",
            Signature::Jpeg2000 => "JPEG 2000 image",
            Signature::PortableNetworkGraphics => "PNG image",
            Signature::GraphicsInterchangeFormat => "GIF image",
            Signature::GoogleWebP => "WebP image",
            Signature::TaggedImageFileFormat => "TIFF image",
            Signature::BmpFileFormat => "BMP image",
            Signature::PersonalComputerExchange => "PCX image",
            Signature::InterleavedBitmap => "BMP image",
            Signature::MicrosoftIcon => "Microsoft icon",
            Signature::RipScrip => "RIPscrip",
            Signature::Mpeg4 => "MPEG-4 video",
            Signature::QuickTimeMovie => "QuickTime video",
            Signature::QuickTimeM4v => "QuickTime video",
            Signature::MicrosoftAudioVideoInterleave => "AVI video",
            Signature::MicrosoftWindowsMedia => "Windows Media video",
            Signature::Mpeg => "MPEG video",
            Signature::FlashVideo => "Flash video",
            Signature::RealPlayer => "RealPlayer video",
            Signature::MusicalInstrumentDigitalInterface => "MIDI audio",
            Signature::Mpeg1AudioLayer3 => "MP3 audio",
            Signature::MpegAdvancedAudioCoding => "AAC audio",
            Signature::OggVorbisCodec => "Ogg audio",
            Signature::FreeLosslessAudioCodec => "FLAC audio",
            Signature::WaveAudioForWindows => "Wave audio",
            Signature::MusicExtendedModule => "Tracker music extended mod",
            Signature::MusicMultiTrackModule => "Tracker music multi-track mod",
            Signature::MusicImpulseTracker => "Tracker music Impulse mod",
            Signature::MusicProTracker => "Tracker music ProTracker mod",
            Signature::PkwareZipShrink => "pkzip shrunk archive",
            Signature::PkwareZipReduce => "pkzip reduced archive",
            Signature::PkwareZipImplode => "pkzip imploded archive",
            Signature::PkwareZip64 => "zip64 archive",
            Signature::PkwareZip => "zip archive",
            Signature::PkwareMultiVolume => "multivolume zip",
            Signature::Pklite => "pklite compressed",
            Signature::Pksfx => "self-extracting zip",
            Signature::TapeArchive => "Tape archive",
            Signature::RoshalArchive => "RAR archive",
            Signature::RoshalArchiveV5 => "RAR v5+ archive",
            Signature::GzipCompressArchive => "Gzip archive",
            Signature::Bzip2CompressArchive => "Bzip2 archive",
            Signature::X7zCompressArchive => "7z archive",
            Signature::XzCompressArchive => "XZ archive",
            Signature::ZStandardArchive => "ZST archive",
            Signature::FreeArc => "FreeARC",
            Signature::ArchiveSea => "ARC by SEA",
            Signature::YoshiLha => "LHA by Yoshi",
            Signature::ZooArchive => "Zoo archive",
            Signature::ArchiveRobertJung => "ARJ archive",
            Signature::MicrosoftCabinet => "Microsoft cabinet",
            Signature::MicrosoftDosKwaj => "MS-DOS KWAJ",
            Signature::MicrosoftDosSzdd => "MS-DOS SZDD",
            Signature::MicrosoftExecutable => "MS-DOS executable",
            Signature::MicrosoftCompoundFile => "Microsoft compound file",
            Signature::CdIso9660 => "CD, ISO 9660",
            Signature::CdNero => "CD, Nero",
            Signature::CdPowerIso => "CD, PowerISO",
            Signature::CdAlcohol120 => "CD, Alcohol 120",
            Signature::WindowsHelpFile => "Windows help",
            Signature::PortableDocumentFormat => "PDF document",
            Signature::RichTextFormat => "rich text",
            Signature::XBinText => "XBin text",
            Signature::Utf8Text => "UTF-8 text",
            Signature::Utf16Text => "UTF-16 text",
            Signature::Utf32Text => "UTF-32 text",
            Signature::AnsiEscapeText => "ANSI text",
            Signature::PlainText => "plain text",
        }
    }

    /// Long descriptive label, e.g. "Portable Network Graphics".
    pub fn title(&self) -> &'static str {
        match self {
            Signature::ZeroByte => "Zero-byte data",
            Signature::Unknown => "Binary data",
            Signature::ElectronicArtsIff => "Electronic Arts IFF",
            Signature::Av1ImageFile => "AV1 Image File",
            Signature::JpegFileInterchangeFormat => "JPEG File Interchange Format",
            Signature::Jpeg2000 => "JPEG 2000",
            Signature::PortableNetworkGraphics => "Portable Network Graphics",
            Signature::GraphicsInterchangeFormat => "Graphics Interchange Format",
            Signature::GoogleWebP => "Google WebP",
            Signature::TaggedImageFileFormat => "Tagged Image File Format",
            Signature::BmpFileFormat => "Bitmap image file",
            Signature::PersonalComputerExchange => "Personal Computer eXchange",
            Signature::InterleavedBitmap => "Interleaved Bitmap",
            Signature::MicrosoftIcon => "Microsoft Icon",
            Signature::RipScrip => "RIPscrip vector graphic",
            Signature::Mpeg4 => "MPEG-4 video",
            Signature::QuickTimeMovie => "QuickTime Movie",
            Signature::QuickTimeM4v => "QuickTime M4V",
            Signature::MicrosoftAudioVideoInterleave => "Microsoft Audio Video Interleave",
            Signature::MicrosoftWindowsMedia => "Microsoft Windows Media",
            Signature::Mpeg => "MPEG video",
            Signature::FlashVideo => "Flash Video",
            Signature::RealPlayer => "RealPlayer",
            Signature::MusicalInstrumentDigitalInterface => "Musical Instrument Digital Interface",
            Signature::Mpeg1AudioLayer3 => "MPEG-1 Audio Layer 3",
            Signature::MpegAdvancedAudioCoding => "MPEG Advanced Audio Coding",
            Signature::OggVorbisCodec => "Ogg Vorbis Codec",
            Signature::FreeLosslessAudioCodec => "Free Lossless Audio Codec",
            Signature::WaveAudioForWindows => "Wave Audio for Windows",
            Signature::MusicExtendedModule => "Tracker music extended module",
            Signature::MusicMultiTrackModule => "Tracker music multi-track module",
            Signature::MusicImpulseTracker => "Tracker music Impulse module",
            Signature::MusicProTracker => "Tracked music ProTracker module",
            Signature::PkwareZipShrink => "Shrunked pkzip archive",
            Signature::PkwareZipReduce => "Reduced pkzip archive",
            Signature::PkwareZipImplode => "Imploded pkzip archive",
            Signature::PkwareZip64 => "PKWARE zip64 archive",
            Signature::PkwareZip => "Zip archive",
            Signature::PkwareMultiVolume => "Zip multi-Volume archive",
            Signature::Pklite => "PKLITE compressed executable",
            Signature::Pksfx => "PKSFX self-extracting archive",
            Signature::TapeArchive => "Tape Archive",
            Signature::RoshalArchive => "Roshal Archive",
            Signature::RoshalArchiveV5 => "Roshal Archive v5",
            Signature::GzipCompressArchive => "Gzip compress archive",
            Signature::Bzip2CompressArchive => "Bzip2 compress archive",
            Signature::X7zCompressArchive => "7z compress archive",
            Signature::XzCompressArchive => "XZ compress archive",
            Signature::ZStandardArchive => "ZStandard archive",
            Signature::FreeArc => "FreeArc",
            Signature::ArchiveSea => "Archive by SEA",
            Signature::YoshiLha => "Yoshi LHA",
            Signature::ZooArchive => "Zoo Archive",
            Signature::ArchiveRobertJung => "Archive by Robert Jung",
            Signature::MicrosoftCabinet => "Microsoft Cabinet",
            Signature::MicrosoftDosKwaj => "Microsoft DOS KWAJ",
            Signature::MicrosoftDosSzdd => "Microsoft DOS SZDD",
            Signature::MicrosoftExecutable => "Microsoft executable",
            Signature::MicrosoftCompoundFile => "Microsoft compound file",
            Signature::CdIso9660 => "CD ISO 9660",
            Signature::CdNero => "CD Nero",
            Signature::CdPowerIso => "CD PowerISO",
            Signature::CdAlcohol120 => "CD Alcohol 120",
            Signature::WindowsHelpFile => "Windows Help File",
            Signature::PortableDocumentFormat => "Portable Document Format",
            Signature::RichTextFormat => "Rich Text Format",
            Signature::XBinText => "eXtended BIN text",
            Signature::Utf8Text => "UTF-8 text",
            Signature::Utf16Text => "UTF-16 text",
            Signature::Utf32Text => "UTF-32 text",
            Signature::AnsiEscapeText => "ANSI escaped text",
            Signature::PlainText => "Plain text",
        }
    }

    /// Family of the signature, `None` for the sentinels.
    pub fn category(&self) -> Option<Category> {
        use Signature::*;
        let category = match self {
            ZeroByte | Unknown => return None,
            ElectronicArtsIff | Av1ImageFile | JpegFileInterchangeFormat | Jpeg2000
            | PortableNetworkGraphics | GraphicsInterchangeFormat | GoogleWebP
            | TaggedImageFileFormat | BmpFileFormat | PersonalComputerExchange
            | InterleavedBitmap | MicrosoftIcon | RipScrip
            => Category::Image,
            Mpeg4 | QuickTimeMovie | QuickTimeM4v | MicrosoftAudioVideoInterleave
            | MicrosoftWindowsMedia | Mpeg | FlashVideo | RealPlayer
            => Category::Video,
            MusicalInstrumentDigitalInterface | Mpeg1AudioLayer3 | MpegAdvancedAudioCoding
            | OggVorbisCodec | FreeLosslessAudioCodec | WaveAudioForWindows
            => Category::Audio,
            MusicExtendedModule | MusicMultiTrackModule | MusicImpulseTracker
            | MusicProTracker
            => Category::Music,
            PkwareZipShrink | PkwareZipReduce | PkwareZipImplode | PkwareZip64 | PkwareZip
            | PkwareMultiVolume | Pksfx | TapeArchive | RoshalArchive | RoshalArchiveV5
            | GzipCompressArchive | Bzip2CompressArchive | X7zCompressArchive
            | XzCompressArchive | ZStandardArchive | FreeArc | ArchiveSea | YoshiLha
            | ZooArchive | ArchiveRobertJung | MicrosoftCabinet | MicrosoftDosKwaj
            | MicrosoftDosSzdd
            => Category::Archive,
            Pklite | MicrosoftExecutable
            => Category::Program,
            MicrosoftCompoundFile | WindowsHelpFile | PortableDocumentFormat
            | RichTextFormat
            => Category::Document,
            CdIso9660 | CdNero | CdPowerIso | CdAlcohol120
            => Category::DiscImage,
            XBinText | Utf8Text | Utf16Text | Utf32Text | AnsiEscapeText | PlainText
            => Category::Text,
        };
        Some(category)
    }

    /// True for `ZeroByte` and `Unknown`.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Signature::ZeroByte | Signature::Unknown)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
