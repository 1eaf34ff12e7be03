//! Executable descriptor types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DOS MZ signature
pub const DOS_SIGNATURE: &[u8; 2] = b"MZ";

/// PE signature
pub const PE_SIGNATURE: &[u8; 4] = b"PE\0\0";

/// NE signature
pub const NE_SIGNATURE: &[u8; 2] = b"NE";

/// Offset of `e_lfanew` in the DOS header
pub const E_LFANEW_OFFSET: u64 = 0x3C;

/// Optional header magic values
pub const PE32_MAGIC: u16 = 0x10B;
pub const PE32PLUS_MAGIC: u16 = 0x20B;

/// Offsets relative to the PE signature
pub const PE_MACHINE_OFFSET: u64 = 4;
pub const PE_TIMESTAMP_OFFSET: u64 = 8;
pub const PE_OPTIONAL_HEADER_OFFSET: u64 = 24;

/// Offsets relative to the optional header; identical for PE32 and PE32+
pub const SUBSYSTEM_MAJOR_OFFSET: u64 = 48;
pub const SUBSYSTEM_MINOR_OFFSET: u64 = 50;

/// Offsets relative to the NE signature
pub const NE_TARGET_OS_OFFSET: u64 = 0x36;
pub const NE_WINDOWS_MINOR_OFFSET: u64 = 0x3E;
pub const NE_WINDOWS_MAJOR_OFFSET: u64 = 0x3F;

/// Machine architecture of a Portable Executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Architecture {
    /// Not a PE file, or a machine this crate does not name.
    #[default]
    Unknown,
    Intel386,
    Amd64,
}

impl From<u16> for Architecture {
    fn from(machine: u16) -> Self {
        match machine {
            0x014C => Architecture::Intel386,
            0x8664 => Architecture::Amd64,
            _ => Architecture::Unknown,
        }
    }
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Unknown => "Unknown PE",
            Architecture::Intel386 => "Intel 386 PE",
            Architecture::Amd64 => "AMD64 PE",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target operating system of a 16-bit New Executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NewExecutable {
    /// Not a New Executable, or an unlisted target.
    #[default]
    None,
    Os2,
    Windows286,
    Dos4,
    Windows386,
    Boss,
}

impl From<u8> for NewExecutable {
    fn from(target: u8) -> Self {
        match target {
            1 => NewExecutable::Os2,
            2 => NewExecutable::Windows286,
            3 => NewExecutable::Dos4,
            4 => NewExecutable::Windows386,
            5 => NewExecutable::Boss,
            _ => NewExecutable::None,
        }
    }
}

impl NewExecutable {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewExecutable::None => "none",
            NewExecutable::Os2 => "OS/2 New Executable",
            NewExecutable::Windows286 => "Windows for 286 New Executable",
            NewExecutable::Dos4 => "European MS-DOS 4 New Executable",
            NewExecutable::Windows386 => "Windows for 386 New Executable",
            NewExecutable::Boss => "Borland Operating System Services New Executable",
        }
    }
}

impl fmt::Display for NewExecutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the executable header chain reveals about a program.
///
/// `ne` is only set for New Executables, and then `arch` stays
/// `Unknown`. `major`/`minor` hold the subsystem version of a PE file or
/// the expected Windows version of a Windows New Executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableDescriptor {
    pub arch: Architecture,
    pub ne: NewExecutable,
    pub major: u16,
    pub minor: u16,
    /// Link time of a PE file; the Unix epoch when absent.
    pub timestamp: DateTime<Utc>,
}

impl Default for ExecutableDescriptor {
    fn default() -> Self {
        Self {
            arch: Architecture::Unknown,
            ne: NewExecutable::None,
            major: 0,
            minor: 0,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl ExecutableDescriptor {
    /// True when the header chain identified either executable class.
    pub fn is_known(&self) -> bool {
        self.arch != Architecture::Unknown || self.ne != NewExecutable::None
    }
}

/// Marketing name of a Windows NT release from its version pair.
pub fn windows_era(major: u16, minor: u16) -> String {
    let name = match (major, minor) {
        (3, 10) => "Windows NT v3.1",
        (3, 50) => "Windows NT v3.5",
        (3, 51) => "Windows NT v3.51",
        (4, 0) => "Windows NT v4.0",
        (5, 0) => "Windows 2000",
        (5, 1) => "Windows XP",
        (5, 2) => "Windows XP Professional x64 Edition",
        (6, 0) => "Windows Vista",
        (6, 1) => "Windows 7",
        (6, 2) => "Windows 8",
        (6, 3) => "Windows 8.1",
        (10, 0) => "Windows 10",
        _ => return format!("Windows NT v{major}.{minor}"),
    };
    name.to_string()
}

impl fmt::Display for ExecutableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.arch, self.ne) {
            (Architecture::Unknown, NewExecutable::None) => f.write_str("Unknown PE executable"),
            (Architecture::Unknown, NewExecutable::Windows286) => {
                write!(f, "Windows v{}.{} for 286", self.major, self.minor)
            }
            (Architecture::Unknown, NewExecutable::Windows386) => {
                write!(f, "Windows v{}.{} for 386", self.major, self.minor)
            }
            (Architecture::Unknown, ne) => f.write_str(ne.as_str()),
            (arch, _) => {
                f.write_str(&windows_era(self.major, self.minor))?;
                match arch {
                    Architecture::Amd64 => f.write_str(" 64-bit"),
                    Architecture::Intel386 if self.major >= 5 => f.write_str(" 32-bit"),
                    _ => Ok(()),
                }
            }
        }
    }
}
