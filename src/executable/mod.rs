//! MZ, NE and PE header chain parsing.
//!
//! Every DOS-era executable starts with an MZ header whose `e_lfanew`
//! field may point at a newer header. A `PE\0\0` signature there marks a
//! Portable Executable, `NE` marks a 16-bit New Executable. The parser only
//! reads the handful of fields needed to describe the program, and every
//! short or inconsistent read leaves the remaining fields at their
//! defaults instead of failing.

pub mod types;

pub use types::*;

use crate::io::{probe_array, ByteSource};
use chrono::DateTime;
use tracing::{debug, trace};

/// Positional little-endian reads over a byte source.
trait SourceExt {
    fn read_u8_at(&self, offset: u64) -> Option<u8>;
    fn read_u16_le_at(&self, offset: u64) -> Option<u16>;
    fn read_u32_le_at(&self, offset: u64) -> Option<u32>;
    fn has_bytes_at(&self, offset: u64, expected: &[u8]) -> bool;
}

impl SourceExt for dyn ByteSource + '_ {
    fn read_u8_at(&self, offset: u64) -> Option<u8> {
        probe_array::<1>(self, offset).map(|[b]| b)
    }

    fn read_u16_le_at(&self, offset: u64) -> Option<u16> {
        probe_array::<2>(self, offset).map(u16::from_le_bytes)
    }

    fn read_u32_le_at(&self, offset: u64) -> Option<u32> {
        probe_array::<4>(self, offset).map(u32::from_le_bytes)
    }

    fn has_bytes_at(&self, offset: u64, expected: &[u8]) -> bool {
        crate::matchers::bytes_at(self, offset, expected)
    }
}

/// Walks the header chain of `src` and describes the executable.
///
/// Sources that are not MZ executables, or whose extended header is
/// missing or unrecognized, produce the default descriptor.
pub fn parse(src: &dyn ByteSource) -> ExecutableDescriptor {
    let mut desc = ExecutableDescriptor::default();
    if !src.has_bytes_at(0, DOS_SIGNATURE) {
        return desc;
    }
    let Some(e_lfanew) = src.read_u32_le_at(E_LFANEW_OFFSET) else {
        trace!("MZ header too short for e_lfanew");
        return desc;
    };
    let header = u64::from(e_lfanew);

    if src.has_bytes_at(header, PE_SIGNATURE) {
        parse_pe(src, header, &mut desc);
    } else if src.has_bytes_at(header, NE_SIGNATURE) {
        parse_ne(src, header, &mut desc);
    } else {
        trace!(offset = header, "no extended header");
    }
    desc
}

fn parse_pe(src: &dyn ByteSource, header: u64, desc: &mut ExecutableDescriptor) {
    let Some(machine) = src.read_u16_le_at(header + PE_MACHINE_OFFSET) else {
        return;
    };
    desc.arch = Architecture::from(machine);

    let Some(stamp) = src.read_u32_le_at(header + PE_TIMESTAMP_OFFSET) else {
        return;
    };
    if let Some(time) = DateTime::from_timestamp(i64::from(stamp), 0) {
        desc.timestamp = time;
    }

    let optional = header + PE_OPTIONAL_HEADER_OFFSET;
    match src.read_u16_le_at(optional) {
        Some(PE32_MAGIC | PE32PLUS_MAGIC) => {
            let major = src.read_u16_le_at(optional + SUBSYSTEM_MAJOR_OFFSET);
            let minor = src.read_u16_le_at(optional + SUBSYSTEM_MINOR_OFFSET);
            if let (Some(major), Some(minor)) = (major, minor) {
                desc.major = major;
                desc.minor = minor;
            }
        }
        magic => trace!(?magic, "unrecognized optional header"),
    }

    debug!(
        machine,
        arch = %desc.arch,
        major = desc.major,
        minor = desc.minor,
        timestamp = %desc.timestamp,
        "Parsed PE header"
    );
}

fn parse_ne(src: &dyn ByteSource, header: u64, desc: &mut ExecutableDescriptor) {
    let Some(target) = src.read_u8_at(header + NE_TARGET_OS_OFFSET) else {
        return;
    };
    desc.arch = Architecture::Unknown;
    desc.ne = NewExecutable::from(target);

    let minor = src.read_u8_at(header + NE_WINDOWS_MINOR_OFFSET);
    let major = src.read_u8_at(header + NE_WINDOWS_MAJOR_OFFSET);
    if let (Some(major), Some(minor)) = (major, minor) {
        desc.major = u16::from(major);
        desc.minor = u16::from(minor);
    }

    debug!(
        target_os = target,
        ne = %desc.ne,
        major = desc.major,
        minor = desc.minor,
        "Parsed NE header"
    );
}
