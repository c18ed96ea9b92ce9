//! Single-byte fields of the ELF identification block (`e_ident`).
//!
//! Each field is a closed set of known values plus an `Unknown` variant
//! carrying the raw byte, so a header with odd values can still be shown.

use goblin::elf::header::{
    ELFCLASS32, ELFCLASS64, ELFCLASSNONE, ELFDATA2LSB, ELFDATA2MSB, ELFDATANONE, ELFOSABI_ARM,
    ELFOSABI_FREEBSD, ELFOSABI_HPUX, ELFOSABI_IRIX, ELFOSABI_LINUX, ELFOSABI_NETBSD,
    ELFOSABI_NONE, ELFOSABI_SOLARIS, ELFOSABI_STANDALONE, ELFOSABI_TRU64, EV_CURRENT,
};
use std::fmt;

/// Addressing width declared by `e_ident[EI_CLASS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    None,
    Elf32,
    Elf64,
    Unknown(u8),
}

impl Class {
    /// Size in bytes of an address-sized field (4 for ELF32, 8 otherwise).
    pub fn address_size(self) -> usize {
        match self {
            Class::Elf32 => 4,
            _ => 8,
        }
    }
}

impl From<u8> for Class {
    fn from(raw: u8) -> Self {
        match raw {
            ELFCLASSNONE => Class::None,
            ELFCLASS32 => Class::Elf32,
            ELFCLASS64 => Class::Elf64,
            other => Class::Unknown(other),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::None => f.write_str("none"),
            Class::Elf32 => f.write_str("ELF32"),
            Class::Elf64 => f.write_str("ELF64"),
            Class::Unknown(raw) => write!(f, "<unknown: {raw:x}>"),
        }
    }
}

/// Byte order declared by `e_ident[EI_DATA]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    None,
    LittleEndian,
    BigEndian,
    Unknown(u8),
}

impl DataEncoding {
    /// Whether multi-byte fields are read most-significant byte first.
    ///
    /// Only an explicit big-endian declaration selects MSB order; `None` and
    /// unknown encodings are read little-endian.
    pub fn is_big_endian(self) -> bool {
        matches!(self, DataEncoding::BigEndian)
    }
}

impl From<u8> for DataEncoding {
    fn from(raw: u8) -> Self {
        match raw {
            ELFDATANONE => DataEncoding::None,
            ELFDATA2LSB => DataEncoding::LittleEndian,
            ELFDATA2MSB => DataEncoding::BigEndian,
            other => DataEncoding::Unknown(other),
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataEncoding::None => f.write_str("none"),
            DataEncoding::LittleEndian => f.write_str("2's complement, little endian"),
            DataEncoding::BigEndian => f.write_str("2's complement, big endian"),
            DataEncoding::Unknown(raw) => write!(f, "<unknown: {raw:x}>"),
        }
    }
}

/// `e_ident[EI_VERSION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Invalid,
    Current,
    Other(u8),
}

impl Version {
    pub fn raw(self) -> u8 {
        match self {
            Version::Invalid => 0,
            Version::Current => EV_CURRENT,
            Version::Other(raw) => raw,
        }
    }
}

impl From<u8> for Version {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Version::Invalid,
            EV_CURRENT => Version::Current,
            other => Version::Other(other),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Invalid => write!(f, "{} (invalid)", self.raw()),
            Version::Current => write!(f, "{} (current)", self.raw()),
            Version::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Target operating system / ABI from `e_ident[EI_OSABI]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsAbi {
    SystemV,
    HpUx,
    NetBsd,
    Linux,
    Solaris,
    Irix,
    FreeBsd,
    Tru64,
    Arm,
    Standalone,
    Unknown(u8),
}

impl From<u8> for OsAbi {
    fn from(raw: u8) -> Self {
        match raw {
            ELFOSABI_NONE => OsAbi::SystemV,
            ELFOSABI_HPUX => OsAbi::HpUx,
            ELFOSABI_NETBSD => OsAbi::NetBsd,
            ELFOSABI_LINUX => OsAbi::Linux,
            ELFOSABI_SOLARIS => OsAbi::Solaris,
            ELFOSABI_IRIX => OsAbi::Irix,
            ELFOSABI_FREEBSD => OsAbi::FreeBsd,
            ELFOSABI_TRU64 => OsAbi::Tru64,
            ELFOSABI_ARM => OsAbi::Arm,
            ELFOSABI_STANDALONE => OsAbi::Standalone,
            other => OsAbi::Unknown(other),
        }
    }
}

impl fmt::Display for OsAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsAbi::SystemV => "UNIX - System V",
            OsAbi::HpUx => "UNIX - HP-UX",
            OsAbi::NetBsd => "UNIX - NetBSD",
            OsAbi::Linux => "UNIX - Linux",
            OsAbi::Solaris => "UNIX - Solaris",
            OsAbi::Irix => "UNIX - IRIX",
            OsAbi::FreeBsd => "UNIX - FreeBSD",
            OsAbi::Tru64 => "UNIX - TRU64",
            OsAbi::Arm => "ARM",
            OsAbi::Standalone => "Standalone App",
            OsAbi::Unknown(raw) => return write!(f, "<unknown: {raw:x}>"),
        };
        f.write_str(name)
    }
}
