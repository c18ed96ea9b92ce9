use crate::header::ident::{Class, DataEncoding, OsAbi, Version};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use goblin::elf::header::{
    header32, header64, ELFMAG, ET_CORE, ET_DYN, ET_EXEC, ET_NONE, ET_REL, EI_ABIVERSION,
    EI_CLASS, EI_DATA, EI_OSABI, EI_VERSION, SELFMAG, SIZEOF_IDENT,
};
use std::fmt;
use thiserror::Error;

/// Offset of `e_type`, directly after the identification block.
const E_TYPE: usize = SIZEOF_IDENT;
/// Offset of `e_entry`; identical for ELF32 and ELF64.
const E_ENTRY: usize = 24;

/// Largest header this decoder will ever look at.
pub const MAX_HEADER_SIZE: usize = header64::SIZEOF_EHDR;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("header truncated: need {needed} bytes, got {got}")]
    TooShort { needed: usize, got: usize },
    #[error("bad ELF magic")]
    NotAnElfFile,
}

/// Object file type (`e_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    None,
    Relocatable,
    Executable,
    SharedObject,
    Core,
    Unknown(u16),
}

impl From<u16> for ObjectType {
    fn from(raw: u16) -> Self {
        match raw {
            ET_NONE => ObjectType::None,
            ET_REL => ObjectType::Relocatable,
            ET_EXEC => ObjectType::Executable,
            ET_DYN => ObjectType::SharedObject,
            ET_CORE => ObjectType::Core,
            other => ObjectType::Unknown(other),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::None => "NONE (None)",
            ObjectType::Relocatable => "REL (Relocatable file)",
            ObjectType::Executable => "EXEC (Executable file)",
            ObjectType::SharedObject => "DYN (Shared object file)",
            ObjectType::Core => "CORE (Core file)",
            ObjectType::Unknown(raw) => return write!(f, "<unknown: {raw:x}>"),
        };
        f.write_str(name)
    }
}

/// The leading ELF header, decoded up to and including the entry point.
///
/// Fields after `e_entry` (program/section table offsets, flags, sizes) are
/// not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHeader {
    /// Raw identification bytes, magic included.
    pub ident: [u8; SIZEOF_IDENT],
    pub class: Class,
    pub data: DataEncoding,
    pub version: Version,
    pub os_abi: OsAbi,
    pub abi_version: u8,
    pub object_type: ObjectType,
    /// Virtual address of the entry point. ELF32 values are zero-extended.
    pub entry: u64,
}

/// Full header size for a class. Anything that is not ELF32 is read with the
/// 64-bit layout.
pub fn header_size(class: Class) -> usize {
    match class {
        Class::Elf32 => header32::SIZEOF_EHDR,
        _ => header64::SIZEOF_EHDR,
    }
}

/// Decode the ELF header at the start of `bytes`.
///
/// Identification bytes are read as-is. `e_type` and `e_entry` are read in
/// the byte order declared by `e_ident[EI_DATA]`, with the entry width taken
/// from `e_ident[EI_CLASS]`. Trailing bytes past the header are ignored.
pub fn decode(bytes: &[u8]) -> Result<DecodedHeader, DecodeError> {
    if bytes.len() < SIZEOF_IDENT {
        return Err(DecodeError::TooShort {
            needed: SIZEOF_IDENT,
            got: bytes.len(),
        });
    }
    if &bytes[..SELFMAG] != ELFMAG {
        return Err(DecodeError::NotAnElfFile);
    }

    let mut ident = [0u8; SIZEOF_IDENT];
    ident.copy_from_slice(&bytes[..SIZEOF_IDENT]);

    let class = Class::from(ident[EI_CLASS]);
    let data = DataEncoding::from(ident[EI_DATA]);
    let version = Version::from(ident[EI_VERSION]);
    let os_abi = OsAbi::from(ident[EI_OSABI]);
    let abi_version = ident[EI_ABIVERSION];
    log::debug!("ident: class={class:?} data={data:?} version={version:?} osabi={os_abi:?}");

    if !matches!(class, Class::Elf32 | Class::Elf64) {
        log::warn!("Class {class} is not ELF32/ELF64; using the 64-bit layout");
    }
    if !matches!(data, DataEncoding::LittleEndian | DataEncoding::BigEndian) {
        log::warn!("Data encoding {data} is not LSB/MSB; reading fields little endian");
    }

    let needed = header_size(class);
    if bytes.len() < needed {
        return Err(DecodeError::TooShort {
            needed,
            got: bytes.len(),
        });
    }

    let (raw_type, entry) = if data.is_big_endian() {
        read_fields::<BigEndian>(bytes, class)
    } else {
        read_fields::<LittleEndian>(bytes, class)
    };
    log::debug!("e_type={raw_type:#x} e_entry={entry:#x}");

    Ok(DecodedHeader {
        ident,
        class,
        data,
        version,
        os_abi,
        abi_version,
        object_type: ObjectType::from(raw_type),
        entry,
    })
}

/// Reads `e_type` and `e_entry`. `bytes` must hold at least
/// `header_size(class)` bytes.
fn read_fields<B: ByteOrder>(bytes: &[u8], class: Class) -> (u16, u64) {
    let e_type = B::read_u16(&bytes[E_TYPE..]);
    let e_entry = match class.address_size() {
        4 => u64::from(B::read_u32(&bytes[E_ENTRY..])),
        _ => B::read_u64(&bytes[E_ENTRY..]),
    };
    (e_type, e_entry)
}
