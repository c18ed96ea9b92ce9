pub mod elf;
pub mod ident;

pub use elf::{decode, header_size, DecodeError, DecodedHeader, ObjectType, MAX_HEADER_SIZE};
pub use ident::{Class, DataEncoding, OsAbi, Version};
