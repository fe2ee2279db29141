//! Wire type tags
//!
//! The numeric values are the wire contract. They are written out by hand and
//! must never be renumbered.

use core::fmt;

use crate::error::TlvError;

/// Type tag that prefixes every frame (varint-encoded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// Absent value, no payload
    None = 0,
    /// Raw byte string: `varint(len) ++ bytes`
    Raw = 1,
    /// UTF-8 text: `varint(len) ++ bytes`
    Str = 2,
    /// One byte, 0x00 or 0x01
    Bool = 3,
    /// 4-byte big-endian two's complement
    Int = 4,
    /// 8-byte big-endian two's complement
    Long = 5,
    /// 4-byte big-endian IEEE-754 binary32
    Float = 6,
    /// `varint(bytelen) ++ children`
    Tuple = 7,
    /// `varint(bytelen) ++ children`
    List = 8,
    /// `varint(bytelen) ++ (key ++ value)*`
    Dict = 9,
    /// Reserved. Has no payload definition and is rejected by the codec.
    TaggedDict = 10,
}

impl TypeTag {
    /// Wire value of this tag
    #[inline]
    pub fn as_u64(self) -> u64 {
        self as u8 as u64
    }

    /// Whether the payload is a byte-length-prefixed run of child frames
    pub fn is_container(self) -> bool {
        matches!(self, TypeTag::Tuple | TypeTag::List | TypeTag::Dict)
    }

    /// Size of the payload for fixed-width tags
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            TypeTag::None => Some(0),
            TypeTag::Bool => Some(1),
            TypeTag::Int | TypeTag::Float => Some(4),
            TypeTag::Long => Some(8),
            _ => None,
        }
    }

    /// Upper-case wire name (`NONE`, `RAW`, ...)
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::None => "NONE",
            TypeTag::Raw => "RAW",
            TypeTag::Str => "STR",
            TypeTag::Bool => "BOOL",
            TypeTag::Int => "INT",
            TypeTag::Long => "LONG",
            TypeTag::Float => "FLOAT",
            TypeTag::Tuple => "TUPLE",
            TypeTag::List => "LIST",
            TypeTag::Dict => "DICT",
            TypeTag::TaggedDict => "TAGGED_DICT",
        }
    }
}

/// Look up a tag by its wire value
impl TryFrom<u64> for TypeTag {
    type Error = TlvError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => TypeTag::None,
            1 => TypeTag::Raw,
            2 => TypeTag::Str,
            3 => TypeTag::Bool,
            4 => TypeTag::Int,
            5 => TypeTag::Long,
            6 => TypeTag::Float,
            7 => TypeTag::Tuple,
            8 => TypeTag::List,
            9 => TypeTag::Dict,
            10 => TypeTag::TaggedDict,
            _ => return Err(TlvError::UnsupportedType(format!("unknown tag {}", value))),
        })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
