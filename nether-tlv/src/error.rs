//! Codec error types

use crate::tag::TypeTag;

/// Errors raised by the varint and TLV codecs.
///
/// Every variant aborts the operation; nothing is partially returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TlvError {
    /// `encode_varint` was given a negative value
    #[error("negative varint: {0}")]
    NegativeVarint(i64),

    /// Input ended before a varint's terminating byte
    #[error("truncated varint")]
    TruncatedVarint,

    /// Varint value does not fit in 64 bits
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// Value with no wire mapping, or an unrecognised tag on decode
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Container children did not add up to the declared byte length
    #[error("invalid {tag}: declared {declared} bytes, found {actual}")]
    InvalidContainer {
        tag: TypeTag,
        declared: u64,
        actual: u64,
    },

    /// Payload shorter than its tag or length prefix requires
    #[error("unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEof { needed: u64, available: usize },

    /// STR payload is not valid UTF-8
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    /// BOOL payload byte other than 0x00 or 0x01
    #[error("invalid bool byte: 0x{0:02X}")]
    InvalidBool(u8),

    /// Container nesting exceeded `DecodeLimits::max_depth`
    #[error("container nesting exceeds depth limit of {0}")]
    DepthLimitExceeded(usize),

    /// `decode_exact` found bytes after the value
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// Result alias used throughout the crate
pub type TlvResult<T> = Result<T, TlvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TlvError::NegativeVarint(-1).to_string(), "negative varint: -1");
        assert_eq!(TlvError::TruncatedVarint.to_string(), "truncated varint");
        assert_eq!(
            TlvError::InvalidContainer {
                tag: TypeTag::List,
                declared: 4,
                actual: 5
            }
            .to_string(),
            "invalid LIST: declared 4 bytes, found 5"
        );
        assert_eq!(TlvError::InvalidBool(0x02).to_string(), "invalid bool byte: 0x02");
        assert_eq!(
            TlvError::UnexpectedEof {
                needed: 8,
                available: 3
            }
            .to_string(),
            "unexpected end of input: needed 8 bytes, 3 available"
        );
    }
}
