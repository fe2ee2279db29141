//! Nether-TLV: self-describing binary codec for Nethercore messages
//!
//! Encodes a small closed set of value types into a compact tag-length-value
//! byte sequence and back, without a schema compiler. Used for inter-process
//! messages, cache payloads and log records.
//!
//! **This is a pure codec** - no I/O, no global state. Encode borrows a
//! `Value` and returns a fresh buffer; decode borrows a buffer and returns an
//! owned `Value` tree with payloads copied out.
//!
//! # Frame Format
//!
//! ```text
//! value := varint(tag) payload(tag)
//!
//! tag  name         payload
//! 0    NONE         (empty)
//! 1    RAW          varint(len) bytes
//! 2    STR          varint(len) utf8 bytes
//! 3    BOOL         0x00 | 0x01
//! 4    INT          i32 BE
//! 5    LONG         i64 BE
//! 6    FLOAT        f32 BE (IEEE-754 binary32)
//! 7    TUPLE        varint(bytelen) child frames
//! 8    LIST         varint(bytelen) child frames
//! 9    DICT         varint(bytelen) (key frame, value frame)*
//! 10   TAGGED_DICT  reserved, rejected
//! ```
//!
//! Varints are base-128 with the continuation bit on every byte but the last,
//! most-significant group first (the reverse of protobuf's group order).
//!
//! # Usage
//!
//! ```
//! use nether_tlv::{Value, deserialize, serialize};
//!
//! let msg = Value::Dict(vec![
//!     ("a".into(), 1.into()),
//!     ("b".into(), Value::List(vec![true.into(), Value::None])),
//! ]);
//!
//! let bytes = serialize(&msg);
//! let (decoded, consumed) = deserialize(&bytes).unwrap();
//! assert_eq!(decoded, msg);
//! assert_eq!(consumed, bytes.len());
//! ```

mod decode;
mod encode;
mod error;
mod json;
mod tag;
mod value;
pub mod varint;

pub use decode::{
    DEFAULT_MAX_DEPTH, DecodeLimits, FrameHeader, decode, decode_all, decode_exact,
    decode_with_limits, read_header,
};
pub use encode::{encode, encode_into, encoded_len};
pub use error::{TlvError, TlvResult};
pub use tag::TypeTag;
pub use value::Value;
pub use varint::{decode_varint, encode_varint};

// =============================================================================
// Public Entry Points
// =============================================================================

/// Serialize a value into a new buffer (same as [`encode`])
#[inline]
pub fn serialize(value: &Value) -> Vec<u8> {
    encode(value)
}

/// Deserialize one value from the start of `bytes` (same as [`decode`])
///
/// Returns the value and the number of bytes it occupied, so several values
/// can be framed back-to-back in one buffer.
#[inline]
pub fn deserialize(bytes: &[u8]) -> TlvResult<(Value, usize)> {
    decode(bytes)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_back_frames() {
        let mut stream = serialize(&Value::Str("hello".into()));
        stream.extend(serialize(&Value::Int(-5)));

        let (first, used) = deserialize(&stream).unwrap();
        let (second, rest) = deserialize(&stream[used..]).unwrap();

        assert_eq!(first, Value::Str("hello".into()));
        assert_eq!(second, Value::Int(-5));
        assert_eq!(used + rest, stream.len());
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<DecodeLimits>();
        assert_send_sync::<TlvError>();
    }
}
