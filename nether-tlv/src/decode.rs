//! TLV decoder
//!
//! Decoding consumes exactly the bytes the encoder wrote for one value and
//! reports how many that was, so adjacent frames in a larger buffer can be
//! located without an outer envelope. Containers decode their children the
//! same way, accumulating consumed bytes until the declared length is met.

use serde::{Deserialize, Serialize};

use crate::error::{TlvError, TlvResult};
use crate::tag::TypeTag;
use crate::value::Value;
use crate::varint::decode_varint;

/// Default container nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Bounds applied while decoding untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Maximum container nesting (a top-level list is depth 1)
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tag and length prefix of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub tag: TypeTag,
    /// Bytes taken by the tag varint plus any length varint
    pub header_len: usize,
    /// Declared (prefixed types) or fixed payload size
    pub payload_len: u64,
}

impl FrameHeader {
    /// Total frame size as declared by the header
    pub fn frame_len(&self) -> u64 {
        self.header_len as u64 + self.payload_len
    }
}

/// Read the tag and, for length-prefixed types, the length varint
///
/// # Errors
/// * `TlvError::TruncatedVarint` / `TlvError::VarintOverflow` from the varints
/// * `TlvError::UnsupportedType` for unknown tags and the reserved
///   `TAGGED_DICT` tag
pub fn read_header(buf: &[u8]) -> TlvResult<FrameHeader> {
    let (raw_tag, mut header_len) = decode_varint(buf)?;

    let tag = TypeTag::try_from(raw_tag)?;
    if tag == TypeTag::TaggedDict {
        return Err(TlvError::UnsupportedType(
            "TAGGED_DICT (tag 10) is reserved".to_string(),
        ));
    }

    let payload_len = match tag.fixed_width() {
        Some(width) => width as u64,
        None => {
            let (len, consumed) = decode_varint(&buf[header_len..])?;
            header_len += consumed;
            len
        }
    };

    Ok(FrameHeader {
        tag,
        header_len,
        payload_len,
    })
}

/// Decode one value from the start of `buf` with default limits
///
/// Returns `(value, bytes_consumed)`.
///
/// # Example
/// ```
/// use nether_tlv::{Value, decode};
///
/// let (value, consumed) = decode(&[0x03, 0x01, 0xFF]).unwrap();
/// assert_eq!(value, Value::Bool(true));
/// assert_eq!(consumed, 2);
/// ```
pub fn decode(buf: &[u8]) -> TlvResult<(Value, usize)> {
    decode_with_limits(buf, &DecodeLimits::default())
}

/// Decode one value from the start of `buf`
pub fn decode_with_limits(buf: &[u8], limits: &DecodeLimits) -> TlvResult<(Value, usize)> {
    Decoder { limits }.decode_at(buf, 0).inspect_err(|err| {
        tracing::debug!(error = %err, input_len = buf.len(), "rejected TLV input");
    })
}

/// Decode a single value that must span the whole buffer
///
/// # Errors
/// `TlvError::TrailingBytes` if input remains after the value
pub fn decode_exact(buf: &[u8], limits: &DecodeLimits) -> TlvResult<Value> {
    let (value, consumed) = decode_with_limits(buf, limits)?;
    if consumed != buf.len() {
        return Err(TlvError::TrailingBytes(buf.len() - consumed));
    }
    Ok(value)
}

/// Decode every back-to-back frame in `buf`
pub fn decode_all(buf: &[u8], limits: &DecodeLimits) -> TlvResult<Vec<Value>> {
    let mut values = Vec::new();
    let mut pos = 0;

    while pos < buf.len() {
        let (value, consumed) = decode_with_limits(&buf[pos..], limits)?;
        values.push(value);
        pos += consumed;
    }

    tracing::trace!(frames = values.len(), bytes = pos, "decoded frame stream");
    Ok(values)
}

struct Decoder<'a> {
    limits: &'a DecodeLimits,
}

impl Decoder<'_> {
    /// `depth` is the number of containers enclosing this frame
    fn decode_at(&self, buf: &[u8], depth: usize) -> TlvResult<(Value, usize)> {
        let header = read_header(buf)?;
        let start = header.header_len;

        if header.tag.is_container() {
            return self.decode_container(buf, header, depth);
        }

        let payload = take(buf, start, header.payload_len)?;
        let value = match header.tag {
            TypeTag::None => Value::None,
            TypeTag::Raw => Value::Bytes(payload.to_vec()),
            TypeTag::Str => Value::Str(
                String::from_utf8(payload.to_vec()).map_err(|_| TlvError::InvalidUtf8)?,
            ),
            TypeTag::Bool => match payload[0] {
                0x00 => Value::Bool(false),
                0x01 => Value::Bool(true),
                b => return Err(TlvError::InvalidBool(b)),
            },
            TypeTag::Int => Value::Int(i32::from_be_bytes(array(payload)) as i64),
            TypeTag::Long => Value::Int(i64::from_be_bytes(array(payload))),
            TypeTag::Float => Value::Float(f32::from_be_bytes(array(payload))),
            TypeTag::Tuple | TypeTag::List | TypeTag::Dict | TypeTag::TaggedDict => {
                unreachable!("containers and reserved tags are handled above")
            }
        };

        Ok((value, start + payload.len()))
    }

    fn decode_container(
        &self,
        buf: &[u8],
        header: FrameHeader,
        depth: usize,
    ) -> TlvResult<(Value, usize)> {
        let tag = header.tag;
        let declared = header.payload_len;
        let mut pos = header.header_len;

        let available = (buf.len() - pos) as u64;
        if declared > available {
            return Err(TlvError::InvalidContainer {
                tag,
                declared,
                actual: available,
            });
        }

        if depth >= self.limits.max_depth {
            return Err(TlvError::DepthLimitExceeded(self.limits.max_depth));
        }

        tracing::trace!(%tag, declared, depth, "decoding container");

        let mut consumed = 0u64;
        let mut items = Vec::new();
        let mut entries = Vec::new();

        while consumed < declared {
            let (first, c) = self.decode_at(&buf[pos..], depth + 1)?;
            pos += c;
            consumed += c as u64;

            if tag == TypeTag::Dict {
                let (second, c) = self.decode_at(&buf[pos..], depth + 1)?;
                pos += c;
                consumed += c as u64;
                entries.push((first, second));
            } else {
                items.push(first);
            }
        }

        // A child ran past the declared boundary
        if consumed != declared {
            return Err(TlvError::InvalidContainer {
                tag,
                declared,
                actual: consumed,
            });
        }

        let value = match tag {
            TypeTag::Tuple => Value::Tuple(items),
            TypeTag::List => Value::List(items),
            _ => Value::Dict(entries),
        };
        Ok((value, pos))
    }
}

/// Borrow `len` bytes at `start`, or fail with `UnexpectedEof`
fn take(buf: &[u8], start: usize, len: u64) -> TlvResult<&[u8]> {
    let available = buf.len().saturating_sub(start);
    if len > available as u64 {
        return Err(TlvError::UnexpectedEof {
            needed: len,
            available,
        });
    }
    Ok(&buf[start..start + len as usize])
}

/// Copy a slice whose length is already checked into a fixed array
fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
