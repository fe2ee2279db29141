//! TLV encoder
//!
//! Every frame is `varint(tag) ++ payload`. Container payloads are prefixed
//! with the total byte length of their encoded children, computed with
//! `encoded_len` before the children are written in place.

use crate::value::{Value, fits_int32};
use crate::varint::{varint_len, write_varint};

/// Encode a value into a new buffer
///
/// # Example
/// ```
/// use nether_tlv::{Value, encode};
///
/// assert_eq!(encode(&Value::Bool(true)), vec![0x03, 0x01]);
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out);
    out
}

/// Append the frame for `value` to `out`
///
/// Frames written back-to-back can be read with `decode_all`.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) {
    write_varint(value.tag().as_u64(), out);

    match value {
        Value::None => {}
        Value::Bytes(bytes) => write_blob(bytes, out),
        Value::Str(s) => write_blob(s.as_bytes(), out),
        Value::Bool(b) => out.push(u8::from(*b)),
        Value::Int(v) => {
            if fits_int32(*v) {
                out.extend_from_slice(&(*v as i32).to_be_bytes());
            } else {
                out.extend_from_slice(&v.to_be_bytes());
            }
        }
        Value::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Tuple(items) | Value::List(items) => {
            write_varint(seq_len(items) as u64, out);
            for item in items {
                encode_into(item, out);
            }
        }
        Value::Dict(entries) => {
            write_varint(dict_len(entries) as u64, out);
            for (key, val) in entries {
                encode_into(key, out);
                encode_into(val, out);
            }
        }
    }
}

/// Exact number of bytes `encode` produces for `value`
pub fn encoded_len(value: &Value) -> usize {
    let tag = value.tag();
    let payload = match value {
        Value::Bytes(bytes) => prefixed_len(bytes.len()),
        Value::Str(s) => prefixed_len(s.len()),
        Value::Tuple(items) | Value::List(items) => prefixed_len(seq_len(items)),
        Value::Dict(entries) => prefixed_len(dict_len(entries)),
        _ => tag.fixed_width().unwrap_or(0),
    };
    varint_len(tag.as_u64()) + payload
}

/// `varint(len) ++ bytes`
fn write_blob(bytes: &[u8], out: &mut Vec<u8>) {
    write_varint(bytes.len() as u64, out);
    out.extend_from_slice(bytes);
}

/// Bytes taken by the child frames of a tuple or list
fn seq_len(items: &[Value]) -> usize {
    items.iter().map(encoded_len).sum()
}

/// Bytes taken by the key and value frames of a dict
fn dict_len(entries: &[(Value, Value)]) -> usize {
    entries
        .iter()
        .map(|(k, v)| encoded_len(k) + encoded_len(v))
        .sum()
}

fn prefixed_len(len: usize) -> usize {
    varint_len(len as u64) + len
}
