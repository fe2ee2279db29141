//! Big-endian base-128 varints
//!
//! Each byte carries 7 data bits. The high bit is the continuation flag: set on
//! every byte of a number except the last. Unlike LEB128, groups are emitted
//! most-significant first.
//!
//! ```text
//! 0       -> 00
//! 127     -> 7F
//! 128     -> 81 00
//! 16384   -> 81 80 00
//! ```

use crate::error::{TlvError, TlvResult};

/// Continuation flag (high bit of every non-final byte)
pub const CONTINUATION_BIT: u8 = 0x80;

/// Maximum bytes for a 64-bit varint (ceil(64/7) = 10)
pub const MAX_VARINT_BYTES: usize = 10;

/// Number of bytes `write_varint` emits for `value`
#[inline]
pub fn varint_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (u64::BITS - value.leading_zeros()).div_ceil(7) as usize
    }
}

/// Append the minimal varint form of `value` to `out`
pub fn write_varint(value: u64, out: &mut Vec<u8>) {
    let len = varint_len(value);
    for group in (0..len).rev() {
        let mut byte = ((value >> (group * 7)) & 0x7F) as u8;
        if group != 0 {
            byte |= CONTINUATION_BIT;
        }
        out.push(byte);
    }
}

/// Encode a signed value as a varint
///
/// The format has no signed form, so negative input is rejected.
///
/// # Errors
/// `TlvError::NegativeVarint` if `value < 0`
pub fn encode_varint(value: i64) -> TlvResult<Vec<u8>> {
    let value = u64::try_from(value).map_err(|_| TlvError::NegativeVarint(value))?;
    let mut out = Vec::with_capacity(varint_len(value));
    write_varint(value, &mut out);
    Ok(out)
}

/// Decode a varint from the start of `buf`
///
/// Returns `(value, bytes_consumed)`. Bytes after the terminating byte are
/// left untouched.
///
/// # Errors
/// * `TlvError::TruncatedVarint` - buffer ended with the continuation bit set
/// * `TlvError::VarintOverflow` - value needs more than 64 bits
pub fn decode_varint(buf: &[u8]) -> TlvResult<(u64, usize)> {
    let mut result = 0u64;

    for (i, &byte) in buf.iter().enumerate() {
        // Another 7-bit shift would push set bits off the top
        if result >> (u64::BITS - 7) != 0 {
            return Err(TlvError::VarintOverflow);
        }
        result = (result << 7) | u64::from(byte & 0x7F);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(TlvError::TruncatedVarint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_is_single_byte() {
        assert_eq!(encode_varint(0).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(encode_varint(-1), Err(TlvError::NegativeVarint(-1)));
        assert_eq!(
            encode_varint(i64::MIN),
            Err(TlvError::NegativeVarint(i64::MIN))
        );
    }

    #[test]
    fn test_sizes() {
        let cases = [
            (0i64, 1usize),
            (100, 1),
            (1000, 2),
            (20000, 3),
            (10000000, 4),
        ];

        for (n, size) in cases {
            let bytes = encode_varint(n).unwrap();
            assert_eq!(bytes.len(), size, "size of {}", n);
            let (decoded, consumed) = decode_varint(&bytes).unwrap();
            assert_eq!(decoded, n as u64);
            assert_eq!(consumed, size);
        }
    }

    #[test]
    fn test_group_boundaries() {
        let cases = [
            (127u64, 1usize),
            (128, 2),
            (16383, 2),
            (16384, 3),
            ((1 << 21) - 1, 3),
            (1 << 21, 4),
            ((1 << 28) - 1, 4),
            (1 << 28, 5),
            (u64::MAX, MAX_VARINT_BYTES),
        ];

        for (n, size) in cases {
            let mut out = Vec::new();
            write_varint(n, &mut out);
            assert_eq!(out.len(), size, "size of {}", n);
            assert_eq!(varint_len(n), size);
            assert_eq!(decode_varint(&out).unwrap(), (n, size));
        }
    }

    #[test]
    fn test_big_endian_group_order() {
        assert_eq!(encode_varint(128).unwrap(), vec![0x81, 0x00]);
        assert_eq!(encode_varint(300).unwrap(), vec![0x82, 0x2C]);
        assert_eq!(encode_varint(16384).unwrap(), vec![0x81, 0x80, 0x00]);
    }

    #[test]
    fn test_decode_stops_at_terminator() {
        let (value, consumed) = decode_varint(&[0x81, 0x00, 0xFF, 0xFF]).unwrap();
        assert_eq!(value, 128);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_truncated() {
        assert_eq!(decode_varint(&[]), Err(TlvError::TruncatedVarint));
        assert_eq!(decode_varint(&[0x80]), Err(TlvError::TruncatedVarint));
        assert_eq!(
            decode_varint(&[0xFF, 0xFF, 0xFF]),
            Err(TlvError::TruncatedVarint)
        );
    }

    #[test]
    fn test_u64_max_and_overflow() {
        let mut max = vec![0x81];
        max.extend_from_slice(&[0xFF; 8]);
        max.push(0x7F);
        assert_eq!(decode_varint(&max).unwrap(), (u64::MAX, 10));

        let mut over = vec![0x82];
        over.extend_from_slice(&[0xFF; 8]);
        over.push(0x7F);
        assert_eq!(decode_varint(&over), Err(TlvError::VarintOverflow));
    }
}
