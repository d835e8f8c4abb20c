//! Exact-length conversion between [`BitSequence`]s and bytes.
//!
//! The byte layout is:
//!
//! - bit `i` of the sequence lives in byte `i / 8`, at position `i % 8`
//!   counted from the least significant bit;
//! - a run of `n` bits always occupies exactly [`byte_count(n)`] bytes;
//! - bits at or beyond `n` in the final byte are zero when encoding and
//!   ignored when decoding.
//!
//! ```rust
//! use exact_bits::{BitSequence, codec};
//!
//! // Bits 10 and 11 are set but only the first 10 bits are encoded.
//! let mut bits = BitSequence::new(12);
//! for i in [0, 9, 10, 11] {
//!     bits.set(i, true).unwrap();
//! }
//! let bytes = codec::encode(&bits, 10);
//! assert_eq!(bytes, vec![0b0000_0001, 0b0000_0010]);
//!
//! let decoded = codec::decode(&bytes, 10).unwrap();
//! assert_eq!(decoded, bits.resized(10));
//! ```
//!
//! [`byte_count(n)`]: crate::byte_count

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::byte_count::{byte_count, to_bit_count};
use crate::mask::trailing_byte_mask;
use crate::{BitSequence, BitsError};

/// Encodes the first `number_of_bits` bits of `bits` into exactly
/// `byte_count(number_of_bits)` bytes.
///
/// Missing bits, when `number_of_bits` reaches past the highest set bit of
/// `bits`, are encoded as zero. Set bits of `bits` at or beyond
/// `number_of_bits` never reach the output.
pub fn encode(bits: &BitSequence, number_of_bits: usize) -> Vec<u8> {
    let bytes_needed = byte_count(number_of_bits);
    let extent = bits.highest_set_len();
    let natural = byte_count(extent);

    let mut out = vec![0u8; bytes_needed];
    let copied = bytes_needed.min(natural);
    out[..copied].copy_from_slice(&bits.le_bytes()[..copied]);

    if natural < bytes_needed {
        trace!(
            "padding {} significant bytes with {} zero bytes",
            natural,
            bytes_needed - natural
        );
    }

    if number_of_bits < extent {
        if let Some(last) = out.last_mut() {
            *last &= trailing_byte_mask(number_of_bits);
        }
        trace!(
            "truncated {} bits set beyond bit {}",
            bits.count_ones() - count_ones(&out),
            number_of_bits
        );
    }

    out
}

/// [`encode`] for bit counts held in a signed integer.
pub fn checked_encode(bits: &BitSequence, number_of_bits: i64) -> Result<Vec<u8>, BitsError> {
    to_bit_count(number_of_bits).map(|n| encode(bits, n))
}

/// Decodes `number_of_bits` bits from `bytes`.
///
/// `bytes` must be exactly `byte_count(number_of_bits)` long. Any bits set
/// at or beyond `number_of_bits` in the final byte are read as zero.
pub fn decode(bytes: &[u8], number_of_bits: usize) -> Result<BitSequence, BitsError> {
    let expected = byte_count(number_of_bits);
    if bytes.len() != expected {
        return Err(BitsError::LengthMismatch {
            expected,
            found: bytes.len(),
        });
    }

    let Some((&last, body)) = bytes.split_last() else {
        return Ok(BitSequence::new(number_of_bits));
    };

    let masked = last & trailing_byte_mask(number_of_bits);
    if masked != last {
        trace!("ignoring stray bits {:#010b} past bit {}", last & !masked, number_of_bits);
    }

    let mut buf = Vec::with_capacity(bytes.len());
    buf.extend_from_slice(body);
    buf.push(masked);
    Ok(BitSequence::from_le_bytes(&buf, number_of_bits))
}

/// [`decode`] for bit counts held in a signed integer.
pub fn checked_decode(bytes: &[u8], number_of_bits: i64) -> Result<BitSequence, BitsError> {
    to_bit_count(number_of_bits).and_then(|n| decode(bytes, n))
}

fn count_ones(bytes: &[u8]) -> usize {
    bytes.iter().map(|b| b.count_ones() as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_at(len: usize, set: &[usize]) -> BitSequence {
        let mut seq = BitSequence::new(len);
        for &i in set {
            seq.set(i, true).unwrap();
        }
        seq
    }

    #[test]
    fn zero_bits_is_empty() {
        let seq = bits_at(16, &[3, 12]);
        assert!(encode(&seq, 0).is_empty());
        assert_eq!(decode(&[], 0), Ok(BitSequence::new(0)));
    }

    #[test]
    fn lsb_first_layout() {
        let seq = bits_at(16, &[0, 7, 8, 15]);
        assert_eq!(encode(&seq, 16), vec![0b1000_0001, 0b1000_0001]);
    }

    #[test]
    fn truncation_clears_trailing_bits() {
        let seq = bits_at(12, &[0, 9, 10, 11]);
        let bytes = encode(&seq, 10);
        assert_eq!(bytes.len(), 2);
        assert_eq!(bytes, vec![0b0000_0001, 0b0000_0010]);
    }

    #[test]
    fn truncation_drops_whole_bytes() {
        let seq = bits_at(64, &[1, 20, 63]);
        assert_eq!(encode(&seq, 8), vec![0b0000_0010]);
    }

    #[test]
    fn padding_with_zero_bytes() {
        // Only bit 0 is set, so the natural extent is one byte.
        let seq = bits_at(4, &[0]);
        assert_eq!(encode(&seq, 40), vec![1, 0, 0, 0, 0]);

        let empty = BitSequence::new(0);
        assert_eq!(encode(&empty, 17), vec![0, 0, 0]);
    }

    #[test]
    fn byte_aligned_lengths_are_not_masked() {
        let seq = bits_at(8, &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(encode(&seq, 8), vec![0xFF]);
    }

    #[test]
    fn decode_ignores_stray_bits() {
        let decoded = decode(&[0xFF, 0xFF], 10).unwrap();
        assert_eq!(decoded.len(), 10);
        assert_eq!(decoded.count_ones(), 10);
        assert_eq!(encode(&decoded, 10), vec![0xFF, 0b11]);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode(&[0, 0, 0], 16),
            Err(BitsError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            decode(&[0], 9),
            Err(BitsError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn signed_entry_points_reject_negative_counts() {
        let seq = bits_at(8, &[1]);
        assert_eq!(checked_encode(&seq, -3), Err(BitsError::NegativeBitCount(-3)));
        assert_eq!(checked_encode(&seq, 3), Ok(vec![0b10]));
        assert_eq!(checked_decode(&[0b10], -1), Err(BitsError::NegativeBitCount(-1)));
        assert_eq!(checked_decode(&[0b10], 2), Ok(bits_at(2, &[1])));
    }

    #[test]
    fn roundtrip_across_word_boundary() {
        let seq = bits_at(130, &[0, 63, 64, 65, 127, 128, 129]);
        let bytes = encode(&seq, 130);
        assert_eq!(bytes.len(), 17);
        assert_eq!(decode(&bytes, 130).unwrap(), seq);
    }
}
