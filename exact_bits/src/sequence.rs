//! Fixed-length bit vector.
//!
//! # Examples
//!
//! ```rust
//! use exact_bits::BitSequence;
//!
//! let mut bits = BitSequence::new(10);
//! bits.set(0, true).unwrap();
//! bits.set(9, true).unwrap();
//!
//! assert_eq!(bits.get(9), Some(true));
//! assert_eq!(bits.get(10), None);
//! assert_eq!(bits.to_exact_bytes(10), vec![0b0000_0001, 0b0000_0010]);
//! ```

use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{BitsError, codec};

const WORD_BITS: usize = u64::BITS as usize;

/// An ordered run of bits with a declared length.
///
/// The length is fixed at construction; setting a bit outside of it is an
/// error rather than a resize. Bits at positions `>= len()` are always zero
/// in the backing words.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    words: Vec<u64>,
    len: usize,
}

type Result<T> = core::result::Result<T, BitsError>;

impl BitSequence {
    /// Creates an all-zero sequence of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    pub fn from_bools(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Builds a sequence from LSB-first bytes. `bytes` must not carry set
    /// bits at or beyond `len`.
    pub(crate) fn from_le_bytes(bytes: &[u8], len: usize) -> Self {
        let mut seq = Self::new(len);
        debug_assert!(bytes.len() <= seq.words.len() * 8);

        #[cfg(target_endian = "little")]
        {
            let view = bytemuck::cast_slice_mut::<u64, u8>(seq.words.as_mut_slice());
            view[..bytes.len()].copy_from_slice(bytes);
        }

        #[cfg(target_endian = "big")]
        for (word, chunk) in seq.words.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }

        seq
    }

    /// The backing words as LSB-first bytes, `8 * ceil(len / 64)` long.
    #[cfg(target_endian = "little")]
    pub(crate) fn le_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(bytemuck::cast_slice::<u64, u8>(self.words.as_slice()))
    }

    #[cfg(target_endian = "big")]
    pub(crate) fn le_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.words.iter().flat_map(|w| w.to_le_bytes()).collect())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let word = self.words[index / WORD_BITS];
        Some((word >> (index % WORD_BITS)) & 1 == 1)
    }

    pub fn set(&mut self, index: usize, bit: bool) -> Result<()> {
        if index >= self.len {
            return Err(BitsError::IndexOutOfBounds(index, self.len));
        }
        let word = &mut self.words[index / WORD_BITS];
        let flag = 1u64 << (index % WORD_BITS);
        if bit {
            *word |= flag;
        } else {
            *word &= !flag;
        }
        Ok(())
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Index of the highest set bit plus one; `0` when no bit is set.
    pub fn highest_set_len(&self) -> usize {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| (i + 1) * WORD_BITS - self.words[i].leading_zeros() as usize)
    }

    /// Copy of this sequence with logical length `len`, truncated or
    /// extended with zeros.
    pub fn resized(&self, len: usize) -> Self {
        let mut out = Self::new(len);
        let shared = out.words.len().min(self.words.len());
        out.words[..shared].copy_from_slice(&self.words[..shared]);
        out.clear_tail();
        out
    }

    fn clear_tail(&mut self) {
        let rem = self.len % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            seq: self,
            index: 0,
        }
    }

    /// Encodes the first `number_of_bits` bits; see [`codec::encode`].
    pub fn to_exact_bytes(&self, number_of_bits: usize) -> Vec<u8> {
        codec::encode(self, number_of_bits)
    }

    /// Decodes `number_of_bits` bits; see [`codec::decode`].
    pub fn from_exact_bytes(bytes: &[u8], number_of_bits: usize) -> Result<Self> {
        codec::decode(bytes, number_of_bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        for bit in iter {
            if len % WORD_BITS == 0 {
                words.push(0);
            }
            if bit {
                if let Some(last) = words.last_mut() {
                    *last |= 1u64 << (len % WORD_BITS);
                }
            }
            len += 1;
        }
        Self { words, len }
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence[{}; ", self.len)?;
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

pub struct Iter<'a> {
    seq: &'a BitSequence,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.seq.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
