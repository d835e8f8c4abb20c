//! Packing of integer arrays into 64-bit words.
//!
//! Two word layouts exist. In both, values are placed least significant bit
//! first and each word's bit 0 is its least significant bit.
//!
//! - [`WordLayout::Padded`]: each word holds `64 / magnitude` whole values
//!   starting at bit 0; leftover high bits of a word stay zero.
//! - [`WordLayout::Unpadded`]: values are laid end to end over the word
//!   stream, so a value may straddle two words.
//!
//! ```rust
//! use packed_uints::compact::{CompactArrayCodec, WordLayout};
//!
//! let codec = CompactArrayCodec::for_data_version(2586);
//! assert_eq!(codec.layout(), WordLayout::Padded);
//!
//! // 5 bits per value: 12 values per word, 4 bits of padding.
//! let values: Vec<u32> = (0..13).collect();
//! let words = codec.encode(&values, 5).unwrap();
//! assert_eq!(words.len(), 2);
//! assert_eq!(codec.decode_exact(&words, 5, 13).unwrap(), values);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use exact_bits::{MAX_MASK_WIDTH, bit_ops};
use log::trace;

use crate::PackedUIntError;

type Result<T> = core::result::Result<T, PackedUIntError>;

const WORD_BITS: usize = u64::BITS as usize;

/// First data version whose arrays keep values from straddling words.
pub const PADDED_SINCE_DATA_VERSION: i32 = 2527;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordLayout {
    Padded,
    Unpadded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactArrayCodec {
    layout: WordLayout,
}

fn validate_magnitude(magnitude: u32) -> Result<usize> {
    if (1..=MAX_MASK_WIDTH).contains(&magnitude) {
        Ok(magnitude as usize)
    } else {
        Err(PackedUIntError::InvalidMagnitude {
            min: 1,
            found: magnitude,
        })
    }
}

impl CompactArrayCodec {
    pub const fn new(layout: WordLayout) -> Self {
        Self { layout }
    }

    /// Picks the layout used by data written at `data_version`.
    pub const fn for_data_version(data_version: i32) -> Self {
        if data_version >= PADDED_SINCE_DATA_VERSION {
            Self::new(WordLayout::Padded)
        } else {
            Self::new(WordLayout::Unpadded)
        }
    }

    pub const fn layout(&self) -> WordLayout {
        self.layout
    }

    /// Number of words needed to hold `count` values.
    pub fn words_needed(&self, count: usize, magnitude: u32) -> Result<usize> {
        let m = validate_magnitude(magnitude)?;
        let overflow = PackedUIntError::SizeOverflow {
            size: count,
            magnitude,
        };
        match self.layout {
            WordLayout::Padded => Ok(count.div_ceil(WORD_BITS / m)),
            WordLayout::Unpadded => count
                .checked_mul(m)
                .map(|bits| bits.div_ceil(WORD_BITS))
                .ok_or(overflow),
        }
    }

    /// Number of whole values that `words` words can hold.
    pub fn capacity(&self, words: usize, magnitude: u32) -> Result<usize> {
        let m = validate_magnitude(magnitude)?;
        let capacity = match self.layout {
            WordLayout::Padded => words.checked_mul(WORD_BITS / m),
            WordLayout::Unpadded => words.checked_mul(WORD_BITS).map(|bits| bits / m),
        };
        capacity.ok_or(PackedUIntError::SizeOverflow {
            size: words,
            magnitude,
        })
    }

    /// Bit position of value `index` within the word stream.
    #[inline]
    fn bit_position(&self, index: usize, m: usize) -> usize {
        match self.layout {
            WordLayout::Padded => {
                let per_word = WORD_BITS / m;
                (index / per_word) * WORD_BITS + (index % per_word) * m
            }
            WordLayout::Unpadded => index * m,
        }
    }

    /// Packs `values` into words, `magnitude` bits per value. Bits of a
    /// value above `magnitude` are dropped.
    pub fn encode(&self, values: &[u32], magnitude: u32) -> Result<Vec<u64>> {
        let m = validate_magnitude(magnitude)?;
        let word_count = self.words_needed(values.len(), magnitude)?;

        let mut stream = vec![0u8; word_count * 8];
        for (i, &value) in values.iter().enumerate() {
            bit_ops::set_bits(&mut stream, self.bit_position(i, m), magnitude, value)?;
        }

        trace!(
            "packed {} values of {} bits into {} {:?} words",
            values.len(),
            magnitude,
            word_count,
            self.layout
        );

        Ok(stream
            .chunks_exact(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect())
    }

    /// Unpacks as many values as `words` hold. The result may be longer
    /// than the array that was encoded.
    pub fn decode(&self, words: &[u64], magnitude: u32) -> Result<Vec<u32>> {
        let count = self.capacity(words.len(), magnitude)?;
        self.decode_exact(words, magnitude, count)
    }

    /// Unpacks the first `count` values from `words`.
    pub fn decode_exact(&self, words: &[u64], magnitude: u32, count: usize) -> Result<Vec<u32>> {
        let m = validate_magnitude(magnitude)?;
        let available = self.capacity(words.len(), magnitude)?;
        if count > available {
            return Err(PackedUIntError::InsufficientWords {
                requested: count,
                available,
            });
        }

        let stream: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        (0..count)
            .map(|i| {
                bit_ops::get_bits(&stream, self.bit_position(i, m), magnitude)
                    .map_err(PackedUIntError::from)
            })
            .collect()
    }
}
