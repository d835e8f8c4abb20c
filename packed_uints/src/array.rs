//! Fixed-size arrays of unsigned integers packed into a minimal byte run.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use packed_uints::PackedUIntArray;
//!
//! let mut array = PackedUIntArray::new(4, 7).expect("failed to create array");
//! array.set(0, 100).unwrap();
//! array.set(3, 50).unwrap();
//!
//! assert_eq!(array.get(0), Ok(100));
//! assert_eq!(array.get(1), Ok(0));
//! assert_eq!(array.max(), 127);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use packed_uints::PackedUIntArray;
//!
//! let array = PackedUIntArray::from_values(&[3, 1, 4, 1, 5]).unwrap();
//! assert_eq!(array.magnitude(), 3);
//!
//! // 5 values x 3 bits = 15 bits = 2 bytes
//! let (size, magnitude, contents) = array.clone().into_parts();
//! assert_eq!(contents.len(), 2);
//!
//! let restored = PackedUIntArray::from_parts(size, magnitude, contents).unwrap();
//! assert_eq!(restored, array);
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use exact_bits::{BitSequence, MAX_MASK_WIDTH, bit_ops, bit_width_u32, byte_count, codec, full_mask};
use log::debug;

use crate::PackedUIntError;

type Result<T> = core::result::Result<T, PackedUIntError>;

/// Number of content bytes for `size` values of `magnitude` bits each.
pub fn bytes_needed(size: usize, magnitude: u32) -> Result<usize> {
    validate_magnitude(magnitude)?;
    size.checked_mul(magnitude as usize)
        .map(byte_count)
        .ok_or(PackedUIntError::SizeOverflow { size, magnitude })
}

#[inline(always)]
fn validate_magnitude(magnitude: u32) -> Result<()> {
    if magnitude <= MAX_MASK_WIDTH {
        Ok(())
    } else {
        Err(PackedUIntError::InvalidMagnitude {
            min: 0,
            found: magnitude,
        })
    }
}

/// An array of `size` unsigned integers, each stored in `magnitude` bits.
///
/// Value `i` occupies bits `[i * magnitude, (i + 1) * magnitude)` of the
/// contents, least significant bit first. The contents are always exactly
/// `byte_count(size * magnitude)` bytes and any bits past the last value
/// are zero, so two arrays holding the same values compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedUIntArray {
    size: usize,
    magnitude: u32,
    contents: Vec<u8>,
}

impl PackedUIntArray {
    /// Creates an array of `size` zeros, each `magnitude` bits wide.
    pub fn new(size: usize, magnitude: u32) -> Result<Self> {
        let contents = vec![0u8; bytes_needed(size, magnitude)?];
        Ok(Self {
            size,
            magnitude,
            contents,
        })
    }

    /// Packs `values` using the fewest bits that fit the largest of them.
    pub fn from_values(values: &[u32]) -> Result<Self> {
        let widest = values.iter().copied().max().unwrap_or(0);
        let mut array = Self::new(values.len(), bit_width_u32(widest))?;
        for (i, &value) in values.iter().enumerate() {
            array.set(i, value)?;
        }
        Ok(array)
    }

    /// Rebuilds an array from its serialized parts.
    ///
    /// Bits in the last byte that lie past the final value are cleared.
    pub fn from_parts(size: usize, magnitude: u32, mut contents: Vec<u8>) -> Result<Self> {
        let expected = bytes_needed(size, magnitude)?;
        if contents.len() != expected {
            return Err(PackedUIntError::ContentLength {
                expected,
                found: contents.len(),
            });
        }

        let total_bits = size * magnitude as usize;
        if let Some(last) = contents.last_mut() {
            let rem = (total_bits % 8) as u32;
            if rem != 0 {
                let keep = full_mask(rem)? as u8;
                if *last & !keep != 0 {
                    debug!(
                        "clearing stray bits {:#010b} past bit {} of packed contents",
                        *last & !keep,
                        total_bits
                    );
                }
                *last &= keep;
            }
        }

        Ok(Self {
            size,
            magnitude,
            contents,
        })
    }

    /// Views the contents as a run of `size * magnitude` bits.
    pub fn to_bits(&self) -> Result<BitSequence> {
        Ok(codec::decode(&self.contents, self.bit_len())?)
    }

    /// Packs `size` values of `magnitude` bits read from `bits`.
    pub fn from_bits(bits: &BitSequence, size: usize, magnitude: u32) -> Result<Self> {
        let total_bits = bytes_needed(size, magnitude).map(|_| size * magnitude as usize)?;
        Self::from_parts(size, magnitude, codec::encode(bits, total_bits))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of bits used to store each value.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Largest storable value; `0` for a magnitude of `0`.
    pub fn max(&self) -> u32 {
        // validated on construction
        full_mask(self.magnitude).unwrap_or(u32::MAX)
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_parts(self) -> (usize, u32, Vec<u8>) {
        (self.size, self.magnitude, self.contents)
    }

    fn bit_len(&self) -> usize {
        self.size * self.magnitude as usize
    }

    #[inline]
    const fn bit_offset(&self, index: usize) -> usize {
        index * self.magnitude as usize
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(PackedUIntError::IndexOutOfBounds(index, self.size))
        }
    }

    pub fn get(&self, index: usize) -> Result<u32> {
        self.check_index(index)?;
        Ok(bit_ops::get_bits(
            &self.contents,
            self.bit_offset(index),
            self.magnitude,
        )?)
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_uints::PackedUIntArray;
    ///
    /// let mut array = PackedUIntArray::new(2, 4).expect("failed to create array");
    /// assert_eq!(array.set(1, 15), Ok(0));
    /// assert_eq!(array.set(1, 9), Ok(15));
    /// assert!(array.set(1, 16).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: u32) -> Result<u32> {
        let previous = self.get(index)?;
        let max = self.max();
        if value > max {
            return Err(PackedUIntError::ValueOverflow(value, max));
        }
        let offset = self.bit_offset(index);
        bit_ops::set_bits(&mut self.contents, offset, self.magnitude, value)?;
        Ok(previous)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }
}

impl fmt::Debug for PackedUIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedUIntArray")
            .field("size", &self.size)
            .field("magnitude", &self.magnitude)
            .field("values", &format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for PackedUIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

pub struct Iter<'a> {
    array: &'a PackedUIntArray,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.size() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PackedUIntArray {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
