//! Low-order bitmasks.
//!
//! ```text
//!                  MSB                              LSB
//!                   |--------------------------------|
//! full_mask(0)  == 00000000000000000000000000000000
//! full_mask(1)  == 00000000000000000000000000000001
//! full_mask(10) == 00000000000000000000001111111111
//! full_mask(32) == 11111111111111111111111111111111
//! ```

use crate::BitsError;

/// Largest width accepted by [`full_mask`].
pub const MAX_MASK_WIDTH: u32 = u32::BITS;

/// Creates a 32-bit mask with the lowest `width` bits set.
///
/// The shift is done in 64 bits so that `width == 32` yields all ones
/// instead of overflowing.
///
/// ```
/// use exact_bits::full_mask;
///
/// assert_eq!(full_mask(0), Ok(0));
/// assert_eq!(full_mask(10), Ok(0x3FF));
/// assert_eq!(full_mask(32), Ok(u32::MAX));
/// assert!(full_mask(33).is_err());
/// ```
#[inline]
pub const fn full_mask(width: u32) -> Result<u32, BitsError> {
    if width > MAX_MASK_WIDTH {
        return Err(BitsError::InvalidMaskWidth(width as i64));
    }
    Ok(((1u64 << width) - 1) as u32)
}

/// Same as [`full_mask`], for widths held in a signed integer.
pub fn checked_full_mask(width: i64) -> Result<u32, BitsError> {
    match u32::try_from(width) {
        Ok(w) => full_mask(w),
        Err(_) => Err(BitsError::InvalidMaskWidth(width)),
    }
}

/// Mask over the significant bits of the last byte of a `number_of_bits`
/// long run; the whole byte when the run ends on an octet boundary.
#[inline]
pub(crate) const fn trailing_byte_mask(number_of_bits: usize) -> u8 {
    let rem = (number_of_bits % 8) as u32;
    if rem == 0 {
        return u8::MAX;
    }
    match full_mask(rem) {
        Ok(mask) => mask as u8,
        Err(_) => u8::MAX,
    }
}
