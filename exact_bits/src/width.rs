//! Minimal bit widths of integers.

/// Returns the minimum number of bits needed to represent `value`, i.e. the
/// position of its highest set bit plus one.
///
/// Negative values always report `32`: in two's complement every high-order
/// bit of a negative `i32` is set.
///
/// ```
/// use exact_bits::bit_width;
///
/// assert_eq!(bit_width(0), 0);
/// assert_eq!(bit_width(1), 1);
/// assert_eq!(bit_width(1023), 10);
/// assert_eq!(bit_width(1024), 11);
/// assert_eq!(bit_width(-1), 32);
/// ```
#[inline]
pub const fn bit_width(value: i32) -> u32 {
    bit_width_u32(value as u32)
}

/// Unsigned form of [`bit_width`].
#[inline]
pub const fn bit_width_u32(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(2), 2);
        assert_eq!(bit_width(3), 2);
        assert_eq!(bit_width(4), 3);
        assert_eq!(bit_width(255), 8);
        assert_eq!(bit_width(256), 9);
    }

    #[test]
    fn powers_of_two() {
        for shift in 0..31 {
            assert_eq!(bit_width(1 << shift), shift + 1);
            assert_eq!(bit_width((1 << shift) - 1), shift);
        }
    }

    #[test]
    fn extremes() {
        assert_eq!(bit_width(i32::MAX), 31);
        assert_eq!(bit_width(i32::MIN), 32);
        assert_eq!(bit_width(-1), 32);
        assert_eq!(bit_width_u32(u32::MAX), 32);
        assert_eq!(bit_width_u32(0), 0);
    }
}
