use crate::BitsError;

/// Fewest whole bytes needed to hold `number_of_bits` bits.
///
/// ```
/// use exact_bits::byte_count;
///
/// assert_eq!(byte_count(0), 0);
/// assert_eq!(byte_count(8), 1);
/// assert_eq!(byte_count(9), 2);
/// ```
#[inline]
pub const fn byte_count(number_of_bits: usize) -> usize {
    number_of_bits.div_ceil(8)
}

/// [`byte_count`] for bit counts held in a signed integer. Negative counts
/// are rejected.
pub fn checked_byte_count(number_of_bits: i64) -> Result<usize, BitsError> {
    to_bit_count(number_of_bits).map(byte_count)
}

pub(crate) fn to_bit_count(number_of_bits: i64) -> Result<usize, BitsError> {
    if number_of_bits < 0 {
        return Err(BitsError::NegativeBitCount(number_of_bits));
    }
    usize::try_from(number_of_bits).map_err(|_| BitsError::BitCountOverflow(number_of_bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_octets() {
        assert_eq!(byte_count(0), 0);
        assert_eq!(byte_count(1), 1);
        assert_eq!(byte_count(7), 1);
        assert_eq!(byte_count(8), 1);
        assert_eq!(byte_count(9), 2);
        assert_eq!(byte_count(16), 2);
        assert_eq!(byte_count(17), 3);
    }

    #[test]
    fn no_overflow_at_usize_max() {
        assert_eq!(byte_count(usize::MAX), usize::MAX / 8 + 1);
    }

    #[test]
    fn signed_counts() {
        assert_eq!(checked_byte_count(0), Ok(0));
        assert_eq!(checked_byte_count(10), Ok(2));
        assert_eq!(checked_byte_count(-1), Err(BitsError::NegativeBitCount(-1)));
        assert_eq!(
            checked_byte_count(i64::MIN),
            Err(BitsError::NegativeBitCount(i64::MIN))
        );
    }
}
