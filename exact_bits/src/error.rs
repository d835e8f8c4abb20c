#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    #[cfg_attr(
        feature = "std",
        error("Mask width must be in the range 0..=32, got {0}")
    )]
    InvalidMaskWidth(i64),

    #[cfg_attr(feature = "std", error("Bit count must not be negative, got {0}"))]
    NegativeBitCount(i64),

    #[cfg_attr(
        feature = "std",
        error("Bit count {0} does not fit in the address space")
    )]
    BitCountOverflow(i64),

    #[cfg_attr(feature = "std", error("Bit index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Expected exactly {expected} bytes, found {found}")
    )]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsError::InvalidMaskWidth(w) => {
                write!(f, "Mask width must be in the range 0..=32, got {}", w)
            }
            BitsError::NegativeBitCount(n) => {
                write!(f, "Bit count must not be negative, got {}", n)
            }
            BitsError::BitCountOverflow(n) => {
                write!(f, "Bit count {} does not fit in the address space", n)
            }
            BitsError::IndexOutOfBounds(i, l) => {
                write!(f, "Bit index {} is out of bounds for length {}", i, l)
            }
            BitsError::LengthMismatch { expected, found } => {
                write!(f, "Expected exactly {} bytes, found {}", expected, found)
            }
        }
    }
}
