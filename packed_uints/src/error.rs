use exact_bits::BitsError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackedUIntError {
    #[cfg_attr(
        feature = "std",
        error("Magnitude must be in the range {min}..=32, got {found}")
    )]
    InvalidMagnitude { min: u32, found: u32 },

    #[cfg_attr(feature = "std", error("Value {0} exceeds the maximum of {1}"))]
    ValueOverflow(u32, u32),

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("{size} values of {magnitude} bits overflow a byte array")
    )]
    SizeOverflow { size: usize, magnitude: u32 },

    #[cfg_attr(
        feature = "std",
        error("{expected} content bytes expected, found {found}")
    )]
    ContentLength { expected: usize, found: usize },

    #[cfg_attr(
        feature = "std",
        error("{requested} values requested, but the words only hold {available}")
    )]
    InsufficientWords { requested: usize, available: usize },

    #[cfg_attr(feature = "std", error("bit codec error: {0}"))]
    Bits(#[cfg_attr(feature = "std", from)] BitsError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedUIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedUIntError::InvalidMagnitude { min, found } => {
                write!(f, "Magnitude must be in the range {}..=32, got {}", min, found)
            }
            PackedUIntError::ValueOverflow(v, max) => {
                write!(f, "Value {} exceeds the maximum of {}", v, max)
            }
            PackedUIntError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            PackedUIntError::SizeOverflow { size, magnitude } => {
                write!(f, "{} values of {} bits overflow a byte array", size, magnitude)
            }
            PackedUIntError::ContentLength { expected, found } => {
                write!(f, "{} content bytes expected, found {}", expected, found)
            }
            PackedUIntError::InsufficientWords {
                requested,
                available,
            } => write!(
                f,
                "{} values requested, but the words only hold {}",
                requested, available
            ),
            PackedUIntError::Bits(e) => write!(f, "bit codec error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<BitsError> for PackedUIntError {
    fn from(err: BitsError) -> Self {
        PackedUIntError::Bits(err)
    }
}
