//! # packed_uints
//!
//! A `no_std` compatible library for packing small unsigned integers,
//! built on the exact-length bit layout of `exact_bits`.
//!
//! ```rust
//! use packed_uints::PackedUIntArray;
//!
//! // Palette indices 0..=299 need 9 bits each
//! let indices: Vec<u32> = (0..4096).map(|i| i % 300).collect();
//! let packed = PackedUIntArray::from_values(&indices).expect("Failed to pack indices");
//!
//! assert_eq!(packed.magnitude(), 9);
//! assert_eq!(packed.get(301), Ok(1));
//!
//! // 4096 values x 9 bits = 4608 bytes instead of 16384
//! assert_eq!(packed.contents().len(), 4608);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::PackedUIntError;

pub mod array;
pub mod compact;

pub use array::PackedUIntArray;
pub use compact::{CompactArrayCodec, WordLayout};
