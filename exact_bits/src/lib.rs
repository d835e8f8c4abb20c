//! # exact_bits
//!
//! A `no_std` compatible codec for exact-length bit runs.
//!
//! ```rust
//! use exact_bits::{BitSequence, bit_width, byte_count, full_mask};
//!
//! // 1023 needs 10 bits, which need 2 bytes.
//! let width = bit_width(1023);
//! assert_eq!(width, 10);
//! assert_eq!(byte_count(width as usize), 2);
//! assert_eq!(full_mask(width), Ok(0x3FF));
//!
//! // Encode exactly 10 bits, whatever the sequence holds past them.
//! let bits: BitSequence = (0..16).map(|i| i % 3 == 0).collect();
//! let bytes = bits.to_exact_bytes(10);
//! assert_eq!(bytes.len(), 2);
//!
//! let back = BitSequence::from_exact_bytes(&bytes, 10).unwrap();
//! assert_eq!(back, bits.resized(10));
//! ```
//!
//! ## Layout
//!
//! Bit `i` is stored in byte `i / 8` at position `i % 8`, least significant
//! bit first. `n` bits always take `ceil(n / 8)` bytes and any bits past `n`
//! in the last byte are zero.
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BitsError;

pub mod bit_ops;
mod byte_count;
pub mod codec;
mod mask;
pub mod sequence;
mod width;

pub use byte_count::{byte_count, checked_byte_count};
pub use mask::{MAX_MASK_WIDTH, checked_full_mask, full_mask};
pub use sequence::BitSequence;
pub use width::{bit_width, bit_width_u32};
