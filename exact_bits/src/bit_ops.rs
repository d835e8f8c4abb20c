//! LSB-first fixed-width fields inside byte slices.
//!
//! A field of `bit_width` bits starting at `bit_offset` follows the same
//! layout as [`codec`](crate::codec): its bit `j` is stored at stream
//! position `bit_offset + j`. Widths are limited to 32 bits, so a field
//! spans at most five bytes.

use crate::{BitsError, full_mask};

fn field_bytes(
    slice_len: usize,
    bit_offset: usize,
    bit_width: u32,
) -> Result<(usize, usize), BitsError> {
    let available = slice_len.saturating_mul(8);
    let end = bit_offset
        .checked_add(bit_width as usize)
        .filter(|&end| end <= available)
        .ok_or(BitsError::IndexOutOfBounds(bit_offset, available))?;
    Ok((bit_offset / 8, (end - 1) / 8))
}

/// Reads a `bit_width` wide field starting at `bit_offset`.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: u32) -> Result<u32, BitsError> {
    let mask = full_mask(bit_width)?;
    if bit_width == 0 {
        return Ok(0);
    }
    let (first, last) = field_bytes(slice.len(), bit_offset, bit_width)?;

    let mut window = 0u64;
    for (i, &byte) in slice[first..=last].iter().enumerate() {
        window |= (byte as u64) << (i * 8);
    }

    Ok((window >> (bit_offset % 8)) as u32 & mask)
}

/// Writes the low `bit_width` bits of `value` into the field starting at
/// `bit_offset`, leaving neighbouring bits untouched. Higher bits of
/// `value` are dropped.
pub fn set_bits(
    slice: &mut [u8],
    bit_offset: usize,
    bit_width: u32,
    value: u32,
) -> Result<(), BitsError> {
    let mask = full_mask(bit_width)?;
    if bit_width == 0 {
        return Ok(());
    }
    let (first, last) = field_bytes(slice.len(), bit_offset, bit_width)?;

    let shift = bit_offset % 8;
    let field = (mask as u64) << shift;
    let bits = ((value & mask) as u64) << shift;

    for (i, byte) in slice[first..=last].iter_mut().enumerate() {
        let byte_mask = (field >> (i * 8)) as u8;
        *byte = (*byte & !byte_mask) | (bits >> (i * 8)) as u8;
    }

    Ok(())
}
