use exact_bits::{BitSequence, BitsError, bit_ops, bit_width, byte_count, codec};

fn main() {
    println!("=== Exact Bits Examples ===\n");

    // Example 1: Sizing palette indices
    example_sizing();

    // Example 2: Packing indices into an exact byte run
    let _ = example_palette_indices();

    // Example 3: Trailing bits never leak into the output
    let _ = example_truncation();
}

fn example_sizing() {
    println!("Example 1: How many bits does a palette of 300 entries need?");

    let width = bit_width(299);
    println!("  Largest index 299 needs {} bits", width);
    println!("  4096 such indices need {} bytes", byte_count(4096 * width as usize));
    println!();
}

fn example_palette_indices() -> Result<(), BitsError> {
    println!("Example 2: Packing 5-bit palette indices");

    let indices = [15u32, 8, 23, 31, 0, 4];
    let width = 5;
    let total_bits = indices.len() * width as usize;

    let mut buf = vec![0u8; byte_count(total_bits)];
    for (i, &index) in indices.iter().enumerate() {
        bit_ops::set_bits(&mut buf, i * width as usize, width, index)?;
    }
    println!("  {} indices -> {} bytes: {:02x?}", indices.len(), buf.len(), buf);

    let bits = codec::decode(&buf, total_bits)?;
    println!("  As bits: {:?}", bits);
    println!();

    Ok(())
}

fn example_truncation() -> Result<(), BitsError> {
    println!("Example 3: Encoding 10 bits of a 12-bit sequence");

    let mut bits = BitSequence::new(12);
    for i in [0, 9, 10, 11] {
        bits.set(i, true)?;
    }

    let bytes = bits.to_exact_bytes(10);
    println!("  Encoded: {:08b} {:08b}", bytes[0], bytes[1]);
    println!("  Bits 10 and 11 cleared: {}", bytes[1] == 0b10);
    println!();

    Ok(())
}
