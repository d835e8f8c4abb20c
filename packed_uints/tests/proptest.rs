use exact_bits::{bit_width_u32, byte_count};
use packed_uints::{CompactArrayCodec, PackedUIntArray, WordLayout};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = WordLayout> {
    prop_oneof![Just(WordLayout::Padded), Just(WordLayout::Unpadded)]
}

//
// -----------------------------------------------------------------------------
// PackedUIntArray
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_from_values_roundtrip(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let array = PackedUIntArray::from_values(&values).unwrap();

        prop_assert_eq!(array.size(), values.len());
        prop_assert_eq!(
            array.magnitude(),
            bit_width_u32(values.iter().copied().max().unwrap_or(0))
        );
        prop_assert_eq!(array.iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn prop_contents_are_exact(size in 0usize..2000, magnitude in 0u32..=32) {
        let array = PackedUIntArray::new(size, magnitude).unwrap();
        prop_assert_eq!(array.contents().len(), byte_count(size * magnitude as usize));
    }

    #[test]
    fn prop_set_updates_correctly(
        values in prop::collection::vec(0u32..128, 1..100),
        update_idx in 0usize..100,
        new_val in 0u32..128
    ) {
        let mut array = PackedUIntArray::new(values.len(), 7).unwrap();
        for (i, &v) in values.iter().enumerate() {
            array.set(i, v).unwrap();
        }

        let idx = update_idx % values.len();
        prop_assert_eq!(array.set(idx, new_val).unwrap(), values[idx]);
        prop_assert_eq!(array.get(idx).unwrap(), new_val);

        // Other values unchanged
        for (i, &expected) in values.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(array.get(i).unwrap(), expected);
            }
        }
    }

    #[test]
    fn prop_parts_roundtrip(values in prop::collection::vec(0u32..1024, 0..200)) {
        let array = PackedUIntArray::from_values(&values).unwrap();
        let (size, magnitude, contents) = array.clone().into_parts();

        let restored = PackedUIntArray::from_parts(size, magnitude, contents).unwrap();
        prop_assert_eq!(restored, array);
    }

    #[test]
    fn prop_stray_bits_do_not_affect_equality(
        values in prop::collection::vec(0u32..8, 1..50),
        noise in any::<u8>(),
    ) {
        let array = PackedUIntArray::from_values(&values).unwrap();
        let (size, magnitude, mut contents) = array.clone().into_parts();

        let rem = (size * magnitude as usize) % 8;
        if let Some(last) = contents.last_mut() {
            if rem != 0 {
                *last |= noise & !((1u8 << rem) - 1);
            }
        }

        let noisy = PackedUIntArray::from_parts(size, magnitude, contents).unwrap();
        prop_assert_eq!(noisy, array);
    }
}

//
// -----------------------------------------------------------------------------
// CompactArrayCodec
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_words_roundtrip(
        layout in layout_strategy(),
        magnitude in 1u32..=32,
        raw in prop::collection::vec(any::<u32>(), 0..200),
    ) {
        let codec = CompactArrayCodec::new(layout);
        let mask = if magnitude == 32 { u32::MAX } else { (1u32 << magnitude) - 1 };

        let words = codec.encode(&raw, magnitude).unwrap();
        prop_assert_eq!(words.len(), codec.words_needed(raw.len(), magnitude).unwrap());

        let decoded = codec.decode_exact(&words, magnitude, raw.len()).unwrap();
        let expected: Vec<u32> = raw.iter().map(|v| v & mask).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_decode_covers_encoded(
        layout in layout_strategy(),
        magnitude in 1u32..=32,
        raw in prop::collection::vec(any::<u32>(), 1..100),
    ) {
        let codec = CompactArrayCodec::new(layout);
        let words = codec.encode(&raw, magnitude).unwrap();
        let decoded = codec.decode(&words, magnitude).unwrap();

        prop_assert!(decoded.len() >= raw.len());
        prop_assert!(decoded[raw.len()..].iter().all(|&v| v == 0));
    }

    #[test]
    fn prop_padded_values_stay_in_word(
        magnitude in 1u32..=32,
        count in 0usize..200,
    ) {
        let codec = CompactArrayCodec::new(WordLayout::Padded);
        let values = vec![u32::MAX; count];
        let words = codec.encode(&values, magnitude).unwrap();

        let per_word = 64 / magnitude;
        let used = per_word * magnitude;
        for word in &words {
            if used < 64 {
                prop_assert_eq!(word >> used, 0);
            }
        }
    }
}
