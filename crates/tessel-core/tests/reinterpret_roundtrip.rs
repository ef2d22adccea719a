//! Property tests: reinterpreted bytes read back bit-for-bit.

use proptest::prelude::*;
use tessel_core::{reinterpret, reinterpret_mut, ByteView, ViewError};

proptest! {
    #[test]
    fn u64_round_trips(value in any::<u64>()) {
        let back: u64 = reinterpret(&value).read_as().unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn i16_round_trips(value in any::<i16>()) {
        let back: i16 = reinterpret(&value).read_as().unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn f64_round_trips_bitwise(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        let back: f64 = reinterpret(&value).read_as().unwrap();
        prop_assert_eq!(back.to_bits(), bits);
    }

    #[test]
    fn array_round_trips(value in any::<[u16; 6]>()) {
        let back: [u16; 6] = reinterpret(&value).read_as().unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn writes_through_mut_view_are_visible(value in any::<u32>(), patch in any::<[u8; 4]>()) {
        let mut target = value;
        reinterpret_mut(&mut target).as_bytes_mut().copy_from_slice(&patch);
        prop_assert_eq!(target, u32::from_ne_bytes(patch));
    }

    #[test]
    fn wrong_width_is_rejected(bytes in proptest::collection::vec(any::<u8>(), 0..16)) {
        prop_assume!(bytes.len() != 8);
        let view = ByteView::from(&bytes);
        prop_assert_eq!(
            view.read_as::<u64>(),
            Err(ViewError::SizeMismatch { expected: 8, actual: bytes.len() })
        );
    }
}

#[test]
fn zero_and_all_bits_set() {
    assert_eq!(reinterpret(&0u128).read_as::<u128>().unwrap(), 0);
    assert_eq!(reinterpret(&u128::MAX).read_as::<u128>().unwrap(), u128::MAX);
    assert_eq!(reinterpret(&i8::MIN).read_as::<i8>().unwrap(), i8::MIN);
}
