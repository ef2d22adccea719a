//! Zero-copy reinterpretation of scalar values as bytes.
//!
//! [`reinterpret`] and [`reinterpret_mut`] return views that alias the
//! value's own storage: nothing is copied, and mutating bytes through a
//! [`ByteViewMut`] mutates the value. The view borrows the value, which
//! keeps its location fixed for as long as the view exists.

use crate::view::{ByteView, ByteViewMut};

/// Fixed-layout, reference-free value that may be viewed as raw bytes.
///
/// Blanket-implemented for every [`bytemuck::Pod`] type: the primitive
/// integers and floats, arrays of them, and `#[repr(C)]` structs that
/// derive `Pod`. Types with padding, pointers, references or
/// variable-length fields do not qualify and are rejected at compile time.
pub trait Scalar: bytemuck::Pod {}

impl<T: bytemuck::Pod> Scalar for T {}

/// View the in-memory bytes of `value` without copying.
///
/// The view is exactly `size_of::<T>()` bytes long and uses the target's
/// native byte order.
pub fn reinterpret<T: Scalar>(value: &T) -> ByteView<'_> {
    ByteView::new(bytemuck::bytes_of(value))
}

/// Mutably view the in-memory bytes of `value` without copying.
///
/// Writes through the returned view rewrite `value` in place.
pub fn reinterpret_mut<T: Scalar>(value: &mut T) -> ByteViewMut<'_> {
    ByteViewMut::new(bytemuck::bytes_of_mut(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
    #[repr(C)]
    struct Pair {
        a: u32,
        b: f32,
    }

    #[test]
    fn view_len_matches_type_size() {
        assert_eq!(reinterpret(&0u8).len(), 1);
        assert_eq!(reinterpret(&0u16).len(), 2);
        assert_eq!(reinterpret(&0.0f64).len(), 8);
        assert_eq!(reinterpret(&[0u32; 3]).len(), 12);
    }

    #[test]
    fn bytes_follow_native_order() {
        let value = 0x1234_5678u32;
        assert_eq!(reinterpret(&value).as_bytes(), &value.to_ne_bytes());
    }

    #[test]
    fn view_aliases_value_storage() {
        let value = 42u64;
        let view = reinterpret(&value);
        assert_eq!(view.as_ptr(), (&value as *const u64).cast::<u8>());
    }

    #[test]
    fn mutation_through_view_changes_value() {
        let mut value = 0i32;
        reinterpret_mut(&mut value).as_bytes_mut().fill(0xFF);
        assert_eq!(value, -1);
    }

    #[test]
    fn struct_round_trip() {
        let pair = Pair { a: 7, b: 1.5 };
        let back: Pair = reinterpret(&pair).read_as().unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn extremes_round_trip() {
        for value in [0u64, u64::MAX] {
            assert_eq!(reinterpret(&value).read_as::<u64>().unwrap(), value);
        }
        let nan = f32::from_bits(0x7FC0_0001);
        let back: f32 = reinterpret(&nan).read_as().unwrap();
        assert_eq!(back.to_bits(), nan.to_bits());
    }
}
