use crate::U128;
use core::cmp::Ordering;

/// Modular arithmetic over a fixed-width unsigned integer.
///
/// Every operation wraps modulo `2^BITS` and shift amounts are reduced modulo
/// `BITS`. [`U128`] implements it on top of its two words; the native
/// unsigned types implement it so generic code can be checked against them.
pub trait WrappingArith: Copy + Ord {
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
    fn wrapping_mul(self, other: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn wrapping_shl(self, shift: u32) -> Self;
    fn wrapping_shr(self, shift: u32) -> Self;
    fn rotate_left(self, shift: u32) -> Self;
    fn rotate_right(self, shift: u32) -> Self;
    fn leading_zeros(self) -> u32;

    /// Sign of `self - other`: `-1`, `0` or `1`.
    #[inline]
    fn compare(self, other: Self) -> i32 {
        match self.cmp(&other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl WrappingArith for U128 {
    const BITS: u32 = U128::BITS;
    const ZERO: Self = U128::ZERO;
    const ONE: Self = U128::ONE;
    const MAX: Self = U128::MAX;

    #[inline]
    fn wrapping_add(self, other: Self) -> Self {
        U128::wrapping_add(self, other)
    }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self {
        U128::wrapping_sub(self, other)
    }

    #[inline]
    fn wrapping_mul(self, other: Self) -> Self {
        U128::wrapping_mul(self, other)
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        U128::wrapping_neg(self)
    }

    #[inline]
    fn wrapping_shl(self, shift: u32) -> Self {
        U128::wrapping_shl(self, shift)
    }

    #[inline]
    fn wrapping_shr(self, shift: u32) -> Self {
        U128::wrapping_shr(self, shift)
    }

    #[inline]
    fn rotate_left(self, shift: u32) -> Self {
        U128::rotate_left(self, shift)
    }

    #[inline]
    fn rotate_right(self, shift: u32) -> Self {
        U128::rotate_right(self, shift)
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        U128::leading_zeros(self)
    }

    #[inline]
    fn compare(self, other: Self) -> i32 {
        U128::compare(self, other)
    }
}

macro_rules! impl_native {
    ($($ty:ty),*) => {
        $(
            impl WrappingArith for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    <$ty>::wrapping_add(self, other)
                }

                #[inline]
                fn wrapping_sub(self, other: Self) -> Self {
                    <$ty>::wrapping_sub(self, other)
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    <$ty>::wrapping_mul(self, other)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }

                #[inline]
                fn wrapping_shl(self, shift: u32) -> Self {
                    <$ty>::wrapping_shl(self, shift)
                }

                #[inline]
                fn wrapping_shr(self, shift: u32) -> Self {
                    <$ty>::wrapping_shr(self, shift)
                }

                #[inline]
                fn rotate_left(self, shift: u32) -> Self {
                    <$ty>::rotate_left(self, shift)
                }

                #[inline]
                fn rotate_right(self, shift: u32) -> Self {
                    <$ty>::rotate_right(self, shift)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }
            }
        )*
    };
}

impl_native!(u64, u128);
