use super::U128;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign};

/// Word masks for a shift amount already reduced to `0..128`.
///
/// `cross` is all ones iff bits move across the word boundary (`1..=63`),
/// `keep` is all ones iff the shift stays within a word (`0..=63`).
#[inline(always)]
const fn shift_masks(shift: u64) -> (u64, u64) {
    let cross = ((((shift + 127) | shift) & 64) >> 6).wrapping_sub(1);
    let keep = (shift >> 6).wrapping_sub(1);
    (cross, keep)
}

impl U128 {
    /// Two's-complement negation: invert both words, then add one with the
    /// carry recovered from the inverted low word.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        let lo = !self.lo;
        let hi = !self.hi;
        let carry = ((lo & 1) + (lo >> 1)) >> 63;
        Self::from_words(lo.wrapping_add(1), hi.wrapping_add(carry))
    }

    /// Logical left shift by `shift mod 128`, without branches.
    #[inline]
    pub const fn wrapping_shl(self, shift: u32) -> Self {
        let shift = (shift & 127) as u64;
        let (cross, keep) = shift_masks(shift);
        let s = shift & 63;

        let lo = self.lo << s;
        let carried = (self.lo >> ((64 - s) & 63)) & cross;
        let hi = (lo & !keep) | (((self.hi << s) | carried) & keep);
        Self::from_words(lo & keep, hi)
    }

    /// Logical right shift by `shift mod 128`, without branches.
    #[inline]
    pub const fn wrapping_shr(self, shift: u32) -> Self {
        let shift = (shift & 127) as u64;
        let (cross, keep) = shift_masks(shift);
        let s = shift & 63;

        let hi = self.hi >> s;
        let carried = (self.hi << ((64 - s) & 63)) & cross;
        let lo = (hi & !keep) | (((self.lo >> s) | carried) & keep);
        Self::from_words(lo, hi & keep)
    }

    /// Arithmetic right shift. The type is unsigned, so this is [`Self::wrapping_shr`].
    #[inline(always)]
    pub const fn sar(self, shift: u32) -> Self {
        self.wrapping_shr(shift)
    }

    #[inline]
    pub const fn overflowing_shl(self, shift: u32) -> (Self, bool) {
        (self.wrapping_shl(shift), shift >= Self::BITS)
    }

    #[inline]
    pub const fn overflowing_shr(self, shift: u32) -> (Self, bool) {
        (self.wrapping_shr(shift), shift >= Self::BITS)
    }

    #[inline]
    pub const fn rotate_left(self, shift: u32) -> Self {
        match shift & 127 {
            0 => self,
            64 => Self::from_words(self.hi, self.lo),
            n => Self::from_words(
                self.wrapping_shl(n).lo | self.wrapping_shr(128 - n).lo,
                self.wrapping_shl(n).hi | self.wrapping_shr(128 - n).hi,
            ),
        }
    }

    #[inline]
    pub const fn rotate_right(self, shift: u32) -> Self {
        match shift & 127 {
            0 => self,
            64 => Self::from_words(self.hi, self.lo),
            n => Self::from_words(
                self.wrapping_shr(n).lo | self.wrapping_shl(128 - n).lo,
                self.wrapping_shr(n).hi | self.wrapping_shl(128 - n).hi,
            ),
        }
    }
}

impl Not for U128 {
    type Output = U128;

    #[inline]
    fn not(self) -> U128 {
        U128::from_words(!self.lo, !self.hi)
    }
}

impl Neg for U128 {
    type Output = U128;

    #[inline]
    fn neg(self) -> U128 {
        self.wrapping_neg()
    }
}

macro_rules! impl_bitwise {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $trait<U128> for U128 {
            type Output = U128;

            #[inline]
            fn $fn(self, other: U128) -> U128 {
                U128::from_words(self.lo $op other.lo, self.hi $op other.hi)
            }
        }

        impl $assign_trait<U128> for U128 {
            #[inline]
            fn $assign_fn(&mut self, other: U128) {
                *self = *self $op other;
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Shl<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shl(self, shift: u32) -> U128 {
        self.wrapping_shl(shift)
    }
}

impl Shr<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shr(self, shift: u32) -> U128 {
        self.wrapping_shr(shift)
    }
}

impl ShlAssign<u32> for U128 {
    #[inline]
    fn shl_assign(&mut self, shift: u32) {
        *self = self.wrapping_shl(shift);
    }
}

impl ShrAssign<u32> for U128 {
    #[inline]
    fn shr_assign(&mut self, shift: u32) {
        *self = self.wrapping_shr(shift);
    }
}

#[cfg(test)]
mod tests {
    use super::U128;
    use rand_chacha::{
        ChaCha8Rng,
        rand_core::{RngCore, SeedableRng},
    };

    fn random(rng: &mut ChaCha8Rng) -> (U128, u128) {
        let (lo, hi) = (rng.next_u64(), rng.next_u64());
        (U128::from_words(lo, hi), (hi as u128) << 64 | lo as u128)
    }

    #[test]
    fn test_shift_boundaries() {
        let one = U128::ONE;
        assert_eq!(one << 64, U128::from_words(0, 1));
        assert_eq!(U128::from_words(0, 1) >> 64, one);
        assert_eq!(one << 127, U128::from_words(0, 1 << 63));
        assert_eq!(U128::MAX >> 127, one);
        assert_eq!(U128::from_words(0x8000_0000_0000_0001, 0) << 1, U128::from_words(2, 1));
        assert_eq!(U128::from_words(0, 3) >> 1, U128::from_words(1 << 63, 1));
        assert_eq!(U128::from_words(u64::MAX, 0) << 65, U128::from_words(0, u64::MAX - 1));
        assert_eq!(U128::from_words(0, u64::MAX) >> 65, U128::from_words(u64::MAX >> 1, 0));
    }

    #[test]
    fn test_shift_amount_wraps() {
        let x = U128::from_words(0xdead_beef_0123_4567, 0x89ab_cdef_fedc_ba98);
        assert_eq!(x << 0, x);
        assert_eq!(x << 128, x);
        assert_eq!(x >> 128, x);
        assert_eq!(x << 130, x << 2);
        assert_eq!(x.overflowing_shl(128), (x, true));
        assert_eq!(x.overflowing_shr(3), (x >> 3, false));
        assert_eq!(x.sar(77), x >> 77);
    }

    #[test]
    fn test_shifts_against_native() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        for _ in 0..2_000 {
            let (mine, native) = random(&mut rng);
            for shift in 0..128u32 {
                assert_eq!((mine << shift).as_u128(), native << shift, "{native:#x} << {shift}");
                assert_eq!((mine >> shift).as_u128(), native >> shift, "{native:#x} >> {shift}");
            }
        }
    }

    #[test]
    fn test_shift_roundtrip_below_leading_zeros() {
        let mut rng = ChaCha8Rng::from_seed([2; 32]);
        for _ in 0..2_000 {
            let (mine, _) = random(&mut rng);
            let mine = mine >> (rng.next_u32() % 128);
            for n in 0..mine.leading_zeros() {
                assert_eq!((mine << n) >> n, mine);
            }
        }
    }

    #[test]
    fn test_rotate() {
        let x = U128::from_words(1, 2);
        assert_eq!(x.rotate_left(0), x);
        assert_eq!(x.rotate_left(128), x);
        assert_eq!(x.rotate_left(64), U128::from_words(2, 1));
        assert_eq!(x.rotate_right(64), U128::from_words(2, 1));
        assert_eq!(U128::from_words(0, 1 << 63).rotate_left(1), U128::ONE);
        assert_eq!(U128::ONE.rotate_right(1), U128::from_words(0, 1 << 63));

        let mut rng = ChaCha8Rng::from_seed([3; 32]);
        for _ in 0..500 {
            let (mine, native) = random(&mut rng);
            for n in 1..128 {
                assert_eq!(mine.rotate_left(n), mine.rotate_right(128 - n));
                assert_eq!(mine.rotate_left(n).as_u128(), native.rotate_left(n));
                assert_eq!(mine.rotate_right(n).as_u128(), native.rotate_right(n));
            }
        }
    }

    #[test]
    fn test_bitwise_and_negation() {
        let mut rng = ChaCha8Rng::from_seed([4; 32]);
        for _ in 0..10_000 {
            let (a, na) = random(&mut rng);
            let (b, nb) = random(&mut rng);
            assert_eq!((a & b).as_u128(), na & nb);
            assert_eq!((a | b).as_u128(), na | nb);
            assert_eq!((a ^ b).as_u128(), na ^ nb);
            assert_eq!((!a).as_u128(), !na);
            assert_eq!((-a).as_u128(), na.wrapping_neg());

            let mut c = a;
            c &= b;
            c |= a;
            c ^= b;
            assert_eq!(c.as_u128(), ((na & nb) | na) ^ nb);
        }
        assert_eq!(-U128::ZERO, U128::ZERO);
        assert_eq!(-U128::ONE, U128::MAX);
        assert_eq!(U128::ONE + -U128::ONE, U128::ZERO);
    }
}
