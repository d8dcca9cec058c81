use super::U128;
use crate::uint256::U256;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

const LOW_HALF: u64 = 0xFFFF_FFFF;

/// Carry out of `a + b` without widening: halve both operands so their sum
/// cannot overflow, restore the dropped low bits, and read bit 63.
#[inline(always)]
const fn carry_of(a: u64, b: u64) -> u64 {
    ((a & b & 1) + (a >> 1) + (b >> 1)) >> 63
}

/// Full 64x64 -> 128 bit product as `(lo, hi)`, built from 32-bit halves.
#[inline]
pub(crate) const fn mul_u64_wide(u: u64, v: u64) -> (u64, u64) {
    let u1 = u & LOW_HALF;
    let v1 = v & LOW_HALF;
    let u2 = u >> 32;
    let v2 = v >> 32;

    let t = u1 * v1;
    let w1 = t & LOW_HALF;

    // Neither of these sums can exceed (2^32 - 1)^2 + 2^32 - 1
    let t = u2 * v1 + (t >> 32);
    let k = t & LOW_HALF;
    let w = t >> 32;
    let t = u1 * v2 + k;

    let lo = w1 | (t << 32);
    let hi = u2 * v2 + w + (t >> 32);
    (lo, hi)
}

impl U128 {
    #[inline]
    pub const fn wrapping_add(self, other: Self) -> Self {
        let lo = self.lo.wrapping_add(other.lo);
        let hi = self.hi.wrapping_add(other.hi).wrapping_add(carry_of(self.lo, other.lo));
        Self::from_words(lo, hi)
    }

    #[inline]
    pub const fn overflowing_add(self, other: Self) -> (Self, bool) {
        let sum = self.wrapping_add(other);
        let (a, b) = (self.hi, other.hi);
        // Majority of the operand and result sign bits gives the carry out of bit 127
        let carry = ((a & b) | ((a | b) & !sum.hi)) >> 63;
        (sum, carry != 0)
    }

    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.overflowing_add(other) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Wrapping subtraction. The borrow out of the low word is the carry of
    /// `difference + subtrahend`, which reproduces the minuend.
    #[inline]
    pub const fn wrapping_sub(self, other: Self) -> Self {
        let lo = self.lo.wrapping_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(carry_of(lo, other.lo));
        Self::from_words(lo, hi)
    }

    #[inline]
    pub const fn overflowing_sub(self, other: Self) -> (Self, bool) {
        let diff = self.wrapping_sub(other);
        let (a, b) = (self.hi, other.hi);
        let borrow = ((!a & b) | ((!a | b) & diff.hi)) >> 63;
        (diff, borrow != 0)
    }

    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.overflowing_sub(other) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Product modulo 2^128.
    ///
    /// The low words are multiplied in full; the cross terms only reach the high
    /// word, so they are truncated to 64 bits and the `hi * hi` term is dropped.
    #[inline]
    pub const fn wrapping_mul(self, other: Self) -> Self {
        let (lo, hi) = mul_u64_wide(self.lo, other.lo);
        let hi = hi.wrapping_add(self.hi.wrapping_mul(other.lo)).wrapping_add(self.lo.wrapping_mul(other.hi));
        Self::from_words(lo, hi)
    }

    /// Full 256-bit product, schoolbook over 64-bit limbs.
    pub const fn widening_mul(self, other: Self) -> U256 {
        let a = [self.lo, self.hi];
        let b = [other.lo, other.hi];
        let mut out = [0u64; 4];
        let mut i = 0;
        while i < 2 {
            let mut carry = 0u64;
            let mut j = 0;
            while j < 2 {
                let (lo, hi) = mul_u64_wide(a[i], b[j]);
                let (sum, c1) = out[i + j].overflowing_add(lo);
                let (sum, c2) = sum.overflowing_add(carry);
                out[i + j] = sum;
                // a*b + out + carry < 2^128, so this never wraps
                carry = hi + c1 as u64 + c2 as u64;
                j += 1;
            }
            out[i + 2] = carry;
            i += 1;
        }
        U256(out)
    }

    #[inline]
    pub fn overflowing_mul(self, other: Self) -> (Self, bool) {
        let wide = self.widening_mul(other);
        (wide.truncate(), (wide.0[2] | wide.0[3]) != 0)
    }

    #[inline]
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        match self.overflowing_mul(other) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    /// Quotient and remainder by binary long division.
    ///
    /// # Panics
    /// If `other` is zero.
    #[inline]
    #[track_caller]
    pub fn div_rem(self, other: Self) -> (Self, Self) {
        assert!(!other.is_zero(), "attempt to divide by zero");

        if (self.hi | other.hi) == 0 {
            return (Self::from_u64(self.lo / other.lo), Self::from_u64(self.lo % other.lo));
        }

        let my_bits = self.bits();
        let your_bits = other.bits();
        if my_bits < your_bits {
            return (Self::ZERO, self);
        }

        let mut shift = my_bits - your_bits;
        let mut remainder = self;
        let mut divisor = other << shift;
        let mut quotient = Self::ZERO;
        loop {
            if remainder >= divisor {
                quotient |= Self::ONE << shift;
                remainder = remainder.wrapping_sub(divisor);
            }
            divisor = divisor >> 1;
            if shift == 0 {
                break;
            }
            shift -= 1;
        }
        (quotient, remainder)
    }

    /// Short division by a single 32-bit digit, most significant limb first.
    ///
    /// # Panics
    /// If `other` is zero.
    #[inline]
    #[track_caller]
    pub fn div_rem_u32(self, other: u32) -> (Self, u32) {
        assert!(other != 0, "attempt to divide by zero");
        let divisor = other as u64;
        let mut limbs = [self.hi >> 32, self.hi & LOW_HALF, self.lo >> 32, self.lo & LOW_HALF];
        let mut rem = 0u64;
        for limb in limbs.iter_mut() {
            let n = (rem << 32) | *limb;
            *limb = n / divisor;
            rem = n % divisor;
        }
        let [h2, h1, l2, l1] = limbs;
        (Self::from_words(l1 | (l2 << 32), h1 | (h2 << 32)), rem as u32)
    }

    /// Quotient and remainder by a single 64-bit word.
    ///
    /// Divisors that fit in 32 bits take the short division over 32-bit
    /// limbs. Wider ones divide the high word natively and then shift the
    /// low word's bits into a one-word remainder.
    ///
    /// # Panics
    /// If `other` is zero.
    #[inline]
    #[track_caller]
    pub fn div_rem_u64(self, other: u64) -> (Self, u64) {
        assert!(other != 0, "attempt to divide by zero");
        if other <= u32::MAX as u64 {
            let (quotient, rem) = self.div_rem_u32(other as u32);
            return (quotient, rem as u64);
        }

        let q_hi = self.hi / other;
        let mut rem = self.hi % other;
        let mut q_lo = 0u64;
        for i in (0..64u32).rev() {
            // rem < other, so 2 * rem + bit < 2 * other and one subtraction
            // suffices; the bit shifted out is the 65th bit of that value
            let carry = rem >> 63;
            rem = (rem << 1) | ((self.lo >> i) & 1);
            if carry != 0 || rem >= other {
                rem = rem.wrapping_sub(other);
                q_lo |= 1 << i;
            }
        }
        (Self::from_words(q_lo, q_hi), rem)
    }

    #[inline]
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.is_zero() { None } else { Some(self.div_rem(other).0) }
    }

    #[inline]
    pub fn checked_rem(self, other: Self) -> Option<Self> {
        if other.is_zero() { None } else { Some(self.div_rem(other).1) }
    }

    /// Negates when bit 127 is set, i.e. the magnitude of the value read as a
    /// two's-complement signed integer. The result stays unsigned, so
    /// `abs(1 << 127)` is `1 << 127`.
    #[inline]
    pub const fn abs(self) -> Self {
        if self.hi >> 63 != 0 { self.wrapping_neg() } else { self }
    }
}

impl Add<U128> for U128 {
    type Output = U128;

    #[inline]
    fn add(self, other: U128) -> U128 {
        self.wrapping_add(other)
    }
}

impl Sub<U128> for U128 {
    type Output = U128;

    #[inline]
    fn sub(self, other: U128) -> U128 {
        self.wrapping_sub(other)
    }
}

impl Mul<U128> for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, other: U128) -> U128 {
        self.wrapping_mul(other)
    }
}

impl Div<U128> for U128 {
    type Output = U128;

    #[inline]
    #[track_caller]
    fn div(self, other: U128) -> U128 {
        self.div_rem(other).0
    }
}

impl Rem<U128> for U128 {
    type Output = U128;

    #[inline]
    #[track_caller]
    fn rem(self, other: U128) -> U128 {
        self.div_rem(other).1
    }
}

macro_rules! impl_assign {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl $trait<U128> for U128 {
            #[inline]
            #[track_caller]
            fn $fn(&mut self, other: U128) {
                *self = *self $op other;
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, +);
impl_assign!(SubAssign, sub_assign, -);
impl_assign!(MulAssign, mul_assign, *);
impl_assign!(DivAssign, div_assign, /);
impl_assign!(RemAssign, rem_assign, %);

impl core::iter::Sum for U128 {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, U128::wrapping_add)
    }
}

impl core::iter::Product for U128 {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, U128::wrapping_mul)
    }
}

impl<'a> core::iter::Sum<&'a U128> for U128 {
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, &b| a.wrapping_add(b))
    }
}

impl<'a> core::iter::Product<&'a U128> for U128 {
    #[inline]
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, &b| a.wrapping_mul(b))
    }
}

#[cfg(test)]
mod tests {
    use super::{U128, mul_u64_wide};
    use malachite_nz::natural::Natural;
    use rand_chacha::{
        ChaCha8Rng,
        rand_core::{RngCore, SeedableRng},
    };

    fn random(rng: &mut ChaCha8Rng) -> (U128, u128) {
        // Mix in sparse values so carries across the word boundary get exercised
        let (mut lo, mut hi) = (rng.next_u64(), rng.next_u64());
        match rng.next_u32() % 4 {
            0 => hi = 0,
            1 => lo = u64::MAX,
            2 => hi >>= rng.next_u32() % 64,
            _ => {}
        }
        (U128::from_words(lo, hi), (hi as u128) << 64 | lo as u128)
    }

    #[test]
    fn test_add_carry_into_high_word() {
        assert_eq!(U128::from_words(1, 0) + U128::from_words(u64::MAX, 0), U128::from_words(0, 1));
        assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
        assert_eq!(U128::MAX.overflowing_add(U128::ONE), (U128::ZERO, true));
        assert_eq!(U128::MAX.checked_add(U128::ZERO), Some(U128::MAX));
        assert_eq!(U128::MAX.checked_add(U128::ONE), None);
    }

    #[test]
    fn test_sub_borrow_from_high_word() {
        assert_eq!(U128::from_words(0, 1) - U128::ONE, U128::from_words(u64::MAX, 0));
        assert_eq!(U128::ZERO - U128::ONE, U128::MAX);
        assert_eq!(U128::ZERO.overflowing_sub(U128::ONE), (U128::MAX, true));
        assert_eq!(U128::ONE.checked_sub(U128::ONE), Some(U128::ZERO));
        assert_eq!(U128::ONE.checked_sub(U128::from_words(0, 1)), None);
    }

    #[test]
    fn test_mul_small() {
        assert_eq!(U128::from_u64(2) * U128::from_u64(3), U128::from_u64(6));
        assert_eq!(U128::from_words(u64::MAX, 0) * U128::from_u64(2), U128::from_words(u64::MAX - 1, 1));
        assert_eq!(U128::MAX * U128::MAX, U128::ONE);
        assert_eq!(mul_u64_wide(u64::MAX, u64::MAX), (1, u64::MAX - 1));
    }

    #[test]
    fn test_arithmetic_against_native() {
        let mut rng = ChaCha8Rng::from_seed([0; 32]);
        for _ in 0..80_000 {
            let (a, na) = random(&mut rng);
            let (b, nb) = random(&mut rng);

            assert_eq!((a + b).as_u128(), na.wrapping_add(nb), "{na:#x} + {nb:#x}");
            assert_eq!((a - b).as_u128(), na.wrapping_sub(nb), "{na:#x} - {nb:#x}");
            assert_eq!((a * b).as_u128(), na.wrapping_mul(nb), "{na:#x} * {nb:#x}");
            assert_eq!(a.overflowing_add(b).1, na.overflowing_add(nb).1);
            assert_eq!(a.overflowing_sub(b).1, na.overflowing_sub(nb).1);
            assert_eq!(a.overflowing_mul(b), (a * b, na.overflowing_mul(nb).1));

            if nb != 0 {
                let (q, r) = a.div_rem(b);
                assert_eq!((q.as_u128(), r.as_u128()), (na / nb, na % nb), "{na:#x} / {nb:#x}");
            }

            let d = rng.next_u32() | 1;
            let (q, r) = a.div_rem_u32(d);
            assert_eq!((q.as_u128(), r as u128), (na / d as u128, na % d as u128));

            let w = (rng.next_u64() >> (rng.next_u32() % 64)) | 1;
            let (q, r) = a.div_rem_u64(w);
            assert_eq!((q.as_u128(), r as u128), (na / w as u128, na % w as u128));
        }
    }

    #[test]
    fn test_widening_mul_against_malachite() {
        let mut rng = ChaCha8Rng::from_seed([5; 32]);
        for _ in 0..20_000 {
            let (a, _) = random(&mut rng);
            let (b, _) = random(&mut rng);
            let expected = Natural::from_limbs_asc(&[a.lo, a.hi]) * Natural::from_limbs_asc(&[b.lo, b.hi]);
            let mut limbs = expected.into_limbs_asc();
            limbs.resize(4, 0);
            assert_eq!(a.widening_mul(b).0.as_slice(), limbs.as_slice());
            assert_eq!(a.widening_mul(b).truncate(), a * b);
        }
        let max = U128::MAX.widening_mul(U128::MAX);
        assert_eq!(max.0, [1, 0, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_division_vectors() {
        let ten = U128::from_u64(10);
        assert_eq!(U128::from_u64(100).div_rem(ten), (ten, U128::ZERO));
        assert_eq!(U128::ONE.div_rem(U128::MAX), (U128::ZERO, U128::ONE));
        assert_eq!(U128::MAX.div_rem(U128::MAX), (U128::ONE, U128::ZERO));
        assert_eq!(U128::MAX / U128::from_words(0, 1), U128::from_u64(u64::MAX));
        assert_eq!(U128::MAX % U128::from_words(0, 1), U128::from_u64(u64::MAX));
        assert_eq!(U128::MAX.div_rem_u32(u32::MAX).1, 0);
        assert_eq!(U128::ONE.checked_div(U128::ZERO), None);
        assert_eq!(U128::ONE.checked_rem(U128::ZERO), None);
        assert_eq!(U128::from_u64(7).checked_rem(U128::from_u64(4)), Some(U128::from_u64(3)));
    }

    #[test]
    fn test_div_rem_u64_vectors() {
        assert_eq!(U128::MAX.div_rem_u64(u64::MAX), (U128::from_words(1, 1), 0));
        assert_eq!(U128::MAX.div_rem_u64(1), (U128::MAX, 0));
        assert_eq!(U128::from_words(5, 0).div_rem_u64(1 << 40), (U128::ZERO, 5));
        assert_eq!(U128::from_words(0, 1).div_rem_u64(u32::MAX as u64), (U128::from_u64((1 << 32) + 1), 1));

        // Divisors with the top bit set make the remainder overflow one word mid-step
        let divisor = (1 << 63) | 0x1234_5678_9abc_def1;
        let native = u128::MAX - 12345;
        let (q, r) = U128::from_u128(native).div_rem_u64(divisor);
        assert_eq!((q.as_u128(), r as u128), (native / divisor as u128, native % divisor as u128));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_rem_u64_by_zero_panics() {
        let _ = U128::MAX.div_rem_u64(0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = U128::MAX / U128::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_rem_by_zero_panics() {
        let _ = U128::from_words(0, 1) % U128::ZERO;
    }

    #[test]
    fn test_abs() {
        assert_eq!(U128::from_u64(5).abs(), U128::from_u64(5));
        assert_eq!(U128::from_i64(-5).abs(), U128::from_u64(5));
        assert_eq!(U128::MAX.abs(), U128::ONE);
        let min_signed = U128::from_words(0, 1 << 63);
        assert_eq!(min_signed.abs(), min_signed);
    }

    #[test]
    fn test_assign_ops_and_iter() {
        let mut n = U128::from_u64(10);
        n += U128::from_u64(5);
        n -= U128::ONE;
        n *= U128::from_u64(3);
        n /= U128::from_u64(7);
        n %= U128::from_u64(4);
        assert_eq!(n, U128::from_u64(2));

        let values = [U128::from_u64(2), U128::from_u64(3), U128::from_u64(4)];
        assert_eq!(values.iter().sum::<U128>(), U128::from_u64(9));
        assert_eq!(values.iter().product::<U128>(), U128::from_u64(24));
        assert_eq!(values.into_iter().sum::<U128>(), U128::from_u64(9));
        assert_eq!([U128::MAX, U128::from_u64(2)].into_iter().sum::<U128>(), U128::ONE);
        assert_eq!(core::iter::empty::<U128>().product::<U128>(), U128::ONE);
    }
}
