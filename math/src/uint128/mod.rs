mod arith;
mod bits;
mod bitwise;
mod cmp;
mod codec;
mod convert;
mod fmt;
mod mutate;

pub use codec::Endian;

/// Unsigned 128-bit integer stored as two little-endian 64-bit words.
///
/// The represented value is `lo + hi * 2^64`. Every pair of words is a valid and
/// distinct value, and all arithmetic wraps modulo 2^128.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct U128 {
    /// Bits 0..64
    pub lo: u64,
    /// Bits 64..128
    pub hi: u64,
}

impl U128 {
    pub const ZERO: Self = Self::from_words(0, 0);
    pub const ONE: Self = Self::from_words(1, 0);
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = Self::from_words(u64::MAX, u64::MAX);
    pub const BITS: u32 = 128;
    pub const BYTES: usize = 16;

    /// Creates a value from its low and high 64-bit words.
    #[inline(always)]
    pub const fn from_words(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self::from_words(lo, hi)
    }

    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        Self::from_words(n, 0)
    }

    /// Sign-extends `n` into the high word.
    #[inline]
    pub const fn from_i64(n: i64) -> Self {
        Self::from_words(n as u64, sign_mask(n < 0))
    }

    #[inline]
    pub const fn from_u32(n: u32) -> Self {
        Self::from_words(n as u64, 0)
    }

    /// Sign-extends `n` through both words.
    #[inline]
    pub const fn from_i32(n: i32) -> Self {
        Self::from_words(n as i64 as u64, sign_mask(n < 0))
    }

    /// Assembles a value from four 32-bit limbs, least significant first.
    #[inline]
    pub const fn from_u32_limbs(lo1: u32, lo2: u32, hi1: u32, hi2: u32) -> Self {
        Self::from_words(lo1 as u64 | ((lo2 as u64) << 32), hi1 as u64 | ((hi2 as u64) << 32))
    }

    #[inline]
    pub const fn from_u128(n: u128) -> Self {
        Self::from_words(n as u64, (n >> 64) as u64)
    }

    #[inline]
    pub const fn as_u128(self) -> u128 {
        self.lo as u128 | ((self.hi as u128) << 64)
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        (self.lo | self.hi) == 0
    }
}

/// All ones when `negative`, zero otherwise.
#[inline(always)]
pub(crate) const fn sign_mask(negative: bool) -> u64 {
    (negative as u64).wrapping_neg()
}
