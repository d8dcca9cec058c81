use super::U128;
use crate::{Error, U256, float};

/// `2^64` as a float, the first value `from_f64` can no longer represent.
const TWO_POW_64: f64 = 18446744073709551616.0;

impl U128 {
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.lo
    }

    /// Two's-complement truncation of the full value: the sign bit comes from
    /// bit 127, the magnitude bits from the low word.
    #[inline]
    pub const fn as_i64(self) -> i64 {
        ((self.lo & 0x7FFF_FFFF_FFFF_FFFF) | (self.hi & 0x8000_0000_0000_0000)) as i64
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.lo as u32
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.as_i64() as i32
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        float::u128_to_f64(self.lo, self.hi)
    }

    /// Rounds through `f64`, so a value can round twice.
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.as_f64() as f32
    }

    /// Converts the integral part of `value`. Only values in `[0, 2^64)` are
    /// converted exactly; larger values saturate to `u64::MAX` and negative or
    /// NaN inputs give zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if !(0.0..TWO_POW_64).contains(&value) {
            log::warn!("float {value} is outside the exactly convertible range [0, 2^64)");
        }
        Self::from_u64(value as u64)
    }

    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }

    /// Zero-extends into the wider type.
    #[inline]
    pub const fn to_u256(self) -> U256 {
        U256::from_u128(self)
    }

    /// Keeps the two least significant limbs of `value`.
    #[inline]
    pub const fn from_u256_truncated(value: U256) -> Self {
        value.truncate()
    }
}

macro_rules! impl_from {
    ($($ty:ty => $ctor:ident),* $(,)?) => {
        $(
            impl From<$ty> for U128 {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$ctor(value)
                }
            }
        )*
    };
}

impl_from!(u32 => from_u32, i32 => from_i32, u64 => from_u64, i64 => from_i64, u128 => from_u128);

impl From<U128> for u128 {
    #[inline]
    fn from(value: U128) -> Self {
        value.as_u128()
    }
}

impl TryFrom<U128> for u64 {
    type Error = Error;

    #[inline]
    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.hi != 0 { Err(Error::Overflow) } else { Ok(value.lo) }
    }
}
