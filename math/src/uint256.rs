use crate::U128;
use core::cmp::Ordering;

/// Little-endian 256-bit unsigned integer, limbs least significant first.
///
/// Only what [`U128`] needs to widen into and truncate from is provided here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct U256(pub [u64; 4]);

impl U256 {
    pub const ZERO: Self = U256([0; 4]);
    pub const MAX: Self = U256([u64::MAX; 4]);
    pub const BITS: u32 = 256;
    pub const BYTES: usize = 32;
    pub const LIMBS: usize = 4;

    /// Zero-extends `value` into the two most significant limbs.
    #[inline]
    pub const fn from_u128(value: U128) -> Self {
        U256([value.lo, value.hi, 0, 0])
    }

    /// Keeps the two least significant limbs.
    #[inline]
    pub const fn truncate(self) -> U128 {
        U128::from_words(self.0[0], self.0[1])
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    #[inline]
    pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out.chunks_exact_mut(8).zip(self.0).for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_le_bytes()));
        out
    }

    #[inline]
    pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out.chunks_exact_mut(8).zip(self.0.into_iter().rev()).for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_be_bytes()));
        out
    }
}

impl From<U128> for U256 {
    #[inline]
    fn from(value: U128) -> Self {
        Self::from_u128(value)
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &U256) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    #[inline]
    fn cmp(&self, other: &U256) -> Ordering {
        // Limbs are little-endian, so compare from the most significant one
        Iterator::cmp(self.0.iter().rev(), other.0.iter().rev())
    }
}

impl core::fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut hex = [0u8; Self::BYTES * 2];
        let encoded = faster_hex::hex_encode(&self.to_be_bytes(), &mut hex).map_err(|_| core::fmt::Error)?;
        let digits = encoded.trim_start_matches('0');
        f.pad_integral(true, "0x", if digits.is_empty() { "0" } else { digits })
    }
}

#[cfg(test)]
mod tests {
    use super::U256;
    use crate::U128;

    #[test]
    fn test_widen_and_truncate() {
        let n = U128::from_words(0x1111, 0x2222);
        let wide = U256::from(n);
        assert_eq!(wide, U256([0x1111, 0x2222, 0, 0]));
        assert_eq!(wide.truncate(), n);
        assert_eq!(U256([1, 2, 3, 4]).truncate(), U128::from_words(1, 2));
        assert!(U256::from(U128::ZERO).is_zero());
    }

    #[test]
    fn test_bytes_and_ordering() {
        let wide = U256([1, 0, 0, 1 << 56]);
        let le = wide.to_le_bytes();
        assert_eq!(le[0], 1);
        assert_eq!(le[31], 1);
        let be = wide.to_be_bytes();
        assert_eq!(be[0], 1);
        assert_eq!(be[31], 1);
        assert!(U256([0, 0, 0, 1]) > U256([u64::MAX, u64::MAX, u64::MAX, 0]));
        assert_eq!(format!("{:x}", U256([0xab, 0, 1, 0])), "1000000000000000000000000000000ab");
        assert_eq!(format!("{:#x}", U256::ZERO), "0x0");
    }
}
