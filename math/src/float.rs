//! Integer to floating point conversion for two-word integers.

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: u64 = 1023;

/// Converts the unsigned 128-bit integer `lo + hi * 2^64` to the nearest `f64`,
/// rounding half to even as IEEE-754 does.
///
/// Reference: https://blog.m-ou.se/floats/
pub fn u128_to_f64(lo: u64, hi: u64) -> f64 {
    if (lo | hi) == 0 {
        return 0.0;
    }
    let leading_zeros = if hi != 0 { hi.leading_zeros() } else { 64 + lo.leading_zeros() };

    // Align so the highest set bit lands on bit 127
    let (top, rest) = match leading_zeros {
        0 => (hi, lo),
        1..=63 => ((hi << leading_zeros) | (lo >> (64 - leading_zeros)), lo << leading_zeros),
        _ => (lo << (leading_zeros - 64), 0),
    };

    // The highest 53 bits, implicit leading one included
    let mut mantissa = top >> (63 - MANTISSA_BITS);
    let dropped = top << (MANTISSA_BITS + 1);
    let half = dropped >> 63 != 0;
    let below_half = (dropped << 1) | rest;
    let round_up = half & ((below_half != 0) | (mantissa & 1 == 1));
    mantissa += round_up as u64;

    // The leading one in the mantissa adds one to the exponent field, and a
    // carry out of rounding adds another, which is exactly the renormalization.
    let exponent = EXPONENT_BIAS + u64::from(127 - leading_zeros) - 1;
    f64::from_bits((exponent << MANTISSA_BITS) + mantissa)
}

#[cfg(test)]
mod tests {
    use super::u128_to_f64;
    use rand_chacha::{
        ChaCha8Rng,
        rand_core::{RngCore, SeedableRng},
    };

    fn convert(n: u128) -> f64 {
        u128_to_f64(n as u64, (n >> 64) as u64)
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(convert(0), 0.0);
        assert_eq!(convert(1), 1.0);
        assert_eq!(convert(1 << 64), 18446744073709551616.0);
        assert_eq!(convert(u64::MAX as u128), u64::MAX as f64);
        assert_eq!(convert(u128::MAX), u128::MAX as f64);
    }

    #[test]
    fn test_rounding_half_to_even() {
        // 2^53 + 1 is a tie between 2^53 and 2^53 + 2; the even mantissa wins
        assert_eq!(convert((1 << 53) + 1), 9007199254740992.0);
        assert_eq!(convert((1 << 53) + 3), 9007199254740996.0);
        // Sticky bits far below the rounding position still round up
        assert_eq!(convert((1 << 100) + (1 << 47) + 1), ((1u128 << 100) + (1 << 48)) as f64);
    }

    #[test]
    fn test_against_native() {
        let mut rng = ChaCha8Rng::from_seed([8; 32]);
        for _ in 0..50_000 {
            let shift = rng.next_u32() % 128;
            let n = ((rng.next_u64() as u128) << 64 | rng.next_u64() as u128) >> shift;
            assert_eq!(convert(n), n as f64, "{n:#x}");
        }
    }
}
