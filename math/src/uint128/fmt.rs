use super::U128;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Enough room for the binary expansion of `U128::MAX`.
type DigitBuf = [u8; 128];

/// Writes `value` in base `2^log2` at the tail of `buf` and returns the index
/// of the first digit.
///
/// The number of significant digits is known up front from the bit length,
/// so each digit is read directly at its bit offset, most significant first.
fn write_pow2(value: U128, log2: u32, digits: &[u8; 36], buf: &mut DigitBuf) -> usize {
    let count = value.bits().div_ceil(log2).max(1) as usize;
    let mask = (1u64 << log2) - 1;
    let start = buf.len() - count;
    for (i, slot) in buf[start..].iter_mut().enumerate() {
        let offset = (count - 1 - i) as u32 * log2;
        *slot = digits[(value.wrapping_shr(offset).lo & mask) as usize];
    }
    start
}

/// Writes `value` in any radix at the tail of `buf` by repeated short division
/// by the largest power of the radix that fits in a `u32`.
fn write_radix(mut value: U128, radix: u32, digits: &[u8; 36], buf: &mut DigitBuf) -> usize {
    let (chunk, chunk_digits) = chunk_for(radix);
    let mut curr = buf.len();
    loop {
        let (quotient, mut rem) = value.div_rem_u32(chunk);
        value = quotient;
        // Inner chunks are zero padded, the leading one is not
        let min_digits = if value.is_zero() { 1 } else { chunk_digits };
        let mut written = 0;
        while rem != 0 || written < min_digits {
            curr -= 1;
            buf[curr] = digits[(rem % radix) as usize];
            rem /= radix;
            written += 1;
        }
        if value.is_zero() {
            return curr;
        }
    }
}

fn chunk_for(radix: u32) -> (u32, u32) {
    let (mut chunk, mut count) = (radix, 1);
    while let Some(next) = chunk.checked_mul(radix) {
        chunk = next;
        count += 1;
    }
    (chunk, count)
}

fn write_digits(value: U128, radix: u32, digits: &[u8; 36], buf: &mut DigitBuf) -> usize {
    if radix.is_power_of_two() {
        write_pow2(value, radix.trailing_zeros(), digits, buf)
    } else {
        write_radix(value, radix, digits, buf)
    }
}

fn digits_str(buf: &DigitBuf, start: usize) -> &str {
    // Every byte written comes from the ASCII digit tables
    core::str::from_utf8(&buf[start..]).unwrap_or_default()
}

impl U128 {
    /// Lowercase hexadecimal without leading zeros, `"0"` for zero.
    pub fn to_hex_string(self) -> String {
        self.to_str_radix(16)
    }

    /// Lowercase digits in `radix` without leading zeros.
    ///
    /// # Panics
    /// If `radix` is not in `2..=36`.
    #[track_caller]
    pub fn to_str_radix(self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {radix}");
        let mut buf = [0u8; 128];
        let start = write_digits(self, radix, DIGITS_LOWER, &mut buf);
        digits_str(&buf, start).to_owned()
    }

    /// Converts a big-endian hex string of at most 32 digits.
    #[inline]
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() > Self::BYTES * 2 {
            return Err(Error::InvalidLength(hex.len()));
        }
        let mut out = [0u8; Self::BYTES];
        let mut input = [b'0'; Self::BYTES * 2];
        let start = input.len() - hex.len();
        input[start..].copy_from_slice(hex.as_bytes());
        faster_hex::hex_decode(&input, &mut out)?;
        Ok(Self::from_be_bytes(out))
    }

    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidRadix(radix));
        }
        if src.is_empty() {
            return Err(Error::Empty);
        }
        let base = Self::from_u32(radix);
        src.chars().try_fold(Self::ZERO, |acc, c| {
            let digit = c.to_digit(radix).ok_or(Error::InvalidDigit(c, radix))?;
            acc.checked_mul(base).and_then(|n| n.checked_add(Self::from_u32(digit))).ok_or(Error::Overflow)
        })
    }
}

/// Decimal, or hexadecimal when prefixed with `0x`.
impl FromStr for U128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => Self::from_str_radix(hex, 16),
            None => Self::from_str_radix(s, 10),
        }
    }
}

macro_rules! impl_fmt {
    ($trait:ident, $radix:expr, $prefix:expr, $digits:expr) => {
        impl fmt::$trait for U128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buf = [0u8; 128];
                let start = write_digits(*self, $radix, $digits, &mut buf);
                f.pad_integral(true, $prefix, digits_str(&buf, start))
            }
        }
    };
}

impl_fmt!(Display, 10, "", DIGITS_LOWER);
impl_fmt!(LowerHex, 16, "0x", DIGITS_LOWER);
impl_fmt!(UpperHex, 16, "0x", DIGITS_UPPER);
impl_fmt!(Octal, 8, "0o", DIGITS_LOWER);
impl_fmt!(Binary, 2, "0b", DIGITS_LOWER);
