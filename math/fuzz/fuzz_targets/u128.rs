#![no_main]
mod utils;

use core::ops::{BitAnd, BitOr, BitXor, Div, Rem};
use libfuzzer_sys::fuzz_target;
use utils::{consume, try_opt};
use widenum_math::{Endian, U128, WrappingArith};

// Consumes 16 bytes
fn generate_ints(data: &mut &[u8]) -> Option<(U128, u128)> {
    let buf = consume(data)?;
    Some((U128::from_le_bytes(buf), u128::from_le_bytes(buf)))
}

fn assert_op<T, U>(data: &mut &[u8], op_lib: T, op_native: U, ok_by_zero: bool) -> Option<()>
where
    T: Fn(U128, U128) -> U128,
    U: Fn(u128, u128) -> u128,
{
    let (lib, native) = generate_ints(data)?;
    let (lib2, native2) = loop {
        let (lib2, native2) = generate_ints(data)?;
        if ok_by_zero || native2 != 0 {
            break (lib2, native2);
        }
    };
    assert_eq!(op_lib(lib, lib2), op_native(native, native2), "native: {native}, native2: {native2}");
    Some(())
}

fn assert_shift<T, U>(data: &mut &[u8], op_lib: T, op_native: U) -> Option<()>
where
    T: Fn(U128, u32) -> U128,
    U: Fn(u128, u32) -> u128,
{
    let (lib, native) = generate_ints(data)?;
    let shift = u32::from_le_bytes(consume(data)?);
    assert_eq!(op_lib(lib, shift), op_native(native, shift), "native: {native}, shift: {shift}");
    Some(())
}

fuzz_target!(|data: &[u8]| {
    let mut data = data;
    // from_le_bytes
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib, native);
    }

    assert_op(&mut data, U128::wrapping_add, u128::wrapping_add, true);
    assert_op(&mut data, U128::wrapping_sub, u128::wrapping_sub, true);
    assert_op(&mut data, U128::wrapping_mul, u128::wrapping_mul, true);
    assert_op(&mut data, Div::div, Div::div, false);
    assert_op(&mut data, Rem::rem, Rem::rem, false);
    assert_op(&mut data, BitAnd::bitand, BitAnd::bitand, true);
    assert_op(&mut data, BitOr::bitor, BitOr::bitor, true);
    assert_op(&mut data, BitXor::bitxor, BitXor::bitxor, true);

    // Not and negation
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(!lib, !native, "native: {native}");
        assert_eq!(-lib, native.wrapping_neg(), "native: {native}");
    }

    assert_shift(&mut data, U128::wrapping_shl, u128::wrapping_shl);
    assert_shift(&mut data, U128::wrapping_shr, u128::wrapping_shr);
    assert_shift(&mut data, U128::rotate_left, u128::rotate_left);
    assert_shift(&mut data, U128::rotate_right, u128::rotate_right);

    // widening multiplication, checked against the wrapped and overflow results
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        let (lib2, native2) = try_opt!(generate_ints(&mut data));
        let wide = lib.widening_mul(lib2);
        assert_eq!(wide.truncate(), native.wrapping_mul(native2));
        assert_eq!(wide.0[2] | wide.0[3] != 0, native.checked_mul(native2).is_none());
    }
    // comparison
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        let (lib2, native2) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib.cmp(&lib2), native.cmp(&native2), "native: {native}, native2: {native2}");
        assert_eq!(WrappingArith::compare(lib, lib2), WrappingArith::compare(native, native2));
    }
    // bit scan
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib.bits(), 128 - native.leading_zeros(), "native: {native}");
        assert_eq!(lib.leading_zeros(), native.leading_zeros(), "native: {native}");
        assert_eq!(lib.trailing_zeros(), native.trailing_zeros(), "native: {native}");
        assert_eq!(lib.count_ones(), native.count_ones(), "native: {native}");
    }
    // conversions
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib.as_u64(), native as u64, "native: {native}");
        assert_eq!(lib.as_u32(), native as u32, "native: {native}");
        assert_eq!(lib.as_u128(), native, "native: {native}");
        assert_eq!(lib.as_f64(), native as f64, "native: {native}");
    }
    // bytes
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib.to_le_bytes(), native.to_le_bytes(), "native: {native}");
        assert_eq!(lib.to_be_bytes(), native.to_be_bytes(), "native: {native}");
        assert_eq!(U128::from_bytes(&native.to_be_bytes(), Endian::Big), lib);
    }
    // formatting
    {
        let (lib, native) = try_opt!(generate_ints(&mut data));
        assert_eq!(lib.to_string(), native.to_string());
        assert_eq!(lib.to_hex_string(), format!("{native:x}"));
        assert_eq!(format!("{lib:#o}"), format!("{native:#o}"));
        assert_eq!(lib.to_string().parse::<U128>().unwrap(), lib);
    }
});
