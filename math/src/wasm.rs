//! JavaScript interop for [`U128`] (feature `wasm32-sdk`).

use crate::{Error, U128};
use js_sys::{BigInt, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};

impl U128 {
    #[inline]
    pub fn to_bigint(self) -> Result<BigInt, Error> {
        self.try_into()
    }
}

impl TryFrom<U128> for BigInt {
    type Error = Error;

    #[inline]
    fn try_from(value: U128) -> Result<BigInt, Self::Error> {
        BigInt::new(&JsValue::from_str(&format!("0x{value:x}"))).map_err(|err| Error::JsSys(format!("{err:?}")))
    }
}

/// Accepts a `bigint`, a numeric string (decimal or `0x` hex), or a
/// big-endian byte array of at most 16 bytes.
impl TryFrom<JsValue> for U128 {
    type Error = Error;

    fn try_from(js_value: JsValue) -> Result<Self, Self::Error> {
        if let Some(big) = js_value.dyn_ref::<BigInt>() {
            let hex = String::from(big.to_string(16).map_err(|err| Error::JsSys(format!("{err:?}")))?);
            Self::from_hex(&hex)
        } else if let Some(text) = js_value.as_string() {
            text.parse()
        } else if js_value.is_instance_of::<Uint8Array>() || js_sys::Array::is_array(&js_value) {
            Self::from_be_bytes_var(&Uint8Array::new(&js_value).to_vec())
        } else {
            Err(Error::NotCompatible)
        }
    }
}
