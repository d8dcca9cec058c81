//! Fixed-width wide unsigned integers built from 64-bit words.
//!
//! [`U128`] is a two-word 128-bit unsigned integer whose arithmetic is carried
//! out entirely on `u64` words: carries and borrows are recovered from bit
//! formulas and products from 32-bit limb decomposition. All arithmetic wraps
//! modulo 2^128. [`U256`] is the four-word companion type that `U128` widens
//! into and truncates from.

pub mod error;
pub mod float;
pub mod ops;
pub mod uint128;
pub mod uint256;

#[cfg(feature = "wasm32-sdk")]
pub mod wasm;

pub use error::{Error, Result};
pub use ops::WrappingArith;
pub use uint128::{Endian, U128};
pub use uint256::U256;
