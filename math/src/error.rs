use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected 16 bytes, got {0}")]
    InvalidLength(usize),

    #[error("hex decoding error: {0}")]
    Hex(#[from] faster_hex::Error),

    #[error("invalid digit {0:?} for radix {1}")]
    InvalidDigit(char, u32),

    #[error("radix {0} is not in 2..=36")]
    InvalidRadix(u32),

    #[error("cannot parse an integer from an empty string")]
    Empty,

    #[error("value does not fit in the target type")]
    Overflow,

    #[error("value is not compatible with a 128-bit unsigned integer")]
    NotCompatible,

    #[cfg(feature = "wasm32-sdk")]
    #[error("js error: {0}")]
    JsSys(String),
}

pub type Result<T> = std::result::Result<T, Error>;
