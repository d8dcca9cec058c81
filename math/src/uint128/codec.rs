use super::U128;
use crate::{Error, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Byte order of a serialized [`U128`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl U128 {
    #[inline]
    pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[..8].copy_from_slice(&self.lo.to_le_bytes());
        out[8..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }

    #[inline]
    pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[..8].copy_from_slice(&self.hi.to_be_bytes());
        out[8..].copy_from_slice(&self.lo.to_be_bytes());
        out
    }

    #[inline]
    pub fn to_bytes(self, endian: Endian) -> [u8; Self::BYTES] {
        match endian {
            Endian::Little => self.to_le_bytes(),
            Endian::Big => self.to_be_bytes(),
        }
    }

    #[inline]
    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let (lo, hi) = split_words(bytes);
        Self::from_words(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    #[inline]
    pub fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let (hi, lo) = split_words(bytes);
        Self::from_words(u64::from_be_bytes(lo), u64::from_be_bytes(hi))
    }

    /// Decodes exactly 16 bytes in the given byte order.
    ///
    /// # Panics
    /// If `bytes` is not 16 bytes long. Use [`Self::try_from_slice`] for
    /// untrusted input.
    #[inline]
    #[track_caller]
    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
        match Self::try_from_slice(bytes, endian) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub fn try_from_slice(bytes: &[u8], endian: Endian) -> Result<Self> {
        let bytes: [u8; Self::BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength(bytes.len()))?;
        Ok(match endian {
            Endian::Little => Self::from_le_bytes(bytes),
            Endian::Big => Self::from_be_bytes(bytes),
        })
    }

    /// Decodes up to 16 big-endian bytes, left-padding with zeros.
    #[inline]
    pub fn from_be_bytes_var(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > Self::BYTES {
            return Err(Error::InvalidLength(bytes.len()));
        }
        let mut out = [0u8; Self::BYTES];
        out[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_be_bytes(out))
    }

    /// Big-endian bytes with leading zeros stripped; empty for zero.
    #[inline]
    pub fn to_be_bytes_var(self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        bytes[start..].to_vec()
    }
}

#[inline(always)]
fn split_words(bytes: [u8; U128::BYTES]) -> ([u8; 8], [u8; 8]) {
    let mut first = [0u8; 8];
    let mut second = [0u8; 8];
    first.copy_from_slice(&bytes[..8]);
    second.copy_from_slice(&bytes[8..]);
    (first, second)
}

impl BorshSerialize for U128 {
    fn serialize<W: borsh::io::Write>(&self, writer: &mut W) -> borsh::io::Result<()> {
        writer.write_all(&self.to_le_bytes())
    }
}

impl BorshDeserialize for U128 {
    fn deserialize_reader<R: borsh::io::Read>(reader: &mut R) -> borsh::io::Result<Self> {
        let mut bytes = [0u8; U128::BYTES];
        reader.read_exact(&mut bytes)?;
        Ok(Self::from_le_bytes(bytes))
    }
}

// Human readable formats get the fixed-width hex string, binary formats the limbs
impl Serialize for U128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut hex = [0u8; U128::BYTES * 2];
            let encoded = faster_hex::hex_encode(&self.to_be_bytes(), &mut hex).map_err(<S::Error as serde::ser::Error>::custom)?;
            serializer.serialize_str(encoded)
        } else {
            use serde::ser::SerializeTuple;
            let mut seq = serializer.serialize_tuple(2)?;
            seq.serialize_element(&self.lo)?;
            seq.serialize_element(&self.hi)?;
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for U128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use core::fmt;
        use serde::de::{Error as _, SeqAccess, Visitor};

        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = U128;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex string of at most 32 digits")
            }

            fn visit_str<E: serde::de::Error>(self, hex: &str) -> std::result::Result<U128, E> {
                U128::from_hex(hex).map_err(E::custom)
            }
        }

        struct LimbsVisitor;

        impl<'de> Visitor<'de> for LimbsVisitor {
            type Value = U128;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer with 2 limbs")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<U128, A::Error> {
                let lo = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(0, &self))?;
                let hi = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(1, &self))?;
                Ok(U128::from_words(lo, hi))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HexVisitor)
        } else {
            deserializer.deserialize_tuple(2, LimbsVisitor)
        }
    }
}
