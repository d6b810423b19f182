//! Splitting a raw call result into fixed 32-byte fields.

use ethereum_types::{H160, U256};
use thiserror::Error;

/// Length of one ABI head field in hex characters (32 bytes).
pub const FIELD_HEX_LEN: usize = 64;

/// Raw hexadecimal payload returned by `eth_call`, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult(String);

impl RawResult {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex text with the leading `0x` marker stripped.
    pub fn hex_data(&self) -> &str {
        self.0.strip_prefix("0x").unwrap_or(&self.0)
    }

    /// An empty result or a bare `0x` means the call returned no data.
    pub fn is_empty_data(&self) -> bool {
        self.hex_data().is_empty()
    }
}

impl std::fmt::Display for RawResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field is not valid hex: {0}")]
    InvalidHex(String),

    #[error("value does not fit in the target integer type")]
    Overflow,
}

/// One 32-byte slab of the payload, re-prefixed with `0x`.
///
/// Fields are positional; what a field *means* (address, integer, offset,
/// flag) is assigned by the caller's schema, never inferred from content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field(String);

impl Field {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn hex(&self) -> &str {
        self.0.strip_prefix("0x").unwrap_or(&self.0)
    }

    pub fn to_u256(&self) -> Result<U256, FieldError> {
        U256::from_str_radix(self.hex(), 16).map_err(|_| FieldError::InvalidHex(self.0.clone()))
    }

    pub fn to_u64(&self) -> Result<u64, FieldError> {
        let value = self.to_u256()?;
        if value > U256::from(u64::MAX) {
            return Err(FieldError::Overflow);
        }
        Ok(value.as_u64())
    }

    pub fn to_usize(&self) -> Result<usize, FieldError> {
        let value = self.to_u64()?;
        usize::try_from(value).map_err(|_| FieldError::Overflow)
    }

    /// Nonzero means true.
    pub fn to_bool(&self) -> Result<bool, FieldError> {
        Ok(!self.to_u256()?.is_zero())
    }

    /// The 20-byte address right-aligned within the field (low 20 bytes).
    pub fn to_address(&self) -> Result<H160, FieldError> {
        let bytes =
            hex::decode(self.hex()).map_err(|_| FieldError::InvalidHex(self.0.clone()))?;
        if bytes.len() != 32 {
            return Err(FieldError::InvalidHex(self.0.clone()));
        }
        Ok(H160::from_slice(&bytes[12..]))
    }
}

/// Partition a raw result into consecutive 64-hex-character fields.
///
/// An empty result (or bare `0x`) produces no fields; callers treat that as
/// "no data", not an error. A trailing chunk shorter than one field is
/// silently dropped.
pub fn split_fields(raw: &RawResult) -> Vec<Field> {
    let data = raw.hex_data();
    data.as_bytes()
        .chunks_exact(FIELD_HEX_LEN)
        .map(|chunk| Field(format!("0x{}", String::from_utf8_lossy(chunk))))
        .collect()
}
