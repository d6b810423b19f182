//! EIP-55 checksummed address formatting.

use ethereum_types::H160;
use sha3::{Digest, Keccak256};

/// Format an address with the EIP-55 mixed-case checksum: each alphabetic
/// hex digit is uppercased when the corresponding nibble of the keccak-256
/// hash of the lowercase hex text is >= 8.
pub fn to_checksum_address(address: &H160) -> String {
    let lower = hex::encode(address.as_bytes());
    let digest = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
