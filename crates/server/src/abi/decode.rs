// Copyright (C) 2026 Auction Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Structured decoding of the `getAuctionDetails` return payload.
//!
//! The payload is a fixed 15-field head followed by dynamic string data.
//! Field meanings are assigned by position against the layout observed from
//! the deployed contract; the mapping is provisional until verified against
//! the contract ABI.

use super::address::to_checksum_address;
use super::fields::{FIELD_HEX_LEN, Field, FieldError, RawResult, split_fields};
use ethereum_types::U256;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Number of fixed head fields before the dynamic string data.
pub const HEAD_FIELDS: usize = 15;

/// How the three free-text fields were recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StringRecovery {
    /// Located through their declared offsets and length prefixes.
    Offsets,
    /// Best-effort printable-ASCII scan over the payload tail.
    AsciiScan,
}

/// Fully decoded `getAuctionDetails` record.
///
/// Prices and token counters keep the full 256-bit range and serialize as
/// decimal strings; a native float would corrupt anything above 53 bits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetails {
    pub owner: String,
    pub token_address: String,
    pub start_time: u64,
    pub duration: u64,
    pub end_time: u64,
    #[serde(serialize_with = "serialize_u256")]
    pub start_price: U256,
    #[serde(serialize_with = "serialize_u256")]
    pub min_price: U256,
    #[serde(serialize_with = "serialize_u256")]
    pub current_price: U256,
    #[serde(serialize_with = "serialize_u256")]
    pub tokens_sold: U256,
    #[serde(serialize_with = "serialize_u256")]
    pub total_tokens: U256,
    pub is_active: bool,
    pub time_remaining: u64,
    pub name: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_recovery: Option<StringRecovery>,
}

pub(crate) fn serialize_u256<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Outcome of decoding one `getAuctionDetails` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailsOutcome {
    Details(AuctionDetails),
    /// The fixed head could not be interpreted; the payload is surfaced
    /// as-is with the failure reason.
    #[serde(rename_all = "camelCase")]
    Raw {
        raw_result: String,
        decode_error: String,
    },
    /// The call returned no data at all.
    Empty,
}

#[derive(Debug, Error)]
enum HeadError {
    #[error("expected {HEAD_FIELDS} fields in the fixed head, got {0}")]
    Truncated(usize),

    #[error("field {index} ({name}): {source}")]
    Field {
        index: usize,
        name: &'static str,
        #[source]
        source: FieldError,
    },
}

#[derive(Debug, Error)]
enum StringError {
    #[error("string offset is not a usable integer")]
    BadOffset,

    #[error("offset {0} points outside the payload")]
    OffsetOutOfRange(usize),

    #[error("string data at offset {0} runs past the payload end")]
    DataOutOfRange(usize),

    #[error("length prefix is not a usable integer")]
    BadLength,

    #[error("string data is not valid hex")]
    BadHex,

    #[error("string data is not valid UTF-8")]
    BadUtf8,
}

/// The fixed numeric head, fields 3..=14. The leading three offset fields
/// are left to the string stage so a malformed offset degrades to the
/// fallback scan instead of discarding the whole record.
struct Head {
    owner: String,
    token_address: String,
    start_time: u64,
    duration: u64,
    end_time: u64,
    start_price: U256,
    min_price: U256,
    current_price: U256,
    tokens_sold: U256,
    total_tokens: U256,
    is_active: bool,
    time_remaining: u64,
}

fn decode_head(fields: &[Field]) -> Result<Head, HeadError> {
    if fields.len() < HEAD_FIELDS {
        return Err(HeadError::Truncated(fields.len()));
    }

    let wrap = |index: usize, name: &'static str| {
        move |source: FieldError| HeadError::Field {
            index,
            name,
            source,
        }
    };

    let address = |index: usize, name: &'static str| {
        fields[index]
            .to_address()
            .map(|a| to_checksum_address(&a))
            .map_err(wrap(index, name))
    };
    let u64_at = |index: usize, name: &'static str| fields[index].to_u64().map_err(wrap(index, name));
    let u256_at =
        |index: usize, name: &'static str| fields[index].to_u256().map_err(wrap(index, name));

    Ok(Head {
        owner: address(3, "owner address")?,
        token_address: address(4, "token address")?,
        start_time: u64_at(5, "start time")?,
        duration: u64_at(6, "duration")?,
        end_time: u64_at(7, "end time")?,
        start_price: u256_at(8, "start price")?,
        min_price: u256_at(9, "min price")?,
        current_price: u256_at(10, "current price")?,
        tokens_sold: u256_at(11, "tokens sold")?,
        total_tokens: u256_at(12, "total tokens")?,
        is_active: fields[13].to_bool().map_err(wrap(13, "active flag"))?,
        time_remaining: u64_at(14, "time remaining")?,
    })
}

/// Read one dynamic string: a 32-byte length at byte position `offset`,
/// then exactly `length` bytes of data, with embedded NULs stripped.
fn read_string_at(hex_data: &str, offset: usize) -> Result<String, StringError> {
    let pos = offset
        .checked_mul(2)
        .ok_or(StringError::OffsetOutOfRange(offset))?;
    let len_end = pos
        .checked_add(FIELD_HEX_LEN)
        .ok_or(StringError::OffsetOutOfRange(offset))?;
    let len_hex = hex_data
        .get(pos..len_end)
        .ok_or(StringError::OffsetOutOfRange(offset))?;
    let length = usize::from_str_radix(len_hex, 16).map_err(|_| StringError::BadLength)?;

    let data_len = length
        .checked_mul(2)
        .ok_or(StringError::DataOutOfRange(offset))?;
    let data_end = len_end
        .checked_add(data_len)
        .ok_or(StringError::DataOutOfRange(offset))?;
    let data_hex = hex_data
        .get(len_end..data_end)
        .ok_or(StringError::DataOutOfRange(offset))?;

    let bytes = hex::decode(data_hex).map_err(|_| StringError::BadHex)?;
    let text = String::from_utf8(bytes).map_err(|_| StringError::BadUtf8)?;
    Ok(text.replace('\0', ""))
}

fn decode_strings(hex_data: &str, fields: &[Field]) -> Result<[String; 3], StringError> {
    let mut out: [String; 3] = Default::default();
    for (slot, field) in out.iter_mut().zip(fields.iter().take(3)) {
        let offset = field.to_usize().map_err(|_| StringError::BadOffset)?;
        *slot = read_string_at(hex_data, offset)?;
    }
    Ok(out)
}

/// Scan the payload from `skip_fields` fields in, collecting runs of
/// printable ASCII bytes (32..=126). Any other byte, or a malformed hex
/// pair, ends the current run. Empty and whitespace-only runs are dropped.
pub fn scan_printable_runs(hex_data: &str, skip_fields: usize) -> Vec<String> {
    let start = skip_fields.saturating_mul(FIELD_HEX_LEN);
    let tail = hex_data.as_bytes().get(start..).unwrap_or(&[]);

    let mut runs = Vec::new();
    let mut current = String::new();
    for pair in tail.chunks_exact(2) {
        let byte = std::str::from_utf8(pair)
            .ok()
            .and_then(|p| u8::from_str_radix(p, 16).ok());
        match byte {
            Some(b) if (32..=126).contains(&b) => current.push(b as char),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs.retain(|run| !run.trim().is_empty());
    runs
}

/// Decode one raw `getAuctionDetails` result.
///
/// Pure function of its input. Never panics on malformed data: an
/// unusable head is surfaced as [`DetailsOutcome::Raw`], and any failure
/// locating the dynamic strings degrades to the printable-ASCII scan with
/// the outcome labeled accordingly.
pub fn decode_auction_details(raw: &RawResult) -> DetailsOutcome {
    if raw.is_empty_data() {
        return DetailsOutcome::Empty;
    }

    let fields = split_fields(raw);
    if fields.is_empty() {
        return DetailsOutcome::Empty;
    }

    let head = match decode_head(&fields) {
        Ok(head) => head,
        Err(err) => {
            return DetailsOutcome::Raw {
                raw_result: raw.as_str().to_string(),
                decode_error: err.to_string(),
            };
        }
    };

    let hex_data = raw.hex_data();
    let (strings, recovery) = match decode_strings(hex_data, &fields) {
        Ok(strings) => (strings, StringRecovery::Offsets),
        Err(err) => {
            tracing::debug!("string decode failed, scanning payload tail: {err}");
            let mut runs = scan_printable_runs(hex_data, HEAD_FIELDS).into_iter();
            let mut next = || runs.next().unwrap_or_default();
            ([next(), next(), next()], StringRecovery::AsciiScan)
        }
    };
    let [name, description, status] = strings;

    DetailsOutcome::Details(AuctionDetails {
        owner: head.owner,
        token_address: head.token_address,
        start_time: head.start_time,
        duration: head.duration,
        end_time: head.end_time,
        start_price: head.start_price,
        min_price: head.min_price,
        current_price: head.current_price,
        tokens_sold: head.tokens_sold,
        total_tokens: head.total_tokens,
        is_active: head.is_active,
        time_remaining: head.time_remaining,
        name,
        description,
        status,
        string_recovery: Some(recovery),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_u64(value: u64) -> String {
        format!("{value:064x}")
    }

    fn word_u256(value: U256) -> String {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        hex::encode(buf)
    }

    fn word_address(plain_hex: &str) -> String {
        format!("{:0>64}", plain_hex)
    }

    /// ABI-encode one dynamic string: 32-byte length, then data padded to a
    /// 32-byte boundary.
    fn encoded_string(text: &str) -> String {
        let mut data = hex::encode(text.as_bytes());
        while data.len() % FIELD_HEX_LEN != 0 {
            data.push('0');
        }
        format!("{}{}", word_u64(text.len() as u64), data)
    }

    /// Payload with strings "Alpha"/"Beta"/"Gamma" and known numerics.
    /// String region starts right after the 15-field head (byte 480), one
    /// length word plus one padded data word per string.
    fn sample_payload(name_offset: u64) -> String {
        let mut p = String::from("0x");
        p.push_str(&word_u64(name_offset)); // name offset (480 when valid)
        p.push_str(&word_u64(544)); // description offset
        p.push_str(&word_u64(608)); // status offset
        p.push_str(&word_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")); // owner
        p.push_str(&word_address("fb6916095ca1df60bb79ce92ce3ea74c37c5d359")); // token
        p.push_str(&word_u64(1_650_000_000)); // start time
        p.push_str(&word_u64(604_800)); // duration
        p.push_str(&word_u64(1_650_604_800)); // end time
        p.push_str(&word_u256(U256::from(5_000_000_000_000_000_000u128))); // start price
        p.push_str(&word_u256(U256::from(1_000_000_000_000_000_000u128))); // min price
        p.push_str(&word_u256(U256::from(3_500_000_000_000_000_000u128))); // current price
        p.push_str(&word_u256(U256::from(3_000_000_000_000_000_000u128))); // tokens sold
        p.push_str(&word_u256(U256::from(10_000_000_000_000_000_000u128))); // total tokens
        p.push_str(&word_u64(1)); // active
        p.push_str(&word_u64(345_600)); // time remaining
        p.push_str(&encoded_string("Alpha"));
        p.push_str(&encoded_string("Beta"));
        p.push_str(&encoded_string("Gamma"));
        p
    }

    fn expect_details(outcome: DetailsOutcome) -> AuctionDetails {
        match outcome {
            DetailsOutcome::Details(details) => details,
            other => panic!("expected decoded details, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_structured_payload_exactly() {
        let raw = RawResult::new(sample_payload(480));
        let details = expect_details(decode_auction_details(&raw));

        assert_eq!(details.owner, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(
            details.token_address,
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
        assert_eq!(details.start_time, 1_650_000_000);
        assert_eq!(details.duration, 604_800);
        assert_eq!(details.end_time, 1_650_604_800);
        assert_eq!(
            details.start_price,
            U256::from(5_000_000_000_000_000_000u128)
        );
        assert_eq!(details.min_price, U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(
            details.current_price,
            U256::from(3_500_000_000_000_000_000u128)
        );
        assert_eq!(
            details.tokens_sold,
            U256::from(3_000_000_000_000_000_000u128)
        );
        assert_eq!(
            details.total_tokens,
            U256::from(10_000_000_000_000_000_000u128)
        );
        assert!(details.is_active);
        assert_eq!(details.time_remaining, 345_600);
        assert_eq!(details.name, "Alpha");
        assert_eq!(details.description, "Beta");
        assert_eq!(details.status, "Gamma");
        assert_eq!(details.string_recovery, Some(StringRecovery::Offsets));
    }

    #[test]
    fn test_corrupted_offset_falls_back_to_scan() {
        // Name offset points far past the payload end.
        let raw = RawResult::new(sample_payload(0x4000));
        let details = expect_details(decode_auction_details(&raw));

        assert_eq!(details.string_recovery, Some(StringRecovery::AsciiScan));
        // The scan still recovers the three names from the tail.
        assert_eq!(details.name, "Alpha");
        assert_eq!(details.description, "Beta");
        assert_eq!(details.status, "Gamma");
        // Head numerics are unaffected by the string failure.
        assert_eq!(details.start_time, 1_650_000_000);
    }

    #[test]
    fn test_non_utf8_string_data_falls_back() {
        // Valid offsets, but the name data bytes are not UTF-8.
        let mut p = sample_payload(480);
        // Overwrite the first data word of "Alpha" (after its length word)
        // with invalid UTF-8 lead bytes.
        let data_start = 2 + 16 * FIELD_HEX_LEN;
        p.replace_range(data_start..data_start + 10, "fffefffeff");
        let details = expect_details(decode_auction_details(&RawResult::new(p)));
        assert_eq!(details.string_recovery, Some(StringRecovery::AsciiScan));
    }

    #[test]
    fn test_truncated_head_yields_raw_outcome() {
        let raw = RawResult::new(format!("0x{}{}", word_u64(1), word_u64(2)));
        match decode_auction_details(&raw) {
            DetailsOutcome::Raw {
                raw_result,
                decode_error,
            } => {
                assert_eq!(raw_result, raw.as_str());
                assert!(decode_error.contains("got 2"));
            }
            other => panic!("expected raw outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_result_is_empty_outcome() {
        assert_eq!(
            decode_auction_details(&RawResult::new("0x")),
            DetailsOutcome::Empty
        );
        assert_eq!(
            decode_auction_details(&RawResult::new("")),
            DetailsOutcome::Empty
        );
    }

    #[test]
    fn test_scan_splits_runs_on_non_printable_bytes() {
        // "Hi" 0x00 "There" must yield exactly two runs, in order.
        let hex_data = format!(
            "{}00{}",
            hex::encode("Hi".as_bytes()),
            hex::encode("There".as_bytes())
        );
        assert_eq!(scan_printable_runs(&hex_data, 0), vec!["Hi", "There"]);
    }

    #[test]
    fn test_scan_discards_whitespace_only_runs() {
        // "  " 0x00 "Live"
        let hex_data = format!("202000{}", hex::encode("Live".as_bytes()));
        assert_eq!(scan_printable_runs(&hex_data, 0), vec!["Live"]);
    }

    #[test]
    fn test_scan_skips_leading_fields() {
        let mut hex_data = word_u64(7); // one head field, not part of the scan
        hex_data.push_str(&hex::encode("Tail".as_bytes()));
        assert_eq!(scan_printable_runs(&hex_data, 1), vec!["Tail"]);
        assert!(scan_printable_runs(&hex_data, 2).is_empty());
    }

    #[test]
    fn test_details_serialize_prices_as_decimal_strings() {
        let raw = RawResult::new(sample_payload(480));
        let details = expect_details(decode_auction_details(&raw));
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["startPrice"], "5000000000000000000");
        assert_eq!(json["totalTokens"], "10000000000000000000");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["stringRecovery"], "offsets");
    }

    #[test]
    fn test_embedded_nuls_are_stripped() {
        // A string whose declared length covers its zero padding decodes
        // with the padding removed.
        let mut p = String::from("0x");
        p.push_str(&word_u64(480));
        p.push_str(&word_u64(544));
        p.push_str(&word_u64(608));
        for _ in 3..HEAD_FIELDS {
            p.push_str(&word_u64(0));
        }
        // Declared length 32: "Live" plus 28 NUL bytes.
        p.push_str(&word_u64(32));
        p.push_str(&format!("{:0<64}", hex::encode("Live".as_bytes())));
        p.push_str(&encoded_string("x"));
        p.push_str(&encoded_string("y"));

        let details = expect_details(decode_auction_details(&RawResult::new(p)));
        assert_eq!(details.name, "Live");
        assert_eq!(details.string_recovery, Some(StringRecovery::Offsets));
    }
}
