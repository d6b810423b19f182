//! Declared-schema decoding for the `getAuction` / `getAllAuctions` shapes.
//!
//! Unlike the details payload, these results are decoded with `ethabi`
//! against a declared return type. The schema is provisional until verified
//! against the contract ABI, so a failed decode is never an error: the raw
//! payload is handed back with a marker instead.

use super::address::to_checksum_address;
use super::decode::serialize_u256;
use super::fields::RawResult;
use ethabi::{ParamType, Token};
use ethereum_types::U256;
use serde::Serialize;

/// A value that decoded against the declared schema, or the raw payload
/// plus the failure reason when it did not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decoded<T> {
    Value(T),
    #[serde(rename_all = "camelCase")]
    Raw {
        raw_result: String,
        decode_error: String,
    },
}

/// One auction as returned by `getAuction` / `getAllAuctions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub name: String,
    pub description: String,
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
    pub time_remaining: u64,
    #[serde(serialize_with = "serialize_u256")]
    pub tokens_sold: U256,
    #[serde(serialize_with = "serialize_u256")]
    pub tokens_total: U256,
    pub is_active: bool,
    pub status: String,
}

/// Declared return schema for one auction tuple.
fn auction_tuple() -> Vec<ParamType> {
    vec![
        ParamType::Address,   // owner
        ParamType::Address,   // token
        ParamType::Uint(256), // start time
        ParamType::Uint(256), // duration
        ParamType::Uint(256), // end time
        ParamType::Uint(256), // start price
        ParamType::Uint(256), // min price
        ParamType::Uint(256), // current price
        ParamType::Uint(256), // tokens sold
        ParamType::Uint(256), // tokens total
        ParamType::Bool,      // active
        ParamType::Uint(256), // time remaining
        ParamType::String,    // name
        ParamType::String,    // description
        ParamType::String,    // status
    ]
}

/// Decode a single-auction result. `None` when the call returned no data.
pub fn decode_auction(raw: &RawResult) -> Option<Decoded<AuctionSummary>> {
    if raw.is_empty_data() {
        return None;
    }
    let schema = ParamType::Tuple(auction_tuple());
    Some(
        match decode_token(raw, schema).and_then(summary_from_token) {
            Ok(summary) => Decoded::Value(summary),
            Err(decode_error) => raw_marker(raw, decode_error),
        },
    )
}

/// Decode a `getAllAuctions` result. No data decodes as an empty list.
pub fn decode_auction_list(raw: &RawResult) -> Decoded<Vec<AuctionSummary>> {
    if raw.is_empty_data() {
        return Decoded::Value(Vec::new());
    }
    let schema = ParamType::Array(Box::new(ParamType::Tuple(auction_tuple())));
    let decoded = decode_token(raw, schema).and_then(|token| match token {
        Token::Array(items) => items
            .into_iter()
            .map(summary_from_token)
            .collect::<Result<Vec<_>, _>>(),
        other => Err(format!("expected an array of tuples, got {other:?}")),
    });
    match decoded {
        Ok(summaries) => Decoded::Value(summaries),
        Err(decode_error) => raw_marker(raw, decode_error),
    }
}

fn raw_marker<T>(raw: &RawResult, decode_error: String) -> Decoded<T> {
    Decoded::Raw {
        raw_result: raw.as_str().to_string(),
        decode_error,
    }
}

fn decode_token(raw: &RawResult, schema: ParamType) -> Result<Token, String> {
    let bytes = hex::decode(raw.hex_data()).map_err(|e| format!("invalid hex: {e}"))?;
    let mut tokens = ethabi::decode(&[schema], &bytes).map_err(|e| e.to_string())?;
    tokens.pop().ok_or_else(|| "empty decode result".to_string())
}

fn summary_from_token(token: Token) -> Result<AuctionSummary, String> {
    let Token::Tuple(tokens) = token else {
        return Err(format!("expected a tuple, got {token:?}"));
    };
    let [
        owner,
        token_address,
        start_time,
        duration,
        end_time,
        start_price,
        min_price,
        current_price,
        tokens_sold,
        tokens_total,
        is_active,
        time_remaining,
        name,
        description,
        status,
    ]: [Token; 15] = tokens
        .try_into()
        .map_err(|t: Vec<Token>| format!("expected 15 tuple members, got {}", t.len()))?;

    Ok(AuctionSummary {
        id: None,
        owner: Some(address(owner, "owner")?),
        name: string(name, "name")?,
        description: string(description, "description")?,
        token_address: address(token_address, "token address")?,
        start_time: uint64(start_time, "start time")?,
        duration: uint64(duration, "duration")?,
        end_time: uint64(end_time, "end time")?,
        start_price: uint(start_price, "start price")?,
        min_price: uint(min_price, "min price")?,
        current_price: uint(current_price, "current price")?,
        time_remaining: uint64(time_remaining, "time remaining")?,
        tokens_sold: uint(tokens_sold, "tokens sold")?,
        tokens_total: uint(tokens_total, "tokens total")?,
        is_active: boolean(is_active, "active flag")?,
        status: string(status, "status")?,
    })
}

fn address(token: Token, what: &str) -> Result<String, String> {
    token
        .into_address()
        .map(|a| to_checksum_address(&a))
        .ok_or_else(|| format!("{what} is not an address"))
}

fn uint(token: Token, what: &str) -> Result<U256, String> {
    token
        .into_uint()
        .ok_or_else(|| format!("{what} is not an integer"))
}

fn uint64(token: Token, what: &str) -> Result<u64, String> {
    let value = uint(token, what)?;
    if value > U256::from(u64::MAX) {
        return Err(format!("{what} does not fit in 64 bits"));
    }
    Ok(value.as_u64())
}

fn boolean(token: Token, what: &str) -> Result<bool, String> {
    token
        .into_bool()
        .ok_or_else(|| format!("{what} is not a boolean"))
}

fn string(token: Token, what: &str) -> Result<String, String> {
    token
        .into_string()
        .ok_or_else(|| format!("{what} is not a string"))
}
