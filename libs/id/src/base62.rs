//! Base62 numeral codec over 128-bit UUID values.
//!
//! The alphabet order (digits, lowercase, uppercase) defines digit values
//! 0..=61 and is part of the external format. It contains no underscore,
//! which is what makes splitting a canonical string at its last underscore
//! unambiguous.

use uuid::Uuid;

use crate::error::{DecodeError, IdError};
use crate::types::IdInput;

/// The 62 digit symbols, in digit-value order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number base of the codec.
const BASE: u128 = ALPHABET.len() as u128;

/// Length of the longest encoding (`u128::MAX`).
pub const MAX_ENCODED_LEN: usize = 22;

/// Encodes a UUID as a base62 numeral, most significant digit first.
///
/// No padding is applied: the nil UUID encodes to `"0"` and the output
/// grows with magnitude up to [`MAX_ENCODED_LEN`] characters.
#[must_use]
pub fn encode(uuid: Uuid) -> String {
    let mut num = uuid.as_u128();
    if num == 0 {
        return char::from(ALPHABET[0]).to_string();
    }

    let mut digits = Vec::with_capacity(MAX_ENCODED_LEN);
    while num > 0 {
        digits.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Parses `value` as UUID text and encodes it.
pub fn encode_str(value: &str) -> Result<String, IdError> {
    let uuid = Uuid::parse_str(value).map_err(|_| IdError::InvalidUuidInput)?;
    Ok(encode(uuid))
}

/// Encodes any accepted input shape.
///
/// An identifier yields its existing base62 body without re-encoding.
pub fn encode_input<'a>(value: impl Into<IdInput<'a>>) -> Result<String, IdError> {
    match value.into() {
        IdInput::Uuid(uuid) => Ok(encode(uuid)),
        IdInput::Str(s) => encode_str(s),
        IdInput::Id(id) => Ok(id.base62().to_string()),
    }
}

/// Decodes a big-endian base62 numeral into a UUID.
///
/// Values that do not fit in 128 bits are rejected with
/// [`DecodeError::Overflow`] rather than truncated.
pub fn decode(value: &str) -> Result<Uuid, DecodeError> {
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut num: u128 = 0;
    for (position, character) in value.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;
        num = num
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(u128::from(digit)))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(Uuid::from_u128(num))
}

/// Decodes any accepted input shape.
///
/// UUIDs pass through and identifiers yield their bound UUID.
pub fn decode_input<'a>(value: impl Into<IdInput<'a>>) -> Result<Uuid, IdError> {
    match value.into() {
        IdInput::Uuid(uuid) => Ok(uuid),
        IdInput::Str(s) => Ok(decode(s)?),
        IdInput::Id(id) => Ok(id.uuid()),
    }
}

fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='z' => Some(c as u8 - b'a' + 10),
        'A'..='Z' => Some(c as u8 - b'A' + 36),
        _ => None,
    }
}
