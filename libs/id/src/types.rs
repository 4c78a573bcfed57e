//! The prefixed base62 identifier value and its factory.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use uuid::Uuid;

use crate::base62;
use crate::error::IdError;

/// Separator between prefix and base62 body.
pub const SEPARATOR: char = '_';

/// A UUID rendered as `[{prefix}_]{base62}`.
///
/// Values are only created through [`to_uuidbase62`] (or the helpers built on
/// it) and are immutable afterwards. Equality, ordering and hashing use the
/// canonical string alone.
#[derive(Clone)]
pub struct UuidBase62 {
    value: String,
    prefix: Option<String>,
    body_start: usize,
    uuid: Uuid,
}

impl UuidBase62 {
    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The prefix this value was validated against, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The base62 body without prefix or separator.
    #[must_use]
    pub fn base62(&self) -> &str {
        &self.value[self.body_start..]
    }

    /// The UUID this identifier represents.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Length of the canonical string in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Always false; the base62 body has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Encodes `uuid`, prefixed with `prefix` unless it is empty.
    ///
    /// This is the raw-UUID branch of [`to_uuidbase62`] and cannot fail.
    #[must_use]
    pub fn from_uuid(uuid: Uuid, prefix: Option<&str>) -> Self {
        let body = base62::encode(uuid);
        let (value, body_start) = match prefix {
            Some(p) if !p.is_empty() => (format!("{p}{SEPARATOR}{body}"), p.len() + 1),
            _ => (body, 0),
        };

        Self {
            value,
            prefix: prefix.map(str::to_string),
            body_start,
            uuid,
        }
    }

    /// Consumes the identifier, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

/// The input shapes accepted by [`to_uuidbase62`].
#[derive(Debug, Clone)]
pub enum IdInput<'a> {
    /// A raw UUID.
    Uuid(Uuid),
    /// UUID text or a (possibly prefixed) base62 identifier.
    Str(&'a str),
    /// An already-validated identifier.
    Id(UuidBase62),
}

impl From<Uuid> for IdInput<'_> {
    fn from(uuid: Uuid) -> Self {
        IdInput::Uuid(uuid)
    }
}

impl<'a> From<&'a str> for IdInput<'a> {
    fn from(s: &'a str) -> Self {
        IdInput::Str(s)
    }
}

impl<'a> From<&'a String> for IdInput<'a> {
    fn from(s: &'a String) -> Self {
        IdInput::Str(s.as_str())
    }
}

impl From<UuidBase62> for IdInput<'_> {
    fn from(id: UuidBase62) -> Self {
        IdInput::Id(id)
    }
}

/// Converts `value` into an identifier, enforcing `prefix` when given.
///
/// - An identifier whose prefix agrees with `prefix` (or any identifier when
///   `prefix` is `None`) is returned as-is.
/// - A UUID, or a string that parses as UUID text, is freshly encoded and
///   prefixed with `prefix` unless it is empty.
/// - Any other string is split at its last underscore into prefix and body;
///   the found prefix must equal `prefix` and the body must decode.
///
/// The resulting value records `prefix` (the expected prefix), so a value
/// built without one never satisfies a later prefixed check.
pub fn to_uuidbase62<'a>(
    value: impl Into<IdInput<'a>>,
    prefix: Option<&str>,
) -> Result<UuidBase62, IdError> {
    let text = match value.into() {
        IdInput::Id(id) => return check_bound_prefix(id, prefix),
        IdInput::Uuid(uuid) => return Ok(UuidBase62::from_uuid(uuid, prefix)),
        IdInput::Str(text) => text,
    };

    if let Ok(uuid) = Uuid::parse_str(text) {
        return Ok(UuidBase62::from_uuid(uuid, prefix));
    }

    let (found_prefix, body_start) = match text.rfind(SEPARATOR) {
        Some(idx) => (&text[..idx], idx + SEPARATOR.len_utf8()),
        None => ("", 0),
    };

    if let Some(expected) = prefix {
        if expected != found_prefix {
            return Err(mismatch(expected, found_prefix));
        }
    }

    let uuid = base62::decode(&text[body_start..])?;

    Ok(UuidBase62 {
        value: text.to_string(),
        prefix: prefix.map(str::to_string),
        body_start,
        uuid,
    })
}

/// Creates an identifier for a fresh random (v4) UUID.
#[must_use]
pub fn generate(prefix: Option<&str>) -> UuidBase62 {
    UuidBase62::from_uuid(Uuid::new_v4(), prefix)
}

/// Creates an identifier for a fresh time-ordered (v7) UUID.
#[must_use]
pub fn generate_sortable(prefix: Option<&str>) -> UuidBase62 {
    UuidBase62::from_uuid(Uuid::now_v7(), prefix)
}

/// Returns true if `prefix` matches `^[a-zA-Z0-9_]+$`.
#[must_use]
pub const fn is_valid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return false;
        }
        i += 1;
    }
    true
}

fn check_bound_prefix(id: UuidBase62, prefix: Option<&str>) -> Result<UuidBase62, IdError> {
    match prefix {
        Some(expected) if id.prefix() != Some(expected) => {
            Err(mismatch(expected, id.prefix().unwrap_or_default()))
        }
        _ => Ok(id),
    }
}

fn mismatch(expected: &str, actual: &str) -> IdError {
    IdError::PrefixMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

impl fmt::Display for UuidBase62 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for UuidBase62 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UuidBase62({:?})", self.value)
    }
}

impl FromStr for UuidBase62 {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_uuidbase62(s, None)
    }
}

impl AsRef<str> for UuidBase62 {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<UuidBase62> for Uuid {
    fn from(id: UuidBase62) -> Self {
        id.uuid
    }
}

impl PartialEq for UuidBase62 {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for UuidBase62 {}

impl PartialEq<str> for UuidBase62 {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for UuidBase62 {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for UuidBase62 {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

impl PartialOrd for UuidBase62 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UuidBase62 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for UuidBase62 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl serde::Serialize for UuidBase62 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for UuidBase62 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        to_uuidbase62(&s, None).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
