//! Prefix-bound validators for identifier fields.

use std::borrow::Cow;

use crate::error::IdError;
use crate::types::{is_valid_prefix, to_uuidbase62, IdInput, UuidBase62};

/// A validator bound to a single, non-empty prefix.
///
/// Holding one of these is how a field declares which kind of identifier it
/// accepts: every value passed through [`UuidBase62Field::validate`] must carry
/// (or be encoded with) the bound prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UuidBase62Field {
    prefix: Cow<'static, str>,
}

impl UuidBase62Field {
    /// Binds a validator to `prefix` at compile time.
    ///
    /// Used by [`define_uuidbase62!`](crate::define_uuidbase62), which checks
    /// the prefix in a const context before calling this.
    #[doc(hidden)]
    #[must_use]
    pub const fn from_static(prefix: &'static str) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
        }
    }

    /// The bound prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Converts `value` into an identifier carrying the bound prefix.
    pub fn validate<'a>(&self, value: impl Into<IdInput<'a>>) -> Result<UuidBase62, IdError> {
        to_uuidbase62(value, Some(self.prefix()))
    }
}

/// Creates a validator bound to `prefix`.
///
/// Fails with [`IdError::MissingPrefix`] when `prefix` is empty or contains
/// characters outside `[a-zA-Z0-9_]`.
pub fn con_uuidbase62(prefix: impl Into<String>) -> Result<UuidBase62Field, IdError> {
    let prefix = prefix.into();
    if !is_valid_prefix(&prefix) {
        return Err(IdError::MissingPrefix { prefix });
    }

    Ok(UuidBase62Field {
        prefix: Cow::Owned(prefix),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    const UUID_STR: &str = "f8711c37-c1d1-4961-ba3c-98cdc5b4fda8";
    const PREFIXED: &str = "my_prefix_7yNMTpVy8ddRxYKGJqtk7e";

    #[rstest]
    #[case("")]
    #[case("my prefix")]
    #[case("my-prefix")]
    #[case("cust!")]
    fn test_con_uuidbase62_rejects_prefix(#[case] prefix: &str) {
        let err = con_uuidbase62(prefix).unwrap_err();
        assert_eq!(
            err,
            IdError::MissingPrefix {
                prefix: prefix.to_string()
            }
        );
    }

    #[rstest]
    #[case(IdInput::Uuid(Uuid::parse_str(UUID_STR).unwrap()))]
    #[case(IdInput::Str(UUID_STR))]
    #[case(IdInput::Str(PREFIXED))]
    fn test_field_validate(#[case] input: IdInput<'static>) {
        let field = con_uuidbase62("my_prefix").unwrap();

        let id = field.validate(input).unwrap();

        assert_eq!(id, PREFIXED);
        assert_eq!(id.prefix(), Some("my_prefix"));
        assert_eq!(id.base62(), "7yNMTpVy8ddRxYKGJqtk7e");
        assert_eq!(id.uuid(), Uuid::parse_str(UUID_STR).unwrap());
    }

    #[test]
    fn test_field_validate_missing_prefix() {
        let field = con_uuidbase62("my_prefix").unwrap();

        let err = field.validate("invalid-value").unwrap_err();

        assert!(err
            .to_string()
            .contains("Field's expected 'my_prefix' prefix does not match given prefix ''"));
    }

    #[test]
    fn test_field_validate_invalid_body() {
        let field = con_uuidbase62("my_prefix").unwrap();

        let err = field.validate("my_prefix_invalid-value").unwrap_err();

        assert!(err.to_string().contains("Value contains invalid characters"));
    }

    #[test]
    fn test_field_rejects_value_bound_elsewhere() {
        let customers = con_uuidbase62("cust").unwrap();
        let invoices = con_uuidbase62("inv").unwrap();
        let id = customers.validate(Uuid::new_v4()).unwrap();

        let err = invoices.validate(id).unwrap_err();

        assert_eq!(
            err,
            IdError::PrefixMismatch {
                expected: "inv".to_string(),
                actual: "cust".to_string()
            }
        );
    }

    #[test]
    fn test_from_static_matches_checked() {
        assert_eq!(
            UuidBase62Field::from_static("cust"),
            con_uuidbase62("cust").unwrap()
        );
    }
}
