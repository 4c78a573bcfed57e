//! Field-name lookup for models that carry identifier fields.

use crate::error::IdError;
use crate::field::UuidBase62Field;
use crate::types::{IdInput, UuidBase62};

/// A schema that can resolve a field name to its identifier validator.
///
/// # Example
///
/// ```
/// use uuidbase62_id::{define_uuidbase62, UuidBase62Field, UuidBase62Model};
///
/// define_uuidbase62!(ClientId, "client");
///
/// struct Item {
///     client_id: ClientId,
/// }
///
/// impl UuidBase62Model for Item {
///     fn uuidbase62_field(field: &str) -> Option<UuidBase62Field> {
///         match field {
///             "client_id" => Some(ClientId::field()),
///             _ => None,
///         }
///     }
/// }
///
/// let id = Item::to_uuidbase62("client_id", "client_7yNMTpVy8ddRxYKGJqtk7e").unwrap();
/// assert_eq!(id.prefix(), Some("client"));
/// ```
pub trait UuidBase62Model {
    /// Returns the validator for `field`, or `None` if it is not an
    /// identifier field.
    fn uuidbase62_field(field: &str) -> Option<UuidBase62Field>;

    /// Validates `value` against the prefix bound to `field`.
    fn to_uuidbase62<'a>(
        field: &str,
        value: impl Into<IdInput<'a>>,
    ) -> Result<UuidBase62, IdError> {
        let validator = Self::uuidbase62_field(field).ok_or_else(|| IdError::UnknownField {
            field: field.to_string(),
        })?;
        validator.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::con_uuidbase62;
    use rstest::rstest;
    use uuid::Uuid;

    const UUID_STR: &str = "f8711c37-c1d1-4961-ba3c-98cdc5b4fda8";
    const PREFIXED: &str = "my_prefix_7yNMTpVy8ddRxYKGJqtk7e";

    struct ValidPrefixModel;

    impl UuidBase62Model for ValidPrefixModel {
        fn uuidbase62_field(field: &str) -> Option<UuidBase62Field> {
            match field {
                "id" => con_uuidbase62("my_prefix").ok(),
                _ => None,
            }
        }
    }

    #[rstest]
    #[case(IdInput::Uuid(Uuid::parse_str(UUID_STR).unwrap()))]
    #[case(IdInput::Str(UUID_STR))]
    #[case(IdInput::Str(PREFIXED))]
    fn test_model_to_uuidbase62(#[case] input: IdInput<'static>) {
        let id = ValidPrefixModel::to_uuidbase62("id", input).unwrap();

        assert!(id.as_str().starts_with("my_prefix_"));
        assert_eq!(id, PREFIXED);
        assert_eq!(id.uuid(), Uuid::parse_str(UUID_STR).unwrap());
        assert_eq!(id.prefix(), Some("my_prefix"));
        assert_eq!(id.base62(), PREFIXED.rsplit_once('_').unwrap().1);
    }

    #[test]
    fn test_model_unknown_field() {
        let err = ValidPrefixModel::to_uuidbase62("name", PREFIXED).unwrap_err();

        assert_eq!(
            err,
            IdError::UnknownField {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_model_prefix_mismatch() {
        let err =
            ValidPrefixModel::to_uuidbase62("id", "different_prefix_7yNMTpVy8ddRxYKGJqtk7e")
                .unwrap_err();

        assert!(err.is_prefix_error());
    }
}
