//! Request parameter bindings for identifier validation.

use axum::http::StatusCode;
use serde::{Deserialize, Deserializer};
use tracing::debug;
use uuidbase62_id::{is_valid_prefix, to_uuidbase62, IdError, UuidBase62, UuidBase62Model};

use crate::error::{reason, ApiError};

/// Where in the request the raw identifier is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    /// A named path segment (`/items/{item_id}`).
    #[default]
    Path,
    /// A query string parameter.
    Query,
    /// A request header.
    Header,
    /// A top-level string field of a JSON body.
    Body,
}

impl ParamSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamSource::Path => "path",
            ParamSource::Query => "query",
            ParamSource::Header => "header",
            ParamSource::Body => "body",
        }
    }
}

/// Binds a request parameter to the prefix its identifier must carry.
///
/// Can be built in code with [`get_validated_uuidbase62`] or loaded from a
/// service's configuration:
///
/// ```
/// # use uuidbase62_http::{IdParam, ParamSource};
/// let param: IdParam =
///     serde_json::from_str(r#"{"param": "item_id", "prefix": "item", "source": "query"}"#)
///         .unwrap();
/// assert_eq!(param.source, ParamSource::Query);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdParam {
    /// Name of the request parameter.
    pub param: String,
    /// Prefix the identifier must carry, if any.
    #[serde(default, deserialize_with = "deserialize_prefix")]
    pub prefix: Option<String>,
    /// Where the parameter is read from.
    #[serde(default)]
    pub source: ParamSource,
}

impl IdParam {
    /// Validates a raw request value.
    ///
    /// Every validation failure becomes a 404 so that malformed or foreign
    /// identifiers are indistinguishable from absent resources.
    pub fn validate(&self, raw: &str) -> Result<UuidBase62, ApiError> {
        to_uuidbase62(raw, self.prefix.as_deref()).map_err(|e| {
            debug!(
                param = %self.param,
                source = self.source.as_str(),
                error = %e,
                "Rejected identifier parameter"
            );
            not_found(&e)
        })
    }
}

/// Binds `param` to `prefix`.
///
/// Fails with [`IdError::MissingPrefix`] if `prefix` is not a valid prefix.
/// An empty prefix means no prefix.
pub fn get_validated_uuidbase62(
    param: impl Into<String>,
    prefix: Option<&str>,
    source: ParamSource,
) -> Result<IdParam, IdError> {
    Ok(IdParam {
        param: param.into(),
        prefix: bound_prefix(prefix.map(str::to_string))?,
        source,
    })
}

/// Binds `param` to the prefix declared for `field` on model `M`.
///
/// Fails with [`IdError::UnknownField`] if `M` has no identifier field of
/// that name.
pub fn get_validated_uuidbase62_by_model<M: UuidBase62Model>(
    field: &str,
    param: impl Into<String>,
    source: ParamSource,
) -> Result<IdParam, IdError> {
    let validator = M::uuidbase62_field(field).ok_or_else(|| IdError::UnknownField {
        field: field.to_string(),
    })?;

    Ok(IdParam {
        param: param.into(),
        prefix: Some(validator.prefix().to_string()),
        source,
    })
}

fn bound_prefix(prefix: Option<String>) -> Result<Option<String>, IdError> {
    match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) if !is_valid_prefix(&prefix) => Err(IdError::MissingPrefix { prefix }),
        prefix => Ok(prefix),
    }
}

fn deserialize_prefix<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let prefix = Option::<String>::deserialize(deserializer)?;
    bound_prefix(prefix).map_err(serde::de::Error::custom)
}

pub(crate) fn not_found(detail: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(
        "not_found",
        format!("{}; {}", reason(StatusCode::NOT_FOUND), detail),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuidbase62_id::{con_uuidbase62, UuidBase62Field};

    struct Item;

    impl UuidBase62Model for Item {
        fn uuidbase62_field(field: &str) -> Option<UuidBase62Field> {
            match field {
                "client_id" => con_uuidbase62("my_prefix").ok(),
                _ => None,
            }
        }
    }

    const PREFIXED: &str = "my_prefix_7yNMTpVy8ddRxYKGJqtk7e";

    #[test]
    fn test_validate_valid_input() {
        let param =
            get_validated_uuidbase62("item_id", Some("my_prefix"), ParamSource::Path).unwrap();

        let id = param.validate(PREFIXED).unwrap();

        assert_eq!(id, PREFIXED);
        assert_eq!(id.prefix(), Some("my_prefix"));
    }

    #[test]
    fn test_validate_prefix_mismatch_is_not_found() {
        let param =
            get_validated_uuidbase62("item_id", Some("different_prefix"), ParamSource::Path)
                .unwrap();

        let err = param.validate(PREFIXED).unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(
            err.problem.detail,
            "Not Found; Field's expected 'different_prefix' prefix does not match given prefix 'my_prefix'"
        );
    }

    #[test]
    fn test_validate_invalid_characters_is_not_found() {
        let param = get_validated_uuidbase62("item_id", None, ParamSource::Query).unwrap();

        let err = param.validate("invalid-value").unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.problem.detail, "Not Found; Value contains invalid characters");
    }

    #[test]
    fn test_by_model_valid_input() {
        let param =
            get_validated_uuidbase62_by_model::<Item>("client_id", "item_id", ParamSource::Path)
                .unwrap();

        let id = param.validate(PREFIXED).unwrap();

        assert_eq!(id.as_str(), PREFIXED);
        assert_eq!(id.prefix(), Some("my_prefix"));
    }

    #[test]
    fn test_by_model_invalid_input() {
        let param =
            get_validated_uuidbase62_by_model::<Item>("client_id", "item_id", ParamSource::Path)
                .unwrap();

        let err = param
            .validate("different_prefix_7yNMTpVy8ddRxYKGJqtk7e")
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_by_model_unknown_field() {
        let err = get_validated_uuidbase62_by_model::<Item>("name", "item_id", ParamSource::Path)
            .unwrap_err();

        assert!(matches!(err, IdError::UnknownField { .. }));
    }

    #[test]
    fn test_param_defaults_from_config() {
        let param: IdParam = serde_json::from_str(r#"{"param": "item_id"}"#).unwrap();

        assert_eq!(param.prefix, None);
        assert_eq!(param.source, ParamSource::Path);
    }

    #[rstest]
    #[case("item-x")]
    #[case("bad prefix")]
    #[case("cust/")]
    fn test_invalid_prefix_rejected_when_bound(#[case] prefix: &str) {
        let err = get_validated_uuidbase62("item_id", Some(prefix), ParamSource::Path).unwrap_err();

        assert!(matches!(err, IdError::MissingPrefix { prefix: p } if p == prefix));
    }

    #[test]
    fn test_empty_prefix_binds_without_prefix() {
        let param = get_validated_uuidbase62("item_id", Some(""), ParamSource::Path).unwrap();

        assert_eq!(param.prefix, None);
        assert!(param.validate("7yNMTpVy8ddRxYKGJqtk7e").is_ok());
    }

    #[test]
    fn test_invalid_prefix_rejected_from_config() {
        let err = serde_json::from_str::<IdParam>(r#"{"param": "item_id", "prefix": "item-x"}"#)
            .unwrap_err();

        assert!(err.to_string().contains("item-x"));
    }

    #[test]
    fn test_null_prefix_from_config() {
        let param: IdParam =
            serde_json::from_str(r#"{"param": "item_id", "prefix": null}"#).unwrap();

        assert_eq!(param.prefix, None);
    }
}
