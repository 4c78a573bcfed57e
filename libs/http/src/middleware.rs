//! `axum` middleware that validates identifier parameters before the handler
//! runs.
//!
//! ```ignore
//! let item_id = get_validated_uuidbase62("item_id", Some("item"), ParamSource::Path)?;
//!
//! let app = Router::new()
//!     .route("/items/{item_id}", get(get_item))
//!     .route_layer(middleware::from_fn_with_state(item_id, validate_param));
//!
//! async fn get_item(ids: ValidatedIds) -> impl IntoResponse {
//!     let item_id = ids.get("item_id");
//!     // ...
//! }
//! ```

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{FromRequestParts, Query, RawPathParams, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuidbase62_id::UuidBase62;

use crate::error::ApiError;
use crate::param::{not_found, IdParam, ParamSource};

/// Largest JSON body read when the identifier comes from the body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Identifiers validated by [`validate_param`], keyed by parameter name.
#[derive(Debug, Clone, Default)]
pub struct ValidatedIds(HashMap<String, UuidBase62>);

impl ValidatedIds {
    /// The validated identifier for `param`.
    pub fn get(&self, param: &str) -> Option<&UuidBase62> {
        self.0.get(param)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S> FromRequestParts<S> for ValidatedIds
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<ValidatedIds>().cloned().ok_or_else(|| {
            ApiError::internal(
                "identifier_validation_missing",
                "Route has no identifier validation layer",
            )
        })
    }
}

/// Validates the identifier described by `param` and stores it in the
/// request's [`ValidatedIds`].
///
/// Missing and invalid identifiers are both answered with 404.
pub async fn validate_param(
    State(param): State<IdParam>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();

    let (raw, body) = match param.source {
        ParamSource::Body => {
            let bytes = to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|_| ApiError::bad_request("invalid_body", "Request body could not be read"))?;
            let raw = from_json_body(&bytes, &param.param);
            (raw, Body::from(bytes))
        }
        _ => (from_parts(&mut parts, &param).await, body),
    };

    let Some(raw) = raw else {
        warn!(
            param = %param.param,
            source = param.source.as_str(),
            "Identifier parameter missing from request"
        );
        return Err(not_found(format!("missing parameter '{}'", param.param)));
    };

    let id = param.validate(&raw)?;

    let mut ids = parts.extensions.remove::<ValidatedIds>().unwrap_or_default();
    ids.0.insert(param.param.clone(), id);
    parts.extensions.insert(ids);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

async fn from_parts(parts: &mut Parts, param: &IdParam) -> Option<String> {
    match param.source {
        ParamSource::Path => {
            let params = RawPathParams::from_request_parts(parts, &()).await.ok()?;
            params
                .iter()
                .find(|(name, _)| *name == param.param)
                .map(|(_, value)| value.to_string())
        }
        ParamSource::Query => {
            let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri).ok()?;
            query.get(&param.param).cloned()
        }
        ParamSource::Header => parts
            .headers
            .get(&param.param)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        ParamSource::Body => None,
    }
}

fn from_json_body(bytes: &Bytes, name: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value.get(name)?.as_str().map(|s| s.to_string())
}
