//! # uuidbase62-http
//!
//! Boundary adapter between `axum` and `uuidbase62-id`.
//!
//! A route declares which request parameter holds an identifier and which
//! prefix it must carry. Malformed identifiers, identifiers with a foreign
//! prefix and missing identifiers are all answered with `404 Not Found`, so
//! callers cannot probe which prefixes exist.

mod error;
mod middleware;
mod param;

pub use error::{ApiError, ProblemDetails};
pub use middleware::{validate_param, ValidatedIds, MAX_BODY_BYTES};
pub use param::{get_validated_uuidbase62, get_validated_uuidbase62_by_model, IdParam, ParamSource};
