//! # uuidbase62-id
//!
//! Prefixed, base62-encoded UUID identifiers ("Stripe-style IDs").
//!
//! ## ID Format
//!
//! An identifier is `{prefix}_{base62}` or, without a prefix, just `{base62}`:
//!
//! - `cust_7yNMTpVy8ddRxYKGJqtk7e`
//! - `inv_1WfVMU43m1UQUtAHULNBzd`
//! - `7yNMTpVy8ddRxYKGJqtk7e`
//!
//! The body is the UUID's 128-bit value written as a base62 numeral with no
//! padding (1 to 22 characters). The base62 alphabet has no underscore, so the
//! last underscore always separates prefix from body.
//!
//! ## Prefix binding
//!
//! A value remembers the prefix it was validated against. Re-validating with
//! the same prefix returns the value unchanged; validating with a different
//! prefix fails. This binds an identifier to the field it may populate.
//!
//! The encoding is a positional numeral conversion, not obfuscation.

pub mod base62;
mod error;
mod field;
mod macros;
mod model;
mod types;

pub use error::{DecodeError, IdError};
pub use field::{con_uuidbase62, UuidBase62Field};
pub use model::UuidBase62Model;
pub use types::*;

/// Re-export uuid for consumers and for [`define_uuidbase62!`].
pub use uuid::Uuid;
