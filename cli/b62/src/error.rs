//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use uuidbase62_id::IdError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown output format '{0}'; expected 'table' or 'json'")]
    InvalidFormat(String),

    #[error("Count must be at least 1")]
    InvalidCount,

    #[error(transparent)]
    Id(#[from] IdError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let Some(CliError::Id(id_err)) = err.downcast_ref::<CliError>() else {
        return;
    };

    let hint = match id_err {
        IdError::PrefixMismatch { actual, .. } if actual.is_empty() => {
            "Hint: the value has no prefix; pass the full `{prefix}_{base62}` form."
        }
        IdError::PrefixMismatch { .. } => {
            "Hint: the identifier belongs to a different kind of resource."
        }
        IdError::InvalidCharacters => "Hint: base62 bodies use only 0-9, a-z and A-Z.",
        IdError::InvalidUuidInput => {
            "Hint: expected a UUID such as 3fbae77c-5852-47cb-a82f-aeebc6ee3f43."
        }
        IdError::MissingPrefix { .. } => "Hint: prefixes may only contain A-Z, a-z, 0-9 and _.",
        IdError::UnknownField { .. } => return,
    };
    eprintln!("\n{}", hint.yellow());
}
