//! Inspect and check commands.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use uuidbase62_id::{con_uuidbase62, to_uuidbase62, UuidBase62};

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Identifier or UUID to inspect.
    value: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Values to check against the prefix.
    #[arg(required = true)]
    values: Vec<String>,
}

/// Every part of an identifier.
#[derive(Debug, Serialize, Tabled)]
struct InspectRow {
    #[tabled(rename = "Field")]
    field: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Value")]
    value: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason")]
    reason: String,
}

pub fn inspect(ctx: CommandContext, args: InspectArgs) -> Result<()> {
    let id = to_uuidbase62(args.value.trim(), ctx.prefix()).map_err(CliError::from)?;

    print_output(&inspect_rows(&id), ctx.format);
    Ok(())
}

/// Validates each value against a prefix-bound field.
///
/// Fails if any value is rejected, after reporting all of them.
pub fn check(ctx: CommandContext, args: CheckArgs) -> Result<()> {
    let field = con_uuidbase62(ctx.prefix().unwrap_or_default()).map_err(CliError::from)?;

    let rows: Vec<CheckRow> = args
        .values
        .iter()
        .map(|value| match field.validate(value.trim()) {
            Ok(id) => {
                debug!(id = %id, "Identifier accepted");
                CheckRow {
                    value: value.clone(),
                    valid: true,
                    reason: String::new(),
                }
            }
            Err(e) => {
                debug!(value = %value, error = %e, "Identifier rejected");
                CheckRow {
                    value: value.clone(),
                    valid: false,
                    reason: e.to_string(),
                }
            }
        })
        .collect();

    let rejected = rows.iter().filter(|row| !row.valid).count();

    if ctx.format == OutputFormat::Json || rejected > 0 {
        print_output(&rows, ctx.format);
    }

    if rejected > 0 {
        anyhow::bail!("{rejected} of {} value(s) rejected", rows.len());
    }

    if ctx.format == OutputFormat::Table {
        print_success(&format!(
            "{} value(s) valid for prefix '{}'",
            rows.len(),
            field.prefix().bold()
        ));
    }
    Ok(())
}

fn inspect_rows(id: &UuidBase62) -> Vec<InspectRow> {
    let uuid = id.uuid();
    vec![
        InspectRow {
            field: "id",
            value: id.to_string(),
        },
        InspectRow {
            field: "prefix",
            value: id.prefix().unwrap_or_default().to_string(),
        },
        InspectRow {
            field: "base62",
            value: id.base62().to_string(),
        },
        InspectRow {
            field: "uuid",
            value: uuid.hyphenated().to_string(),
        },
        InspectRow {
            field: "uuid_version",
            value: uuid.get_version_num().to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_rows() {
        let id = to_uuidbase62("my_prefix_7yNMTpVy8ddRxYKGJqtk7e", Some("my_prefix")).unwrap();

        let rows = inspect_rows(&id);

        assert_eq!(rows[0].value, "my_prefix_7yNMTpVy8ddRxYKGJqtk7e");
        assert_eq!(rows[1].value, "my_prefix");
        assert_eq!(rows[2].value, "7yNMTpVy8ddRxYKGJqtk7e");
        assert_eq!(rows[3].value, "f8711c37-c1d1-4961-ba3c-98cdc5b4fda8");
        assert_eq!(rows[4].value, "4");
    }

    #[test]
    fn test_check_requires_prefix() {
        let ctx = CommandContext {
            format: OutputFormat::Json,
            prefix: None,
        };
        let args = CheckArgs {
            values: vec!["my_prefix_7yNMTpVy8ddRxYKGJqtk7e".to_string()],
        };

        let err = check(ctx, args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Id(uuidbase62_id::IdError::MissingPrefix { .. }))
        ));
    }

    #[test]
    fn test_check_reports_rejections() {
        let ctx = CommandContext {
            format: OutputFormat::Json,
            prefix: Some("my_prefix".to_string()),
        };
        let args = CheckArgs {
            values: vec![
                "my_prefix_7yNMTpVy8ddRxYKGJqtk7e".to_string(),
                "other_7yNMTpVy8ddRxYKGJqtk7e".to_string(),
            ],
        };

        let err = check(ctx, args).unwrap_err();

        assert_eq!(err.to_string(), "1 of 2 value(s) rejected");
    }
}
