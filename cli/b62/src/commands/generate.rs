//! Identifier generation.

use anyhow::Result;
use clap::Args;
use tracing::debug;
use uuidbase62_id::{generate, generate_sortable};

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, IdRow};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,

    /// Use time-ordered (v7) UUIDs instead of random (v4) ones.
    #[arg(long)]
    sortable: bool,
}

pub fn new(ctx: CommandContext, args: NewArgs) -> Result<()> {
    if args.count == 0 {
        return Err(CliError::InvalidCount.into());
    }

    let rows: Vec<IdRow> = (0..args.count)
        .map(|_| {
            let id = if args.sortable {
                generate_sortable(ctx.prefix())
            } else {
                generate(ctx.prefix())
            };
            IdRow::from(&id)
        })
        .collect();

    debug!(count = rows.len(), sortable = args.sortable, "Generated identifiers");
    print_output(&rows, ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_new_rejects_zero_count() {
        let ctx = CommandContext {
            format: OutputFormat::Json,
            prefix: None,
        };

        let err = new(ctx, NewArgs { count: 0, sortable: false }).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidCount)
        ));
    }
}
