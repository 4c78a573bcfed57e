//! Encode and decode commands.

use anyhow::Result;
use clap::Args;
use tracing::debug;
use uuidbase62_id::{to_uuidbase62, IdError, Uuid, UuidBase62};

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, IdRow};

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// UUIDs to encode.
    #[arg(required = true)]
    uuids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Identifiers to decode.
    #[arg(required = true)]
    ids: Vec<String>,
}

pub fn encode(ctx: CommandContext, args: EncodeArgs) -> Result<()> {
    let rows = args
        .uuids
        .iter()
        .map(|raw| encode_one(raw, ctx.prefix()).map(|id| IdRow::from(&id)))
        .collect::<Result<Vec<_>, _>>()?;

    print_output(&rows, ctx.format);
    Ok(())
}

pub fn decode(ctx: CommandContext, args: DecodeArgs) -> Result<()> {
    let rows = args
        .ids
        .iter()
        .map(|raw| decode_one(raw, ctx.prefix()).map(|id| IdRow::from(&id)))
        .collect::<Result<Vec<_>, _>>()?;

    print_output(&rows, ctx.format);
    Ok(())
}

/// Encodes UUID text; identifiers are rejected.
fn encode_one(raw: &str, prefix: Option<&str>) -> Result<UuidBase62, CliError> {
    let uuid: Uuid = raw.trim().parse().map_err(|_| IdError::InvalidUuidInput)?;
    let id = UuidBase62::from_uuid(uuid, prefix);
    debug!(uuid = %uuid, id = %id, "Encoded UUID");
    Ok(id)
}

fn decode_one(raw: &str, prefix: Option<&str>) -> Result<UuidBase62, CliError> {
    let id = to_uuidbase62(raw.trim(), prefix)?;
    debug!(id = %id, uuid = %id.uuid(), "Decoded identifier");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_one() {
        let id = encode_one("3fbae77c-5852-47cb-a82f-aeebc6ee3f43", Some("cust")).unwrap();
        assert_eq!(id, "cust_1WfVMU43m1UQUtAHULNBzd");
    }

    #[test]
    fn test_encode_one_rejects_identifier() {
        let err = encode_one("cust_1WfVMU43m1UQUtAHULNBzd", Some("cust")).unwrap_err();
        assert!(matches!(err, CliError::Id(IdError::InvalidUuidInput)));
    }

    #[test]
    fn test_decode_one() {
        let id = decode_one(" cust_1WfVMU43m1UQUtAHULNBzd ", Some("cust")).unwrap();
        assert_eq!(
            id.uuid().to_string(),
            "3fbae77c-5852-47cb-a82f-aeebc6ee3f43"
        );
    }

    #[test]
    fn test_decode_one_prefix_mismatch() {
        let err = decode_one("inv_1WfVMU43m1UQUtAHULNBzd", Some("cust")).unwrap_err();
        assert!(matches!(err, CliError::Id(IdError::PrefixMismatch { .. })));
    }
}
