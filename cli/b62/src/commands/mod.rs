//! CLI commands.

mod codec;
mod generate;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuidbase62_id::{con_uuidbase62, UuidBase62};

use crate::error::CliError;
use crate::output::OutputFormat;

/// b62 - Stripe-style prefixed base62 identifiers for UUIDs.
#[derive(Debug, Parser)]
#[command(name = "b62")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "B62_FORMAT", default_value = "table")]
    format: String,

    /// Identifier prefix.
    #[arg(long, short, global = true, env = "B62_PREFIX")]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode UUIDs as identifiers.
    Encode(codec::EncodeArgs),

    /// Decode identifiers back to UUIDs.
    Decode(codec::DecodeArgs),

    /// Show every part of an identifier or UUID.
    Inspect(inspect::InspectArgs),

    /// Check that values are valid identifiers for a prefix.
    Check(inspect::CheckArgs),

    /// Generate new identifiers.
    New(generate::NewArgs),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext::new(self.format.parse()?, self.prefix)?;

        match self.command {
            Commands::Encode(args) => codec::encode(ctx, args),
            Commands::Decode(args) => codec::decode(ctx, args),
            Commands::Inspect(args) => inspect::inspect(ctx, args),
            Commands::Check(args) => inspect::check(ctx, args),
            Commands::New(args) => generate::new(ctx, args),
            Commands::Version => {
                println!("b62 {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub prefix: Option<String>,
}

impl CommandContext {
    /// Builds the context, rejecting prefixes a field could never be bound
    /// to. An empty prefix means no prefix.
    pub fn new(format: OutputFormat, prefix: Option<String>) -> Result<Self, CliError> {
        let prefix = match prefix.filter(|p| !p.is_empty()) {
            Some(p) => Some(con_uuidbase62(p)?.prefix().to_string()),
            None => None,
        };

        Ok(Self { format, prefix })
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

/// One identifier, as printed by the commands.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct IdRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Prefix")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,

    #[tabled(rename = "Base62")]
    pub base62: String,

    #[tabled(rename = "UUID")]
    pub uuid: String,
}

impl From<&UuidBase62> for IdRow {
    fn from(id: &UuidBase62) -> Self {
        Self {
            id: id.to_string(),
            prefix: id.prefix().unwrap_or_default().to_string(),
            base62: id.base62().to_string(),
            uuid: id.uuid().hyphenated().to_string(),
        }
    }
}
