//! Configuration read from the environment.
//!
//! `B62_PREFIX` and `B62_FORMAT` back the `--prefix` and `--format` flags
//! directly (see `commands::Cli`); only settings without a flag live here.

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("B62_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Self { log_level }
    }
}
