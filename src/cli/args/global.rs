//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into one struct so handlers take a single
//! argument instead of threading each flag through.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (falls back to config preference, then pretty)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.deliverycheck/config.yaml)
    pub config: Option<String>,

    /// API login override
    pub api_login: Option<String>,

    /// Custom API host
    pub api_host: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_login: cli.api_login.clone(),
            api_host: cli.api_host.clone(),
            timeout: cli.timeout,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API login override as `Option<&str>`.
    pub fn api_login_ref(&self) -> Option<&str> {
        self.api_login.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
