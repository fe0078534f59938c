//! Command execution context
//!
//! Loads configuration, merges CLI overrides and builds the API client so
//! every command starts from the same resolved state.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SyrveClient;
use crate::client::models::Credential;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// API client for the resolved host and timeout
    pub client: SyrveClient,
    /// API login to authenticate with
    pub credential: Credential,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed, no API login is
    /// available, or the timeout is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.apply_overrides(opts.api_login_ref(), opts.api_host_ref(), opts.timeout);

        let credential = config.credential()?;
        let client = SyrveClient::with_host(config.api_host.clone(), config.timeout()?)?;
        log::debug!("Using API host {}", client.base_url());

        let format = opts
            .format
            .or(config.preferences.format)
            .unwrap_or_default();

        Ok(Self {
            client,
            credential,
            format,
        })
    }
}
