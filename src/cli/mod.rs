//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod check;
pub mod context;
pub mod init;
pub mod orgs;
pub mod select;

pub use args::{DateBound, GlobalOptions, OutputFormat};

/// deliverycheck - audit closed Syrve deliveries for phone and amount anomalies
#[derive(Parser, Debug)]
#[command(name = "deliverycheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DELIVERYCHECK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "DELIVERYCHECK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Syrve API login (overrides config file)
    #[arg(
        long,
        global = true,
        env = "DELIVERYCHECK_API_LOGIN",
        hide_env_values = true
    )]
    pub api_login: Option<String>,

    /// Custom API host, e.g. https://api-ru.syrve.live
    #[arg(long, global = true, env = "DELIVERYCHECK_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = "DELIVERYCHECK_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DELIVERYCHECK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save your API login to the config file
    Init,

    /// List organizations visible to the API login
    Orgs,

    /// Fetch closed deliveries and report phone and amount anomalies
    Check(CheckArgs),
}

/// Arguments for the check command
#[derive(Debug, Clone, Args, Default)]
pub struct CheckArgs {
    /// Delivery day to check (YYYY-MM-DD), defaults to today
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub date: Option<chrono::NaiveDate>,

    /// Start of the delivery window (YYYY-MM-DD[ HH:MM:SS[.mmm]])
    #[arg(long, value_parser = args::parse_date_bound)]
    pub from: Option<DateBound>,

    /// End of the delivery window; a bare date means end of that day
    #[arg(long, value_parser = args::parse_date_bound)]
    pub to: Option<DateBound>,

    /// Organizations to check: comma-separated 1-based numbers, or 0 for all.
    /// Prompts interactively when omitted.
    #[arg(long, value_name = "NUMBERS")]
    pub orgs: Option<String>,

    /// Print every fetched order before the summary
    #[arg(long)]
    pub show_orders: bool,
}
