//! deliverycheck - audits closed Syrve deliveries for phone and amount anomalies

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod validation;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        log::debug!("{:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match &cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Orgs => cli::orgs::list(&opts).await,
        Commands::Check(args) => cli::check::run(&opts, args).await,
    }
}

/// Log to stderr; `--debug` raises the default level, `RUST_LOG` overrides both
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
