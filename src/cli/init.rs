//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, DirectoryApi, SyrveClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API login (unless one was passed via flag or environment),
/// verifies it by requesting a token, and saves it to the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to deliverycheck!".bold().green());
    println!("Let's set up your Syrve API access.\n");

    let mut config = Config::load_at(opts.config_ref())?;
    config.apply_overrides(None, opts.api_host_ref(), opts.timeout);

    let api_login = match opts.api_login_ref() {
        Some(login) => login.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your Syrve API login")
            .interact()?,
    };
    config.apply_overrides(Some(&api_login), None, None);
    let credential = config.credential()?;

    println!("\n{}", "Authenticating...".cyan());
    let client = SyrveClient::with_host(config.api_host.clone(), config.timeout()?)?;
    let token = client.access_token(&credential).await?;
    println!("{}", "✓ Authentication successful!".green());

    let orgs = client.list_organizations(&token).await?;
    println!("Found {} organizations.", orgs.len());

    let config_path = config.save_at(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List organizations", "deliverycheck orgs".cyan());
    println!(
        "  {} - Check today's closed deliveries",
        "deliverycheck check".cyan()
    );

    Ok(())
}
