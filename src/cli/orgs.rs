//! Organization listing command

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::{AuthApi, DirectoryApi};
use crate::error::Result;
use crate::output::report;

/// Run the orgs command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let token = ctx.client.access_token(&ctx.credential).await?;
    let orgs = ctx.client.list_organizations(&token).await?;
    debug!("Fetched {} organizations", orgs.len());

    println!("{}", report::render_organizations(&orgs, ctx.format)?);
    Ok(())
}
