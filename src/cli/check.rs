//! Check command: fetch closed deliveries and validate them
//!
//! Stages run strictly in order (token, organizations, selection, deliveries,
//! validation) and the first failing stage ends the run.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Serialize;

use crate::cli::args::{GlobalOptions, resolve_range};
use crate::cli::context::CommandContext;
use crate::cli::select::{FixedSelector, PromptSelector, SelectionProvider};
use crate::cli::{CheckArgs, OutputFormat};
use crate::client::SyrveApi;
use crate::client::models::{AccessToken, Credential, DateRange, OrderEnvelope, Organization};
use crate::error::{Error, Result};
use crate::output::report;
use crate::validation::{ValidationSummary, summarize};

/// Token and organizations chosen for a run
#[derive(Debug)]
pub struct Selection {
    pub token: AccessToken,
    pub organizations: Vec<Organization>,
    pub organization_ids: Vec<String>,
}

/// Outcome of a check run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub organization_ids: Vec<String>,
    pub date_from: String,
    pub date_to: String,
    /// Raw envelopes, only printed on request
    #[serde(skip)]
    pub orders: Vec<OrderEnvelope>,
    pub summary: ValidationSummary,
}

/// Authenticate, list organizations and ask the selector which to check.
///
/// An empty organization list ends the run with [`Error::NoOrganizations`].
pub async fn select_organizations<A, S>(
    api: &A,
    credential: &Credential,
    selector: &S,
) -> Result<Selection>
where
    A: SyrveApi + ?Sized,
    S: SelectionProvider + ?Sized,
{
    let token = api.access_token(credential).await?;

    let organizations = api.list_organizations(&token).await?;
    if organizations.is_empty() {
        return Err(Error::NoOrganizations);
    }

    let organization_ids = selector.select(&organizations)?;
    info!("Selected organizations: {:?}", organization_ids);

    Ok(Selection {
        token,
        organizations,
        organization_ids,
    })
}

/// Fetch closed deliveries for the selection and summarize them.
pub async fn fetch_and_summarize<A>(
    api: &A,
    selection: &Selection,
    range: &DateRange,
) -> Result<CheckReport>
where
    A: SyrveApi + ?Sized,
{
    let orders = api
        .fetch_deliveries(&selection.token, &selection.organization_ids, range)
        .await?;

    let summary = summarize(&orders);
    debug!(
        "Categorized {} of {} envelopes: {:?}",
        summary.categorized(),
        summary.total,
        summary
    );

    Ok(CheckReport {
        organization_ids: selection.organization_ids.clone(),
        date_from: range.start_wire(),
        date_to: range.end_wire(),
        orders,
        summary,
    })
}

/// Run the check command
pub async fn run(opts: &GlobalOptions, args: &CheckArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let range = resolve_range(
        args.date,
        args.from,
        args.to,
        chrono::Local::now().date_naive(),
    )?;

    let selection = match &args.orgs {
        Some(input) => {
            select_organizations(&ctx.client, &ctx.credential, &FixedSelector::new(input)).await?
        }
        None => select_organizations(&ctx.client, &ctx.credential, &PromptSelector).await?,
    };
    debug!(
        "Checking {} of {} organizations from {} to {}",
        selection.organization_ids.len(),
        selection.organizations.len(),
        range.start_wire(),
        range.end_wire()
    );

    let spinner = fetch_spinner(ctx.format);
    let report = fetch_and_summarize(&ctx.client, &selection, &range).await;
    spinner.finish_and_clear();
    let report = report?;

    if args.show_orders && ctx.format != OutputFormat::Json {
        println!("{}", report::render_orders(&report.orders)?);
    }

    if report.orders.is_empty() && ctx.format != OutputFormat::Json {
        println!(
            "{} No closed deliveries found between {} and {}.",
            "○".dimmed(),
            report.date_from,
            report.date_to
        );
        return Ok(());
    }

    println!(
        "{}",
        report::render_report(&report, ctx.format, args.show_orders)?
    );
    Ok(())
}

fn fetch_spinner(format: OutputFormat) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching closed deliveries...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
