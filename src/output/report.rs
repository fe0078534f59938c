//! Rendering of organization listings and check reports

use colored::Colorize;
use serde::Serialize;

use super::json::{Metadata, format_json};
use super::table::{self, format_table};
use crate::cli::OutputFormat;
use crate::cli::check::CheckReport;
use crate::client::models::{OrderEnvelope, Organization};
use crate::error::Result;
use crate::models::{CountRow, DuplicatePhoneDisplay, OrgDisplay};

/// JSON view of a report, with orders only when requested
#[derive(Serialize)]
struct ReportJson<'a> {
    #[serde(flatten)]
    report: &'a CheckReport,

    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<&'a [OrderEnvelope]>,
}

/// Render the organization listing
pub fn render_organizations(orgs: &[Organization], format: OutputFormat) -> Result<String> {
    let rows = OrgDisplay::numbered(orgs);
    match format {
        OutputFormat::Json => Ok(format_json(
            &rows,
            Metadata::now().with_organizations(rows.len()),
        )?),
        OutputFormat::Table => Ok(format_table(&rows, table::ORGANIZATIONS)),
        OutputFormat::Pretty => {
            if rows.is_empty() {
                return Ok("No organizations found.".to_string());
            }
            let lines: Vec<String> = rows
                .iter()
                .map(|r| format!("{:>3}. {} {}", r.number, r.name.bold(), r.id.dimmed()))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Render every fetched envelope as numbered pretty JSON blocks
pub fn render_orders(orders: &[OrderEnvelope]) -> Result<String> {
    let mut out = Vec::with_capacity(orders.len());
    for (idx, order) in orders.iter().enumerate() {
        out.push(format!(
            "{}\n{}",
            format!("--- Order #{} ---", idx + 1).cyan(),
            serde_json::to_string_pretty(order)?
        ));
    }
    Ok(out.join("\n\n"))
}

/// Render the validation report
pub fn render_report(
    report: &CheckReport,
    format: OutputFormat,
    include_orders: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let meta = Metadata::now()
                .with_window(&report.date_from, &report.date_to)
                .with_organizations(report.organization_ids.len())
                .with_orders(report.orders.len());
            let data = ReportJson {
                report,
                orders: include_orders.then_some(report.orders.as_slice()),
            };
            Ok(format_json(&data, meta)?)
        }
        OutputFormat::Table => Ok(format!(
            "{}\n\n{}",
            format_table(&CountRow::from_summary(&report.summary), table::COUNTS),
            format_table(
                &DuplicatePhoneDisplay::from_summary(&report.summary),
                table::DUPLICATES
            )
        )),
        OutputFormat::Pretty => Ok(render_pretty(report)),
    }
}

fn render_pretty(report: &CheckReport) -> String {
    let summary = &report.summary;
    let mut lines = vec![
        format!(
            "{} {} - {} ({} organizations)",
            "Closed deliveries".bold(),
            report.date_from,
            report.date_to,
            report.organization_ids.len()
        ),
        String::new(),
    ];

    for row in CountRow::from_summary(summary) {
        lines.push(format!("  {:<24} {}", format!("{}:", row.check), count(&row)));
    }

    lines.push(String::new());
    if summary.is_clean() {
        lines.push(format!("{} No anomalies found", "✓".green()));
        return lines.join("\n");
    }

    let duplicates = DuplicatePhoneDisplay::from_summary(summary);
    if duplicates.is_empty() {
        lines.push(format!("{} No duplicate phone numbers", "✓".green()));
    } else {
        lines.push("Duplicate phone numbers:".bold().to_string());
        for dup in duplicates {
            lines.push(format!("  {}: {} orders", dup.phone, dup.orders));
        }
    }

    lines.join("\n")
}

/// Anomaly counters are highlighted when non-zero
fn count(row: &CountRow) -> String {
    let text = row.count.to_string();
    if row.is_flagged() {
        text.yellow().to_string()
    } else {
        text
    }
}
