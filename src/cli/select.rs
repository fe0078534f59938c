//! Organization selection
//!
//! The pipeline asks a [`SelectionProvider`] which organizations to check, so
//! it runs the same way with an interactive prompt or a fixed `--orgs` value.

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::client::models::Organization;
use crate::error::{Result, SelectionError};

/// Selection input meaning "every organization"
pub const SELECT_ALL: &str = "0";

/// Chooses organization IDs from the listed organizations
pub trait SelectionProvider {
    fn select(&self, orgs: &[Organization]) -> Result<Vec<String>>;
}

/// Parse comma-separated 1-based indices, or `0` for all organizations.
///
/// Repeated indices select an organization once; the order of first mention is kept.
pub fn parse_selection(
    input: &str,
    orgs: &[Organization],
) -> std::result::Result<Vec<String>, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SelectionError::Empty);
    }
    if input == SELECT_ALL {
        return Ok(orgs.iter().map(|o| o.id.clone()).collect());
    }

    let mut ids: Vec<String> = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let index: usize = part
            .parse()
            .map_err(|_| SelectionError::NotANumber(part.to_string()))?;

        let org = index
            .checked_sub(1)
            .and_then(|i| orgs.get(i))
            .ok_or(SelectionError::OutOfRange {
                index,
                max: orgs.len(),
            })?;

        if !ids.contains(&org.id) {
            ids.push(org.id.clone());
        }
    }

    Ok(ids)
}

/// Non-interactive selection from the `--orgs` flag
#[derive(Debug, Clone)]
pub struct FixedSelector {
    input: String,
}

impl FixedSelector {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl SelectionProvider for FixedSelector {
    fn select(&self, orgs: &[Organization]) -> Result<Vec<String>> {
        Ok(parse_selection(&self.input, orgs)?)
    }
}

/// Terminal prompt listing organizations and asking for their numbers
#[derive(Debug, Clone, Default)]
pub struct PromptSelector;

impl SelectionProvider for PromptSelector {
    fn select(&self, orgs: &[Organization]) -> Result<Vec<String>> {
        eprintln!("{}", "Available organizations:".bold());
        for (idx, org) in orgs.iter().enumerate() {
            eprintln!("  {}. {} {}", idx + 1, org.name, format!("({})", org.id).dimmed());
        }

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Organization numbers (comma-separated, 0 for all)")
            .validate_with(|value: &String| -> std::result::Result<(), String> {
                parse_selection(value, orgs)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;

        Ok(parse_selection(&input, orgs)?)
    }
}
