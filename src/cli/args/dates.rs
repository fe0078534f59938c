//! Delivery window arguments

use chrono::{NaiveDate, NaiveDateTime};

use crate::client::models::{DateRange, end_of_day, start_of_day};
use crate::error::Result;

/// A `--from`/`--to` value: a bare date or a full timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateBound {
    fn date(&self) -> NaiveDate {
        match self {
            DateBound::Date(d) => *d,
            DateBound::DateTime(dt) => dt.date(),
        }
    }

    fn as_start(&self) -> NaiveDateTime {
        match self {
            DateBound::Date(d) => start_of_day(*d),
            DateBound::DateTime(dt) => *dt,
        }
    }

    fn as_end(&self) -> Result<NaiveDateTime> {
        match self {
            DateBound::Date(d) => end_of_day(*d),
            DateBound::DateTime(dt) => Ok(*dt),
        }
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD HH:MM:SS.mmm`
pub fn parse_date_bound(value: &str) -> std::result::Result<DateBound, String> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(DateBound::DateTime(dt));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(DateBound::Date)
        .map_err(|_| {
            format!(
                "'{}' is not a date; expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS[.mmm]",
                value
            )
        })
}

/// Build the delivery window from CLI arguments.
///
/// `--date` covers one whole day. A missing `--from`/`--to` falls back to the
/// start/end of the other bound's day, or of `today` when both are missing.
pub fn resolve_range(
    date: Option<NaiveDate>,
    from: Option<DateBound>,
    to: Option<DateBound>,
    today: NaiveDate,
) -> Result<DateRange> {
    if let Some(day) = date {
        return DateRange::day(day);
    }

    let start = match (&from, &to) {
        (Some(f), _) => f.as_start(),
        (None, Some(t)) => start_of_day(t.date()),
        (None, None) => start_of_day(today),
    };
    let end = match (&from, &to) {
        (_, Some(t)) => t.as_end()?,
        (Some(f), None) => end_of_day(f.date())?,
        (None, None) => end_of_day(today)?,
    };

    DateRange::new(start, end)
}
