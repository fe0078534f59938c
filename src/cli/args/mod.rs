//! Shared CLI argument types

mod common;
mod dates;
mod global;

pub use common::OutputFormat;
pub use dates::{DateBound, parse_date_bound, resolve_range};
pub use global::GlobalOptions;
