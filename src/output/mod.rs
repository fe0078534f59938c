//! Output formatting for CLI results

pub mod json;
pub mod report;
pub mod table;
