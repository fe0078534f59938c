//! Order validation and aggregation
//!
//! Pure functions over fetched order envelopes: phone format checks,
//! per-category anomaly counts and duplicate phone detection.

pub mod phone;
mod summary;

pub use summary::{ValidationSummary, summarize};
