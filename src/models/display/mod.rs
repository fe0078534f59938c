//! Display model implementations for table and JSON output
//!
//! Display models transform API and validation types into CLI-friendly
//! rows with appropriate column names.

mod org;
mod summary;

pub use org::OrgDisplay;
pub use summary::{CountRow, DuplicatePhoneDisplay};
