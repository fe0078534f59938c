//! API trait definitions split by pipeline stage
//!
//! - [`AuthApi`] - Token acquisition
//! - [`DirectoryApi`] - Organization listing
//! - [`DeliveryApi`] - Closed delivery retrieval
//!
//! The [`SyrveApi`](super::SyrveApi) super-trait combines all three.

mod auth;
mod deliveries;
mod directory;

pub use auth::AuthApi;
pub use deliveries::DeliveryApi;
pub use directory::DirectoryApi;
