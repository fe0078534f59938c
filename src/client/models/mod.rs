//! Syrve API data models
//!
//! Wire types for the token, organizations and deliveries endpoints, plus the
//! order shapes consumed by validation.

mod auth;
mod delivery;
pub mod lenient;
mod org;

pub use auth::{AccessToken, AccessTokenRequest, AccessTokenResponse, Credential};
pub use delivery::{
    DateRange, DeliveriesRequest, DeliveriesResponse, OrderEnvelope, end_of_day, start_of_day,
};
pub use org::{Organization, OrganizationsResponse};
