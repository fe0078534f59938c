//! Syrve back-office API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod syrve;

pub use api::{AuthApi, DeliveryApi, DirectoryApi};
#[cfg(test)]
pub use mock::MockSyrveClient;
pub use syrve::SyrveClient;

/// Combined API surface used by the commands
pub trait SyrveApi: AuthApi + DirectoryApi + DeliveryApi {}

impl<T: AuthApi + DirectoryApi + DeliveryApi> SyrveApi for T {}
