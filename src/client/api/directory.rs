//! Organization directory API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Organization};
use crate::error::Result;

/// Organization listing for the Syrve API
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List organizations visible to the token, in the order the API returns them.
    ///
    /// The order is significant: it defines the 1-based indices offered for selection.
    async fn list_organizations(&self, token: &AccessToken) -> Result<Vec<Organization>>;
}
