//! Delivery retrieval API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, DateRange, OrderEnvelope};
use crate::error::Result;

/// Delivery retrieval for the Syrve API
#[async_trait]
pub trait DeliveryApi: Send + Sync {
    /// Fetch closed deliveries for the organizations within the date range.
    ///
    /// The per-organization grouping of the response is flattened; organization
    /// attribution is not kept.
    async fn fetch_deliveries(
        &self,
        token: &AccessToken,
        organization_ids: &[String],
        range: &DateRange,
    ) -> Result<Vec<OrderEnvelope>>;
}
