//! Mock Syrve API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, DeliveryApi, DirectoryApi};
use super::models::{AccessToken, Credential, DateRange, OrderEnvelope, Organization};
use crate::error::{ApiError, Error, Result};

/// Pipeline stage an injected error is raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Auth,
    Directory,
    Fetch,
}

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSyrveClient::new()
///     .with_orgs(vec![Organization { id: "org-1".into(), name: "Kyiv".into() }])
///     .await;
///
/// let token = mock.access_token(&Credential::new("login")).await?;
/// let orgs = mock.list_organizations(&token).await?;
/// assert_eq!(orgs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockSyrveClient {
    /// Token to return from access_token
    token: Arc<Mutex<Option<AccessToken>>>,
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Envelopes to return from fetch_deliveries
    orders: Arc<Mutex<Vec<OrderEnvelope>>>,
    /// Error to return from one stage (consumed on first use)
    error: Arc<Mutex<Option<(Stage, ApiError)>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub access_token: usize,
    pub list_organizations: usize,
    pub fetch_deliveries: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.access_token + self.list_organizations + self.fetch_deliveries
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "fetch_deliveries")
    pub method: String,
    /// Token the call was made with
    pub token: Option<String>,
    /// Organization IDs passed to fetch_deliveries
    pub organization_ids: Vec<String>,
    /// Date range passed to fetch_deliveries
    pub range: Option<DateRange>,
}

impl MockSyrveClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token to return from access_token.
    pub async fn with_token(self, token: &str) -> Self {
        *self.token.lock().await = Some(AccessToken::new(token));
        self
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure envelopes to return from fetch_deliveries.
    pub async fn with_orders(self, orders: Vec<OrderEnvelope>) -> Self {
        *self.orders.lock().await = orders;
        self
    }

    /// Configure an error for one stage. The error is consumed after one use.
    pub async fn with_error(self, stage: Stage, error: ApiError) -> Self {
        *self.error.lock().await = Some((stage, error));
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Return the pending error if it belongs to `stage`.
    async fn check_error(&self, stage: Stage) -> Result<()> {
        let mut pending = self.error.lock().await;
        if pending.as_ref().is_some_and(|(s, _)| *s == stage) {
            if let Some((_, e)) = pending.take() {
                return Err(match stage {
                    Stage::Auth => Error::Auth(e),
                    Stage::Directory => Error::Directory(e),
                    Stage::Fetch => Error::Fetch(e),
                });
            }
        }
        Ok(())
    }

    async fn capture_request(
        &self,
        method: &str,
        token: Option<&AccessToken>,
        organization_ids: &[String],
        range: Option<&DateRange>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            token: token.map(|t| t.as_str().to_string()),
            organization_ids: organization_ids.to_vec(),
            range: range.copied(),
        });
    }
}

#[async_trait]
impl AuthApi for MockSyrveClient {
    async fn access_token(&self, _credential: &Credential) -> Result<AccessToken> {
        self.capture_request("access_token", None, &[], None).await;
        self.check_error(Stage::Auth).await?;

        self.call_count.lock().await.access_token += 1;

        let token = self.token.lock().await;
        Ok(token
            .clone()
            .unwrap_or_else(|| AccessToken::new("mock-access-token")))
    }
}

#[async_trait]
impl DirectoryApi for MockSyrveClient {
    async fn list_organizations(&self, token: &AccessToken) -> Result<Vec<Organization>> {
        self.capture_request("list_organizations", Some(token), &[], None)
            .await;
        self.check_error(Stage::Directory).await?;

        self.call_count.lock().await.list_organizations += 1;

        Ok(self.orgs.lock().await.clone())
    }
}

#[async_trait]
impl DeliveryApi for MockSyrveClient {
    async fn fetch_deliveries(
        &self,
        token: &AccessToken,
        organization_ids: &[String],
        range: &DateRange,
    ) -> Result<Vec<OrderEnvelope>> {
        self.capture_request("fetch_deliveries", Some(token), organization_ids, Some(range))
            .await;
        self.check_error(Stage::Fetch).await?;

        self.call_count.lock().await.fetch_deliveries += 1;

        Ok(self.orders.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: format!("Organization {}", id),
        }
    }

    #[tokio::test]
    async fn test_mock_returns_configured_data() {
        let mock = MockSyrveClient::new()
            .with_token("tok-1")
            .await
            .with_orgs(vec![org("a"), org("b")])
            .await;

        let token = mock.access_token(&Credential::new("login")).await.unwrap();
        assert_eq!(token.as_str(), "tok-1");

        let orgs = mock.list_organizations(&token).await.unwrap();
        assert_eq!(orgs.len(), 2);

        let counts = mock.call_counts().await;
        assert_eq!(counts.access_token, 1);
        assert_eq!(counts.list_organizations, 1);
        assert_eq!(counts.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_error_is_scoped_to_stage_and_consumed() {
        let mock = MockSyrveClient::new()
            .with_error(Stage::Directory, ApiError::Forbidden)
            .await;

        let token = mock.access_token(&Credential::new("login")).await.unwrap();

        let err = mock.list_organizations(&token).await.unwrap_err();
        assert!(matches!(err, Error::Directory(ApiError::Forbidden)));

        assert!(mock.list_organizations(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_captures_fetch_arguments() {
        let mock = MockSyrveClient::new();
        let range = DateRange::day(chrono::NaiveDate::from_ymd_opt(2025, 2, 5).unwrap()).unwrap();
        let ids = vec!["a".to_string()];

        mock.fetch_deliveries(&AccessToken::new("t"), &ids, &range)
            .await
            .unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].method, "fetch_deliveries");
        assert_eq!(captured[0].token.as_deref(), Some("t"));
        assert_eq!(captured[0].organization_ids, ids);
        assert_eq!(captured[0].range, Some(range));
    }
}
