//! Syrve API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{AuthApi, DeliveryApi, DirectoryApi};
use super::models::{
    AccessToken, AccessTokenRequest, AccessTokenResponse, Credential, DateRange,
    DeliveriesRequest, DeliveriesResponse, OrderEnvelope, Organization, OrganizationsResponse,
};
use crate::error::{ApiError, Error, Result};

/// Syrve API base URL (EU cloud)
pub const DEFAULT_API_HOST: &str = "https://api-eu.syrve.live";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ACCESS_TOKEN_PATH: &str = "/api/1/access_token";
const ORGANIZATIONS_PATH: &str = "/api/1/organizations";
const DELIVERIES_PATH: &str = "/api/1/deliveries/by_delivery_date_and_status";

/// Syrve API client.
///
/// Holds no token state: every authenticated call takes the [`AccessToken`]
/// explicitly.
#[derive(Debug, Clone)]
pub struct SyrveClient {
    http: HttpClient,
    base_url: String,
}

impl SyrveClient {
    /// Create a client with an optional custom host (used for development and tests)
    pub fn with_host(api_host: Option<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = api_host
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a 200 response, mapping every other outcome to [`ApiError`]
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        match status {
            StatusCode::OK => serde_json::from_str(&body).map_err(|e| {
                ApiError::InvalidResponse(format!(
                    "Failed to parse response: {}. Body was: {}",
                    e, body
                ))
            }),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized(body)),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(body)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::BadRequest(body))
            }
            status if status.is_server_error() => Err(ApiError::ServerError(format!(
                "{} - Response: {}",
                status, body
            ))),
            _ => Err(ApiError::InvalidResponse(format!(
                "Unexpected status code: {} - Response: {}",
                status, body
            ))),
        }
    }

    async fn request_token(
        &self,
        credential: &Credential,
    ) -> std::result::Result<AccessToken, ApiError> {
        let request = self
            .http
            .post(self.url(ACCESS_TOKEN_PATH))
            .json(&AccessTokenRequest {
                api_login: credential.as_str(),
            });

        let response: AccessTokenResponse = self.send(request).await?;
        debug!("Token response correlation id: {:?}", response.correlation_id);
        match response.token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(ApiError::MissingToken),
        }
    }
}

#[async_trait]
impl AuthApi for SyrveClient {
    async fn access_token(&self, credential: &Credential) -> Result<AccessToken> {
        let token = self.request_token(credential).await.map_err(Error::Auth)?;
        debug!("Received access token {}", token.redacted());
        Ok(token)
    }
}

#[async_trait]
impl DirectoryApi for SyrveClient {
    async fn list_organizations(&self, token: &AccessToken) -> Result<Vec<Organization>> {
        let request = self
            .http
            .get(self.url(ORGANIZATIONS_PATH))
            .bearer_auth(token.as_str());

        let response: OrganizationsResponse = self.send(request).await.map_err(Error::Directory)?;
        info!("Received {} organizations", response.organizations.len());
        Ok(response.organizations)
    }
}

#[async_trait]
impl DeliveryApi for SyrveClient {
    async fn fetch_deliveries(
        &self,
        token: &AccessToken,
        organization_ids: &[String],
        range: &DateRange,
    ) -> Result<Vec<OrderEnvelope>> {
        let body = DeliveriesRequest::closed(organization_ids, range);
        debug!(
            "Fetching closed deliveries for {} organizations ({} - {})",
            organization_ids.len(),
            body.delivery_date_from,
            body.delivery_date_to
        );

        let request = self
            .http
            .post(self.url(DELIVERIES_PATH))
            .bearer_auth(token.as_str())
            .json(&body);

        let response: DeliveriesResponse = self.send(request).await.map_err(Error::Fetch)?;
        let orders = response.into_envelopes();
        info!("Received {} orders", orders.len());
        Ok(orders)
    }
}
