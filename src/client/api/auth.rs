//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Credential};
use crate::error::Result;

/// Authentication operations for the Syrve API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the API login for a bearer token.
    ///
    /// Fails with [`Error::Auth`](crate::error::Error::Auth) on transport errors,
    /// unparseable payloads, or a response without a token.
    async fn access_token(&self, credential: &Credential) -> Result<AccessToken>;
}
