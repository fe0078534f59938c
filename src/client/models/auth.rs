//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of leading characters kept when a secret is shown in diagnostics
const VISIBLE_PREFIX: usize = 6;

fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
    if secret.chars().count() <= VISIBLE_PREFIX {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

/// API login credential, supplied once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(api_login: impl Into<String>) -> Self {
        Self(api_login.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&redact(&self.0)).finish()
    }
}

/// Bearer token returned by the token endpoint.
///
/// Created once per run and threaded explicitly through every client call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token prefix safe for log output
    pub fn redacted(&self) -> String {
        redact(&self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.redacted()).finish()
    }
}

/// Body of the token request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest<'a> {
    pub api_login: &'a str,
}

/// Token endpoint response; `token` is optional so a missing field is reported
/// as its own error rather than as a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub correlation_id: Option<String>,
}
