//! JSON output formatting
//!
//! Every JSON document is `{"data": ..., "meta": ...}`. `meta` always carries
//! the generation time and CLI version; a check adds the delivery window and
//! how many organizations and orders it covered.

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Run metadata attached to JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Checked delivery window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Window>,

    /// Number of organizations listed or checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<usize>,

    /// Number of fetched order envelopes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<usize>,
}

/// Delivery window bounds in wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub from: String,
    pub to: String,
}

impl Metadata {
    /// Metadata stamped with the current time
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            window: None,
            organizations: None,
            orders: None,
        }
    }

    pub fn with_window(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.window = Some(Window {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn with_organizations(mut self, count: usize) -> Self {
        self.organizations = Some(count);
        self
    }

    pub fn with_orders(mut self, count: usize) -> Self {
        self.orders = Some(count);
        self
    }
}

/// Format data with its metadata as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    meta: Metadata,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput { data, meta })
}
