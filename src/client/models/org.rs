//! Organization models

use serde::{Deserialize, Serialize};

/// Organization visible to the access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name
    #[serde(default)]
    pub name: String,
}

/// Response of the organizations endpoint
#[derive(Debug, Deserialize)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}
