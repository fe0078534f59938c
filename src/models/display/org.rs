//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;

/// Organization row with the 1-based number used for selection.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Selection number
    #[tabled(rename = "#")]
    pub number: usize,

    /// Organization ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl OrgDisplay {
    /// Number organizations in listing order, starting at 1
    pub fn numbered(orgs: &[Organization]) -> Vec<Self> {
        orgs.iter()
            .enumerate()
            .map(|(idx, org)| Self {
                number: idx + 1,
                id: org.id.clone(),
                name: org.name.clone(),
            })
            .collect()
    }
}
