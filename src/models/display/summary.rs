//! Validation summary display models

use serde::Serialize;
use tabled::Tabled;

use crate::validation::ValidationSummary;

/// One counter of the validation summary
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CountRow {
    #[tabled(rename = "CHECK")]
    pub check: &'static str,

    #[tabled(rename = "ORDERS")]
    pub count: usize,

    /// Whether a non-zero count signals a problem
    #[tabled(skip)]
    #[serde(skip)]
    pub anomaly: bool,
}

impl CountRow {
    /// Rows in report order; the skipped row only appears when non-zero
    pub fn from_summary(summary: &ValidationSummary) -> Vec<Self> {
        let mut rows = vec![
            Self {
                check: "Total orders",
                count: summary.total,
                anomaly: false,
            },
            Self::anomaly("Without customer data", summary.no_customer_data),
            Self::anomaly("Without phone number", summary.no_phone),
            Self::anomaly("Invalid phone number", summary.invalid_phone),
            Self::anomaly("Zero amount", summary.zero_amount),
        ];
        if summary.skipped > 0 {
            rows.insert(1, Self::anomaly("Without order data", summary.skipped));
        }
        rows
    }

    fn anomaly(check: &'static str, count: usize) -> Self {
        Self {
            check,
            count,
            anomaly: true,
        }
    }

    /// Non-zero anomaly counter
    pub fn is_flagged(&self) -> bool {
        self.anomaly && self.count > 0
    }
}

/// Phone number seen on more than one order
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DuplicatePhoneDisplay {
    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ORDERS")]
    pub orders: usize,
}

impl DuplicatePhoneDisplay {
    /// Most frequent phones first, ties by phone number
    pub fn from_summary(summary: &ValidationSummary) -> Vec<Self> {
        let mut rows: Vec<Self> = summary
            .duplicate_phones
            .iter()
            .map(|(phone, count)| Self {
                phone: phone.clone(),
                orders: *count,
            })
            .collect();
        rows.sort_by(|a, b| b.orders.cmp(&a.orders).then_with(|| a.phone.cmp(&b.phone)));
        rows
    }
}
