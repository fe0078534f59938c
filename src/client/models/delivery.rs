//! Delivery and order models

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use crate::error::{Error, Result};

/// Wire format of delivery date bounds
pub const DELIVERY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// The only delivery status requested
pub const CLOSED_STATUS: &str = "Closed";

/// Delivery date window, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl DateRange {
    /// Create a range, rejecting `from` later than `to`
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidDateRange(format!(
                "start {} is after end {}",
                from.format(DELIVERY_DATE_FORMAT),
                to.format(DELIVERY_DATE_FORMAT)
            )));
        }
        Ok(Self { from, to })
    }

    /// Whole calendar day: 00:00:00.000 through 23:59:59.999
    pub fn day(date: NaiveDate) -> Result<Self> {
        Ok(Self {
            from: start_of_day(date),
            to: end_of_day(date)?,
        })
    }

    /// Lower bound in wire format
    pub fn start_wire(&self) -> String {
        self.from.format(DELIVERY_DATE_FORMAT).to_string()
    }

    /// Upper bound in wire format
    pub fn end_wire(&self) -> String {
        self.to.format(DELIVERY_DATE_FORMAT).to_string()
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond of `date`; fails past the last representable day
pub fn end_of_day(date: NaiveDate) -> Result<NaiveDateTime> {
    start_of_day(date)
        .checked_add_signed(Duration::days(1))
        .and_then(|next| next.checked_sub_signed(Duration::milliseconds(1)))
        .ok_or_else(|| Error::InvalidDateRange(format!("{} is out of range", date)))
}

/// Body of the deliveries request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveriesRequest {
    pub organization_ids: Vec<String>,
    pub delivery_date_from: String,
    pub delivery_date_to: String,
    pub statuses: Vec<String>,
}

impl DeliveriesRequest {
    /// Request for closed deliveries of the given organizations
    pub fn closed(organization_ids: &[String], range: &DateRange) -> Self {
        Self {
            organization_ids: organization_ids.to_vec(),
            delivery_date_from: range.start_wire(),
            delivery_date_to: range.end_wire(),
            statuses: vec![CLOSED_STATUS.to_string()],
        }
    }
}

/// Response of the deliveries endpoint, grouped by organization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveriesResponse {
    #[serde(default)]
    pub orders_by_organizations: Vec<OrganizationOrders>,
}

impl DeliveriesResponse {
    /// Flatten the per-organization groups into one sequence, in received order
    pub fn into_envelopes(self) -> Vec<OrderEnvelope> {
        self.orders_by_organizations
            .into_iter()
            .flat_map(|group| {
                log::debug!(
                    "{} orders for organization {}",
                    group.orders.len(),
                    group.organization_id.as_deref().unwrap_or("<unknown>")
                );
                group.orders
            })
            .collect()
    }
}

/// Orders of one organization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationOrders {
    #[serde(default, deserialize_with = "lenient::string")]
    pub organization_id: Option<String>,

    #[serde(default, deserialize_with = "envelopes")]
    pub orders: Vec<OrderEnvelope>,
}

fn envelopes<'de, D>(deserializer: D) -> std::result::Result<Vec<OrderEnvelope>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(OrderEnvelope::from_value).collect(),
        _ => Vec::new(),
    })
}

/// Wrapper around one order payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderEnvelope {
    /// Inner order; `None` when missing or not an object
    #[serde(
        default,
        deserialize_with = "order_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<Order>,

    /// Remaining envelope fields, kept for order dumps
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderEnvelope {
    /// Build an envelope from arbitrary JSON; non-objects yield an empty envelope
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn order_object<'de, D>(deserializer: D) -> std::result::Result<Option<Order>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Order fields the validation reads.
///
/// Defaults: `customer` and `phone` are absent when missing or wrongly typed,
/// `sum` reads as zero through [`Order::amount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer: Option<Map<String, Value>>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub sum: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Order total, zero when absent
    pub fn amount(&self) -> f64 {
        self.sum.unwrap_or(0.0)
    }
}
