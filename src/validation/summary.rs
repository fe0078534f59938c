//! Validation summary over a batch of order envelopes

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::phone::is_valid_phone;
use crate::client::models::OrderEnvelope;

/// Aggregate validation result for one fetched batch.
///
/// `total` counts every envelope passed in, including envelopes without an
/// inner order. Those are reported separately in `skipped` and fall in no
/// other bucket, so `total == skipped + no_customer_data + no_phone + with_phone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total: usize,
    pub skipped: usize,
    pub no_customer_data: usize,
    pub no_phone: usize,
    pub with_phone: usize,
    pub invalid_phone: usize,
    pub zero_amount: usize,
    /// Phones seen on two or more orders, with their occurrence count
    pub duplicate_phones: BTreeMap<String, usize>,
}

impl ValidationSummary {
    /// Envelopes that carried an order and landed in exactly one presence bucket
    pub fn categorized(&self) -> usize {
        self.no_customer_data + self.no_phone + self.with_phone
    }

    /// Whether any anomaly was found, envelopes without an order included
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
            && self.no_customer_data == 0
            && self.no_phone == 0
            && self.invalid_phone == 0
            && self.zero_amount == 0
            && self.duplicate_phones.is_empty()
    }
}

/// Validate and aggregate a batch of envelopes.
///
/// Per order: missing customer stops at `no_customer_data`; missing or empty
/// phone stops at `no_phone`; otherwise the phone is tallied for duplicates,
/// checked for format, and the amount is checked for zero.
pub fn summarize(orders: &[OrderEnvelope]) -> ValidationSummary {
    let mut summary = ValidationSummary {
        total: orders.len(),
        ..Default::default()
    };
    let mut phone_counts: HashMap<&str, usize> = HashMap::new();

    for order in orders.iter().map(|envelope| envelope.order.as_ref()) {
        let Some(order) = order else {
            summary.skipped += 1;
            continue;
        };

        if order.customer.is_none() {
            summary.no_customer_data += 1;
            continue;
        }

        let phone = match order.phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => {
                summary.no_phone += 1;
                continue;
            }
        };

        summary.with_phone += 1;
        *phone_counts.entry(phone).or_default() += 1;

        if !is_valid_phone(phone) {
            summary.invalid_phone += 1;
        }

        if order.amount() == 0.0 {
            summary.zero_amount += 1;
        }
    }

    summary.duplicate_phones = phone_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(phone, count)| (phone.to_string(), count))
        .collect();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn envelopes(values: Vec<Value>) -> Vec<OrderEnvelope> {
        values.into_iter().map(OrderEnvelope::from_value).collect()
    }

    fn order(customer: Value, phone: Value, sum: Value) -> Value {
        json!({ "order": { "customer": customer, "phone": phone, "sum": sum } })
    }

    #[test]
    fn test_reference_example() {
        let orders = envelopes(vec![
            order(json!({}), json!("+380501234567"), json!(100)),
            order(json!({}), json!("+380501234567"), json!(0)),
            order(Value::Null, json!("+380991112223"), json!(50)),
        ]);

        let summary = summarize(&orders);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.no_customer_data, 1);
        assert_eq!(summary.no_phone, 0);
        assert_eq!(summary.invalid_phone, 0);
        assert_eq!(summary.zero_amount, 1);
        assert_eq!(
            summary.duplicate_phones,
            BTreeMap::from([("+380501234567".to_string(), 2)])
        );
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary, ValidationSummary::default());
        assert!(summary.is_clean());
    }

    #[test]
    fn test_missing_customer_stops_further_checks() {
        // Invalid phone and zero sum must not be counted once customer is missing
        let orders = envelopes(vec![order(Value::Null, json!("bad"), json!(0))]);

        let summary = summarize(&orders);

        assert_eq!(summary.no_customer_data, 1);
        assert_eq!(summary.invalid_phone, 0);
        assert_eq!(summary.zero_amount, 0);
        assert!(summary.duplicate_phones.is_empty());
    }

    #[test]
    fn test_missing_or_empty_phone_stops_further_checks() {
        let orders = envelopes(vec![
            order(json!({}), Value::Null, json!(0)),
            order(json!({}), json!(""), json!(0)),
            json!({ "order": { "customer": {}, "sum": 0 } }),
        ]);

        let summary = summarize(&orders);

        assert_eq!(summary.no_phone, 3);
        assert_eq!(summary.zero_amount, 0);
        assert_eq!(summary.with_phone, 0);
    }

    #[test]
    fn test_invalid_phone_does_not_stop_amount_check() {
        let orders = envelopes(vec![order(json!({}), json!("+380440000001"), json!(0))]);

        let summary = summarize(&orders);

        assert_eq!(summary.invalid_phone, 1);
        assert_eq!(summary.zero_amount, 1);
    }

    #[test]
    fn test_invalid_phones_count_toward_duplicates() {
        let orders = envelopes(vec![
            order(json!({}), json!("12345"), json!(10)),
            order(json!({}), json!("12345"), json!(10)),
            order(json!({}), json!("12345"), json!(10)),
            order(json!({}), json!("+380671234567"), json!(10)),
        ]);

        let summary = summarize(&orders);

        assert_eq!(summary.invalid_phone, 3);
        assert_eq!(
            summary.duplicate_phones,
            BTreeMap::from([("12345".to_string(), 3)])
        );
    }

    #[test]
    fn test_duplicates_ignore_orders_without_customer() {
        let orders = envelopes(vec![
            order(json!({}), json!("+380671234567"), json!(10)),
            order(Value::Null, json!("+380671234567"), json!(10)),
        ]);

        assert!(summarize(&orders).duplicate_phones.is_empty());
    }

    #[test]
    fn test_missing_sum_reads_as_zero() {
        let orders = envelopes(vec![
            json!({ "order": { "customer": {}, "phone": "+380671234567" } }),
            order(json!({}), json!("+380671234568"), json!(0.0)),
            order(json!({}), json!("+380671234569"), json!(0.01)),
        ]);

        assert_eq!(summarize(&orders).zero_amount, 2);
    }

    #[test]
    fn test_wrongly_typed_fields_are_treated_as_missing() {
        let orders = envelopes(vec![
            order(json!("vip"), json!("+380671234567"), json!(10)),
            order(json!({}), json!(380671234567u64), json!(10)),
            order(json!({}), json!("+380671234567"), json!("10")),
        ]);

        let summary = summarize(&orders);

        assert_eq!(summary.no_customer_data, 1);
        assert_eq!(summary.no_phone, 1);
        assert_eq!(summary.zero_amount, 1);
    }

    #[test]
    fn test_total_includes_envelopes_without_order() {
        // total counts every envelope handed in, even ones skipped for lacking an order
        let orders = envelopes(vec![
            json!({ "id": "no-order" }),
            json!({ "order": null }),
            json!("not an object"),
            order(json!({}), json!("+380671234567"), json!(10)),
        ]);

        let summary = summarize(&orders);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.categorized(), 1);
        assert_eq!(summary.total, summary.skipped + summary.categorized());
    }

    #[test]
    fn test_empty_order_object_is_present() {
        // An order object without fields has no customer
        let orders = envelopes(vec![json!({ "order": {} })]);

        let summary = summarize(&orders);

        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.no_customer_data, 1);
    }

    #[test]
    fn test_order_of_input_does_not_change_counts() {
        let mut orders = envelopes(vec![
            order(json!({}), json!("+380501234567"), json!(100)),
            order(json!({}), json!("+380501234567"), json!(0)),
            order(Value::Null, json!("+380991112223"), json!(50)),
            order(json!({}), json!("+380930000000"), json!(5)),
            order(json!({}), Value::Null, json!(5)),
            order(json!({}), json!("+380930000000"), json!(0)),
            json!({}),
        ]);

        let forward = summarize(&orders);
        orders.reverse();
        let reversed = summarize(&orders);
        orders.rotate_left(3);
        let rotated = summarize(&orders);

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
        assert_eq!(forward.duplicate_phones.len(), 2);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let orders = envelopes(vec![
            order(json!({}), json!("+380501234567"), json!(100)),
            order(json!({}), json!("+380501234567"), json!(0)),
        ]);

        assert_eq!(summarize(&orders), summarize(&orders));
    }

    #[test]
    fn test_is_clean() {
        let orders = envelopes(vec![
            order(json!({}), json!("+380501234567"), json!(100)),
            order(json!({}), json!("+380671234567"), json!(80)),
        ]);

        let summary = summarize(&orders);

        assert!(summary.is_clean());
        assert_eq!(summary.with_phone, 2);
    }

    #[test]
    fn test_envelopes_without_order_are_not_clean() {
        let orders = envelopes(vec![json!({ "id": "a" }), json!({ "order": null })]);

        let summary = summarize(&orders);

        assert_eq!(summary.skipped, 2);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(summarize(&[])).unwrap();
        assert!(value.get("noCustomerData").is_some());
        assert!(value.get("duplicatePhones").is_some());
    }
}
