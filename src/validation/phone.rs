//! Ukrainian mobile phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Mobile operator codes accepted after the `+380` country code
pub const OPERATOR_CODES: [&str; 15] = [
    "39", "50", "63", "66", "67", "68", "73", "91", "92", "93", "95", "96", "97", "98", "99",
];

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^\+380(?:{})([0-9]{{7}})$", OPERATOR_CODES.join("|"));
    Regex::new(&pattern).expect("phone pattern is a valid regex")
});

/// Check `+380<operator><7 digits>`, rejecting subscriber numbers made of one repeated digit.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN
        .captures(phone)
        .and_then(|caps| caps.get(1))
        .is_some_and(|subscriber| !is_repeated_digit(subscriber.as_str()))
}

fn is_repeated_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
