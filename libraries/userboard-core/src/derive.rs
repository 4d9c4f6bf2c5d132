//! Column derivations and frequency counts.

use crate::types::ValueCount;
use std::collections::HashMap;

/// Label used when a value cannot be derived (no domain, no company, no city).
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Extract the domain of an email address: the text after its `@`.
///
/// Returns `None` unless the address holds exactly one `@` followed by a
/// non-empty part.
///
/// ```rust
/// use userboard_core::email_domain;
///
/// assert_eq!(email_domain("Sincere@april.biz"), Some("april.biz"));
/// assert_eq!(email_domain("no-at-sign"), None);
/// ```
pub fn email_domain(email: &str) -> Option<&str> {
    let (_, domain) = email.split_once('@')?;
    if domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(domain)
}

/// Domain of `email`, or [`UNKNOWN_DOMAIN`].
pub fn domain_or_fallback(email: &str) -> String {
    email_domain(email).unwrap_or(UNKNOWN_DOMAIN).to_string()
}

/// Length of `s` in characters.
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Frequency table of `values`.
///
/// Sorted by count descending, then by value ascending, so equal inputs
/// always render the same chart.
pub fn value_counts<I, S>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.as_ref().to_string()).or_insert(0) += 1;
    }

    let mut table: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    table
}
