//! Method ordering shared by every chart.

use std::collections::HashSet;

/// Order method labels for display.
///
/// Labels listed in `canonical` come first, in canonical order, but only if
/// they occur in `labels`. Every other label follows in first-seen order.
/// Empty labels are dropped.
pub fn order_methods<'a, I, S>(labels: I, canonical: &[S]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut encountered = Vec::new();
    for label in labels {
        if !label.is_empty() && seen.insert(label) {
            encountered.push(label);
        }
    }

    let mut ordered: Vec<String> = Vec::with_capacity(encountered.len());
    for name in canonical {
        let name = name.as_ref();
        if seen.contains(name) && !ordered.iter().any(|m| m == name) {
            ordered.push(name.to_string());
        }
    }
    for label in encountered {
        if !ordered.iter().any(|m| m == label) {
            ordered.push(label.to_string());
        }
    }

    ordered
}
