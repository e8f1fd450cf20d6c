//! Combine published and extra prefixes.

use crate::models::RangeDocument;

/// IPv4 prefixes of the document in published order. IPv6-only records are skipped.
pub fn ipv4_prefixes(doc: &RangeDocument) -> Vec<String> {
    doc.prefixes
        .iter()
        .filter_map(|p| p.ipv4())
        .map(str::to_string)
        .collect()
}

/// Published prefixes followed by extras. No dedup, sort or validation.
pub fn merge_prefixes(ipv4: Vec<String>, extras: Vec<String>) -> Vec<String> {
    let mut combined = ipv4;
    combined.extend(extras);
    combined
}
