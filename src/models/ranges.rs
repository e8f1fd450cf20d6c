//! Published IP range document.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of `creationTime`, e.g. "2024-05-02T23:45:01.456789".
const CREATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The decoded `goog.json` body.
///
/// Missing fields decode to their defaults; a field of the wrong JSON type is
/// a decode error.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeDocument {
    /// Opaque version token of the published list.
    #[serde(default)]
    pub sync_token: String,
    /// Publication timestamp, as published.
    #[serde(default)]
    pub creation_time: String,
    /// Range records in published order.
    #[serde(default)]
    pub prefixes: Vec<PrefixRecord>,
}

/// One published range. Normally exactly one of the two fields is set.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    #[serde(rename = "ipv4Prefix", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_prefix: Option<String>,
    #[serde(rename = "ipv6Prefix", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_prefix: Option<String>,
}

impl RangeDocument {
    /// Parsed `creationTime`, or `None` when it is missing or in another format.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.creation_time, CREATION_TIME_FORMAT).ok()
    }
}

impl PrefixRecord {
    /// The IPv4 prefix, treating an empty string as absent.
    pub fn ipv4(&self) -> Option<&str> {
        self.ipv4_prefix.as_deref().filter(|p| !p.is_empty())
    }
}
