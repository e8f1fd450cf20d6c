//! Prefix processing.
//!
//! - [`merge`] - published IPv4 prefixes followed by extras
//! - [`route`] - CIDR to route command

mod merge;
mod route;

pub use merge::{ipv4_prefixes, merge_prefixes};
pub use route::{format_route, ROUTE_GATEWAY};
