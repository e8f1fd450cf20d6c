//! Domain models for the route generator.
//!
//! - [`Ipv4Cidr`] - IPv4 address with prefix length
//! - [`RangeDocument`] and [`PrefixRecord`] - the published range list

mod ipv4;
mod ranges;

// Re-export public types
pub use ipv4::{cut_addr, get_cidr_mask, Ipv4Cidr, MAX_LENGTH};
pub use ranges::{PrefixRecord, RangeDocument};
