//! Render route commands.

use crate::error::{Result, RoutesError};
use crate::models::Ipv4Cidr;
use std::net::Ipv4Addr;

/// Next hop written into every command.
pub const ROUTE_GATEWAY: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// Turn one CIDR string into `route ADD <network> MASK <netmask> 0.0.0.0`.
///
/// Host bits are cleared from the address. IPv6 input is an error.
///
/// # Examples
/// ```
/// use goog_routes::processing::format_route;
/// assert_eq!(
///     format_route("192.168.1.0/24").unwrap(),
///     "route ADD 192.168.1.0 MASK 255.255.255.0 0.0.0.0"
/// );
/// ```
pub fn format_route(cidr: &str) -> Result<String> {
    let parsed = Ipv4Cidr::new(cidr).map_err(|source| RoutesError::InvalidCidr {
        cidr: cidr.to_string(),
        source,
    })?;
    Ok(format!(
        "route ADD {network} MASK {netmask} {gateway}",
        network = parsed.network(),
        netmask = parsed.netmask(),
        gateway = ROUTE_GATEWAY,
    ))
}
