use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::Ipv6Route;

/// IPv6 settings for the tunnel interface.
///
/// A snapshot taken once per session; a new session produces a new value. Routes are not part of it, see [`crate::network_config::Ipv6NetworkConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Settings {
    address: String,
    address_prefix_length: u8,
    default_gateway: String,
}

impl Ipv6Settings {
    pub fn new(address: impl Into<String>, address_prefix_length: u8, default_gateway: impl Into<String>) -> Self {
        Self { address: address.into(), address_prefix_length, default_gateway: default_gateway.into() }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_prefix_length(&self) -> u8 {
        self.address_prefix_length
    }

    pub fn default_gateway(&self) -> &str {
        &self.default_gateway
    }

    /// Gateway that traffic for `route` should use.
    pub fn gateway_for<'a>(&'a self, route: &'a Ipv6Route) -> &'a str {
        route.gateway_or(&self.default_gateway)
    }
}

// Addresses are shown in the clear here, only routes are masked.
impl fmt::Display for Ipv6Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "addr {}/{} gw {}", self.address, self.address_prefix_length, self.default_gateway)
    }
}
