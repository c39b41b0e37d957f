use std::fmt;
use std::net::Ipv6Addr;

use ipnetwork::Ipv6Network;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROUTE_PREFIX_LENGTH;
use crate::errors::RouteParseError;
use crate::mask::{AddressMask, MaskPolicy};

/// One entry of the tunnel's IPv6 routing table.
///
/// Address text is stored verbatim. Nothing is validated here, malformed values only fail once a consumer interprets them (see [`Ipv6Route::to_network`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Route {
    destination: String,
    prefix_length: u8,
    /// Falls back to the default gateway of the settings this route is applied with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gateway: Option<String>,
}

impl Ipv6Route {
    pub fn new(destination: impl Into<String>, prefix_length: Option<u8>, gateway: Option<String>) -> Self {
        Self {
            destination: destination.into(),
            prefix_length: prefix_length.unwrap_or(DEFAULT_ROUTE_PREFIX_LENGTH),
            gateway,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    pub fn gateway_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.gateway.as_deref().unwrap_or(fallback)
    }

    /// Renders the route with `mask` applied to the destination and gateway.
    pub fn masked<'a, M: AddressMask + ?Sized>(&'a self, mask: &'a M) -> MaskedRoute<'a, M> {
        MaskedRoute { route: self, mask }
    }

    pub fn to_network(&self) -> Result<Ipv6Network, RouteParseError> {
        let ip: Ipv6Addr = self.destination.parse().map_err(|_| RouteParseError::Destination)?;
        Ipv6Network::new(ip, self.prefix_length).map_err(|_| RouteParseError::PrefixLength(self.prefix_length))
    }

    pub fn gateway_addr(&self) -> Result<Option<Ipv6Addr>, RouteParseError> {
        self.gateway.as_deref().map(str::parse::<Ipv6Addr>).transpose().map_err(|_| RouteParseError::Gateway)
    }
}

impl fmt::Display for Ipv6Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.masked(&MaskPolicy::default()), f)
    }
}

pub struct MaskedRoute<'a, M: ?Sized> {
    route: &'a Ipv6Route,
    mask: &'a M,
}

impl<M: AddressMask + ?Sized> fmt::Display for MaskedRoute<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ipv6Route { destination, prefix_length, gateway } = self.route;
        let destination = self.mask.mask(destination);
        match gateway {
            Some(gateway) => write!(f, "{{{destination}/{prefix_length} {}}}", self.mask.mask(gateway)),
            None => write!(f, "{{{destination}/{prefix_length} *}}"),
        }
    }
}
