use std::net::Ipv6Addr;

use ipnetwork::Ipv6Network;
use serde::{Deserialize, Serialize};

use crate::errors::NetworkConfigError;
use crate::mask::AddressMask;
use crate::route::Ipv6Route;
use crate::settings::Ipv6Settings;

/// Settings and routes as handed to the interface configurator. Equality of `settings` does not depend on the routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6NetworkConfig {
    pub settings: Ipv6Settings,
    #[serde(default)]
    pub routes: Vec<Ipv6Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIpv6Config {
    pub address: Ipv6Network,
    pub default_gateway: Ipv6Addr,
    pub routes: Vec<ResolvedIpv6Route>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedIpv6Route {
    pub network: Ipv6Network,
    pub gateway: Ipv6Addr,
}

impl Ipv6NetworkConfig {
    pub fn new(settings: Ipv6Settings, routes: impl IntoIterator<Item = Ipv6Route>) -> Self {
        Self { settings, routes: routes.into_iter().collect() }
    }

    /// Optional helper for the interface configurator: parses all address text and applies the default gateway to routes without their own.
    ///
    /// Not part of the value contract, constructing or decoding settings and routes never validates them.
    pub fn resolve(&self) -> Result<ResolvedIpv6Config, NetworkConfigError> {
        let settings = &self.settings;
        let ip: Ipv6Addr = settings.address().parse().map_err(|_| NetworkConfigError::InvalidAddress)?;
        let prefix_length = settings.address_prefix_length();
        let address = Ipv6Network::new(ip, prefix_length).map_err(|_| NetworkConfigError::InvalidPrefixLength(prefix_length))?;
        let default_gateway: Ipv6Addr = settings.default_gateway().parse().map_err(|_| NetworkConfigError::InvalidDefaultGateway)?;

        let routes = self
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let network = route.to_network().map_err(|source| NetworkConfigError::InvalidRoute { index, source })?;
                let gateway = route.gateway_addr().map_err(|source| NetworkConfigError::InvalidRoute { index, source })?;
                Ok(ResolvedIpv6Route { network, gateway: gateway.unwrap_or(default_gateway) })
            })
            .collect::<Result<Vec<_>, NetworkConfigError>>()?;

        Ok(ResolvedIpv6Config { address, default_gateway, routes })
    }

    pub fn log_summary<M: AddressMask + ?Sized>(&self, mask: &M) {
        tracing::info!(message_id = "Hb3uLw8c", route_count = self.routes.len(), "ipv6 settings: {}", self.settings);
        for (index, route) in self.routes.iter().enumerate() {
            tracing::debug!(message_id = "pZ6nYf1s", index, "ipv6 route: {}", route.masked(mask));
        }
    }
}
