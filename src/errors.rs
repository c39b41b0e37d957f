use thiserror::Error;

// Messages never include the address text itself.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RouteParseError {
    #[error("route destination is not an ipv6 address")]
    Destination,
    #[error("route gateway is not an ipv6 address")]
    Gateway,
    #[error("route prefix length {0} out of range")]
    PrefixLength(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NetworkConfigError {
    #[error("interface address is not an ipv6 address")]
    InvalidAddress,
    #[error("interface address prefix length {0} out of range")]
    InvalidPrefixLength(u8),
    #[error("default gateway is not an ipv6 address")]
    InvalidDefaultGateway,
    #[error("route {index}: {source}")]
    InvalidRoute {
        index: usize,
        #[source]
        source: RouteParseError,
    },
}
