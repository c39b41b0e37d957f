// This file contains constants, which may need to be updated at some point

/// Substituted when a route is constructed without a prefix length. Kept at 3 to match the values already produced by existing configuration sources, even though 128 (host) or 0 (default route) would be the natural choice.
pub const DEFAULT_ROUTE_PREFIX_LENGTH: u8 = 3;

pub const REDACTED_ADDRESS: &str = "<masked>";

/// Number of hex characters of the SHA-256 digest shown by `MaskPolicy::Digest`.
pub const DIGEST_MASK_HEX_LEN: usize = 8;
