use std::borrow::Cow;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use strum::{EnumIs, IntoStaticStr};

use crate::constants::{DIGEST_MASK_HEX_LEN, REDACTED_ADDRESS};

/// Turns address text into the form that may appear in logs.
///
/// Implementations must be pure: the same input always yields the same output and no state is kept between calls.
pub trait AddressMask: Send + Sync {
    fn mask<'a>(&self, address: &'a str) -> Cow<'a, str>;
}

impl<F> AddressMask for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn mask<'a>(&self, address: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(address))
    }
}

#[derive(Clone, Copy, Debug, Default, EnumIs, IntoStaticStr, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MaskPolicy {
    /// Replace every address with a fixed marker.
    #[default]
    Redact,
    /// Replace every address with a short SHA-256 prefix, so repeated addresses can be correlated across log lines.
    Digest,
    /// Show addresses as is. Only meant for local debugging.
    Plain,
}

impl MaskPolicy {
    pub fn as_static_str(&self) -> &'static str {
        self.into()
    }
}

impl AddressMask for MaskPolicy {
    fn mask<'a>(&self, address: &'a str) -> Cow<'a, str> {
        match self {
            MaskPolicy::Redact => Cow::Borrowed(REDACTED_ADDRESS),
            MaskPolicy::Digest => Cow::Owned(digest(address)),
            MaskPolicy::Plain => Cow::Borrowed(address),
        }
    }
}

fn digest(address: &str) -> String {
    let hash = ring::digest::digest(&ring::digest::SHA256, address.as_bytes());
    let mut out = String::with_capacity(DIGEST_MASK_HEX_LEN + 2);
    out.push('<');
    for byte in hash.as_ref().iter().take(DIGEST_MASK_HEX_LEN / 2) {
        // writing to a String can't fail
        let _ = write!(out, "{byte:02x}");
    }
    out.push('>');
    out
}
