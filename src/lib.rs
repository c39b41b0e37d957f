pub mod constants;
pub mod errors;
pub mod logging;
pub mod mask;
pub mod network_config;
pub mod route;
pub mod settings;

#[cfg(test)]
mod logging_test;
#[cfg(test)]
mod settings_test;

pub use mask::{AddressMask, MaskPolicy};
pub use network_config::Ipv6NetworkConfig;
pub use route::Ipv6Route;
pub use settings::Ipv6Settings;

static_assertions::assert_impl_all!(Ipv6Route: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::assert_impl_all!(Ipv6Settings: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::assert_impl_all!(MaskPolicy: AddressMask, Copy);
