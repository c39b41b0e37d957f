use anyhow::Context;
use tracing_subscriber::{
    Layer, Registry,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt as _,
    registry,
};

// `EnvFilter` doesn't impl `Clone`
fn filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into())
}

/// Installs `base_layer` as the global subscriber. Fails if a global subscriber is already set.
pub fn init(base_layer: impl Layer<Registry> + Send + Sync) -> anyhow::Result<()> {
    let registry = registry().with(base_layer.with_filter(filter()));
    tracing::subscriber::set_global_default(registry).context("failed to set global subscriber")?;
    tracing::info!(message_id = "k2Wd9xQo", "logging initialized");
    Ok(())
}
