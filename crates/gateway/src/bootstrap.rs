//! AppState construction extracted from `main.rs`.
//!
//! `serve` and the `providers` CLI command share this boot path so both see
//! exactly the registry the server would run with.

use std::sync::Arc;

use pool_domain::config::{Config, ConfigSeverity};
use pool_providers::ProviderRegistry;

use crate::state::AppState;

/// Log every config issue and fail if any of them is an error.
pub fn check_config(config: &Config) -> anyhow::Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("config validation failed with {errors} error(s)");
    }
    Ok(())
}

/// Build the provider registry from `[providers]`.
pub fn build_registry(config: &Config) -> Arc<ProviderRegistry> {
    let registry = ProviderRegistry::from_config(&config.providers);
    tracing::info!(
        providers = registry.len(),
        names = ?registry.names(),
        "provider registry ready"
    );
    Arc::new(registry)
}

/// Validate config, build the registry, and return a fully-wired
/// [`AppState`]. The registry is frozen before any route is installed.
pub fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    check_config(&config)?;
    let registry = build_registry(&config);
    Ok(AppState::new(config, registry))
}
