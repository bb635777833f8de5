//! Provider registry.
//!
//! Holds every provider instance the gateway serves, keyed by name. The
//! registry is assembled once at startup through [`RegistryBuilder`] and is
//! read-only afterwards: there is no way to add or remove a provider from a
//! built [`ProviderRegistry`].

use std::collections::BTreeMap;
use std::sync::Arc;

use pool_domain::config::ProvidersConfig;

use crate::convex::ConvexProvider;
use crate::material_ui::MaterialUiProvider;
use crate::traits::Provider;

/// Errors raised while building or querying the registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("provider '{0}' is already registered")]
    Duplicate(String),
    #[error("invalid provider name '{0}': must be non-empty and contain only [a-z0-9_-]")]
    InvalidName(String),
    #[error("MCP '{0}' not found")]
    NotFound(String),
}

/// Instantiate a built-in provider by name.
pub fn builtin(name: &str) -> Option<Arc<dyn Provider>> {
    match name {
        "convex" => Some(Arc::new(ConvexProvider::new())),
        "material-ui" => Some(Arc::new(MaterialUiProvider::new())),
        _ => None,
    }
}

/// Provider names double as URL path segments.
fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RegistryBuilder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Mutable staging area for a [`ProviderRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    providers: BTreeMap<String, Arc<dyn Provider>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name`. Fails if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn Provider>,
    ) -> Result<&mut Self, RegistryError> {
        let name = name.into();
        if !valid_name(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        if self.providers.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.providers.insert(name, provider);
        Ok(self)
    }

    /// Freeze the registry.
    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            providers: self.providers,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ProviderRegistry
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable name → provider mapping shared by all request handlers.
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build the registry from the `[providers]` config section.
    ///
    /// Unknown or duplicate names are logged and skipped rather than
    /// aborting startup.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let mut builder = Self::builder();

        for name in &config.enabled {
            let Some(provider) = builtin(name) else {
                tracing::warn!(provider = %name, "unknown provider in config, skipping");
                continue;
            };

            match builder.register(name.clone(), provider) {
                Ok(_) => tracing::info!(provider = %name, "registered provider"),
                Err(e) => tracing::warn!(provider = %name, error = %e, "skipping provider"),
            }
        }

        let registry = builder.build();
        if registry.is_empty() {
            tracing::warn!("no providers registered; only process-wide routes will be served");
        }
        registry
    }

    /// Look up a provider by name. Never constructs one lazily.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Provider>, RegistryError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// All registered provider names (sorted).
    pub fn names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Iterate over all registered providers in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn Provider>)> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut builder = ProviderRegistry::builder();
        builder
            .register("convex", builtin("convex").unwrap())
            .unwrap();
        let registry = builder.build();
        assert!(registry.get("convex").is_ok());
        assert_eq!(
            registry.get("missing").err(),
            Some(RegistryError::NotFound("missing".into()))
        );
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut builder = ProviderRegistry::builder();
        builder.register("convex", builtin("convex").unwrap()).unwrap();
        let err = builder
            .register("convex", builtin("convex").unwrap())
            .err()
            .unwrap();
        assert_eq!(err, RegistryError::Duplicate("convex".into()));
    }

    #[test]
    fn names_must_be_path_safe() {
        let mut builder = ProviderRegistry::builder();
        for bad in ["", "has space", "a/b", "Upper"] {
            assert!(matches!(
                builder.register(bad, builtin("convex").unwrap()),
                Err(RegistryError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn names_are_sorted() {
        let mut builder = ProviderRegistry::builder();
        builder.register("material-ui", builtin("material-ui").unwrap()).unwrap();
        builder.register("convex", builtin("convex").unwrap()).unwrap();
        assert_eq!(builder.build().names(), vec!["convex", "material-ui"]);
    }

    #[test]
    fn from_config_skips_unknown_and_duplicates() {
        let config = ProvidersConfig {
            enabled: vec!["convex".into(), "stripe".into(), "convex".into()],
        };
        let registry = ProviderRegistry::from_config(&config);
        assert_eq!(registry.names(), vec!["convex"]);
    }

    #[test]
    fn default_config_registers_all_builtins() {
        let registry = ProviderRegistry::from_config(&ProvidersConfig::default());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("material-ui"));
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(builtin("stripe").is_none());
    }
}
