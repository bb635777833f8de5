use std::sync::Arc;

use pool_domain::config::Config;
use pool_providers::ProviderRegistry;

use crate::dispatch::{Dispatch, Dispatcher};

/// Shared application state passed to all API handlers.
///
/// Everything here is immutable after startup; cloning is a handful of
/// reference-count bumps.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Registered providers. Also drives route installation.
    pub registry: Arc<ProviderRegistry>,
    /// The single translation point between adapters and providers.
    pub dispatcher: Arc<dyn Dispatch>,
}

impl AppState {
    /// State backed by the real [`Dispatcher`] over `registry`.
    pub fn new(config: Arc<Config>, registry: Arc<ProviderRegistry>) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(registry.clone()));
        Self {
            config,
            registry,
            dispatcher,
        }
    }

    /// Swap in a different dispatcher (tests use a recording one).
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn Dispatch>) -> Self {
        self.dispatcher = dispatcher;
        self
    }
}
