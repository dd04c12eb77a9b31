use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ServiceError;
use super::trade_name::{HeuristicTradeNameChecker, TradeNameChecker};

/// Trade-name service configuration.
///
/// `backend` must match the [`TradeNameCheckerFactory::backend_name`] of a
/// registered factory. `endpoint` and `timeout_secs` only matter to
/// backends that talk to a remote service.
///
/// | backend | endpoint                          |
/// |---------|-----------------------------------|
/// | `mock`  | ignored                           |
/// | `http`  | `http://localhost:8000/tradename` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"mock"`).
    pub backend: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: "mock".to_string(),
            endpoint: "http://localhost:8000/tradename".to_string(),
            timeout_secs: 10,
        }
    }
}

/// One implementation per trade-name backend, registered with a
/// [`CheckerRegistry`] at startup.
pub trait TradeNameCheckerFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn TradeNameChecker>, ServiceError>;
}

/// Builds the offline [`HeuristicTradeNameChecker`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCheckerFactory;

impl TradeNameCheckerFactory for HeuristicCheckerFactory {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    fn create(
        &self,
        _config: &ServiceConfig,
    ) -> Result<Box<dyn TradeNameChecker>, ServiceError> {
        Ok(Box::new(HeuristicTradeNameChecker))
    }
}

/// Registry of [`TradeNameCheckerFactory`] instances, keyed by backend name.
pub struct CheckerRegistry {
    factories: HashMap<&'static str, Box<dyn TradeNameCheckerFactory>>,
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry that already knows the offline `mock` backend.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HeuristicCheckerFactory));
        registry
    }

    /// Registers a backend factory, replacing any factory with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn TradeNameCheckerFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`ServiceError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn TradeNameChecker>, ServiceError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ServiceError::Configuration(format!(
                    "unknown trade name backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
