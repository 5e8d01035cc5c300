//! Provider registry: maps provider names to factory functions.
//!
//! The built-in table is an explicit initialization list (`builtin_providers`),
//! not a set of registration side effects. The global registry is initialized
//! once on first access with `OnceLock` and is immutable thereafter; callers
//! wanting a different set of providers build their own `ProviderRegistry`.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::translator::{ProviderOptions, TranslateError, Translator};
use crate::yandex;

/// Builds a provider instance from its options.
pub type ProviderFactory = fn(&ProviderOptions) -> Result<Box<dyn Translator>, TranslateError>;

/// Name-to-factory table of translation providers.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<(&'static str, ProviderFactory)>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global registry, populated with the built-in providers.
    pub fn get() -> &'static ProviderRegistry {
        REGISTRY.get_or_init(|| ProviderRegistry {
            providers: builtin_providers(),
        })
    }

    /// Add a provider under `name`.
    ///
    /// # Errors
    /// `DuplicateProvider` if the name is already taken; the existing entry is kept.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: ProviderFactory,
    ) -> Result<(), TranslateError> {
        if self.contains(name) {
            return Err(TranslateError::DuplicateProvider(name.to_string()));
        }
        self.providers.push((name, factory));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.iter().any(|(key, _)| *key == name)
    }

    /// Registered provider names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|(key, _)| *key).collect()
    }

    /// Create a provider instance by name.
    ///
    /// # Arguments
    /// * `name` - Registry key of the provider (e.g., "yandex")
    /// * `options` - Provider options, validated by the provider's factory
    ///
    /// # Returns
    /// * `Ok(Box<dyn Translator>)` ready to use
    /// * `Err(TranslateError::UnknownProvider)` for an unregistered name
    /// * `Err(TranslateError::Config)` when the factory rejects the options
    pub fn create(
        &self,
        name: &str,
        options: &ProviderOptions,
    ) -> Result<Box<dyn Translator>, TranslateError> {
        let factory = self
            .providers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, factory)| *factory)
            .ok_or_else(|| TranslateError::UnknownProvider(name.to_string()))?;

        debug!("Creating translation provider '{}'", name);
        factory(options)
    }
}

/// Providers compiled into this crate.
fn builtin_providers() -> Vec<(&'static str, ProviderFactory)> {
    vec![(yandex::PROVIDER_CODE, yandex::new_instance as ProviderFactory)]
}
